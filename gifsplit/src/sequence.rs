// sequence.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Decoded animation frames
use pix::{rgb::SRgba8, Raster};

/// Disposal directive for an animation frame.
///
/// Describes how the canvas is treated after the frame is displayed, before
/// the next frame is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disposal {
    /// Leave the frame in place
    None,
    /// Clear the frame area to the background
    RestoreBackground,
    /// Restore the canvas to its state before the frame was drawn
    RestorePrevious,
    /// No directive given
    #[default]
    Unspecified,
}

impl From<gif::DisposalMethod> for Disposal {
    fn from(method: gif::DisposalMethod) -> Self {
        match method {
            gif::DisposalMethod::Keep => Disposal::None,
            gif::DisposalMethod::Background => Disposal::RestoreBackground,
            gif::DisposalMethod::Previous => Disposal::RestorePrevious,
            gif::DisposalMethod::Any => Disposal::Unspecified,
        }
    }
}

impl Disposal {
    /// Get a short label for display
    pub fn label(self) -> &'static str {
        match self {
            Disposal::None => "keep",
            Disposal::RestoreBackground => "bg",
            Disposal::RestorePrevious => "prev",
            Disposal::Unspecified => "-",
        }
    }
}

/// One decoded frame of an animation.
///
/// The raster covers only the frame's own rectangle, which is placed on the
/// canvas at its offset.
pub struct AnimationFrame {
    /// Sub-image pixels
    raster: Raster<SRgba8>,
    /// Left offset on the logical screen
    left: u32,
    /// Top offset on the logical screen
    top: u32,
    /// Disposal directive
    disposal: Disposal,
    /// Delay time in centiseconds
    delay_time_cs: u16,
}

impl AnimationFrame {
    /// Create a frame at the canvas origin.
    pub fn new(raster: Raster<SRgba8>) -> Self {
        AnimationFrame {
            raster,
            left: 0,
            top: 0,
            disposal: Disposal::default(),
            delay_time_cs: 0,
        }
    }

    /// Adjust the canvas offset.
    pub fn with_offset(mut self, left: u32, top: u32) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    /// Adjust the disposal directive.
    pub fn with_disposal(mut self, disposal: Disposal) -> Self {
        self.disposal = disposal;
        self
    }

    /// Adjust the delay time.
    pub fn with_delay_time_cs(mut self, delay: u16) -> Self {
        self.delay_time_cs = delay;
        self
    }

    /// Get the sub-image raster
    pub fn raster(&self) -> &Raster<SRgba8> {
        &self.raster
    }

    /// Get the left offset
    pub fn left(&self) -> u32 {
        self.left
    }

    /// Get the top offset
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Get the sub-image width
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Get the sub-image height
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Get the disposal directive
    pub fn disposal(&self) -> Disposal {
        self.disposal
    }

    /// Get the delay time in centiseconds
    pub fn delay_time_cs(&self) -> u16 {
        self.delay_time_cs
    }
}

/// Ordered frames sharing one canvas.
pub struct AnimationSequence {
    width: u32,
    height: u32,
    frames: Vec<AnimationFrame>,
}

impl AnimationSequence {
    /// Create an empty sequence with logical screen bounds.
    pub fn new(width: u32, height: u32) -> Self {
        AnimationSequence {
            width,
            height,
            frames: vec![],
        }
    }

    /// Append a frame.
    pub fn push(&mut self, frame: AnimationFrame) {
        self.frames.push(frame);
    }

    /// Add a frame (builder style).
    pub fn with_frame(mut self, frame: AnimationFrame) -> Self {
        self.push(frame);
        self
    }

    /// Get the logical screen width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the logical screen height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the frames
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Get one frame
    pub fn frame(&self, index: usize) -> Option<&AnimationFrame> {
        self.frames.get(index)
    }

    /// Get the number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if there are no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
