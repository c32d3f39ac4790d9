// compose.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Frame compositing
use crate::error::{Error, Result};
use crate::sequence::{AnimationFrame, AnimationSequence, Disposal};
use pix::chan::Ch8;
use pix::el::Pixel;
use pix::rgb::SRgba8;
use pix::{Raster, Region};

/// Handling of frame disposal directives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisposalMode {
    /// Every frame is painted over the accumulated canvas, ignoring its
    /// disposal directive
    #[default]
    PaintOver,
    /// Disposal directives are applied before the next frame is drawn
    Accurate,
}

/// Copy a raster
fn copy_raster(raster: &Raster<SRgba8>) -> Raster<SRgba8> {
    // pix row iterators panic on zero-width rasters
    if raster.width() == 0 {
        Raster::with_clear(0, raster.height())
    } else {
        Raster::with_raster(raster)
    }
}

/// Blend one straight-alpha pixel over another
fn blend_over(dst: &mut SRgba8, src: SRgba8) {
    match u8::from(src.alpha()) {
        0 => (),
        255 => *dst = src,
        sa => {
            let sa = u32::from(sa);
            let da = u32::from(u8::from(dst.alpha())) * (255 - sa);
            // output alpha, scaled by 255
            let oa = sa * 255 + da;
            let chan = dst.channels_mut();
            for (c, s) in src.channels()[..3].iter().enumerate() {
                let v = u32::from(u8::from(*s)) * sa * 255
                    + u32::from(u8::from(chan[c])) * da;
                chan[c] = Ch8::from(((v + oa / 2) / oa) as u8);
            }
            chan[3] = Ch8::from(((oa + 127) / 255) as u8);
        }
    }
}

/// Convert a frame offset to a signed coordinate
fn coord(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Accumulated canvas state
///
/// The canvas covers the bounds of the first frame; later frames are placed
/// relative to its offset.
struct Canvas {
    raster: Raster<SRgba8>,
    /// Offset of the first frame
    origin: (i32, i32),
    mode: DisposalMode,
    /// Pending disposal of the last drawn frame
    pending: Option<(Disposal, Region)>,
    /// Canvas saved before a `RestorePrevious` frame
    saved: Option<Raster<SRgba8>>,
}

impl Canvas {
    /// Create a transparent canvas over the bounds of a frame
    fn new(first: &AnimationFrame, mode: DisposalMode) -> Self {
        Canvas {
            raster: Raster::with_clear(first.width(), first.height()),
            origin: (coord(first.left()), coord(first.top())),
            mode,
            pending: None,
            saved: None,
        }
    }

    /// Get the region of a frame on the canvas, clipped to its bounds
    fn region(&self, frame: &AnimationFrame) -> Region {
        let x = coord(frame.left()).saturating_sub(self.origin.0);
        let y = coord(frame.top()).saturating_sub(self.origin.1);
        let reg = Region::new(x, y, frame.width(), frame.height());
        self.raster.intersection(reg)
    }

    /// Apply one frame
    fn apply(&mut self, frame: &AnimationFrame) {
        let reg = self.region(frame);
        if self.mode == DisposalMode::Accurate {
            self.dispose_pending();
            if frame.disposal() == Disposal::RestorePrevious {
                self.saved = Some(copy_raster(&self.raster));
            }
            self.pending = Some((frame.disposal(), reg));
        }
        self.paint_over(frame, reg);
    }

    /// Dispose the last drawn frame
    fn dispose_pending(&mut self) {
        match self.pending.take() {
            Some((Disposal::RestoreBackground, reg)) => {
                self.raster.copy_color(reg, SRgba8::default());
            }
            Some((Disposal::RestorePrevious, _)) => {
                if let Some(saved) = self.saved.take() {
                    self.raster = saved;
                }
            }
            _ => (),
        }
    }

    /// Paint a frame over a region of the canvas
    fn paint_over(&mut self, frame: &AnimationFrame, reg: Region) {
        if reg.width() == 0 || reg.height() == 0 {
            return;
        }
        let x = reg.left() - coord(frame.left()).saturating_sub(self.origin.0);
        let y = reg.top() - coord(frame.top()).saturating_sub(self.origin.1);
        let from = Region::new(x, y, reg.width(), reg.height());
        let srows = frame.raster().rows(from);
        let drows = self.raster.rows_mut(reg);
        for (drow, srow) in drows.zip(srows) {
            for (d, s) in drow.iter_mut().zip(srow) {
                blend_over(d, *s);
            }
        }
    }
}

/// Frame compositor for an animation sequence.
///
/// Reconstructs the visible canvas immediately after a frame is drawn, by
/// replaying every preceding frame.  The canvas is sized to the bounds of the
/// first frame.
///
/// ## Example
/// ```
/// use gifsplit::{AnimationFrame, AnimationSequence, Compositor};
/// use pix::Raster;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let seq = AnimationSequence::new(4, 4)
///     .with_frame(AnimationFrame::new(Raster::with_clear(4, 4)));
/// let raster = Compositor::new(&seq)?.composite(0)?;
/// assert_eq!(raster.width(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct Compositor<'a> {
    seq: &'a AnimationSequence,
    /// First frame, which sets the canvas bounds
    first: &'a AnimationFrame,
    mode: DisposalMode,
}

impl<'a> Compositor<'a> {
    /// Create a compositor for a non-empty sequence.
    pub fn new(seq: &'a AnimationSequence) -> Result<Self> {
        let first = seq.frames().first().ok_or(Error::EmptySequence)?;
        Ok(Compositor {
            seq,
            first,
            mode: DisposalMode::default(),
        })
    }

    /// Adjust the disposal mode.
    pub fn with_disposal_mode(mut self, mode: DisposalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Get the disposal mode
    pub fn disposal_mode(&self) -> DisposalMode {
        self.mode
    }

    /// Check a frame index
    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.seq.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::InvalidIndex { index, len })
        }
    }

    /// Create a blank canvas
    fn canvas(&self) -> Canvas {
        Canvas::new(self.first, self.mode)
    }

    /// Composite the canvas state after one frame.
    ///
    /// Frames `0..=index` are replayed from a transparent canvas.
    pub fn composite(&self, index: usize) -> Result<Raster<SRgba8>> {
        self.check_index(index)?;
        let mut canvas = self.canvas();
        for frame in &self.seq.frames()[..=index] {
            canvas.apply(frame);
        }
        debug!("composited frame {index}");
        Ok(canvas.raster)
    }

    /// Composite several frames in one pass.
    ///
    /// A single running canvas is kept while indices increase; a decreasing
    /// index restarts from the first frame.  Results match
    /// [composite](#method.composite) for every index.
    pub fn snapshots<I>(&self, indices: I) -> Snapshots<'a, I::IntoIter>
    where
        I: IntoIterator<Item = usize>,
    {
        Snapshots {
            compositor: *self,
            canvas: self.canvas(),
            applied: 0,
            indices: indices.into_iter(),
        }
    }
}

/// An `Iterator` of composited snapshots.
///
/// Build with Compositor.[snapshots](struct.Compositor.html#method.snapshots).
pub struct Snapshots<'a, I> {
    compositor: Compositor<'a>,
    canvas: Canvas,
    /// Number of frames applied to the canvas
    applied: usize,
    indices: I,
}

impl<I> Iterator for Snapshots<'_, I>
where
    I: Iterator<Item = usize>,
{
    type Item = Result<(usize, Raster<SRgba8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        if let Err(e) = self.compositor.check_index(index) {
            return Some(Err(e));
        }
        if index < self.applied {
            self.canvas = self.compositor.canvas();
            self.applied = 0;
        }
        for frame in &self.compositor.seq.frames()[self.applied..=index] {
            self.canvas.apply(frame);
        }
        self.applied = index + 1;
        debug!("snapshot frame {index}");
        Some(Ok((index, copy_raster(&self.canvas.raster))))
    }
}
