// extract.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Frame extraction
use crate::compose::{Compositor, DisposalMode};
use crate::encode::encode_png;
use crate::error::Result;
use crate::report::{ExtractReport, FrameRecord};
use crate::select::{frame_name, Stride};
use crate::{AnimationSequence, Decoder};
use std::path::Path;

/// Encoded image data, tagged with its format
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// PNG file data
    Png(Vec<u8>),
}

impl Payload {
    /// Get the encoded data
    pub fn data(&self) -> &[u8] {
        match self {
            Payload::Png(data) => data,
        }
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> &'static str {
        match self {
            Payload::Png(_) => "image/png",
        }
    }
}

/// One composited frame, encoded and ready for export
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportableFrame {
    name: String,
    payload: Payload,
    index: usize,
}

impl ExportableFrame {
    /// Create an exportable frame
    pub fn new(
        name: impl Into<String>,
        payload: Payload,
        index: usize,
    ) -> Self {
        ExportableFrame {
            name: name.into(),
            payload,
            index,
        }
    }

    /// Get the artifact name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the encoded payload
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Get the originating frame index
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Frames extracted from one GIF file
pub struct Extraction {
    /// Number of frames in the source
    pub total_frames: usize,
    /// Extracted frames, by increasing index
    pub frames: Vec<ExportableFrame>,
}

/// Frame extractor
///
/// Selects frames by stride, composites each one and encodes it as PNG.
///
/// ## Example
/// ```no_run
/// use gifsplit::{Extractor, Stride};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extraction = Extractor::new("walk_")
///     .with_stride(Stride::new(2)?)
///     .extract_file("walk.gif")?;
/// for frame in extraction.frames {
///     println!("{} {}", frame.name(), frame.payload().data().len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Extractor {
    /// Artifact name template
    template: String,
    /// Step between extracted frames
    stride: Stride,
    /// Disposal handling
    mode: DisposalMode,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new("frame_")
    }
}

impl Extractor {
    /// Create an extractor with a name template.
    pub fn new(template: impl Into<String>) -> Self {
        Extractor {
            template: template.into(),
            stride: Stride::default(),
            mode: DisposalMode::default(),
        }
    }

    /// Adjust the stride.
    pub fn with_stride(mut self, stride: Stride) -> Self {
        self.stride = stride;
        self
    }

    /// Adjust the disposal mode.
    pub fn with_disposal_mode(mut self, mode: DisposalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Extract selected frames from a decoded sequence.
    pub fn extract(
        &self,
        seq: &AnimationSequence,
    ) -> Result<Vec<ExportableFrame>> {
        let compositor = Compositor::new(seq)?.with_disposal_mode(self.mode);
        compositor
            .snapshots(self.stride.indices(seq.len()))
            .map(|snap| -> Result<ExportableFrame> {
                let (index, raster) = snap?;
                let payload = Payload::Png(encode_png(&raster)?);
                let name = frame_name(&self.template, index);
                Ok(ExportableFrame::new(name, payload, index))
            })
            .collect()
    }

    /// Decode a GIF file and extract selected frames.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let seq = Decoder::open(path)?.into_sequence()?;
        let frames = self.extract(&seq)?;
        info!("extracted {} of {} frames", frames.len(), seq.len());
        Ok(Extraction {
            total_frames: seq.len(),
            frames,
        })
    }

    /// Extract frames from a GIF file into a report.
    ///
    /// Failures are reported in the result instead of returned.
    pub fn extract_report<P: AsRef<Path>>(&self, path: P) -> ExtractReport {
        match self.extract_file(path) {
            Ok(extraction) => {
                let records =
                    extraction.frames.iter().map(FrameRecord::from).collect();
                ExtractReport::succeeded(extraction.total_frames, records)
            }
            Err(e) => {
                warn!("extraction failed: {e}");
                ExtractReport::failed(e.to_string())
            }
        }
    }
}

/// Extract frames from a GIF file.
///
/// * `path` GIF file path.
/// * `template` Artifact name template.
/// * `stride` Step between extracted frame indices (at least 1).
pub fn extract<P: AsRef<Path>>(
    path: P,
    template: &str,
    stride: i64,
) -> ExtractReport {
    match Stride::try_from(stride) {
        Ok(stride) => Extractor::new(template)
            .with_stride(stride)
            .extract_report(path),
        Err(e) => ExtractReport::failed(e.to_string()),
    }
}
