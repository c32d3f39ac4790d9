// decode.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! GIF decoding adapter
use crate::error::{Error, Result};
use crate::sequence::{AnimationFrame, AnimationSequence};
use pix::{rgb::SRgba8, Raster};
use std::io::Read;

/// Check an RGBA buffer size against a limit
fn check_image_sz(
    width: u16,
    height: u16,
    max_image_sz: Option<usize>,
) -> Result<()> {
    if let Some(max) = max_image_sz {
        let sz = usize::from(width) * usize::from(height) * 4;
        if sz > max {
            return Err(Error::TooLargeImage);
        }
    }
    Ok(())
}

/// An `Iterator` for [AnimationFrame]s within a GIF file.
///
/// Build with Decoder.[into_frames].
///
/// [AnimationFrame]: struct.AnimationFrame.html
/// [into_frames]: struct.Decoder.html#method.into_frames
pub struct Frames<R: Read> {
    /// GIF stream decoder
    decoder: gif::Decoder<R>,
    /// Maximum image size, in bytes
    max_image_sz: Option<usize>,
    /// Flag set after an error or end of stream
    done: bool,
}

impl<R: Read> Iterator for Frames<R> {
    type Item = Result<AnimationFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> Frames<R> {
    /// Create a new frame iterator.
    pub(crate) fn new(reader: R, max_image_sz: Option<usize>) -> Result<Self> {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::RGBA);
        let decoder = options.read_info(reader)?;
        check_image_sz(decoder.width(), decoder.height(), max_image_sz)?;
        debug!("screen: {}x{}", decoder.width(), decoder.height());
        Ok(Frames {
            decoder,
            max_image_sz,
            done: false,
        })
    }

    /// Get the logical screen width
    pub fn screen_width(&self) -> u32 {
        self.decoder.width().into()
    }

    /// Get the logical screen height
    pub fn screen_height(&self) -> u32 {
        self.decoder.height().into()
    }

    /// Decode the next frame into an RGBA raster
    fn next_frame(&mut self) -> Result<Option<AnimationFrame>> {
        let max_image_sz = self.max_image_sz;
        let frame = match self.decoder.read_next_frame()? {
            Some(frame) => frame,
            None => return Ok(None),
        };
        check_image_sz(frame.width, frame.height, max_image_sz)?;
        debug!(
            "frame: {}x{} at {},{} {:?}",
            frame.width, frame.height, frame.left, frame.top, frame.dispose
        );
        let width = u32::from(frame.width);
        let height = u32::from(frame.height);
        let len = width as usize * height as usize * 4;
        if frame.buffer.len() != len {
            return Err(Error::InvalidFrameDimensions);
        }
        let raster: Raster<SRgba8> =
            Raster::with_u8_buffer(width, height, frame.buffer.to_vec());
        Ok(Some(
            AnimationFrame::new(raster)
                .with_offset(frame.left.into(), frame.top.into())
                .with_disposal(frame.dispose.into())
                .with_delay_time_cs(frame.delay),
        ))
    }

    /// Collect all remaining frames into a sequence.
    pub fn into_sequence(self) -> Result<AnimationSequence> {
        let mut seq =
            AnimationSequence::new(self.screen_width(), self.screen_height());
        for frame in self {
            seq.push(frame?);
        }
        debug!("decoded {} frames", seq.len());
        Ok(seq)
    }
}

#[cfg(test)]
mod test {
    use crate::testgif::{gif_bytes, red_then_blue, solid_frame};
    use crate::{Decoder, Disposal, Error};
    use gif::DisposalMethod;
    use std::error::Error as _;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn red_blue() -> TestResult {
        let gif = gif_bytes(&red_then_blue())?;
        let seq = Decoder::new(&gif[..]).into_sequence()?;
        assert_eq!((seq.width(), seq.height()), (10, 10));
        assert_eq!(seq.len(), 4);
        let first = seq.frame(0).ok_or("frame")?;
        assert_eq!(&first.raster().as_u8_slice()[..4], &[0xFF, 0, 0, 0xFF]);
        let last = seq.frame(3).ok_or("frame")?;
        assert_eq!(&last.raster().as_u8_slice()[..4], &[0, 0, 0xFF, 0xFF]);
        assert_eq!(last.disposal(), Disposal::None);
        Ok(())
    }

    #[test]
    fn sub_image() -> TestResult {
        let frames = vec![
            solid_frame(0, 0, 8, 6, [1, 2, 3], DisposalMethod::Any),
            solid_frame(5, 2, 3, 4, [4, 5, 6], DisposalMethod::Previous),
        ];
        let gif = gif_bytes(&(8, 6, frames))?;
        let mut frames = Decoder::new(&gif[..]).into_frames()?;
        assert_eq!((frames.screen_width(), frames.screen_height()), (8, 6));
        let first = frames.next().ok_or("frame")??;
        assert_eq!(first.disposal(), Disposal::Unspecified);
        let second = frames.next().ok_or("frame")??;
        assert_eq!((second.left(), second.top()), (5, 2));
        assert_eq!((second.width(), second.height()), (3, 4));
        assert_eq!(second.disposal(), Disposal::RestorePrevious);
        assert_eq!(second.raster().as_u8_slice().len(), 3 * 4 * 4);
        assert!(frames.next().is_none());
        Ok(())
    }

    #[test]
    fn too_large() -> TestResult {
        let gif = gif_bytes(&red_then_blue())?;
        let res = Decoder::new(&gif[..]).max_image_sz(Some(16)).into_sequence();
        assert!(matches!(res, Err(Error::TooLargeImage)));
        let seq = Decoder::new(&gif[..]).max_image_sz(None).into_sequence()?;
        assert_eq!(seq.len(), 4);
        Ok(())
    }

    #[test]
    fn not_a_gif() {
        let res = Decoder::new(&b"PNG is not GIF"[..]).into_sequence();
        assert!(matches!(res, Err(Error::Decode(_))));
        assert!(res.err().is_some_and(|e| e.source().is_some()));
    }

    #[test]
    fn missing_file() {
        let res = Decoder::open("/nonexistent/missing.gif");
        assert!(matches!(res, Err(Error::SourceNotFound(_))));
    }
}
