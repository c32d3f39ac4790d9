// private.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Private module for top-level items
use crate::{decode, AnimationSequence, Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// GIF file decoder
///
/// Can be converted to:
/// * [into_sequence] for a complete [AnimationSequence]
/// * [into_frames] for an `Iterator` of [AnimationFrame]s
///
/// ## Example: Decode a sequence
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let gif = &[
/// #   0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x02, 0x00,
/// #   0x02, 0x00, 0x80, 0x01, 0x00, 0x00, 0x00, 0x00,
/// #   0xff, 0xff, 0xff, 0x2c, 0x00, 0x00, 0x00, 0x00,
/// #   0x02, 0x00, 0x02, 0x00, 0x00, 0x02, 0x03, 0x0c,
/// #   0x10, 0x05, 0x00, 0x3b,
/// # ][..];
/// // ... open a `File` as "gif"
/// let seq = gifsplit::Decoder::new(gif).into_sequence()?;
/// assert_eq!(seq.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// [AnimationFrame]: struct.AnimationFrame.html
/// [AnimationSequence]: struct.AnimationSequence.html
/// [into_frames]: struct.Decoder.html#method.into_frames
/// [into_sequence]: struct.Decoder.html#method.into_sequence
pub struct Decoder<R: Read> {
    /// Reader for input data
    reader: R,
    /// Maximum image size, in bytes
    max_image_sz: Option<usize>,
}

impl Decoder<BufReader<File>> {
    /// Open a GIF file for decoding.
    ///
    /// The path is checked before opening; a missing file is reported as
    /// `SourceNotFound`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: Read> Decoder<R> {
    /// Create a new GIF decoder.
    pub fn new(reader: R) -> Self {
        Decoder {
            reader,
            max_image_sz: Some(1 << 25),
        }
    }

    /// Set the maximum image size (in bytes) to allow for decoding.
    pub fn max_image_sz(mut self, max_image_sz: Option<usize>) -> Self {
        self.max_image_sz = max_image_sz;
        self
    }

    /// Convert into a frame `Iterator`.
    pub fn into_frames(self) -> Result<decode::Frames<R>> {
        decode::Frames::new(self.reader, self.max_image_sz)
    }

    /// Decode all frames into a sequence.
    pub fn into_sequence(self) -> Result<AnimationSequence> {
        self.into_frames()?.into_sequence()
    }
}
