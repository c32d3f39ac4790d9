// error.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors encountered while extracting or exporting frames
#[derive(Debug)]
pub enum Error {
    /// A wrapped I/O error.
    Io(io::Error),
    /// Source GIF file does not exist.
    SourceNotFound(PathBuf),
    /// GIF stream could not be decoded.
    Decode(gif::DecodingError),
    /// Image larger than specified by
    /// [max_image_sz](struct.Decoder.html#method.max_image_sz).
    TooLargeImage,
    /// Frame pixel data does not match its dimensions.
    InvalidFrameDimensions,
    /// Frame index out of bounds for the sequence.
    InvalidIndex {
        /// Requested index
        index: usize,
        /// Number of frames in the sequence
        len: usize,
    },
    /// Animation sequence contains no frames.
    EmptySequence,
    /// Stride must be at least 1.
    InvalidStride(i64),
    /// Raster cannot be encoded (zero-area bounds).
    EncodeFailure,
    /// A wrapped PNG encoding error.
    Png(png::EncodingError),
    /// A wrapped PNG decoding error.
    PngDecode(png::DecodingError),
    /// PNG is not 8-bit RGBA.
    UnsupportedPng,
    /// Export directory could not be created.
    DirectoryCreateFailure(io::Error),
    /// Frame record payload could not be decoded, or is not a PNG (by frame
    /// index).
    RecordDecodeFailure(usize),
    /// Frame file could not be written.
    FileWriteFailure(PathBuf, io::Error),
}

/// Gifsplit result type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(fmt),
            Error::SourceNotFound(path) => {
                write!(fmt, "GIF file not found: {}", path.display())
            }
            Error::Decode(err) => write!(fmt, "unable to decode GIF: {err}"),
            Error::InvalidIndex { index, len } => {
                write!(fmt, "frame index {index} out of bounds ({len} frames)")
            }
            Error::InvalidStride(stride) => {
                write!(fmt, "invalid stride {stride} (must be at least 1)")
            }
            Error::Png(err) => write!(fmt, "unable to encode PNG: {err}"),
            Error::PngDecode(err) => write!(fmt, "unable to decode PNG: {err}"),
            Error::DirectoryCreateFailure(err) => {
                write!(fmt, "unable to create output directory: {err}")
            }
            Error::FileWriteFailure(path, err) => {
                write!(fmt, "unable to write {}: {err}", path.display())
            }
            _ => fmt::Debug::fmt(self, fmt),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            Error::Decode(ref err) => Some(err),
            Error::Png(ref err) => Some(err),
            Error::PngDecode(ref err) => Some(err),
            Error::DirectoryCreateFailure(ref err) => Some(err),
            Error::FileWriteFailure(_, ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<gif::DecodingError> for Error {
    fn from(err: gif::DecodingError) -> Self {
        Error::Decode(err)
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        Error::Png(err)
    }
}

impl From<png::DecodingError> for Error {
    fn from(err: png::DecodingError) -> Self {
        Error::PngDecode(err)
    }
}
