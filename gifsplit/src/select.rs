// select.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Frame selection and naming
use crate::error::{Error, Result};
use std::num::NonZeroUsize;

/// Step between extracted frame indices (at least 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stride(NonZeroUsize);

impl Default for Stride {
    fn default() -> Self {
        Stride(NonZeroUsize::MIN)
    }
}

impl TryFrom<i64> for Stride {
    type Error = Error;

    fn try_from(stride: i64) -> Result<Self> {
        usize::try_from(stride)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Stride)
            .ok_or(Error::InvalidStride(stride))
    }
}

impl Stride {
    /// Create a stride, rejecting zero.
    pub fn new(stride: usize) -> Result<Self> {
        NonZeroUsize::new(stride)
            .map(Stride)
            .ok_or(Error::InvalidStride(0))
    }

    /// Get the stride value
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Get the selected frame indices for a sequence length.
    ///
    /// Indices are `0, stride, 2 * stride, ...` while less than `len`.
    pub fn indices(self, len: usize) -> impl Iterator<Item = usize> {
        (0..len).step_by(self.get())
    }
}

/// Make an artifact file name for a frame index.
///
/// The ordinal is `index + 1`, zero-padded to at least 3 digits.
pub fn frame_name(template: &str, index: usize) -> String {
    format!("{template}{:03}.png", index + 1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stride_indices() -> Result<()> {
        let s = Stride::new(3)?;
        assert_eq!(s.indices(10).collect::<Vec<_>>(), [0, 3, 6, 9]);
        assert_eq!(s.indices(9).collect::<Vec<_>>(), [0, 3, 6]);
        assert_eq!(s.indices(1).collect::<Vec<_>>(), [0]);
        assert_eq!(s.indices(0).count(), 0);
        assert_eq!(Stride::default().indices(5).count(), 5);
        Ok(())
    }

    #[test]
    fn invalid_stride() {
        assert!(matches!(Stride::new(0), Err(Error::InvalidStride(0))));
        assert!(matches!(
            Stride::try_from(0_i64),
            Err(Error::InvalidStride(0))
        ));
        assert!(matches!(
            Stride::try_from(-2_i64),
            Err(Error::InvalidStride(-2))
        ));
        assert!(Stride::try_from(2_i64).is_ok_and(|s| s.get() == 2));
    }

    #[test]
    fn names() {
        assert_eq!(frame_name("frame_", 0), "frame_001.png");
        assert_eq!(frame_name("frame_", 8), "frame_009.png");
        assert_eq!(frame_name("frame_", 9), "frame_010.png");
        assert_eq!(frame_name("frame_", 98), "frame_099.png");
        assert_eq!(frame_name("frame_", 99), "frame_100.png");
        assert_eq!(frame_name("f", 999), "f1000.png");
        assert_eq!(frame_name("", 0), "001.png");
    }
}
