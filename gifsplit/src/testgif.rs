// testgif.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! GIF fixtures for tests
use gif::{DisposalMethod, Frame};
use std::borrow::Cow;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Screen width, height and frames
pub type TestGif = (u16, u16, Vec<Frame<'static>>);

/// Make a single-color frame with a local palette
pub fn solid_frame(
    left: u16,
    top: u16,
    width: u16,
    height: u16,
    rgb: [u8; 3],
    dispose: DisposalMethod,
) -> Frame<'static> {
    let mut frame = Frame::default();
    frame.left = left;
    frame.top = top;
    frame.width = width;
    frame.height = height;
    frame.dispose = dispose;
    frame.palette = Some(vec![rgb[0], rgb[1], rgb[2], 0, 0, 0]);
    let len = usize::from(width) * usize::from(height);
    frame.buffer = Cow::Owned(vec![0; len]);
    frame
}

/// 10x10 animation: one red frame, then three blue frames
pub fn red_then_blue() -> TestGif {
    let keep = DisposalMethod::Keep;
    let mut frames = vec![solid_frame(0, 0, 10, 10, [0xFF, 0, 0], keep)];
    for _ in 1..4 {
        frames.push(solid_frame(0, 0, 10, 10, [0, 0, 0xFF], keep));
    }
    (10, 10, frames)
}

/// Encode an animation
pub fn gif_bytes(gif: &TestGif) -> io::Result<Vec<u8>> {
    let (width, height, frames) = gif;
    let mut buf = Vec::new();
    {
        let mut enc = gif::Encoder::new(&mut buf, *width, *height, &[])
            .map_err(io::Error::other)?;
        for frame in frames {
            enc.write_frame(frame).map_err(io::Error::other)?;
        }
    }
    Ok(buf)
}

/// Write an animation to a file in a temporary directory
pub fn gif_file(gif: &TestGif) -> io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("anim.gif");
    std::fs::write(&path, gif_bytes(gif)?)?;
    Ok((dir, path))
}
