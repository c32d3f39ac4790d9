// lib.rs      gifsplit crate.
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Extract fully composited frames from animated GIF images.
//!
//! Frames of a GIF animation are often partial updates over a shared canvas.
//! A [Compositor] replays frames over the canvas, so each extracted frame
//! shows what is visible at that point in the animation.  An [Extractor]
//! selects frames by stride and encodes them as PNG.
//!
//! ## Example
//! ```no_run
//! let report = gifsplit::extract("anim.gif", "frame_", 2);
//! if report.success {
//!     gifsplit::export(&report.frames, "frames", "frame_");
//! }
//! ```
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod compose;
mod decode;
pub mod encode;
mod error;
mod export;
mod extract;
mod private;
mod report;
mod select;
mod sequence;
#[cfg(test)]
mod testgif;

pub use crate::compose::{Compositor, DisposalMode, Snapshots};
pub use crate::decode::Frames;
pub use crate::error::{Error, Result};
pub use crate::export::{export, export_frames};
pub use crate::extract::{
    extract, ExportableFrame, Extraction, Extractor, Payload,
};
pub use crate::private::Decoder;
pub use crate::report::{ExportReport, ExtractReport, FrameRecord};
pub use crate::select::{frame_name, Stride};
pub use crate::sequence::{AnimationFrame, AnimationSequence, Disposal};
