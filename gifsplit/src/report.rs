// report.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Result records for extraction and export calls
use crate::encode::{format_size, to_data_uri};
use crate::extract::ExportableFrame;
use serde::{Deserialize, Serialize};

/// Transport record for one extracted frame.
///
/// Only `preview` and `index` are required when a record is read back for
/// export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Generated file name
    #[serde(default)]
    pub name: String,
    /// PNG data URI
    pub preview: String,
    /// Encoded size, like "2.5KB"
    #[serde(default)]
    pub size: String,
    /// Originating frame index
    pub index: usize,
    /// Per-frame identifier, `frame_<index>`
    #[serde(default)]
    pub id: String,
}

impl From<&ExportableFrame> for FrameRecord {
    fn from(frame: &ExportableFrame) -> Self {
        let data = frame.payload().data();
        FrameRecord {
            name: frame.name().to_string(),
            preview: to_data_uri(data),
            size: format_size(data.len()),
            index: frame.index(),
            id: format!("frame_{}", frame.index()),
        }
    }
}

/// Result of an extraction call
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractReport {
    /// Whether extraction succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Number of frames in the source
    pub total_frames: usize,
    /// Number of frames extracted
    pub extracted_frames: usize,
    /// Extracted frames, by increasing index
    pub frames: Vec<FrameRecord>,
}

impl ExtractReport {
    /// Create a failed report
    pub fn failed(message: impl Into<String>) -> Self {
        ExtractReport {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Create a successful report
    pub fn succeeded(total_frames: usize, frames: Vec<FrameRecord>) -> Self {
        let extracted_frames = frames.len();
        ExtractReport {
            success: true,
            message: format!("extracted {extracted_frames} frames"),
            total_frames,
            extracted_frames,
            frames,
        }
    }
}

/// Result of an export call
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    /// Whether export succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Number of files written
    pub exported_count: usize,
}

impl ExportReport {
    /// Create a failed report
    pub fn failed(message: impl Into<String>) -> Self {
        ExportReport {
            message: message.into(),
            ..Default::default()
        }
    }
}
