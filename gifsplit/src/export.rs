// export.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! Export of extracted frames to files
use crate::encode::{from_data_uri, is_png};
use crate::error::{Error, Result};
use crate::report::{ExportReport, FrameRecord};
use crate::select::frame_name;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one frame record to a directory.
///
/// The file name is derived from the record index, not its `name`.
fn write_record(
    record: &FrameRecord,
    dir: &Path,
    template: &str,
) -> Result<PathBuf> {
    let data = from_data_uri(&record.preview)
        .filter(|data| is_png(data))
        .ok_or(Error::RecordDecodeFailure(record.index))?;
    let path = dir.join(frame_name(template, record.index));
    if let Err(e) = fs::write(&path, data) {
        return Err(Error::FileWriteFailure(path, e));
    }
    Ok(path)
}

/// Export frame records as PNG files.
///
/// The directory is created if missing.  Records which cannot be decoded or
/// written are skipped; the number of files written is returned.
pub fn export_frames<P: AsRef<Path>>(
    records: &[FrameRecord],
    dir: P,
    template: &str,
) -> Result<usize> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(Error::DirectoryCreateFailure)?;
    }
    let mut count = 0;
    for record in records {
        match write_record(record, dir, template) {
            Ok(path) => {
                debug!("wrote {}", path.display());
                count += 1;
            }
            Err(e) => warn!("skipping frame {}: {e}", record.index),
        }
    }
    info!("exported {count} of {} frames", records.len());
    Ok(count)
}

/// Export frame records into a report.
///
/// * `records` Previously extracted frames.
/// * `dir` Destination directory.
/// * `template` Artifact name template.
pub fn export<P: AsRef<Path>>(
    records: &[FrameRecord],
    dir: P,
    template: &str,
) -> ExportReport {
    let dir = dir.as_ref();
    match export_frames(records, dir, template) {
        Ok(count) => ExportReport {
            success: true,
            message: format!("exported {count} frames to {}", dir.display()),
            exported_count: count,
        },
        Err(e) => {
            warn!("export failed: {e}");
            ExportReport::failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encode::{decode_png, encode_png, to_data_uri};
    use pix::{rgb::SRgba8, Raster};

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn record(index: usize) -> Result<FrameRecord> {
        let raster: Raster<SRgba8> = Raster::with_u8_buffer(
            2,
            2,
            [index as u8, 0, 0, 0xFF].repeat(4),
        );
        let png = encode_png(&raster)?;
        Ok(FrameRecord {
            name: format!("renamed_{index}.png"),
            preview: to_data_uri(&png),
            size: String::new(),
            index,
            id: format!("frame_{index}"),
        })
    }

    #[test]
    fn skips_corrupt_payload() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut records = vec![record(0)?, record(3)?, record(6)?, record(9)?];
        records[2].preview = "data:image/png;base64,@@corrupt@@".into();
        let report = export(&records, dir.path(), "anim_");
        assert!(report.success);
        assert_eq!(report.exported_count, 3);
        assert!(dir.path().join("anim_001.png").exists());
        assert!(dir.path().join("anim_004.png").exists());
        assert!(!dir.path().join("anim_007.png").exists());
        assert!(dir.path().join("anim_010.png").exists());
        Ok(())
    }

    #[test]
    fn names_from_index() -> TestResult {
        let dir = tempfile::tempdir()?;
        let records = [record(8)?];
        assert_eq!(export_frames(&records, dir.path(), "x")?, 1);
        assert!(!dir.path().join("renamed_8.png").exists());
        let data = fs::read(dir.path().join("x009.png"))?;
        let raster = decode_png(&data)?;
        assert_eq!(&raster.as_u8_slice()[..4], &[8, 0, 0, 0xFF]);
        Ok(())
    }

    #[test]
    fn creates_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("a").join("b");
        let report = export(&[record(0)?], &out, "frame_");
        assert!(report.success);
        assert_eq!(report.exported_count, 1);
        assert!(out.join("frame_001.png").exists());
        Ok(())
    }

    #[test]
    fn directory_failure() -> TestResult {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("file");
        fs::write(&file, b"")?;
        let out = file.join("frames");
        assert!(matches!(
            export_frames(&[record(0)?], &out, "frame_"),
            Err(Error::DirectoryCreateFailure(_))
        ));
        let report = export(&[record(0)?], &out, "frame_");
        assert!(!report.success);
        assert_eq!(report.exported_count, 0);
        Ok(())
    }

    #[test]
    fn not_png_is_decode_failure() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut text = record(4)?;
        text.preview = to_data_uri(b"GIF89a");
        assert!(matches!(
            write_record(&text, dir.path(), "frame_"),
            Err(Error::RecordDecodeFailure(4))
        ));
        assert!(!dir.path().join("frame_005.png").exists());
        Ok(())
    }

    #[test]
    fn missing_prefix_and_not_png() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut plain = record(0)?;
        plain.preview = plain.preview.replace("data:image/png;base64,", "");
        let mut text = record(1)?;
        text.preview = to_data_uri(b"hello");
        let report = export(&[plain, text], dir.path(), "frame_");
        assert!(report.success);
        assert_eq!(report.exported_count, 0);
        Ok(())
    }
}
