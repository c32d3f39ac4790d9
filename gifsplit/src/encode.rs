// encode.rs
//
// Copyright (c) 2019-2025  Douglas Lau
//
//! PNG raster encoding
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use pix::{rgb::SRgba8, Raster};

/// Prefix of PNG data URIs
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode a raster as an 8-bit RGBA PNG.
pub fn encode_png(raster: &Raster<SRgba8>) -> Result<Vec<u8>> {
    let (width, height) = (raster.width(), raster.height());
    if width == 0 || height == 0 {
        return Err(Error::EncodeFailure);
    }
    let mut buf = Vec::new();
    let mut enc = png::Encoder::new(&mut buf, width, height);
    enc.set_color(png::ColorType::Rgba);
    enc.set_depth(png::BitDepth::Eight);
    let mut writer = enc.write_header()?;
    writer.write_image_data(raster.as_u8_slice())?;
    writer.finish()?;
    Ok(buf)
}

/// Decode a PNG into an RGBA raster.
///
/// Only 8-bit RGBA images (as made by [encode_png]) are accepted.
pub fn decode_png(data: &[u8]) -> Result<Raster<SRgba8>> {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    if info.color_type != png::ColorType::Rgba
        || info.bit_depth != png::BitDepth::Eight
    {
        return Err(Error::UnsupportedPng);
    }
    buf.truncate(info.buffer_size());
    Ok(Raster::with_u8_buffer(info.width, info.height, buf))
}

/// Check for a PNG file signature
pub fn is_png(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/// Make a PNG data URI
pub fn to_data_uri(png: &[u8]) -> String {
    let mut uri = String::from(DATA_URI_PREFIX);
    STANDARD.encode_string(png, &mut uri);
    uri
}

/// Get PNG data from a data URI
pub fn from_data_uri(uri: &str) -> Option<Vec<u8>> {
    let b64 = uri.strip_prefix(DATA_URI_PREFIX)?;
    STANDARD.decode(b64).ok()
}

/// Format an encoded size in kilobytes, like "2.5KB"
pub fn format_size(len: usize) -> String {
    format!("{:.1}KB", len as f64 / 1024.0)
}

#[cfg(test)]
mod test {
    use super::*;

    fn gradient(width: u32, height: u32) -> Raster<SRgba8> {
        let mut buf = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let (r, g) = (x as u8 * 16, y as u8 * 16);
                buf.extend_from_slice(&[r, g, 0x80, 0xFF]);
            }
        }
        Raster::with_u8_buffer(width, height, buf)
    }

    #[test]
    fn png_round_trip() -> Result<()> {
        let raster = gradient(7, 5);
        let png = encode_png(&raster)?;
        assert!(is_png(&png));
        let back = decode_png(&png)?;
        assert_eq!((back.width(), back.height()), (7, 5));
        assert_eq!(back.as_u8_slice(), raster.as_u8_slice());
        Ok(())
    }

    #[test]
    fn deterministic() -> Result<()> {
        let raster = gradient(4, 4);
        assert_eq!(encode_png(&raster)?, encode_png(&raster)?);
        Ok(())
    }

    #[test]
    fn zero_area() {
        let raster: Raster<SRgba8> = Raster::with_clear(0, 3);
        assert!(matches!(encode_png(&raster), Err(Error::EncodeFailure)));
    }

    #[test]
    fn not_png() {
        assert!(!is_png(b"GIF89a"));
        assert!(decode_png(b"not a png").is_err());
    }

    #[test]
    fn data_uri() {
        let uri = to_data_uri(&[1, 2, 3]);
        assert_eq!(uri, "data:image/png;base64,AQID");
        assert_eq!(from_data_uri(&uri), Some(vec![1, 2, 3]));
        assert_eq!(from_data_uri("AQID"), None);
        assert_eq!(from_data_uri("data:image/png;base64,!!"), None);
    }

    #[test]
    fn size_label() {
        assert_eq!(format_size(0), "0.0KB");
        assert_eq!(format_size(1024), "1.0KB");
        assert_eq!(format_size(2560), "2.5KB");
        assert_eq!(format_size(100), "0.1KB");
    }
}
