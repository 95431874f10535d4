//! QR code rendering for passport payload URLs.
//!
//! Encodes a payload string into a 2-D barcode, rasterizes it to a PNG, and
//! returns the result as a base64 `data:` URI suitable for direct embedding
//! in passport pages. Rendering is deterministic for a given payload.

use base64::{engine::general_purpose, Engine as _};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;
use thiserror::Error;

/// Pixel edge length of a single QR module.
const MODULE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG rendering failed: {0}")]
    Render(#[from] image::ImageError),
}

/// Renders `payload` as a PNG QR code and returns it as a
/// `data:image/png;base64,...` URI.
///
/// Uses medium error correction and the smallest QR version that fits the
/// payload, drawn black-on-white with a quiet-zone border.
pub fn render_data_uri(payload: &str) -> Result<String, QrError> {
    let code = QrCode::new(payload.as_bytes())?;

    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .quiet_zone(true)
        .build();

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(&png)
    ))
}
