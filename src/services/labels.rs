//! Printable QR labels

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::{AppError, AppResult};

/// Text encoded in an asset's QR label
pub fn label_payload(asset_id: &str) -> String {
    format!("Lapor Kerusakan ID: {}", asset_id)
}

#[derive(Clone)]
pub struct LabelService {
    size: u32,
}

impl LabelService {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Render the QR label for an asset as PNG bytes
    pub fn render_png(&self, asset_id: &str) -> AppResult<Vec<u8>> {
        let code = QrCode::new(label_payload(asset_id).as_bytes())
            .map_err(|e| AppError::Internal(format!("QR encoding failed: {}", e)))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.size, self.size)
            .build();

        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| AppError::Internal(format!("PNG encoding failed: {}", e)))?;
        Ok(png)
    }
}
