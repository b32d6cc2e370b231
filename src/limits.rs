use alloc::format;

use crate::error::PpmError;
use crate::header::Header;

/// Resource limits applied after the header is parsed and before the
/// pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a parsed header against every configured limit.
    pub(crate) fn check(&self, header: &Header) -> Result<(), PpmError> {
        let (width, height) = (header.width, header.height);
        if let Some(max_w) = self.max_width.filter(|&max_w| width > max_w) {
            return Err(PpmError::LimitExceeded(format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height.filter(|&max_h| height > max_h) {
            return Err(PpmError::LimitExceeded(format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels.filter(|&max_px| pixels > max_px) {
            return Err(PpmError::LimitExceeded(format!(
                "pixel count {pixels} exceeds limit {max_px}"
            )));
        }
        let bytes = pixels.saturating_mul(core::mem::size_of::<rgb::RGB8>() as u64);
        if let Some(max_mem) = self.max_memory_bytes.filter(|&max_mem| bytes > max_mem) {
            return Err(PpmError::LimitExceeded(format!(
                "allocation {bytes} bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}
