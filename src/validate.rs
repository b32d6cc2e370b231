//! Bounds checks shared by the header parser, both pixel decoders and
//! [`Image::new`](crate::Image::new).

use crate::error::{HeaderField, PpmError};

/// Accept a parsed width or height in `1..=u32::MAX`.
pub(crate) fn dimension(field: HeaderField, value: i64) -> Result<u32, PpmError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(PpmError::InvalidDimension { field, value }),
    }
}

/// Accept a parsed maxval in `0..=255`.
pub(crate) fn max_value(value: i64) -> Result<u8, PpmError> {
    u8::try_from(value).map_err(|_| PpmError::InvalidMaxValue { value })
}

/// Accept a decoded channel in `0..=max`. `index` is the channel's position
/// in the payload (pixel index * 3 + channel).
#[inline]
pub(crate) fn channel(value: u16, max: u8, index: usize) -> Result<u8, PpmError> {
    if value > u16::from(max) {
        return Err(PpmError::ChannelOutOfRange { index, value, max });
    }
    Ok(value as u8)
}

/// `width * height`, refusing sizes that overflow `usize`.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, PpmError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PpmError::DimensionsTooLarge { width, height })
}

/// Byte length of a P6 payload: `width * height * 3`.
pub(crate) fn binary_payload_len(width: u32, height: u32) -> Result<usize, PpmError> {
    pixel_count(width, height)?
        .checked_mul(3)
        .ok_or(PpmError::DimensionsTooLarge { width, height })
}
