//! Encode entry points: the request builder and the `std::io` writer.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::PpmError;
use crate::header::{Header, Variant};
use crate::image::Image;

/// Encode request producing a P3 or P6 file.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    variant: Variant,
}

impl EncodeRequest {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// Binary `P6` output.
    pub fn binary() -> Self {
        Self::new(Variant::Binary)
    }

    /// Human-readable `P3` output.
    pub fn ascii() -> Self {
        Self::new(Variant::Ascii)
    }

    /// Encode `image`, keeping its dimensions and max value in the header.
    pub fn encode(self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, PpmError> {
        let header = Header::for_image(image, self.variant);
        crate::ppm::encode(&header, image, &stop)
    }
}

/// Write `image` to `writer` in the layout `header` describes.
///
/// The header must match the image's width, height and max value. Write
/// errors are reported as [`PpmError::WriteFailure`].
#[cfg(feature = "std")]
pub fn encode<W: std::io::Write>(header: &Header, image: &Image, mut writer: W) -> Result<(), PpmError> {
    let bytes = crate::ppm::encode(header, image, &enough::Unstoppable)?;
    writer.write_all(&bytes).map_err(PpmError::WriteFailure)?;
    writer.flush().map_err(PpmError::WriteFailure)
}
