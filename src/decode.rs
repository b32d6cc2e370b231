//! Decode entry points: the request builder and the `std::io` reader.

use enough::Stop;

use crate::error::PpmError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode request over an in-memory PPM file.
///
/// ```
/// use zenppm::{DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let image = DecodeRequest::new(b"P3\n1 1\n255\n10 20 30\n")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(image.pixels()[0], zenppm::RGB8::new(10, 20, 30));
/// # Ok::<(), zenppm::PpmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before the pixel buffer is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. `stop` is polled between rows.
    pub fn decode(self, stop: impl Stop) -> Result<Image, PpmError> {
        crate::ppm::decode(self.data, self.limits, &stop)
    }
}

/// Read the whole stream, then decode it.
///
/// I/O errors are reported as [`PpmError::ReadFailure`].
#[cfg(feature = "std")]
pub fn decode_from_reader<R: std::io::Read>(mut reader: R) -> Result<Image, PpmError> {
    let mut data = alloc::vec::Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(PpmError::ReadFailure)?;
    crate::ppm::decode(&data, None, &enough::Unstoppable)
}
