//! # zenppm
//!
//! PPM (Portable Pixmap) decoder and encoder for the ASCII `P3` and binary
//! `P6` variants, 8 bits per channel.
//!
//! ## Format
//!
//! ```text
//! "P" ('3' | '6') sep
//! [comment | whitespace]* width sep
//! [comment | whitespace]* height sep
//! [comment | whitespace]* maxval sep
//! [comment | whitespace]* <pixel payload>
//! ```
//!
//! Every header token must be followed by one whitespace byte before any
//! `#` comment may start. `width` and `height` are positive, `maxval` is in
//! `0..=255`, and every decoded channel must not exceed `maxval`.
//!
//! - `P6` payload: exactly `width * height * 3` raw bytes.
//! - `P3` payload: `width * height * 3` decimal tokens separated by whitespace.
//!
//! Decoding reads and validates the whole payload before an [`Image`] is
//! returned. Any error drops the partially built pixel buffer. Comments are
//! discarded.
//!
//! ## Non-Goals
//!
//! - P1, P2, P4, P5, P7 and PFM
//! - 16-bit samples (maxval above 255)
//! - Streaming or partial decode
//!
//! ## Usage
//!
//! ```
//! use zenppm::{Header, Variant};
//!
//! let mut data = b"P6\n2 1\n255\n".to_vec();
//! data.extend_from_slice(&[255, 0, 0, 0, 255, 0]);
//!
//! let image = zenppm::decode(&data)?;
//! assert_eq!((image.width(), image.height(), image.max_value()), (2, 1, 255));
//!
//! // Re-encode as plain text
//! let text = zenppm::encode_p3(&image)?;
//! assert_eq!(text, b"P3\n2 1\n255\n255 0 0\n0 255 0\n");
//!
//! // Probe without decoding
//! let header = Header::from_bytes(&text)?;
//! assert_eq!(header.variant, Variant::Ascii);
//! # Ok::<(), zenppm::PpmError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): [`decode_from_reader`] and [`encode`] over `std::io`.
//! - `imgref`: [`Image::as_imgref`] / [`Image::into_imgvec`].
//! - `log`: header and payload diagnostics through the `log` facade.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod header;
mod image;
mod limits;
mod log;
mod ppm;
mod validate;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeRequest;
#[cfg(feature = "std")]
pub use decode::decode_from_reader;
#[cfg(feature = "std")]
pub use encode::encode;
pub use encode::EncodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{DecodeError, EncodeError, HeaderField, PpmError};
pub use header::{Header, Variant};
pub use image::Image;
pub use limits::Limits;
pub use rgb::RGB8;

/// One pixel: three 8-bit channels.
pub type Pixel = RGB8;

/// Decode a P3 or P6 file held in memory.
pub fn decode(data: &[u8]) -> Result<Image, PpmError> {
    DecodeRequest::new(data).decode(Unstoppable)
}

/// Decode with resource limits.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Image, PpmError> {
    DecodeRequest::new(data).with_limits(limits).decode(Unstoppable)
}

/// Encode as binary `P6`.
pub fn encode_p6(image: &Image) -> Result<Vec<u8>, PpmError> {
    EncodeRequest::binary().encode(image, Unstoppable)
}

/// Encode as ASCII `P3`.
pub fn encode_p3(image: &Image) -> Result<Vec<u8>, PpmError> {
    EncodeRequest::ascii().encode(image, Unstoppable)
}

/// Decode `data` and re-encode it as `target`, e.g. P3 to P6.
pub fn transcode(data: &[u8], target: Variant) -> Result<Vec<u8>, PpmError> {
    let image = decode(data)?;
    EncodeRequest::new(target).encode(&image, Unstoppable)
}
