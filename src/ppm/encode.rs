//! P3 and P6 encoders.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::PpmError;
use crate::header::{Header, Variant};
use crate::image::Image;

/// `P<n>\n<width> <height>\n<maxval>\n`
pub(crate) fn encode_header(out: &mut Vec<u8>, header: &Header) {
    out.extend_from_slice(&[b'P', header.variant.digit(), b'\n']);
    let dims = format!("{} {}\n{}\n", header.width, header.height, header.max_value);
    out.extend_from_slice(dims.as_bytes());
}

/// Raw `r, g, b` bytes per pixel, no separators.
pub(crate) fn encode_binary(out: &mut Vec<u8>, image: &Image, stop: &dyn Stop) -> Result<(), PpmError> {
    out.reserve(image.as_bytes().len());
    for (row_idx, row) in image.as_bytes().chunks_exact(image.width() as usize * 3).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }
    Ok(())
}

fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + value / 10 % 10);
    }
    out.push(b'0' + value % 10);
}

/// `r g b\n` per pixel.
pub(crate) fn encode_ascii(out: &mut Vec<u8>, image: &Image, stop: &dyn Stop) -> Result<(), PpmError> {
    // at most "255 255 255\n"
    out.reserve(image.pixels().len() * 12);
    let w = image.width() as usize;
    for (row_idx, row) in image.pixels().chunks_exact(w).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            push_decimal(out, px.r);
            out.push(b' ');
            push_decimal(out, px.g);
            out.push(b' ');
            push_decimal(out, px.b);
            out.push(b'\n');
        }
    }
    Ok(())
}

/// Serialize `image` as described by `header`, which must agree with the
/// image's dimensions and max value.
pub(crate) fn encode_ppm(header: &Header, image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, PpmError> {
    if header.width != image.width()
        || header.height != image.height()
        || header.max_value != image.max_value()
    {
        return Err(PpmError::HeaderMismatch {
            header_width: header.width,
            header_height: header.height,
            header_max: header.max_value,
            width: image.width(),
            height: image.height(),
            max: image.max_value(),
        });
    }
    debug_assert!(
        image
            .as_bytes()
            .iter()
            .all(|&c| c <= image.max_value())
    );

    stop.check()?;

    let mut out = Vec::new();
    encode_header(&mut out, header);
    match header.variant {
        Variant::Binary => encode_binary(&mut out, image, stop)?,
        Variant::Ascii => encode_ascii(&mut out, image, stop)?,
    }
    Ok(out)
}
