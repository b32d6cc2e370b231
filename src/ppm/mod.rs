//! PPM pipeline: header, then the P3 or P6 pixel decoder the magic selects.

mod decode;
mod encode;

use alloc::vec::Vec;

use enough::Stop;

use crate::error::PpmError;
use crate::header::{self, Cursor, Header, Variant};
use crate::image::Image;
use crate::limits::Limits;
use crate::log::trace;

/// Decode a complete PPM file held in memory.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>, stop: &dyn Stop) -> Result<Image, PpmError> {
    let mut cursor = Cursor::new(data);
    let header = header::parse(&mut cursor)?;

    if let Some(limits) = limits {
        limits.check(&header)?;
    }
    stop.check()?;

    header::skip_to_payload(&mut cursor, &header)?;
    let offset = cursor.position();
    let payload = cursor.rest();
    trace!("decoding {} payload bytes at offset {offset}", payload.len());

    let pixels = match header.variant {
        Variant::Binary => decode::decode_binary(payload, offset, &header, stop)?,
        Variant::Ascii => decode::decode_ascii(payload, offset, &header, stop)?,
    };
    Ok(Image::from_parts(
        header.width,
        header.height,
        header.max_value,
        pixels,
    ))
}

/// Encode `image` with the layout `header` describes.
pub(crate) fn encode(header: &Header, image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, PpmError> {
    trace!(
        "encoding {}x{} image as P{}",
        image.width(),
        image.height(),
        header.variant.digit() as char
    );
    encode::encode_ppm(header, image, stop)
}
