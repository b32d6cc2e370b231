//! P6 and P3 pixel decoders.
//!
//! Both take the whole payload at once and build the pixel buffer only from
//! fully validated data; on error the partial buffer is dropped.

use alloc::vec::Vec;

use enough::Stop;
use rgb::RGB8;

use crate::error::PpmError;
use crate::header::{Header, is_space};
use crate::log::warn;
use crate::validate;

/// Decode a P6 payload: `width * height` triplets of raw `r, g, b` bytes.
///
/// `offset` is the payload's position in the input, used for error reporting.
pub(crate) fn decode_binary(
    payload: &[u8],
    offset: usize,
    header: &Header,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, PpmError> {
    if payload.is_empty() {
        return Err(PpmError::EmptyPayload);
    }
    let w = header.width as usize;
    let count = validate::pixel_count(header.width, header.height)?;
    let expected = validate::binary_payload_len(header.width, header.height)?;
    let max = header.max_value;

    // Capacity is bounded by the bytes actually present, not the declared size.
    let mut pixels = Vec::with_capacity(count.min(payload.len() / 3));
    let mut triplets = payload.chunks_exact(3);

    for row in 0..header.height as usize {
        if row % 16 == 0 {
            stop.check()?;
        }
        for col in 0..w {
            let Some(px) = triplets.next() else {
                warn!("P6 payload ends after {} of {expected} bytes", payload.len());
                return Err(PpmError::PayloadTooShort {
                    expected,
                    actual: payload.len(),
                });
            };
            let base = (row * w + col) * 3;
            pixels.push(RGB8::new(
                validate::channel(u16::from(px[0]), max, base)?,
                validate::channel(u16::from(px[1]), max, base + 1)?,
                validate::channel(u16::from(px[2]), max, base + 2)?,
            ));
        }
    }

    if payload.len() > expected {
        warn!("P6 payload has {} extra bytes", payload.len() - expected);
        return Err(PpmError::TrailingData {
            offset: offset + expected,
        });
    }
    Ok(pixels)
}

/// Whitespace-separated tokens of a P3 payload.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next token and its position, or `None` once only whitespace remains.
    fn next_token(&mut self) -> Option<(usize, &'a [u8])> {
        let data = self.data;
        while data.get(self.pos).is_some_and(|&b| is_space(b)) {
            self.pos += 1;
        }
        let start = self.pos;
        while data.get(self.pos).is_some_and(|&b| !is_space(b)) {
            self.pos += 1;
        }
        let end = self.pos;
        (end > start).then(|| (start, &data[start..end]))
    }
}

/// Channel tokens are 1 to 3 decimal digits; anything longer cannot be a
/// valid 8-bit channel.
fn parse_channel(token: &[u8], index: usize) -> Result<u16, PpmError> {
    if token.len() > 3 || !token.iter().all(u8::is_ascii_digit) {
        return Err(PpmError::MalformedToken { index });
    }
    Ok(token
        .iter()
        .fold(0u16, |acc, &d| acc * 10 + u16::from(d - b'0')))
}

/// Decode a P3 payload: `width * height * 3` decimal channel tokens.
pub(crate) fn decode_ascii(
    payload: &[u8],
    offset: usize,
    header: &Header,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, PpmError> {
    if payload.is_empty() {
        return Err(PpmError::EmptyPayload);
    }
    let w = header.width as usize;
    let count = validate::pixel_count(header.width, header.height)?;
    let max = header.max_value;

    // A pixel takes at least six bytes: three digits, three separators.
    let mut pixels = Vec::with_capacity(count.min(payload.len() / 6 + 1));
    let mut tokens = Tokens::new(payload);
    let mut channel = |index: usize| -> Result<u8, PpmError> {
        let (_, token) = tokens
            .next_token()
            .ok_or(PpmError::MissingToken { index })?;
        validate::channel(parse_channel(token, index)?, max, index)
    };

    for row in 0..header.height as usize {
        if row % 16 == 0 {
            stop.check()?;
        }
        for col in 0..w {
            let base = (row * w + col) * 3;
            let r = channel(base)?;
            let g = channel(base + 1)?;
            let b = channel(base + 2)?;
            pixels.push(RGB8::new(r, g, b));
        }
    }

    if let Some((pos, _)) = tokens.next_token() {
        warn!("P3 payload has data after {} channel tokens", count * 3);
        return Err(PpmError::TrailingData {
            offset: offset + pos,
        });
    }
    Ok(pixels)
}
