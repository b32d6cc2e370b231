//! PPM header: `P3`/`P6` magic, width, height and maxval, separated by
//! whitespace and `#` line comments.

use crate::error::{HeaderField, PpmError};
use crate::log::debug;
use crate::validate;

/// Pixel encoding selected by the magic number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `P3`: decimal channel values separated by whitespace.
    Ascii,
    /// `P6`: one raw byte per channel.
    Binary,
}

impl Variant {
    /// The digit following `P` in the magic number.
    pub const fn digit(self) -> u8 {
        match self {
            Self::Ascii => b'3',
            Self::Binary => b'6',
        }
    }

    fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'3' => Some(Self::Ascii),
            b'6' => Some(Self::Binary),
            _ => None,
        }
    }
}

/// Parsed PPM header. Comments are discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub variant: Variant,
    pub width: u32,
    pub height: u32,
    pub max_value: u8,
}

impl Header {
    /// Parse only the header, without touching pixel data.
    pub fn from_bytes(data: &[u8]) -> Result<Header, PpmError> {
        let mut cursor = Cursor::new(data);
        parse(&mut cursor)
    }

    /// Header describing `image` in the given encoding.
    pub fn for_image(image: &crate::Image, variant: Variant) -> Header {
        Header {
            variant,
            width: image.width(),
            height: image.height(),
            max_value: image.max_value(),
        }
    }
}

/// Byte cursor over the input.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    #[inline]
    fn next_byte(&mut self) -> Result<u8, PpmError> {
        let byte = self.peek().ok_or(PpmError::TruncatedInput)?;
        self.pos += 1;
        Ok(byte)
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Everything not yet consumed.
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

/// Whitespace as C `isspace` sees it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub(crate) const fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0B
}

/// Skip any run of whitespace and complete `#` comments, leaving the cursor
/// on the first byte that is neither.
///
/// A comment cut off by end of input is an error: the token that should
/// follow it is missing.
pub(crate) fn skip_comments(cursor: &mut Cursor<'_>) -> Result<(), PpmError> {
    loop {
        match cursor.peek() {
            Some(byte) if is_space(byte) => cursor.pos += 1,
            Some(b'#') => loop {
                if cursor.next_byte()? == b'\n' {
                    break;
                }
            },
            _ => return Ok(()),
        }
    }
}

/// Consume the single whitespace byte that must follow every header token.
fn expect_separator(cursor: &mut Cursor<'_>, after: HeaderField) -> Result<(), PpmError> {
    if is_space(cursor.next_byte()?) {
        Ok(())
    } else {
        Err(PpmError::MissingSeparator { after })
    }
}

/// Read a decimal integer token, terminated by whitespace or end of input.
///
/// The terminating whitespace is left in place for [`expect_separator`].
fn read_integer(cursor: &mut Cursor<'_>, field: HeaderField) -> Result<i64, PpmError> {
    let start = cursor.pos;
    while cursor.peek().is_some_and(|b| !is_space(b)) {
        cursor.pos += 1;
    }
    let token = &cursor.data[start..cursor.pos];
    if token.is_empty() {
        return Err(PpmError::TruncatedInput);
    }

    let (negative, digits) = match token.split_first() {
        Some((&b'-', digits)) => (true, digits),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(PpmError::InvalidNumber { field });
    }
    let magnitude = digits.iter().try_fold(0i64, |acc, &d| {
        acc.checked_mul(10)?.checked_add(i64::from(d - b'0'))
    });
    let magnitude = magnitude.ok_or(PpmError::InvalidNumber { field })?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse magic, width, height and maxval, leaving the cursor just past the
/// separator that follows maxval.
pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<Header, PpmError> {
    let magic = cursor.next_byte()?;
    if magic != b'P' {
        return Err(PpmError::InvalidMagic { found: magic });
    }
    let digit = cursor.next_byte()?;
    let variant = Variant::from_digit(digit).ok_or(PpmError::UnsupportedVariant { found: digit })?;
    expect_separator(cursor, HeaderField::Magic)?;

    skip_comments(cursor)?;
    let width = validate::dimension(HeaderField::Width, read_integer(cursor, HeaderField::Width)?)?;
    expect_separator(cursor, HeaderField::Width)?;

    skip_comments(cursor)?;
    let height =
        validate::dimension(HeaderField::Height, read_integer(cursor, HeaderField::Height)?)?;
    expect_separator(cursor, HeaderField::Height)?;

    skip_comments(cursor)?;
    let max_value = validate::max_value(read_integer(cursor, HeaderField::MaxValue)?)?;
    expect_separator(cursor, HeaderField::MaxValue)?;

    debug!("PPM header: {variant:?} {width}x{height}, maxval {max_value}");

    Ok(Header {
        variant,
        width,
        height,
        max_value,
    })
}

/// Move from the maxval separator to the first byte of pixel data.
///
/// For P6 only `#` comment lines are skipped, and only while more bytes
/// remain than the payload needs, so a raw payload starting with a
/// whitespace or `#` byte is kept.
pub(crate) fn skip_to_payload(cursor: &mut Cursor<'_>, header: &Header) -> Result<(), PpmError> {
    match header.variant {
        Variant::Ascii => skip_comments(cursor),
        Variant::Binary => {
            let expected = validate::binary_payload_len(header.width, header.height)?;
            // Only whole comment lines are skipped, each with the whitespace
            // leading up to its `#`. Whitespace not followed by a comment is
            // pixel data.
            while cursor.rest().len() > expected {
                let rest = cursor.rest();
                let lead = rest.iter().take_while(|&&b| is_space(b)).count();
                if rest.get(lead) != Some(&b'#') {
                    break;
                }
                cursor.pos += lead;
                while cursor.next_byte()? != b'\n' {}
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(data: &[u8]) -> Result<Header, PpmError> {
        Header::from_bytes(data)
    }

    #[test]
    fn plain_header() {
        let h = header(b"P6\n2 1\n255\n").unwrap();
        assert_eq!(
            h,
            Header {
                variant: Variant::Binary,
                width: 2,
                height: 1,
                max_value: 255
            }
        );
        assert_eq!(header(b"P3 7 9 15 ").unwrap().variant, Variant::Ascii);
    }

    #[test]
    fn comments_after_every_separator() {
        let h = header(b"P3\n# one\n#two\n 4\t# w\n\n5 # h\n100\n# done\n").unwrap();
        assert_eq!((h.width, h.height, h.max_value), (4, 5, 100));
    }

    #[test]
    fn skipper_stops_on_first_token_byte() {
        let mut cursor = Cursor::new(b"  # a\n\t# b\r\n  42");
        skip_comments(&mut cursor).unwrap();
        assert_eq!(cursor.rest(), b"42");

        let mut cursor = Cursor::new(b"42");
        skip_comments(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn unterminated_comment_is_truncation() {
        let mut cursor = Cursor::new(b" # never ends");
        assert!(matches!(
            skip_comments(&mut cursor),
            Err(PpmError::TruncatedInput)
        ));
        assert!(matches!(
            header(b"P6\n# no newline"),
            Err(PpmError::TruncatedInput)
        ));
    }

    #[test]
    fn bad_magic_and_variant() {
        assert!(matches!(
            header(b"Q6\n1 1\n255\n"),
            Err(PpmError::InvalidMagic { found: b'Q' })
        ));
        assert!(matches!(
            header(b"P5\n1 1\n255\n"),
            Err(PpmError::UnsupportedVariant { found: b'5' })
        ));
        assert!(matches!(header(b""), Err(PpmError::TruncatedInput)));
        assert!(matches!(header(b"P"), Err(PpmError::TruncatedInput)));
    }

    #[test]
    fn separator_required_after_each_token() {
        assert!(matches!(
            header(b"P6#c\n1 1\n255\n"),
            Err(PpmError::MissingSeparator {
                after: HeaderField::Magic
            })
        ));
        // A comment glued to a number makes the token non-numeric.
        assert!(matches!(
            header(b"P6\n1# c\n1\n255\n"),
            Err(PpmError::InvalidNumber {
                field: HeaderField::Width
            })
        ));
        assert!(matches!(header(b"P6\n1 1\n255"), Err(PpmError::TruncatedInput)));
    }

    #[test]
    fn dimension_and_maxval_ranges() {
        assert!(matches!(
            header(b"P6\n0 1\n255\n"),
            Err(PpmError::InvalidDimension {
                field: HeaderField::Width,
                value: 0
            })
        ));
        assert!(matches!(
            header(b"P6\n1 -2\n255\n"),
            Err(PpmError::InvalidDimension {
                field: HeaderField::Height,
                value: -2
            })
        ));
        assert!(matches!(
            header(b"P6\n1 1\n256\n"),
            Err(PpmError::InvalidMaxValue { value: 256 })
        ));
        assert_eq!(header(b"P6\n1 1\n0\n").unwrap().max_value, 0);
    }

    #[test]
    fn non_numeric_tokens() {
        assert!(matches!(
            header(b"P6\nabc 1\n255\n"),
            Err(PpmError::InvalidNumber {
                field: HeaderField::Width
            })
        ));
        assert!(matches!(
            header(b"P6\n1 1\n-\n"),
            Err(PpmError::InvalidNumber {
                field: HeaderField::MaxValue
            })
        ));
        assert!(matches!(
            header(b"P6\n99999999999999999999 1\n255\n"),
            Err(PpmError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn binary_payload_starting_with_space_is_kept() {
        let data = b"P6\n1 1\n255\n \n#";
        let mut cursor = Cursor::new(data);
        let h = parse(&mut cursor).unwrap();
        skip_to_payload(&mut cursor, &h).unwrap();
        assert_eq!(cursor.rest(), b" \n#");
    }

    #[test]
    fn binary_payload_after_comment() {
        let data = b"P6\n1 1\n255\n# pixels follow\nabc";
        let mut cursor = Cursor::new(data);
        let h = parse(&mut cursor).unwrap();
        skip_to_payload(&mut cursor, &h).unwrap();
        assert_eq!(cursor.rest(), b"abc");
    }

    #[test]
    fn binary_payload_of_spaces_after_comment() {
        let data = b"P6\n1 1\n255\n# c\n   ";
        let mut cursor = Cursor::new(data);
        let h = parse(&mut cursor).unwrap();
        skip_to_payload(&mut cursor, &h).unwrap();
        assert_eq!(cursor.rest(), b"   ");
    }

    #[test]
    fn binary_leading_space_without_comment_is_payload() {
        let data = b"P6\n1 1\n255\n \0\0\x09";
        let mut cursor = Cursor::new(data);
        let h = parse(&mut cursor).unwrap();
        skip_to_payload(&mut cursor, &h).unwrap();
        assert_eq!(cursor.rest(), b" \0\0\x09");

        let data = b"P6\n1 1\n255\n\n  # c\n# d\n \0\0\x09";
        let mut cursor = Cursor::new(data);
        let h = parse(&mut cursor).unwrap();
        skip_to_payload(&mut cursor, &h).unwrap();
        assert_eq!(cursor.rest(), b" \0\0\x09");
    }
}
