use enough::StopReason;

/// Header token a failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderField {
    Magic,
    Width,
    Height,
    MaxValue,
}

impl core::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Magic => "magic number",
            Self::Width => "width",
            Self::Height => "height",
            Self::MaxValue => "max channel value",
        })
    }
}

/// Errors from PPM decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[error("invalid magic byte 0x{found:02x}, expected 'P'")]
    InvalidMagic { found: u8 },

    #[error("unsupported PPM variant 0x{found:02x}, expected '3' or '6'")]
    UnsupportedVariant { found: u8 },

    #[error("missing whitespace separator after {after}")]
    MissingSeparator { after: HeaderField },

    #[error("unexpected end of input")]
    TruncatedInput,

    #[error("{field} is not a decimal integer")]
    InvalidNumber { field: HeaderField },

    #[error("{field} must be between 1 and 4294967295, got {value}")]
    InvalidDimension { field: HeaderField, value: i64 },

    #[error("max channel value must be between 0 and 255, got {value}")]
    InvalidMaxValue { value: i64 },

    #[error("channel {index} has value {value}, above max channel value {max}")]
    ChannelOutOfRange { index: usize, value: u16, max: u8 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(alloc::string::String),

    #[error("no pixel data after header")]
    EmptyPayload,

    #[error("pixel data too short: need {expected} bytes, got {actual}")]
    PayloadTooShort { expected: usize, actual: usize },

    #[error("missing channel token {index}")]
    MissingToken { index: usize },

    #[error("channel token {index} is not a decimal value of at most 3 digits")]
    MalformedToken { index: usize },

    #[error("unexpected data after pixel payload at offset {offset}")]
    TrailingData { offset: usize },

    #[error("header {header_width}x{header_height} max {header_max} does not describe a {width}x{height} max {max} image")]
    HeaderMismatch {
        header_width: u32,
        header_height: u32,
        header_max: u8,
        width: u32,
        height: u32,
        max: u8,
    },

    #[error("pixel buffer holds {actual} pixels, {width}x{height} needs {expected}")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[cfg(feature = "std")]
    #[error("failed to read input: {0}")]
    ReadFailure(#[source] std::io::Error),

    #[cfg(feature = "std")]
    #[error("failed to write output: {0}")]
    WriteFailure(#[source] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Error returned by the decoding entry points.
pub type DecodeError = PpmError;

/// Error returned by the encoding entry points.
pub type EncodeError = PpmError;

impl From<StopReason> for PpmError {
    fn from(r: StopReason) -> Self {
        PpmError::Cancelled(r)
    }
}
