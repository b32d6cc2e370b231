//! The decoded image and its pixel accessors.

use alloc::vec::Vec;

use rgb::{ComponentBytes, RGB8};

use crate::error::PpmError;
use crate::validate;

/// A decoded PPM image: `width * height` RGB pixels in row-major order,
/// row 0 at the top.
///
/// Every channel is at most [`max_value`](Self::max_value). The buffer length
/// always equals `width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    max_value: u8,
    pixels: Vec<RGB8>,
}

impl Image {
    /// Build an image from row-major pixels, checking the buffer length and
    /// every channel against `max_value`.
    pub fn new(width: u32, height: u32, max_value: u8, pixels: Vec<RGB8>) -> Result<Image, PpmError> {
        if width == 0 {
            return Err(PpmError::InvalidDimension {
                field: crate::HeaderField::Width,
                value: 0,
            });
        }
        if height == 0 {
            return Err(PpmError::InvalidDimension {
                field: crate::HeaderField::Height,
                value: 0,
            });
        }
        let expected = validate::pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(PpmError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        for (index, &value) in pixels.as_bytes().iter().enumerate() {
            validate::channel(u16::from(value), max_value, index)?;
        }
        Ok(Self::from_parts(width, height, max_value, pixels))
    }

    /// Caller has already validated every invariant.
    pub(crate) fn from_parts(width: u32, height: u32, max_value: u8, pixels: Vec<RGB8>) -> Image {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Image {
            width,
            height,
            max_value,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Declared maximum channel intensity.
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// Pixels as packed `r, g, b` bytes, ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Pixel at `(row, col)`, or `None` outside the image.
    pub fn get(&self, row: u32, col: u32) -> Option<RGB8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// One row of pixels.
    pub fn row(&self, row: u32) -> Option<&[RGB8]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        self.pixels.get(start..start + w)
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<RGB8> {
        self.pixels
    }

    /// Zero-copy 2D view for renderers.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Convert into an owned 2D buffer.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<RGB8> {
        imgref::ImgVec::new(self.pixels, self.width as usize, self.height as usize)
    }
}
