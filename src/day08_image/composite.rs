//! Flattening a [`LayerSet`] into the single image which is visible from the front

use std::{
    fmt::{Debug, Display, Formatter, Write},
    path::Path,
};

use cgmath::Vector2;
use itertools::Itertools;
use log::debug;

use super::{Layer, LayerSet};
use crate::{Error, Result};

/// The colour encoded by a single digit of a layered image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    Black,
    White,
    Transparent,
}

impl Pixel {
    pub fn from_digit(digit: u8) -> Result<Self> {
        match digit {
            0 => Ok(Self::Black),
            1 => Ok(Self::White),
            2 => Ok(Self::Transparent),
            _ => Err(Error::InvalidPixel { digit }),
        }
    }

    pub fn digit(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::White => 1,
            Self::Transparent => 2,
        }
    }

    pub fn is_transparent(self) -> bool {
        self == Self::Transparent
    }

    /// Colour of this pixel in 8-bit RGBA
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Self::Black => [0, 0, 0, u8::MAX],
            Self::White => [u8::MAX, u8::MAX, u8::MAX, u8::MAX],
            Self::Transparent => [0, 0, 0, 0],
        }
    }

    fn display_char(self) -> char {
        match self {
            Self::Black => ' ',
            Self::White => '#',
            Self::Transparent => '.',
        }
    }
}

/// The result of compositing a [`LayerSet`]: one resolved [`Pixel`] for every coordinate
#[derive(Clone, PartialEq, Eq)]
pub struct Composite {
    size: Vector2<u32>,
    /// Row-major, so `(x, y)` is stored at `y * size.x + x`
    pixels: Vec<Pixel>,
}

impl Composite {
    pub fn size(&self) -> Vector2<u32> {
        self.size
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.x as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.size.x as usize)
    }

    /// Convert to an [`image::RgbaImage`] buffer, ready to be written to a file
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.size.x, self.size.y, |x, y| {
            let pixel = self.get(x, y).unwrap_or(Pixel::Transparent);
            image::Rgba(pixel.rgba())
        })
    }

    /// Write this image to `path`.  The format is chosen from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_rgba_image().save(path)?;
        Ok(())
    }
}

impl Display for Composite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for pixel in row {
                f.write_char(pixel.display_char())?;
            }
        }
        Ok(())
    }
}

impl Debug for Composite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Composite({}x{})", self.size.x, self.size.y)
    }
}

///////////////
// COMPOSITE //
///////////////

impl LayerSet {
    /// Resolve every coordinate to the first non-transparent pixel found when scanning the layers
    /// from front to back.  Where every layer is transparent, the back layer's (transparent) pixel
    /// is used.  Every digit of every layer must be a pixel code, even if it would be hidden.
    pub fn composite(&self) -> Result<Composite> {
        let back = self.iter().next_back().ok_or(Error::NoLayers)?;
        self.digits()
            .try_for_each(|digit| Pixel::from_digit(digit).map(drop))?;
        let size = self.size();
        let pixels = (0..size.y as usize)
            .cartesian_product(0..size.x as usize)
            .map(|(y, x)| self.resolve(back, x, y))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Composited {} layers into a {}x{} image",
            self.len(),
            size.x,
            size.y
        );
        Ok(Composite { size, pixels })
    }

    fn resolve(&self, back: &Layer, x: usize, y: usize) -> Result<Pixel> {
        for layer in self.iter() {
            let pixel = Pixel::from_digit(layer.digit(x, y))?;
            if !pixel.is_transparent() {
                return Ok(pixel);
            }
        }
        Pixel::from_digit(back.digit(x, y))
    }
}
