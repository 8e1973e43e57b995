use {
  super::{Color, Size},
  crate::error::ErrorKind,
  anyhow::Result,
};

/// Row-major grid of colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
  size: Size,
  pixels: Vec<Color>,
}

impl Picture {
  /// Picture filled with a single color.
  pub fn new(size: Size, fill: Color) -> Self {
    Self {
      size,
      pixels: vec![fill; size.width * size.height]
    }
  }

  /// `f(row, col)` yields the color of every pixel.
  pub fn from_fn(size: Size, f: impl Fn(usize, usize) -> Color) -> Self {
    let pixels = itertools::iproduct!(0..size.height, 0..size.width)
      .map(|(row, col)| f(row, col))
      .collect();
    Self { size, pixels }
  }

  pub fn from_pixels(size: Size, pixels: Vec<Color>) -> Result<Self> {
    let expected = size.width * size.height;
    if pixels.len() != expected {
      return Err(ErrorKind::PixelCountMismatch { expected, actual: pixels.len() }.into());
    }
    Ok(Self { size, pixels })
  }

  pub fn size(&self) -> Size { self.size }
  pub fn width(&self) -> usize { self.size.width }
  pub fn height(&self) -> usize { self.size.height }

  /// Zero width or zero height.
  pub fn is_empty(&self) -> bool {
    self.pixels.is_empty()
  }

  #[inline]
  pub fn offset(&self, row: usize, col: usize) -> usize {
    row * self.size.width + col
  }

  #[inline]
  pub fn get(&self, row: usize, col: usize) -> Color {
    self.pixels[self.offset(row, col)]
  }

  #[inline]
  pub fn set(&mut self, row: usize, col: usize, color: Color) {
    let offset = self.offset(row, col);
    self.pixels[offset] = color;
  }

  /// Pixels in raster order.
  pub fn pixels(&self) -> &[Color] {
    &self.pixels
  }

  pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
    // `max(1)` keeps `chunks` well-defined for zero-width pictures, which hold no pixels.
    self.pixels.chunks(self.size.width.max(1))
  }

  /// Summed squared channel difference against another picture of the same size.
  pub fn distance_sq(&self, other: &Picture) -> i64 {
    self.pixels.iter()
      .zip(other.pixels.iter())
      .map(|(&a, &b)| a.distance_sq(b))
      .sum()
  }
}
