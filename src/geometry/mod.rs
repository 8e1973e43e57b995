//! .
//!
//! The origin of the coordinate system is the top-left pixel. Following the stroke model,
//! `x` addresses rows (`0..height`) and `y` addresses columns (`0..width`).

use euclid::{Point2D, Size2D};

pub mod picture;
pub use picture::Picture;


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

/// Canvas dimensions; `width` counts columns, `height` counts rows.
pub type Size = Size2D<usize, PixelSpace>;
/// Signed pixel position, `x` = row, `y` = column. May lie outside of the canvas.
pub type P2 = Point2D<i64, PixelSpace>;

/// 8-bit RGB triple.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
  /// Untouched canvas.
  pub const BLANK: Color = Color([u8::MAX; 3]);

  pub fn is_blank(self) -> bool {
    self == Self::BLANK
  }

  /// Sum of squared per-channel differences.
  pub fn distance_sq(self, other: Color) -> i64 {
    self.0.iter()
      .zip(other.0.iter())
      .map(|(&a, &b)| {
        let d = a as i64 - b as i64;
        d * d
      })
      .sum()
  }
}

impl Default for Color {
  fn default() -> Self { Self::BLANK }
}

impl From<[u8; 3]> for Color {
  fn from(rgb: [u8; 3]) -> Self { Color(rgb) }
}
