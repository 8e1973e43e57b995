//! Conversion between [`Picture`] and image files. Requires the `codec` feature.
//!
//! Image `x` is the picture column and image `y` the picture row.

use {
  crate::geometry::{Color, Picture, Size},
  anyhow::{Context, Result},
  image::{Rgb, RgbImage},
  std::path::Path,
};

pub fn from_rgb_image(image: &RgbImage) -> Picture {
  let size = Size::new(image.width() as usize, image.height() as usize);
  Picture::from_fn(size, |row, col| Color(image.get_pixel(col as u32, row as u32).0))
}

pub fn to_rgb_image(picture: &Picture) -> RgbImage {
  RgbImage::from_fn(picture.width() as u32, picture.height() as u32, |x, y| {
    Rgb(picture.get(y as usize, x as usize).0)
  })
}

/// Decode any supported format; alpha and extra channels are dropped.
pub fn load(path: impl AsRef<Path>) -> Result<Picture> {
  let path = path.as_ref();
  let image = image::open(path)
    .with_context(|| format!("failed to read {}", path.display()))?
    .to_rgb8();
  Ok(from_rgb_image(&image))
}

/// Encode by file extension.
pub fn save(picture: &Picture, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  to_rgb_image(picture)
    .save(path)
    .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn gradient() -> Picture {
    Picture::from_fn(Size::new(5, 3), |row, col| Color([row as u8 * 80, col as u8 * 50, 7]))
  }

  #[test] fn image_axes() {
    let image = to_rgb_image(&gradient());
    assert_eq!(image.dimensions(), (5, 3));
    assert_eq!(image.get_pixel(4, 2).0, [160, 200, 7]);
    assert_eq!(from_rgb_image(&image), gradient());
  }

  #[test] fn bmp_file() -> Result<()> {
    let path = std::env::temp_dir().join(format!("pollock-codec-{}.bmp", std::process::id()));
    save(&gradient(), &path)?;
    let loaded = load(&path);
    std::fs::remove_file(&path)?;
    assert_eq!(loaded?, gradient());
    Ok(())
  }

  #[test] fn missing_file() {
    let err = load("/nonexistent/reference.bmp").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/reference.bmp"));
  }
}
