use {
  crate::{
    geometry::{Color, P2, Size},
    palette::Palette
  },
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::f64::consts::{FRAC_PI_2, PI},
};


pub const DEFAULT_SEED: u64 = 3141592;

/// Stable handle of a stroke: the index of its slot in the stroke arena.
pub type StrokeId = usize;

/// One straight paint mark.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
  /// `x` = row, `y` = column.
  pub start: P2,
  /// Radians, in `(-π, π]`.
  pub direction: f64,
  /// Length in pixels.
  pub power: f64,
  pub color: Color,
}

impl Stroke {
  /// Visit every pixel covered by the stroke as `(row, col)`, each exactly once.
  ///
  /// The stroke advances one row per step (downwards for directions in `(-π/2, π/2]`,
  /// upwards otherwise) and covers a run of `min(|sec θ|, power)` columns around its
  /// center line.
  pub fn trace(&self, size: Size, mut visit: impl FnMut(usize, usize)) {
    let slope = self.direction.tan();
    let half_width = (1.0 / self.direction.cos()).abs().min(self.power) / 2.0;
    let sign = if self.direction > -FRAC_PI_2 && self.direction <= FRAC_PI_2 { 1 } else { -1 };
    let norm = (1.0 + slope * slope).sqrt();
    let (rows, cols) = (size.height as i64, size.width as i64);

    let mut i = 0i64;
    while (i as f64) * norm < self.power {
      let row = self.start.x + sign * i;
      if row < 0 || row >= rows { break; }

      let center = slope * (sign * i) as f64;
      // offsets are clipped to the columns of the canvas
      let lo = ((center - half_width).floor() as i64).max(-self.start.y);
      let hi = ((center + half_width).floor() as i64).min(cols - 1 - self.start.y);
      for j in lo..=hi {
        visit(row as usize, (self.start.y + j) as usize);
      }
      i += 1;
    }
  }

  /// Covered pixels, in walk order.
  pub fn footprint(&self, size: Size) -> Vec<(usize, usize)> {
    let mut pixels = vec![];
    self.trace(size, |row, col| pixels.push((row, col)));
    pixels
  }
}

/// Reproducible stream of random strokes.
///
/// Every call builds a fresh generator from the current seed and then bumps the seed, so the
/// n-th stroke only depends on the initial seed and `n`.
#[derive(Debug, Clone)]
pub struct StrokeGenerator {
  seed: u64
}

impl Default for StrokeGenerator {
  fn default() -> Self { Self::new(DEFAULT_SEED) }
}

impl StrokeGenerator {
  pub fn new(seed: u64) -> Self {
    Self { seed }
  }

  /// Seed of the next stroke.
  pub fn seed(&self) -> u64 { self.seed }

  pub fn generate(&mut self, size: Size, palette: &Palette) -> Stroke {
    let mut rng = Pcg64::seed_from_u64(self.seed);
    self.seed = self.seed.wrapping_add(1);

    let width = size.width as f64;
    // negated half-open draw: (-π, π]
    let direction = -rng.gen_range(-PI..PI);
    let power = rng.gen_range(width / 20.0..width / 10.0);
    let start = P2::new(
      rng.gen_range(0..size.height) as i64,
      rng.gen_range(0..size.width) as i64
    );
    let color = palette.get(rng.gen_range(0..palette.len()));

    Stroke { start, direction, power, color }
  }
}
