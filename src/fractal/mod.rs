//! Box-counting estimate of the fractal dimension of the painted area.
//!
//! Level `l` of the hierarchy tiles the canvas with boxes of side `2^l` pixels and counts the
//! non-blank pixels inside each box. There is one level per halving of the canvas width,
//! down to a single box column. The dimension is minus the slope of `log2(occupied boxes)`
//! against the level index.

use {
  crate::geometry::{Picture, Size},
  regression::{least_squares, variance},
};

pub mod regression;

#[cfg(test)] mod tests;

/// Level whose box occupancy spread enters the statistic (boxes of 8x8 pixels).
pub const VARIANCE_LEVEL: usize = 3;
/// Slope reported when the hierarchy has a single level and no line can be fit.
pub const SINGULAR_SLOPE: f64 = f64::INFINITY;

/// Receives blank/non-blank crossings of canvas pixels.
pub trait Occupancy {
  fn on_pixel_transition(&mut self, x: usize, y: usize, became_non_blank: bool);
}

/// Ignores all transitions.
impl Occupancy for () {
  fn on_pixel_transition(&mut self, _: usize, _: usize, _: bool) {}
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FractalStat {
  /// Estimated box-counting dimension.
  pub frac: f64,
  /// Coefficient of determination of the log-log fit.
  pub r: f64,
  /// Population variance of box occupancy at [`VARIANCE_LEVEL`].
  pub var: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Level {
  /// log2 of the box side
  shift: u32,
  /// boxes per row of boxes
  columns: usize,
  counts: Vec<u32>,
  occupied: usize,
}

impl Level {
  fn new(shift: u32, size: Size) -> Self {
    let side = 1usize << shift;
    let rows = (size.height + side - 1) >> shift;
    let columns = (size.width + side - 1) >> shift;
    Self { shift, columns, counts: vec![0; rows * columns], occupied: 0 }
  }

  #[inline]
  fn index(&self, x: usize, y: usize) -> usize {
    (x >> self.shift) * self.columns + (y >> self.shift)
  }
}

/// Incrementally maintained multi-resolution occupancy counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
  levels: Vec<Level>,
}

impl Hierarchy {
  /// Empty hierarchy for an all-blank canvas of `size`.
  pub fn new(size: Size) -> Self {
    let level_count = match size.width {
      0 => 0,
      width => width.ilog2() + 1
    };
    Self {
      levels: (0..level_count).map(|shift| Level::new(shift, size)).collect()
    }
  }

  /// Hierarchy counting the non-blank pixels of `picture`.
  pub fn from_picture(picture: &Picture) -> Self {
    let mut hierarchy = Self::new(picture.size());
    itertools::iproduct!(0..picture.height(), 0..picture.width())
      .filter(|&(x, y)| !picture.get(x, y).is_blank())
      .for_each(|(x, y)| hierarchy.on_pixel_transition(x, y, true));
    hierarchy
  }

  pub fn levels(&self) -> usize { self.levels.len() }

  /// Number of boxes with at least one non-blank pixel, per level.
  pub fn box_counts(&self) -> Vec<usize> {
    self.levels.iter().map(|level| level.occupied).collect()
  }

  /// Non-blank pixels in box `(bx, by)` of `level`.
  pub fn occupancy(&self, level: usize, bx: usize, by: usize) -> u32 {
    let level = &self.levels[level];
    level.counts[bx * level.columns + by]
  }

  /// Occupied boxes of `level`, counted by a full scan.
  pub fn rescan_box_count(&self, level: usize) -> usize {
    self.levels[level].counts.iter()
      .filter(|&&count| count > 0)
      .count()
  }

  /// Fit the log-log line over all levels and measure the occupancy spread.
  pub fn recompute(&self) -> FractalStat {
    let (frac, r) = dimension(&self.box_counts());
    let var = self.levels
      .get(VARIANCE_LEVEL.min(self.levels.len().saturating_sub(1)))
      .map_or(0.0, |level| variance(level.counts.iter().map(|&count| count as f64)));
    FractalStat { frac, r, var }
  }
}

impl Occupancy for Hierarchy {
  fn on_pixel_transition(&mut self, x: usize, y: usize, became_non_blank: bool) {
    for level in self.levels.iter_mut() {
      let index = level.index(x, y);
      let count = &mut level.counts[index];
      if became_non_blank {
        if *count == 0 { level.occupied += 1; }
        *count += 1;
      } else {
        *count -= 1;
        if *count == 0 { level.occupied -= 1; }
      }
    }
  }
}

/// `(frac, r)` for the box counts of consecutive levels, finest first.
///
/// Empty levels count as a single box, which only happens on a fully blank canvas.
pub fn dimension(box_counts: &[usize]) -> (f64, f64) {
  let xs: Vec<f64> = (0..box_counts.len()).map(|level| level as f64).collect();
  let ys: Vec<f64> = box_counts.iter()
    .map(|&count| (count.max(1) as f64).log2())
    .collect();
  match least_squares(&xs, &ys) {
    Some(fit) => (-fit.slope, fit.r),
    None => (-SINGULAR_SLOPE, 0.0)
  }
}
