//! Color quantization of the reference picture.
//!
//! Centers are seeded with k-means++ (distance-weighted sampling over the cumulative squared
//! distance in raster order), then refined by Lloyd iterations.

use {
  crate::{
    error::ErrorKind,
    geometry::{Color, Picture}
  },
  anyhow::Result,
  log::debug,
  rand::prelude::*,
  rand_pcg::Pcg64,
};

#[cfg(test)] mod tests;

pub const DEFAULT_SEED: u64 = 653589;
/// Upper bound on Lloyd refinement passes.
pub const MAX_ITERATIONS: usize = 1000;

/// Fixed, ordered list of representative colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
  colors: Vec<Color>
}

impl Palette {
  /// Cluster the pixels of `reference` into exactly `k` colors.
  ///
  /// When the picture holds fewer than `k` distinct colors some entries are duplicates.
  pub fn build(reference: &Picture, k: usize, seed: u64) -> Result<Self> {
    if reference.is_empty() {
      return Err(ErrorKind::InvalidDimensions {
        width: reference.width(),
        height: reference.height()
      }.into());
    }
    if k == 0 {
      return Err(ErrorKind::InvalidClusterCount(k).into());
    }

    let pixels = reference.pixels();
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut centers = seed_centers(pixels, k, &mut rng);
    let iterations = refine(pixels, &mut centers);
    debug!("palette: {} colors, converged after {} iterations", k, iterations);

    Ok(Self { colors: centers })
  }

  pub fn from_colors(colors: Vec<Color>) -> Result<Self> {
    if colors.is_empty() {
      return Err(ErrorKind::InvalidClusterCount(0).into());
    }
    Ok(Self { colors })
  }

  pub fn colors(&self) -> &[Color] { &self.colors }

  pub fn len(&self) -> usize { self.colors.len() }

  /// Always `false`: a palette holds at least one color.
  pub fn is_empty(&self) -> bool { self.colors.is_empty() }

  pub fn get(&self, index: usize) -> Color { self.colors[index] }
}

/// Index and squared distance of the nearest center. Ties go to the lowest index.
fn nearest(centers: &[Color], pixel: Color) -> (usize, i64) {
  let mut best = (0, i64::MAX);
  for (i, center) in centers.iter().enumerate() {
    let distance = center.distance_sq(pixel);
    if best.1 > distance {
      best = (i, distance);
    }
  }
  best
}

fn seed_centers(pixels: &[Color], k: usize, rng: &mut Pcg64) -> Vec<Color> {
  let mut centers = Vec::with_capacity(k);
  centers.push(pixels[rng.gen_range(0..pixels.len())]);

  let mut cumulative = vec![0u64; pixels.len()];
  while centers.len() < k {
    let mut total = 0u64;
    for (acc, &pixel) in cumulative.iter_mut().zip(pixels) {
      total += nearest(&centers, pixel).1 as u64;
      *acc = total;
    }
    let next = if total == 0 {
      // every pixel sits on a center already
      rng.gen_range(0..pixels.len())
    } else {
      let draw = rng.gen_range(1..=total);
      cumulative.partition_point(|&c| c < draw)
    };
    centers.push(pixels[next]);
  }
  centers
}

/// Lloyd iterations; returns the number of passes performed.
fn refine(pixels: &[Color], centers: &mut [Color]) -> usize {
  let k = centers.len();
  let mut labels = vec![0usize; pixels.len()];

  for iteration in 1..=MAX_ITERATIONS {
    let previous = centers.to_vec();
    let mut sums = vec![[0u64; 3]; k];
    let mut counts = vec![0u64; k];
    let mut changed = false;

    for (label, &pixel) in labels.iter_mut().zip(pixels) {
      let (cluster, _) = nearest(&previous, pixel);
      changed |= *label != cluster;
      *label = cluster;
      counts[cluster] += 1;
      sums[cluster].iter_mut()
        .zip(pixel.0)
        .for_each(|(sum, channel)| *sum += channel as u64);
    }

    centers.iter_mut()
      .zip(sums.iter().zip(&counts))
      .filter(|(_, (_, count))| **count > 0)
      .for_each(|(center, (sum, &count))| {
        *center = Color(sum.map(|channel| (channel / count) as u8));
      });

    if !changed {
      return iteration;
    }
  }
  MAX_ITERATIONS
}
