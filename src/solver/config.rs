use {
  crate::{
    fractal::FractalStat,
    palette,
    stroke
  },
  std::time::Duration,
};

pub const DEFAULT_SEARCH_SEED: u64 = 793238;

/// Engine parameters. The defaults reproduce the reference program.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  /// Palette size `k`.
  pub clusters: usize,
  /// Box-counting dimension the penalty pulls toward.
  pub target_dimension: f64,
  /// Wall-clock length of the search.
  pub budget: Duration,
  /// Random strokes painted before the search starts.
  pub initial_strokes: usize,
  /// Moves between two deadline checks; one telemetry sample is recorded per pass.
  pub moves_per_pass: usize,
  /// Penalty per pixel and per unit of `|frac - target_dimension|`.
  pub fractal_weight: f64,
  /// Penalty per pixel and per unit of occupancy variance.
  pub variance_weight: f64,
  pub palette_seed: u64,
  pub stroke_seed: u64,
  pub search_seed: u64,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      clusters: 8,
      target_dimension: 1.9,
      budget: Duration::from_secs(60),
      initial_strokes: 10000,
      moves_per_pass: 1,
      fractal_weight: 1000.0,
      variance_weight: 1.0,
      palette_seed: palette::DEFAULT_SEED,
      stroke_seed: stroke::DEFAULT_SEED,
      search_seed: DEFAULT_SEARCH_SEED,
    }}}

impl Config {
  pub fn with_clusters(mut self, clusters: usize) -> Self {
    self.clusters = clusters;
    self
  }
  pub fn with_target_dimension(mut self, target: f64) -> Self {
    self.target_dimension = target;
    self
  }
  pub fn with_budget(mut self, budget: Duration) -> Self {
    self.budget = budget;
    self
  }
  /// Negative and NaN values yield an empty budget; budgets too long for a `Duration`
  /// saturate to `Duration::MAX`, which never runs out.
  pub fn with_budget_minutes(self, minutes: f64) -> Self {
    let seconds = minutes * 60.0;
    let budget = if seconds.is_nan() || seconds <= 0.0 {
      Duration::ZERO
    } else {
      Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
    };
    self.with_budget(budget)
  }
  pub fn with_initial_strokes(mut self, strokes: usize) -> Self {
    self.initial_strokes = strokes;
    self
  }
  pub fn with_moves_per_pass(mut self, moves: usize) -> Self {
    self.moves_per_pass = moves;
    self
  }
  /// Set both penalty weights; zero disables the fractal term.
  pub fn with_penalty_weights(mut self, fractal: f64, variance: f64) -> Self {
    self.fractal_weight = fractal;
    self.variance_weight = variance;
    self
  }
  pub fn with_seeds(mut self, palette: u64, stroke: u64, search: u64) -> Self {
    self.palette_seed = palette;
    self.stroke_seed = stroke;
    self.search_seed = search;
    self
  }

  /// Fractality part of the score for a canvas of `pixels` pixels.
  ///
  /// A non-finite dimension (single-level hierarchy) contributes no deviation.
  pub fn penalty(&self, stat: &FractalStat, pixels: usize) -> f64 {
    let deviation = if stat.frac.is_finite() {
      (stat.frac - self.target_dimension).abs()
    } else {
      0.0
    };
    pixels as f64 * (self.fractal_weight * deviation + self.variance_weight * stat.var)
  }
}
