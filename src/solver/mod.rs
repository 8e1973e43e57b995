//! Time-boxed hill climbing over stroke sets.
//!
//! Each move replaces, adds or removes one stroke. A move is kept only if it strictly lowers
//! the score; otherwise it is undone with the inverse canvas operation, which leaves the
//! canvas, the ownership index, the stroke arena and the occupancy hierarchy exactly as they
//! were.

use {
  crate::{
    canvas::Canvas,
    error::ErrorKind,
    fractal::{FractalStat, Hierarchy},
    geometry::Picture,
    palette::Palette,
    stroke::{Stroke, StrokeGenerator, StrokeId}
  },
  anyhow::Result,
  log::{debug, info, trace},
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::{
    ops::{Add, AddAssign, Sub},
    time::{Duration, Instant}
  },
};

pub mod config;
pub mod telemetry;
pub use config::Config;
pub use telemetry::{DatWriter, Sample, TelemetrySink};


/// Pixel error and fractality penalty. Lower is better.
///
/// Also used for score deltas; the pixel part is exact.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Score {
  pub pixel: i64,
  pub penalty: f64,
}

impl Score {
  pub fn total(&self) -> f64 {
    self.pixel as f64 + self.penalty
  }
}

impl Add for Score {
  type Output = Score;
  fn add(self, rhs: Score) -> Score {
    Score { pixel: self.pixel + rhs.pixel, penalty: self.penalty + rhs.penalty }
  }
}

impl Sub for Score {
  type Output = Score;
  fn sub(self, rhs: Score) -> Score {
    Score { pixel: self.pixel - rhs.pixel, penalty: self.penalty - rhs.penalty }
  }
}

impl AddAssign for Score {
  fn add_assign(&mut self, rhs: Score) { *self = *self + rhs; }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
  Idle,
  Running,
  Done,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
  Replace,
  Add,
  Remove,
}

/// What it takes to undo an applied move.
#[derive(Debug, Copy, Clone)]
enum Undo {
  Replace { id: StrokeId, old: Stroke },
  Add { id: StrokeId },
  Remove { id: StrokeId, old: Stroke },
}

/// Outcome of a single move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
  pub kind: MoveKind,
  pub accepted: bool,
  pub delta: Score,
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Summary {
  pub moves: u64,
  pub accepted: u64,
  pub rejected: u64,
  pub passes: u64,
  pub elapsed: Duration,
}

pub struct Engine {
  config: Config,
  palette: Palette,
  generator: StrokeGenerator,
  canvas: Canvas,
  fractal: Hierarchy,
  stat: FractalStat,
  score: Score,
  rng: Pcg64,
  phase: Phase,
}

impl Engine {
  /// Build the palette, paint the initial strokes and score the result.
  pub fn new(reference: Picture, config: Config) -> Result<Self> {
    if reference.is_empty() {
      return Err(ErrorKind::InvalidDimensions {
        width: reference.width(),
        height: reference.height()
      }.into());
    }

    let palette = crate::profile!("palette", Palette::build(&reference, config.clusters, config.palette_seed))?;
    let mut generator = StrokeGenerator::new(config.stroke_seed);
    let mut fractal = Hierarchy::new(reference.size());
    let mut canvas = Canvas::new(reference);

    crate::profile!("initial strokes", {
      for _ in 0..config.initial_strokes {
        let stroke = generator.generate(canvas.size(), &palette);
        canvas.draw(canvas.next_id(), stroke, &mut fractal);
      }
    });

    let stat = fractal.recompute();
    let pixels = canvas.size().area();
    let score = Score {
      pixel: canvas.pixel_error(),
      penalty: config.penalty(&stat, pixels)
    };
    info!("initialized {:?}, score {}, {:?}", canvas, score.total(), stat);

    Ok(Self {
      rng: Pcg64::seed_from_u64(config.search_seed),
      config,
      palette,
      generator,
      canvas,
      fractal,
      stat,
      score,
      phase: Phase::Idle,
    })
  }

  pub fn config(&self) -> &Config { &self.config }
  pub fn palette(&self) -> &Palette { &self.palette }
  pub fn canvas(&self) -> &Canvas { &self.canvas }
  pub fn hierarchy(&self) -> &Hierarchy { &self.fractal }
  pub fn stat(&self) -> FractalStat { self.stat }
  pub fn phase(&self) -> Phase { self.phase }

  /// Running score, maintained by deltas only.
  pub fn score(&self) -> Score { self.score }

  /// Score recomputed from the canvas alone.
  pub fn full_score(&self) -> Score {
    let stat = Hierarchy::from_picture(self.canvas.image()).recompute();
    Score {
      pixel: self.canvas.pixel_error(),
      penalty: self.config.penalty(&stat, self.canvas.size().area())
    }
  }

  pub fn into_picture(self) -> Picture {
    self.canvas.into_image()
  }

  /// Search until the budget runs out, recording one sample per pass.
  ///
  /// The deadline is checked between passes only, so the last pass may overrun it.
  pub fn run(&mut self, sink: &mut impl TelemetrySink) -> Result<Summary> {
    if self.phase != Phase::Idle {
      return Err(ErrorKind::SearchFinished.into());
    }
    self.phase = Phase::Running;
    info!("search: {:?} budget, score {}", self.config.budget, self.score.total());

    let started = Instant::now();
    // an unrepresentable deadline never arrives
    let deadline = started.checked_add(self.config.budget);
    let mut summary = Summary::default();

    while deadline.map_or(true, |deadline| Instant::now() < deadline) {
      for _ in 0..self.config.moves_per_pass.max(1) {
        let step = self.step();
        summary.moves += 1;
        if step.accepted {
          summary.accepted += 1;
        } else {
          summary.rejected += 1;
        }
      }
      summary.passes += 1;
      sink.record(&self.sample())?;
      if summary.passes % 1000 == 0 {
        debug!("pass {}: score {}, {:?}", summary.passes, self.score.total(), self.stat);
      }
    }

    summary.elapsed = started.elapsed();
    self.phase = Phase::Done;
    info!(
      "search done: {} moves ({} accepted, {} rejected), score {}, {:?}",
      summary.moves, summary.accepted, summary.rejected, self.score.total(), self.stat
    );
    Ok(summary)
  }

  /// Propose one move and keep it only if it lowers the score.
  pub fn step(&mut self) -> Step {
    let before = self.stat;
    let kind = self.pick_move();
    let (undo, pixel) = self.apply(kind);

    let stat = self.fractal.recompute();
    let pixels = self.canvas.size().area();
    let delta = Score {
      pixel,
      penalty: self.config.penalty(&stat, pixels) - self.config.penalty(&before, pixels)
    };

    let accepted = delta.total() < 0.0;
    if accepted {
      self.stat = stat;
      self.score += delta;
    } else {
      self.rollback(undo);
      self.stat = before;
    }
    trace!("{:?} accepted={} delta={:?}", kind, accepted, delta);
    Step { kind, accepted, delta }
  }

  fn sample(&self) -> Sample {
    Sample {
      timestamp: telemetry::now_micros(),
      score: self.score.total(),
      frac: self.stat.frac,
      r: self.stat.r,
      var: self.stat.var
    }
  }

  fn pick_move(&mut self) -> MoveKind {
    let kind = match self.rng.gen_range(0..3) {
      0 => MoveKind::Replace,
      1 => MoveKind::Add,
      _ => MoveKind::Remove
    };
    if kind != MoveKind::Add && self.canvas.slots().active_count() == 0 {
      return MoveKind::Add;
    }
    kind
  }

  /// Uniform among slots, redrawn until an active one comes up.
  fn pick_active(&mut self) -> (StrokeId, Stroke) {
    let slots = self.canvas.slots();
    loop {
      let id = self.rng.gen_range(0..slots.len());
      if let Some(&stroke) = slots.get(id) {
        return (id, stroke);
      }
    }
  }

  fn apply(&mut self, kind: MoveKind) -> (Undo, i64) {
    let size = self.canvas.size();
    match kind {
      MoveKind::Replace => {
        let (id, old) = self.pick_active();
        let new = self.generator.generate(size, &self.palette);
        let delta = self.canvas.erase(id, &mut self.fractal)
          + self.canvas.draw(id, new, &mut self.fractal);
        (Undo::Replace { id, old }, delta)
      }
      MoveKind::Add => {
        let id = self.canvas.next_id();
        let new = self.generator.generate(size, &self.palette);
        (Undo::Add { id }, self.canvas.draw(id, new, &mut self.fractal))
      }
      MoveKind::Remove => {
        let (id, old) = self.pick_active();
        (Undo::Remove { id, old }, self.canvas.erase(id, &mut self.fractal))
      }
    }
  }

  fn rollback(&mut self, undo: Undo) {
    match undo {
      Undo::Replace { id, old } => {
        self.canvas.erase(id, &mut self.fractal);
        self.canvas.draw(id, old, &mut self.fractal);
      }
      Undo::Add { id } => {
        self.canvas.erase(id, &mut self.fractal);
        self.canvas.pop_erased();
      }
      Undo::Remove { id, old } => {
        self.canvas.draw(id, old, &mut self.fractal);
      }
    }
  }
}
