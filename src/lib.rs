//! Painterly approximation of a reference image with straight strokes, steered toward a target
//! box-counting fractal dimension.
//!
//! The reference colors are quantized into a small [`palette`]. A few thousand random
//! [`stroke`]s are painted onto a [`canvas`], which remembers every stroke covering each pixel.
//! The [`solver`] then hill-climbs for a fixed wall-clock budget: it replaces, adds or removes
//! single strokes and keeps a move only when it lowers the sum of the squared color error and a
//! [`fractal`] penalty on the painted area.
//!
//! # Basic usage
//! ```no_run
//! # use pollock::{error::Result, solver::{Config, Engine, DatWriter}, codec};
//! # use std::{fs::File, io::BufWriter};
//! # fn main() -> Result<()> {
//! let reference = codec::load("ref.bmp")?;
//! let config = Config::default()
//!   .with_target_dimension(1.6)
//!   .with_budget_minutes(5.0);
//! let mut engine = Engine::new(reference, config)?;
//!
//! // one line per pass: timestamp, score, dimension, fit quality, occupancy variance
//! let mut telemetry = DatWriter::new(BufWriter::new(File::create("temp.dat")?));
//! engine.run(&mut telemetry)?;
//! telemetry.flush()?;
//!
//! codec::save(&engine.into_picture(), "fractal.bmp")?;
//! #   Ok(())
//! # }
//! ```

pub mod error;
#[macro_use]
pub mod util;
pub mod geometry;
pub mod palette;
pub mod stroke;
pub mod canvas;
pub mod fractal;
pub mod solver;
#[cfg(feature = "codec")]
pub mod codec;

#[doc(hidden)]
pub use log;
