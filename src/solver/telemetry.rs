use {
  anyhow::Result,
  std::{
    io::Write,
    time::{SystemTime, UNIX_EPOCH}
  },
};

/// One point of the optimization trace.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
  /// Microseconds since the UNIX epoch.
  pub timestamp: u128,
  pub score: f64,
  pub frac: f64,
  pub r: f64,
  pub var: f64,
}

/// Wall-clock time in microseconds; zero if the clock is set before 1970.
pub fn now_micros() -> u128 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|t| t.as_micros())
    .unwrap_or_default()
}

/// Append-only consumer of samples.
pub trait TelemetrySink {
  fn record(&mut self, sample: &Sample) -> Result<()>;
}

impl TelemetrySink for Vec<Sample> {
  fn record(&mut self, sample: &Sample) -> Result<()> {
    self.push(*sample);
    Ok(())
  }
}

/// Writes `timestamp score frac r var`, one sample per line, for offline plotting.
pub struct DatWriter<W: Write> {
  out: W
}

impl<W: Write> DatWriter<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn flush(&mut self) -> Result<()> {
    self.out.flush()?;
    Ok(())
  }

  pub fn into_inner(self) -> W {
    self.out
  }
}

impl<W: Write> TelemetrySink for DatWriter<W> {
  fn record(&mut self, sample: &Sample) -> Result<()> {
    writeln!(
      self.out, "{} {} {} {} {}",
      sample.timestamp, sample.score, sample.frac, sample.r, sample.var
    )?;
    Ok(())
  }
}
