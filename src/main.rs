use {
  clap::Parser,
  log::info,
  pollock::{
    codec,
    error::Result,
    solver::{Config, DatWriter, Engine}
  },
  std::{fs::File, io::BufWriter, path::PathBuf},
};

#[derive(Parser, Debug)]
#[command(name = "pollock")]
#[command(
  author,
  version,
  about = "Repaint an image with random strokes while steering its fractal dimension"
)]
struct Args {
  /// Reference image path
  #[arg(default_value = "ref.bmp")]
  input: PathBuf,

  /// Output image path
  #[arg(short, long, default_value = "fractal.bmp")]
  output: PathBuf,

  /// Telemetry file, one line per pass: timestamp score frac r var
  #[arg(long, default_value = "temp.dat")]
  telemetry: PathBuf,

  /// Palette size
  #[arg(short = 'k', long, default_value_t = 8)]
  clusters: usize,

  /// Target box-counting dimension
  #[arg(short = 'd', long, default_value_t = 1.9)]
  target_dimension: f64,

  /// Search budget in minutes
  #[arg(short, long, default_value_t = 1.0)]
  minutes: f64,

  /// Strokes painted before the search
  #[arg(long, default_value_t = 10000)]
  strokes: usize,

  /// Moves between deadline checks and telemetry samples
  #[arg(long, default_value_t = 1)]
  moves_per_pass: usize,
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let args = Args::parse();

  let reference = codec::load(&args.input)?;
  info!("reference {}: {}x{}", args.input.display(), reference.width(), reference.height());

  let config = Config::default()
    .with_clusters(args.clusters)
    .with_target_dimension(args.target_dimension)
    .with_budget_minutes(args.minutes)
    .with_initial_strokes(args.strokes)
    .with_moves_per_pass(args.moves_per_pass);
  let mut engine = Engine::new(reference, config)?;

  let mut telemetry = DatWriter::new(BufWriter::new(File::create(&args.telemetry)?));
  let summary = engine.run(&mut telemetry)?;
  telemetry.flush()?;
  info!(
    "{} moves in {:.1}s, {} accepted; telemetry in {}",
    summary.moves, summary.elapsed.as_secs_f64(), summary.accepted, args.telemetry.display()
  );

  codec::save(&engine.into_picture(), &args.output)?;
  info!("saved {}", args.output.display());
  Ok(())
}
