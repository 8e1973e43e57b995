//! .
//!
//! Fallible functions return [`anyhow::Result`]; failures that originate in this crate carry an
//! [`ErrorKind`], which can be recovered with `error.downcast_ref::<ErrorKind>()`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
  /// Reference picture has zero width or zero height.
  InvalidDimensions { width: usize, height: usize },
  /// Palette requested with zero clusters.
  InvalidClusterCount(usize),
  /// Pixel buffer does not match `width * height`.
  PixelCountMismatch { expected: usize, actual: usize },
  /// `Engine::run` was called after the search had already started.
  SearchFinished,
}

impl ::std::fmt::Display for ErrorKind {
  fn fmt(&self, fmt: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
    use ErrorKind::*;
    match *self {
      InvalidDimensions { width, height } =>
        fmt.write_fmt(format_args!("invalid picture dimensions: {}x{}", width, height)),
      InvalidClusterCount(k) =>
        fmt.write_fmt(format_args!("invalid palette cluster count: {}", k)),
      PixelCountMismatch { expected, actual } =>
        fmt.write_fmt(format_args!("expected {} pixels, got {}", expected, actual)),
      SearchFinished => fmt.write_fmt(format_args!("{}", self.description())),
    }
  }
}

impl ErrorKind {
  /// A string describing the error kind.
  pub fn description(&self) -> &str {
    use ErrorKind::*;
    match *self {
      InvalidDimensions { .. } => stringify!(InvalidDimensions),
      InvalidClusterCount(_) => stringify!(InvalidClusterCount),
      PixelCountMismatch { .. } => stringify!(PixelCountMismatch),
      SearchFinished => "search has already been run",
    }
  }
}

impl ::std::error::Error for ErrorKind {}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = anyhow::Result<T>;
