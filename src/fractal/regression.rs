use num_traits::Float;

/// Ordinary least squares fit of `y = slope * x + intercept`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearFit<F> {
  pub slope: F,
  pub intercept: F,
  /// Coefficient of determination, `1 - residual variance / y variance`.
  pub r: F,
}

/// Fit a line through `(xs[i], ys[i])`. `None` when the x values have no spread.
pub fn least_squares<F: Float>(xs: &[F], ys: &[F]) -> Option<LinearFit<F>> {
  let n = F::from(xs.len().min(ys.len()))?;
  if n == F::zero() {
    return None;
  }
  let points = || xs.iter().zip(ys.iter()).map(|(&x, &y)| (x, y));
  let mean_x = points().fold(F::zero(), |acc, (x, _)| acc + x) / n;
  let mean_y = points().fold(F::zero(), |acc, (_, y)| acc + y) / n;

  let (sxx, sxy, syy) = points().fold(
    (F::zero(), F::zero(), F::zero()),
    |(sxx, sxy, syy), (x, y)| {
      let (dx, dy) = (x - mean_x, y - mean_y);
      (sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
    });
  if sxx == F::zero() {
    return None;
  }

  let slope = sxy / sxx;
  let intercept = mean_y - slope * mean_x;
  let residual = points().fold(F::zero(), |acc, (x, y)| {
    let e = y - (slope * x + intercept);
    acc + e * e
  });
  // a constant series is reproduced exactly by a flat line
  let r = if syy == F::zero() { F::one() } else { F::one() - residual / syy };

  Some(LinearFit { slope, intercept, r })
}

/// Population variance.
pub fn variance<F: Float>(values: impl Iterator<Item = F> + Clone) -> F {
  let (n, sum) = values.clone()
    .fold((F::zero(), F::zero()), |(n, sum), v| (n + F::one(), sum + v));
  if n == F::zero() {
    return F::zero();
  }
  let mean = sum / n;
  values.fold(F::zero(), |acc, v| acc + (v - mean) * (v - mean)) / n
}
