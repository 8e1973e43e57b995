/// Evaluate a block and log how long it took.
///
/// ```
/// let sum = pollock::profile!("sum", (0..10).sum::<u32>());
/// assert_eq!(sum, 45);
/// ```
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    $crate::log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
