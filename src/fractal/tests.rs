use {
  super::*,
  crate::geometry::Color,
  rand::prelude::*,
};

fn assert_consistent(hierarchy: &Hierarchy) {
  for (level, &count) in hierarchy.box_counts().iter().enumerate() {
    assert_eq!(count, hierarchy.rescan_box_count(level), "level {}", level);
  }
}

#[test] fn regression_of_exact_power_law() {
  assert_eq!(dimension(&[64, 16, 4, 1]), (2.0, 1.0));
  let fit = least_squares(&[0.0, 1.0, 2.0, 3.0], &[6.0, 4.0, 2.0, 0.0]).unwrap();
  assert_eq!(fit.slope, -2.0);
  assert_eq!(fit.intercept, 6.0);
  assert_eq!(fit.r, 1.0);
}

#[test] fn regression_degenerate() {
  assert!(least_squares::<f64>(&[], &[]).is_none());
  assert!(least_squares(&[2.0, 2.0], &[1.0, 5.0]).is_none());
  assert_eq!(dimension(&[5]), (-SINGULAR_SLOPE, 0.0));
  // flat series: exact fit
  let fit = least_squares(&[0.0, 1.0, 2.0], &[3.0, 3.0, 3.0]).unwrap();
  assert_eq!((fit.slope, fit.r), (0.0, 1.0));
}

#[test] fn regression_goodness_of_fit() {
  let fit = least_squares::<f64>(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 1.0, 3.0]).unwrap();
  assert!((fit.slope - 0.8).abs() < 1e-12);
  assert!(fit.r > 0.0 && fit.r < 1.0);
  assert!((fit.r - 0.64).abs() < 1e-12);
}

#[test] fn population_variance() {
  assert_eq!(variance([1.0, 2.0, 3.0, 4.0].into_iter()), 1.25);
  assert_eq!(variance(std::iter::empty::<f64>()), 0.0);
}

#[test] fn level_layout() {
  assert_eq!(Hierarchy::new(Size::new(1, 9)).levels(), 1);
  assert_eq!(Hierarchy::new(Size::new(8, 8)).levels(), 4);
  assert_eq!(Hierarchy::new(Size::new(10, 3)).levels(), 4);
  assert_eq!(Hierarchy::new(Size::new(0, 3)).levels(), 0);
}

#[test] fn filled_square_is_two_dimensional() {
  let picture = Picture::new(Size::new(16, 16), Color([0, 0, 0]));
  let hierarchy = Hierarchy::from_picture(&picture);
  assert_eq!(hierarchy.box_counts(), vec![256, 64, 16, 4, 1]);
  let stat = hierarchy.recompute();
  assert_eq!((stat.frac, stat.r, stat.var), (2.0, 1.0, 0.0));
}

#[test] fn filled_row_is_one_dimensional() {
  let picture = Picture::from_fn(Size::new(16, 16), |row, _| {
    if row == 5 { Color([0, 0, 0]) } else { Color::BLANK }
  });
  let hierarchy = Hierarchy::from_picture(&picture);
  assert_eq!(hierarchy.box_counts(), vec![16, 8, 4, 2, 1]);
  let stat = hierarchy.recompute();
  assert!((stat.frac - 1.0).abs() < 1e-12);
  assert!((stat.r - 1.0).abs() < 1e-12);
}

#[test] fn occupancy_variance() {
  let picture = Picture::from_fn(Size::new(16, 16), |row, col| {
    if row < 8 && col < 8 { Color([0, 0, 0]) } else { Color::BLANK }
  });
  let hierarchy = Hierarchy::from_picture(&picture);
  assert_eq!(hierarchy.occupancy(VARIANCE_LEVEL, 0, 0), 64);
  assert_eq!(hierarchy.occupancy(VARIANCE_LEVEL, 1, 1), 0);
  assert_eq!(hierarchy.recompute().var, 768.0);
}

#[test] fn blank_canvas() {
  let stat = Hierarchy::new(Size::new(32, 20)).recompute();
  assert_eq!((stat.frac, stat.r, stat.var), (0.0, 1.0, 0.0));
}

#[test] fn single_level() {
  let picture = Picture::new(Size::new(1, 4), Color([1, 1, 1]));
  let stat = Hierarchy::from_picture(&picture).recompute();
  assert!(stat.frac.is_infinite());
  assert_eq!(stat.r, 0.0);
  assert_eq!(stat.var, 0.0);
}

#[test] fn incremental_updates_match_rebuild() {
  let size = Size::new(37, 23);
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let mut picture = Picture::new(size, Color::BLANK);
  let mut hierarchy = Hierarchy::new(size);

  for _ in 0..5000 {
    let (x, y) = (rng.gen_range(0..size.height), rng.gen_range(0..size.width));
    let was_blank = picture.get(x, y).is_blank();
    let color = if rng.gen_bool(0.6) { Color([9, 9, 9]) } else { Color::BLANK };
    picture.set(x, y, color);
    if was_blank != color.is_blank() {
      hierarchy.on_pixel_transition(x, y, was_blank);
    }
  }

  assert_consistent(&hierarchy);
  assert_eq!(hierarchy, Hierarchy::from_picture(&picture));
  assert_eq!(hierarchy.recompute(), Hierarchy::from_picture(&picture).recompute());
}
