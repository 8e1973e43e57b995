use {
  super::*,
  crate::geometry::Size,
  anyhow::Result,
};

fn gradient(width: usize, height: usize) -> Picture {
  Picture::from_fn(Size::new(width, height), |row, col| {
    Color([(row * 16) as u8, (col * 16) as u8, ((row + col) * 8) as u8])
  })
}

#[test] fn exact_size() -> Result<()> {
  let reference = gradient(8, 6);
  for k in [1, 2, 3, 8, 16, 48] {
    assert_eq!(Palette::build(&reference, k, DEFAULT_SEED)?.len(), k);
  }
  Ok(())
}

#[test] fn more_clusters_than_colors() -> Result<()> {
  let reference = Picture::from_fn(Size::new(4, 4), |row, _| {
    if row < 2 { Color([0, 0, 0]) } else { Color([200, 100, 50]) }
  });
  let palette = Palette::build(&reference, 5, DEFAULT_SEED)?;
  assert_eq!(palette.len(), 5);
  assert!(palette.colors().contains(&Color([0, 0, 0])));
  assert!(palette.colors().contains(&Color([200, 100, 50])));
  Ok(())
}

#[test] fn uniform_blank_reference() -> Result<()> {
  let reference = Picture::new(Size::new(2, 2), Color::BLANK);
  let palette = Palette::build(&reference, 1, DEFAULT_SEED)?;
  assert_eq!(palette.colors(), &[Color::BLANK]);
  Ok(())
}

#[test] fn truncated_mean() -> Result<()> {
  let values = [0u8, 1, 2, 4];
  let reference = Picture::from_fn(Size::new(4, 1), |_, col| Color([values[col]; 3]));
  let palette = Palette::build(&reference, 1, DEFAULT_SEED)?;
  // 7 / 4 truncates to 1
  assert_eq!(palette.get(0), Color([1, 1, 1]));
  Ok(())
}

#[test] fn deterministic() -> Result<()> {
  let reference = gradient(12, 9);
  let a = Palette::build(&reference, 6, DEFAULT_SEED)?;
  let b = Palette::build(&reference, 6, DEFAULT_SEED)?;
  assert_eq!(a, b);
  Ok(())
}

#[test] fn nearest_prefers_lowest_index() {
  let centers = [Color([10, 0, 0]), Color([0, 0, 0]), Color([0, 10, 0])];
  assert_eq!(nearest(&centers, Color([5, 5, 0])), (0, 50));
  assert_eq!(nearest(&centers, Color([1, 0, 0])), (1, 1));
}

#[test] fn converged_centers_are_cluster_means() -> Result<()> {
  let reference = gradient(10, 10);
  let palette = Palette::build(&reference, 4, DEFAULT_SEED)?;
  let mut sums = vec![[0u64; 3]; palette.len()];
  let mut counts = vec![0u64; palette.len()];
  for &pixel in reference.pixels() {
    let (cluster, _) = nearest(palette.colors(), pixel);
    counts[cluster] += 1;
    for c in 0..3 {
      sums[cluster][c] += pixel.0[c] as u64;
    }
  }
  for (i, &center) in palette.colors().iter().enumerate() {
    if counts[i] == 0 { continue; }
    assert_eq!(center, Color(sums[i].map(|sum| (sum / counts[i]) as u8)));
  }
  Ok(())
}

#[test] fn invalid_input() {
  let empty = Picture::new(Size::new(0, 3), Color::BLANK);
  let err = Palette::build(&empty, 2, DEFAULT_SEED).unwrap_err();
  assert_eq!(
    err.downcast_ref::<ErrorKind>(),
    Some(&ErrorKind::InvalidDimensions { width: 0, height: 3 })
  );

  let reference = gradient(2, 2);
  let err = Palette::build(&reference, 0, DEFAULT_SEED).unwrap_err();
  assert_eq!(err.downcast_ref::<ErrorKind>(), Some(&ErrorKind::InvalidClusterCount(0)));
  assert!(Palette::from_colors(vec![]).is_err());
}
