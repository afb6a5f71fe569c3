use {
  super::*,
  crate::geometry::Canvas,
  rand::SeedableRng,
  rand_pcg::Pcg64
};

#[test] fn scanlines_stay_in_bounds() {
  let canvas = Canvas::new(64, 48);
  let mut rng = Pcg64::seed_from_u64(0);

  for kind in [ShapeKind::Rect, ShapeKind::RotatedRect] {
    for _ in 0..100 {
      let mut shape = kind.random(canvas, &mut rng);
      for _ in 0..50 {
        shape.mutate(canvas, &mut rng);
        assert!(
          shape.rasterize(canvas).iter().all(|line| line.in_bounds(canvas)),
          "out-of-bounds scanline from {:?}", shape
        );
      }
    }
  }
}

#[test] fn unordered_corners_normalize() {
  let canvas = Canvas::new(20, 20);
  let unordered = Rect::new(10, 10, 2, 5);
  let ordered = Rect::new(2, 5, 10, 10);
  let lines = unordered.rasterize(canvas);

  assert_eq!(lines, ordered.rasterize(canvas));
  assert_eq!(lines.len(), 6); // rows 5..=10
  for (row, line) in (5..=10).zip(&lines) {
    assert_eq!((line.y, line.x1, line.x2), (row, 2, 10));
    assert_eq!(line.alpha, 0xffff);
  }
}

#[test] fn copy_is_independent() {
  let canvas = Canvas::new(32, 32);
  let mut rng = Pcg64::seed_from_u64(1);

  // mutating the copy leaves the original untouched
  let mut original = Rect::new(1, 2, 3, 4);
  let mut copy = original.copy();
  for _ in 0..16 {
    copy.mutate(canvas, &mut rng);
  }
  assert_eq!(original, Rect::new(1, 2, 3, 4));

  // and vice versa
  let snapshot = copy.rasterize(canvas);
  for _ in 0..16 {
    original.mutate(canvas, &mut rng);
  }
  assert_eq!(copy.rasterize(canvas), snapshot);
}

#[test] fn mutation_is_deterministic() {
  let canvas = Canvas::new(100, 80);
  let mut a = RotatedRect::new(40, 30, 12, 20, 75);
  let mut b = a;

  let mut rng_a = Pcg64::seed_from_u64(7);
  let mut rng_b = Pcg64::seed_from_u64(7);
  for _ in 0..100 {
    a.mutate(canvas, &mut rng_a);
    b.mutate(canvas, &mut rng_b);
  }
  assert_eq!(a, b);
}

#[test] fn zero_angle_matches_axis_aligned() {
  let canvas = Canvas::new(20, 20);
  let rotated = RotatedRect::new(10, 10, 4, 4, 0);
  let lines = rotated.rasterize(canvas);

  assert_eq!(lines, Rect::new(8, 8, 12, 12).rasterize(canvas));
  assert_eq!(lines.len(), 5); // rows 8..=12
  for (row, line) in (8..=12).zip(&lines) {
    assert_eq!((line.y, line.x1, line.x2), (row, 8, 12));
  }
}

#[test] fn diagonal_rotation_row_count() {
  let canvas = Canvas::new(32, 32);
  let lines = RotatedRect::new(16, 16, 10, 10, 45).rasterize(canvas);

  // vertical extent of the rotated square is its diagonal, 10 * sqrt(2)
  assert!(
    (13..=15).contains(&lines.len()),
    "expected ~14 rows, got {}", lines.len()
  );
  assert!(lines.iter().all(|line| line.x1 <= line.x2 && line.in_bounds(canvas)));
}

#[test] fn near_degenerate_rotation_row_counts() {
  let canvas = Canvas::new(20, 20);
  // a 6x2 rectangle: 3 covered rows upright, 7 when turned on its side
  for (angle, rows) in [(0, 3), (90, 7), (180, 3), (270, 7)] {
    let lines = RotatedRect::new(10, 10, 6, 2, angle).rasterize(canvas);
    assert_eq!(
      lines.len(), rows,
      "angle {}: expected {} rows, got {:?}", angle, rows, lines
    );
    assert!(lines.iter().all(|line| line.in_bounds(canvas)));
  }
}

#[test] fn upright_rotation_exact_spans() {
  let canvas = Canvas::new(20, 20);
  let lines = RotatedRect::new(10, 10, 6, 2, 0).rasterize(canvas);
  for (row, line) in (9..=11).zip(&lines) {
    assert_eq!((line.y, line.x1, line.x2), (row, 7, 13));
  }
}

#[test] fn mutation_never_escapes_canvas() {
  let canvas = Canvas::new(20, 20);
  let mut rng = Pcg64::seed_from_u64(42);

  let mut rect = Rect::new(0, 0, 5, 5);
  for _ in 0..1000 {
    rect.mutate(canvas, &mut rng);
    for value in [rect.x1, rect.x2] {
      assert!((0..canvas.width).contains(&value));
    }
    for value in [rect.y1, rect.y2] {
      assert!((0..canvas.height).contains(&value));
    }
  }

  let mut rotated = RotatedRect::new(0, 0, 4, 4, 0);
  for _ in 0..1000 {
    rotated.mutate(canvas, &mut rng);
    assert!((0..canvas.width).contains(&rotated.x));
    assert!((0..canvas.height).contains(&rotated.y));
    assert!((0..canvas.width).contains(&rotated.sx));
    assert!((0..canvas.height).contains(&rotated.sy));
    // angle is unclamped by design
  }
}

#[test] fn degenerate_sides_do_not_panic() {
  let canvas = Canvas::new(20, 20);
  assert!(RotatedRect::new(10, 10, 0, 0, 37).rasterize(canvas).is_empty());

  // a zero-width rectangle collapses to a vertical hairline
  let lines = RotatedRect::new(10, 10, 0, 8, 0).rasterize(canvas);
  assert_eq!(lines.len(), 9); // rows 6..=14
  assert!(lines.iter().all(|line| (line.x1, line.x2) == (10, 10)));
}

#[test] fn svg_matches_normalized_geometry() {
  let rect = Rect::new(10, 10, 2, 5);
  assert_eq!(
    rect.svg("fill=\"#fff\""),
    "<rect fill=\"#fff\" x=\"2\" y=\"5\" width=\"9\" height=\"6\" />"
  );

  let rotated = RotatedRect::new(10, 12, 6, 2, 405);
  assert_eq!(
    rotated.svg("fill=\"#fff\""),
    "<g transform=\"translate(10 12) rotate(405) scale(6 2)\">\
     <rect fill=\"#fff\" x=\"-0.5\" y=\"-0.5\" width=\"1\" height=\"1\" /></g>"
  );
}

#[test] fn random_shapes_start_inside_canvas() {
  let canvas = Canvas::new(40, 30);
  let mut rng = Pcg64::seed_from_u64(9);
  for kind in [ShapeKind::Rect, ShapeKind::RotatedRect] {
    for _ in 0..100 {
      let shape = kind.random(canvas, &mut rng);
      assert!(shape.rasterize(canvas).iter().all(|line| line.in_bounds(canvas)));
    }
  }
}
