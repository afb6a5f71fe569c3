//! Scanline fill of convex polygon outlines via ray/edge intersection.

use {
  crate::{
    geometry::{Canvas, PixelSpace},
    scanline::Scanline
  },
  euclid::{Box2D, Point2D},
  itertools::Itertools
};

/// X-coordinates where a horizontal ray at `y` crosses the closed polygon,
/// in edge discovery order. Exactly horizontal edges never produce a
/// crossing.
fn row_crossings(polygon: &[Point2D<f32, PixelSpace>], y: f32) -> Vec<f32> {
  polygon.iter()
    .circular_tuple_windows::<(_, _)>()
    .filter_map(|(a, b)| {
      if a.y == b.y {
        return None;
      }
      let t = (y - a.y) / (b.y - a.y);
      (0.0..=1.0).contains(&t)
        .then(|| a.x + t * (b.x - a.x))
    })
    .collect()
}

/// Fill a convex outline, one span per covered row, ascending `y`.
///
/// A row is emitted only when its crossing count is nonzero and even; the
/// first two crossings are clamped into the canvas and span `[min, max]`.
/// Rows with an odd count (the ray grazes a vertex degenerately) are
/// skipped rather than special-cased.
pub fn polygon_scanlines(
  polygon: &[Point2D<f32, PixelSpace>],
  canvas: Canvas
) -> Vec<Scanline> {
  if polygon.len() < 3 {
    return vec![];
  }
  let bounds = Box2D::from_points(polygon.iter());
  let top = canvas.clamp_y(bounds.min.y as i32);
  let bottom = canvas.clamp_y(bounds.max.y as i32);

  (top..=bottom)
    .filter_map(|y| {
      let crossings = row_crossings(polygon, y as f32);
      if crossings.is_empty() || crossings.len() % 2 != 0 {
        return None;
      }
      let x1 = canvas.clamp_x(crossings[0] as i32);
      let x2 = canvas.clamp_x(crossings[1] as i32);
      Some(Scanline::new(y, x1.min(x2), x1.max(x2)))
    })
    .collect()
}
