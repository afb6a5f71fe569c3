use {
  super::{gaussian_step, Shape, SPATIAL_STEP},
  crate::{
    geometry::{Canvas, PixelSpace},
    scanline::Scanline
  },
  euclid::Point2D,
  rand::{Rng, RngCore}
};

/// Axis-aligned rectangle between two corner points. The corners are not
/// kept ordered (`x1 > x2` is a valid state) and are normalized lazily
/// before rasterization and export.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
  pub x1: i32,
  pub y1: i32,
  pub x2: i32,
  pub y2: i32
}

impl Rect {
  /// Random rectangle fully inside the canvas: a uniform anchor corner and
  /// sides of up to 32 px.
  pub fn random(canvas: Canvas, rng: &mut dyn RngCore) -> Self {
    let x1 = rng.gen_range(0..canvas.width);
    let y1 = rng.gen_range(0..canvas.height);
    let x2 = canvas.clamp_x(x1 + rng.gen_range(0..32) + 1);
    let y2 = canvas.clamp_y(y1 + rng.gen_range(0..32) + 1);
    Rect { x1, y1, x2, y2 }
  }

  /// Explicit construction. Parameters are taken as-is; the caller is
  /// responsible for keeping them inside the canvas.
  pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
    Rect { x1, y1, x2, y2 }
  }

  /// Reorder corners so that `x1 <= x2` and `y1 <= y2`.
  fn normalized(self) -> Self {
    Rect {
      x1: self.x1.min(self.x2),
      y1: self.y1.min(self.y2),
      x2: self.x1.max(self.x2),
      y2: self.y1.max(self.y2)
    }
  }
}

impl Shape for Rect {
  fn mutate(&mut self, canvas: Canvas, rng: &mut dyn RngCore) {
    match rng.gen_range(0..2) {
      0 => {
        self.x1 = canvas.clamp_x(self.x1 + gaussian_step(rng, SPATIAL_STEP));
        self.y1 = canvas.clamp_y(self.y1 + gaussian_step(rng, SPATIAL_STEP));
      }
      _ => {
        self.x2 = canvas.clamp_x(self.x2 + gaussian_step(rng, SPATIAL_STEP));
        self.y2 = canvas.clamp_y(self.y2 + gaussian_step(rng, SPATIAL_STEP));
      }
    }
  }

  // exact and O(height); no intersection math for axis-aligned sides
  fn rasterize(&self, _canvas: Canvas) -> Vec<Scanline> {
    let r = self.normalized();
    (r.y1..=r.y2)
      .map(|y| Scanline::new(y, r.x1, r.x2))
      .collect()
  }

  fn outline(&self, scale: f32) -> Vec<Point2D<f32, PixelSpace>> {
    let r = self.normalized();
    [(r.x1, r.y1), (r.x1, r.y2), (r.x2, r.y2), (r.x2, r.y1)].iter()
      .map(|&(x, y)| Point2D::new(x as f32, y as f32) * scale)
      .collect()
  }

  fn svg(&self, attrs: &str) -> String {
    let r = self.normalized();
    format!(
      "<rect {} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" />",
      attrs, r.x1, r.y1, r.x2 - r.x1 + 1, r.y2 - r.y1 + 1
    )
  }

  fn copy(&self) -> Box<dyn Shape> {
    Box::new(*self)
  }
}
