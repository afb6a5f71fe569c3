use {
  super::{gaussian_step, Shape, ANGLE_STEP, SPATIAL_STEP},
  crate::{
    geometry::{rotate_about, Canvas, PixelSpace},
    raster::polygon_scanlines,
    scanline::Scanline
  },
  euclid::{Angle, Point2D},
  rand::{Rng, RngCore}
};

/// Rectangle rotated around its own center. `sx`/`sy` are full side lengths;
/// `angle` is in degrees and deliberately unbounded, wrapping through the
/// trigonometric functions instead of being normalized into `[0, 360)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RotatedRect {
  pub x: i32,
  pub y: i32,
  pub sx: i32,
  pub sy: i32,
  pub angle: i32
}

impl RotatedRect {
  /// Random rectangle inside the canvas, with one mutation applied on top
  /// to diversify the initial parameters.
  pub fn random(canvas: Canvas, rng: &mut dyn RngCore) -> Self {
    let mut shape = RotatedRect {
      x: rng.gen_range(0..canvas.width),
      y: rng.gen_range(0..canvas.height),
      sx: rng.gen_range(0..32) + 1,
      sy: rng.gen_range(0..32) + 1,
      angle: rng.gen_range(0..360)
    };
    shape.mutate(canvas, rng);
    shape
  }

  /// Explicit construction. Parameters are taken as-is; the caller is
  /// responsible for keeping them inside the canvas.
  pub fn new(x: i32, y: i32, sx: i32, sy: i32, angle: i32) -> Self {
    RotatedRect { x, y, sx, sy, angle }
  }

  // corner ring of the unrotated outline; integer halving keeps even and
  // odd side lengths on the same footprint as the axis-aligned variant
  fn corners(&self) -> [Point2D<f32, PixelSpace>; 4] {
    let (x1, x2) = (self.x - self.sx / 2, self.x + self.sx / 2);
    let (y1, y2) = (self.y - self.sy / 2, self.y + self.sy / 2);
    [
      Point2D::new(x1 as f32, y1 as f32),
      Point2D::new(x1 as f32, y2 as f32),
      Point2D::new(x2 as f32, y2 as f32),
      Point2D::new(x2 as f32, y1 as f32)
    ]
  }

  fn rotated_corners(&self) -> [Point2D<f32, PixelSpace>; 4] {
    let pivot = Point2D::new(self.x as f32, self.y as f32);
    let angle = Angle::degrees(self.angle as f32);
    self.corners().map(|corner| rotate_about(corner, pivot, angle))
  }
}

impl Shape for RotatedRect {
  fn mutate(&mut self, canvas: Canvas, rng: &mut dyn RngCore) {
    match rng.gen_range(0..3) {
      0 => {
        self.x = canvas.clamp_x(self.x + gaussian_step(rng, SPATIAL_STEP));
        self.y = canvas.clamp_y(self.y + gaussian_step(rng, SPATIAL_STEP));
      }
      1 => {
        self.sx = canvas.clamp_x(self.sx + gaussian_step(rng, SPATIAL_STEP));
        self.sy = canvas.clamp_y(self.sy + gaussian_step(rng, SPATIAL_STEP));
      }
      _ => self.angle += gaussian_step(rng, ANGLE_STEP)
    }
  }

  fn rasterize(&self, canvas: Canvas) -> Vec<Scanline> {
    polygon_scanlines(&self.rotated_corners(), canvas)
  }

  fn outline(&self, scale: f32) -> Vec<Point2D<f32, PixelSpace>> {
    self.rotated_corners().iter()
      .map(|&corner| corner * scale)
      .collect()
  }

  fn svg(&self, attrs: &str) -> String {
    format!(
      "<g transform=\"translate({} {}) rotate({}) scale({} {})\">\
       <rect {} x=\"-0.5\" y=\"-0.5\" width=\"1\" height=\"1\" /></g>",
      self.x, self.y, self.angle, self.sx, self.sy, attrs
    )
  }

  fn copy(&self) -> Box<dyn Shape> {
    Box::new(*self)
  }
}
