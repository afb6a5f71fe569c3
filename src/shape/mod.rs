//! Shape variants and the capability contract consumed by the optimizer.
//!
//! A shape owns nothing but its own geometric parameters: canvas bounds and
//! the RNG are borrowed per call, so instances are plain values that can move
//! freely between search workers. [`Shape::copy`] is the sanctioned handoff
//! and snapshot mechanism (copy, mutate, compare, discard on rejection).

use {
  crate::{
    geometry::{Canvas, PixelSpace},
    scanline::Scanline
  },
  euclid::Point2D,
  rand::{Rng, RngCore},
  rand_distr::StandardNormal,
  std::fmt::Debug
};

mod rect;
mod rotated;
pub use {rect::Rect, rotated::RotatedRect};

#[cfg(test)] mod tests;

/// Gaussian step scale for positions and side lengths, pixels.
pub const SPATIAL_STEP: f64 = 16.0;
/// Gaussian step scale for rotation, degrees.
pub const ANGLE_STEP: f64 = 32.0;

/// Search-time capabilities every shape variant provides. Construction is
/// inherent (`Rect::random`, `RotatedRect::random`, plus unvalidated `new`),
/// keeping the trait object safe.
pub trait Shape: Debug {
  /// Perturb one parameter group, selected uniformly at random, in place.
  /// Spatial parameters are clamped back into the canvas after the
  /// perturbation; the rotation angle never is.
  fn mutate(&mut self, canvas: Canvas, rng: &mut dyn RngCore);

  /// Coverage spans of the shape interior: one span per covered row, in
  /// ascending `y`, every coordinate inside the canvas.
  fn rasterize(&self, canvas: Canvas) -> Vec<Scanline>;

  /// Closed corner ring of the shape outline, normalized the same way as
  /// [`Shape::rasterize`] and uniformly scaled; the rendering collaborator
  /// fills it, this crate never touches its pixels.
  fn outline(&self, scale: f32) -> Vec<Point2D<f32, PixelSpace>>;

  /// A single SVG element reproducing the rasterized geometry. `attrs` is
  /// caller-supplied styling, passed through opaque.
  fn svg(&self, attrs: &str) -> String;

  /// Independent deep copy; mutating either side never affects the other.
  fn copy(&self) -> Box<dyn Shape>;

  #[cfg(feature = "drawing")]
  fn texture(&self, color: image::Rgba<u8>, scale: f32) -> crate::drawing::Texture<&Self>
    where Self: Sized {
    crate::drawing::Texture { shape: self, color, scale }
  }
}

/// Variant selector; the optimizer picks a shape mode up front.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeKind {
  Rect,
  RotatedRect
}

impl ShapeKind {
  pub fn random(self, canvas: Canvas, rng: &mut dyn RngCore) -> Box<dyn Shape> {
    match self {
      ShapeKind::Rect => Box::new(Rect::random(canvas, rng)),
      ShapeKind::RotatedRect => Box::new(RotatedRect::random(canvas, rng))
    }
  }
}

/// Gaussian offset scaled by `step`, truncated to whole pixels (or degrees).
/// Symmetric and unbounded before clamping; a uniform draw would change the
/// convergence behavior of the surrounding search.
pub(crate) fn gaussian_step(rng: &mut dyn RngCore, step: f64) -> i32 {
  let gauss: f64 = rng.sample(StandardNormal);
  (gauss * step) as i32
}
