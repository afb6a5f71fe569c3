//! .
//!
//! The origin of the coordinate system is in the top-left corner; shape
//! parameters are integer pixel coordinates on a [`Canvas`].

use euclid::{Angle, Point2D, Rotation2D};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Immutable canvas bounds, shared (`Copy`) with every shape for its
/// lifetime. Both sides must be positive; this is a precondition, not a
/// checked fault.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Canvas {
  pub width: i32,
  pub height: i32
}

impl Canvas {
  pub fn new(width: i32, height: i32) -> Self {
    Canvas { width, height }
  }

  /// Clamp an x-coordinate into `[0, width - 1]`.
  pub fn clamp_x(self, x: i32) -> i32 {
    x.clamp(0, self.width - 1)
  }

  /// Clamp a y-coordinate into `[0, height - 1]`.
  pub fn clamp_y(self, y: i32) -> i32 {
    y.clamp(0, self.height - 1)
  }

  pub fn contains(self, point: Point2D<i32, PixelSpace>) -> bool {
    point.x >= 0 && point.x < self.width &&
    point.y >= 0 && point.y < self.height
  }
}

/// Rigid rotation of `point` around `pivot`.
pub fn rotate_about(
  point: Point2D<f32, PixelSpace>,
  pivot: Point2D<f32, PixelSpace>,
  angle: Angle<f32>
) -> Point2D<f32, PixelSpace> {
  Rotation2D::new(angle)
    .transform_point((point - pivot).to_point())
    + pivot.to_vector()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn clamping() {
    let canvas = Canvas::new(20, 10);
    assert_eq!(canvas.clamp_x(-5), 0);
    assert_eq!(canvas.clamp_x(19), 19);
    assert_eq!(canvas.clamp_x(20), 19);
    assert_eq!(canvas.clamp_y(10), 9);
    assert!(canvas.contains([0, 0].into()));
    assert!(!canvas.contains([20, 0].into()));
  }

  #[test] fn rotation_about_pivot() {
    let rotated = rotate_about(
      [12.0, 10.0].into(),
      [10.0, 10.0].into(),
      Angle::degrees(90.0)
    );
    assert!((rotated.x - 10.0).abs() < 1e-4);
    assert!((rotated.y - 12.0).abs() < 1e-4);
  }
}
