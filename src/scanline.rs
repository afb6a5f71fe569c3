use crate::geometry::Canvas;

/// Full coverage; this engine computes no partial-coverage anti-aliasing.
pub const FULL_COVERAGE: u16 = 0xffff;

/// One row of horizontal coverage: row `y`, inclusive span `[x1, x2]`.
///
/// Every scanline handed to the optimizer satisfies `x1 <= x2` with all
/// coordinates inside the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scanline {
  pub y: i32,
  pub x1: i32,
  pub x2: i32,
  pub alpha: u16
}

impl Scanline {
  pub fn new(y: i32, x1: i32, x2: i32) -> Self {
    Scanline { y, x1, x2, alpha: FULL_COVERAGE }
  }

  pub fn in_bounds(self, canvas: Canvas) -> bool {
    0 <= self.x1 && self.x1 <= self.x2 && self.x2 < canvas.width &&
    0 <= self.y && self.y < canvas.height
  }
}
