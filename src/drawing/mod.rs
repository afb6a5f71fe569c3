//! Raster compositing of accepted shapes, behind the `drawing` feature.
//!
//! The geometry core only supplies outlines; this module owns the pixels.

use {
  crate::{
    geometry::Canvas,
    raster::polygon_scanlines,
    shape::Shape
  },
  image::{Pixel, Rgba, RgbaImage}
};


pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// Pairs a shape outline with a fill color and a uniform output scale.
/// Usually built through [`Shape::texture`].
#[derive(Debug, Copy, Clone)]
pub struct Texture<S> {
  pub shape: S,
  pub color: Rgba<u8>,
  pub scale: f32
}

impl<S: Shape + ?Sized> Draw<RgbaImage> for Texture<&S> {
  fn draw(&self, image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    let target = Canvas::new(width as i32, height as i32);

    for line in polygon_scanlines(&self.shape.outline(self.scale), target) {
      for x in line.x1..=line.x2 {
        image.get_pixel_mut(x as u32, line.y as u32).blend(&self.color);
      }
    }
  }
}

impl<S: Shape + ?Sized> Draw<RgbaImage> for Texture<Box<S>> {
  fn draw(&self, image: &mut RgbaImage) {
    Texture {
      shape: self.shape.as_ref(),
      color: self.color,
      scale: self.scale
    }.draw(image)
  }
}
