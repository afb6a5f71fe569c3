use {
  primitive_shapes::{
    drawing::{Draw, Texture},
    error::Result,
    geometry::Canvas,
    shape::ShapeKind
  },
  image::{Rgba, RgbaImage},
  rand::{Rng, SeedableRng}
};

/// Scatter randomly generated and mutated shapes of both kinds onto a
/// 2x-scaled output image, the way an optimizer would composite accepted
/// candidates.
fn main() -> Result<()> {
  let canvas = Canvas::new(256, 256);
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0x5EED);
  let mut image = RgbaImage::from_pixel(512, 512, Rgba([255, 255, 255, 255]));

  for i in 0..64 {
    let kind = if i % 2 == 0 { ShapeKind::Rect } else { ShapeKind::RotatedRect };
    let mut shape = kind.random(canvas, &mut rng);
    for _ in 0..8 {
      shape.mutate(canvas, &mut rng);
    }

    let color = Rgba([rng.gen(), rng.gen(), rng.gen(), 160]);
    Texture { shape: shape.as_ref(), color, scale: 2.0 }.draw(&mut image);
  }

  image.save("demo_random_shapes.png")?;
  Ok(())
}
