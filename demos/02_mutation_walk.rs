use {
  primitive_shapes::{
    drawing::Draw,
    error::Result,
    geometry::Canvas,
    shape::{RotatedRect, Shape}
  },
  image::{Rgba, RgbaImage},
  rand::SeedableRng
};

/// Trace a single shape through a sequence of mutations, compositing each
/// intermediate state with increasing opacity; the most recent state ends
/// up brightest.
fn main() -> Result<()> {
  let canvas = Canvas::new(256, 256);
  let mut rng = rand_pcg::Pcg64::seed_from_u64(3);
  let mut image = RgbaImage::from_pixel(256, 256, Rgba([0, 0, 0, 255]));

  let mut shape = RotatedRect::random(canvas, &mut rng);
  for step in 0..24u8 {
    shape
      .texture(Rgba([120, 220, 255, 32 + step * 9]), 1.0)
      .draw(&mut image);
    shape.mutate(canvas, &mut rng);
  }

  println!("{}", shape.svg("fill=\"#78dcff\""));
  image.save("demo_mutation_walk.png")?;
  Ok(())
}
