//! Shape geometry and scanline rasterization for primitive-based image
//! approximation.
//!
//! An external hill-climbing optimizer proposes a shape, mutates it, and
//! scores the result against a target image, thousands of times per accepted
//! primitive. This crate owns the geometry side of that loop: randomized
//! construction, Gaussian mutation clamped to the canvas, and conversion of
//! a shape into horizontal coverage spans ([`Scanline`]s) which the
//! optimizer scores without rendering a full raster each time.
//!
//! # Basic usage
//! ```
//! use {
//!   primitive_shapes::{
//!     geometry::Canvas,
//!     shape::{Shape, ShapeKind}
//!   },
//!   rand::SeedableRng
//! };
//!
//! let canvas = Canvas::new(256, 256);
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//!
//! // propose a candidate,
//! let mut shape = ShapeKind::RotatedRect.random(canvas, &mut rng);
//! // keep a snapshot, perturb, and rasterize for scoring;
//! // discard either side depending on the score
//! let snapshot = shape.copy();
//! shape.mutate(canvas, &mut rng);
//! for line in shape.rasterize(canvas) {
//!   assert!(line.in_bounds(canvas));
//! }
//! # let _ = snapshot;
//! ```
//!
//! Scoring, acceptance, and worker scheduling stay with the caller: shapes
//! are plain values, the canvas bounds and the RNG stream are borrowed per
//! call, and nothing here blocks or performs I/O. With the `drawing` feature
//! enabled, accepted shapes can be composited onto an [`image::RgbaImage`]
//! through [`drawing::Draw`].

pub mod error;
pub mod geometry;
pub mod scanline;
pub mod raster;
pub mod shape;
#[cfg(feature = "drawing")]
pub mod drawing;

pub use {
  scanline::{Scanline, FULL_COVERAGE},
  shape::{Shape, ShapeKind}
};
