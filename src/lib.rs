//! Escape-time scores for the Mandelbrot set.
//!
//! A [`MandelbrotSession`] maps each pixel of an image onto the complex plane
//! and records how many iterations of `z = z² + c` the point survives before
//! leaving radius 2. Scores can be produced pixel by pixel, in parallel, or
//! with Mariani-Silver subdivision, which skips the interior of blocks whose
//! border has a single score.

mod controllers;
mod core;

pub use crate::controllers::mandelbrot_session::MandelbrotSession;
pub use crate::core::actions::generate_fractal::generate_fractal_divide_and_conquer::GenerationStats;
pub use crate::core::data::complex::{Complex, Real};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::score_grid::{ScoreGrid, ScoreGridError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_score;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    MandelbrotConfig, DEFAULT_MAX_ITERATIONS,
};
