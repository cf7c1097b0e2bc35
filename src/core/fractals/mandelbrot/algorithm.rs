use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::{Complex, Real};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ESCAPE_RADIUS_SQ: Real = 4.0;

/// Closed-form test for points inside the main cardioid.
#[inline]
fn in_main_cardioid(c: Complex) -> bool {
    let x_shifted = c.real - 0.25;
    let imag_sq = c.imag * c.imag;
    let q = x_shifted * x_shifted + imag_sq;

    q * (q + x_shifted) < 0.25 * imag_sq
}

/// Number of `z = z² + c` steps, starting from `z = 0`, completed before the
/// orbit leaves radius 2, or `max_iterations` if it never does.
///
/// The step that produces the escaping value is not counted, so a `c` already
/// outside radius 2 scores 0. Points inside the main cardioid return
/// `max_iterations` without iterating.
#[inline]
#[must_use]
pub fn escape_score(c: Complex, max_iterations: u32) -> u32 {
    if in_main_cardioid(c) {
        return max_iterations;
    }

    // TODO: early-exit periodic orbits with Brent cycle detection
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQ {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        escape_score(self.viewport.point_at(pixel), self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub(crate) fn new(viewport: Viewport, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { viewport, max_iterations })
    }
}
