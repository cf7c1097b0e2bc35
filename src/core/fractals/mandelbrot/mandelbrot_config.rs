use crate::core::data::complex::Complex;

pub const DEFAULT_MAX_ITERATIONS: u32 = 255;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_ZOOM: i32 = 8;

const fn default_center() -> Complex {
    Complex::new(-0.5, 0.0)
}

/// Everything needed to build a [`MandelbrotSession`](crate::MandelbrotSession).
///
/// The default frames the whole set in an 800x600 image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    pub center: Complex,
    pub zoom: i32,
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center: default_center(),
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    /// Default view settings for an image of the given size.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
