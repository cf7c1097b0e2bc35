use std::error::Error;
use std::fmt;
use crate::core::data::complex::{Complex, Real};
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    InvalidDimensions { width: u32, height: u32 },
    InvalidZoom { zoom: i32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "viewport image size must be positive: {}x{}", width, height)
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom level {} gives no usable pixel resolution", zoom)
            }
        }
    }
}

impl Error for ViewportError {}

/// Maps image pixels onto the complex plane.
///
/// The view is described by its `center` and a `zoom` level; adjacent pixel
/// centers are `1 / 2^zoom` apart in both axes. Pixel samples are taken at the
/// middle of each pixel, not its corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom: i32,
    resolution: Real,
    top_left: Complex,
}

impl Viewport {
    pub fn new(center: Complex, zoom: i32, width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidDimensions { width, height });
        }

        let resolution = 1.0 / (2.0 as Real).powi(zoom);
        if !(resolution > 0.0 && resolution.is_finite()) {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        let plane_width = width as Real * resolution;
        let plane_height = height as Real * resolution;

        Ok(Self {
            center,
            zoom,
            resolution,
            top_left: Complex {
                real: center.real - plane_width / 2.0,
                imag: center.imag + plane_height / 2.0,
            },
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    /// Plane distance between adjacent pixel centers.
    #[must_use]
    pub fn resolution(&self) -> Real {
        self.resolution
    }

    /// Plane coordinate of the image's top-left corner (not a pixel center).
    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    /// The complex-plane sample for `pixel`. Pixels outside the image the
    /// viewport was built for map to points outside the view; callers keep
    /// indices in range.
    #[inline]
    #[must_use]
    pub fn point_at(&self, pixel: Point) -> Complex {
        let half_resolution = self.resolution / 2.0;

        Complex {
            real: self.top_left.real + (self.resolution * pixel.x as Real + half_resolution),
            imag: self.top_left.imag - (self.resolution * pixel.y as Real + half_resolution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_halves_with_each_zoom_level() {
        let center = Complex::new(0.0, 0.0);

        assert_eq!(Viewport::new(center, 0, 10, 10).unwrap().resolution(), 1.0);
        assert_eq!(Viewport::new(center, 1, 10, 10).unwrap().resolution(), 0.5);
        assert_eq!(Viewport::new(center, 6, 10, 10).unwrap().resolution(), 1.0 / 64.0);
        assert_eq!(Viewport::new(center, -2, 10, 10).unwrap().resolution(), 4.0);
    }

    #[test]
    fn test_top_left_is_offset_from_center_by_half_the_view() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.0), 6, 150, 100).unwrap();

        assert_eq!(viewport.top_left().real, -0.5 - 150.0 / 128.0);
        assert_eq!(viewport.top_left().imag, 100.0 / 128.0);
    }

    #[test]
    fn test_point_at_samples_pixel_centers() {
        let viewport = Viewport::new(Complex::new(0.0, 0.0), 0, 4, 2).unwrap();

        // top-left corner is (-2, 1) with one unit per pixel
        assert_eq!(viewport.point_at(Point::at(0, 0)), Complex::new(-1.5, 0.5));
        assert_eq!(viewport.point_at(Point::at(1, 3)), Complex::new(1.5, -0.5));
    }

    #[test]
    fn test_point_at_is_symmetric_around_center() {
        let viewport = Viewport::new(Complex::new(1.0, -1.0), 3, 8, 8).unwrap();

        let top_left = viewport.point_at(Point::at(0, 0));
        let bottom_right = viewport.point_at(Point::at(7, 7));

        assert_eq!(top_left.real + bottom_right.real, 2.0);
        assert_eq!(top_left.imag + bottom_right.imag, -2.0);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            Viewport::new(Complex::ZERO, 0, 0, 10),
            Err(ViewportError::InvalidDimensions { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_zoom_that_underflows_resolution_is_rejected() {
        assert_eq!(
            Viewport::new(Complex::ZERO, 5000, 10, 10),
            Err(ViewportError::InvalidZoom { zoom: 5000 })
        );
        assert_eq!(
            Viewport::new(Complex::ZERO, -5000, 10, 10),
            Err(ViewportError::InvalidZoom { zoom: -5000 })
        );
    }
}
