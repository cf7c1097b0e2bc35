use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
    OutOfRange { top_left: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
            Self::OutOfRange { top_left, width, height } => write!(
                f,
                "pixel rect {}x{} at ({}, {}) extends past the pixel range",
                width, height, top_left.x, top_left.y
            ),
        }
    }
}

impl Error for PixelRectError {}

/// A non-empty rectangle of pixels, anchored at its top-left pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(top_left: Point, width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }
        if top_left.x.checked_add(width).is_none() || top_left.y.checked_add(height).is_none() {
            return Err(PixelRectError::OutOfRange { top_left, width, height });
        }

        Ok(Self::from_parts(top_left, width, height))
    }

    /// Callers guarantee `width > 0 && height > 0` and that the far edges fit
    /// in `u32`.
    pub(crate) const fn from_parts(top_left: Point, width: u32, height: u32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Inclusive bottom-right pixel.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.top_left.x + self.width - 1,
            y: self.top_left.y + self.height - 1,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let bottom_right = self.bottom_right();

        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && bottom_right.x >= point.x
            && bottom_right.y >= point.y
    }

    /// Splits at `width / 2` and `height / 2` into top-left, top-right,
    /// bottom-left and bottom-right quadrants. Only valid when both
    /// dimensions are at least 2.
    pub(crate) fn quadrants(&self) -> [PixelRect; 4] {
        debug_assert!(self.width >= 2 && self.height >= 2);

        let left_width = self.width / 2;
        let top_height = self.height / 2;
        let right_width = self.width - left_width;
        let bottom_height = self.height - top_height;

        let Point { x, y } = self.top_left;
        let mid_x = x + left_width;
        let mid_y = y + top_height;

        [
            Self::from_parts(Point { x, y }, left_width, top_height),
            Self::from_parts(Point { x: mid_x, y }, right_width, top_height),
            Self::from_parts(Point { x, y: mid_y }, left_width, bottom_height),
            Self::from_parts(Point { x: mid_x, y: mid_y }, right_width, bottom_height),
        ]
    }

    /// Every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Point> + use<> {
        let Point { x: left, y: top } = self.top_left;
        let right = left + self.width;
        let bottom = top + self.height;

        (top..bottom).flat_map(move |y| (left..right).map(move |x| Point { x, y }))
    }
}
