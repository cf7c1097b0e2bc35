use std::error::Error;
use std::fmt;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreGridError {
    InvalidDimensions { width: u32, height: u32 },
    Allocation { width: u32, height: u32 },
}

impl fmt::Display for ScoreGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "score grid size must be positive: {}x{}", width, height)
            }
            Self::Allocation { width, height } => {
                write!(f, "unable to allocate a {}x{} score grid", width, height)
            }
        }
    }
}

impl Error for ScoreGridError {}

/// Row-major store of escape scores, one per pixel, row 0 at the top.
///
/// Storage is created by `allocate` and dropped by `release`, both internal
/// to the crate; callers only ever see grids owned by a session. The
/// dimensions never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    width: u32,
    height: u32,
    scores: Option<Vec<u32>>,
}

impl ScoreGrid {
    pub(crate) fn new(width: u32, height: u32) -> Result<Self, ScoreGridError> {
        if width == 0 || height == 0 {
            return Err(ScoreGridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            scores: None,
        })
    }

    /// Creates zero-filled storage. Does nothing if already allocated.
    pub(crate) fn allocate(&mut self) -> Result<(), ScoreGridError> {
        if self.scores.is_some() {
            return Ok(());
        }

        let error = ScoreGridError::Allocation {
            width: self.width,
            height: self.height,
        };
        let len = usize::try_from(self.width as u64 * self.height as u64).map_err(|_| error)?;

        let mut scores = Vec::new();
        scores.try_reserve_exact(len).map_err(|_| error)?;
        scores.resize(len, 0);

        self.scores = Some(scores);
        Ok(())
    }

    /// Frees the storage. Safe to call on an unallocated grid.
    #[allow(dead_code)]
    pub(crate) fn release(&mut self) {
        self.scores = None;
    }

    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.scores.is_some()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole grid as a rectangle anchored at the origin.
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::from_parts(Point { x: 0, y: 0 }, self.width, self.height)
    }

    /// Checked read; `None` when out of range or unallocated.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }

        self.scores
            .as_ref()
            .map(|scores| scores[self.index(Point::at(row, col))])
    }

    /// Row-major scores; empty when unallocated.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        self.scores.as_deref().unwrap_or(&[])
    }

    /// Rows from top to bottom, each ordered left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.as_slice().chunks_exact(self.width as usize)
    }

    #[inline]
    fn index(&self, pixel: Point) -> usize {
        debug_assert!(pixel.x < self.width && pixel.y < self.height);
        pixel.y as usize * self.width as usize + pixel.x as usize
    }

    #[inline]
    pub(crate) fn score(&self, pixel: Point) -> u32 {
        let index = self.index(pixel);
        self.allocated()[index]
    }

    #[inline]
    pub(crate) fn set_score(&mut self, pixel: Point, score: u32) {
        let index = self.index(pixel);
        self.allocated_mut()[index] = score;
    }

    pub(crate) fn allocated_mut(&mut self) -> &mut [u32] {
        debug_assert!(self.scores.is_some(), "score grid used before allocation");
        self.scores.as_deref_mut().unwrap_or(&mut [])
    }

    fn allocated(&self) -> &[u32] {
        debug_assert!(self.scores.is_some(), "score grid used before allocation");
        self.as_slice()
    }
}
