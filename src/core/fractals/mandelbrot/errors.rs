use std::{error::Error, fmt};

use crate::core::data::score_grid::ScoreGridError;
use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidDimensions { width: u32, height: u32 },
    /// The score grid no longer matches the view settings and must be
    /// regenerated before it can be read.
    Stale,
    Viewport(ViewportError),
    ScoreGrid(ScoreGridError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "image size must be positive: {}x{}", width, height)
            }
            Self::Stale => {
                write!(f, "Mandelbrot set has changed and requires regenerating")
            }
            Self::Viewport(e) => write!(f, "viewport error: {}", e),
            Self::ScoreGrid(e) => write!(f, "score grid error: {}", e),
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(e) => Some(e),
            Self::ScoreGrid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ViewportError> for MandelbrotError {
    fn from(e: ViewportError) -> Self {
        Self::Viewport(e)
    }
}

impl From<ScoreGridError> for MandelbrotError {
    fn from(e: ScoreGridError) -> Self {
        Self::ScoreGrid(e)
    }
}
