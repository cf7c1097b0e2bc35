use crate::core::data::point::Point;

/// Scores a single pixel. Implementations are total: every pixel of the image
/// they were built for yields a score.
pub(crate) trait FractalAlgorithm {
    fn compute(&self, pixel: Point) -> u32;
}
