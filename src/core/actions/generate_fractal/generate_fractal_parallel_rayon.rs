use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::score_grid::ScoreGrid;

/// Scores the whole grid pixel by pixel, rows spread over rayon's
/// work-stealing pool.
///
/// Each row is a disjoint slice handed to exactly one task, so every cell has
/// a single writer, and all writes finish before this returns. The result is
/// identical to [`generate_fractal`](super::generate_fractal::generate_fractal)
/// over the full grid.
pub(crate) fn generate_fractal_parallel_rayon<Alg>(grid: &mut ScoreGrid, algorithm: &Alg)
where
    Alg: FractalAlgorithm + Sync,
{
    let width = grid.width() as usize;

    grid.allocated_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, score) in row.iter_mut().enumerate() {
                *score = algorithm.compute(Point {
                    x: x as u32,
                    y: y as u32,
                });
            }
        });
}
