//! Mariani-Silver generation.
//!
//! Escape scores form bands that enclose the set, so a block whose border
//! carries one score almost always carries it throughout. Such blocks are
//! filled without evaluating their interior; every other block is split into
//! quadrants. Features thinner than a pixel that sit entirely inside a
//! uniform border are missed.

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::score_grid::ScoreGrid;

/// Blocks narrower or shorter than this are scored pixel by pixel.
const MIN_BLOCK_SIZE: u32 = 3;

/// Work done by one divide-and-conquer pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Calls made to the algorithm, including border pixels scored again by
    /// the quadrants that share them.
    pub evaluated: u64,
    /// Interior pixels filled from a uniform border.
    pub filled: u64,
    pub pruned_blocks: u64,
}

/// Fills `pixel_rect` of `grid`, skipping the interior of blocks bordered by a
/// single non-zero score.
///
/// A zero border is never trusted: score 0 is the most common value at the
/// edge of the view and filling on it leaves visible artifacts.
pub(crate) fn generate_fractal_divide_and_conquer<Alg: FractalAlgorithm>(
    grid: &mut ScoreGrid,
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> GenerationStats {
    let mut stats = GenerationStats::default();
    let mut pending = vec![pixel_rect];

    while let Some(rect) = pending.pop() {
        if rect.width() < MIN_BLOCK_SIZE || rect.height() < MIN_BLOCK_SIZE {
            generate_fractal(grid, rect, algorithm);
            stats.evaluated += rect.size();
            continue;
        }

        let uniform = generate_border(grid, rect, algorithm);
        stats.evaluated += 2 * rect.width() as u64 + 2 * (rect.height() as u64 - 2);

        let corner_score = grid.score(rect.top_left());
        if uniform && corner_score != 0 {
            fill_interior(grid, rect, corner_score);
            stats.filled += (rect.width() as u64 - 2) * (rect.height() as u64 - 2);
            stats.pruned_blocks += 1;
        } else {
            // reversed so the top-left quadrant is processed first
            pending.extend(rect.quadrants().into_iter().rev());
        }
    }

    log::trace!(
        "divide and conquer over {}x{}: {} evaluated, {} filled in {} blocks",
        pixel_rect.width(),
        pixel_rect.height(),
        stats.evaluated,
        stats.filled,
        stats.pruned_blocks
    );

    stats
}

/// Scores every border pixel of `rect` exactly once and reports whether the
/// whole border shares one score.
fn generate_border<Alg: FractalAlgorithm>(
    grid: &mut ScoreGrid,
    rect: PixelRect,
    algorithm: &Alg,
) -> bool {
    let Point { x: left, y: top } = rect.top_left();
    let Point { x: right, y: bottom } = rect.bottom_right();

    // evaluate all four lines even once one of them is known to differ
    let top_uniform = generate_border_row(grid, top, left, right, algorithm);
    let bottom_uniform = generate_border_row(grid, bottom, left, right, algorithm);
    let left_uniform = generate_border_col(grid, left, top, bottom, algorithm);
    let right_uniform = generate_border_col(grid, right, top, bottom, algorithm);

    top_uniform && bottom_uniform && left_uniform && right_uniform
}

fn generate_border_row<Alg: FractalAlgorithm>(
    grid: &mut ScoreGrid,
    row: u32,
    left: u32,
    right: u32,
    algorithm: &Alg,
) -> bool {
    let mut uniform = true;
    let mut previous = None;

    for x in left..=right {
        let pixel = Point { x, y: row };
        let score = algorithm.compute(pixel);
        grid.set_score(pixel, score);

        if previous.is_some_and(|previous| previous != score) {
            uniform = false;
        }
        previous = Some(score);
    }

    uniform
}

/// Scores the column between the two corners, which the row passes have
/// already written. The corners still take part in the uniformity check.
fn generate_border_col<Alg: FractalAlgorithm>(
    grid: &mut ScoreGrid,
    col: u32,
    top: u32,
    bottom: u32,
    algorithm: &Alg,
) -> bool {
    let mut uniform = true;
    let mut previous = grid.score(Point { x: col, y: top });

    for y in top + 1..bottom {
        let pixel = Point { x: col, y };
        let score = algorithm.compute(pixel);
        grid.set_score(pixel, score);

        if score != previous {
            uniform = false;
        }
        previous = score;
    }

    uniform && previous == grid.score(Point { x: col, y: bottom })
}

fn fill_interior(grid: &mut ScoreGrid, rect: PixelRect, score: u32) {
    let Point { x: left, y: top } = rect.top_left();
    let Point { x: right, y: bottom } = rect.bottom_right();

    for y in top + 1..bottom {
        for x in left + 1..right {
            grid.set_score(Point { x, y }, score);
        }
    }
}
