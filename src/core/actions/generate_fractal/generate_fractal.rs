use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::score_grid::ScoreGrid;

/// Scores every pixel of `pixel_rect` one by one. The rectangle must lie
/// inside the grid.
pub(crate) fn generate_fractal<Alg: FractalAlgorithm>(
    grid: &mut ScoreGrid,
    pixel_rect: PixelRect,
    algorithm: &Alg,
) {
    for pixel in pixel_rect.pixels() {
        grid.set_score(pixel, algorithm.compute(pixel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::cell::Cell;

    #[derive(Debug, Default)]
    struct StubCountingAlgorithm {
        calls: Cell<u64>,
    }

    impl FractalAlgorithm for StubCountingAlgorithm {
        fn compute(&self, pixel: Point) -> u32 {
            self.calls.set(self.calls.get() + 1);
            pixel.x * 100 + pixel.y
        }
    }

    fn allocated_grid(width: u32, height: u32) -> ScoreGrid {
        let mut grid = ScoreGrid::new(width, height).unwrap();
        grid.allocate().unwrap();
        grid
    }

    #[test]
    fn test_whole_grid_is_scored_once_per_pixel() {
        let algorithm = StubCountingAlgorithm::default();
        let mut grid = allocated_grid(4, 3);
        let rect = grid.pixel_rect();

        generate_fractal(&mut grid, rect, &algorithm);

        assert_eq!(algorithm.calls.get(), 12);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.get(row, col), Some(col * 100 + row));
            }
        }
    }

    #[test]
    fn test_sub_rectangle_leaves_other_cells_untouched() {
        let algorithm = StubCountingAlgorithm::default();
        let mut grid = allocated_grid(5, 5);
        let rect = PixelRect::new(Point { x: 1, y: 2 }, 3, 2).unwrap();

        generate_fractal(&mut grid, rect, &algorithm);

        assert_eq!(algorithm.calls.get(), 6);
        assert_eq!(grid.get(2, 1), Some(102));
        assert_eq!(grid.get(3, 3), Some(303));
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(4, 4), Some(0));
        assert_eq!(grid.get(2, 4), Some(0));
    }
}
