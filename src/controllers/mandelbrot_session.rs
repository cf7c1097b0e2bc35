use std::time::Instant;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_divide_and_conquer::{
    generate_fractal_divide_and_conquer, GenerationStats,
};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::complex::Complex;
use crate::core::data::score_grid::ScoreGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// An image of the Mandelbrot set and the settings that produced it.
///
/// The session owns its score grid. Any change to the view or the iteration
/// limit marks the grid stale, and [`scores`](Self::scores) refuses to hand it
/// out until one of the generate methods has run again.
///
/// Dropping the session frees its grid; there is no separate teardown call.
#[derive(Debug)]
pub struct MandelbrotSession {
    viewport: Viewport,
    max_iterations: u32,
    grid: ScoreGrid,
    stale: bool,
}

impl MandelbrotSession {
    /// A session for a `width` x `height` image using the default view and
    /// 255 iterations.
    pub fn new(width: u32, height: u32) -> Result<Self, MandelbrotError> {
        Self::from_config(MandelbrotConfig::with_size(width, height))
    }

    pub fn from_config(config: MandelbrotConfig) -> Result<Self, MandelbrotError> {
        let MandelbrotConfig {
            width,
            height,
            center,
            zoom,
            max_iterations,
        } = config;

        if width == 0 || height == 0 {
            return Err(MandelbrotError::InvalidDimensions { width, height });
        }
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        let viewport = Viewport::new(center, zoom, width, height)?;
        let mut grid = ScoreGrid::new(width, height)?;
        grid.allocate()?;

        log::debug!(
            "created {}x{} session at ({}, {}) zoom {} with {} iterations",
            width,
            height,
            center.real,
            center.imag,
            zoom,
            max_iterations
        );

        Ok(Self {
            viewport,
            max_iterations,
            grid,
            stale: true,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Moves the view. On error the previous view is kept and staleness is
    /// unchanged.
    pub fn set_position(&mut self, center: Complex, zoom: i32) -> Result<(), MandelbrotError> {
        self.viewport = Viewport::new(center, zoom, self.width(), self.height())?;
        self.stale = true;

        log::debug!(
            "moved to ({}, {}) zoom {}, resolution {}",
            center.real,
            center.imag,
            zoom,
            self.viewport.resolution()
        );

        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        self.max_iterations = max_iterations;
        self.stale = true;
        Ok(())
    }

    /// Scores every pixel individually.
    pub fn generate(&mut self) -> Result<(), MandelbrotError> {
        let algorithm = self.algorithm()?;
        let rect = self.grid.pixel_rect();
        let start = Instant::now();

        generate_fractal(&mut self.grid, rect, &algorithm);

        log::debug!("generated {} pixels in {:?}", rect.size(), start.elapsed());
        self.stale = false;
        Ok(())
    }

    /// Scores the image with Mariani-Silver subdivision, skipping the interior
    /// of blocks bordered by one non-zero score.
    pub fn fast_generate(&mut self) -> Result<GenerationStats, MandelbrotError> {
        let algorithm = self.algorithm()?;
        let rect = self.grid.pixel_rect();
        let start = Instant::now();

        let stats = generate_fractal_divide_and_conquer(&mut self.grid, rect, &algorithm);

        log::debug!(
            "fast generated {} pixels ({} evaluated) in {:?}",
            rect.size(),
            stats.evaluated,
            start.elapsed()
        );
        self.stale = false;
        Ok(stats)
    }

    /// Same result as [`generate`](Self::generate), spread across threads.
    pub fn parallel_generate(&mut self) -> Result<(), MandelbrotError> {
        let algorithm = self.algorithm()?;
        let start = Instant::now();

        generate_fractal_parallel_rayon(&mut self.grid, &algorithm);

        log::debug!(
            "parallel generated {}x{} in {:?}",
            self.width(),
            self.height(),
            start.elapsed()
        );
        self.stale = false;
        Ok(())
    }

    /// The scores from the last generation, borrowed for as long as the
    /// session is not modified. Returns [`MandelbrotError::Stale`] if nothing
    /// has been generated since construction or the last settings change.
    pub fn scores(&self) -> Result<&ScoreGrid, MandelbrotError> {
        if self.stale {
            log::warn!("Mandelbrot set has changed and requires regenerating");
            return Err(MandelbrotError::Stale);
        }

        Ok(&self.grid)
    }

    fn algorithm(&self) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(self.viewport, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::ViewportError;
    use crate::core::fractals::mandelbrot::algorithm::escape_score;
    use crate::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_MAX_ITERATIONS;

    fn session_at(width: u32, height: u32, center: Complex, zoom: i32) -> MandelbrotSession {
        let mut session = MandelbrotSession::new(width, height).unwrap();
        session.set_position(center, zoom).unwrap();
        session
    }

    #[test]
    fn test_new_session_is_stale() {
        let session = MandelbrotSession::new(10, 10).unwrap();

        assert!(session.is_stale());
        assert_eq!(session.scores(), Err(MandelbrotError::Stale));
        assert_eq!(session.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            MandelbrotSession::new(0, 10).unwrap_err(),
            MandelbrotError::InvalidDimensions { width: 0, height: 10 }
        );
        assert_eq!(
            MandelbrotSession::new(10, 0).unwrap_err(),
            MandelbrotError::InvalidDimensions { width: 10, height: 0 }
        );
    }

    #[test]
    fn test_zero_iterations_in_config_are_rejected() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::with_size(8, 8)
        };

        assert_eq!(
            MandelbrotSession::from_config(config).unwrap_err(),
            MandelbrotError::ZeroMaxIterationsError
        );
    }

    #[test]
    fn test_generate_clears_staleness() {
        let mut session = MandelbrotSession::new(12, 8).unwrap();

        session.generate().unwrap();

        assert!(!session.is_stale());
        let scores = session.scores().unwrap();
        assert_eq!(scores.width(), 12);
        assert_eq!(scores.height(), 8);
    }

    #[test]
    fn test_settings_changes_mark_stale() {
        let mut session = MandelbrotSession::new(12, 8).unwrap();

        session.generate().unwrap();
        session.set_position(Complex::new(0.0, 0.0), 3).unwrap();
        assert_eq!(session.scores(), Err(MandelbrotError::Stale));

        session.fast_generate().unwrap();
        session.set_max_iterations(40).unwrap();
        assert_eq!(session.scores(), Err(MandelbrotError::Stale));

        session.parallel_generate().unwrap();
        assert!(session.scores().is_ok());
    }

    #[test]
    fn test_rejected_settings_leave_session_unchanged() {
        let mut session = session_at(12, 8, Complex::new(0.5, 0.5), 2);
        session.generate().unwrap();

        assert_eq!(
            session.set_position(Complex::ZERO, 4000),
            Err(MandelbrotError::Viewport(ViewportError::InvalidZoom { zoom: 4000 }))
        );
        assert_eq!(
            session.set_max_iterations(0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );

        assert!(!session.is_stale());
        assert_eq!(session.viewport().zoom(), 2);
        assert_eq!(session.viewport().center(), Complex::new(0.5, 0.5));
        assert_eq!(session.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_stale_read_has_no_side_effects() {
        let mut session = MandelbrotSession::new(6, 6).unwrap();

        assert!(session.scores().is_err());
        assert!(session.scores().is_err());

        session.generate().unwrap();
        assert!(session.scores().is_ok());
    }

    #[test]
    fn test_generate_scores_match_mapped_points() {
        let mut session = session_at(9, 7, Complex::new(-0.75, 0.1), 3);
        session.set_max_iterations(100).unwrap();
        session.generate().unwrap();

        let viewport = session.viewport();
        let scores = session.scores().unwrap();

        for row in 0..7 {
            for col in 0..9 {
                let c = viewport.point_at(crate::core::data::point::Point::at(row, col));
                assert_eq!(scores.get(row, col), Some(escape_score(c, 100)));
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut session = session_at(40, 30, Complex::new(-0.5, 0.0), 4);
        session.generate().unwrap();
        let sequential = session.scores().unwrap().clone();

        session.parallel_generate().unwrap();

        assert_eq!(session.scores().unwrap(), &sequential);
    }

    #[test]
    fn test_fast_generate_reports_savings_inside_cardioid() {
        let mut session = session_at(64, 64, Complex::new(-0.1, 0.0), 9);

        let stats = session.fast_generate().unwrap();

        assert!(stats.filled > 0);
        assert!(stats.evaluated < 64 * 64);
        assert!(
            session
                .scores()
                .unwrap()
                .as_slice()
                .iter()
                .all(|&score| score == DEFAULT_MAX_ITERATIONS)
        );
    }
}
