pub mod complex;
pub mod pixel_rect;
pub mod point;
pub mod score_grid;
pub mod viewport;
