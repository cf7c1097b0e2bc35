/// A pixel position: `x` is the column, `y` the row (row 0 is the top).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[must_use]
    pub const fn at(row: u32, col: u32) -> Self {
        Self { x: col, y: row }
    }
}
