use itertools::iproduct;
use num_integer::Integer;
use rand::Rng;

use crate::basic::Point;

/// Pixel dimensions of the board along with the side length of one
/// square cell, every position on the board is a multiple of `cell`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GridDim {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl GridDim {
    pub fn new(width: i32, height: i32, cell: i32) -> Self {
        assert!(cell > 0, "cell side must be positive ({})", cell);
        assert!(
            Integer::is_multiple_of(&width, &cell) && Integer::is_multiple_of(&height, &cell),
            "{}x{} is not a whole number of {}px cells",
            width,
            height,
            cell,
        );
        Self { width, height, cell }
    }

    pub fn columns(self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(self) -> i32 {
        self.height / self.cell
    }

    /// `[0, width) × [0, height)`
    pub fn contains(self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn is_aligned(self, pos: Point) -> bool {
        Integer::is_multiple_of(&pos.x, &self.cell) && Integer::is_multiple_of(&pos.y, &self.cell)
    }

    /// Top-left corner of every cell, row by row
    pub fn cells(self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.rows(), 0..self.columns())
            .map(move |(row, col)| Point::new(col * self.cell, row * self.cell))
    }

    /// A uniformly random cell, single draw
    pub fn random_cell(self, rng: &mut impl Rng) -> Point {
        Point {
            x: rng.gen_range(0..self.columns()) * self.cell,
            y: rng.gen_range(0..self.rows()) * self.cell,
        }
    }
}
