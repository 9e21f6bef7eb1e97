pub use dir::Dir;
pub use grid::GridDim;
pub use point::Point;

mod dir;
mod grid;
mod point;
