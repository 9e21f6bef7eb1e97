use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::basic::{GridDim, Point};
use crate::snake::Snake;

/// How a new food position is chosen
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum SpawnPolicy {
    /// A single uniform draw over the whole board, the food may end up
    /// under the snake
    #[default]
    Uniform,
    /// A uniform draw over the cells the snake doesn't occupy
    FreeCell,
}

pub fn spawn_position(
    policy: SpawnPolicy,
    grid: GridDim,
    snake: &Snake,
    rng: &mut impl Rng,
) -> Point {
    let pos = match policy {
        SpawnPolicy::Uniform => grid.random_cell(rng),
        SpawnPolicy::FreeCell => random_free_cell(grid, snake, rng).unwrap_or_else(|| {
            warn!("no free cell left for food, placing it anywhere");
            grid.random_cell(rng)
        }),
    };
    debug_assert!(grid.is_aligned(pos), "{:?} is not on a cell", pos);
    pos
}

fn random_free_cell(grid: GridDim, snake: &Snake, rng: &mut impl Rng) -> Option<Point> {
    let free_cells: Vec<_> = grid.cells().filter(|&cell| !snake.occupies(cell)).collect();
    free_cells.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_free_cell_avoids_snake() {
        // 3x1 board, the snake covers the first two cells
        let grid = GridDim::new(60, 20, 20);
        let mut snake = Snake::initial(20);
        snake.grow();
        snake.advance();

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let pos = spawn_position(SpawnPolicy::FreeCell, grid, &snake, &mut rng);
            assert_eq!(pos, Point::new(40, 0));
        }
    }

    #[test]
    fn test_free_cell_full_board_falls_back() {
        // 1x1 board filled by the snake
        let grid = GridDim::new(20, 20, 20);
        let snake = Snake::new(Point::ORIGIN, Dir::R, 20);
        let mut rng = StdRng::seed_from_u64(2);
        let pos = spawn_position(SpawnPolicy::FreeCell, grid, &snake, &mut rng);
        assert_eq!(pos, Point::ORIGIN);
    }

    #[test]
    fn test_uniform_covers_whole_board() {
        let grid = GridDim::new(40, 40, 20);
        let snake = Snake::initial(20);
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen: Vec<_> = (0..200)
            .map(|_| spawn_position(SpawnPolicy::Uniform, grid, &snake, &mut rng))
            .collect();
        seen.sort_by_key(|p| (p.y, p.x));
        seen.dedup();

        // the cell under the snake is a valid outcome too
        assert_eq!(seen, grid.cells().collect::<Vec<_>>());
    }
}
