use rand::Rng;

use crate::basic::{GridDim, Point};
use crate::snake::Snake;
pub use spawn::SpawnPolicy;

pub mod spawn;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Food {
    pos: Point,
}

impl Food {
    pub fn at(pos: Point) -> Self {
        Self { pos }
    }

    pub fn spawn(policy: SpawnPolicy, grid: GridDim, snake: &Snake, rng: &mut impl Rng) -> Self {
        Self::at(spawn::spawn_position(policy, grid, snake, rng))
    }

    /// Move the food to a new position, same rules as `Food::spawn`
    pub fn respawn(&mut self, policy: SpawnPolicy, grid: GridDim, snake: &Snake, rng: &mut impl Rng) {
        self.pos = spawn::spawn_position(policy, grid, snake, rng);
    }

    pub fn pos(&self) -> Point {
        self.pos
    }
}
