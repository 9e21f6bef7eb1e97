use clap::{Parser, ValueEnum};

use crate::app::prefs::{Prefs, CELL_SIDE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::food::SpawnPolicy;

#[derive(Parser, Debug)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a square grid")]
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = WINDOW_WIDTH / CELL_SIDE, value_parser = clap::value_parser!(i32).range(1..=500))]
    pub columns: i32,

    /// Board height in cells
    #[arg(long, default_value_t = WINDOW_HEIGHT / CELL_SIDE, value_parser = clap::value_parser!(i32).range(1..=500))]
    pub rows: i32,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = CELL_SIDE, value_parser = clap::value_parser!(i32).range(1..=100))]
    pub cell: i32,

    /// Where new food may appear
    #[arg(long, value_enum, default_value_t = FoodSpawn::Anywhere)]
    pub food: FoodSpawn,

    /// Draw faint grid lines
    #[arg(long)]
    pub grid: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum FoodSpawn {
    /// Any cell, including the ones under the snake
    Anywhere,
    /// Only cells the snake doesn't cover
    Free,
}

impl From<FoodSpawn> for SpawnPolicy {
    fn from(spawn: FoodSpawn) -> Self {
        match spawn {
            FoodSpawn::Anywhere => SpawnPolicy::Uniform,
            FoodSpawn::Free => SpawnPolicy::FreeCell,
        }
    }
}

impl Cli {
    pub fn prefs(&self) -> Prefs {
        Prefs::default()
            .board(self.columns * self.cell, self.rows * self.cell, self.cell)
            .food_spawn(self.food.into())
            .draw_grid(self.grid)
    }
}
