use static_assertions::const_assert_eq;
use std::time::Duration;

use crate::basic::GridDim;
use crate::food::SpawnPolicy;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const CELL_SIDE: i32 = 20;

// the board is a whole number of cells
const_assert_eq!(WINDOW_WIDTH % CELL_SIDE, 0);
const_assert_eq!(WINDOW_HEIGHT % CELL_SIDE, 0);

#[derive(Clone, Debug)]
pub struct Prefs {
    pub window_width: i32,
    pub window_height: i32,
    pub cell_side: i32,

    /// Time between two steps of the snake
    pub move_interval: Duration,
    pub score_per_food: u32,
    pub food_spawn: SpawnPolicy,

    /// Graphics framerate cap
    pub fps: u32,
    /// Path inside the resource directory
    pub font_path: String,
    pub draw_grid: bool,
    pub overlay_fade_in: Duration,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_side: CELL_SIDE,

            move_interval: Duration::from_millis(120),
            score_per_food: 10,
            food_spawn: SpawnPolicy::Uniform,

            fps: 60,
            font_path: "/arial.ttf".to_string(),
            draw_grid: false,
            overlay_fade_in: Duration::from_millis(300),
        }
    }
}

// builder
impl Prefs {
    pub fn grid(&self) -> GridDim {
        GridDim::new(self.window_width, self.window_height, self.cell_side)
    }

    pub fn board(mut self, width: i32, height: i32, cell_side: i32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self.cell_side = cell_side;
        self
    }

    pub fn food_spawn(mut self, food_spawn: SpawnPolicy) -> Self {
        self.food_spawn = food_spawn;
        self
    }

    pub fn draw_grid(mut self, draw_grid: bool) -> Self {
        self.draw_grid = draw_grid;
        self
    }
}
