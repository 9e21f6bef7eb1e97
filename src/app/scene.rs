use rand::Rng;

use crate::app::control::State;
use crate::app::game::Game;
use crate::app::message::Message;
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::basic::{GridDim, Point};
use crate::color::Color;

/// Backend-independent description of one thing to draw
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Filled square cell
    Cell { pos: Point, side: i32, color: Color },
    Line { from: Point, to: Point, thickness: f32, color: Color },
    Text { text: String, dest: Point, font_size: f32, color: Color },
}

/// Draw commands for the current frame, back to front: grid, snake,
/// game over overlay, food, score
pub fn scene<R: Rng>(game: &Game<R>, palette: &Palette, prefs: &Prefs) -> Vec<DrawCommand> {
    let grid = game.grid();
    let snake = game.snake();
    let mut commands = Vec::with_capacity(snake.len() + 3);

    if prefs.draw_grid {
        commands.extend(grid_lines(grid, palette));
    }

    commands.extend(snake.segments().iter().enumerate().map(|(i, &pos)| {
        let color = if i == 0 {
            palette.snake_head_color
        } else {
            palette.snake_body_color
        };
        DrawCommand::Cell { pos, side: grid.cell, color }
    }));

    if game.state() == State::GameOver {
        let overlay = Message::game_over(palette.overlay_color, prefs.overlay_fade_in);
        commands.push(overlay.command(game.time_in_state()));
    }

    commands.push(DrawCommand::Cell {
        pos: game.food().pos(),
        side: grid.cell,
        color: palette.food_color,
    });

    commands.push(Message::score(game.score(), palette.score_color).command(game.time_in_state()));

    commands
}

fn grid_lines(grid: GridDim, palette: &Palette) -> impl Iterator<Item = DrawCommand> + '_ {
    let vertical = (1..grid.columns()).map(move |col| {
        let x = col * grid.cell;
        (Point::new(x, 0), Point::new(x, grid.height))
    });
    let horizontal = (1..grid.rows()).map(move |row| {
        let y = row * grid.cell;
        (Point::new(0, y), Point::new(grid.width, y))
    });

    vertical.chain(horizontal).map(move |(from, to)| DrawCommand::Line {
        from,
        to,
        thickness: palette.line_thickness,
        color: palette.grid_color,
    })
}
