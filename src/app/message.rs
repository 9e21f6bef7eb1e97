use std::time::Duration;

use crate::app::scene::DrawCommand;
use crate::basic::Point;
use crate::color::Color;

/// A piece of text at a fixed place in the window
pub struct Message {
    pub text: String,

    /// Top-left corner
    pub dest: Point,
    pub font_size: f32,
    pub color: Color,
    // None means the message is fully visible straight away
    pub fade_in: Option<Duration>,
}

impl Message {
    pub const SCORE_FONT_SIZE: f32 = 24.;
    pub const OVERLAY_FONT_SIZE: f32 = 32.;

    pub fn score(score: u32, color: Color) -> Self {
        Self {
            text: format!("Score: {}", score),
            dest: Point::new(10, 10),
            font_size: Self::SCORE_FONT_SIZE,
            color,
            fade_in: None,
        }
    }

    pub fn game_over(color: Color, fade_in: Duration) -> Self {
        Self {
            text: "Game Over\nPress SPACE to Restart".to_string(),
            dest: Point::new(200, 250),
            font_size: Self::OVERLAY_FONT_SIZE,
            color,
            fade_in: Some(fade_in),
        }
    }

    /// `shown_for` is how long the message has been on screen
    pub fn command(&self, shown_for: Duration) -> DrawCommand {
        // ease-out fade in
        let mut color = self.color;
        if let Some(fade_in) = self.fade_in.filter(|d| !d.is_zero()) {
            let progress = (shown_for.as_secs_f32() / fade_in.as_secs_f32()).min(1.);
            color = color.faded(ezing::cubic_out(progress));
        }

        DrawCommand::Text {
            text: self.text.clone(),
            dest: self.dest,
            font_size: self.font_size,
            color,
        }
    }
}
