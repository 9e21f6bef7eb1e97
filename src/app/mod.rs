use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{ErrorOrigin, EventHandler};
use ggez::graphics::{Canvas, FontData};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use log::{error, info};
use std::time::Duration;

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::drawing::draw_commands;
use crate::app::game::Game;
use crate::app::keyboard_control::Input;
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::app::scene::scene;

pub mod app_error;
mod control;
mod drawing;
mod game;
mod keyboard_control;
mod message;
mod palette;
pub mod prefs;
mod scene;

pub struct App {
    game: Game,
    prefs: Prefs,
    palette: Palette,
    /// Name the font was registered under, None if loading failed
    font: Option<&'static str>,
}

impl App {
    const FONT_NAME: &'static str = "arial";

    pub fn new(ctx: &mut Context, prefs: Prefs) -> Self {
        let font = match load_font(ctx, &prefs.font_path).with_trace_step("App::new") {
            Ok(()) => Some(Self::FONT_NAME),
            Err(e) => {
                error!("failed to load font, continuing without text\n{}", e);
                None
            }
        };

        Self {
            game: Game::new(&prefs),
            prefs,
            palette: Palette::default(),
            font,
        }
    }

    pub fn wm(prefs: &Prefs) -> WindowMode {
        WindowMode::default()
            .dimensions(prefs.window_width as f32, prefs.window_height as f32)
            .resizable(false)
    }

    pub fn ws() -> WindowSetup {
        WindowSetup::default().title("Snake Game").vsync(true)
    }
}

fn load_font(ctx: &mut Context, path: &str) -> AppResult {
    let font = FontData::from_path(ctx, path)
        .map_err(AppError::from)
        .with_trace_step(format!("load_font({})", path))?;
    ctx.gfx.add_font(App::FONT_NAME, font);
    Ok(())
}

impl EventHandler<AppError> for App {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        // fixed update rate, also caps how often input is handled
        let frame = Duration::from_secs_f64(1. / self.prefs.fps as f64);
        while ctx.time.check_update_time(self.prefs.fps) {
            self.game.update(frame);
        }

        if self.game.quit_requested() {
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, *self.palette.background_color);

        let commands = scene(&self.game, &self.palette, &self.prefs);
        draw_commands(&commands, self.font, &mut canvas, ctx).with_trace_step("App::draw")?;

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, key: KeyInput, _repeated: bool) -> AppResult {
        if let Some(input) = key.keycode.and_then(Input::from_key) {
            self.game.push_input(input);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> AppResult<bool> {
        info!("window closed with score {}", self.game.score());
        // false lets the window close
        Ok(false)
    }

    fn on_error(&mut self, _ctx: &mut Context, origin: ErrorOrigin, e: AppError) -> bool {
        error!("{:?} failed\n{}", origin, e);
        true
    }
}
