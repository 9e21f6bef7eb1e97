#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use clap::Parser;
use ggez::event::run;
use ggez::ContextBuilder;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, SimpleLogger, TermLogger, TerminalMode};
use std::path::PathBuf;

use crate::app::app_error::{AppError, AppResult};
use crate::app::App;
use crate::cli::Cli;

mod app;
mod basic;
mod cli;
mod color;
mod food;
mod snake;

fn init_logging() -> AppResult {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .or_else(|_| SimpleLogger::init(LevelFilter::Info, Config::default()))?;
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{}", e);
    }

    let prefs = Cli::parse().prefs();

    let built = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(App::wm(&prefs))
        .window_setup(App::ws())
        .add_resource_path(PathBuf::from("./resources"))
        .build();
    let (mut ctx, event_loop) = match built {
        Ok(built) => built,
        Err(e) => {
            error!("{}", AppError::from(e).with_trace_step("main"));
            std::process::exit(1);
        }
    };

    info!(
        "starting on a {}x{} board",
        prefs.window_width / prefs.cell_side,
        prefs.window_height / prefs.cell_side,
    );
    let app = App::new(&mut ctx, prefs);
    run(ctx, event_loop, app)
}
