//! # Floorwalk Main Entry Point
//!
//! Loads the layout table, sets up logging and the macroquad window, and runs
//! the input/render loop.

use clap::Parser;
use floorwalk::{
    FloorwalkResult, InputHandler, JsonLayoutFile, LayoutSource, MacroquadDisplay, MoveOutcome,
    PlayerInput, SeedHouse, Session,
};
use log::{error, info, LevelFilter};
use macroquad::prelude::*;
use std::path::PathBuf;

/// Command line arguments for Floorwalk.
#[derive(Parser, Debug)]
#[command(name = "floorwalk")]
#[command(about = "Walk around a two-storey house and its garden")]
#[command(version)]
struct Args {
    /// JSON layout table to use instead of the built-in house
    #[arg(long)]
    layouts: Option<PathBuf>,

    /// Print the active layout table as JSON and exit
    #[arg(long)]
    dump_layouts: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Floorwalk".to_string(),
        window_width: 1104,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> FloorwalkResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Floorwalk v{}", floorwalk::VERSION);

    let source: Box<dyn LayoutSource> = match &args.layouts {
        Some(path) => Box::new(JsonLayoutFile::new(path)),
        None => Box::new(SeedHouse),
    };
    let store = source.load().map_err(|e| {
        error!("Could not load layouts from {}: {}", source.source_name(), e);
        e
    })?;
    info!("Loaded layouts from {}", source.source_name());

    if args.dump_layouts {
        println!("{}", store.to_json()?);
        return Ok(());
    }

    run_game(Session::new(store)?).await
}

/// Initializes env_logger; `RUST_LOG` overrides the command line level.
fn initialize_logging(log_level: &str) {
    let level = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    let env = env_logger::Env::default().default_filter_or(level.to_string());

    // Only fails if a logger is already installed.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Main loop: apply every input of the frame, then draw.
async fn run_game(mut session: Session) -> FloorwalkResult<()> {
    let input_handler = InputHandler::new();
    let mut display = MacroquadDisplay::default();

    let (width, height) = display.window_size();
    request_new_screen_size(width, height);

    'frames: loop {
        for input in input_handler.poll() {
            match input {
                PlayerInput::Quit => {
                    info!("Player quit");
                    break 'frames;
                }
                PlayerInput::Move(direction) => {
                    if let MoveOutcome::FloorChanged { from, to } = session.apply(direction)? {
                        display.set_message(format!(
                            "Took the stairs from floor {} to {}",
                            from, to
                        ));
                    }
                }
            }
        }

        display.render_session(&session)?;

        next_frame().await;
    }

    info!("Walked {} step(s)", session.steps_taken());
    Ok(())
}
