//! Turtle chase game entry point.

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use turtle_chase::session::{Arena, SessionConfig};

/// Launch parameters. Fixed for the lifetime of the session.
#[derive(Parser, Debug)]
#[command(name = "turtle-chase", about = "Guide the turtle home past the enemies")]
struct Args {
    /// Screen width in pixels.
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Screen height in pixels.
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Difficulty level. Scales enemy counts and patrol speed.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    level: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = SessionConfig::new(args.width, args.height, args.level)
        .context("invalid session parameters")?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Turtle Chase".to_string(),
                resolution: (config.width, config.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Arena::from(config))
        .add_plugins(turtle_chase::plugin)
        .run();

    Ok(())
}
