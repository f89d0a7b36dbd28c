use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;
use tracing::{error, info};

mod app;
mod cli;

use app::{
    BACKGROUND_COLOR, GameState, InputBuffer, RenderingPlugin, SnakePlugin, TickClock, UiPlugin,
};
use cli::Cli;

fn main() -> AppExit {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match cli.config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return AppExit::error();
        }
    };

    info!(
        width = config.grid.width(),
        height = config.grid.height(),
        cell_size = config.grid.cell_size(),
        difficulty = ?config.difficulty,
        "starting greed_snake"
    );

    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        resolution: WindowResolution::new(
                            config.grid.width() as u32,
                            config.grid.height() as u32,
                        ),
                        title: "GreedEatSnake".to_string(),
                        ..default()
                    }),
                    ..default()
                })
                // The tracing subscriber is installed above
                .disable::<bevy::log::LogPlugin>(),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(GameState::new(config))
        .insert_resource(TickClock::from(config.difficulty))
        .init_resource::<InputBuffer>()
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin))
        .run()
}
