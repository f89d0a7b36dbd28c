//! Bevy front end: keyboard input, pacing, drawing and menus around a [`greed_snake::Session`].

mod components;
mod constants;
mod events;
mod rendering;
mod resources;
mod snake;
mod ui;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use rendering::RenderingPlugin;
pub use resources::*;
pub use snake::SnakePlugin;
pub use ui::UiPlugin;
