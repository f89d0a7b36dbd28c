//! Snake plugin - keyboard steering and paced session ticks.

use bevy::prelude::*;
use greed_snake::{Key, Phase};

use super::{FoodEatenEvent, GameOverEvent, GamePhase, GameState, InputBuffer, TickClock};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FoodEatenEvent>()
            .add_message::<GameOverEvent>()
            .add_systems(Update, (snake_movement_input, advance_session).chain());
    }
}

/// Maps arrow keys and WASD onto abstract keys.
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowUp | KeyCode::KeyW => Key::Up,
        KeyCode::ArrowDown | KeyCode::KeyS => Key::Down,
        KeyCode::ArrowLeft | KeyCode::KeyA => Key::Left,
        KeyCode::ArrowRight | KeyCode::KeyD => Key::Right,
        _ => Key::Other,
    }
}

/// System to read keyboard input and queue direction changes.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut input_buffer: ResMut<InputBuffer>,
    game_state: Res<GameState>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    let current = game_state.session.direction();
    for &code in keyboard_input.get_just_pressed() {
        let key = key_from_code(code);
        if key != Key::Other {
            input_buffer.queue_key(key, current);
        }
    }
}

/// System to run one session tick whenever the tick interval has elapsed.
fn advance_session(
    time: Res<Time>,
    mut clock: ResMut<TickClock>,
    mut game_state: ResMut<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut game_over_writer: MessageWriter<GameOverEvent>,
) {
    if game_state.phase != GamePhase::Playing || !clock.0.ready(time.elapsed()) {
        return;
    }

    let direction = input_buffer
        .pop_direction()
        .unwrap_or(game_state.session.direction());
    let report = game_state.session.tick(direction);

    if let Some(position) = report.ate {
        food_eaten_writer.write(FoodEatenEvent { position });
    }

    if report.terminal {
        game_state.phase = GamePhase::GameOver;
        if let Phase::GameOver(cause) = game_state.session.phase() {
            game_over_writer.write(GameOverEvent {
                cause,
                score: game_state.session.score(),
            });
        }
    }
}
