//! UI plugin - handles menus, game over screen, score display, and game flow.

use bevy::prelude::*;
use greed_snake::GameOverCause;

use super::{
    ARENA_COLOR, BUTTON_COLOR, BUTTON_HOVER_COLOR, GameOverEvent, GameOverUI, GamePhase,
    GameState, InputBuffer, MenuButton, MenuUI, OVERLAY_COLOR, SCORE_FONT_SIZE, ScoreText,
    StartGameEvent, TEXT_COLOR, TickClock, Z_BACKGROUND,
};

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<StartGameEvent>()
            .add_systems(Startup, setup_system)
            .add_systems(
                Update,
                (
                    menu_keyboard,
                    menu_buttons,
                    game_over_keyboard,
                    start_game,
                    spawn_game_over_screen,
                    update_score_text.run_if(resource_changed::<GameState>),
                )
                    .chain(),
            );
    }
}

/// Initial setup system - camera, arena, score text, start menu.
fn setup_system(mut commands: Commands, game_state: Res<GameState>) {
    commands.spawn(Camera2d);

    // Arena background
    let grid = game_state.session.grid();
    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(Vec2::new(grid.width() as f32, grid.height() as f32)),
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_BACKGROUND)),
    ));

    commands.spawn((
        Text::from("score:0"),
        TextFont {
            font_size: SCORE_FONT_SIZE,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            ..default()
        },
        ScoreText,
    ));

    if game_state.phase == GamePhase::Menu {
        spawn_start_menu(&mut commands);
    }
}

fn text_line(text: impl Into<String>, font_size: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            margin: UiRect::bottom(Val::Px(20.0)),
            ..default()
        },
    )
}

/// Spawns the start menu with its start and quit buttons.
fn spawn_start_menu(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            MenuUI,
        ))
        .with_children(|parent| {
            for (button, label) in [(MenuButton::Start, "start"), (MenuButton::Quit, "quit")] {
                parent
                    .spawn((
                        Button,
                        Node {
                            width: Val::Px(100.0),
                            height: Val::Px(50.0),
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            margin: UiRect::bottom(Val::Px(50.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_COLOR),
                        button,
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::from(label),
                            TextFont {
                                font_size: SCORE_FONT_SIZE,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                        ));
                    });
            }

            parent.spawn(text_line("SPACE to start, ESC to quit", SCORE_FONT_SIZE));
        });
}

fn cause_message(cause: GameOverCause) -> &'static str {
    match cause {
        GameOverCause::SelfBite => "You bit yourself",
        GameOverCause::OutOfBounds => "You left the arena",
        GameOverCause::BoardFull => "The board is full, you win!",
    }
}

/// System to show the game over screen when the session ends.
fn spawn_game_over_screen(
    mut commands: Commands,
    mut game_over_reader: MessageReader<GameOverEvent>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    let Some(event) = game_over_reader.read().last() else {
        return;
    };
    if !game_over_ui.is_empty() {
        return;
    }

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn(text_line("game over", 60.0));
            parent.spawn(text_line(cause_message(event.cause), 24.0));
            parent.spawn(text_line(format!("Final score: {}", event.score), 30.0));
            parent.spawn(text_line("SPACE to restart, ESC for menu", 20.0));
        });
}

/// System to handle keyboard shortcuts on the start menu.
fn menu_keyboard(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    mut start_writer: MessageWriter<StartGameEvent>,
    mut exit_writer: MessageWriter<AppExit>,
) {
    if game_state.phase != GamePhase::Menu {
        return;
    }

    if keyboard_input.any_just_pressed([KeyCode::Space, KeyCode::Enter]) {
        start_writer.write(StartGameEvent);
    } else if keyboard_input.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        info!("quit game");
        exit_writer.write(AppExit::Success);
    }
}

/// System to highlight hovered menu buttons and act on clicks.
fn menu_buttons(
    mut buttons: Query<(&Interaction, &MenuButton, &mut BackgroundColor), Changed<Interaction>>,
    mut start_writer: MessageWriter<StartGameEvent>,
    mut exit_writer: MessageWriter<AppExit>,
) {
    for (interaction, button, mut background) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => match button {
                MenuButton::Start => {
                    start_writer.write(StartGameEvent);
                }
                MenuButton::Quit => {
                    info!("quit game");
                    exit_writer.write(AppExit::Success);
                }
            },
            Interaction::Hovered => background.0 = BUTTON_HOVER_COLOR,
            Interaction::None => background.0 = BUTTON_COLOR,
        }
    }
}

/// System to restart or leave from the game over screen.
fn game_over_keyboard(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut start_writer: MessageWriter<StartGameEvent>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game_state.phase != GamePhase::GameOver {
        return;
    }

    if keyboard_input.just_pressed(KeyCode::Space) {
        start_writer.write(StartGameEvent);
    } else if keyboard_input.just_pressed(KeyCode::Escape) {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn();
        }
        game_state.phase = GamePhase::Menu;
        spawn_start_menu(&mut commands);
    }
}

/// System to reset the session and switch to play.
fn start_game(
    mut commands: Commands,
    time: Res<Time>,
    mut start_reader: MessageReader<StartGameEvent>,
    mut game_state: ResMut<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    mut clock: ResMut<TickClock>,
    overlays: Query<Entity, Or<(With<MenuUI>, With<GameOverUI>)>>,
) {
    if start_reader.read().count() == 0 || game_state.phase == GamePhase::Playing {
        return;
    }

    for entity in overlays.iter() {
        commands.entity(entity).despawn();
    }

    game_state.session.restart();
    game_state.phase = GamePhase::Playing;
    input_buffer.clear();
    clock.0.reset(time.elapsed());
    info!(difficulty = ?game_state.config.difficulty, "game start");
}

/// System to update the score display.
fn update_score_text(game_state: Res<GameState>, mut query: Query<&mut Text, With<ScoreText>>) {
    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(format!("score:{}", game_state.session.score()));
    }
}
