//! Rendering plugin - draws the session's board and visual effects.
//!
//! The board is redrawn from the session whenever it changes; the session
//! itself knows nothing about entities or transforms.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use greed_snake::{Cell, GridSpec};
use rand::prelude::*;

use super::{
    BoardPiece, CameraShake, FOOD_COLOR, FoodEatenEvent, GameOverEvent, GameState, PIECE_THICKNESS,
    PulseEffect, SNAKE_HEAD_COLOR, SNAKE_SEGMENT_COLOR, Z_FOOD, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShake>().add_systems(
            Update,
            (
                sync_board.run_if(resource_changed::<GameState>),
                spawn_food_eaten_effect,
                pulse_effect_system,
                trigger_camera_shake_on_game_over,
                camera_shake_system,
            )
                .chain(),
        );
    }
}

/// World-space center of `cell`; the camera looks at the middle of the arena
/// and cell `y` grows downward while world `y` grows upward.
pub fn cell_to_world(cell: Cell, grid: &GridSpec) -> Vec2 {
    let half = grid.cell_size() as f32 / 2.0;
    Vec2::new(
        cell.x as f32 + half - grid.width() as f32 / 2.0,
        grid.height() as f32 / 2.0 - cell.y as f32 - half,
    )
}

fn outlined_square(color: Color, center: Vec2, z: f32, size: f32) -> impl Bundle {
    ShapeBundle::rect(
        &ShapeConfig {
            color,
            hollow: true,
            thickness: PIECE_THICKNESS,
            transform: Transform::from_xyz(center.x, center.y, z),
            ..ShapeConfig::default_2d()
        },
        Vec2::splat(size),
    )
}

/// System to rebuild snake and food entities from the session.
fn sync_board(
    mut commands: Commands,
    game_state: Res<GameState>,
    pieces: Query<Entity, With<BoardPiece>>,
) {
    for entity in pieces.iter() {
        commands.entity(entity).despawn();
    }

    let session = &game_state.session;
    let grid = session.grid();
    let size = grid.cell_size() as f32;

    if let Some(food) = session.food() {
        let center = cell_to_world(food, grid);
        commands.spawn((
            outlined_square(FOOD_COLOR, center, Z_FOOD, size),
            BoardPiece,
        ));
    }

    for &segment in session.body().iter().skip(1) {
        let center = cell_to_world(segment, grid);
        commands.spawn((
            outlined_square(SNAKE_SEGMENT_COLOR, center, Z_SNAKE_SEGMENT, size),
            BoardPiece,
        ));
    }

    // Head last so it stays visible when it overlaps a segment
    let head = cell_to_world(session.snake().head(), grid);
    commands.spawn((
        outlined_square(SNAKE_HEAD_COLOR, head, Z_SNAKE_HEAD, size),
        BoardPiece,
    ));
}

/// System to spawn visual effect when food is eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    game_state: Res<GameState>,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
) {
    let grid = game_state.session.grid();
    for event in food_eaten_reader.read() {
        let center = cell_to_world(event.position, grid);

        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: FOOD_COLOR.with_alpha(0.6),
                    transform: Transform::from_xyz(center.x, center.y, Z_FOOD + 0.5),
                    ..ShapeConfig::default_2d()
                },
                grid.cell_size() as f32 / 2.0,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to handle pulse effects (for eaten food flash).
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}

/// System to trigger camera shake on game over.
fn trigger_camera_shake_on_game_over(
    mut game_over_reader: MessageReader<GameOverEvent>,
    mut camera_shake: ResMut<CameraShake>,
) {
    for event in game_over_reader.read() {
        if !event.cause.is_win() {
            camera_shake.timer = Timer::from_seconds(0.5, TimerMode::Once);
            camera_shake.intensity = 8.0;
        }
    }
}

/// System to apply camera shake effect.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if camera_shake.timer.is_finished() {
        return;
    }
    camera_shake.timer.tick(time.delta());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        if camera_shake.timer.is_finished() {
            camera_transform.translation.x = 0.0;
            camera_transform.translation.y = 0.0;
        } else {
            let decay = 1.0 - camera_shake.timer.fraction();

            let mut rng = rand::rng();
            camera_transform.translation.x =
                (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
            camera_transform.translation.y =
                (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
        }
    }
}
