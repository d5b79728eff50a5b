//! Movement domain: player spawn and teardown for each level attempt.

use bevy::prelude::*;

use crate::feedback::Feedback;
use crate::movement::{Locomotion, Player};
use crate::tilemap::{ActiveLevel, TILE_PIXELS};
use crate::transitions::TransitionPool;

/// Collision box relative to the feet, in tiles.
pub const PLAYER_BOUNDS: Rect = Rect {
    min: Vec2::new(-0.4, 0.0),
    max: Vec2::new(0.4, 0.9),
};

/// Child entity carrying the player's sprite. Feedback animations scale and
/// offset this entity so the body itself never changes size.
#[derive(Component, Debug)]
pub struct PlayerVisual {
    pub half_height: f32,
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Res<ActiveLevel>,
    existing: Query<Entity, With<Player>>,
) {
    if !existing.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }
    let Some(layout) = level.layout.as_ref() else {
        warn!("No active level, player not spawned");
        return;
    };

    let body = match Locomotion::new(PLAYER_BOUNDS) {
        Ok(body) => body.with_position(layout.spawn),
        Err(err) => {
            error!("Failed to build player body: {}", err);
            return;
        }
    };

    let size = PLAYER_BOUNDS.size() * TILE_PIXELS;
    let half_height = size.y * 0.5;
    info!(
        "Spawning player in '{}' at {:.1}, {:.1}",
        layout.id, layout.spawn.x, layout.spawn.y
    );

    commands
        .spawn((
            Player,
            body,
            Transform::from_translation((layout.spawn * TILE_PIXELS).extend(10.0)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerVisual { half_height },
                Feedback::default(),
                Sprite {
                    color: Color::srgb(0.92, 0.9, 0.85),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_xyz(0.0, half_height, 0.0),
            ));
        });
}

pub(crate) fn despawn_player(
    mut commands: Commands,
    mut pool: ResMut<TransitionPool>,
    mut query: Query<(Entity, &mut Locomotion), With<Player>>,
) {
    for (entity, mut body) in &mut query {
        body.release_transitions(&mut pool);
        commands.entity(entity).despawn();
    }
}

/// Put the player back on the spawn cell at rest.
pub(crate) fn respawn_player(
    level: &ActiveLevel,
    body: &mut Locomotion,
    pool: &mut TransitionPool,
) -> bool {
    let Some(layout) = level.layout.as_ref() else {
        return false;
    };
    body.reset_at(layout.spawn, pool);
    true
}
