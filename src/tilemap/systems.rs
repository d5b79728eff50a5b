//! Tilemap domain: level lifecycle systems.

use bevy::prelude::*;

use super::TILE_PIXELS;
use super::level::{ActiveLevel, LevelLayout};
use crate::content::LevelLibrary;
use crate::core::GameSession;

/// Marker for the flat-colored sprite drawn for one tile.
#[derive(Component, Debug, Clone, Copy)]
pub struct TileSprite {
    pub cell: IVec2,
}

pub(crate) fn build_active_level(
    library: Res<LevelLibrary>,
    session: Res<GameSession>,
    mut active: ResMut<ActiveLevel>,
) {
    active.layout = None;

    let Some(def) = library.get(session.current_level()) else {
        error!(
            "No level at index {} (library holds {})",
            session.current_level(),
            library.len()
        );
        return;
    };

    match LevelLayout::build(def) {
        Ok(layout) => {
            info!(
                "Loaded level '{}' ({}x{} tiles, spawn at {})",
                layout.name,
                layout.grid.size().x,
                layout.grid.size().y,
                layout.spawn
            );
            active.layout = Some(layout);
        }
        Err(e) => error!("{}", e),
    }
}

pub(crate) fn spawn_level_tiles(mut commands: Commands, active: Res<ActiveLevel>) {
    let Some(layout) = active.layout.as_ref() else {
        return;
    };

    for (cell, tile) in layout.grid.iter() {
        let center = (cell.as_vec2() + Vec2::splat(0.5)) * TILE_PIXELS;
        commands.spawn((
            TileSprite { cell },
            Sprite {
                color: layout.color(tile),
                custom_size: Some(Vec2::splat(TILE_PIXELS)),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
        ));
    }
}

pub(crate) fn despawn_level_tiles(mut commands: Commands, tiles: Query<Entity, With<TileSprite>>) {
    for entity in &tiles {
        commands.entity(entity).despawn();
    }
}
