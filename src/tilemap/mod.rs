//! Tilemap domain: tile grid storage, swept AABB collision and level
//! spawning.
//!
//! Simulation runs in tile units (one tile is 1x1); only rendering scales
//! by [`TILE_PIXELS`].

mod collision;
mod grid;
mod level;
mod systems;

#[cfg(test)]
mod tests;

pub use collision::{CollisionMode, CollisionSettings, ResolutionOrder};
pub use grid::{Tile, TileGrid};
pub use level::{ActiveLevel, EMPTY_GLYPHS, LevelBuildError, LevelLayout, SPAWN_GLYPH};
pub use systems::TileSprite;

use bevy::prelude::*;

use crate::core::GameState;
use systems::{build_active_level, despawn_level_tiles, spawn_level_tiles};

pub const TILE_PIXELS: f32 = 32.0;

/// Level setup on entering play. Systems that need the active level run
/// after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelSetup;

pub struct TilemapPlugin;

impl Plugin for TilemapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveLevel>()
            .init_resource::<CollisionSettings>()
            .add_systems(
                OnEnter(GameState::Playing),
                (build_active_level, spawn_level_tiles)
                    .chain()
                    .in_set(LevelSetup),
            )
            .add_systems(OnExit(GameState::Playing), despawn_level_tiles);
    }
}
