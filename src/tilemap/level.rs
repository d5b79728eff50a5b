//! Turning authored level text into a collision grid.

use std::collections::HashMap;

use bevy::prelude::*;

use super::grid::{Tile, TileGrid};
use crate::content::{LevelDef, TileDef};

pub const EMPTY_GLYPHS: [char; 2] = ['.', ' '];
pub const SPAWN_GLYPH: char = 'P';

/// Why a level definition could not be built.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelBuildError {
    UnknownGlyph { level: String, glyph: char, row: usize, column: usize },
    MissingSpawn { level: String },
    DuplicateSpawn { level: String, first: IVec2, second: IVec2 },
    TooManyTileKinds { level: String, count: usize },
}

impl std::fmt::Display for LevelBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelBuildError::UnknownGlyph {
                level,
                glyph,
                row,
                column,
            } => write!(
                f,
                "Level '{}' uses glyph '{}' at row {}, column {} with no legend entry",
                level, glyph, row, column
            ),
            LevelBuildError::MissingSpawn { level } => {
                write!(f, "Level '{}' has no '{}' spawn cell", level, SPAWN_GLYPH)
            }
            LevelBuildError::DuplicateSpawn {
                level,
                first,
                second,
            } => write!(
                f,
                "Level '{}' has more than one spawn cell ({} and {})",
                level, first, second
            ),
            LevelBuildError::TooManyTileKinds { level, count } => write!(
                f,
                "Level '{}' defines {} tile kinds, at most {} are supported",
                level,
                count,
                u8::MAX as usize + 1
            ),
        }
    }
}

impl std::error::Error for LevelBuildError {}

/// A level ready to be played: collision grid, spawn point and palette.
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub id: String,
    pub name: String,
    pub grid: TileGrid,
    /// Bottom-centre of the spawn cell, in tile units.
    pub spawn: Vec2,
    pub palette: Vec<Color>,
}

impl LevelLayout {
    /// Build from text rows where row 0 is the top of the level and each
    /// character is one cell.
    pub fn build(def: &LevelDef) -> Result<Self, LevelBuildError> {
        if def.legend.len() > u8::MAX as usize + 1 {
            return Err(LevelBuildError::TooManyTileKinds {
                level: def.id.clone(),
                count: def.legend.len(),
            });
        }

        let legend: HashMap<char, (u8, &TileDef)> = def
            .legend
            .iter()
            .enumerate()
            .map(|(index, tile)| (tile.glyph, (index as u8, tile)))
            .collect();

        let height = def.rows.len();
        let mut tiles = Vec::new();
        let mut spawn: Option<IVec2> = None;

        for (row, line) in def.rows.iter().enumerate() {
            let y = (height - 1 - row) as i32;
            for (column, glyph) in line.chars().enumerate() {
                let position = IVec2::new(column as i32, y);
                if EMPTY_GLYPHS.contains(&glyph) {
                    continue;
                }
                if glyph == SPAWN_GLYPH {
                    if let Some(first) = spawn {
                        return Err(LevelBuildError::DuplicateSpawn {
                            level: def.id.clone(),
                            first,
                            second: position,
                        });
                    }
                    spawn = Some(position);
                    continue;
                }
                let Some((palette, tile)) = legend.get(&glyph) else {
                    return Err(LevelBuildError::UnknownGlyph {
                        level: def.id.clone(),
                        glyph,
                        row,
                        column,
                    });
                };
                tiles.push((
                    position,
                    Tile {
                        solid: tile.solid,
                        level_goal: tile.level_goal,
                        death_block: tile.death_block,
                        palette: *palette,
                    },
                ));
            }
        }

        let Some(spawn) = spawn else {
            return Err(LevelBuildError::MissingSpawn {
                level: def.id.clone(),
            });
        };

        Ok(Self {
            id: def.id.clone(),
            name: def.name.clone(),
            grid: TileGrid::from_tiles(tiles),
            spawn: Vec2::new(spawn.x as f32 + 0.5, spawn.y as f32),
            palette: def
                .legend
                .iter()
                .map(|tile| Color::srgb(tile.color[0], tile.color[1], tile.color[2]))
                .collect(),
        })
    }

    pub fn color(&self, tile: &Tile) -> Color {
        self.palette
            .get(tile.palette as usize)
            .copied()
            .unwrap_or(Color::WHITE)
    }
}

/// The level currently being played, if one is loaded.
#[derive(Resource, Debug, Default)]
pub struct ActiveLevel {
    pub layout: Option<LevelLayout>,
}

impl ActiveLevel {
    pub fn grid(&self) -> Option<&TileGrid> {
        self.layout.as_ref().map(|layout| &layout.grid)
    }
}
