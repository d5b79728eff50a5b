//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The LevelLibrary provides lookup by index.

use serde::{Deserialize, Serialize};

use crate::core::SessionSettings;
use crate::feedback::FeedbackTuning;
use crate::movement::MovementTuning;
use crate::tilemap::CollisionSettings;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// One level as authored: a legend mapping glyphs to tile kinds and the
/// text rows, top row first. `.` and space are empty, `P` is the spawn.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub legend: Vec<TileDef>,
    pub rows: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TileDef {
    pub glyph: char,
    pub name: String,
    #[serde(default)]
    pub solid: bool,
    #[serde(default)]
    pub level_goal: bool,
    #[serde(default)]
    pub death_block: bool,
    /// Linear RGB in [0, 1].
    pub color: [f32; 3],
}

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub collision: CollisionSettings,
    pub feedback: FeedbackTuning,
    pub session: SessionSettings,
    /// Seed for noisy transitions; a random seed is drawn when absent.
    pub noise_seed: Option<u64>,
}

// ============================================================================
// Built-in content
// ============================================================================

/// Level used when levels.ron is missing or every level in it is invalid.
pub fn builtin_levels() -> Vec<LevelDef> {
    let legend = vec![
        TileDef {
            glyph: '#',
            name: "Stone".to_string(),
            solid: true,
            level_goal: false,
            death_block: false,
            color: [0.35, 0.38, 0.45],
        },
        TileDef {
            glyph: 'G',
            name: "Goal".to_string(),
            solid: false,
            level_goal: true,
            death_block: false,
            color: [0.95, 0.8, 0.2],
        },
        TileDef {
            glyph: 'X',
            name: "Spikes".to_string(),
            solid: true,
            level_goal: false,
            death_block: true,
            color: [0.85, 0.2, 0.2],
        },
    ];
    let rows = [
        "#..................#",
        "#..................#",
        "#...............G..#",
        "#.............####.#",
        "#..................#",
        "#.........###......#",
        "#..................#",
        "#.P....##..........#",
        "#####..####XXX######",
    ];

    vec![LevelDef {
        id: "builtin".to_string(),
        name: "Fallback Yard".to_string(),
        legend,
        rows: rows.iter().map(|row| row.to_string()).collect(),
    }]
}
