//! Validation for level definitions before any of them is built.

use std::collections::HashSet;

use super::data::*;
use crate::tilemap::{EMPTY_GLYPHS, SPAWN_GLYPH};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub level_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level '{}' has an invalid '{}': {}",
            self.level_id, self.field, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a row glyph has a legend entry
macro_rules! check_ref {
    ($errors:expr, $glyphs:expr, $level_id:expr, $glyph:expr, $row:expr, $column:expr) => {
        if !$glyphs.contains(&$glyph) {
            $errors.push(ValidationError {
                level_id: $level_id.to_string(),
                field: "rows",
                message: format!(
                    "glyph '{}' at row {}, column {} is not in the legend",
                    $glyph, $row, $column
                ),
            });
        }
    };
}

/// Validate every level and the level list as a whole.
/// Returns a list of validation errors, empty if all levels are usable.
pub fn validate_levels(levels: &[LevelDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if levels.is_empty() {
        errors.push(ValidationError {
            level_id: "<none>".to_string(),
            field: "items",
            message: "no levels defined".to_string(),
        });
    }

    let mut seen_ids = HashSet::new();
    for level in levels {
        if !seen_ids.insert(level.id.as_str()) {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "id",
                message: "id is used by more than one level".to_string(),
            });
        }
        validate_level(level, &mut errors);
    }

    errors
}

fn validate_level(level: &LevelDef, errors: &mut Vec<ValidationError>) {
    let mut glyphs = HashSet::new();
    for tile in &level.legend {
        if EMPTY_GLYPHS.contains(&tile.glyph) || tile.glyph == SPAWN_GLYPH {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "legend",
                message: format!("glyph '{}' ({}) is reserved", tile.glyph, tile.name),
            });
        }
        if !glyphs.insert(tile.glyph) {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "legend",
                message: format!("glyph '{}' is defined more than once", tile.glyph),
            });
        }
        if tile.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "legend",
                message: format!("color of '{}' must be within [0, 1]", tile.name),
            });
        }
    }

    let mut spawns = 0;
    for (row, line) in level.rows.iter().enumerate() {
        for (column, glyph) in line.chars().enumerate() {
            if EMPTY_GLYPHS.contains(&glyph) {
                continue;
            }
            if glyph == SPAWN_GLYPH {
                spawns += 1;
                continue;
            }
            check_ref!(errors, glyphs, level.id, glyph, row, column);
        }
    }

    if spawns != 1 {
        errors.push(ValidationError {
            level_id: level.id.clone(),
            field: "rows",
            message: format!("expected exactly one '{}' spawn, found {}", SPAWN_GLYPH, spawns),
        });
    }
}
