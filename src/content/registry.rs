//! LevelLibrary resource holding the ordered, validated level list.

use bevy::prelude::*;

use super::data::LevelDef;

/// Every playable level in play order.
#[derive(Resource, Debug, Default)]
pub struct LevelLibrary {
    levels: Vec<LevelDef>,
}

impl LevelLibrary {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels }
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.levels.iter().map(|level| level.id.clone()).collect()
    }

    /// Returns a summary of loaded levels for logging.
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.levels.iter().map(|level| level.name.as_str()).collect();
        format!("LevelLibrary loaded {} levels: {}", self.len(), names.join(", "))
    }
}
