//! Core domain: session progress and scoring.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionSettings {
    pub starting_score: f32,
    /// Points lost per second spent playing a level.
    pub score_decay_per_second: f32,
    pub feedbacks_enabled: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            starting_score: 10000.0,
            score_decay_per_second: 100.0,
            feedbacks_enabled: true,
        }
    }
}

/// Where the flow goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Level(usize),
    GameComplete,
}

/// Progress through the ordered level list plus the running score.
#[derive(Resource, Debug)]
pub struct GameSession {
    level_ids: Vec<String>,
    current_level: usize,
    score: f32,
    attempts: u32,
    pub feedbacks_enabled: bool,
    settings: SessionSettings,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Vec::new(), SessionSettings::default())
    }
}

impl GameSession {
    pub fn new(level_ids: Vec<String>, settings: SessionSettings) -> Self {
        Self {
            level_ids,
            current_level: 0,
            score: settings.starting_score.max(0.0),
            attempts: 0,
            feedbacks_enabled: settings.feedbacks_enabled,
            settings,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn level_count(&self) -> usize {
        self.level_ids.len()
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn current_level_id(&self) -> Option<&str> {
        self.level_ids.get(self.current_level).map(String::as_str)
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// Attempts at the current level, the running one included.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn destination(&self) -> Destination {
        if self.current_level < self.level_ids.len() {
            Destination::Level(self.current_level)
        } else {
            Destination::GameComplete
        }
    }

    /// Move past the current level.
    pub fn advance(&mut self) -> Destination {
        if self.current_level < self.level_ids.len() {
            self.current_level += 1;
        }
        self.attempts = 0;
        self.destination()
    }

    /// Count a new attempt at the current level.
    pub fn begin_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Back to the first level with a fresh score.
    pub fn reset(&mut self) {
        self.current_level = 0;
        self.attempts = 0;
        self.score = self.settings.starting_score.max(0.0);
    }

    pub fn tick_score(&mut self, delta: f32) {
        let decay = self.settings.score_decay_per_second * delta.max(0.0);
        self.score = (self.score - decay).max(0.0);
    }
}
