//! Feedback domain: tuning for cosmetic animations.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::transitions::TransitionKind;

/// Transition names are resolved with [`TransitionKind::from_name`], so an
/// unknown name falls back to the default transition with a warning.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackTuning {
    pub landing_duration: f32,
    /// Vertical squash at full impact, as a fraction of the sprite height.
    pub landing_squash: f32,
    /// Landings slower than this play no squash, in tiles per second.
    pub landing_min_impact: f32,
    /// Impact speed that produces the full squash.
    pub landing_full_impact: f32,
    pub landing_transition: String,
    pub dash_duration: f32,
    /// Horizontal stretch at the start of a dash.
    pub dash_stretch: f32,
    /// Peak horizontal jitter in pixels.
    pub dash_shake: f32,
    pub dash_transition: String,
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            landing_duration: 0.25,
            landing_squash: 0.35,
            landing_min_impact: 4.0,
            landing_full_impact: 20.0,
            landing_transition: "damped_wave".to_string(),
            dash_duration: 0.2,
            dash_stretch: 0.3,
            dash_shake: 2.5,
            dash_transition: "ease_out_exponential".to_string(),
        }
    }
}

impl FeedbackTuning {
    pub fn landing_kind(&self) -> TransitionKind {
        TransitionKind::from_name(&self.landing_transition)
    }

    pub fn dash_kind(&self) -> TransitionKind {
        TransitionKind::from_name(&self.dash_transition)
    }

    /// Squash strength in [0, 1] for a landing at `impact_speed`, `None` when
    /// the landing is too soft to animate.
    pub fn landing_intensity(&self, impact_speed: f32) -> Option<f32> {
        if impact_speed.is_nan() || impact_speed < self.landing_min_impact {
            return None;
        }
        let span = self.landing_full_impact - self.landing_min_impact;
        if span <= 0.0 {
            return Some(1.0);
        }
        Some(((impact_speed - self.landing_min_impact) / span).clamp(0.0, 1.0))
    }
}
