//! Transitions domain: pooled easing transitions that animate a scalar
//! (a speed component, a sprite scale) from one value to another.

mod easing;
mod pool;

pub use easing::{Easing, Transition, TransitionKind};
pub use pool::{TransitionHandle, TransitionPool};

use bevy::prelude::*;

pub struct TransitionsPlugin;

impl Plugin for TransitionsPlugin {
    fn build(&self, app: &mut App) {
        // ContentPlugin replaces this with a seeded pool when the
        // gameplay defaults ask for reproducible noise.
        app.init_resource::<TransitionPool>();
    }
}
