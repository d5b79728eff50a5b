use std::collections::HashMap;

use bevy::log::warn;
use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::easing::{Transition, TransitionKind};

/// Generational reference to a pooled [`Transition`].
///
/// A handle goes stale when its instance is released; the pool refuses to
/// evaluate or hand out stale handles, even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionHandle {
    kind: TransitionKind,
    slot: usize,
    generation: u32,
}

impl TransitionHandle {
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }
}

/// Per-variant free lists of transition instances.
///
/// Instances are never freed, only marked available again on release.
#[derive(Resource)]
pub struct TransitionPool {
    instances: HashMap<TransitionKind, Vec<Transition>>,
    rng: ChaCha8Rng,
}

impl Default for TransitionPool {
    fn default() -> Self {
        Self::with_seed(rand::rng().random())
    }
}

impl TransitionPool {
    /// Pool whose noisy transitions draw from a reproducible sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            instances: HashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Claim an instance of `kind`, reusing a released one when possible.
    pub fn acquire(&mut self, kind: TransitionKind) -> TransitionHandle {
        let slots = self.instances.entry(kind).or_default();
        let slot = match slots.iter().position(Transition::is_available) {
            Some(slot) => slot,
            None => {
                slots.push(Transition::new(kind));
                slots.len() - 1
            }
        };

        let transition = &mut slots[slot];
        transition.claim();
        TransitionHandle {
            kind,
            slot,
            generation: transition.generation(),
        }
    }

    pub fn get(&self, handle: TransitionHandle) -> Option<&Transition> {
        self.instances
            .get(&handle.kind)
            .and_then(|slots| slots.get(handle.slot))
            .filter(|t| !t.is_available() && t.generation() == handle.generation)
    }

    pub fn get_mut(&mut self, handle: TransitionHandle) -> Option<&mut Transition> {
        self.instances
            .get_mut(&handle.kind)
            .and_then(|slots| slots.get_mut(handle.slot))
            .filter(|t| !t.is_available() && t.generation() == handle.generation)
    }

    /// Set endpoints and duration in one go. Returns false for a stale handle.
    pub fn configure(&mut self, handle: TransitionHandle, from: f32, to: f32, duration: f32) -> bool {
        match self.get_mut(handle) {
            Some(transition) => {
                transition.from = from;
                transition.to = to;
                transition.set_duration(duration);
                true
            }
            None => false,
        }
    }

    /// Advance the transition behind `handle` and return its value.
    pub fn evaluate(&mut self, handle: TransitionHandle, delta: f32) -> Option<f32> {
        let Some(transition) = self
            .instances
            .get_mut(&handle.kind)
            .and_then(|slots| slots.get_mut(handle.slot))
            .filter(|t| !t.is_available() && t.generation() == handle.generation)
        else {
            warn!(
                "Refusing to evaluate stale {} transition handle",
                handle.kind.name()
            );
            return None;
        };
        Some(transition.evaluate(delta, &mut self.rng))
    }

    /// Stale handles count as finished.
    pub fn is_finished(&self, handle: TransitionHandle) -> bool {
        self.get(handle).is_none_or(Transition::is_finished)
    }

    /// Return the instance to its free list. Releasing twice is harmless;
    /// a handle whose instance was re-acquired since is ignored.
    pub fn release(&mut self, handle: TransitionHandle) -> bool {
        let Some(transition) = self
            .instances
            .get_mut(&handle.kind)
            .and_then(|slots| slots.get_mut(handle.slot))
            .filter(|t| t.generation() == handle.generation)
        else {
            warn!(
                "Ignoring release of stale {} transition handle",
                handle.kind.name()
            );
            return false;
        };
        if transition.is_available() {
            return false;
        }
        transition.mark_available();
        true
    }

    /// Number of instances ever allocated for `kind`.
    pub fn len(&self, kind: TransitionKind) -> usize {
        self.instances.get(&kind).map_or(0, Vec::len)
    }

    /// Number of instances of `kind` currently handed out.
    pub fn in_use(&self, kind: TransitionKind) -> usize {
        self.instances
            .get(&kind)
            .map_or(0, |slots| slots.iter().filter(|t| !t.is_available()).count())
    }

    pub fn total_in_use(&self) -> usize {
        TransitionKind::ALL.iter().map(|kind| self.in_use(*kind)).sum()
    }
}
