//! Feedback domain: one-at-a-time animation sequences driven by pooled
//! transitions.
//!
//! A [`Feedback`] holds at most one [`FeedbackAnimation`]. Starting a new
//! one cancels the running one and returns its transitions to the pool
//! first, so two sequences never fight over the same sprite.

use bevy::prelude::*;

use super::resources::FeedbackTuning;
use crate::transitions::{TransitionHandle, TransitionKind, TransitionPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    LandingSquash,
    DashShake,
}

/// Sprite property a transition drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    ScaleX,
    ScaleY,
    OffsetX,
}

/// Sampled sprite pose. Channels without a running transition keep their
/// rest value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackPose {
    pub scale: Vec2,
    pub offset_x: f32,
}

impl FeedbackPose {
    pub const REST: FeedbackPose = FeedbackPose {
        scale: Vec2::ONE,
        offset_x: 0.0,
    };

    fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::ScaleX => self.scale.x = value,
            Channel::ScaleY => self.scale.y = value,
            Channel::OffsetX => self.offset_x = value,
        }
    }
}

impl Default for FeedbackPose {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug)]
pub struct FeedbackAnimation {
    kind: FeedbackKind,
    channels: Vec<(Channel, TransitionHandle)>,
}

impl FeedbackAnimation {
    /// Squash on landing, springing back to rest. `None` for soft landings.
    pub fn landing_squash(
        impact_speed: f32,
        tuning: &FeedbackTuning,
        pool: &mut TransitionPool,
    ) -> Option<Self> {
        let intensity = tuning.landing_intensity(impact_speed)?;
        let squash = tuning.landing_squash * intensity;
        let kind = tuning.landing_kind();
        let duration = tuning.landing_duration;

        let channels = vec![
            (
                Channel::ScaleY,
                channel(pool, kind, 1.0 - squash, 1.0, duration),
            ),
            (
                Channel::ScaleX,
                channel(pool, kind, 1.0 + squash * 0.5, 1.0, duration),
            ),
        ];
        Some(Self {
            kind: FeedbackKind::LandingSquash,
            channels,
        })
    }

    /// Horizontal stretch plus a noisy jitter when a dash starts.
    pub fn dash_shake(direction: f32, tuning: &FeedbackTuning, pool: &mut TransitionPool) -> Self {
        let duration = tuning.dash_duration;
        let stretch = channel(
            pool,
            tuning.dash_kind(),
            1.0 + tuning.dash_stretch,
            1.0,
            duration,
        );

        // Jitter trails the dash slightly so it reads as recoil.
        let lean = -direction.signum() * tuning.dash_shake;
        let shake = channel(pool, TransitionKind::NoisyLinear, lean, 0.0, duration);
        if let Some(transition) = pool.get_mut(shake) {
            transition.set_noise(-tuning.dash_shake, tuning.dash_shake);
        }

        Self {
            kind: FeedbackKind::DashShake,
            channels: vec![(Channel::ScaleX, stretch), (Channel::OffsetX, shake)],
        }
    }

    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    pub fn handles(&self) -> impl Iterator<Item = TransitionHandle> + '_ {
        self.channels.iter().map(|(_, handle)| *handle)
    }

    fn release(self, pool: &mut TransitionPool) {
        for (_, handle) in self.channels {
            pool.release(handle);
        }
    }
}

fn channel(
    pool: &mut TransitionPool,
    kind: TransitionKind,
    from: f32,
    to: f32,
    duration: f32,
) -> TransitionHandle {
    let handle = pool.acquire(kind);
    pool.configure(handle, from, to, duration);
    handle
}

/// Animation slot on a sprite entity.
#[derive(Component, Debug, Default)]
pub struct Feedback {
    active: Option<FeedbackAnimation>,
}

impl Feedback {
    pub fn active_kind(&self) -> Option<FeedbackKind> {
        self.active.as_ref().map(FeedbackAnimation::kind)
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Replace whatever is playing with `animation`.
    pub fn start(&mut self, animation: FeedbackAnimation, pool: &mut TransitionPool) {
        self.cancel(pool);
        debug!("Feedback {:?} started", animation.kind());
        self.active = Some(animation);
    }

    /// Stop the running animation. Returns whether one was playing.
    pub fn cancel(&mut self, pool: &mut TransitionPool) -> bool {
        match self.active.take() {
            Some(animation) => {
                animation.release(pool);
                true
            }
            None => false,
        }
    }

    /// Advance every channel by `delta` and sample the pose. Once all
    /// channels have finished the transitions are released and the slot
    /// cleared.
    pub fn tick(&mut self, delta: f32, pool: &mut TransitionPool) -> FeedbackPose {
        let mut pose = FeedbackPose::REST;
        let Some(animation) = self.active.as_ref() else {
            return pose;
        };

        let mut finished = true;
        for (channel, handle) in &animation.channels {
            if let Some(value) = pool.evaluate(*handle, delta) {
                pose.set(*channel, value);
            }
            finished &= pool.is_finished(*handle);
        }

        if finished {
            self.cancel(pool);
        }
        pose
    }
}
