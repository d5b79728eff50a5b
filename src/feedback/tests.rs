//! Feedback domain: tests for animation sequencing and pose sampling.

use super::{Feedback, FeedbackAnimation, FeedbackKind, FeedbackPose, FeedbackTuning};
use crate::transitions::{TransitionKind, TransitionPool};

const EPS: f32 = 1e-4;

fn linear_tuning() -> FeedbackTuning {
    FeedbackTuning {
        landing_transition: "linear".to_string(),
        dash_transition: "linear".to_string(),
        ..FeedbackTuning::default()
    }
}

// -----------------------------------------------------------------------------
// Tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_landing_intensity_range() {
    let tuning = FeedbackTuning::default();
    assert_eq!(tuning.landing_intensity(1.0), None);
    assert_eq!(tuning.landing_intensity(f32::NAN), None);
    assert_eq!(tuning.landing_intensity(4.0), Some(0.0));
    assert_eq!(tuning.landing_intensity(12.0), Some(0.5));
    assert_eq!(tuning.landing_intensity(100.0), Some(1.0));
}

#[test]
fn test_transition_names_resolve() {
    let tuning = FeedbackTuning::default();
    assert_eq!(tuning.landing_kind(), TransitionKind::DampedWave);
    assert_eq!(tuning.dash_kind(), TransitionKind::EaseOutExponential);

    let unknown = FeedbackTuning {
        landing_transition: "wobbly".to_string(),
        ..FeedbackTuning::default()
    };
    assert_eq!(unknown.landing_kind(), TransitionKind::Default);
}

// -----------------------------------------------------------------------------
// Animation tests
// -----------------------------------------------------------------------------

#[test]
fn test_soft_landing_plays_nothing() {
    let mut pool = TransitionPool::with_seed(3);
    let animation = FeedbackAnimation::landing_squash(1.0, &FeedbackTuning::default(), &mut pool);
    assert!(animation.is_none());
    assert_eq!(pool.total_in_use(), 0);
}

#[test]
fn test_landing_squash_springs_back() {
    let tuning = linear_tuning();
    let mut pool = TransitionPool::with_seed(3);
    let mut feedback = Feedback::default();

    let animation = FeedbackAnimation::landing_squash(20.0, &tuning, &mut pool).unwrap();
    feedback.start(animation, &mut pool);
    assert_eq!(feedback.active_kind(), Some(FeedbackKind::LandingSquash));
    assert_eq!(pool.in_use(TransitionKind::Linear), 2);

    let pose = feedback.tick(tuning.landing_duration * 0.5, &mut pool);
    assert!((pose.scale.y - 0.825).abs() < EPS);
    assert!((pose.scale.x - 1.0875).abs() < EPS);
    assert!(feedback.is_playing());

    let pose = feedback.tick(tuning.landing_duration, &mut pool);
    assert_eq!(pose, FeedbackPose::REST);
    assert!(!feedback.is_playing());
    assert_eq!(pool.total_in_use(), 0);
}

#[test]
fn test_new_animation_replaces_running_one() {
    let tuning = linear_tuning();
    let mut pool = TransitionPool::with_seed(3);
    let mut feedback = Feedback::default();

    let landing = FeedbackAnimation::landing_squash(20.0, &tuning, &mut pool).unwrap();
    let landing_handles: Vec<_> = landing.handles().collect();
    feedback.start(landing, &mut pool);

    let dash = FeedbackAnimation::dash_shake(1.0, &tuning, &mut pool);
    feedback.start(dash, &mut pool);

    assert_eq!(feedback.active_kind(), Some(FeedbackKind::DashShake));
    for handle in landing_handles {
        assert!(pool.get(handle).is_none());
    }
    // Dash stretch on a linear channel plus the noisy jitter.
    assert_eq!(pool.total_in_use(), 2);
}

#[test]
fn test_dash_shake_stays_in_band() {
    let tuning = FeedbackTuning::default();
    let mut pool = TransitionPool::with_seed(3);
    let mut feedback = Feedback::default();
    feedback.start(FeedbackAnimation::dash_shake(1.0, &tuning, &mut pool), &mut pool);

    let limit = tuning.dash_shake * 2.0 + EPS;
    while feedback.is_playing() {
        let pose = feedback.tick(0.02, &mut pool);
        assert!(pose.offset_x.abs() <= limit, "offset {}", pose.offset_x);
        assert!(pose.scale.x >= 1.0 - EPS);
        assert!(pose.scale.x <= 1.0 + tuning.dash_stretch + EPS);
    }
    assert_eq!(pool.total_in_use(), 0);
}

#[test]
fn test_cancel_releases_everything() {
    let mut pool = TransitionPool::with_seed(3);
    let mut feedback = Feedback::default();
    assert!(!feedback.cancel(&mut pool));

    let dash = FeedbackAnimation::dash_shake(-1.0, &FeedbackTuning::default(), &mut pool);
    feedback.start(dash, &mut pool);
    assert!(feedback.cancel(&mut pool));
    assert_eq!(pool.total_in_use(), 0);
    assert_eq!(feedback.tick(0.1, &mut pool), FeedbackPose::REST);
}
