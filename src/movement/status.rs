//! Movement domain: player statuses and the status-change edge table.
//!
//! Each (from, to) pair maps to an [`EdgeAction`] describing the velocity
//! overrides and speed ramps applied when the player enters `to` from `from`.
//! Empty edges change the status without touching velocity.

use crate::transitions::TransitionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerStatus {
    GroundedIdle = 0,
    Walk = 1,
    Run = 2,
    GroundSlide = 3,
    #[default]
    MidairIdle = 4,
    AirControl = 5,
    WallSlide = 6,
    Dash = 7,
}

impl PlayerStatus {
    pub const ALL: [PlayerStatus; 8] = [
        PlayerStatus::GroundedIdle,
        PlayerStatus::Walk,
        PlayerStatus::Run,
        PlayerStatus::GroundSlide,
        PlayerStatus::MidairIdle,
        PlayerStatus::AirControl,
        PlayerStatus::WallSlide,
        PlayerStatus::Dash,
    ];

    pub fn is_grounded(self) -> bool {
        matches!(
            self,
            PlayerStatus::GroundedIdle
                | PlayerStatus::Walk
                | PlayerStatus::Run
                | PlayerStatus::GroundSlide
        )
    }

    /// Statuses whose speed ramp targets the current facing.
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            PlayerStatus::Walk | PlayerStatus::Run | PlayerStatus::AirControl
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::GroundedIdle => "Grounded idle",
            PlayerStatus::Walk => "Walk",
            PlayerStatus::Run => "Run",
            PlayerStatus::GroundSlide => "Ground slide",
            PlayerStatus::MidairIdle => "Midair idle",
            PlayerStatus::AirControl => "Air control",
            PlayerStatus::WallSlide => "Wall slide",
            PlayerStatus::Dash => "Dash",
        }
    }
}

/// Immediate velocity write applied before any ramp starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityOverride {
    Zero,
    /// Vertical jump impulse. Only applied when a jump caused the edge.
    Jump,
    /// Dash speed in the facing direction.
    DashForward,
    /// Half the jump speed away from the wall. Only applied on a wall jump.
    WallKick,
}

/// Speed a ramp ends at, resolved against tuning and facing at edge time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedTarget {
    Zero,
    Walk,
    Run,
    MidAir,
    /// Downward wall-slide speed.
    WallSlide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampDuration {
    Fixed(f32),
    /// `k * |current speed|`
    PerSpeed(f32),
    /// `k * |target magnitude - current speed|`
    PerGap(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ramp {
    To {
        kind: TransitionKind,
        target: SpeedTarget,
        duration: RampDuration,
        /// Start from 0 instead of the current speed.
        from_rest: bool,
    },
    /// Ease in over `accel_duration` when the target magnitude exceeds the
    /// current signed speed, otherwise ease out over
    /// `decel_rate * |magnitude - speed|`.
    Approach {
        target: SpeedTarget,
        accel_duration: f32,
        decel_rate: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAction {
    pub vx: Option<VelocityOverride>,
    pub vy: Option<VelocityOverride>,
    pub horizontal: Option<Ramp>,
    pub vertical: Option<Ramp>,
}

impl EdgeAction {
    pub const NONE: EdgeAction = EdgeAction {
        vx: None,
        vy: None,
        horizontal: None,
        vertical: None,
    };

    /// Whether entering through this edge applies a jump impulse itself.
    pub fn applies_jump(&self) -> bool {
        self.vy == Some(VelocityOverride::Jump)
    }

    pub fn is_empty(&self) -> bool {
        *self == EdgeAction::NONE
    }
}

const fn horizontal(ramp: Ramp) -> EdgeAction {
    EdgeAction {
        horizontal: Some(ramp),
        ..EdgeAction::NONE
    }
}

const fn approach(target: SpeedTarget, accel_duration: f32) -> EdgeAction {
    horizontal(Ramp::Approach {
        target,
        accel_duration,
        decel_rate: 0.1,
    })
}

const fn ease_to(kind: TransitionKind, target: SpeedTarget, duration: RampDuration) -> Ramp {
    Ramp::To {
        kind,
        target,
        duration,
        from_rest: false,
    }
}

const fn stop() -> EdgeAction {
    horizontal(ease_to(
        TransitionKind::EaseOutExponential,
        SpeedTarget::Zero,
        RampDuration::PerSpeed(0.09),
    ))
}

const fn slide() -> EdgeAction {
    horizontal(ease_to(
        TransitionKind::Linear,
        SpeedTarget::Zero,
        RampDuration::PerSpeed(0.3),
    ))
}

const fn rise_to(target: SpeedTarget) -> EdgeAction {
    horizontal(ease_to(
        TransitionKind::EaseInExponential,
        target,
        RampDuration::PerGap(0.1),
    ))
}

const fn jump_off() -> EdgeAction {
    EdgeAction {
        vy: Some(VelocityOverride::Jump),
        ..horizontal(ease_to(
            TransitionKind::EaseOutExponential,
            SpeedTarget::Zero,
            RampDuration::Fixed(0.16),
        ))
    }
}

const fn land() -> EdgeAction {
    EdgeAction {
        vy: Some(VelocityOverride::Zero),
        ..horizontal(ease_to(
            TransitionKind::EaseInOutQuart,
            SpeedTarget::Zero,
            RampDuration::PerSpeed(0.1),
        ))
    }
}

const fn drift(target: SpeedTarget, seconds: f32) -> EdgeAction {
    horizontal(ease_to(
        TransitionKind::EaseOutExponential,
        target,
        RampDuration::Fixed(seconds),
    ))
}

const fn wall_grab(seconds: f32) -> EdgeAction {
    EdgeAction {
        vx: Some(VelocityOverride::Zero),
        vy: None,
        horizontal: None,
        vertical: Some(Ramp::To {
            kind: TransitionKind::EaseInExponential,
            target: SpeedTarget::WallSlide,
            duration: RampDuration::Fixed(seconds),
            from_rest: true,
        }),
    }
}

const fn dash() -> EdgeAction {
    EdgeAction {
        vx: Some(VelocityOverride::DashForward),
        ..EdgeAction::NONE
    }
}

const fn wall_land() -> EdgeAction {
    EdgeAction {
        vy: Some(VelocityOverride::Zero),
        ..EdgeAction::NONE
    }
}

const fn wall_jump() -> EdgeAction {
    EdgeAction {
        vx: Some(VelocityOverride::WallKick),
        vy: Some(VelocityOverride::Jump),
        horizontal: None,
        vertical: None,
    }
}

const __: EdgeAction = EdgeAction::NONE;

use SpeedTarget::{MidAir, Run, Walk};

/// Rows are the status being left, columns the status being entered, both
/// in [`PlayerStatus`] discriminant order.
#[rustfmt::skip]
pub const TRANSITION_TABLE: [[EdgeAction; 8]; 8] = [
    // GroundedIdle
    [__, approach(Walk, 0.083), approach(Run, 0.17), slide(), jump_off(), __, __, __],
    // Walk
    [stop(), __, approach(Run, 0.12), slide(), jump_off(), __, __, __],
    // Run
    [stop(), approach(Walk, 0.067), __, slide(), jump_off(), __, __, __],
    // GroundSlide
    [stop(), rise_to(Walk), rise_to(Run), __, jump_off(), __, __, __],
    // MidairIdle
    [land(), __, __, __, __, drift(MidAir, 0.12), wall_grab(0.42), dash()],
    // AirControl
    [land(), __, __, __, drift(SpeedTarget::Zero, 0.16), __, wall_grab(0.5), dash()],
    // WallSlide
    [wall_land(), __, __, __, wall_jump(), __, __, __],
    // Dash
    [land(), __, __, __, drift(SpeedTarget::Zero, 0.33), drift(MidAir, 0.24), wall_grab(1.0), __],
];

pub fn edge(from: PlayerStatus, to: PlayerStatus) -> &'static EdgeAction {
    &TRANSITION_TABLE[from as usize][to as usize]
}
