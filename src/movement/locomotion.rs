//! Movement domain: the player's moving body and both locomotion models.
//!
//! [`Locomotion`] is plain data plus methods so it can be driven from tests
//! without an `App`. Systems feed it a [`Clock`], the sampled
//! [`MovementInput`], the active grid and the shared [`TransitionPool`].

use bevy::prelude::*;

use super::components::Facing;
use super::resources::{LocomotionModel, MovementInput, MovementTuning};
use super::status::{PlayerStatus, Ramp, RampDuration, SpeedTarget, VelocityOverride, edge};
use crate::tilemap::{CollisionMode, CollisionSettings, TileGrid};
use crate::transitions::{TransitionHandle, TransitionKind, TransitionPool};

/// Distance probed beside and below the body for contact checks.
const CONTACT_PROBE: f32 = 0.02;

/// Monotonic time plus the delta of the step being run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    pub now: f32,
    pub delta: f32,
}

impl Clock {
    pub fn new(now: f32, delta: f32) -> Self {
        Self { now, delta }
    }
}

/// Rejected body construction.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    NonFiniteBounds(Rect),
    EmptyBounds(Rect),
}

impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::NonFiniteBounds(rect) => {
                write!(f, "Body bounds must be finite, got {:?}", rect)
            }
            BodyError::EmptyBounds(rect) => {
                write!(f, "Body bounds must have a positive size, got {:?}", rect)
            }
        }
    }
}

impl std::error::Error for BodyError {}

/// Sprint state: how long it has been sustained and when it may restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprintMeter {
    pub sprinting: bool,
    pub start_time: f32,
    /// Sprint cannot start again before this time.
    pub cooldown_end: f32,
}

impl Default for SprintMeter {
    fn default() -> Self {
        Self {
            sprinting: false,
            start_time: f32::NEG_INFINITY,
            cooldown_end: f32::NEG_INFINITY,
        }
    }
}

impl SprintMeter {
    /// Advance the meter. Returns true when the sprint exhausted this call.
    pub fn update(&mut self, held: bool, grounded: bool, now: f32, tuning: &MovementTuning) -> bool {
        if self.sprinting {
            let sustained = now - self.start_time;
            if sustained >= tuning.max_sprint_time {
                self.sprinting = false;
                self.cooldown_end = now + tuning.sprint_cooldown_time;
                return true;
            }
            if !held {
                self.sprinting = false;
                self.cooldown_end =
                    now + tuning.sprint_cooldown_time * sustained / tuning.max_sprint_time;
            }
        } else if held && grounded && now >= self.cooldown_end {
            self.sprinting = true;
            self.start_time = now;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpKind {
    Ground,
    /// `away` is +1 when kicking off a wall on the left, -1 on the right.
    Wall { away: f32 },
    Air,
}

/// What happened during one fixed step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutcome {
    pub landed: bool,
    pub left_ground: bool,
    pub hit_ceiling: bool,
    pub hit_wall: bool,
    pub status_changed: bool,
    pub reached_goal: bool,
    pub died: bool,
}

/// The player's moving body: position, velocity, contact flags, timers and
/// the locomotion status with the speed transitions it owns.
#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    /// Anchor point the bounds are relative to, in tiles.
    pub position: Vec2,
    pub velocity: Vec2,
    bounds: Rect,
    pub grounded: bool,
    pub on_wall_left: bool,
    pub on_wall_right: bool,
    /// A dash was used during the current airtime.
    pub dashed: bool,
    pub dashing: bool,
    pub dash_direction: f32,
    pub facing: Facing,
    pub last_time_left_ground: f32,
    pub last_time_jump_press: f32,
    pub dash_start_time: f32,
    pub num_jumps: u32,
    pub sprint: SprintMeter,
    status: PlayerStatus,
    previous_status: PlayerStatus,
    horizontal: Option<TransitionHandle>,
    vertical: Option<TransitionHandle>,
    last_axis_x: f32,
    pending_jump: Option<JumpKind>,
}

impl Locomotion {
    /// A body at the origin with `bounds` relative to its position.
    pub fn new(bounds: Rect) -> Result<Self, BodyError> {
        if !(bounds.min.is_finite() && bounds.max.is_finite()) {
            return Err(BodyError::NonFiniteBounds(bounds));
        }
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(BodyError::EmptyBounds(bounds));
        }

        Ok(Self {
            bounds,
            ..Self::blank()
        })
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn world_bounds(&self) -> Rect {
        Rect {
            min: self.position + self.bounds.min,
            max: self.position + self.bounds.max,
        }
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn previous_status(&self) -> PlayerStatus {
        self.previous_status
    }

    pub fn horizontal_transition(&self) -> Option<TransitionHandle> {
        self.horizontal
    }

    pub fn vertical_transition(&self) -> Option<TransitionHandle> {
        self.vertical
    }

    pub fn on_wall(&self) -> bool {
        self.on_wall_left || self.on_wall_right
    }

    /// +1 when a wall jump would push right, -1 when it would push left.
    fn away_from_wall(&self) -> f32 {
        if self.on_wall_left {
            1.0
        } else if self.on_wall_right {
            -1.0
        } else {
            -self.facing.sign()
        }
    }

    /// Give both owned transitions back to the pool.
    pub fn release_transitions(&mut self, pool: &mut TransitionPool) {
        if let Some(handle) = self.horizontal.take() {
            pool.release(handle);
        }
        if let Some(handle) = self.vertical.take() {
            pool.release(handle);
        }
    }

    /// Move the body to `position` at rest, as on spawn or respawn.
    pub fn reset_at(&mut self, position: Vec2, pool: &mut TransitionPool) {
        self.release_transitions(pool);
        *self = Self {
            position,
            bounds: self.bounds,
            facing: self.facing,
            ..Self::blank()
        };
    }

    fn blank() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
            grounded: false,
            on_wall_left: false,
            on_wall_right: false,
            dashed: false,
            dashing: false,
            dash_direction: 1.0,
            facing: Facing::Right,
            last_time_left_ground: f32::NEG_INFINITY,
            last_time_jump_press: f32::NEG_INFINITY,
            dash_start_time: f32::NEG_INFINITY,
            num_jumps: 0,
            sprint: SprintMeter::default(),
            status: PlayerStatus::MidairIdle,
            previous_status: PlayerStatus::MidairIdle,
            horizontal: None,
            vertical: None,
            last_axis_x: 0.0,
            pending_jump: None,
        }
    }

    // -------------------------------------------------------------------------
    // Status changes
    // -------------------------------------------------------------------------

    /// Enter `new`, releasing owned transitions and running the edge action.
    /// Entering the current status does nothing. Returns whether the status
    /// changed.
    pub fn update_status(
        &mut self,
        new: PlayerStatus,
        tuning: &MovementTuning,
        pool: &mut TransitionPool,
    ) -> bool {
        if new == self.status {
            return false;
        }

        self.previous_status = self.status;
        self.status = new;
        self.release_transitions(pool);
        self.apply_edge(tuning, pool);
        debug!(
            "Status {} -> {}",
            self.previous_status.label(),
            self.status.label()
        );
        true
    }

    /// Record a status without running edge actions (direct integration).
    fn set_status(&mut self, new: PlayerStatus) -> bool {
        if new == self.status {
            return false;
        }
        self.previous_status = self.status;
        self.status = new;
        true
    }

    fn apply_edge(&mut self, tuning: &MovementTuning, pool: &mut TransitionPool) {
        let action = edge(self.previous_status, self.status);
        let jump = self.pending_jump.take();

        if let Some(o) = action.vx {
            match o {
                VelocityOverride::Zero => self.velocity.x = 0.0,
                VelocityOverride::DashForward => {
                    self.velocity.x = self.dash_direction * tuning.dash_speed;
                }
                VelocityOverride::WallKick => {
                    if let Some(JumpKind::Wall { away }) = jump {
                        self.velocity.x = away * tuning.jump_speed * 0.5;
                    }
                }
                VelocityOverride::Jump => {}
            }
        }
        if let Some(o) = action.vy {
            match o {
                VelocityOverride::Zero => self.velocity.y = 0.0,
                VelocityOverride::Jump => {
                    if jump.is_some() {
                        self.velocity.y = tuning.jump_speed;
                    }
                }
                VelocityOverride::DashForward | VelocityOverride::WallKick => {}
            }
        }

        if let Some(ramp) = action.horizontal {
            self.horizontal = Some(self.start_ramp(ramp, self.velocity.x, tuning, pool));
        }
        if let Some(ramp) = action.vertical {
            self.vertical = Some(self.start_ramp(ramp, self.velocity.y, tuning, pool));
        }
    }

    fn speed_target(&self, target: SpeedTarget, tuning: &MovementTuning) -> (f32, f32) {
        let facing = self.facing.sign();
        match target {
            SpeedTarget::Zero => (0.0, 0.0),
            SpeedTarget::Walk => (tuning.walking_speed, facing * tuning.walking_speed),
            SpeedTarget::Run => (tuning.running_speed, facing * tuning.running_speed),
            SpeedTarget::MidAir => (tuning.midair_speed, facing * tuning.midair_speed),
            SpeedTarget::WallSlide => (tuning.wall_slide_speed, -tuning.wall_slide_speed),
        }
    }

    fn start_ramp(
        &self,
        ramp: Ramp,
        current: f32,
        tuning: &MovementTuning,
        pool: &mut TransitionPool,
    ) -> TransitionHandle {
        let (kind, from, to, duration) = match ramp {
            Ramp::To {
                kind,
                target,
                duration,
                from_rest,
            } => {
                let (magnitude, to) = self.speed_target(target, tuning);
                let seconds = match duration {
                    RampDuration::Fixed(seconds) => seconds,
                    RampDuration::PerSpeed(k) => k * current.abs(),
                    RampDuration::PerGap(k) => k * (magnitude - current).abs(),
                };
                let from = if from_rest { 0.0 } else { current };
                (kind, from, to, seconds)
            }
            Ramp::Approach {
                target,
                accel_duration,
                decel_rate,
            } => {
                let (magnitude, to) = self.speed_target(target, tuning);
                if magnitude > current {
                    (TransitionKind::EaseInExponential, current, to, accel_duration)
                } else {
                    (
                        TransitionKind::EaseOutExponential,
                        current,
                        to,
                        decel_rate * (magnitude - current).abs(),
                    )
                }
            }
        };

        let handle = pool.acquire(kind);
        pool.configure(handle, from, to, duration);
        handle
    }

    // -------------------------------------------------------------------------
    // Variable step
    // -------------------------------------------------------------------------

    /// Per-frame bookkeeping: press timestamps, facing, sprint, dash start,
    /// early jump release and, for the transition table, the status choice.
    pub fn variable_step(
        &mut self,
        input: &MovementInput,
        clock: Clock,
        tuning: &MovementTuning,
        pool: &mut TransitionPool,
    ) -> bool {
        if input.jump_pressed {
            self.last_time_jump_press = clock.now;
        }

        let previous_facing = self.facing;
        if !self.dashing {
            if let Some(facing) = Facing::from_axis(input.axis.x) {
                self.facing = facing;
            }
        }

        if self
            .sprint
            .update(input.sprint_held, self.grounded, clock.now, tuning)
        {
            debug!("Sprint exhausted, cooldown until {:.2}", self.sprint.cooldown_end);
        }

        if input.jump_released && self.velocity.y > tuning.jump_release_speed {
            self.velocity.y = tuning.jump_release_speed;
        }

        if input.dash_pressed && !self.grounded && !self.dashed && !self.dashing {
            self.start_dash(input, clock);
        }

        let changed = match tuning.model {
            LocomotionModel::TransitionTable => {
                // A reversal re-enters the gait so its ramp targets the new facing.
                let mut changed = false;
                if self.facing != previous_facing && self.status.is_directional() {
                    let rest = if self.status.is_grounded() {
                        PlayerStatus::GroundedIdle
                    } else {
                        PlayerStatus::MidairIdle
                    };
                    changed |= self.update_status(rest, tuning, pool);
                }
                let next = self.choose_status(input, clock, tuning, pool);
                changed | self.update_status(next, tuning, pool)
            }
            LocomotionModel::DirectIntegration => false,
        };

        self.last_axis_x = input.axis.x;
        changed
    }

    fn start_dash(&mut self, input: &MovementInput, clock: Clock) {
        self.dashing = true;
        self.dashed = true;
        self.dash_start_time = clock.now;
        self.dash_direction = if input.axis.x != 0.0 {
            input.axis.x.signum()
        } else {
            self.facing.sign()
        };
        debug!("Dash started, direction {}", self.dash_direction);
    }

    /// Status the transition-table model should enter this frame.
    pub fn choose_status(
        &mut self,
        input: &MovementInput,
        clock: Clock,
        tuning: &MovementTuning,
        pool: &mut TransitionPool,
    ) -> PlayerStatus {
        if let Some(kind) = self.take_jump(clock, tuning) {
            let through_edge = edge(self.status, PlayerStatus::MidairIdle).applies_jump();
            match kind {
                JumpKind::Ground | JumpKind::Wall { .. } if through_edge => {
                    self.pending_jump = Some(kind);
                    return PlayerStatus::MidairIdle;
                }
                _ => {
                    // No edge will apply the impulse, so apply it here.
                    if let Some(handle) = self.vertical.take() {
                        pool.release(handle);
                    }
                    self.velocity.y = tuning.jump_speed;
                    if let JumpKind::Wall { away } = kind {
                        self.velocity.x = away * tuning.jump_speed * 0.5;
                    }
                }
            }
        }

        let axis = input.axis;
        if self.grounded {
            if axis.y <= -tuning.crouch_threshold {
                PlayerStatus::GroundSlide
            } else if axis.x != 0.0 {
                if self.sprint.sprinting || self.wants_run(input, tuning) {
                    PlayerStatus::Run
                } else {
                    PlayerStatus::Walk
                }
            } else {
                PlayerStatus::GroundedIdle
            }
        } else if self.dashing {
            PlayerStatus::Dash
        } else if self.holds_wall(false) {
            PlayerStatus::WallSlide
        } else if axis.x != 0.0 {
            PlayerStatus::AirControl
        } else {
            PlayerStatus::MidairIdle
        }
    }

    /// Whether an airborne body beside a wall should be sliding on it: it
    /// just collided with the wall, has stopped rising, or already slides.
    fn holds_wall(&self, hit_wall: bool) -> bool {
        !self.grounded
            && !self.dashing
            && self.on_wall()
            && (hit_wall || self.velocity.y <= 0.0 || self.status == PlayerStatus::WallSlide)
    }

    /// Analog flick-to-run: the stick is pushed past the run threshold and
    /// either the player already runs or the stick travelled at least the
    /// rush distance since the previous sample.
    fn wants_run(&self, input: &MovementInput, tuning: &MovementTuning) -> bool {
        if !input.analog {
            return false;
        }
        let current = input.axis.x;
        let last = self.last_axis_x;
        if current.abs() < tuning.run_threshold {
            return false;
        }
        let travel = (current - last).abs();
        self.status == PlayerStatus::Run
            || (last * current >= 0.0 && current.abs() >= last.abs() && travel >= tuning.rush_value)
            || (last * current < 0.0 && travel >= 2.0 * tuning.rush_value)
    }

    /// Validate and consume a buffered jump press. Velocity is left to the
    /// caller.
    pub fn take_jump(&mut self, clock: Clock, tuning: &MovementTuning) -> Option<JumpKind> {
        if self.dashing || clock.now - self.last_time_jump_press > tuning.jump_bounce_time {
            return None;
        }

        let kind = if self.grounded {
            self.grounded = false;
            self.last_time_left_ground = clock.now;
            self.num_jumps = 1;
            JumpKind::Ground
        } else if self.on_wall() {
            let away = self.away_from_wall();
            self.on_wall_left = false;
            self.on_wall_right = false;
            self.num_jumps = 1;
            JumpKind::Wall { away }
        } else if self.num_jumps == 0
            && clock.now - self.last_time_left_ground <= tuning.ledge_grace_time
        {
            self.num_jumps = 1;
            JumpKind::Ground
        } else if self.num_jumps.max(1) < tuning.max_num_jumps {
            self.num_jumps = self.num_jumps.max(1) + 1;
            JumpKind::Air
        } else {
            return None;
        };

        self.last_time_jump_press = f32::NEG_INFINITY;
        debug!("Jump: {:?}, jumps used {}", kind, self.num_jumps);
        Some(kind)
    }

    // -------------------------------------------------------------------------
    // Fixed step
    // -------------------------------------------------------------------------

    /// Integrate, resolve against the grid, update contact flags and status.
    pub fn fixed_step(
        &mut self,
        input: &MovementInput,
        grid: &TileGrid,
        settings: &CollisionSettings,
        clock: Clock,
        tuning: &MovementTuning,
        pool: &mut TransitionPool,
    ) -> StepOutcome {
        let dt = clock.delta;

        if self.dashing && clock.now - self.dash_start_time >= tuning.dash_duration {
            self.dashing = false;
        }

        match tuning.model {
            LocomotionModel::TransitionTable => self.integrate_table(dt, tuning, pool),
            LocomotionModel::DirectIntegration => self.integrate_direct(input, clock, tuning),
        }

        let delta = self.velocity * dt;
        let correction = grid.simulate_movement(self.world_bounds(), delta, settings);
        self.position += delta + correction;

        let mut outcome = self.apply_resolution(delta, correction, grid, settings.mode, clock, pool);

        outcome.status_changed = match tuning.model {
            LocomotionModel::TransitionTable => {
                let next = if outcome.landed {
                    Some(PlayerStatus::GroundedIdle)
                } else if self.holds_wall(outcome.hit_wall) {
                    Some(PlayerStatus::WallSlide)
                } else if outcome.left_ground {
                    Some(PlayerStatus::MidairIdle)
                } else {
                    None
                };
                next.is_some_and(|status| self.update_status(status, tuning, pool))
            }
            LocomotionModel::DirectIntegration => {
                let derived = self.derived_status(input, tuning);
                self.set_status(derived)
            }
        };

        let contact = self.world_bounds();
        let probe = Rect {
            min: contact.min - Vec2::splat(CONTACT_PROBE),
            max: contact.max + Vec2::splat(CONTACT_PROBE),
        };
        for (_, tile) in grid.tiles_overlapping(probe) {
            outcome.reached_goal |= tile.level_goal;
            outcome.died |= tile.death_block;
        }
        let kill_plane = grid.origin().y as f32 - settings.kill_depth;
        if contact.max.y < kill_plane {
            outcome.died = true;
        }

        outcome
    }

    fn integrate_table(&mut self, dt: f32, tuning: &MovementTuning, pool: &mut TransitionPool) {
        if let Some(vx) = drive_axis(&mut self.horizontal, dt, pool) {
            self.velocity.x = vx;
        }
        match drive_axis(&mut self.vertical, dt, pool) {
            Some(vy) => self.velocity.y = vy,
            None => self.velocity.y -= tuning.gravity * dt,
        }

        if self.status == PlayerStatus::WallSlide && self.vertical.is_none() {
            self.velocity.y = self.velocity.y.max(-tuning.wall_slide_speed);
        }
        self.velocity.y = self.velocity.y.max(-tuning.max_fall_speed);

        if self.dashing {
            self.velocity = Vec2::new(self.dash_direction * tuning.dash_speed, 0.0);
        }
    }

    fn integrate_direct(&mut self, input: &MovementInput, clock: Clock, tuning: &MovementTuning) {
        let dt = clock.delta;

        if let Some(kind) = self.take_jump(clock, tuning) {
            match kind {
                JumpKind::Ground | JumpKind::Air => self.velocity.y = tuning.jump_speed,
                JumpKind::Wall { away } => {
                    self.velocity.y = tuning.wall_jump_speed;
                    self.velocity.x = away * tuning.wall_jump_kick;
                }
            }
        }

        if !input.jump_held && self.velocity.y > tuning.jump_release_speed && !self.grounded {
            self.velocity.y = tuning.jump_release_speed;
        }

        let crouching = self.grounded && input.axis.y <= -tuning.crouch_threshold;
        let max_speed = if self.sprint.sprinting {
            tuning.running_speed
        } else if self.grounded {
            tuning.walking_speed
        } else {
            tuning.midair_speed
        };
        let target = if crouching {
            0.0
        } else {
            input.axis.x * max_speed
        };
        let rate = if target == 0.0 {
            tuning.deceleration
        } else if self.velocity.x != 0.0 && target.signum() != self.velocity.x.signum() {
            tuning.turn_acceleration
        } else if self.sprint.sprinting {
            tuning.sprint_acceleration
        } else {
            tuning.acceleration
        };
        self.velocity.x = move_towards(self.velocity.x, target, rate * dt);

        self.velocity.y -= tuning.gravity * dt;
        if self.on_wall() && !self.grounded && self.velocity.y < 0.0 {
            self.velocity.y = self.velocity.y.max(-tuning.wall_slide_speed);
        }
        self.velocity.y = self.velocity.y.max(-tuning.max_fall_speed);

        if self.dashing {
            self.velocity = Vec2::new(self.dash_direction * tuning.dash_speed, 0.0);
        }
    }

    /// Interpret the resolution vector: floor, ceiling and wall contacts.
    fn apply_resolution(
        &mut self,
        delta: Vec2,
        correction: Vec2,
        grid: &TileGrid,
        mode: CollisionMode,
        clock: Clock,
        pool: &mut TransitionPool,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let was_grounded = self.grounded;

        if correction.y > 0.0 {
            self.velocity.y = 0.0;
            self.grounded = true;
            self.num_jumps = 0;
            self.dashed = false;
            if let Some(handle) = self.vertical.take() {
                pool.release(handle);
            }
            if !was_grounded {
                outcome.landed = true;
                debug!("Landed at {:.2}, {:.2}", self.position.x, self.position.y);
            }
        } else {
            if correction.y < 0.0 {
                self.velocity.y = 0.0;
                outcome.hit_ceiling = true;
                if let Some(handle) = self.vertical.take() {
                    pool.release(handle);
                }
            }
            if was_grounded && delta.y != 0.0 {
                self.grounded = false;
                self.last_time_left_ground = clock.now;
                outcome.left_ground = true;
                debug!("Left ground");
            }
        }

        if correction.x != 0.0 {
            self.velocity.x = 0.0;
            outcome.hit_wall = true;
            if !self.grounded {
                if let Some(handle) = self.horizontal.take() {
                    pool.release(handle);
                }
            }
        }

        if self.grounded {
            self.on_wall_left = false;
            self.on_wall_right = false;
        } else {
            let (left, right) = wall_contact(grid, self.world_bounds(), mode);
            self.on_wall_left = left || (correction.x > 0.0);
            self.on_wall_right = right || (correction.x < 0.0);
        }

        outcome
    }

    /// Status implied by flags and input, used for presentation by the
    /// direct-integration model.
    pub fn derived_status(&self, input: &MovementInput, tuning: &MovementTuning) -> PlayerStatus {
        if self.dashing {
            PlayerStatus::Dash
        } else if self.grounded {
            if input.axis.y <= -tuning.crouch_threshold && self.velocity.x != 0.0 {
                PlayerStatus::GroundSlide
            } else if self.velocity.x == 0.0 && input.axis.x == 0.0 {
                PlayerStatus::GroundedIdle
            } else if self.sprint.sprinting {
                PlayerStatus::Run
            } else {
                PlayerStatus::Walk
            }
        } else if self.on_wall() && self.velocity.y <= 0.0 {
            PlayerStatus::WallSlide
        } else if input.axis.x != 0.0 {
            PlayerStatus::AirControl
        } else {
            PlayerStatus::MidairIdle
        }
    }
}

/// Evaluate the transition owning an axis. A transition found finished is
/// released and the axis handed back to integration.
fn drive_axis(
    slot: &mut Option<TransitionHandle>,
    dt: f32,
    pool: &mut TransitionPool,
) -> Option<f32> {
    let handle = (*slot)?;
    if !pool.is_finished(handle) {
        if let Some(value) = pool.evaluate(handle, dt) {
            return Some(value);
        }
    }
    pool.release(handle);
    *slot = None;
    None
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Blocking cells directly beside the body's left and right edges.
fn wall_contact(grid: &TileGrid, rect: Rect, mode: CollisionMode) -> (bool, bool) {
    let rows_low = rect.min.y.floor() as i32;
    let rows_high = (rect.max.y.ceil() as i32).max(rows_low + 1);
    let left = (rect.min.x - CONTACT_PROBE).floor() as i32;
    let right = (rect.max.x + CONTACT_PROBE).floor() as i32;

    let blocked = |column: i32| (rows_low..rows_high).any(|row| grid.blocks(column, row, mode));
    (blocked(left), blocked(right))
}
