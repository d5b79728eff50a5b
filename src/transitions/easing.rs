//! Easing curves and the stateful transition that walks them.
//!
//! Curve names follow https://easings.net/.

use bevy::log::warn;
use rand::Rng;

pub(crate) const MIN_EXPONENT: f32 = 5.0;
pub(crate) const MIN_FREQUENCY: f32 = 1.0;
pub(crate) const MIN_DAMPING: f32 = 2.0;

const DEFAULT_EXPONENT: f32 = 10.0;
const DEFAULT_FREQUENCY: f32 = 15.0;
const DEFAULT_DAMPING: f32 = 2.0;
const DEFAULT_NOISE: f32 = 1.0;

/// The closed set of transition variants the pool knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionKind {
    /// Snaps to the target on the first evaluation.
    #[default]
    Default,
    Linear,
    EaseInExponential,
    EaseOutExponential,
    EaseInOutQuart,
    DampedWave,
    NoisyLinear,
    Step,
}

impl TransitionKind {
    pub const ALL: [TransitionKind; 8] = [
        TransitionKind::Default,
        TransitionKind::Linear,
        TransitionKind::EaseInExponential,
        TransitionKind::EaseOutExponential,
        TransitionKind::EaseInOutQuart,
        TransitionKind::DampedWave,
        TransitionKind::NoisyLinear,
        TransitionKind::Step,
    ];

    /// Resolve a kind from its configuration name.
    ///
    /// Names are matched case-insensitively and accept `snake_case`,
    /// `kebab-case` or `PascalCase`. Anything unrecognized resolves to
    /// [`TransitionKind::Default`] instead of failing, so a typo in a data
    /// file degrades to an instant transition.
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "default" => TransitionKind::Default,
            "linear" => TransitionKind::Linear,
            "easeinexponential" => TransitionKind::EaseInExponential,
            "easeoutexponential" => TransitionKind::EaseOutExponential,
            "easeinoutquart" => TransitionKind::EaseInOutQuart,
            "dampedwave" => TransitionKind::DampedWave,
            "noisylinear" => TransitionKind::NoisyLinear,
            "step" => TransitionKind::Step,
            _ => {
                warn!(
                    "Unknown transition kind '{}', falling back to the default transition",
                    name
                );
                TransitionKind::Default
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionKind::Default => "default",
            TransitionKind::Linear => "linear",
            TransitionKind::EaseInExponential => "ease_in_exponential",
            TransitionKind::EaseOutExponential => "ease_out_exponential",
            TransitionKind::EaseInOutQuart => "ease_in_out_quart",
            TransitionKind::DampedWave => "damped_wave",
            TransitionKind::NoisyLinear => "noisy_linear",
            TransitionKind::Step => "step",
        }
    }
}

/// Curve parameters, one variant per [`TransitionKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Instant,
    Linear,
    EaseInExponential { exponent: f32 },
    EaseOutExponential { exponent: f32 },
    EaseInOutQuart,
    DampedWave { frequency: f32, damping: f32 },
    NoisyLinear { noise_min: f32, noise_max: f32 },
    /// `step_progression` is in [0, 1].
    Step { step_progression: f32 },
}

impl Easing {
    /// Default parameters for a freshly built (or re-acquired) transition.
    pub fn for_kind(kind: TransitionKind) -> Self {
        match kind {
            TransitionKind::Default => Easing::Instant,
            TransitionKind::Linear => Easing::Linear,
            TransitionKind::EaseInExponential => Easing::EaseInExponential {
                exponent: DEFAULT_EXPONENT,
            },
            TransitionKind::EaseOutExponential => Easing::EaseOutExponential {
                exponent: DEFAULT_EXPONENT,
            },
            TransitionKind::EaseInOutQuart => Easing::EaseInOutQuart,
            TransitionKind::DampedWave => Easing::DampedWave {
                frequency: DEFAULT_FREQUENCY,
                damping: DEFAULT_DAMPING,
            },
            TransitionKind::NoisyLinear => Easing::NoisyLinear {
                noise_min: DEFAULT_NOISE,
                noise_max: DEFAULT_NOISE,
            },
            TransitionKind::Step => Easing::Step {
                step_progression: 0.0,
            },
        }
    }

    pub fn kind(&self) -> TransitionKind {
        match self {
            Easing::Instant => TransitionKind::Default,
            Easing::Linear => TransitionKind::Linear,
            Easing::EaseInExponential { .. } => TransitionKind::EaseInExponential,
            Easing::EaseOutExponential { .. } => TransitionKind::EaseOutExponential,
            Easing::EaseInOutQuart => TransitionKind::EaseInOutQuart,
            Easing::DampedWave { .. } => TransitionKind::DampedWave,
            Easing::NoisyLinear { .. } => TransitionKind::NoisyLinear,
            Easing::Step { .. } => TransitionKind::Step,
        }
    }
}

/// A progress-to-value mapping animating `from` towards `to` over
/// `duration` seconds.
///
/// The first value returned by [`Transition::evaluate`] already corresponds
/// to a progression of `delta / duration`, not 0. Once the progression
/// reaches 1 the transition is finished and keeps reporting `to`.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    duration: f32,
    progression: f32,
    available: bool,
    generation: u32,
    easing: Easing,
}

impl Transition {
    pub const DEFAULT_DURATION: f32 = 0.5;

    pub fn new(kind: TransitionKind) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            duration: Self::DEFAULT_DURATION,
            progression: 0.0,
            available: true,
            generation: 0,
            easing: Easing::for_kind(kind),
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.easing.kind()
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Negative (and NaN) durations collapse to 0, which finishes the
    /// transition on its first evaluation.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
    }

    pub fn progression(&self) -> f32 {
        self.progression
    }

    pub fn is_finished(&self) -> bool {
        self.progression >= 1.0
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }

    /// Set the exponent of an exponential ease. Ignored by other curves.
    pub fn set_exponent(&mut self, value: f32) {
        if let Easing::EaseInExponential { exponent } | Easing::EaseOutExponential { exponent } =
            &mut self.easing
        {
            *exponent = value.max(MIN_EXPONENT);
        }
    }

    /// Set the oscillation of a damped wave. Ignored by other curves.
    pub fn set_damped_wave(&mut self, frequency_value: f32, damping_value: f32) {
        if let Easing::DampedWave { frequency, damping } = &mut self.easing {
            *frequency = frequency_value.max(MIN_FREQUENCY);
            *damping = damping_value.max(MIN_DAMPING);
        }
    }

    /// Set the additive noise range of a noisy linear ramp. Ignored by
    /// other curves.
    pub fn set_noise(&mut self, min: f32, max: f32) {
        if let Easing::NoisyLinear {
            noise_min,
            noise_max,
        } = &mut self.easing
        {
            *noise_min = min;
            *noise_max = max;
        }
    }

    /// Set the moment (in seconds, 0 <= t <= duration) a step transition
    /// switches from `from` to `to`. The duration must be set first.
    pub fn set_step_time(&mut self, step_time: f32) {
        let duration = self.duration;
        if let Easing::Step { step_progression } = &mut self.easing {
            *step_progression = if duration > 0.0 {
                (step_time / duration).clamp(0.0, 1.0)
            } else {
                0.0
            };
        }
    }

    /// Advance the transition by `delta` seconds and return the animated value.
    pub fn evaluate<R: Rng>(&mut self, delta: f32, rng: &mut R) -> f32 {
        if self.duration > 0.0 && self.easing != Easing::Instant {
            self.progression += delta / self.duration;
        } else {
            self.progression = 1.0;
        }

        let p = self.progression;
        match self.easing {
            Easing::Step { step_progression } => {
                if p < step_progression {
                    self.from
                } else {
                    self.to
                }
            }
            _ if p >= 1.0 => self.to,
            Easing::Instant => self.to,
            Easing::Linear => self.blend(p),
            Easing::EaseInExponential { exponent } => {
                self.blend(2f32.powf(exponent * p - exponent))
            }
            Easing::EaseOutExponential { exponent } => self.blend(1.0 - 2f32.powf(-exponent * p)),
            Easing::EaseInOutQuart => {
                let u = if p < 0.5 {
                    8.0 * p.powi(4)
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(4) / 2.0
                };
                self.blend(u)
            }
            Easing::DampedWave { frequency, damping } => {
                // Starts at `from` and oscillates around `to` while decaying.
                let u = (-damping * p).exp() * (frequency * p).cos();
                self.from * u + self.to * (1.0 - u)
            }
            Easing::NoisyLinear {
                noise_min,
                noise_max,
            } => self.blend(p) + sample_noise(rng, noise_min, noise_max),
        }
    }

    fn blend(&self, u: f32) -> f32 {
        self.from * (1.0 - u) + self.to * u
    }

    /// Hand the instance out again: fresh parameters, new generation.
    pub(crate) fn claim(&mut self) {
        let kind = self.kind();
        self.from = 0.0;
        self.to = 0.0;
        self.duration = Self::DEFAULT_DURATION;
        self.progression = 0.0;
        self.easing = Easing::for_kind(kind);
        self.available = false;
        self.generation = self.generation.wrapping_add(1);
    }

    pub(crate) fn mark_available(&mut self) {
        self.available = true;
    }
}

/// Uniform noise over the inclusive range; reversed bounds are swapped.
fn sample_noise<R: Rng>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if !(low < high) {
        return low;
    }
    rng.random_range(low..=high)
}
