//! Easing curves and tween specifications.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions.
///
/// The tension-based curves may leave the `[0, 1]` range in the middle of the
/// animation; they always start at 0 and end at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Cosine ease in and out; the default curve of platform value animators.
    AccelerateDecelerate,
    /// Flings past 1 and settles back.
    Overshoot { tension: f32 },
    /// Pulls back, then flings past the target and settles.
    /// The effective tension is `tension * 1.5`.
    AnticipateOvershoot { tension: f32 },
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::LinearEasing => fraction,
            Easing::AccelerateDecelerate => {
                ((fraction + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
            Easing::Overshoot { tension } => overshoot(fraction - 1.0, tension) + 1.0,
            Easing::AnticipateOvershoot { tension } => {
                let tension = tension * 1.5;
                if fraction < 0.5 {
                    0.5 * anticipate(fraction * 2.0, tension)
                } else {
                    0.5 * (overshoot(fraction * 2.0 - 2.0, tension) + 2.0)
                }
            }
        }
    }
}

fn anticipate(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t - tension)
}

fn overshoot(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t + tension)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Duration in nanoseconds, the unit frames are stamped in.
    pub fn duration_nanos(&self) -> u64 {
        self.duration_millis * 1_000_000
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
