//! Smooth approach animation.
//!
//! Values chase their target with exponential decay: every `1 / rate`
//! seconds the remaining distance halves, whatever the frame rate.
//! Used for the camera follow and the HUD fades.
//!
//! All functions take `rate > 0` as a precondition.

use abyx_shared::Vec2;

/// Distance under which a value snaps onto its target.
pub const APPROACH_EPSILON: f32 = 0.001;

/// Moves `value` toward `target`.
///
/// Returns the new value and whether the target has been reached. Within
/// [`APPROACH_EPSILON`] the value snaps to `target` exactly.
#[inline]
#[must_use]
pub fn approach_scalar(value: f32, target: f32, dt: f32, rate: f32) -> (f32, bool) {
    if (value - target).abs() <= APPROACH_EPSILON {
        return (target, true);
    }
    let blend = 1.0 - 2.0_f32.powf(-rate * dt);
    (value + (target - value) * blend, false)
}

/// Applies [`approach_scalar`] to each axis.
///
/// Reports reached only when both axes have reached.
#[must_use]
pub fn approach_vector(value: Vec2, target: Vec2, dt: f32, rate: f32) -> (Vec2, bool) {
    let (x, x_done) = approach_scalar(value.x, target.x, dt, rate);
    let (y, y_done) = approach_scalar(value.y, target.y, dt, rate);
    (Vec2::new(x, y), x_done && y_done)
}

/// Sine wave remapped from `[-1, 1]` to `[0, 1]`.
#[inline]
#[must_use]
pub fn sin_bob(time: f64, rate: f64) -> f32 {
    (((time * rate).sin() + 1.0) / 2.0) as f32
}

/// A scalar that chases a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    current: f32,
    target: f32,
    rate: f32,
}

impl Approach {
    /// Creates an approach resting at `value`.
    #[must_use]
    pub const fn new(value: f32, rate: f32) -> Self {
        Self {
            current: value,
            target: value,
            rate,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.current
    }

    /// Current target.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Retargets without resetting the current value.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps straight to `value`.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Advances by `dt` seconds. Returns `true` once the target is reached.
    pub fn update(&mut self, dt: f32) -> bool {
        let (value, reached) = approach_scalar(self.current, self.target, dt, self.rate);
        self.current = value;
        reached
    }
}
