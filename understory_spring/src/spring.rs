// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring parameters and closed-form stepping.
//!
//! The spring has unit mass. Its motion is fully described by the damping
//! ratio `ζ` and the stiffness `k`, with natural frequency `ω₀ = √k`.
//! [`SpringState::step`] evaluates the exact solution of the spring equation
//! over the given interval rather than integrating numerically, so the result
//! does not depend on how a host slices time into frames.

use core::f64::consts::E;
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`, `powf`, `sqrt`, `sin_cos`

/// Commonly used damping ratios.
pub mod damping_ratio {
    /// Very bouncy: the value oscillates noticeably before settling.
    pub const HIGH_BOUNCY: f64 = 0.2;
    /// Medium bounce, the usual choice for elements released by a gesture.
    pub const MEDIUM_BOUNCY: f64 = 0.5;
    /// A small overshoot.
    pub const LOW_BOUNCY: f64 = 0.75;
    /// Critically damped: no overshoot.
    pub const NO_BOUNCY: f64 = 1.0;
}

/// Commonly used stiffness values.
pub mod stiffness {
    /// Fast, snappy motion.
    pub const HIGH: f64 = 10_000.0;
    /// Medium stiffness.
    pub const MEDIUM: f64 = 1_500.0;
    /// Between medium and low.
    pub const MEDIUM_LOW: f64 = 400.0;
    /// Slow motion.
    pub const LOW: f64 = 200.0;
    /// Very slow motion.
    pub const VERY_LOW: f64 = 50.0;
}

/// Smallest damping ratio [`SpringState::step`] applies.
///
/// Lower (including zero, negative, or NaN) ratios are raised to this value so
/// that every spring eventually comes to rest.
pub const MIN_DAMPING_RATIO: f64 = 0.01;

/// Default visibility threshold: displacement below which the spring is
/// considered to be at its target.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.01;

/// Parameters of a damped spring.
///
/// Meaningful values are a damping ratio in `(0, ∞)` and a stiffness in
/// `(0, ∞)`. Out-of-range values are tolerated rather than rejected:
///
/// - a damping ratio below [`MIN_DAMPING_RATIO`] (or NaN) behaves as
///   [`MIN_DAMPING_RATIO`];
/// - a stiffness that is zero, negative, or NaN has no restoring force, and
///   [`SpringState::step`] lands on the target immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    /// Ratio of actual damping to critical damping.
    pub damping_ratio: f64,
    /// Spring constant (unit mass).
    pub stiffness: f64,
    /// Displacement below which the spring is considered settled.
    ///
    /// The matching velocity threshold is derived from it, see
    /// [`SpringConfig::velocity_threshold`].
    pub visibility_threshold: f64,
}

impl SpringConfig {
    /// Medium bouncy spring with stiffness 500.
    pub const DEFAULT: Self = Self::new(damping_ratio::MEDIUM_BOUNCY, 500.0);

    /// Create a spring with the given damping ratio and stiffness.
    pub const fn new(damping_ratio: f64, stiffness: f64) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    /// Replace the visibility threshold.
    pub const fn with_visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    /// Velocity (units per second) below which the spring may come to rest.
    ///
    /// This is the speed at which a value moves by one visibility threshold
    /// per 16 ms frame.
    pub fn velocity_threshold(&self) -> f64 {
        self.visibility_threshold * 62.5
    }

    /// Natural angular frequency `ω₀`.
    ///
    /// Zero when the stiffness is not positive.
    pub fn natural_frequency(&self) -> f64 {
        self.stiffness.max(0.0).sqrt()
    }

    /// Damping ratio used when stepping, floored at [`MIN_DAMPING_RATIO`].
    pub fn effective_damping_ratio(&self) -> f64 {
        self.damping_ratio.max(MIN_DAMPING_RATIO)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Position and velocity of a value moving under a spring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    /// Current value.
    pub value: f64,
    /// Current velocity in units per second.
    pub velocity: f64,
}

impl SpringState {
    /// Create a state at rest at `value`.
    pub const fn at_rest(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Advance the state towards `target` by `dt`.
    ///
    /// See [`SpringConfig`] for how out-of-range parameters are handled.
    pub fn step(&mut self, target: f64, config: &SpringConfig, dt: Duration) {
        let t = dt.as_secs_f64();
        if t <= 0.0 {
            return;
        }
        let omega = config.natural_frequency();
        if !omega.is_finite() || omega == 0.0 {
            *self = Self::at_rest(target);
            return;
        }
        let zeta = config.effective_damping_ratio();
        let x0 = self.value - target;
        let v0 = self.velocity;

        let (x, v) = if zeta > 1.0 {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let c2 = (r1 * x0 - v0) / (r1 - r2);
            let c1 = x0 - c2;
            let e1 = E.powf(r1 * t);
            let e2 = E.powf(r2 * t);
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        } else if zeta == 1.0 {
            let a = x0;
            let b = v0 + omega * x0;
            let decay = E.powf(-omega * t);
            ((a + b * t) * decay, (b - omega * (a + b * t)) * decay)
        } else {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / omega_d;
            let decay = E.powf(-zeta * omega * t);
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * (-zeta * omega * (a * cos + b * sin) + omega_d * (b * cos - a * sin));
            (x, v)
        };

        self.value = target + x;
        self.velocity = v;
    }

    /// Returns `true` once both displacement and velocity are under the
    /// thresholds of `config`.
    pub fn is_at_rest(&self, target: f64, config: &SpringConfig) -> bool {
        (self.value - target).abs() < config.visibility_threshold
            && self.velocity.abs() < config.velocity_threshold()
    }
}
