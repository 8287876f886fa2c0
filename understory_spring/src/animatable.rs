// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-slot animated scalar.
//!
//! ## Usage
//!
//! 1) Write the value directly with [`Animatable::snap_to`]. This cancels any
//!    running animation.
//! 2) Start an animation with [`Animatable::animate_to`]; keep the returned
//!    [`AnimationId`] if you want to know how it ended.
//! 3) Once per frame call [`Animatable::advance`] with the elapsed time.
//!    It reports [`Frame::Finished`] exactly once, on the frame the animation
//!    comes to rest.
//!
//! Only one animation can run at a time. Starting a new animation or snapping
//! supersedes the running one; a superseded animation never finishes, and
//! [`Animatable::status`] reports it as [`AnimationStatus::Superseded`].

use core::time::Duration;

use crate::spring::{SpringConfig, SpringState};

/// Identifies one animation started on an [`Animatable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// What happened during one call to [`Animatable::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Nothing is animating.
    Idle,
    /// The animation moved and is still running.
    Running(AnimationId),
    /// The animation reached its target on this frame.
    Finished(AnimationId),
}

/// Lifecycle of an animation identified by an [`AnimationId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Still in flight.
    Running,
    /// Reached its target.
    Finished,
    /// Interrupted by a snap or by a newer animation.
    Superseded,
}

#[derive(Clone, Copy, Debug)]
struct Active {
    id: AnimationId,
    target: f64,
    spring: SpringConfig,
}

/// A scalar that can be written directly or driven by a spring.
#[derive(Clone, Debug)]
pub struct Animatable {
    state: SpringState,
    active: Option<Active>,
    next_id: u64,
    last_finished: Option<AnimationId>,
}

impl Animatable {
    /// Create an animatable resting at `value`.
    pub fn new(value: f64) -> Self {
        Self {
            state: SpringState::at_rest(value),
            active: None,
            next_id: 0,
            last_finished: None,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    /// Target of the running animation, if any.
    pub fn target(&self) -> Option<f64> {
        self.active.map(|a| a.target)
    }

    /// Returns `true` while an animation is in flight.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Set the value immediately, cancelling any running animation.
    ///
    /// Velocity is reset to zero. This is cheap and may be called on every
    /// pointer move.
    pub fn snap_to(&mut self, value: f64) {
        self.active = None;
        self.state = SpringState::at_rest(value);
    }

    /// Start animating towards `target`, superseding any running animation.
    ///
    /// The current velocity is carried into the new animation.
    pub fn animate_to(&mut self, target: f64, spring: SpringConfig) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.active = Some(Active { id, target, spring });
        id
    }

    /// Cancel the running animation, leaving the value where it is.
    pub fn stop(&mut self) {
        self.active = None;
        self.state.velocity = 0.0;
    }

    /// Advance the running animation by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Frame {
        let Some(active) = self.active else {
            return Frame::Idle;
        };
        self.state.step(active.target, &active.spring, dt);
        if self.state.is_at_rest(active.target, &active.spring) {
            self.state = SpringState::at_rest(active.target);
            self.active = None;
            self.last_finished = Some(active.id);
            Frame::Finished(active.id)
        } else {
            Frame::Running(active.id)
        }
    }

    /// Report how the animation identified by `id` ended, or whether it is
    /// still running.
    ///
    /// Only the most recently finished animation is remembered; older ids
    /// report [`AnimationStatus::Superseded`].
    pub fn status(&self, id: AnimationId) -> AnimationStatus {
        if self.active.is_some_and(|a| a.id == id) {
            AnimationStatus::Running
        } else if self.last_finished == Some(id) {
            AnimationStatus::Finished
        } else {
            AnimationStatus::Superseded
        }
    }
}

impl Default for Animatable {
    fn default() -> Self {
        Self::new(0.0)
    }
}
