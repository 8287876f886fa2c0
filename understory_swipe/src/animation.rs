// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset animation driver: 1:1 tracking while dragging, spring release after.
//!
//! The driver owns the card's single [`Animatable`] offset. Snapping always
//! supersedes a running settle, so a new gesture interrupts a card that is
//! still springing back. A superseded settle never reports
//! [`Settle::Settled`].

use core::time::Duration;

use understory_spring::{Animatable, AnimationId, Frame, SpringConfig};

/// Progress of the offset after one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// No settle is running.
    Idle,
    /// The offset is springing back.
    Running,
    /// The settle identified by the id reached zero on this frame.
    Settled(AnimationId),
}

/// Owns the live horizontal offset of one card.
#[derive(Clone, Debug)]
pub struct AnimationController {
    offset: Animatable,
    spring: SpringConfig,
}

impl AnimationController {
    /// Create a driver at offset zero that settles with `spring`.
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            offset: Animatable::new(0.0),
            spring,
        }
    }

    /// Current offset in pixels.
    pub fn offset(&self) -> f64 {
        self.offset.value()
    }

    /// Spring used by [`settle`](Self::settle).
    pub fn spring(&self) -> SpringConfig {
        self.spring
    }

    /// Returns `true` while a settle is running.
    pub fn is_settling(&self) -> bool {
        self.offset.is_running()
    }

    /// Set the offset immediately, interrupting any settle.
    pub fn snap(&mut self, value: f64) {
        self.offset.snap_to(value);
    }

    /// Start springing the offset back to zero.
    pub fn settle(&mut self) -> AnimationId {
        self.offset.animate_to(0.0, self.spring)
    }

    /// Advance a running settle by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Settle {
        match self.offset.advance(dt) {
            Frame::Idle => Settle::Idle,
            Frame::Running(_) => Settle::Running,
            Frame::Finished(id) => Settle::Settled(id),
        }
    }
}
