// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe state machine: turn drag events into swipe states and callbacks.
//!
//! ## Usage
//!
//! 1) Call [`SwipeController::on_drag_start`] when the pointer starts dragging.
//! 2) On each move call [`SwipeController::on_horizontal_drag`] with the
//!    (resistance-adjusted) delta, the current offset, and the clamp bound.
//!    Apply the returned offset; `None` means the move was in a direction that
//!    is not permitted and must be ignored.
//! 3) Call [`SwipeController::on_drag_end`] with the final offset and the
//!    completion threshold, then spring the offset back to zero.
//! 4) Once the spring has settled, call [`SwipeController::reset_direction`].
//!
//! States move `Start → Swiping → End` for a completed swipe. A drag that ends
//! short of the threshold restores the last completed-or-cancelled state,
//! which is [`SwipeState::Cancelled`] until the first swipe completes.
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::{
//!     DragEnd, FnHandler, Scale, SwipeController, SwipeDirection, SwipeDirections, SwipeState,
//! };
//!
//! let mut completed = Vec::new();
//! let mut swipe = SwipeController::new(
//!     FnHandler::new(|direction| completed.push(direction)),
//!     SwipeDirections::all(),
//! );
//!
//! swipe.on_drag_start();
//! let mut offset = 0.0;
//! for delta in [30.0, 40.0, 40.0] {
//!     offset = swipe
//!         .on_horizontal_drag(delta, offset, 150.0, &Scale(1.0), 0.0)
//!         .unwrap();
//! }
//! assert_eq!(swipe.on_drag_end(offset, 100.0), DragEnd::Completed(SwipeDirection::Right));
//! assert_eq!(swipe.current_swipe_state(), SwipeState::End);
//! drop(swipe);
//! assert_eq!(completed, vec![SwipeDirection::Right]);
//! ```

use alloc::boxed::Box;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use crate::types::{Density, Dp, SwipeDirection, SwipeDirections, SwipeState};

/// Host callbacks invoked by [`SwipeController`].
///
/// Only completion is required; the other notifications default to no-ops.
pub trait SwipeHandler {
    /// A drag ended past the threshold in `direction`.
    fn on_swipe_complete(&mut self, direction: SwipeDirection);

    /// The card moved to `offset` while dragging in `direction`.
    fn on_swipe(&mut self, direction: SwipeDirection, offset: Dp) {
        let _ = (direction, offset);
    }

    /// The visible swipe state changed.
    fn on_swipe_state_change(&mut self, state: SwipeState) {
        let _ = state;
    }

    /// Horizontal pointer velocity reported with each accepted move.
    fn on_swipe_velocity(&mut self, velocity: f64) {
        let _ = velocity;
    }
}

impl<H: SwipeHandler + ?Sized> SwipeHandler for &mut H {
    fn on_swipe_complete(&mut self, direction: SwipeDirection) {
        (**self).on_swipe_complete(direction);
    }

    fn on_swipe(&mut self, direction: SwipeDirection, offset: Dp) {
        (**self).on_swipe(direction, offset);
    }

    fn on_swipe_state_change(&mut self, state: SwipeState) {
        (**self).on_swipe_state_change(state);
    }

    fn on_swipe_velocity(&mut self, velocity: f64) {
        (**self).on_swipe_velocity(velocity);
    }
}

/// A [`SwipeHandler`] built from closures.
///
/// Handlers that are not set do nothing.
pub struct FnHandler<'a> {
    complete: Box<dyn FnMut(SwipeDirection) + 'a>,
    swipe: Option<Box<dyn FnMut(SwipeDirection, Dp) + 'a>>,
    state_change: Option<Box<dyn FnMut(SwipeState) + 'a>>,
    velocity: Option<Box<dyn FnMut(f64) + 'a>>,
}

impl<'a> FnHandler<'a> {
    /// Create a handler that only reacts to completed swipes.
    pub fn new(on_complete: impl FnMut(SwipeDirection) + 'a) -> Self {
        Self {
            complete: Box::new(on_complete),
            swipe: None,
            state_change: None,
            velocity: None,
        }
    }

    /// Also react to offset changes.
    pub fn on_swipe(mut self, f: impl FnMut(SwipeDirection, Dp) + 'a) -> Self {
        self.swipe = Some(Box::new(f));
        self
    }

    /// Also react to state changes.
    pub fn on_state_change(mut self, f: impl FnMut(SwipeState) + 'a) -> Self {
        self.state_change = Some(Box::new(f));
        self
    }

    /// Also react to velocity reports.
    pub fn on_velocity(mut self, f: impl FnMut(f64) + 'a) -> Self {
        self.velocity = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for FnHandler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("swipe", &self.swipe.is_some())
            .field("state_change", &self.state_change.is_some())
            .field("velocity", &self.velocity.is_some())
            .finish_non_exhaustive()
    }
}

impl SwipeHandler for FnHandler<'_> {
    fn on_swipe_complete(&mut self, direction: SwipeDirection) {
        (self.complete)(direction);
    }

    fn on_swipe(&mut self, direction: SwipeDirection, offset: Dp) {
        if let Some(f) = &mut self.swipe {
            f(direction, offset);
        }
    }

    fn on_swipe_state_change(&mut self, state: SwipeState) {
        if let Some(f) = &mut self.state_change {
            f(state);
        }
    }

    fn on_swipe_velocity(&mut self, velocity: f64) {
        if let Some(f) = &mut self.velocity {
            f(velocity);
        }
    }
}

/// How a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEnd {
    /// The offset was past the threshold; the swipe completed.
    Completed(SwipeDirection),
    /// The offset was within the threshold.
    Cancelled,
    /// No drag was in progress; nothing happened.
    Ignored,
}

/// Swipe state machine for one card.
#[derive(Debug)]
pub struct SwipeController<H> {
    handler: H,
    swipe_directions: SwipeDirections,
    current_direction: SwipeDirection,
    completed_direction: SwipeDirection,
    current_swipe_state: SwipeState,
    persistent_swipe_state: SwipeState,
    swiping_state_emitted: bool,
    dragging: bool,
}

impl<H: SwipeHandler> SwipeController<H> {
    /// Create a controller reporting to `handler`, accepting movement in
    /// `swipe_directions`.
    pub fn new(handler: H, swipe_directions: SwipeDirections) -> Self {
        Self {
            handler,
            swipe_directions,
            current_direction: SwipeDirection::None,
            completed_direction: SwipeDirection::None,
            current_swipe_state: SwipeState::Start,
            persistent_swipe_state: SwipeState::Cancelled,
            swiping_state_emitted: false,
            dragging: false,
        }
    }

    /// A drag began.
    pub fn on_drag_start(&mut self) {
        self.dragging = true;
        self.set_state(SwipeState::Start);
        self.swiping_state_emitted = false;
    }

    /// The pointer moved horizontally by `drag_amount`.
    ///
    /// `limit` is the clamp bound (threshold × limit multiplier) and
    /// `velocity_x` is passed through to the handler. Returns the new offset,
    /// or `None` if the move points in a direction that is not permitted or
    /// the resulting offset is not finite.
    ///
    /// A negative `limit` is used by magnitude; a NaN `limit` pins the
    /// offset at zero.
    ///
    /// A move without a preceding [`on_drag_start`](Self::on_drag_start)
    /// starts a drag first.
    pub fn on_horizontal_drag(
        &mut self,
        drag_amount: f64,
        current_offset: f64,
        limit: f64,
        density: &impl Density,
        velocity_x: f64,
    ) -> Option<f64> {
        if !self.dragging {
            log::debug!("horizontal drag without drag start; starting a new drag");
            self.on_drag_start();
        }

        let tentative = current_offset + drag_amount;
        if !tentative.is_finite() {
            log::debug!("non-finite drag offset {tentative} ignored");
            return None;
        }
        let direction = SwipeDirection::from_offset(tentative);
        if !self.swipe_directions.permits(direction) {
            return None;
        }
        self.current_direction = direction;

        let limit = sanitize_bound(limit);
        let new_offset = tentative.clamp(-limit, limit);
        self.handler.on_swipe(direction, density.to_dp(new_offset));

        if !self.swiping_state_emitted {
            self.set_state(SwipeState::Swiping);
            self.swiping_state_emitted = true;
        }

        self.handler.on_swipe_velocity(velocity_x);
        Some(new_offset)
    }

    /// The drag ended with the card at `offset_x`.
    ///
    /// `threshold` is the completion threshold, without the limit multiplier.
    /// It is sanitized the same way as the `limit` of
    /// [`on_horizontal_drag`](Self::on_horizontal_drag).
    pub fn on_drag_end(&mut self, offset_x: f64, threshold: f64) -> DragEnd {
        if !self.dragging {
            log::debug!("drag end without drag start ignored");
            return DragEnd::Ignored;
        }
        self.dragging = false;

        if offset_x.abs() > sanitize_bound(threshold) {
            let direction = SwipeDirection::from_offset(offset_x);
            self.completed_direction = direction;
            self.handler.on_swipe_complete(direction);
            self.persistent_swipe_state = SwipeState::End;
            self.set_state(SwipeState::End);
            DragEnd::Completed(direction)
        } else {
            self.set_state(self.persistent_swipe_state);
            DragEnd::Cancelled
        }
    }

    /// Forget the in-drag direction. Call once the card has settled.
    pub fn reset_direction(&mut self) {
        self.current_direction = SwipeDirection::None;
    }

    /// Direction to present to the host: the live direction while swiping,
    /// otherwise the direction of the last completed swipe.
    pub fn effective_direction(&self) -> SwipeDirection {
        if self.current_swipe_state == SwipeState::Swiping {
            self.current_direction
        } else {
            self.completed_direction
        }
    }

    /// Publicly visible state.
    pub fn current_swipe_state(&self) -> SwipeState {
        self.current_swipe_state
    }

    /// Last completed-or-cancelled state, restored when a drag is cancelled.
    pub fn persistent_swipe_state(&self) -> SwipeState {
        self.persistent_swipe_state
    }

    /// Direction computed by the latest accepted move.
    pub fn current_direction(&self) -> SwipeDirection {
        self.current_direction
    }

    /// Direction of the most recent completed swipe.
    pub fn completed_direction(&self) -> SwipeDirection {
        self.completed_direction
    }

    /// Directions movement is accepted in.
    pub fn swipe_directions(&self) -> SwipeDirections {
        self.swipe_directions
    }

    /// Returns `true` between drag start and drag end.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Shared access to the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Exclusive access to the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the controller, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    fn set_state(&mut self, state: SwipeState) {
        log::trace!("swipe state {:?} -> {:?}", self.current_swipe_state, state);
        self.current_swipe_state = state;
        self.handler.on_swipe_state_change(state);
    }
}

/// Make a host-supplied clamp bound or threshold usable: NaN becomes zero and
/// negative values count by magnitude.
pub(crate) fn sanitize_bound(bound: f64) -> f64 {
    if bound.is_nan() { 0.0 } else { bound.abs() }
}
