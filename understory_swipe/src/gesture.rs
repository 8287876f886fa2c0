// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal drag recognition: turn pointer samples into drag events.
//!
//! ## Usage
//!
//! 1) Call [`HorizontalDragTracker::pointer_down`] when the pointer goes down.
//! 2) Feed every move to [`HorizontalDragTracker::pointer_move`]. Once the
//!    pointer has travelled more than the touch slop horizontally, the tracker
//!    emits [`DragEvent::Start`] followed by a [`DragEvent::Move`] carrying the
//!    distance beyond the slop; later moves emit one [`DragEvent::Move`] each.
//! 3) Call [`HorizontalDragTracker::pointer_up`] (or `pointer_cancel`) to emit
//!    [`DragEvent::End`] if a drag was recognized.
//!
//! Only the x component of positions is used.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_swipe::{DragEvent, HorizontalDragTracker};
//!
//! let mut tracker = HorizontalDragTracker::new(8.0);
//! tracker.pointer_down(Point::new(100.0, 40.0), Duration::ZERO);
//!
//! // Inside the slop: nothing yet.
//! assert!(tracker.pointer_move(Point::new(105.0, 40.0), Duration::from_millis(10)).is_empty());
//!
//! // Crossing the slop starts the drag.
//! let events = tracker.pointer_move(Point::new(120.0, 42.0), Duration::from_millis(20));
//! assert_eq!(events[0], DragEvent::Start);
//! assert!(matches!(events[1], DragEvent::Move { delta, .. } if delta == 12.0));
//!
//! assert_eq!(tracker.pointer_up(Duration::from_millis(30)), vec![DragEvent::End]);
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`, `copysign`
use kurbo::Point;

/// Drag gesture vocabulary consumed by [`SwipeCard`](crate::SwipeCard).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// A horizontal drag was recognized.
    Start,
    /// The pointer moved by `delta` pixels at `velocity` pixels per second.
    Move {
        /// Signed horizontal movement since the previous event.
        delta: f64,
        /// Instantaneous horizontal velocity.
        velocity: f64,
    },
    /// The pointer was released or the gesture was cancelled.
    End,
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    x: f64,
    time: Duration,
}

/// Recognizes a single-pointer horizontal drag.
#[derive(Clone, Debug)]
pub struct HorizontalDragTracker {
    touch_slop: f64,
    down: Option<Sample>,
    last: Option<Sample>,
    dragging: bool,
}

impl HorizontalDragTracker {
    /// Create a tracker that needs `touch_slop` pixels of horizontal travel
    /// before a drag starts.
    pub fn new(touch_slop: f64) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            down: None,
            last: None,
            dragging: false,
        }
    }

    /// Returns `true` once a drag has been recognized and until it ends.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` while the pointer is down.
    pub fn is_pressed(&self) -> bool {
        self.down.is_some()
    }

    /// The pointer went down at `pos`.
    ///
    /// A second down while pressed restarts tracking from the new position.
    pub fn pointer_down(&mut self, pos: Point, time: Duration) {
        let sample = Sample { x: pos.x, time };
        self.down = Some(sample);
        self.last = Some(sample);
        self.dragging = false;
    }

    /// The pointer moved to `pos`.
    pub fn pointer_move(&mut self, pos: Point, time: Duration) -> Vec<DragEvent> {
        let (Some(down), Some(last)) = (self.down, self.last) else {
            return Vec::new();
        };
        let sample = Sample { x: pos.x, time };
        let velocity = velocity(last, sample);
        self.last = Some(sample);

        if self.dragging {
            return vec![DragEvent::Move {
                delta: sample.x - last.x,
                velocity,
            }];
        }

        let travelled = sample.x - down.x;
        if travelled.abs() <= self.touch_slop {
            return Vec::new();
        }
        self.dragging = true;
        let over_slop = travelled - self.touch_slop.copysign(travelled);
        vec![
            DragEvent::Start,
            DragEvent::Move {
                delta: over_slop,
                velocity,
            },
        ]
    }

    /// The pointer was released.
    pub fn pointer_up(&mut self, _time: Duration) -> Vec<DragEvent> {
        self.finish()
    }

    /// The platform cancelled the pointer stream.
    pub fn pointer_cancel(&mut self) -> Vec<DragEvent> {
        self.finish()
    }

    fn finish(&mut self) -> Vec<DragEvent> {
        let was_dragging = self.dragging;
        self.down = None;
        self.last = None;
        self.dragging = false;
        if was_dragging {
            vec![DragEvent::End]
        } else {
            Vec::new()
        }
    }
}

impl Default for HorizontalDragTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn velocity(from: Sample, to: Sample) -> f64 {
    let dt = to.time.saturating_sub(from.time).as_secs_f64();
    if dt > 0.0 { (to.x - from.x) / dt } else { 0.0 }
}
