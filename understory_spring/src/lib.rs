// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spring --heading-base-level=0

//! Understory Spring: frame-driven spring animation for UI values.
//!
//! This crate provides the small amount of animation machinery that interactive
//! widgets need to release a value back to rest after a gesture:
//!
//! - [`SpringConfig`]: damping ratio, stiffness, and settle thresholds, with
//!   named presets in [`damping_ratio`] and [`stiffness`].
//! - [`SpringState`]: position + velocity, stepped with the exact solution of
//!   the damped spring equation.
//! - [`Animatable`]: a single-slot scalar that is either written directly
//!   ([`Animatable::snap_to`]) or driven towards a target
//!   ([`Animatable::animate_to`]), one animation at a time.
//!
//! The crate has no clock and no scheduler. Hosts call
//! [`Animatable::advance`] from their frame loop with the elapsed time.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_spring::{Animatable, Frame, SpringConfig};
//!
//! let mut offset = Animatable::new(0.0);
//!
//! // Track the pointer 1:1.
//! offset.snap_to(80.0);
//!
//! // Release: spring back to zero.
//! let settle = offset.animate_to(0.0, SpringConfig::DEFAULT);
//! loop {
//!     match offset.advance(Duration::from_millis(16)) {
//!         Frame::Running(_) => continue,
//!         Frame::Finished(id) => {
//!             assert_eq!(id, settle);
//!             break;
//!         }
//!         Frame::Idle => unreachable!(),
//!     }
//! }
//! assert_eq!(offset.value(), 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float functions.
//! - `libm`: use `libm` through Kurbo for `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`SpringConfig`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod animatable;
mod spring;

pub use animatable::{Animatable, AnimationId, AnimationStatus, Frame};
pub use spring::{
    DEFAULT_VISIBILITY_THRESHOLD, MIN_DAMPING_RATIO, SpringConfig, SpringState, damping_ratio, stiffness,
};
