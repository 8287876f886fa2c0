// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: a headless swipe-to-act card.
//!
//! This crate implements the interaction model of a card that can be dragged
//! horizontally, completes an action when released far enough, and springs
//! back to rest either way. It is split into small pieces that can be used on
//! their own or together through [`SwipeCard`]:
//!
//! - [`controller`]: the swipe state machine. Interprets drag deltas against
//!   the permitted directions and thresholds, reports
//!   [`SwipeState`] transitions, and decides completion vs cancellation.
//! - [`animation`]: owns the single animated offset; snaps during a drag and
//!   springs back to zero afterwards (see `understory_spring`).
//! - [`haptic`]: a gate that sends one vibration pulse per completed swipe.
//! - [`layout`]: decides which background is revealed and how far, and where
//!   the content is drawn.
//! - [`gesture`]: turns raw pointer samples into [`DragEvent`]s.
//!
//! The crate does not draw anything, own a clock, or talk to a platform. Hosts
//! supply a [`SwipeHandler`] for notifications, a [`SwipeView`] for drawing,
//! optionally a [`HapticFeedback`] platform, and drive the release spring
//! from their frame loop via [`SwipeCard::advance`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_swipe::{DragEvent, FnHandler, SwipeCard, SwipeConfig, SwipeDirection, SwipeState};
//!
//! let mut completed = None;
//! let mut card = SwipeCard::new(
//!     SwipeConfig::default(),
//!     FnHandler::new(|direction| completed = Some(direction)),
//! )
//! .unwrap();
//!
//! card.handle(DragEvent::Start);
//! for delta in [30.0, 40.0, 40.0] {
//!     card.handle(DragEvent::Move { delta, velocity: 0.0 });
//! }
//! card.handle(DragEvent::End);
//! assert_eq!(card.swipe_state(), SwipeState::End);
//!
//! // Spring back to rest.
//! while card.advance(Duration::from_millis(16)) {}
//! assert_eq!(card.offset(), 0.0);
//! assert_eq!(card.effective_direction(), SwipeDirection::Right);
//!
//! drop(card);
//! assert_eq!(completed, Some(SwipeDirection::Right));
//! ```
//!
//! ## Swipe states
//!
//! A drag moves through `Start → Swiping` and ends in
//! [`SwipeState::End`] when released past the threshold. A drag released
//! short of the threshold does not announce a fresh cancellation; it restores
//! the state left by the last completed swipe, which is
//! [`SwipeState::Cancelled`] until a swipe has completed.
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float functions.
//! - `libm`: use `libm` through Kurbo for `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`SwipeConfig`] and its
//!   parts.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
mod card;
mod config;
pub mod controller;
mod error;
pub mod gesture;
pub mod haptic;
pub mod layout;
mod types;

pub use animation::{AnimationController, Settle};
pub use card::SwipeCard;
pub use config::{BackgroundPadding, SwipeConfig};
pub use controller::{DragEnd, FnHandler, SwipeController, SwipeHandler};
pub use error::{ConfigError, HapticError};
pub use gesture::{DragEvent, HorizontalDragTracker};
pub use haptic::{HapticController, HapticFeedback, HapticFeedbackKind, NoHaptics};
pub use layout::{Alignment, BackgroundPlacement, SwipeComposition, SwipeView, compose};
pub use types::{Density, Dp, Scale, SwipeDirection, SwipeDirections, SwipeState};
