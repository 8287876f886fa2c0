// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;

use thiserror::Error;

/// A [`SwipeConfig`](crate::SwipeConfig) value outside its valid range.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A value that must be strictly positive and finite was not.
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A padding was negative or not finite.
    #[error("background padding must be non-negative and finite, got {value}")]
    InvalidPadding {
        /// The rejected value, in dp.
        value: f64,
    },
}

/// Failure reported by a [`HapticFeedback`](crate::HapticFeedback) platform.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HapticError {
    /// The device has no vibration hardware or the host exposes none.
    #[error("haptic feedback is not supported on this platform")]
    Unsupported,
    /// The platform refused or failed the request.
    #[error("haptic feedback failed: {0}")]
    Platform(String),
}
