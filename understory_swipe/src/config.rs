// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe card configuration.

use understory_spring::{SpringConfig, damping_ratio};

use crate::error::ConfigError;
use crate::types::{Dp, SwipeDirection, SwipeDirections};

/// Horizontal inset applied to the background area, one value per side.
///
/// `left` applies to the left background (revealed while swiping left) and
/// `right` to the right background. Each value insets both horizontal edges of
/// the area of its background.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundPadding {
    /// Inset used for the left background.
    pub left: Dp,
    /// Inset used for the right background.
    pub right: Dp,
}

impl BackgroundPadding {
    /// Same inset for both backgrounds.
    pub const fn uniform(value: Dp) -> Self {
        Self {
            left: value,
            right: value,
        }
    }

    /// Inset for the background revealed by a swipe in `direction`.
    pub fn for_direction(&self, direction: SwipeDirection) -> Dp {
        match direction {
            SwipeDirection::Left => self.left,
            SwipeDirection::Right => self.right,
            SwipeDirection::None => Dp::ZERO,
        }
    }
}

impl Default for BackgroundPadding {
    fn default() -> Self {
        Self::uniform(Dp(6.0))
    }
}

/// Options recognized by [`SwipeCard`](crate::SwipeCard).
///
/// The dynamic threshold is not part of the configuration; install it with
/// [`SwipeCard::with_dynamic_threshold`](crate::SwipeCard::with_dynamic_threshold).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Distance the card must be dragged to complete a swipe.
    pub swipe_threshold: Dp,
    /// Divisor applied to raw drag deltas. Values above 1 make the card lag
    /// behind the pointer.
    pub resistance: f64,
    /// Stiffness of the release spring.
    pub spring_stiffness: f64,
    /// Damping ratio of the release spring.
    pub damping_ratio: f64,
    /// Multiple of the threshold the card may travel before it is clamped.
    pub swipe_limit_multiplier: f64,
    /// Inset of the background area.
    pub background_padding: BackgroundPadding,
    /// Vibrate when a swipe completes.
    pub vibration_enabled: bool,
    /// Directions the card may move in.
    pub swipe_directions: SwipeDirections,
    /// Accept gesture input at all.
    pub enabled: bool,
}

impl SwipeConfig {
    /// Configuration with every option at its default.
    pub const DEFAULT: Self = Self {
        swipe_threshold: Dp(100.0),
        resistance: 1.0,
        spring_stiffness: 500.0,
        damping_ratio: damping_ratio::MEDIUM_BOUNCY,
        swipe_limit_multiplier: 1.5,
        background_padding: BackgroundPadding::uniform(Dp(6.0)),
        vibration_enabled: true,
        swipe_directions: SwipeDirections::all(),
        enabled: true,
    };

    /// Set the completion threshold.
    pub fn with_swipe_threshold(mut self, threshold: Dp) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Set the drag resistance.
    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    /// Set the release spring.
    pub fn with_spring(mut self, damping_ratio: f64, stiffness: f64) -> Self {
        self.damping_ratio = damping_ratio;
        self.spring_stiffness = stiffness;
        self
    }

    /// Set the overshoot allowance.
    pub fn with_swipe_limit_multiplier(mut self, multiplier: f64) -> Self {
        self.swipe_limit_multiplier = multiplier;
        self
    }

    /// Set the background inset.
    pub fn with_background_padding(mut self, padding: BackgroundPadding) -> Self {
        self.background_padding = padding;
        self
    }

    /// Enable or disable vibration on completion.
    pub fn with_vibration(mut self, enabled: bool) -> Self {
        self.vibration_enabled = enabled;
        self
    }

    /// Restrict the permitted directions.
    pub fn with_swipe_directions(mut self, directions: SwipeDirections) -> Self {
        self.swipe_directions = directions;
        self
    }

    /// Enable or disable gesture input.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The release spring described by this configuration.
    pub fn spring(&self) -> SpringConfig {
        SpringConfig::new(self.damping_ratio, self.spring_stiffness)
    }

    /// Check every numeric option against its valid range.
    ///
    /// A multiplier of 1 or less is accepted, though it clamps the card at
    /// or below the threshold so swipes can never complete.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("swipe_threshold", self.swipe_threshold.get())?;
        positive("resistance", self.resistance)?;
        positive("spring_stiffness", self.spring_stiffness)?;
        positive("damping_ratio", self.damping_ratio)?;
        positive("swipe_limit_multiplier", self.swipe_limit_multiplier)?;
        for value in [
            self.background_padding.left.get(),
            self.background_padding.right.get(),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPadding { value });
            }
        }
        Ok(())
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
