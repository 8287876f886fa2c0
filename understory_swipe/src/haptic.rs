// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic notifier: one vibration pulse per completed swipe.

use crate::error::HapticError;

/// Style of vibration requested from the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HapticFeedbackKind {
    /// The pulse a platform uses to acknowledge a long press.
    LongPress,
}

/// Platform vibration API.
pub trait HapticFeedback {
    /// Perform one vibration pulse.
    fn perform_haptic_feedback(&mut self, kind: HapticFeedbackKind) -> Result<(), HapticError>;
}

impl<P: HapticFeedback + ?Sized> HapticFeedback for &mut P {
    fn perform_haptic_feedback(&mut self, kind: HapticFeedbackKind) -> Result<(), HapticError> {
        (**self).perform_haptic_feedback(kind)
    }
}

/// Platform without vibration support.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn perform_haptic_feedback(&mut self, _kind: HapticFeedbackKind) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Gate in front of a [`HapticFeedback`] platform.
#[derive(Clone, Debug)]
pub struct HapticController<P> {
    platform: P,
    enabled: bool,
}

impl<P: HapticFeedback> HapticController<P> {
    /// Wrap `platform`; pulses are only sent when `enabled`.
    pub fn new(platform: P, enabled: bool) -> Self {
        Self { platform, enabled }
    }

    /// Returns `true` if pulses are sent.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn pulses on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Access the platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Send one long-press pulse if enabled.
    ///
    /// Platform failures are logged and dropped.
    pub fn perform_haptic_feedback(&mut self) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self
            .platform
            .perform_haptic_feedback(HapticFeedbackKind::LongPress)
        {
            log::debug!("haptic feedback dropped: {err}");
        }
    }
}
