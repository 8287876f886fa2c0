// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe card component: one instance per card, owning its controllers.
//!
//! [`SwipeCard`] wires the pieces together:
//!
//! - drag start goes to the [`SwipeController`];
//! - drag moves are divided by the resistance, clamped by the controller to
//!   `threshold × limit multiplier`, and snapped onto the offset;
//! - drag end asks the controller whether the swipe completed, pulses the
//!   haptic notifier if it did, and springs the offset back to zero;
//! - [`SwipeCard::advance`] steps the spring once per frame and forgets the
//!   in-drag direction once it has settled.

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::Rect;

use crate::animation::{AnimationController, Settle};
use crate::config::SwipeConfig;
use crate::controller::{DragEnd, SwipeController, SwipeHandler, sanitize_bound};
use crate::error::ConfigError;
use crate::gesture::DragEvent;
use crate::haptic::{HapticController, HapticFeedback, NoHaptics};
use crate::layout::{SwipeComposition, SwipeView, compose};
use crate::types::{Density, Dp, Scale, SwipeDirection, SwipeState};

type ThresholdFn = Box<dyn Fn(Dp) -> Dp>;

/// A swipeable card.
pub struct SwipeCard<H, P = NoHaptics> {
    config: SwipeConfig,
    swipe: SwipeController<H>,
    animation: AnimationController,
    haptics: HapticController<P>,
    density: Scale,
    dynamic_threshold: Option<ThresholdFn>,
}

impl<H: SwipeHandler> SwipeCard<H> {
    /// Create a card without haptic feedback.
    pub fn new(config: SwipeConfig, handler: H) -> Result<Self, ConfigError> {
        Self::with_haptics(config, handler, NoHaptics)
    }
}

impl<H: SwipeHandler, P: HapticFeedback> SwipeCard<H, P> {
    /// Create a card that vibrates through `haptics` when a swipe completes.
    pub fn with_haptics(config: SwipeConfig, handler: H, haptics: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            swipe: SwipeController::new(handler, config.swipe_directions),
            animation: AnimationController::new(config.spring()),
            haptics: HapticController::new(haptics, config.vibration_enabled),
            density: Scale::default(),
            dynamic_threshold: None,
            config,
        })
    }

    /// Remap the configured threshold, e.g. to scale it with the card width.
    pub fn with_dynamic_threshold(mut self, f: impl Fn(Dp) -> Dp + 'static) -> Self {
        self.dynamic_threshold = Some(Box::new(f));
        self
    }

    /// Set the pixels-per-dp scale used for thresholds and reported lengths.
    pub fn with_density(mut self, density: Scale) -> Self {
        self.density = density;
        self
    }

    /// Update the pixels-per-dp scale.
    pub fn set_density(&mut self, density: Scale) {
        self.density = density;
    }

    /// Current density.
    pub fn density(&self) -> Scale {
        self.density
    }

    /// The configuration the card was built with.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Completion threshold in pixels, after the dynamic remapping.
    ///
    /// Never negative or NaN: a remapping or density that produces a negative
    /// length counts by magnitude, and NaN becomes zero.
    pub fn threshold_px(&self) -> f64 {
        let threshold = match &self.dynamic_threshold {
            Some(f) => f(self.config.swipe_threshold),
            None => self.config.swipe_threshold,
        };
        sanitize_bound(self.density.to_px(threshold))
    }

    /// Bound the offset is clamped to while dragging, in pixels.
    ///
    /// Sanitized like [`threshold_px`](Self::threshold_px).
    pub fn limit_px(&self) -> f64 {
        sanitize_bound(self.threshold_px() * self.config.swipe_limit_multiplier)
    }

    /// Returns `true` if gesture input is accepted.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Accept or ignore gesture input.
    ///
    /// Disabling in the middle of a drag releases the card: it springs back
    /// to rest without completing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled == enabled {
            return;
        }
        self.config.enabled = enabled;
        if !enabled && self.swipe.is_dragging() {
            log::debug!("swipe card disabled mid-drag; releasing");
            // A cancelled end keeps the controller consistent for the next drag.
            let threshold = self.threshold_px();
            self.swipe.on_drag_end(0.0, threshold);
            self.animation.settle();
        }
    }

    /// Returns `true` if completed swipes send a haptic pulse.
    pub fn is_vibration_enabled(&self) -> bool {
        self.haptics.is_enabled()
    }

    /// Turn the completion pulse on or off.
    pub fn set_vibration_enabled(&mut self, enabled: bool) {
        self.config.vibration_enabled = enabled;
        self.haptics.set_enabled(enabled);
    }

    /// Dispatch one drag event.
    pub fn handle(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start => self.on_drag_start(),
            DragEvent::Move { delta, velocity } => self.on_drag(delta, velocity),
            DragEvent::End => {
                self.on_drag_end();
            }
        }
    }

    /// A drag began.
    pub fn on_drag_start(&mut self) {
        if !self.config.enabled {
            return;
        }
        self.swipe.on_drag_start();
    }

    /// The pointer moved by `delta` pixels at `velocity` pixels per second.
    pub fn on_drag(&mut self, delta: f64, velocity: f64) {
        if !self.config.enabled {
            return;
        }
        let adjusted = delta / self.config.resistance;
        let limit = self.limit_px();
        if let Some(offset) = self.swipe.on_horizontal_drag(
            adjusted,
            self.animation.offset(),
            limit,
            &self.density,
            velocity,
        ) {
            self.animation.snap(offset);
        }
    }

    /// The drag ended. Starts the spring back to rest.
    pub fn on_drag_end(&mut self) -> DragEnd {
        if !self.config.enabled {
            return DragEnd::Ignored;
        }
        let offset = self.animation.offset();
        let threshold = self.threshold_px();
        let outcome = self.swipe.on_drag_end(offset, threshold);
        if outcome == DragEnd::Ignored {
            return outcome;
        }
        if offset.abs() > threshold {
            self.haptics.perform_haptic_feedback();
        }
        self.animation.settle();
        outcome
    }

    /// Step the release spring by `dt`. Returns `true` while still moving.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.animation.advance(dt) {
            Settle::Idle => false,
            Settle::Running => true,
            Settle::Settled(_) => {
                log::trace!("swipe card settled");
                self.swipe.reset_direction();
                false
            }
        }
    }

    /// Live offset in pixels.
    pub fn offset(&self) -> f64 {
        self.animation.offset()
    }

    /// Returns `true` while the card is springing back.
    pub fn is_settling(&self) -> bool {
        self.animation.is_settling()
    }

    /// Visible swipe state.
    pub fn swipe_state(&self) -> SwipeState {
        self.swipe.current_swipe_state()
    }

    /// Direction to render content for.
    pub fn effective_direction(&self) -> SwipeDirection {
        self.swipe.effective_direction()
    }

    /// The state machine.
    pub fn controller(&self) -> &SwipeController<H> {
        &self.swipe
    }

    /// Shared access to the host handler.
    pub fn handler(&self) -> &H {
        self.swipe.handler()
    }

    /// Exclusive access to the host handler.
    pub fn handler_mut(&mut self) -> &mut H {
        self.swipe.handler_mut()
    }

    /// Lay out the card inside `bounds` at the current offset.
    pub fn compose(&self, bounds: Rect) -> SwipeComposition {
        compose(
            self.animation.offset(),
            bounds,
            self.config.background_padding,
            self.config.swipe_directions,
            &self.density,
        )
    }

    /// Lay out the card and draw it into `view`.
    pub fn render(&self, bounds: Rect, view: &mut impl SwipeView) {
        self.compose(bounds)
            .render(view, self.swipe_state(), self.effective_direction());
    }
}

impl<H: fmt::Debug, P: fmt::Debug> fmt::Debug for SwipeCard<H, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCard")
            .field("config", &self.config)
            .field("swipe", &self.swipe)
            .field("animation", &self.animation)
            .field("haptics", &self.haptics)
            .field("density", &self.density)
            .field("dynamic_threshold", &self.dynamic_threshold.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HapticError;
    use crate::haptic::HapticFeedbackKind;
    use alloc::vec;
    use alloc::vec::Vec;

    const FRAME: Duration = Duration::from_millis(16);

    #[derive(Debug, Default)]
    struct Completions(Vec<SwipeDirection>);

    impl SwipeHandler for Completions {
        fn on_swipe_complete(&mut self, direction: SwipeDirection) {
            self.0.push(direction);
        }
    }

    #[derive(Debug, Default)]
    struct Pulses(usize);

    impl HapticFeedback for Pulses {
        fn perform_haptic_feedback(&mut self, _: HapticFeedbackKind) -> Result<(), HapticError> {
            self.0 += 1;
            Ok(())
        }
    }

    fn settle(card: &mut SwipeCard<Completions, Pulses>) {
        for _ in 0..10_000 {
            if !card.advance(FRAME) {
                return;
            }
        }
        panic!("card never settled");
    }

    fn card(config: SwipeConfig) -> SwipeCard<Completions, Pulses> {
        SwipeCard::with_haptics(config, Completions::default(), Pulses::default()).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = SwipeCard::new(SwipeConfig::default().with_resistance(-1.0), Completions::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "resistance", .. }));
    }

    #[test]
    fn resistance_divides_drag_delta() {
        let mut card = card(SwipeConfig::default().with_resistance(2.0));
        card.on_drag_start();
        card.on_drag(50.0, 0.0);
        assert_eq!(card.offset(), 25.0);
    }

    #[test]
    fn completion_pulses_haptics_once() {
        let mut card = card(SwipeConfig::default());
        card.on_drag_start();
        card.on_drag(130.0, 0.0);
        assert_eq!(card.on_drag_end(), DragEnd::Completed(SwipeDirection::Right));
        assert_eq!(card.haptics.platform().0, 1);
        assert!(card.is_settling());

        settle(&mut card);
        assert_eq!(card.offset(), 0.0);
        assert_eq!(card.handler().0, vec![SwipeDirection::Right]);
    }

    #[test]
    fn vibration_disabled_sends_no_pulse() {
        let mut card = card(SwipeConfig::default().with_vibration(false));
        card.on_drag_start();
        card.on_drag(-130.0, 0.0);
        card.on_drag_end();
        assert_eq!(card.haptics.platform().0, 0);
        assert_eq!(card.handler().0, vec![SwipeDirection::Left]);
    }

    #[test]
    fn cancelled_drag_settles_without_pulse() {
        let mut card = card(SwipeConfig::default());
        card.on_drag_start();
        card.on_drag(40.0, 0.0);
        assert_eq!(card.on_drag_end(), DragEnd::Cancelled);
        assert_eq!(card.haptics.platform().0, 0);
        assert!(card.is_settling());
        settle(&mut card);
        assert_eq!(card.offset(), 0.0);
    }

    #[test]
    fn density_scales_threshold() {
        let mut card = card(SwipeConfig::default()).with_density(Scale(2.0));
        assert_eq!(card.threshold_px(), 200.0);
        assert_eq!(card.limit_px(), 300.0);

        card.on_drag_start();
        card.on_drag(150.0, 0.0);
        assert_eq!(card.on_drag_end(), DragEnd::Cancelled);
    }

    #[test]
    fn dynamic_threshold_remaps_configured_value() {
        let mut card = card(SwipeConfig::default()).with_dynamic_threshold(|t| t * 0.5);
        assert_eq!(card.threshold_px(), 50.0);
        card.on_drag_start();
        card.on_drag(60.0, 0.0);
        assert_eq!(card.on_drag_end(), DragEnd::Completed(SwipeDirection::Right));
    }

    #[test]
    fn disabled_card_ignores_input() {
        let mut card = card(SwipeConfig::default().with_enabled(false));
        card.on_drag_start();
        card.on_drag(150.0, 0.0);
        assert_eq!(card.offset(), 0.0);
        assert_eq!(card.on_drag_end(), DragEnd::Ignored);
        assert!(card.handler().0.is_empty());
    }

    #[test]
    fn disabling_mid_drag_releases_the_card() {
        let mut card = card(SwipeConfig::default());
        card.on_drag_start();
        card.on_drag(140.0, 0.0);
        card.set_enabled(false);

        assert!(!card.controller().is_dragging());
        assert!(card.is_settling());
        assert!(card.handler().0.is_empty());
        settle(&mut card);
        assert_eq!(card.offset(), 0.0);
    }

    #[test]
    fn new_drag_interrupts_settle() {
        let mut card = card(SwipeConfig::default());
        card.on_drag_start();
        card.on_drag(140.0, 0.0);
        card.on_drag_end();
        card.advance(FRAME);
        let mid_settle = card.offset();

        card.on_drag_start();
        card.on_drag(5.0, 0.0);
        assert!(!card.is_settling());
        assert_eq!(card.offset(), mid_settle + 5.0);
    }

    #[test]
    fn settle_resets_direction() {
        let mut card = card(SwipeConfig::default());
        card.on_drag_start();
        card.on_drag(-20.0, 0.0);
        assert_eq!(card.controller().current_direction(), SwipeDirection::Left);
        card.on_drag_end();
        settle(&mut card);
        assert_eq!(card.controller().current_direction(), SwipeDirection::None);
    }

    #[test]
    fn vibration_can_be_toggled_after_construction() {
        let mut card = card(SwipeConfig::default());
        card.set_vibration_enabled(false);
        assert!(!card.is_vibration_enabled());
        assert!(!card.config().vibration_enabled);
        card.on_drag_start();
        card.on_drag(130.0, 0.0);
        card.on_drag_end();
        assert_eq!(card.haptics.platform().0, 0);
        settle(&mut card);

        card.set_vibration_enabled(true);
        assert!(card.config().vibration_enabled);
        card.on_drag_start();
        card.on_drag(-130.0, 0.0);
        card.on_drag_end();
        assert_eq!(card.haptics.platform().0, 1);
        assert_eq!(
            card.handler().0,
            vec![SwipeDirection::Right, SwipeDirection::Left]
        );
    }

    /// Drives `card` through a drag in both directions and checks that the
    /// offset stays finite and inside the card's own limit.
    fn drag_stays_bounded(mut card: SwipeCard<Completions, Pulses>) {
        let limit = card.limit_px();
        assert!(limit >= 0.0, "limit {limit} is negative or NaN");
        assert!(card.threshold_px() >= 0.0);

        for deltas in [[10.0, 80.0, 300.0], [-10.0, -80.0, -300.0]] {
            card.on_drag_start();
            for delta in deltas {
                card.on_drag(delta, 0.0);
                let offset = card.offset();
                assert!(offset.is_finite(), "offset {offset} is not finite");
                assert!(offset.abs() <= limit, "offset {offset} escaped {limit}");
            }
            card.on_drag_end();
            settle(&mut card);
            assert_eq!(card.offset(), 0.0);
        }
    }

    #[test]
    fn degenerate_dynamic_threshold_keeps_offset_bounded() {
        let remapped = |f: fn(Dp) -> Dp| card(SwipeConfig::default()).with_dynamic_threshold(f);
        drag_stays_bounded(remapped(|t| t * -1.0));
        drag_stays_bounded(remapped(|_| Dp::ZERO));
        drag_stays_bounded(remapped(|_| Dp(f64::NAN)));
    }

    #[test]
    fn degenerate_density_keeps_offset_bounded() {
        for scale in [0.0, -2.0, f64::NAN] {
            drag_stays_bounded(card(SwipeConfig::default()).with_density(Scale(scale)));
        }
    }

    #[test]
    fn negative_threshold_still_requires_distance() {
        let mut card = card(SwipeConfig::default()).with_dynamic_threshold(|t| t * -1.0);
        assert_eq!(card.threshold_px(), 100.0);
        assert_eq!(card.limit_px(), 150.0);

        card.on_drag_start();
        card.on_drag(40.0, 0.0);
        assert_eq!(card.on_drag_end(), DragEnd::Cancelled);
        settle(&mut card);

        card.on_drag_start();
        card.on_drag(-400.0, 0.0);
        assert_eq!(card.offset(), -150.0);
        assert_eq!(card.on_drag_end(), DragEnd::Completed(SwipeDirection::Left));
    }

    #[test]
    fn nan_density_pins_card_at_rest() {
        let mut card = card(SwipeConfig::default()).with_density(Scale(f64::NAN));
        assert_eq!(card.threshold_px(), 0.0);
        assert_eq!(card.limit_px(), 0.0);
        card.on_drag_start();
        card.on_drag(10.0, 0.0);
        assert_eq!(card.offset(), 0.0);
        assert_eq!(card.on_drag_end(), DragEnd::Cancelled);
        assert!(card.handler().0.is_empty());
    }
}
