// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types shared by the swipe controllers.

use core::ops::{Add, Mul, Neg, Sub};

use bitflags::bitflags;

/// Direction of an in-progress or just-completed swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// No swipe.
    #[default]
    None,
    /// Content moved towards negative x.
    Left,
    /// Content moved towards positive x.
    Right,
}

impl SwipeDirection {
    /// Direction implied by the sign of a horizontal offset.
    ///
    /// Strictly positive is [`Right`](Self::Right); zero and negative are
    /// [`Left`](Self::Left).
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 { Self::Right } else { Self::Left }
    }

    /// The single-member [`SwipeDirections`] set for this direction.
    ///
    /// [`None`](Self::None) maps to the empty set.
    pub fn as_set(self) -> SwipeDirections {
        match self {
            Self::None => SwipeDirections::empty(),
            Self::Left => SwipeDirections::LEFT,
            Self::Right => SwipeDirections::RIGHT,
        }
    }
}

/// Lifecycle phase of a single drag interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeState {
    /// A drag has begun and no movement has been reported yet.
    Start,
    /// The first movement of the current drag has been reported.
    Swiping,
    /// The last drag ended past the threshold.
    End,
    /// The drag ended short of the threshold.
    Cancelled,
}

bitflags! {
    /// Set of directions a card may be swiped in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SwipeDirections: u8 {
        /// Swiping towards negative x.
        const LEFT = 1 << 0;
        /// Swiping towards positive x.
        const RIGHT = 1 << 1;
    }
}

impl SwipeDirections {
    /// Returns `true` if `direction` is permitted.
    ///
    /// [`SwipeDirection::None`] is never permitted.
    pub fn permits(self, direction: SwipeDirection) -> bool {
        let set = direction.as_set();
        !set.is_empty() && self.contains(set)
    }
}

impl Default for SwipeDirections {
    fn default() -> Self {
        Self::all()
    }
}

/// Density-independent length.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Self = Self(0.0);

    /// Underlying value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Add for Dp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Dp {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

/// Conversion between physical pixels and [`Dp`].
///
/// Supplied by the host environment; [`Scale`] covers the usual case of a
/// single scale factor.
pub trait Density {
    /// Convert a length to pixels.
    fn to_px(&self, dp: Dp) -> f64;

    /// Convert pixels to a length.
    fn to_dp(&self, px: f64) -> Dp;
}

/// Density given by a plain pixels-per-dp scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(pub f64);

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Density for Scale {
    fn to_px(&self, dp: Dp) -> f64 {
        dp.0 * self.0
    }

    fn to_dp(&self, px: f64) -> Dp {
        if self.0 == 0.0 {
            Dp::ZERO
        } else {
            Dp(px / self.0)
        }
    }
}

impl<D: Density + ?Sized> Density for &D {
    fn to_px(&self, dp: Dp) -> f64 {
        (**self).to_px(dp)
    }

    fn to_dp(&self, px: f64) -> Dp {
        (**self).to_dp(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_offset_treats_zero_as_left() {
        assert_eq!(SwipeDirection::from_offset(0.1), SwipeDirection::Right);
        assert_eq!(SwipeDirection::from_offset(0.0), SwipeDirection::Left);
        assert_eq!(SwipeDirection::from_offset(-3.0), SwipeDirection::Left);
    }

    #[test]
    fn permits_never_includes_none() {
        assert!(SwipeDirections::all().permits(SwipeDirection::Left));
        assert!(SwipeDirections::all().permits(SwipeDirection::Right));
        assert!(!SwipeDirections::all().permits(SwipeDirection::None));
        assert!(!SwipeDirections::RIGHT.permits(SwipeDirection::Left));
        assert!(!SwipeDirections::empty().permits(SwipeDirection::Right));
    }

    #[test]
    fn default_directions_are_both() {
        assert_eq!(
            SwipeDirections::default(),
            SwipeDirections::LEFT | SwipeDirections::RIGHT
        );
    }

    #[test]
    fn scale_round_trips_lengths() {
        let density = Scale(2.5);
        assert_eq!(density.to_px(Dp(100.0)), 250.0);
        assert_eq!(density.to_dp(250.0), Dp(100.0));
    }

    #[test]
    fn zero_scale_maps_pixels_to_zero() {
        assert_eq!(Scale(0.0).to_dp(40.0), Dp::ZERO);
    }
}
