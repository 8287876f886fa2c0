// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout composer: place the revealed background and the translated content.
//!
//! A swiped card shows at most one background: moving right reveals the
//! right background on the leading edge, moving left reveals the left
//! background on the trailing edge. Backgrounds are only shown for permitted
//! directions. The content is always drawn last, shifted by the offset.
//!
//! [`compose`] is pure; [`SwipeComposition::render`] replays the result into a
//! host [`SwipeView`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_swipe::{
//!     Alignment, BackgroundPadding, Dp, Scale, SwipeDirection, SwipeDirections, compose,
//! };
//!
//! let layout = compose(
//!     -40.0,
//!     Rect::new(0.0, 0.0, 300.0, 80.0),
//!     BackgroundPadding::uniform(Dp(6.0)),
//!     SwipeDirections::all(),
//!     &Scale(1.0),
//! );
//! let background = layout.background.unwrap();
//! assert_eq!(background.direction, SwipeDirection::Left);
//! assert_eq!(background.reveal, Dp(40.0));
//! assert_eq!(background.alignment, Alignment::End);
//! assert_eq!(background.area, Rect::new(6.0, 0.0, 294.0, 80.0));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `trunc`
use kurbo::{Rect, Vec2};

use crate::config::BackgroundPadding;
use crate::types::{Density, Dp, SwipeDirection, SwipeDirections, SwipeState};

/// Horizontal placement of a background inside its area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Leading edge, vertically centered.
    Start,
    /// Trailing edge, vertically centered.
    End,
}

/// A background to draw behind the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundPlacement {
    /// Which background: [`SwipeDirection::Left`] or [`SwipeDirection::Right`].
    pub direction: SwipeDirection,
    /// How far the content has moved away, as a positive length.
    pub reveal: Dp,
    /// Area available to the background, in pixels.
    pub area: Rect,
    /// Placement within `area`.
    pub alignment: Alignment,
}

/// Result of [`compose`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeComposition {
    /// Background to draw, if the content is displaced in a permitted
    /// direction.
    pub background: Option<BackgroundPlacement>,
    /// Translation applied to the content, whole pixels on x.
    pub content_offset: Vec2,
}

/// Host drawing callbacks.
pub trait SwipeView {
    /// Draw the background revealed by a left swipe.
    fn left_background(&mut self, reveal: Dp, area: Rect, alignment: Alignment) {
        let _ = (reveal, area, alignment);
    }

    /// Draw the background revealed by a right swipe.
    fn right_background(&mut self, reveal: Dp, area: Rect, alignment: Alignment) {
        let _ = (reveal, area, alignment);
    }

    /// Draw the card content translated by `offset`.
    fn content(&mut self, state: SwipeState, direction: SwipeDirection, offset: Vec2);
}

/// Lay out a card inside `bounds` for the given offset.
pub fn compose(
    offset: f64,
    bounds: Rect,
    padding: BackgroundPadding,
    directions: SwipeDirections,
    density: &impl Density,
) -> SwipeComposition {
    let background = if offset > 0.0 && directions.permits(SwipeDirection::Right) {
        Some(placement(
            SwipeDirection::Right,
            offset,
            bounds,
            padding,
            Alignment::Start,
            density,
        ))
    } else if offset < 0.0 && directions.permits(SwipeDirection::Left) {
        Some(placement(
            SwipeDirection::Left,
            -offset,
            bounds,
            padding,
            Alignment::End,
            density,
        ))
    } else {
        None
    };

    SwipeComposition {
        background,
        content_offset: Vec2::new(offset.trunc(), 0.0),
    }
}

fn placement(
    direction: SwipeDirection,
    distance: f64,
    bounds: Rect,
    padding: BackgroundPadding,
    alignment: Alignment,
    density: &impl Density,
) -> BackgroundPlacement {
    let inset = density.to_px(padding.for_direction(direction));
    let mut area = Rect::new(bounds.x0 + inset, bounds.y0, bounds.x1 - inset, bounds.y1);
    if area.x0 > area.x1 {
        let center = bounds.center().x;
        area.x0 = center;
        area.x1 = center;
    }
    BackgroundPlacement {
        direction,
        reveal: density.to_dp(distance),
        area,
        alignment,
    }
}

impl SwipeComposition {
    /// Replay this layout into `view`, backgrounds first.
    pub fn render(&self, view: &mut impl SwipeView, state: SwipeState, direction: SwipeDirection) {
        if let Some(bg) = self.background {
            match bg.direction {
                SwipeDirection::Right => view.right_background(bg.reveal, bg.area, bg.alignment),
                SwipeDirection::Left => view.left_background(bg.reveal, bg.area, bg.alignment),
                SwipeDirection::None => {}
            }
        }
        view.content(state, direction, self.content_offset);
    }
}
