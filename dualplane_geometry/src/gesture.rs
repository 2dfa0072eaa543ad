// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::error::Error;
use core::fmt;

use kurbo::Point;

use crate::line::DualLine;
use crate::primitive::Primitive;

/// Default tap-vs-drag threshold, in plane units (Euclidean distance).
pub const DRAG_THRESHOLD: f64 = 0.1;

/// What a completed drag gesture draws.
///
/// The mode is a single session-global toggle read when a gesture
/// completes; it never affects primitives that already exist.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    /// Drags draw a segment (dual: a wedge).
    #[default]
    Segment,
    /// Drags draw an unbounded line (dual: a point).
    Line,
}

impl DrawMode {
    /// Returns the other mode.
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Segment => Self::Line,
            Self::Line => Self::Segment,
        }
    }
}

/// A completed pointer gesture, classified by travel distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gesture {
    /// Press and release within the threshold; carries the release point.
    Tap(Point),
    /// Press and release farther apart than the threshold.
    Drag {
        /// Plane point captured at press time.
        start: Point,
        /// Plane point captured at release time.
        end: Point,
    },
}

/// Why a gesture produced no primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureError {
    /// A line-mode drag whose endpoints share an x-coordinate; the slope
    /// is undefined, so the gesture is rejected and no state mutates.
    VerticalLine,
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VerticalLine => f.write_str("vertical drag has no defined slope"),
        }
    }
}

impl Error for GestureError {}

/// Classifies a press/release pair of plane points as a tap or a drag.
///
/// The distance metric is Euclidean in plane coordinates. A tap reports
/// the release position.
#[must_use]
pub fn classify(start: Point, end: Point, threshold: f64) -> Gesture {
    if start.distance(end) > threshold {
        Gesture::Drag { start, end }
    } else {
        Gesture::Tap(end)
    }
}

/// Constructs the primitive a completed gesture draws in its own view.
///
/// - A tap yields a [`Primitive::Point`] at the release position.
/// - A drag yields a [`Primitive::Segment`] in segment mode, or a
///   [`Primitive::Line`] through both endpoints in line mode.
///
/// The caller obtains the partner view's object via [`Primitive::dual`].
///
/// # Errors
///
/// A vertical drag in line mode is rejected with
/// [`GestureError::VerticalLine`]; callers must leave all state untouched.
pub fn primitive_from_gesture(
    start: Point,
    end: Point,
    mode: DrawMode,
    threshold: f64,
) -> Result<Primitive, GestureError> {
    match classify(start, end, threshold) {
        Gesture::Tap(at) => Ok(Primitive::Point(at)),
        Gesture::Drag { start, end } => match mode {
            DrawMode::Segment => Ok(Primitive::Segment(start, end)),
            DrawMode::Line => DualLine::through(start, end)
                .map(Primitive::Line)
                .ok_or(GestureError::VerticalLine),
        },
    }
}
