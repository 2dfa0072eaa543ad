// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::error::Error;
use core::fmt;

use kurbo::Point;

use crate::line::DualLine;

/// Half-extent of the fixed drawing window used to clip unbounded lines,
/// in plane units.
///
/// Line and wedge boundaries are drawn between their crossings of
/// `y = ±CLIP_HALF_EXTENT` (or `x = ±CLIP_HALF_EXTENT` for horizontal
/// lines), far outside any reachable pan/zoom window.
pub const CLIP_HALF_EXTENT: f64 = 200.0;

/// Why a wedge has no shadable regions.
///
/// The wedge primitive itself is always constructible (duality is total);
/// these cases only make the *shaded regions* undefined. Callers draw the
/// boundary lines and skip the fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WedgeError {
    /// The boundary lines have equal slope, so they never intersect and
    /// there is no apex.
    ParallelBoundaries,
    /// A boundary line is horizontal, so it never crosses the clip
    /// window's top or bottom edge.
    HorizontalBoundary,
}

impl fmt::Display for WedgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParallelBoundaries => f.write_str("wedge boundaries are parallel"),
            Self::HorizontalBoundary => f.write_str("wedge boundary is horizontal"),
        }
    }
}

impl Error for WedgeError {}

/// The renderable geometry of a wedge: boundary endpoints, apex, and the
/// two shaded regions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WedgeShape {
    /// First boundary's crossing of the bottom clip edge.
    pub bottom1: Point,
    /// First boundary's crossing of the top clip edge.
    pub top1: Point,
    /// Second boundary's crossing of the bottom clip edge.
    pub bottom2: Point,
    /// Second boundary's crossing of the top clip edge.
    pub top2: Point,
    /// Intersection of the two boundary lines.
    pub apex: Point,
    /// The two opposing triangular regions to shade, each ending at the
    /// apex.
    pub regions: [[Point; 3]; 2],
}

/// Returns the clip-window endpoints of a line, for rendering.
///
/// Non-horizontal lines are spanned between their crossings of the bottom
/// and top clip edges (in that order). Horizontal lines never cross those
/// edges and are spanned between the left and right clip edges instead.
#[must_use]
pub fn line_span(line: DualLine) -> (Point, Point) {
    match (line.x_at(-CLIP_HALF_EXTENT), line.x_at(CLIP_HALF_EXTENT)) {
        (Some(bottom_x), Some(top_x)) => (
            Point::new(bottom_x, -CLIP_HALF_EXTENT),
            Point::new(top_x, CLIP_HALF_EXTENT),
        ),
        _ => {
            let y = line.y_at(0.0);
            (
                Point::new(-CLIP_HALF_EXTENT, y),
                Point::new(CLIP_HALF_EXTENT, y),
            )
        }
    }
}

/// Computes the renderable geometry of the wedge bounded by two lines.
///
/// The region pair depends on the boundary slopes: when the slopes have
/// strictly opposite signs the regions are `{bottom₁, top₂, apex}` and
/// `{top₁, bottom₂, apex}`; otherwise they are `{top₁, top₂, apex}` and
/// `{bottom₁, bottom₂, apex}`. This pairing selects which opposing pair of
/// areas between the lines represents the dual of a segment, and must not
/// be altered.
///
/// # Errors
///
/// Parallel boundaries have no apex and horizontal boundaries no clip-edge
/// crossings; both are reported as [`WedgeError`] before any arithmetic
/// that would produce NaN or infinity.
pub fn wedge_shape(line1: DualLine, line2: DualLine) -> Result<WedgeShape, WedgeError> {
    if line1.slope == line2.slope {
        return Err(WedgeError::ParallelBoundaries);
    }
    if line1.is_horizontal() || line2.is_horizontal() {
        return Err(WedgeError::HorizontalBoundary);
    }

    let (bottom1, top1) = line_span(line1);
    let (bottom2, top2) = line_span(line2);
    let apex = line1
        .intersect(&line2)
        .expect("non-parallel boundaries intersect");

    let opposite = (line1.slope < 0.0 && line2.slope > 0.0)
        || (line2.slope < 0.0 && line1.slope > 0.0);
    let regions = if opposite {
        [[bottom1, top2, apex], [top1, bottom2, apex]]
    } else {
        [[top1, top2, apex], [bottom1, bottom2, apex]]
    };

    Ok(WedgeShape {
        bottom1,
        top1,
        bottom2,
        top2,
        apex,
        regions,
    })
}
