// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::line::DualLine;

/// A drawable object in one view of a duality session.
///
/// A primitive's variant and coordinates are fixed at construction; views
/// keep primitives in insertion order and never mutate them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A single plane point, rendered as a small disc.
    Point(Point),
    /// A line segment between two plane points.
    Segment(Point, Point),
    /// An unbounded line in slope/intercept form.
    Line(DualLine),
    /// The region between two lines: a pair of opposing areas meeting at
    /// the lines' intersection.
    Wedge(DualLine, DualLine),
}

impl Primitive {
    /// Returns the dual of this primitive.
    ///
    /// The pairing is `point(a, b) ↔ line(y = a·x − b)`, extended to
    /// segments: each endpoint, read as a (slope, intercept) pair, becomes
    /// one boundary line of the dual wedge. The mapping is a pure function
    /// and an involution.
    #[must_use]
    pub fn dual(&self) -> Self {
        match *self {
            Self::Point(p) => Self::Line(DualLine::new(p.x, p.y)),
            Self::Line(line) => Self::Point(Point::new(line.slope, line.intercept)),
            Self::Segment(p, q) => {
                Self::Wedge(DualLine::new(p.x, p.y), DualLine::new(q.x, q.y))
            }
            Self::Wedge(l1, l2) => Self::Segment(
                Point::new(l1.slope, l1.intercept),
                Point::new(l2.slope, l2.intercept),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::Primitive;
    use crate::line::DualLine;

    #[test]
    fn point_dualizes_to_line() {
        let point = Primitive::Point(Point::new(3.0, 4.0));
        assert_eq!(point.dual(), Primitive::Line(DualLine::new(3.0, 4.0)));
    }

    #[test]
    fn segment_dualizes_to_wedge_of_endpoint_lines() {
        let segment = Primitive::Segment(Point::new(1.0, 2.0), Point::new(-0.5, 0.25));
        let dual = segment.dual();
        assert_eq!(
            dual,
            Primitive::Wedge(DualLine::new(1.0, 2.0), DualLine::new(-0.5, 0.25))
        );
    }

    #[test]
    fn duality_is_an_involution() {
        let primitives = [
            Primitive::Point(Point::new(3.0, 4.0)),
            Primitive::Segment(Point::new(0.0, 0.0), Point::new(2.0, 4.0)),
            Primitive::Line(DualLine::new(-1.5, 0.5)),
            Primitive::Wedge(DualLine::new(1.0, 0.0), DualLine::new(2.0, 1.0)),
        ];
        for p in primitives {
            assert_eq!(p.dual().dual(), p);
        }
    }
}
