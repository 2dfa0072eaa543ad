// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dualplane Geometry: primitives and the point/line duality mapping.
//!
//! This crate defines the small, plain-old-data model that both views of a
//! duality session share:
//!
//! - [`DualLine`]: a line in slope/intercept form, `y = slope·x − intercept`
//!   (note the sign of the intercept; see below).
//! - [`Primitive`]: the sum type of drawable objects — point, segment,
//!   line, wedge — and the pure [`Primitive::dual`] mapping between them.
//! - Gesture classification ([`classify`], [`primitive_from_gesture`]):
//!   turning a completed press/release pair of plane points into a
//!   primitive, honoring the tap-vs-drag threshold and the current
//!   [`DrawMode`].
//! - Wedge geometry ([`wedge_shape`], [`line_span`]): the boundary
//!   endpoints, apex, and pair of shaded regions that render a wedge.
//!
//! ## The duality mapping
//!
//! A point `(a, b)` and the line `y = a·x − b` are duals of each other;
//! the mapping extends to segments, whose duals are wedges bounded by the
//! duals of the two endpoints:
//!
//! ```rust
//! use kurbo::Point;
//! use dualplane_geometry::{DualLine, Primitive};
//!
//! let point = Primitive::Point(Point::new(3.0, 4.0));
//! assert_eq!(point.dual(), Primitive::Line(DualLine::new(3.0, 4.0)));
//! // The mapping is an involution.
//! assert_eq!(point.dual().dual(), point);
//! ```
//!
//! ## Sign convention
//!
//! The intercept is the *negative* of the usual y-intercept: the line for
//! `DualLine { slope: a, intercept: b }` is `y = a·x − b`. This matches
//! the duality pairing `point(a, b) ↔ line(y = a·x − b)` and is used
//! consistently by every operation in this crate.
//!
//! ## Degeneracies
//!
//! Two inputs have no defined slope arithmetic and are reported as errors
//! instead of propagating NaN or infinity:
//! - A line-mode drag with equal start/end x ([`GestureError::VerticalLine`]);
//!   callers reject the gesture outright.
//! - Wedge boundaries that are parallel or horizontal
//!   ([`WedgeError`]); callers draw the wedge's boundary lines and skip
//!   the shaded regions.
//!
//! This crate is `no_std`.

#![no_std]

mod gesture;
mod line;
mod primitive;
mod wedge;

pub use gesture::{DRAG_THRESHOLD, DrawMode, Gesture, GestureError, classify, primitive_from_gesture};
pub use line::DualLine;
pub use primitive::Primitive;
pub use wedge::{CLIP_HALF_EXTENT, WedgeError, WedgeShape, line_span, wedge_shape};
