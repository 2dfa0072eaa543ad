// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dualplane Imaging: the drawing contract between the core and its host.
//!
//! The duality engine is headless: it never talks to a window system or a
//! DOM. Everything it needs from a rendering host is the small set of
//! operations in the [`Surface`] trait — clear, stroke/fill color state,
//! and three draw shapes (line, filled polygon, filled disc). A host
//! provides one `Surface` per view and invokes the engine's render pass
//! once per display refresh.
//!
//! # Position in the stack
//!
//! - **Session / views**: gesture handling, the primitive sequences, and
//!   the per-frame render pass live in `dualplane_session`.
//! - **Drawing contract (this crate)**: the [`Surface`] trait and the
//!   [`SurfaceOp`] POD mirror of its operations.
//! - **Hosts**: concrete surfaces such as the browser canvas backend
//!   (`dualplane_imaging_web_canvas`) or the recording surface used by
//!   tests (`dualplane_imaging_ref`).
//!
//! # Core concepts
//!
//! - **Color state**: stroke and fill colors are surface state, set before
//!   the draw calls that use them, mirroring immediate-mode canvas APIs.
//! - **Operations**: every trait method has a [`SurfaceOp`] counterpart so
//!   that op sequences can be recorded, compared in tests, and replayed
//!   through [`Surface::apply`].
//!
//! # Example
//!
//! ```rust
//! use dualplane_imaging::{Color, Surface, SurfaceOp};
//! use kurbo::Point;
//!
//! fn draw_marker<S: Surface>(surface: &mut S, at: Point) {
//!     surface.set_fill(Color::BLACK);
//!     surface.fill_disc(at, 5.0);
//! }
//!
//! // The same drawing, as replayable data.
//! let ops = [
//!     SurfaceOp::SetFill(Color::BLACK),
//!     SurfaceOp::Disc { center: Point::new(10.0, 20.0), radius: 5.0 },
//! ];
//! # let _ = ops;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;

use kurbo::Point;

pub use peniko::Color;

/// A drawing operation, as plain data.
///
/// Each variant mirrors one [`Surface`] method. Recorded sequences can be
/// replayed onto any surface with [`Surface::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Fill the whole surface with a color, discarding prior content.
    Clear(Color),
    /// Set the color used by subsequent line strokes.
    SetStroke(Color),
    /// Set the color used by subsequent polygon and disc fills.
    SetFill(Color),
    /// Stroke a straight line between two surface points.
    Line {
        /// Start of the line, in surface pixels.
        from: Point,
        /// End of the line, in surface pixels.
        to: Point,
    },
    /// Fill the polygon spanned by a vertex list, in surface pixels.
    Polygon(Box<[Point]>),
    /// Fill a disc, in surface pixels.
    Disc {
        /// Center of the disc.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
}

/// A rendering surface for one view.
///
/// Implementations own whatever pixels or draw lists back the view; the
/// engine only issues these operations, once per frame, in order. All
/// coordinates are surface pixels (the engine maps plane geometry through
/// its viewport before drawing).
pub trait Surface {
    /// Fills the whole surface with `color`, discarding prior content.
    fn clear(&mut self, color: Color);

    /// Sets the color used by subsequent [`Surface::draw_line`] calls.
    fn set_stroke(&mut self, color: Color);

    /// Sets the color used by subsequent fills.
    fn set_fill(&mut self, color: Color);

    /// Strokes a straight line between two points.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Fills the polygon spanned by `vertices`.
    ///
    /// Fewer than three vertices fill nothing.
    fn fill_polygon(&mut self, vertices: &[Point]);

    /// Fills a disc of the given pixel radius.
    fn fill_disc(&mut self, center: Point, radius: f64);

    /// Applies a recorded operation.
    fn apply(&mut self, op: &SurfaceOp) {
        match op {
            SurfaceOp::Clear(color) => self.clear(*color),
            SurfaceOp::SetStroke(color) => self.set_stroke(*color),
            SurfaceOp::SetFill(color) => self.set_fill(*color),
            SurfaceOp::Line { from, to } => self.draw_line(*from, *to),
            SurfaceOp::Polygon(vertices) => self.fill_polygon(vertices),
            SurfaceOp::Disc { center, radius } => self.fill_disc(*center, *radius),
        }
    }
}
