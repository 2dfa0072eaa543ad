// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dualplane_imaging_ref --heading-base-level=0

//! Dualplane Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of
//! [`Surface`] for **operation recording and state tracing**.
//!
//! It is intentionally *not* a rasterizer:
//! - It does **not** produce pixels.
//! - It records every operation together with the stroke/fill state at the
//!   time the operation was applied, so tests can assert on what a frame
//!   drew and with which colors.
//!
//! ```rust
//! use dualplane_imaging::{Color, Surface, SurfaceOp};
//! use dualplane_imaging_ref::RecordingSurface;
//! use kurbo::Point;
//!
//! let mut surface = RecordingSurface::default();
//! surface.set_fill(Color::BLACK);
//! surface.fill_disc(Point::new(10.0, 20.0), 5.0);
//!
//! let events = surface.events();
//! assert_eq!(events.len(), 2);
//! assert!(matches!(events[1].op, SurfaceOp::Disc { .. }));
//! assert_eq!(events[1].state.fill, Some(Color::BLACK));
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

use dualplane_imaging::{Surface, SurfaceOp};

/// Snapshot of the color state inside the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Current stroke color, if set.
    pub stroke: Option<Color>,
    /// Current fill color, if set.
    pub fill: Option<Color>,
}

/// Operation recorded by the reference surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// The operation that was applied.
    pub op: SurfaceOp,
    /// Color state after applying the operation.
    pub state: StateSnapshot,
}

/// Surface implementation that records operations instead of drawing.
///
/// The log keeps operations in application order; [`Self::clear`]
/// operations are recorded like any other (the log is not truncated), so a
/// test can inspect a whole frame including its clear.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Vec<Event>,
    state: StateSnapshot,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in application order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns an iterator over the recorded operations.
    pub fn ops(&self) -> impl Iterator<Item = &SurfaceOp> {
        self.events.iter().map(|event| &event.op)
    }

    /// Clears the log but keeps the current color state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, op: SurfaceOp) {
        self.events.push(Event {
            op,
            state: self.state,
        });
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.record(SurfaceOp::Clear(color));
    }

    fn set_stroke(&mut self, color: Color) {
        self.state.stroke = Some(color);
        self.record(SurfaceOp::SetStroke(color));
    }

    fn set_fill(&mut self, color: Color) {
        self.state.fill = Some(color);
        self.record(SurfaceOp::SetFill(color));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.record(SurfaceOp::Line { from, to });
    }

    fn fill_polygon(&mut self, vertices: &[Point]) {
        self.record(SurfaceOp::Polygon(vertices.into()));
    }

    fn fill_disc(&mut self, center: Point, radius: f64) {
        self.record(SurfaceOp::Disc { center, radius });
    }
}
