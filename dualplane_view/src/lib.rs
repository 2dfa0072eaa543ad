// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dualplane_view --heading-base-level=0

//! Dualplane View: per-view viewport over the duality plane.
//!
//! This crate provides a small, headless model of one view onto the
//! continuous coordinate plane, with the view extent expressed in device
//! pixels. It focuses on:
//! - Viewport state (pan + zoom) for a single view.
//! - Coordinate conversion between plane and surface (pixel) space, with
//!   the vertical axis inverted (plane +y is up, surface +y is down).
//! - Eased panning: pan input lands in a target offset which the actual
//!   offset chases by a fixed relaxation step once per rendered frame.
//! - Zoom constraints (multiplicative zoom, silently clamped).
//!
//! It does **not** own any primitive list or rendering backend. Callers are
//! expected to:
//! - Hold one [`Viewport`] per view and feed pan/zoom input into it.
//! - Call [`Viewport::advance`] once per frame from their render loop so
//!   the eased pan settles.
//! - Use [`Viewport::to_plane`] / [`Viewport::to_surface`] when mapping
//!   pointer input and geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use dualplane_view::Viewport;
//!
//! // A 600x600 pixel view onto the plane.
//! let mut view = Viewport::new(Size::new(600.0, 600.0));
//!
//! // The surface center maps to the plane origin by default.
//! let origin = view.to_plane(Point::new(300.0, 300.0));
//! assert!((origin.x).abs() < 1e-9 && (origin.y).abs() < 1e-9);
//!
//! // Pan by a surface-pixel delta, then let a few frames settle.
//! view.pan_by_surface(Vec2::new(60.0, 0.0));
//! for _ in 0..100 {
//!     view.advance();
//! }
//! assert!(view.offset().x < 0.0);
//! ```
//!
//! ## Design notes
//!
//! - The visible plane span per axis is `2 * HALF_EXTENT / scale`, centered
//!   on the offset; zooming never translates the view.
//! - Panning is split into an immediately-mutated target offset and an
//!   eased actual offset. [`Viewport::advance`] is an explicit step so the
//!   easing is testable without a rendering host.
//! - Rotation and per-axis zoom are intentionally out of scope.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{
    HALF_EXTENT, MAX_SCALE, MIN_SCALE, PAN_SMOOTHING, Viewport, ViewportDebugInfo,
};
