// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dualplane_session --heading-base-level=0

//! Dualplane Session: the coupled primal/dual view pair.
//!
//! This crate ties the viewport, geometry, and imaging layers into an
//! interactive session. A [`DualityPair`] owns two [`CanvasView`]s — the
//! primal view, where the user draws primitives directly, and the dual
//! view, which shows each primitive's image under point–line duality —
//! plus the [`SessionState`] both views share (the segment/line draw mode
//! and the color table).
//!
//! ## The pairing contract
//!
//! Every primitive enters the session through [`DualityPair::insert`],
//! which appends the primitive to the initiating view, its dual to the
//! partner view, and a color to the shared table, as one uninterrupted
//! sequence. Index `i` in the primal sequence is therefore always the dual
//! of index `i` in the dual sequence, and both render index `i` in the
//! same color — including after either view's color control rewrites it.
//!
//! ## Input model
//!
//! Hosts forward raw pointer events per view; the session runs a small
//! per-view state machine:
//! - **Left button**: press captures the gesture start in plane
//!   coordinates (converted once); release classifies tap vs. drag by the
//!   travel distance and inserts the resulting primitive pair. A press
//!   while a gesture is pending abandons the pending gesture.
//! - **Right button**: press/move/release pans by accumulating
//!   surface-pixel deltas into the viewport's target offset.
//! - **Wheel**: multiplicative zoom, silently clamped.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use dualplane_geometry::Primitive;
//! use dualplane_session::{DualityPair, PointerButton, PointerEvent, PointerResponse, ViewRole};
//!
//! let size = Size::new(600.0, 600.0);
//! let mut pair = DualityPair::new(size, size);
//!
//! // Tap the primal view at plane point (2.0, 1.0).
//! let pos = pair.view(ViewRole::Primal).viewport().to_surface(Point::new(2.0, 1.0));
//! pair.pointer_event(ViewRole::Primal, PointerEvent::Down { button: PointerButton::Left, pos });
//! let response = pair.pointer_event(
//!     ViewRole::Primal,
//!     PointerEvent::Up { button: PointerButton::Left, pos },
//! );
//!
//! assert_eq!(response, PointerResponse::Inserted(0));
//!
//! // The tap landed as a point; the partner view holds its dual line.
//! let primal = pair.view(ViewRole::Primal).primitives()[0];
//! assert!(matches!(primal, Primitive::Point(_)));
//! assert_eq!(pair.view(ViewRole::Dual).primitives()[0], primal.dual());
//! ```
//!
//! ## Rendering
//!
//! The host calls [`DualityPair::render_frame`] once per view per display
//! refresh with any [`dualplane_imaging::Surface`]. Each frame advances
//! the view's eased pan, clears, draws the adaptive grid and axes, and
//! then draws every primitive in its table color (wedges as two boundary
//! lines plus two translucent regions).
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod input;
mod pair;
mod session;
mod view;

pub use input::{PointerButton, PointerEvent, PointerResponse};
pub use pair::DualityPair;
pub use session::{DEFAULT_PALETTE, SessionState};
pub use view::{CanvasView, ViewRole};
