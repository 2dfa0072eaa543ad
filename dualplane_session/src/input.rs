// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use dualplane_geometry::GestureError;

/// Pointer button identity, as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button; draws primitives.
    Left,
    /// Middle button; currently unused.
    Middle,
    /// Secondary button; pans the view.
    Right,
}

/// A raw pointer event for one view, in surface pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down {
        /// Button that went down.
        button: PointerButton,
        /// Pointer position at press time.
        pos: Point,
    },
    /// The pointer moved (with or without buttons held).
    Move {
        /// Current pointer position.
        pos: Point,
    },
    /// A button was released.
    Up {
        /// Button that went up.
        button: PointerButton,
        /// Pointer position at release time.
        pos: Point,
    },
}

/// What a pointer event did to the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerResponse {
    /// The event updated internal state (gesture tracking, panning) or was
    /// irrelevant; nothing was inserted.
    None,
    /// A gesture completed and a primitive pair was appended at this index.
    Inserted(usize),
    /// A gesture completed but was rejected; no state changed.
    Rejected(GestureError),
}
