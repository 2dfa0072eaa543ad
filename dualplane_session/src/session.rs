// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;

use dualplane_geometry::{DRAG_THRESHOLD, DrawMode};

/// Colors assigned to new primitives, cycled in insertion order.
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color::from_rgba8(220, 50, 47, 255),
    Color::from_rgba8(38, 139, 210, 255),
    Color::from_rgba8(133, 153, 0, 255),
    Color::from_rgba8(181, 137, 0, 255),
    Color::from_rgba8(108, 113, 196, 255),
    Color::from_rgba8(42, 161, 152, 255),
];

/// State shared by both views of a duality session.
///
/// There is exactly one `SessionState` per pair, constructed with it. The
/// draw mode is a single global toggle read at gesture completion; the
/// color table is indexed identically to both primitive sequences, so a
/// color change made through either view's control is visible to both.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub(crate) mode: DrawMode,
    pub(crate) colors: Vec<Color>,
    pub(crate) drag_threshold: f64,
    next_color: usize,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self {
            mode: DrawMode::default(),
            colors: Vec::new(),
            drag_threshold: DRAG_THRESHOLD,
            next_color: 0,
        }
    }

    /// Returns the current draw mode.
    #[must_use]
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Sets the draw mode for all future gestures in both views.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    /// Flips between segment and line mode.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Returns the shared color table, indexed like the primitive
    /// sequences.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the color at `index`, if a primitive pair exists there.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Overwrites the color at `index`; returns `false` when no primitive
    /// pair exists there.
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        match self.colors.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Returns the tap-vs-drag threshold in plane units.
    #[must_use]
    pub fn drag_threshold(&self) -> f64 {
        self.drag_threshold
    }

    /// Sets the tap-vs-drag threshold in plane units.
    pub fn set_drag_threshold(&mut self, threshold: f64) {
        self.drag_threshold = threshold;
    }

    /// Takes the next palette color for a new primitive pair.
    pub(crate) fn take_next_color(&mut self) -> Color {
        let color = DEFAULT_PALETTE[self.next_color % DEFAULT_PALETTE.len()];
        self.next_color += 1;
        color
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use dualplane_geometry::DrawMode;

    use super::{DEFAULT_PALETTE, SessionState};

    #[test]
    fn mode_defaults_to_segment_and_toggles() {
        let mut session = SessionState::new();
        assert_eq!(session.mode(), DrawMode::Segment);
        session.toggle_mode();
        assert_eq!(session.mode(), DrawMode::Line);
        session.toggle_mode();
        assert_eq!(session.mode(), DrawMode::Segment);
    }

    #[test]
    fn palette_cycles_in_insertion_order() {
        let mut session = SessionState::new();
        for expected in DEFAULT_PALETTE {
            assert_eq!(session.take_next_color(), expected);
        }
        // Wraps around.
        assert_eq!(session.take_next_color(), DEFAULT_PALETTE[0]);
    }

    #[test]
    fn set_color_requires_an_existing_index() {
        let mut session = SessionState::new();
        assert!(!session.set_color(0, Color::BLACK));

        let first = session.take_next_color();
        session.colors.push(first);
        assert!(session.set_color(0, Color::BLACK));
        assert_eq!(session.color(0), Some(Color::BLACK));
    }
}
