// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use peniko::Color;

use dualplane_geometry::{
    DrawMode, Primitive, line_span, primitive_from_gesture, wedge_shape,
};
use dualplane_imaging::Surface;
use dualplane_view::Viewport;

use crate::input::{PointerButton, PointerEvent, PointerResponse};
use crate::session::SessionState;
use crate::view::{CanvasView, ViewRole};

const BACKGROUND: Color = Color::WHITE;
const GRID_COLOR: Color = Color::from_rgba8(222, 222, 222, 255);
const AXIS_COLOR: Color = Color::BLACK;

/// Radius of a rendered point primitive, in surface pixels.
const POINT_RADIUS: f64 = 5.0;
/// Alpha applied to a wedge's region fill; boundary lines stay opaque.
const WEDGE_FILL_ALPHA: f32 = 80.0 / 255.0;
/// Wheel delta to zoom-factor conversion.
const WHEEL_ZOOM_STEP: f64 = 0.001;
/// Lower bound for the adaptive grid spacing, in plane units.
const GRID_SPACING_BASE: f64 = 1e-4;

/// The coupled primal/dual view pair.
///
/// `DualityPair` owns both [`CanvasView`]s and the [`SessionState`] they
/// share. Every insertion flows through [`DualityPair::insert`], which
/// appends to the initiating view, the partner view, and the color table
/// as one uninterrupted sequence — the source of the pairing invariant
/// `primal.len() == dual.len() == colors.len()`.
#[derive(Clone, Debug)]
pub struct DualityPair {
    primal: CanvasView,
    dual: CanvasView,
    session: SessionState,
}

impl DualityPair {
    /// Creates an empty pair with one viewport per view.
    #[must_use]
    pub fn new(primal_size: Size, dual_size: Size) -> Self {
        Self {
            primal: CanvasView::new(primal_size),
            dual: CanvasView::new(dual_size),
            session: SessionState::new(),
        }
    }

    /// Returns the view with the given role.
    #[must_use]
    pub fn view(&self, role: ViewRole) -> &CanvasView {
        match role {
            ViewRole::Primal => &self.primal,
            ViewRole::Dual => &self.dual,
        }
    }

    /// Returns the view with the given role, mutably.
    pub fn view_mut(&mut self, role: ViewRole) -> &mut CanvasView {
        match role {
            ViewRole::Primal => &mut self.primal,
            ViewRole::Dual => &mut self.dual,
        }
    }

    /// Returns the shared session state.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Returns the number of primitive pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.session.colors.len()
    }

    /// Returns `true` when no primitives have been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current draw mode.
    #[must_use]
    pub fn mode(&self) -> DrawMode {
        self.session.mode()
    }

    /// Sets the draw mode for all future gestures in both views.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.session.set_mode(mode);
    }

    /// Flips between segment and line mode.
    pub fn toggle_mode(&mut self) {
        self.session.toggle_mode();
    }

    /// Returns the shared color at `index`.
    ///
    /// Both views render index `index` in this color.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Color> {
        self.session.color(index)
    }

    /// Overwrites the shared color at `index`, from either view's color
    /// control; returns `false` when no primitive pair exists there.
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        self.session.set_color(index, color)
    }

    /// Inserts a primitive into the view with the given role, and its dual
    /// into the partner view.
    ///
    /// The two sequence appends and the color-table append happen as one
    /// uninterrupted sequence; both sequences and the table stay aligned
    /// by index. Returns the shared index of the new pair.
    pub fn insert(&mut self, role: ViewRole, primitive: Primitive) -> usize {
        let dual = primitive.dual();
        let color = self.session.take_next_color();
        let (own, partner) = match role {
            ViewRole::Primal => (&mut self.primal, &mut self.dual),
            ViewRole::Dual => (&mut self.dual, &mut self.primal),
        };
        let index = own.primitives.len();
        own.primitives.push(primitive);
        partner.primitives.push(dual);
        self.session.colors.push(color);

        debug_assert_eq!(
            self.primal.primitives.len(),
            self.dual.primitives.len(),
            "primitive sequences must stay aligned"
        );
        debug_assert_eq!(
            self.primal.primitives.len(),
            self.session.colors.len(),
            "color table must stay aligned with the sequences"
        );
        index
    }

    /// Feeds one raw pointer event into the view with the given role.
    ///
    /// Left press/release runs the draw-gesture state machine; right
    /// press/move/release pans. Release events without a matching press
    /// are ignored.
    pub fn pointer_event(&mut self, role: ViewRole, event: PointerEvent) -> PointerResponse {
        match event {
            PointerEvent::Down {
                button: PointerButton::Left,
                pos,
            } => {
                let view = self.view_mut(role);
                // Overwrites any pending gesture: a new press abandons it.
                view.pointer.draw_start = Some(view.viewport.to_plane(pos));
                PointerResponse::None
            }
            PointerEvent::Down {
                button: PointerButton::Right,
                pos,
            } => {
                self.view_mut(role).pointer.pan_last = Some(pos);
                PointerResponse::None
            }
            PointerEvent::Down { .. } => PointerResponse::None,
            PointerEvent::Move { pos } => {
                let view = self.view_mut(role);
                if let Some(last) = view.pointer.pan_last {
                    view.viewport.pan_by_surface(pos - last);
                    view.pointer.pan_last = Some(pos);
                }
                PointerResponse::None
            }
            PointerEvent::Up {
                button: PointerButton::Left,
                pos,
            } => {
                let view = self.view_mut(role);
                let Some(start) = view.pointer.draw_start.take() else {
                    return PointerResponse::None;
                };
                let end = view.viewport.to_plane(pos);
                let mode = self.session.mode();
                let threshold = self.session.drag_threshold();
                match primitive_from_gesture(start, end, mode, threshold) {
                    Ok(primitive) => PointerResponse::Inserted(self.insert(role, primitive)),
                    Err(error) => PointerResponse::Rejected(error),
                }
            }
            PointerEvent::Up {
                button: PointerButton::Right,
                ..
            } => {
                self.view_mut(role).pointer.pan_last = None;
                PointerResponse::None
            }
            PointerEvent::Up { .. } => PointerResponse::None,
        }
    }

    /// Applies a wheel delta to the view with the given role.
    ///
    /// Positive deltas (scrolling down) zoom out, negative deltas zoom in;
    /// the scale change is proportional to the current scale and clamps
    /// silently at the zoom bounds.
    pub fn wheel(&mut self, role: ViewRole, delta: f64) {
        self.view_mut(role)
            .viewport
            .zoom_by(1.0 - delta * WHEEL_ZOOM_STEP);
    }

    /// Renders one frame of the view with the given role.
    ///
    /// Advances the eased pan, clears the surface, draws the grid and
    /// axes, then draws every primitive in its table color.
    pub fn render_frame<S: Surface>(&mut self, role: ViewRole, surface: &mut S) {
        let view = match role {
            ViewRole::Primal => &mut self.primal,
            ViewRole::Dual => &mut self.dual,
        };
        view.viewport.advance();

        surface.clear(BACKGROUND);
        draw_grid(&view.viewport, surface);
        for (primitive, &color) in view.primitives.iter().zip(&self.session.colors) {
            draw_primitive(&view.viewport, primitive, color, surface);
        }
    }
}

/// Largest multiple of `step` at or below `value`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid coordinates are far below i64 range; truncation toward zero is corrected below."
)]
fn floor_multiple(value: f64, step: f64) -> f64 {
    let q = value / step;
    let mut n = q as i64;
    if (n as f64) > q {
        n -= 1;
    }
    n as f64 * step
}

fn draw_grid<S: Surface>(viewport: &Viewport, surface: &mut S) {
    let rect = viewport.visible_plane_rect();
    let spacing = viewport.grid_spacing(GRID_SPACING_BASE);

    surface.set_stroke(GRID_COLOR);
    let mut x = floor_multiple(rect.min_x(), spacing);
    while x <= rect.max_x() {
        let from = viewport.to_surface(Point::new(x, rect.min_y()));
        let to = viewport.to_surface(Point::new(x, rect.max_y()));
        surface.draw_line(from, to);
        x += spacing;
    }
    let mut y = floor_multiple(rect.min_y(), spacing);
    while y <= rect.max_y() {
        let from = viewport.to_surface(Point::new(rect.min_x(), y));
        let to = viewport.to_surface(Point::new(rect.max_x(), y));
        surface.draw_line(from, to);
        y += spacing;
    }

    surface.set_stroke(AXIS_COLOR);
    if rect.min_x() <= 0.0 && rect.max_x() >= 0.0 {
        let from = viewport.to_surface(Point::new(0.0, rect.min_y()));
        let to = viewport.to_surface(Point::new(0.0, rect.max_y()));
        surface.draw_line(from, to);
    }
    if rect.min_y() <= 0.0 && rect.max_y() >= 0.0 {
        let from = viewport.to_surface(Point::new(rect.min_x(), 0.0));
        let to = viewport.to_surface(Point::new(rect.max_x(), 0.0));
        surface.draw_line(from, to);
    }
}

fn draw_primitive<S: Surface>(
    viewport: &Viewport,
    primitive: &Primitive,
    color: Color,
    surface: &mut S,
) {
    match *primitive {
        Primitive::Point(p) => {
            surface.set_fill(color);
            surface.fill_disc(viewport.to_surface(p), POINT_RADIUS);
        }
        Primitive::Segment(p, q) => {
            surface.set_stroke(color);
            surface.draw_line(viewport.to_surface(p), viewport.to_surface(q));
        }
        Primitive::Line(line) => {
            let (from, to) = line_span(line);
            surface.set_stroke(color);
            surface.draw_line(viewport.to_surface(from), viewport.to_surface(to));
        }
        Primitive::Wedge(line1, line2) => {
            surface.set_stroke(color);
            let (from, to) = line_span(line1);
            surface.draw_line(viewport.to_surface(from), viewport.to_surface(to));
            let (from, to) = line_span(line2);
            surface.draw_line(viewport.to_surface(from), viewport.to_surface(to));

            // Degenerate wedges (parallel or horizontal boundaries) keep
            // their boundary lines; the region fill is skipped.
            if let Ok(shape) = wedge_shape(line1, line2) {
                surface.set_fill(color.with_alpha(WEDGE_FILL_ALPHA));
                for region in shape.regions {
                    let mapped = region.map(|p| viewport.to_surface(p));
                    surface.fill_polygon(&mapped);
                }
            }
        }
    }
}
