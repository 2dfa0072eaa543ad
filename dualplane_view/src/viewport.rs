// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Half-extent of the plane window visible at scale 1.0, in plane units.
///
/// At the default scale a view shows a `2 * HALF_EXTENT` span per axis,
/// centered on the pan offset.
pub const HALF_EXTENT: f64 = 2.5;

/// Default lower bound for the zoom scale.
pub const MIN_SCALE: f64 = 0.1;

/// Default upper bound for the zoom scale.
pub const MAX_SCALE: f64 = 10.0;

/// Per-frame relaxation factor applied by [`Viewport::advance`].
///
/// Each frame the offset moves this fraction of the remaining distance
/// toward the target offset.
pub const PAN_SMOOTHING: f64 = 0.1;

/// Viewport of one view onto the duality plane.
///
/// `Viewport` tracks the pixel size of a rendering surface and a pan+zoom
/// mapping of plane coordinates onto it. It can be used to:
/// - Convert points between plane and surface coordinates.
/// - Accumulate pan input into a target offset and ease toward it.
/// - Apply multiplicative, clamped zoom.
///
/// The vertical axis is inverted across the mapping: plane +y points up,
/// surface +y points down.
#[derive(Clone, Debug)]
pub struct Viewport {
    surface_size: Size,
    scale: f64,
    offset: Vec2,
    target_offset: Vec2,
    min_scale: f64,
    max_scale: f64,
}

impl Viewport {
    /// Creates a new viewport for a surface of the given pixel size.
    ///
    /// - Initial scale is `1.0`.
    /// - Initial offset and target offset are zero (the surface center maps
    ///   to the plane origin).
    /// - Scale is clamped to `[MIN_SCALE, MAX_SCALE]` by default.
    #[must_use]
    pub fn new(surface_size: Size) -> Self {
        Self {
            surface_size,
            scale: 1.0,
            offset: Vec2::ZERO,
            target_offset: Vec2::ZERO,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }

    /// Returns the surface size in pixels.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Sets the surface size in pixels.
    ///
    /// This does not change scale or offset; the same plane span is simply
    /// mapped onto the new pixel extent.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = size;
    }

    /// Returns the current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom scale, clamping it into the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    /// Adjusts the zoom scale multiplicatively, clamping silently at the
    /// configured bounds.
    ///
    /// Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        self.set_scale(self.scale * factor);
    }

    /// Sets the minimum and maximum zoom scale.
    ///
    /// The provided range is normalized so that `min <= max`. The current
    /// scale is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.scale);
    }

    /// Returns the current (eased) pan offset, in plane units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the pan destination, in plane units.
    #[must_use]
    pub fn target_offset(&self) -> Vec2 {
        self.target_offset
    }

    /// Sets the pan destination directly, in plane units.
    ///
    /// The actual offset still eases toward it frame by frame.
    pub fn set_target_offset(&mut self, target: Vec2) {
        self.target_offset = target;
    }

    /// Moves the offset to the target immediately, skipping the easing.
    pub fn snap_to_target(&mut self) {
        self.offset = self.target_offset;
    }

    /// Accumulates a surface-pixel drag delta into the pan destination.
    ///
    /// The delta is scaled into plane units at the current zoom, with signs
    /// chosen so that the plane content follows the pointer: dragging right
    /// moves the visible window left, and the inverted vertical axis is
    /// accounted for.
    pub fn pan_by_surface(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let span = self.plane_span();
        self.target_offset.x -= delta.x * span / self.surface_size.width;
        self.target_offset.y += delta.y * span / self.surface_size.height;
    }

    /// Advances the eased pan by one frame.
    ///
    /// The offset moves [`PAN_SMOOTHING`] of the remaining distance toward
    /// the target offset. Hosts call this once per rendered frame.
    pub fn advance(&mut self) {
        self.offset += (self.target_offset - self.offset) * PAN_SMOOTHING;
    }

    /// Returns the plane span visible per axis at the current scale.
    #[must_use]
    pub fn plane_span(&self) -> f64 {
        2.0 * HALF_EXTENT / self.scale
    }

    /// Converts a plane point into surface pixel coordinates.
    #[must_use]
    pub fn to_surface(&self, pt: Point) -> Point {
        let span = self.plane_span();
        let px = ((pt.x - self.offset.x) / span + 0.5) * self.surface_size.width;
        let py = (0.5 - (pt.y - self.offset.y) / span) * self.surface_size.height;
        Point::new(px, py)
    }

    /// Converts a surface pixel point into plane coordinates.
    #[must_use]
    pub fn to_plane(&self, pt: Point) -> Point {
        let span = self.plane_span();
        let x = (pt.x / self.surface_size.width - 0.5) * span + self.offset.x;
        let y = (0.5 - pt.y / self.surface_size.height) * span + self.offset.y;
        Point::new(x, y)
    }

    /// Returns the plane-space rectangle currently visible through the view.
    #[must_use]
    pub fn visible_plane_rect(&self) -> Rect {
        let a = self.to_plane(Point::ZERO);
        let b = self.to_plane(Point::new(
            self.surface_size.width,
            self.surface_size.height,
        ));
        Rect::from_points(a, b)
    }

    /// Returns the current plane-units-per-pixel ratio along the X axis.
    #[must_use]
    pub fn plane_units_per_pixel(&self) -> f64 {
        self.plane_span() / self.surface_size.width
    }

    /// Suggests a “nice” grid spacing in plane units for the current zoom.
    ///
    /// The returned value is chosen so that grid lines appear roughly tens
    /// of pixels apart (using a 1-2-5 ladder), with `base` treated as a
    /// lower bound on the spacing in plane units.
    #[must_use]
    pub fn grid_spacing(&self, base: f64) -> f64 {
        let base = base.abs().max(f64::MIN_POSITIVE);
        let target_px = 64.0_f64;
        let mut desired = self.plane_units_per_pixel().abs() * target_px;
        if desired < base {
            desired = base;
        }

        let mut unit = 1.0_f64;
        while unit * 10.0 <= desired {
            unit *= 10.0;
        }
        while unit > desired {
            unit /= 10.0;
        }

        loop {
            for m in [1.0_f64, 2.0, 5.0, 10.0] {
                let step = m * unit;
                if step >= desired {
                    return step;
                }
            }
            unit *= 10.0;
        }
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            surface_size: self.surface_size,
            visible_plane_rect: self.visible_plane_rect(),
            scale: self.scale,
            offset: self.offset,
            target_offset: self.target_offset,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Surface size in pixels.
    pub surface_size: Size,
    /// Plane-space rectangle currently visible through the view.
    pub visible_plane_rect: Rect,
    /// Current zoom scale.
    pub scale: f64,
    /// Current (eased) pan offset.
    pub offset: Vec2,
    /// Pan destination.
    pub target_offset: Vec2,
    /// Minimum zoom scale.
    pub min_scale: f64,
    /// Maximum zoom scale.
    pub max_scale: f64,
}
