// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dualplane_imaging_web_canvas --heading-base-level=0

//! Web Canvas (2D) surface for Dualplane.
//!
//! This crate provides a [`Surface`] implementation backed by
//! `web_sys::CanvasRenderingContext2d` when targeting `wasm32`. It is the
//! host glue for the browser: a page creates one `<canvas>` per view,
//! wraps each in a [`WebCanvasSurface`], and forwards its pointer/wheel
//! events to the session while calling the render pass once per
//! `requestAnimationFrame`.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_surface(
//!     canvas: web_sys::HtmlCanvasElement,
//! ) -> Result<dualplane_imaging_web_canvas::WebCanvasSurface, wasm_bindgen::JsValue> {
//!     dualplane_imaging_web_canvas::WebCanvasSurface::from_canvas(canvas)
//! }
//! ```
//!
//! Notes:
//! - The canvas 2D context is itself stateful, so the stroke/fill color
//!   state of the [`Surface`] contract maps directly onto
//!   `strokeStyle`/`fillStyle`.
//! - On non-`wasm32` targets the crate compiles to nothing; hosts and
//!   tests on other targets use a different surface (for example the
//!   recording surface from `dualplane_imaging_ref`).

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::string::{String, ToString};
#[cfg(target_arch = "wasm32")]
use core::f64::consts::TAU;
#[cfg(target_arch = "wasm32")]
use core::fmt;

#[cfg(target_arch = "wasm32")]
use kurbo::{Point, Size};

#[cfg(target_arch = "wasm32")]
use dualplane_imaging::{Color, Surface};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(target_arch = "wasm32")]
fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

/// Canvas 2D surface (only available on `wasm32`).
#[cfg(target_arch = "wasm32")]
pub struct WebCanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Size,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for WebCanvasSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebCanvasSurface { .. }")
    }
}

#[cfg(target_arch = "wasm32")]
impl WebCanvasSurface {
    /// Creates a surface that draws into the given canvas 2D context.
    ///
    /// `size` must match the canvas pixel size; it is only used to bound
    /// the [`Surface::clear`] fill.
    pub fn new(ctx: CanvasRenderingContext2d, size: Size) -> Self {
        Self { ctx, size }
    }

    /// Creates a surface for a DOM canvas element.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let size = Size::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { ctx, size })
    }

    /// Returns the surface size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Updates the recorded size after a canvas resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

#[cfg(target_arch = "wasm32")]
impl Surface for WebCanvasSurface {
    fn clear(&mut self, color: Color) {
        self.ctx.clear_rect(0.0, 0.0, self.size.width, self.size.height);
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx
            .fill_rect(0.0, 0.0, self.size.width, self.size.height);
    }

    fn set_stroke(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
    }

    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, vertices: &[Point]) {
        let Some((first, rest)) = vertices.split_first() else {
            return;
        };
        if rest.len() < 2 {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for v in rest {
            self.ctx.line_to(v.x, v.y);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_disc(&mut self, center: Point, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
