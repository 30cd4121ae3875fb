//! Browser surface backed by `web_sys::CanvasRenderingContext2d`.
//!
//! Acquisition is the only fallible step: a missing element, an element that
//! is not a `<canvas>`, or a canvas without a 2D context all yield
//! [`GridError::SurfaceUnavailable`]. After that, the two context calls that
//! can throw (`arc`, `fillText`) are logged and skipped so drawing stays
//! infallible.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::render::GridRenderer;
use crate::scene;
use crate::surface::{Surface, TextAlign};

/// A `<canvas>` element and its 2D context.
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebSurface {
    /// Look up a canvas element by id in the current document.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SurfaceUnavailable`] when there is no document,
    /// no element with `id`, the element is not a canvas, or it has no 2D context.
    pub fn from_canvas_id(id: &str) -> Result<Self, GridError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GridError::SurfaceUnavailable("no document".into()))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| GridError::SurfaceUnavailable(format!("no element with id '{id}'")))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GridError::SurfaceUnavailable(format!("element '{id}' is not a canvas")))?;
        Self::from_canvas(canvas)
    }

    /// Wrap an existing canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SurfaceUnavailable`] if the 2D context cannot be obtained.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, GridError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GridError::SurfaceUnavailable(format!("getContext failed: {e:?}")))?
            .ok_or_else(|| GridError::SurfaceUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::SurfaceUnavailable("context is not a CanvasRenderingContext2d".into()))?;
        Ok(Self { canvas, ctx })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for WebSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        if let Err(e) = self.ctx.arc(x, y, radius, start_angle, end_angle) {
            tracing::warn!(error = ?e, radius, "canvas arc failed");
        }
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(e) = self.ctx.fill_text(text, x, y) {
            tracing::warn!(error = ?e, text, "canvas fillText failed");
        }
    }
}

/// Draw the demo scene on the canvas with id `canvas_id` using the default grid.
///
/// # Errors
///
/// Returns the [`GridError::SurfaceUnavailable`] message if the canvas cannot be acquired.
#[wasm_bindgen(js_name = renderDemo)]
pub fn render_demo(canvas_id: &str) -> Result<(), JsValue> {
    let surface = WebSurface::from_canvas_id(canvas_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut renderer = GridRenderer::new(surface, &GridConfig::default());
    scene::draw_demo(&mut renderer);
    Ok(())
}
