//! The drawing capability the renderer needs.
//!
//! This is the subset of a `Canvas2D` context that grid plotting uses. Style
//! setters are stateful: a value stays in effect until it is set again, the
//! same as on a browser canvas.

use serde::Serialize;

/// Horizontal anchoring of text relative to its x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    /// The `CanvasRenderingContext2d.textAlign` keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// A 2D surface that accepts path, fill, and text commands.
pub trait Surface {
    /// Resize the surface in pixels.
    fn set_size(&mut self, width: u32, height: u32);

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    /// Add a circular arc centred on `(x, y)` to the current path.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);

    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
