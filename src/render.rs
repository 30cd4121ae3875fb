//! Rendering: maps grid coordinates to surface pixels and draws the grid,
//! segments, and labelled points.
//!
//! Grid space has its origin at the bottom-left cell and counts rows upward.
//! Surface space has its origin at the top-left pixel. Every cell is
//! `pixel_size + 1` pixels wide because of the 1px grid line in front of it,
//! and the whole grid is shifted right by the row-label margin.
//!
//! This module is the only one that issues drawing commands. It owns the
//! [`Surface`] for its whole lifetime.

use std::f64::consts::PI;

use crate::config::GridConfig;
use crate::consts::{
    AXIS_LABEL_BAND_PX, CLOSING_LINE_PX, COLUMN_LABEL_DROP_PX, DEFAULT_COLOR, DEFAULT_LINE_WIDTH,
    DEFAULT_POINT_RADIUS, GRID_COLOR, GRID_FONT, GRID_LINE_WIDTH, POINT_LABEL_FONT, POINT_LABEL_LIFT_PX,
    ROW_LABEL_BASELINE_PX,
};
use crate::surface::{Surface, TextAlign};
use crate::vector::Vector2D;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Stroke settings for [`GridRenderer::draw_line_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub width: f64,
    pub color: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { width: DEFAULT_LINE_WIDTH, color: DEFAULT_COLOR.to_owned() }
    }
}

/// Marker settings for [`GridRenderer::draw_point_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub radius: f64,
    pub color: String,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self { radius: DEFAULT_POINT_RADIUS, color: DEFAULT_COLOR.to_owned() }
    }
}

/// Surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Size needed for `config`: the cells, one grid line per cell, a closing
    /// line, the label band, and (horizontally) the row-label margin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn for_config(config: &GridConfig) -> Self {
        let w = f64::from(config.width);
        let h = f64::from(config.height);
        let s = config.pixel_size;
        let width = w * s + w + CLOSING_LINE_PX + AXIS_LABEL_BAND_PX + config.label_margin;
        let height = h * s + h + CLOSING_LINE_PX + AXIS_LABEL_BAND_PX;
        Self { width: width as u32, height: height as u32 }
    }
}

/// Draws a virtual grid and grid-positioned shapes onto a [`Surface`].
pub struct GridRenderer<S: Surface> {
    surface: S,
    height: u32,
    width: u32,
    pixel_size: f64,
    label_margin: f64,
    size: SurfaceSize,
}

impl<S: Surface> GridRenderer<S> {
    /// Take ownership of `surface` and size it for `config`.
    pub fn new(mut surface: S, config: &GridConfig) -> Self {
        let size = SurfaceSize::for_config(config);
        surface.set_size(size.width, size.height);
        tracing::debug!(
            rows = config.height,
            cols = config.width,
            width_px = size.width,
            height_px = size.height,
            "grid renderer ready"
        );
        Self {
            surface,
            height: config.height,
            width: config.width,
            pixel_size: config.pixel_size,
            label_margin: config.label_margin,
            size,
        }
    }

    /// Surface dimensions, fixed at construction.
    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.height, self.width, self.pixel_size, self.label_margin)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the surface back, ending the renderer.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Map a grid coordinate to the pixel at the centre of its cell.
    ///
    /// Row `y` is counted from the bottom. The inverted row is `height - y`
    /// (not `height - 1 - y`) and the half cell is subtracted on the y axis,
    /// which together land on the centre of the cell.
    #[must_use]
    pub fn to_real(&self, virt: &Vector2D) -> Vector2D {
        let s = self.pixel_size;
        let vx = virt.x();
        let inv_y = f64::from(self.height) - virt.y();
        let real_x = self.label_margin + s * vx + vx + s / 2.0;
        let real_y = s * inv_y + inv_y - s / 2.0;
        Vector2D::new(real_x, real_y)
    }

    /// Draw grid lines and axis labels.
    ///
    /// Columns are labelled by index along the bottom. Rows are drawn top
    /// down but labelled bottom up, so the top row reads `height - 1`.
    pub fn draw_grid(&mut self) {
        let s = self.pixel_size;
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let max_x = w * s + w + self.label_margin;
        let max_y = h * s + h;

        self.surface.set_line_width(GRID_LINE_WIDTH);
        self.surface.set_stroke_style(GRID_COLOR);
        self.surface.set_font(GRID_FONT);
        self.surface.set_fill_style(GRID_COLOR);
        self.surface.set_text_align(TextAlign::Center);

        for x in 0..self.width {
            let vx = f64::from(x);
            let real_x = vx * s + vx + self.label_margin;
            self.stroke_segment(real_x, 0.0, real_x, max_y);
            self.surface
                .fill_text(&x.to_string(), real_x + s / 2.0, max_y + COLUMN_LABEL_DROP_PX);
        }
        self.stroke_segment(max_x, 0.0, max_x, max_y);

        self.surface.set_text_align(TextAlign::Left);
        for y in 0..self.height {
            let vy = f64::from(y);
            let real_y = vy * s + vy;
            self.stroke_segment(self.label_margin, real_y, max_x, real_y);
            let label = self.height - y - 1;
            self.surface
                .fill_text(&label.to_string(), 0.0, real_y + s / 2.0 + ROW_LABEL_BASELINE_PX);
        }
        self.stroke_segment(self.label_margin, max_y, max_x, max_y);

        tracing::debug!(rows = self.height, cols = self.width, "grid drawn");
    }

    /// Draw a segment between two grid coordinates with the default style.
    pub fn draw_line(&mut self, a: &Vector2D, b: &Vector2D) {
        self.draw_line_with(a, b, &LineStyle::default());
    }

    /// Draw a segment between two grid coordinates.
    ///
    /// Coordinates outside the grid are not clipped.
    pub fn draw_line_with(&mut self, a: &Vector2D, b: &Vector2D, style: &LineStyle) {
        let real_a = self.to_real(a);
        let real_b = self.to_real(b);

        self.surface.set_line_width(style.width);
        self.surface.set_stroke_style(&style.color);
        self.stroke_segment(real_a.x(), real_a.y(), real_b.x(), real_b.y());
    }

    /// Draw a point with the default style, optionally labelled.
    pub fn draw_point(&mut self, point: &Vector2D, name: Option<&str>) {
        self.draw_point_with(point, name, &PointStyle::default());
    }

    /// Draw a filled circular marker at a grid coordinate.
    ///
    /// With a non-empty `name`, a label `name(x|y)` is centred above the
    /// marker. The label shows the grid coordinate, not the pixel position.
    pub fn draw_point_with(&mut self, point: &Vector2D, name: Option<&str>, style: &PointStyle) {
        let real = self.to_real(point);

        self.surface.set_stroke_style(&style.color);
        self.surface.set_fill_style(&style.color);
        self.surface.begin_path();
        self.surface.arc(real.x(), real.y(), style.radius, 0.0, 2.0 * PI);
        self.surface.fill();

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.surface.set_font(POINT_LABEL_FONT);
            self.surface.set_fill_style(&style.color);
            self.surface.set_text_align(TextAlign::Center);
            self.surface
                .fill_text(&format!("{name}{point}"), real.x(), real.y() - POINT_LABEL_LIFT_PX);
        }
    }

    fn stroke_segment(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.surface.begin_path();
        self.surface.move_to(x0, y0);
        self.surface.line_to(x1, y1);
        self.surface.stroke();
    }
}
