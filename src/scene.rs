//! The demo scene: the full grid, one segment, one labelled point.

use crate::render::GridRenderer;
use crate::surface::Surface;
use crate::vector::Vector2D;

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

/// Draw the grid, a segment from `(0,0)` to `(10,10)`, and point `P1` at `(15,15)`.
pub fn draw_demo<S: Surface>(renderer: &mut GridRenderer<S>) {
    renderer.draw_grid();

    let a = Vector2D::new(0.0, 0.0);
    let b = Vector2D::new(10.0, 10.0);
    renderer.draw_line(&a, &b);

    renderer.draw_point(&Vector2D::new(15.0, 15.0), Some("P1"));

    tracing::debug!("demo scene drawn");
}
