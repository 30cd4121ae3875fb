#![allow(clippy::float_cmp)]

use super::*;
use crate::config::GridConfig;
use crate::recording::{DrawCommand, RecordingSurface};

#[test]
fn demo_draws_grid_then_segment_then_point() {
    let mut renderer = GridRenderer::new(RecordingSurface::new(), &GridConfig::default());
    draw_demo(&mut renderer);
    let surface = renderer.into_surface();

    // 76 vertical + 41 horizontal grid strokes, plus the segment.
    assert_eq!(surface.count(|c| matches!(c, DrawCommand::Stroke)), 76 + 41 + 1);
    assert_eq!(surface.count(|c| matches!(c, DrawCommand::Arc { .. })), 1);
    assert_eq!(surface.texts().last().copied(), Some("P1(15|15)"));
}

#[test]
fn demo_segment_runs_from_bottom_left_cell() {
    let mut renderer = GridRenderer::new(RecordingSurface::new(), &GridConfig::default());
    draw_demo(&mut renderer);
    let surface = renderer.into_surface();

    let moves: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::MoveTo { x, y } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    // Last move_to belongs to the segment: (0,0) -> (25, 830).
    assert_eq!(moves.last().copied(), Some((25.0, 830.0)));
}
