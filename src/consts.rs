//! Shared layout and style constants.

// ── Default grid ────────────────────────────────────────────────

pub const DEFAULT_GRID_HEIGHT: u32 = 40;
pub const DEFAULT_GRID_WIDTH: u32 = 75;

/// Edge length of one cell in pixels, excluding the 1px grid line.
pub const DEFAULT_PIXEL_SIZE: f64 = 20.0;

/// Horizontal band reserved on the left for row labels.
pub const DEFAULT_LABEL_MARGIN: f64 = 15.0;

// ── Surface geometry ────────────────────────────────────────────

/// Closing boundary line per axis.
pub const CLOSING_LINE_PX: f64 = 1.0;

/// Bottom/right band reserved for column labels.
pub const AXIS_LABEL_BAND_PX: f64 = 20.0;

/// Column labels sit this far below the grid's bottom edge.
pub const COLUMN_LABEL_DROP_PX: f64 = 11.0;

/// Added to a row's vertical centre to baseline its label.
pub const ROW_LABEL_BASELINE_PX: f64 = 5.0;

/// Point labels sit this far above the marker.
pub const POINT_LABEL_LIFT_PX: f64 = 10.0;

// ── Style ───────────────────────────────────────────────────────

pub const GRID_COLOR: &str = "lightgrey";
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const GRID_FONT: &str = "10px Arial";
pub const POINT_LABEL_FONT: &str = "15px Arial";

pub const DEFAULT_COLOR: &str = "black";
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_POINT_RADIUS: f64 = 2.0;
