//! A surface that records every call instead of drawing.
//!
//! Used to test the renderer without a browser and to inspect a scene
//! headlessly (see [`RecordingSurface::to_json`]).

use serde::Serialize;

use crate::error::GridError;
use crate::surface::{Surface, TextAlign};

#[cfg(test)]
#[path = "recording_test.rs"]
mod recording_test;

/// One call made against a [`Surface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetSize { width: u32, height: u32 },
    SetLineWidth { width: f64 },
    SetStrokeStyle { color: String },
    SetFillStyle { color: String },
    SetFont { font: String },
    SetTextAlign { align: TextAlign },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Fill,
    FillText { text: String, x: f64, y: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Text of every `FillText` command, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize the recorded commands as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Serialize`] if serialization fails (non-finite
    /// floats serialize as `null`, so in practice this does not happen).
    pub fn to_json(&self) -> Result<String, GridError> {
        serde_json::to_string_pretty(&self.commands).map_err(|e| GridError::Serialize(e.to_string()))
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.push(DrawCommand::SetSize { width, height });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::SetLineWidth { width });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCommand::SetStrokeStyle { color: color.to_owned() });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCommand::SetFillStyle { color: color.to_owned() });
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawCommand::SetFont { font: font.to_owned() });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawCommand::SetTextAlign { align });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.push(DrawCommand::Arc { x, y, radius, start_angle, end_angle });
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(DrawCommand::FillText { text: text.to_owned(), x, y });
    }
}
