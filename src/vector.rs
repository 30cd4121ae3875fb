//! Two-component vector used for both grid cells and surface pixels.

use std::fmt;

use crate::error::GridError;

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

/// An immutable `(x, y)` pair.
///
/// Whether the components are grid cells or surface pixels depends on where
/// the vector came from: callers build grid-space vectors, and
/// [`crate::render::GridRenderer::to_real`] produces pixel-space ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from a component slice.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] unless `components` has exactly two entries.
    pub fn from_slice(components: &[f64]) -> Result<Self, GridError> {
        match *components {
            [x, y] => Ok(Self { x, y }),
            _ => Err(GridError::InvalidDimension { len: components.len() }),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Component by index: 0 is x, 1 is y.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Uniformly scale both components, returning a new vector.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = GridError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl TryFrom<Vec<f64>> for Vector2D {
    type Error = GridError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&components)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

/// Formats as `(x|y)`, the form used in point labels.
///
/// Negative zero prints as `0`.
impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 + 0.0 == +0.0
        write!(f, "({}|{})", self.x + 0.0, self.y + 0.0)
    }
}
