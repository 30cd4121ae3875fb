//! Grid plotting on a 2D drawing surface.
//!
//! A virtual integer grid (e.g. 75×40 cells, origin bottom-left) is drawn with
//! axis labels, and points and segments given in grid coordinates are placed
//! in the centre of their cells. Everything that touches pixels goes through
//! the [`surface::Surface`] trait, so the same renderer drives a browser
//! canvas ([`web::WebSurface`]) or an in-memory recorder
//! ([`recording::RecordingSurface`]).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`render`] | [`render::GridRenderer`]: coordinate transform, grid, points, lines |
//! | [`vector`] | Two-component value type used for grid and pixel positions |
//! | [`surface`] | Drawing capability trait the renderer draws through |
//! | [`recording`] | Surface that records draw commands (tests, headless use) |
//! | [`web`] | `web-sys` canvas surface and the wasm entry point |
//! | [`config`] | Grid dimensions, defaults, env and JSON loading |
//! | [`scene`] | The demo scene: grid, one segment, one labelled point |
//! | [`error`] | Crate error type |
//! | [`consts`] | Layout and style constants |

pub mod config;
pub mod consts;
pub mod error;
pub mod recording;
pub mod render;
pub mod scene;
pub mod surface;
pub mod vector;
pub mod web;

pub use config::GridConfig;
pub use error::GridError;
pub use render::GridRenderer;
pub use surface::Surface;
pub use vector::Vector2D;
