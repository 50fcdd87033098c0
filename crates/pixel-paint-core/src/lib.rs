#![cfg_attr(not(test), no_std)]

//! Device-independent core of a joystick-driven pixel paint program.
//!
//! The canvas lives in a 2-bit packed [`canvas::PixelStore`]; brushes are
//! static row-span masks; the display is reached only through the
//! [`render::Renderer`] capability, so the whole paint loop runs on the host
//! in tests.

pub mod app;
pub mod canvas;
pub mod color;
pub mod cursor;
pub mod input;
pub mod raster;
pub mod redraw;
pub mod render;
pub mod tool;

#[cfg(test)]
mod testing;
