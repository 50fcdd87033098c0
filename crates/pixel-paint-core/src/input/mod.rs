//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

use crate::raster::BrushSize;

/// One poll of the analog stick, size dial and button.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputFrame {
    /// Horizontal step in pixels; the joystick reports -1, 0 or 1.
    pub dx: i8,
    pub dy: i8,
    /// Size selected on the dial, if it settled on a supported size.
    pub size: Option<BrushSize>,
    pub button_down: bool,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_frame(&mut self) -> Result<InputFrame, Self::Error>;
}
