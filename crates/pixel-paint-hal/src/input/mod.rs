//! Analog joystick input.

mod joystick;

pub use joystick::{JoystickConfig, JoystickError, JoystickInput};

/// Analog inputs read by the joystick board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalogChannel {
    Vertical,
    Horizontal,
    SizeDial,
}

/// One-shot ADC conversion source.
pub trait AnalogSampler {
    type Error;

    fn sample(&mut self, channel: AnalogChannel) -> Result<u16, Self::Error>;
}
