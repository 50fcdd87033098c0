use embedded_hal::digital::InputPin;
use log::debug;

use pixel_paint_core::{
    input::{InputFrame, InputProvider},
    raster::BrushSize,
};

use super::{AnalogChannel, AnalogSampler};

#[derive(Debug, Clone, Copy)]
pub struct JoystickConfig {
    deadzone: u16,
    adc_max: u16,
    invert_x: bool,
    invert_y: bool,
    button_active_low: bool,
    button_debounce_polls: u8,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            deadzone: 10,
            adc_max: 1023,
            invert_x: false,
            invert_y: false,
            button_active_low: true,
            button_debounce_polls: 3,
        }
    }
}

impl JoystickConfig {
    pub const fn with_deadzone(mut self, deadzone: u16) -> Self {
        self.deadzone = deadzone;
        self
    }

    pub const fn with_adc_max(mut self, adc_max: u16) -> Self {
        self.adc_max = adc_max;
        self
    }

    pub const fn with_inverted_axes(mut self, invert_x: bool, invert_y: bool) -> Self {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
        self
    }

    pub const fn with_button_active_low(mut self, button_active_low: bool) -> Self {
        self.button_active_low = button_active_low;
        self
    }

    pub const fn with_button_debounce_polls(mut self, button_debounce_polls: u8) -> Self {
        self.button_debounce_polls = button_debounce_polls;
        self
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum JoystickError<AdcErr, SwErr> {
    Analog(AdcErr),
    Button(SwErr),
}

type JoystickResult<AdcErr, SwErr, T> = Result<T, JoystickError<AdcErr, SwErr>>;

/// Two-axis analog stick with a push button and a brush size dial.
#[derive(Debug)]
pub struct JoystickInput<A, SW> {
    adc: A,
    sw: SW,
    config: JoystickConfig,
    rest_x: u16,
    rest_y: u16,
    button_raw: bool,
    button_stable: bool,
    button_stable_count: u8,
}

impl<A, SW> JoystickInput<A, SW>
where
    A: AnalogSampler,
    SW: InputPin,
{
    /// Samples the stick once and treats that position as rest.
    pub fn new(
        mut adc: A,
        mut sw: SW,
        config: JoystickConfig,
    ) -> JoystickResult<A::Error, SW::Error, Self> {
        let rest_y = adc
            .sample(AnalogChannel::Vertical)
            .map_err(JoystickError::Analog)?;
        let rest_x = adc
            .sample(AnalogChannel::Horizontal)
            .map_err(JoystickError::Analog)?;
        let sw_high = sw.is_high().map_err(JoystickError::Button)?;
        let button_pressed = button_pressed_from_level(sw_high, config.button_active_low);
        debug!("joystick: rest x={} y={}", rest_x, rest_y);

        Ok(Self {
            adc,
            sw,
            config,
            rest_x,
            rest_y,
            button_raw: button_pressed,
            button_stable: button_pressed,
            button_stable_count: 0,
        })
    }

    pub fn rest(&self) -> (u16, u16) {
        (self.rest_x, self.rest_y)
    }

    fn poll_button(&mut self) -> JoystickResult<A::Error, SW::Error, bool> {
        let sw_high = self.sw.is_high().map_err(JoystickError::Button)?;
        let pressed = button_pressed_from_level(sw_high, self.config.button_active_low);

        if pressed == self.button_raw {
            self.button_stable_count = self.button_stable_count.saturating_add(1);
        } else {
            self.button_raw = pressed;
            self.button_stable_count = 0;
        }

        let debounce_threshold = self.config.button_debounce_polls.max(1);
        if self.button_stable_count >= debounce_threshold && self.button_stable != self.button_raw {
            self.button_stable = self.button_raw;
        }

        Ok(self.button_stable)
    }

    fn poll_axes(&mut self) -> JoystickResult<A::Error, SW::Error, (i8, i8)> {
        let y = self
            .adc
            .sample(AnalogChannel::Vertical)
            .map_err(JoystickError::Analog)?;
        let x = self
            .adc
            .sample(AnalogChannel::Horizontal)
            .map_err(JoystickError::Analog)?;

        let dx = axis_step(x, self.rest_x, self.config.deadzone, self.config.invert_x);
        let dy = axis_step(y, self.rest_y, self.config.deadzone, self.config.invert_y);
        Ok((dx, dy))
    }

    fn poll_dial(&mut self) -> JoystickResult<A::Error, SW::Error, Option<BrushSize>> {
        let raw = self
            .adc
            .sample(AnalogChannel::SizeDial)
            .map_err(JoystickError::Analog)?;
        Ok(dial_size(raw, self.config.adc_max))
    }
}

impl<A, SW> InputProvider for JoystickInput<A, SW>
where
    A: AnalogSampler,
    SW: InputPin,
{
    type Error = JoystickError<A::Error, SW::Error>;

    fn poll_frame(&mut self) -> Result<InputFrame, Self::Error> {
        let (dx, dy) = self.poll_axes()?;
        let size = self.poll_dial()?;
        let button_down = self.poll_button()?;

        Ok(InputFrame {
            dx,
            dy,
            size,
            button_down,
        })
    }
}

/// A reading above rest moves toward the origin, below rest away from it.
#[inline]
fn axis_step(reading: u16, rest: u16, deadzone: u16, inverted: bool) -> i8 {
    let step = if reading > rest.saturating_add(deadzone) {
        -1
    } else if reading < rest.saturating_sub(deadzone) {
        1
    } else {
        0
    };

    if inverted { -step } else { step }
}

/// Maps the dial linearly onto 4..=12 and keeps only exact brush sizes.
#[inline]
fn dial_size(raw: u16, adc_max: u16) -> Option<BrushSize> {
    let adc_max = adc_max.max(1) as u32;
    let raw = (raw as u32).min(adc_max);
    let mapped = raw * 8 / adc_max + 4;
    BrushSize::try_from(mapped as u8).ok()
}

#[inline]
fn button_pressed_from_level(sw_high: bool, active_low: bool) -> bool {
    if active_low { !sw_high } else { sw_high }
}
