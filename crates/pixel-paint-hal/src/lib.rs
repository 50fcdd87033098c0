#![cfg_attr(not(test), no_std)]

//! Board glue for the pixel paint core: analog joystick input, brush size
//! LEDs and an ST7735 backed renderer.

pub mod input;
pub mod led;
pub mod render;
