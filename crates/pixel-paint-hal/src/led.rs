//! Brush size indicator: one, two or three LEDs lit.

use embedded_hal::digital::OutputPin;

use pixel_paint_core::raster::BrushSize;

#[derive(Debug)]
pub struct SizeLeds<P> {
    pins: [P; 3],
}

impl<P> SizeLeds<P>
where
    P: OutputPin,
{
    pub fn new(pins: [P; 3]) -> Self {
        Self { pins }
    }

    pub fn show(&mut self, size: BrushSize) -> Result<(), P::Error> {
        let lit = match size {
            BrushSize::Small => 1,
            BrushSize::Medium => 2,
            BrushSize::Large => 3,
        };

        for (index, pin) in self.pins.iter_mut().enumerate() {
            if index < lit {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }

    pub fn release(self) -> [P; 3] {
        self.pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::{cell::Cell, convert::Infallible};

    struct FakeLed<'a> {
        on: &'a Cell<bool>,
    }

    impl embedded_hal::digital::ErrorType for FakeLed<'_> {
        type Error = Infallible;
    }

    impl OutputPin for FakeLed<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.on.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.on.set(true);
            Ok(())
        }
    }

    #[test]
    fn lit_count_follows_brush_size() {
        let states = [Cell::new(false), Cell::new(false), Cell::new(false)];
        let mut leds = SizeLeds::new([
            FakeLed { on: &states[0] },
            FakeLed { on: &states[1] },
            FakeLed { on: &states[2] },
        ]);
        let lit = |states: &[Cell<bool>; 3]| states.iter().filter(|state| state.get()).count();

        leds.show(BrushSize::Large).unwrap();
        assert_eq!(lit(&states), 3);
        leds.show(BrushSize::Small).unwrap();
        assert_eq!(lit(&states), 1);
        assert!(states[0].get());
        leds.show(BrushSize::Medium).unwrap();
        assert_eq!(lit(&states), 2);
        assert!(!states[2].get());
    }
}
