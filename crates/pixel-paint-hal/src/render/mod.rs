pub mod icon_bar;

use embedded_hal::{digital::OutputPin, spi::SpiDevice};
use st7735::St7735;

use pixel_paint_core::render::{ChromeView, Ink, Renderer};

/// RGB565 value for each ink.
pub const fn ink_rgb565(ink: Ink) -> u16 {
    match ink {
        Ink::White => 0xFFFF,
        Ink::Black => 0x0000,
        Ink::Red => 0xF800,
        Ink::Blue => 0x001F,
        Ink::Green => 0x07E0,
        Ink::Yellow => 0xFFE0,
        Ink::Magenta => 0xF81F,
        Ink::Orange => 0xFBE0,
    }
}

/// Paint renderer drawing straight to an ST7735 panel.
#[derive(Debug)]
pub struct TftRenderer<SPI, DC, RST> {
    display: St7735<SPI, DC, RST>,
}

impl<SPI, DC, RST> TftRenderer<SPI, DC, RST>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(display: St7735<SPI, DC, RST>) -> Self {
        Self { display }
    }

    pub fn release(self) -> St7735<SPI, DC, RST> {
        self.display
    }
}

impl<SPI, DC, RST> Renderer for TftRenderer<SPI, DC, RST>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = st7735::Error<SPI::Error, DC::Error, RST::Error>;

    fn draw_pixel(&mut self, x: u16, y: u16, ink: Ink) -> Result<(), Self::Error> {
        self.display.draw_pixel(x, y, ink_rgb565(ink))
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ink: Ink) -> Result<(), Self::Error> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.display.fill_rect(x, y, w, h, ink_rgb565(ink))
    }

    fn draw_icon_bar(&mut self, view: &ChromeView) -> Result<(), Self::Error> {
        icon_bar::paint_icon_bar(self, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_inks_use_panel_primaries() {
        assert_eq!(ink_rgb565(Ink::White), 0xFFFF);
        assert_eq!(ink_rgb565(Ink::Black), 0x0000);
        assert_eq!(ink_rgb565(Ink::Red) >> 11, 0x1F);
        assert_eq!(ink_rgb565(Ink::Blue), 0x1F);
        assert_eq!((ink_rgb565(Ink::Green) >> 5) & 0x3F, 0x3F);
    }
}
