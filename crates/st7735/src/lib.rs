#![cfg_attr(not(test), no_std)]

//! ST7735 (1.8" 128x160 TFT) driver primitives.

pub mod protocol;

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// Pixels pushed per SPI write while streaming a solid fill.
const FILL_CHUNK_PIXELS: usize = 32;

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Expected SPI clock in Hz (documented for board glue).
    pub spi_hz: u32,
    /// Panel expects blue-green-red subpixel order.
    pub bgr: bool,
    /// Mirror the column address order.
    pub mirror_x: bool,
    /// Mirror the row address order.
    pub mirror_y: bool,
    /// Controller RAM column of panel column 0.
    pub col_offset: u16,
    /// Controller RAM row of panel row 0.
    pub row_offset: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_hz: 8_000_000,
            bgr: false,
            mirror_x: true,
            mirror_y: true,
            col_offset: 0,
            row_offset: 0,
        }
    }
}

impl Config {
    pub const fn with_spi_hz(mut self, spi_hz: u32) -> Self {
        self.spi_hz = spi_hz;
        self
    }

    pub const fn with_bgr(mut self, bgr: bool) -> Self {
        self.bgr = bgr;
        self
    }

    pub const fn with_offsets(mut self, col_offset: u16, row_offset: u16) -> Self {
        self.col_offset = col_offset;
        self.row_offset = row_offset;
        self
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<SpiErr, DcErr, RstErr> {
    /// SPI transaction failed.
    Spi(SpiErr),
    /// Data/command pin operation failed.
    Dc(DcErr),
    /// Reset pin operation failed.
    Rst(RstErr),
    /// Input parameters are outside supported bounds.
    InvalidInput,
}

pub type DriverResult<SpiErr, DcErr, RstErr> = Result<(), Error<SpiErr, DcErr, RstErr>>;

/// ST7735 driver.
#[derive(Debug)]
pub struct St7735<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    config: Config,
}

impl<SPI, DC, RST> St7735<SPI, DC, RST>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new driver instance.
    pub fn new(spi: SPI, dc: DC, rst: RST, config: Config) -> Self {
        Self {
            spi,
            dc,
            rst,
            config,
        }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases owned bus and pins.
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    /// Hardware reset followed by the power-up sequence for 16-bit colour.
    pub fn init<D>(&mut self, delay: &mut D) -> DriverResult<SPI::Error, DC::Error, RST::Error>
    where
        D: DelayNs,
    {
        self.rst.set_high().map_err(Error::Rst)?;
        delay.delay_ms(5);
        self.rst.set_low().map_err(Error::Rst)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(Error::Rst)?;
        delay.delay_ms(120);

        self.command(protocol::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(protocol::SLPOUT, &[])?;
        delay.delay_ms(255);
        self.command(protocol::COLMOD, &[protocol::COLMOD_RGB565])?;
        delay.delay_ms(10);

        let madctl = protocol::madctl_byte(
            self.config.mirror_x,
            self.config.mirror_y,
            self.config.bgr,
        );
        self.command(protocol::MADCTL, &[madctl])?;
        self.command(protocol::INVOFF, &[])?;
        self.command(protocol::NORON, &[])?;
        delay.delay_ms(10);
        self.command(protocol::DISPON, &[])?;
        delay.delay_ms(100);

        Ok(())
    }

    /// Sends one command byte followed by its parameters.
    pub fn command(
        &mut self,
        command: u8,
        params: &[u8],
    ) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.dc.set_low().map_err(Error::Dc)?;
        self.spi.write(&[command]).map_err(Error::Spi)?;

        if params.is_empty() {
            return Ok(());
        }

        self.dc.set_high().map_err(Error::Dc)?;
        self.spi.write(params).map_err(Error::Spi)
    }

    /// Selects a `w`x`h` window at (x, y) and opens RAM for writing.
    pub fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        let window = protocol::build_address_window(
            x,
            y,
            w,
            h,
            self.config.col_offset,
            self.config.row_offset,
        )
        .ok_or(Error::InvalidInput)?;

        self.command(protocol::CASET, &window.columns)?;
        self.command(protocol::RASET, &window.rows)?;
        self.command(protocol::RAMWR, &[])?;
        self.dc.set_high().map_err(Error::Dc)
    }

    /// Writes one pixel.
    pub fn draw_pixel(
        &mut self,
        x: u16,
        y: u16,
        rgb565: u16,
    ) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.set_window(x, y, 1, 1)?;
        self.spi
            .write(&protocol::pixel_bytes(rgb565))
            .map_err(Error::Spi)
    }

    /// Fills a rectangle with one colour.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        rgb565: u16,
    ) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.set_window(x, y, w, h)?;

        let mut chunk = [0u8; FILL_CHUNK_PIXELS * protocol::PIXEL_BYTES];
        for pixel in chunk.chunks_exact_mut(protocol::PIXEL_BYTES) {
            pixel.copy_from_slice(&protocol::pixel_bytes(rgb565));
        }

        let mut remaining = w as usize * h as usize;
        while remaining > 0 {
            let pixels = remaining.min(FILL_CHUNK_PIXELS);
            self.spi
                .write(&chunk[..pixels * protocol::PIXEL_BYTES])
                .map_err(Error::Spi)?;
            remaining -= pixels;
        }

        Ok(())
    }
}
