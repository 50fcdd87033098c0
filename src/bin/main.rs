#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use core::convert::Infallible;

use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcConfig, AdcPin, Attenuation},
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::{ADC1, GPIO1, GPIO2, GPIO3},
    spi::master::Spi,
    time::Rate,
    timer::timg::TimerGroup,
};
use log::{LevelFilter, info, warn};
use pixel_paint_core::{
    app::{PaintApp, PaintConfig},
    raster::BrushSize,
};
use pixel_paint_hal::{
    input::{AnalogChannel, AnalogSampler, JoystickConfig, JoystickInput},
    led::SizeLeds,
    render::TftRenderer,
};
use st7735::St7735;

const DISPLAY_SPI_HZ: u32 = 16_000_000;
/// ESP32-S3 one-shot conversions are 12-bit.
const ADC_MAX: u16 = 4095;
const JOYSTICK_DEADZONE: u16 = 40;
const TICK_FAILURE_BACKOFF_MS: u64 = 100;

/// Joystick and size dial on ADC1.
struct BoardAdc<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    vertical: AdcPin<GPIO1<'d>, ADC1<'d>>,
    horizontal: AdcPin<GPIO2<'d>, ADC1<'d>>,
    dial: AdcPin<GPIO3<'d>, ADC1<'d>>,
}

impl AnalogSampler for BoardAdc<'_> {
    type Error = Infallible;

    fn sample(&mut self, channel: AnalogChannel) -> Result<u16, Self::Error> {
        loop {
            let reading = match channel {
                AnalogChannel::Vertical => self.adc.read_oneshot(&mut self.vertical),
                AnalogChannel::Horizontal => self.adc.read_oneshot(&mut self.horizontal),
                AnalogChannel::SizeDial => self.adc.read_oneshot(&mut self.dial),
            };
            if let Ok(value) = reading {
                return Ok(value);
            }
        }
    }
}

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // TFT wiring: SCK=GPIO12, MOSI=GPIO11, CS=GPIO10, DC=GPIO9, RST=GPIO8
    let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let dc = Output::new(peripherals.GPIO9, Level::Low, OutputConfig::default());
    let rst = Output::new(peripherals.GPIO8, Level::High, OutputConfig::default());

    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(DISPLAY_SPI_HZ))
        .with_mode(esp_hal::spi::Mode::_0);

    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO12)
        .with_mosi(peripherals.GPIO11);
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    let mut delay = Delay::new();
    let mut display = St7735::new(
        spi_device,
        dc,
        rst,
        st7735::Config::default().with_spi_hz(DISPLAY_SPI_HZ),
    );
    if let Err(err) = display.init(&mut delay) {
        warn!("display: init failed: {:?}", err);
    } else {
        info!("display: init ok");
    }
    let mut renderer = TftRenderer::new(display);

    // Joystick wiring: VERT=GPIO1, HORIZ=GPIO2, size dial=GPIO3, button=GPIO4
    let mut adc_config = AdcConfig::new();
    let vertical = adc_config.enable_pin(peripherals.GPIO1, Attenuation::_11dB);
    let horizontal = adc_config.enable_pin(peripherals.GPIO2, Attenuation::_11dB);
    let dial = adc_config.enable_pin(peripherals.GPIO3, Attenuation::_11dB);
    let adc = BoardAdc {
        adc: Adc::new(peripherals.ADC1, adc_config),
        vertical,
        horizontal,
        dial,
    };

    let button = Input::new(
        peripherals.GPIO4,
        InputConfig::default().with_pull(Pull::Up),
    );
    let input = JoystickInput::new(
        adc,
        button,
        JoystickConfig::default()
            .with_adc_max(ADC_MAX)
            .with_deadzone(JOYSTICK_DEADZONE)
            .with_button_debounce_polls(2),
    )
    .unwrap();

    // Size LEDs: GPIO5, GPIO6, GPIO7
    let mut leds = SizeLeds::new([
        Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO6, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO7, Level::Low, OutputConfig::default()),
    ]);

    let mut app = PaintApp::new(input, PaintConfig::default());
    if let Err(err) = app.start(&mut renderer) {
        warn!("paint: start failed: {:?}", err);
    }

    let mut shown_size: Option<BrushSize> = None;
    loop {
        let pace_ms = match app.tick(&mut renderer) {
            Ok(result) => app.pace_ms(result) as u64,
            Err(err) => {
                warn!("paint: tick failed: {}", err);
                TICK_FAILURE_BACKOFF_MS
            }
        };

        let size = app.cursor().size;
        if shown_size != Some(size) {
            if let Err(err) = leds.show(size) {
                warn!("leds: update failed: {:?}", err);
            }
            shown_size = Some(size);
        }

        Timer::after_millis(pace_ms.max(1)).await;
    }
}
