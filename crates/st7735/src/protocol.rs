//! Wire-level protocol helpers for the ST7735 TFT controller.

/// Panel width in pixels.
pub const WIDTH: u16 = 128;
/// Panel height in pixels.
pub const HEIGHT: u16 = 160;
/// Bytes sent per pixel in 16-bit colour mode.
pub const PIXEL_BYTES: usize = 2;

/// Software reset.
pub const SWRESET: u8 = 0x01;
/// Leave sleep mode.
pub const SLPOUT: u8 = 0x11;
/// Normal display mode on.
pub const NORON: u8 = 0x13;
/// Display inversion off.
pub const INVOFF: u8 = 0x20;
/// Display on.
pub const DISPON: u8 = 0x29;
/// Column address set.
pub const CASET: u8 = 0x2A;
/// Row address set.
pub const RASET: u8 = 0x2B;
/// Memory write.
pub const RAMWR: u8 = 0x2C;
/// Memory data access control.
pub const MADCTL: u8 = 0x36;
/// Interface pixel format.
pub const COLMOD: u8 = 0x3A;

/// `COLMOD` argument selecting 16 bits per pixel.
pub const COLMOD_RGB565: u8 = 0x05;

const MADCTL_MX: u8 = 0x40;
const MADCTL_MY: u8 = 0x80;
const MADCTL_BGR: u8 = 0x08;

/// Builds the `MADCTL` argument.
///
/// The black-tab panels used by the paint board mount rotated, hence the
/// mirrored X/Y default.
#[inline]
pub const fn madctl_byte(mirror_x: bool, mirror_y: bool, bgr: bool) -> u8 {
    (if mirror_x { MADCTL_MX } else { 0 })
        | (if mirror_y { MADCTL_MY } else { 0 })
        | (if bgr { MADCTL_BGR } else { 0 })
}

/// Encodes an inclusive `start..=end` address range for `CASET`/`RASET`.
///
/// Returns `None` when the range is reversed or leaves the panel along an axis
/// of length `limit`.
#[inline]
pub fn encode_address_range(start: u16, end: u16, offset: u16, limit: u16) -> Option<[u8; 4]> {
    if start > end || end >= limit {
        return None;
    }

    let start = start.checked_add(offset)?;
    let end = end.checked_add(offset)?;
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    Some([s_hi, s_lo, e_hi, e_lo])
}

/// Column and row payloads for a window covering `w`×`h` pixels at (x, y).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddressWindow {
    pub columns: [u8; 4],
    pub rows: [u8; 4],
}

/// Builds the address window for a rectangle.
///
/// Returns `None` for empty rectangles or ones that do not fit on the panel.
pub fn build_address_window(
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    col_offset: u16,
    row_offset: u16,
) -> Option<AddressWindow> {
    if w == 0 || h == 0 {
        return None;
    }

    let x_end = x.checked_add(w - 1)?;
    let y_end = y.checked_add(h - 1)?;
    Some(AddressWindow {
        columns: encode_address_range(x, x_end, col_offset, WIDTH)?,
        rows: encode_address_range(y, y_end, row_offset, HEIGHT)?,
    })
}

/// Serialises an RGB565 colour for `RAMWR`.
#[inline]
pub const fn pixel_bytes(rgb565: u16) -> [u8; PIXEL_BYTES] {
    rgb565.to_be_bytes()
}
