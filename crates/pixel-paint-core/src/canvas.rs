//! Packed 2bpp canvas store.

use core::fmt;

use crate::{color::Color, cursor::Anchor, raster::Mask};

/// Drawable canvas width in pixels.
pub const WIDTH: u16 = 128;
/// Drawable canvas height in pixels. Rows below belong to the icon bar.
pub const HEIGHT: u16 = 136;
/// Pixels packed into one storage byte.
pub const PIXELS_PER_GROUP: u16 = 4;
/// Storage bytes per canvas row.
pub const GROUP_COLUMNS: usize = (WIDTH / PIXELS_PER_GROUP) as usize;
/// Total store size in bytes.
pub const STORE_BYTES: usize = GROUP_COLUMNS * HEIGHT as usize;

const LANE_MASK: u8 = 0b11;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CanvasError {
    /// Coordinate outside `[0, WIDTH) x [0, HEIGHT)`.
    OutOfBounds { x: u16, y: u16 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => write!(f, "pixel ({x}, {y}) is outside the canvas"),
        }
    }
}

/// Bit shift of `lane` (0..4) inside a group. Lane 0 sits in the top two bits.
#[inline]
const fn lane_shift(lane: u8) -> u8 {
    6 - 2 * (lane & 0b11)
}

/// Extracts the colour held by `lane` of a packed group.
#[inline]
pub const fn decode_pixel(group: u8, lane: u8) -> Color {
    Color::from_code(group >> lane_shift(lane))
}

/// Returns `group` with `lane` replaced by `color`; the other lanes are kept.
#[inline]
pub const fn encode_pixel(group: u8, lane: u8, color: Color) -> u8 {
    let shift = lane_shift(lane);
    (group & !(LANE_MASK << shift)) | (color.code() << shift)
}

/// Canvas pixels, four per byte, row-major.
#[derive(Clone)]
pub struct PixelStore {
    bytes: [u8; STORE_BYTES],
}

impl Default for PixelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PixelStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelStore")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl PixelStore {
    /// Creates an all-white store.
    pub const fn new() -> Self {
        Self {
            bytes: [Color::White.fill_byte(); STORE_BYTES],
        }
    }

    /// Whether (x, y) addresses canvas state.
    #[inline]
    pub const fn contains(x: u16, y: u16) -> bool {
        x < WIDTH && y < HEIGHT
    }

    #[inline]
    fn index(x: u16, y: u16) -> Result<(usize, u8), CanvasError> {
        if !Self::contains(x, y) {
            return Err(CanvasError::OutOfBounds { x, y });
        }

        let index = y as usize * GROUP_COLUMNS + (x / PIXELS_PER_GROUP) as usize;
        Ok((index, (x % PIXELS_PER_GROUP) as u8))
    }

    /// Returns the underlying packed bytes.
    pub fn bytes(&self) -> &[u8; STORE_BYTES] {
        &self.bytes
    }

    /// Reads the colour at (x, y).
    pub fn get(&self, x: u16, y: u16) -> Result<Color, CanvasError> {
        let (index, lane) = Self::index(x, y)?;
        Ok(decode_pixel(self.bytes[index], lane))
    }

    /// Writes the colour at (x, y), leaving the three sibling pixels of its
    /// group untouched.
    pub fn set(&mut self, x: u16, y: u16, color: Color) -> Result<(), CanvasError> {
        let (index, lane) = Self::index(x, y)?;
        self.bytes[index] = encode_pixel(self.bytes[index], lane, color);
        Ok(())
    }

    /// Resets every pixel to white.
    pub fn clear(&mut self) {
        self.bytes.fill(Color::White.fill_byte());
    }

    /// Raw packed byte for group `column` of row `y`.
    pub fn group(&self, column: u16, y: u16) -> Option<u8> {
        if column as usize >= GROUP_COLUMNS || y >= HEIGHT {
            return None;
        }

        Some(self.bytes[y as usize * GROUP_COLUMNS + column as usize])
    }

    /// Commits `mask` anchored at `anchor` in `color`.
    ///
    /// Offsets landing outside the canvas (icon bar, right edge) are skipped.
    /// Returns the number of pixels written.
    pub fn stamp(&mut self, anchor: Anchor, mask: &Mask, color: Color) -> usize {
        let mut written = 0;
        for (dx, dy) in mask.offsets() {
            let (Some(x), Some(y)) = (
                anchor.x.checked_add(dx as u16),
                anchor.y.checked_add(dy as u16),
            ) else {
                continue;
            };

            if self.set(x, y, color).is_ok() {
                written += 1;
            }
        }

        written
    }
}
