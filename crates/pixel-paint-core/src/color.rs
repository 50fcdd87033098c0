//! The four canvas colours and their 2-bit codes.

/// Colour of one canvas pixel.
///
/// The discriminant is the 2-bit code stored in the packed canvas.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0b00,
    Black = 0b01,
    Red = 0b10,
    Blue = 0b11,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::White, Color::Black, Color::Red, Color::Blue];

    /// 2-bit storage code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes the low two bits of `code`; higher bits are ignored.
    #[inline]
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0b00 => Color::White,
            0b01 => Color::Black,
            0b10 => Color::Red,
            _ => Color::Blue,
        }
    }

    /// A byte whose four lanes all hold this colour.
    #[inline]
    pub const fn fill_byte(self) -> u8 {
        self.code() * 0b0101_0101
    }
}
