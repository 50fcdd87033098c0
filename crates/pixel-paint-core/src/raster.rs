//! Brush rasterization: (shape, size) to the pixel offsets a cursor covers.
//!
//! Every shape/size pair is a static table of row spans. The same table is
//! used to commit paint and to draw the live cursor, so the two always line up.

use core::{fmt, iter::FusedIterator};

use crate::cursor::Anchor;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RasterError {
    /// Size or shape outside the supported set.
    InvalidParameter,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => f.write_str("unsupported brush size or shape"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Shape {
    #[default]
    Square,
    Circle,
    Diagonal,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Square, Shape::Circle, Shape::Diagonal];

    /// Next shape in the Square -> Circle -> Diagonal cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Square => Self::Circle,
            Self::Circle => Self::Diagonal,
            Self::Diagonal => Self::Square,
        }
    }
}

impl TryFrom<u8> for Shape {
    type Error = RasterError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(RasterError::InvalidParameter)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BrushSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Side of the brush box in pixels.
    pub const fn px(self) -> u8 {
        match self {
            Self::Small => 4,
            Self::Medium => 8,
            Self::Large => 12,
        }
    }
}

impl TryFrom<u8> for BrushSize {
    type Error = RasterError;

    fn try_from(px: u8) -> Result<Self, Self::Error> {
        match px {
            4 => Ok(Self::Small),
            8 => Ok(Self::Medium),
            12 => Ok(Self::Large),
            _ => Err(RasterError::InvalidParameter),
        }
    }
}

/// Horizontal run of `len` pixels starting at (`x0`, `dy`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
    pub dy: u8,
    pub x0: u8,
    pub len: u8,
}

impl Span {
    const fn new(dy: u8, x0: u8, len: u8) -> Self {
        Self { dy, x0, len }
    }

    #[inline]
    fn contains(&self, dx: u8) -> bool {
        dx >= self.x0 && dx - self.x0 < self.len
    }
}

/// Pixel coverage of one shape at one size, as rows of spans.
#[derive(Debug, Eq, PartialEq)]
pub struct Mask {
    extent: u8,
    spans: &'static [Span],
}

const fn square_rows<const N: usize>() -> [Span; N] {
    let mut rows = [Span::new(0, 0, N as u8); N];
    let mut dy = 0;
    while dy < N {
        rows[dy] = Span::new(dy as u8, 0, N as u8);
        dy += 1;
    }
    rows
}

// Top-right to bottom-left stroke, two pixels thick: each step of the walk
// covers (x, y), its left neighbour and the pixel below, which leaves two
// pixels on the end rows and three on every row between.
const fn diagonal_rows<const N: usize>() -> [Span; N] {
    let mut rows = [Span::new(0, 0, 2); N];
    rows[0] = Span::new(0, N as u8 - 2, 2);
    let mut dy = 1;
    while dy < N - 1 {
        rows[dy] = Span::new(dy as u8, (N - 2 - dy) as u8, 3);
        dy += 1;
    }
    rows[N - 1] = Span::new(N as u8 - 1, 0, 2);
    rows
}

static SQUARE_4: [Span; 4] = square_rows::<4>();
static SQUARE_8: [Span; 8] = square_rows::<8>();
static SQUARE_12: [Span; 12] = square_rows::<12>();

static DIAGONAL_4: [Span; 4] = diagonal_rows::<4>();
static DIAGONAL_8: [Span; 8] = diagonal_rows::<8>();
static DIAGONAL_12: [Span; 12] = diagonal_rows::<12>();

// Hand-tuned disks, one pixel wider and taller than the brush size.
static CIRCLE_4: [Span; 5] = [
    Span::new(0, 1, 3),
    Span::new(1, 0, 5),
    Span::new(2, 0, 5),
    Span::new(3, 0, 5),
    Span::new(4, 1, 3),
];

static CIRCLE_8: [Span; 9] = [
    Span::new(0, 3, 3),
    Span::new(1, 1, 7),
    Span::new(2, 1, 7),
    Span::new(3, 0, 9),
    Span::new(4, 0, 9),
    Span::new(5, 0, 9),
    Span::new(6, 1, 7),
    Span::new(7, 1, 7),
    Span::new(8, 3, 3),
];

static CIRCLE_12: [Span; 13] = [
    Span::new(0, 4, 5),
    Span::new(1, 3, 7),
    Span::new(2, 2, 9),
    Span::new(3, 1, 11),
    Span::new(4, 0, 13),
    Span::new(5, 0, 13),
    Span::new(6, 0, 13),
    Span::new(7, 0, 13),
    Span::new(8, 0, 13),
    Span::new(9, 1, 11),
    Span::new(10, 2, 9),
    Span::new(11, 3, 7),
    Span::new(12, 4, 5),
];

static MASKS: [[Mask; 3]; 3] = [
    [
        Mask::new(4, &SQUARE_4),
        Mask::new(8, &SQUARE_8),
        Mask::new(12, &SQUARE_12),
    ],
    [
        Mask::new(5, &CIRCLE_4),
        Mask::new(9, &CIRCLE_8),
        Mask::new(13, &CIRCLE_12),
    ],
    [
        Mask::new(4, &DIAGONAL_4),
        Mask::new(8, &DIAGONAL_8),
        Mask::new(12, &DIAGONAL_12),
    ],
];

impl Mask {
    const fn new(extent: u8, spans: &'static [Span]) -> Self {
        Self { extent, spans }
    }

    /// Table for `shape` at `size`.
    pub fn lookup(shape: Shape, size: BrushSize) -> &'static Mask {
        let row = match shape {
            Shape::Square => 0,
            Shape::Circle => 1,
            Shape::Diagonal => 2,
        };
        let col = match size {
            BrushSize::Small => 0,
            BrushSize::Medium => 1,
            BrushSize::Large => 2,
        };
        &MASKS[row][col]
    }

    /// Side of the square box enclosing the mask.
    pub fn extent(&self) -> u8 {
        self.extent
    }

    /// Number of covered pixels.
    pub fn pixel_count(&self) -> usize {
        self.spans.iter().map(|span| span.len as usize).sum()
    }

    /// Covered (dx, dy) offsets, row by row, left to right.
    pub fn offsets(&self) -> Offsets {
        Offsets {
            spans: self.spans,
            row: 0,
            col: 0,
        }
    }

    pub fn contains(&self, dx: i16, dy: i16) -> bool {
        if dx < 0 || dy < 0 || dx >= self.extent as i16 || dy >= self.extent as i16 {
            return false;
        }

        self.spans
            .iter()
            .filter(|span| span.dy as i16 == dy)
            .any(|span| span.contains(dx as u8))
    }

    /// Whether a covered pixel borders an uncovered one (4-neighbourhood).
    /// These pixels form the cursor outline.
    pub fn is_edge(&self, dx: u8, dy: u8) -> bool {
        let (dx, dy) = (dx as i16, dy as i16);
        self.contains(dx, dy)
            && [(-1i16, 0i16), (1, 0), (0, -1), (0, 1)]
                .iter()
                .any(|&(ox, oy)| !self.contains(dx + ox, dy + oy))
    }
}

/// Iterator over the offsets of a [`Mask`].
#[derive(Clone, Debug)]
pub struct Offsets {
    spans: &'static [Span],
    row: usize,
    col: u8,
}

impl Iterator for Offsets {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let span = self.spans.get(self.row)?;
            if self.col < span.len {
                let offset = (span.x0 + self.col, span.dy);
                self.col += 1;
                return Some(offset);
            }

            self.row += 1;
            self.col = 0;
        }
    }
}

impl FusedIterator for Offsets {}

/// Offsets covered by `shape` at a brush size given in pixels.
pub fn offsets(shape: Shape, size: u8) -> Result<Offsets, RasterError> {
    let size = BrushSize::try_from(size)?;
    Ok(Mask::lookup(shape, size).offsets())
}

/// Bounding box of a cursor on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Footprint {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Footprint {
    pub fn of(anchor: Anchor, shape: Shape, size: BrushSize) -> Self {
        let extent = Mask::lookup(shape, size).extent() as u16;
        Self {
            x: anchor.x,
            y: anchor.y,
            width: extent,
            height: extent,
        }
    }

    /// Part of the footprint inside a `width` x `height` region at the origin.
    pub fn clipped(self, width: u16, height: u16) -> Option<Self> {
        if self.x >= width || self.y >= height {
            return None;
        }

        Some(Self {
            width: self.width.min(width - self.x),
            height: self.height.min(height - self.y),
            ..self
        })
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x - self.x < self.width && y >= self.y && y - self.y < self.height
    }

    /// Whether any row reaches `row` or beyond.
    pub fn reaches_row(&self, row: u16) -> bool {
        self.y.saturating_add(self.height) > row
    }
}
