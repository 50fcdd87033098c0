//! The live, never-persisted brush cursor.

use crate::{
    color::Color,
    raster::{BrushSize, Footprint, Mask, Shape},
};

/// Screen height in pixels: the canvas plus the icon bar below it.
pub const SCREEN_HEIGHT: u16 = 160;

/// Top-left corner of the cursor box in screen coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

impl Anchor {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Moves by (dx, dy) and clamps so a box of `extent` stays on a
    /// `width` x `height` screen.
    pub fn stepped(self, dx: i8, dy: i8, extent: u16, width: u16, height: u16) -> Self {
        let max_x = width.saturating_sub(extent) as i32;
        let max_y = height.saturating_sub(extent) as i32;
        Self {
            x: (self.x as i32 + dx as i32).clamp(0, max_x) as u16,
            y: (self.y as i32 + dy as i32).clamp(0, max_y) as u16,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor {
    pub anchor: Anchor,
    pub size: BrushSize,
    pub shape: Shape,
    pub color: Color,
}

impl Cursor {
    pub fn mask(&self) -> &'static Mask {
        Mask::lookup(self.shape, self.size)
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::of(self.anchor, self.shape, self.size)
    }

    /// Side of the cursor box.
    pub fn extent(&self) -> u16 {
        self.mask().extent() as u16
    }
}
