//! Icon bar layout and hit testing.

use core::cmp::Ordering;

use crate::{canvas::HEIGHT, color::Color};

/// First screen row of the icon bar.
pub const ICON_BAR_TOP: u16 = HEIGHT;
/// Columns of the vertical lines separating the five icons.
pub const ICON_DIVIDERS: [u16; 4] = [24, 50, 76, 102];
/// Palette swatches split at this column and row.
pub const PALETTE_SPLIT_X: u16 = 12;
pub const PALETTE_SPLIT_Y: u16 = 148;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IconAction {
    Palette,
    Pencil,
    Eraser,
    Shape,
    Clear,
}

/// Icon under a cursor whose left edge is at `x`. Cursors sitting on a
/// divider hit nothing.
pub fn icon_at(x: u16) -> Option<IconAction> {
    const PENCIL: u16 = ICON_DIVIDERS[0] + 1;
    const ERASER: u16 = ICON_DIVIDERS[1] + 1;
    const SHAPE: u16 = ICON_DIVIDERS[2] + 1;
    const CLEAR: u16 = ICON_DIVIDERS[3] + 1;

    match x {
        x if ICON_DIVIDERS.contains(&x) => None,
        0..PENCIL => Some(IconAction::Palette),
        PENCIL..ERASER => Some(IconAction::Pencil),
        ERASER..SHAPE => Some(IconAction::Eraser),
        SHAPE..CLEAR => Some(IconAction::Shape),
        CLEAR.. => Some(IconAction::Clear),
    }
}

/// Palette swatch under the cursor centre (`cx`, `cy`). The split lines
/// themselves pick nothing.
pub fn palette_color_at(cx: u16, cy: u16) -> Option<Color> {
    match (cx.cmp(&PALETTE_SPLIT_X), cy.cmp(&PALETTE_SPLIT_Y)) {
        (Ordering::Less, Ordering::Less) => Some(Color::Black),
        (Ordering::Less, Ordering::Greater) => Some(Color::White),
        (Ordering::Greater, Ordering::Less) => Some(Color::Red),
        (Ordering::Greater, Ordering::Greater) => Some(Color::Blue),
        _ => None,
    }
}
