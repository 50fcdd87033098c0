//! Renderer capability consumed by the core, plus the icon bar view model.

use crate::{color::Color, raster::Shape, tool::Mode};

/// Display colours: the canvas palette plus chrome-only colours.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Ink {
    White,
    Black,
    Red,
    Blue,
    /// Cursor outline.
    Green,
    Yellow,
    Magenta,
    Orange,
}

impl From<Color> for Ink {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Ink::White,
            Color::Black => Ink::Black,
            Color::Red => Ink::Red,
            Color::Blue => Ink::Blue,
        }
    }
}

/// What the icon bar should show after a tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChromeView {
    pub mode: Mode,
    pub color: Color,
    pub shape: Shape,
    /// Columns `dirty_from..dirty_to` were crossed by the old or new cursor.
    pub dirty_from: u16,
    pub dirty_to: u16,
    /// Repaint every icon, not only those under the dirty columns.
    pub full: bool,
}

impl ChromeView {
    /// Whether columns `from..to` need repainting.
    pub fn is_dirty(&self, from: u16, to: u16) -> bool {
        self.full || (from < self.dirty_to && self.dirty_from < to)
    }
}

/// Pixel sink for a physical or virtual display.
///
/// Only `draw_pixel` is required. The bulk primitives default to it and exist
/// for chrome; canvas restoration goes through `draw_pixel` alone.
pub trait Renderer {
    type Error;

    fn draw_pixel(&mut self, x: u16, y: u16, ink: Ink) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ink: Ink) -> Result<(), Self::Error> {
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                self.draw_pixel(px, py, ink)?;
            }
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        ink: Ink,
    ) -> Result<(), Self::Error> {
        let (mut x, mut y) = (x0 as i32, y0 as i32);
        let (x1, y1) = (x1 as i32, y1 as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            draw_pixel_signed(self, x, y, ink)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_circle(&mut self, cx: i16, cy: i16, r: i16, ink: Ink) -> Result<(), Self::Error> {
        let (cx, cy) = (cx as i32, cy as i32);
        let (mut x, mut y) = (r as i32, 0i32);
        let mut err = 1 - x;

        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx - y, cy - x),
                (cx + y, cy - x),
                (cx + x, cy - y),
            ] {
                draw_pixel_signed(self, px, py, ink)?;
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
        Ok(())
    }

    fn fill_circle(&mut self, cx: i16, cy: i16, r: i16, ink: Ink) -> Result<(), Self::Error> {
        let r = r as i32;
        for dy in -r..=r {
            let mut half = 0;
            while (half + 1) * (half + 1) + dy * dy <= r * r {
                half += 1;
            }
            let y = cy as i32 + dy;
            for x in (cx as i32 - half)..=(cx as i32 + half) {
                draw_pixel_signed(self, x, y, ink)?;
            }
        }
        Ok(())
    }

    /// Repaints the icon bar. Renderers without chrome ignore it.
    fn draw_icon_bar(&mut self, view: &ChromeView) -> Result<(), Self::Error> {
        let _ = view;
        Ok(())
    }
}

fn draw_pixel_signed<R>(renderer: &mut R, x: i32, y: i32, ink: Ink) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
        return Ok(());
    }

    renderer.draw_pixel(x as u16, y as u16, ink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ShadowScreen;

    #[test]
    fn line_reaches_both_endpoints() {
        let mut screen = ShadowScreen::new();
        screen.draw_line(84, 152, 93, 143, Ink::Red).unwrap();

        assert_eq!(screen.ink(84, 152), Some(Ink::Red));
        assert_eq!(screen.ink(93, 143), Some(Ink::Red));
        assert_eq!(screen.ink(88, 148), Some(Ink::Red));
        assert_eq!(screen.total_draws(), 10);
    }

    #[test]
    fn negative_coordinates_are_skipped() {
        let mut screen = ShadowScreen::new();
        screen.draw_line(-3, 0, 2, 0, Ink::Black).unwrap();

        assert_eq!(screen.total_draws(), 3);
        assert_eq!(screen.ink(0, 0), Some(Ink::Black));
    }

    #[test]
    fn circle_outline_touches_the_radius() {
        let mut screen = ShadowScreen::new();
        screen.draw_circle(20, 20, 4, Ink::Green).unwrap();

        assert_eq!(screen.ink(24, 20), Some(Ink::Green));
        assert_eq!(screen.ink(20, 16), Some(Ink::Green));
        assert_eq!(screen.ink(20, 20), None);
    }

    #[test]
    fn filled_circle_stays_inside_radius() {
        let mut screen = ShadowScreen::new();
        screen.fill_circle(10, 10, 4, Ink::Blue).unwrap();

        assert_eq!(screen.ink(10, 10), Some(Ink::Blue));
        assert_eq!(screen.ink(14, 10), Some(Ink::Blue));
        assert_eq!(screen.ink(14, 14), None);
    }
}
