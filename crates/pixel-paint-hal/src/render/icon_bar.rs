//! Icon bar drawn under the canvas: palette, pencil, eraser, brush preview
//! and clear.

use pixel_paint_core::{
    app::icons::{ICON_BAR_TOP, ICON_DIVIDERS, PALETTE_SPLIT_X, PALETTE_SPLIT_Y},
    canvas::WIDTH,
    cursor::SCREEN_HEIGHT,
    raster::Shape,
    render::{ChromeView, Ink, Renderer},
    tool::Mode,
};

const ICON_TOP: u16 = ICON_BAR_TOP + 1;
const ICON_HEIGHT: u16 = SCREEN_HEIGHT - ICON_TOP;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Icon {
    Palette,
    Pencil,
    Eraser,
    Clear,
}

impl Icon {
    const ALL: [Icon; 4] = [Icon::Palette, Icon::Pencil, Icon::Eraser, Icon::Clear];

    /// Columns `from..to` the icon occupies, dividers excluded.
    const fn columns(self) -> (u16, u16) {
        match self {
            Icon::Palette => (0, ICON_DIVIDERS[0]),
            Icon::Pencil => (ICON_DIVIDERS[0] + 1, ICON_DIVIDERS[1]),
            Icon::Eraser => (ICON_DIVIDERS[1] + 1, ICON_DIVIDERS[2]),
            Icon::Clear => (ICON_DIVIDERS[3] + 1, WIDTH),
        }
    }
}

/// Repaints the bar. The brush preview is always redrawn; the other icons
/// only when `view` marks their columns dirty.
pub fn paint_icon_bar<R>(renderer: &mut R, view: &ChromeView) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    renderer.fill_rect(0, ICON_BAR_TOP, WIDTH, 1, Ink::Black)?;
    for divider in ICON_DIVIDERS {
        renderer.fill_rect(divider, ICON_TOP, 1, ICON_HEIGHT, Ink::Black)?;
    }

    let dirty = Icon::ALL.iter().filter(|icon| {
        let (from, to) = icon.columns();
        view.is_dirty(from, to)
    });
    for icon in dirty {
        match icon {
            Icon::Palette => paint_palette(renderer)?,
            Icon::Pencil => paint_pencil(renderer, view.mode == Mode::Pencil)?,
            Icon::Eraser => paint_eraser(renderer, view.mode == Mode::Eraser)?,
            Icon::Clear => paint_clear(renderer)?,
        }
    }

    paint_brush_preview(renderer, view)
}

fn paint_palette<R>(renderer: &mut R) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    let half = ICON_DIVIDERS[0] - PALETTE_SPLIT_X;
    renderer.fill_rect(0, ICON_TOP, PALETTE_SPLIT_X, half, Ink::Black)?;
    renderer.fill_rect(PALETTE_SPLIT_X, ICON_TOP, half, half, Ink::Red)?;
    renderer.fill_rect(0, PALETTE_SPLIT_Y, PALETTE_SPLIT_X, half, Ink::White)?;
    renderer.fill_rect(PALETTE_SPLIT_X, PALETTE_SPLIT_Y, half, half, Ink::Blue)
}

fn paint_pencil<R>(renderer: &mut R, active: bool) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    clear_icon(renderer, Icon::Pencil, active)?;
    fill_round_rect(renderer, 33, 152, 9, 6, 2, Ink::Magenta)?;
    renderer.fill_rect(33, 145, 9, 9, Ink::Orange)?;
    fill_triangle(renderer, (33, 144), (41, 144), (37, 138), Ink::Yellow)?;
    renderer.draw_pixel(37, 139, Ink::Black)?;
    renderer.fill_rect(36, 140, 3, 1, Ink::Black)
}

fn paint_eraser<R>(renderer: &mut R, active: bool) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    clear_icon(renderer, Icon::Eraser, active)?;
    fill_round_rect(renderer, 59, 140, 10, 11, 2, Ink::Magenta)?;
    fill_round_rect(renderer, 59, 151, 10, 6, 2, Ink::Blue)?;
    renderer.fill_rect(59, 150, 10, 2, Ink::Blue)
}

fn paint_clear<R>(renderer: &mut R) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    clear_icon(renderer, Icon::Clear, false)?;
    let (left, right) = (ICON_DIVIDERS[3] as i16 + 1, WIDTH as i16 - 1);
    let (top, bottom) = (ICON_TOP as i16, SCREEN_HEIGHT as i16 - 1);
    renderer.draw_line(left, top, right, bottom, Ink::Red)?;
    renderer.draw_line(left, bottom, right, top, Ink::Red)
}

/// Current shape in the current colour.
fn paint_brush_preview<R>(renderer: &mut R, view: &ChromeView) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    let from = ICON_DIVIDERS[2] + 1;
    renderer.fill_rect(from, ICON_TOP, ICON_DIVIDERS[3] - from, ICON_HEIGHT, Ink::White)?;

    let ink = Ink::from(view.color);
    match view.shape {
        Shape::Square => {
            renderer.fill_rect(85, 145, 8, 8, ink)?;
            stroke_rect(renderer, 85, 145, 8, 8, Ink::Black)
        }
        Shape::Circle => {
            renderer.fill_circle(89, 149, 4, ink)?;
            renderer.draw_circle(89, 149, 4, Ink::Black)
        }
        Shape::Diagonal => {
            renderer.draw_line(84, 152, 93, 143, ink)?;
            renderer.draw_line(84, 153, 94, 143, ink)?;
            renderer.draw_line(85, 153, 94, 144, ink)?;

            renderer.draw_pixel(84, 153, Ink::Black)?;
            renderer.draw_line(84, 152, 93, 143, Ink::Black)?;
            renderer.draw_line(85, 153, 94, 144, Ink::Black)?;
            renderer.draw_pixel(94, 143, Ink::Black)
        }
    }
}

/// Blanks an icon cell; the active tool gets a green underline.
fn clear_icon<R>(renderer: &mut R, icon: Icon, active: bool) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    let (from, to) = icon.columns();
    renderer.fill_rect(from, ICON_TOP, to - from, ICON_HEIGHT, Ink::White)?;
    if active {
        renderer.fill_rect(from + 1, SCREEN_HEIGHT - 1, to - from - 2, 1, Ink::Green)?;
    }
    Ok(())
}

fn stroke_rect<R>(renderer: &mut R, x: u16, y: u16, w: u16, h: u16, ink: Ink) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    renderer.fill_rect(x, y, w, 1, ink)?;
    renderer.fill_rect(x, y + h - 1, w, 1, ink)?;
    renderer.fill_rect(x, y, 1, h, ink)?;
    renderer.fill_rect(x + w - 1, y, 1, h, ink)
}

/// Rectangle with corners cut along a circle of `radius`.
fn fill_round_rect<R>(
    renderer: &mut R,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    radius: u16,
    ink: Ink,
) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    let radius = radius.min(w / 2).min(h / 2);
    for row in 0..h {
        let depth = if row < radius {
            radius - row
        } else if row + radius >= h {
            row + radius + 1 - h
        } else {
            0
        };
        let inset = radius - isqrt(radius * radius - depth * depth);
        renderer.fill_rect(x + inset, y + row, w - 2 * inset, 1, ink)?;
    }
    Ok(())
}

fn fill_triangle<R>(
    renderer: &mut R,
    a: (i16, i16),
    b: (i16, i16),
    c: (i16, i16),
    ink: Ink,
) -> Result<(), R::Error>
where
    R: Renderer + ?Sized,
{
    let edge = |p: (i16, i16), q: (i16, i16), x: i16, y: i16| -> i32 {
        (q.0 - p.0) as i32 * (y - p.1) as i32 - (q.1 - p.1) as i32 * (x - p.0) as i32
    };

    let (min_x, max_x) = (a.0.min(b.0).min(c.0), a.0.max(b.0).max(c.0));
    let (min_y, max_y) = (a.1.min(b.1).min(c.1), a.1.max(b.1).max(c.1));
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (e0, e1, e2) = (edge(a, b, x, y), edge(b, c, x, y), edge(c, a, x, y));
            let inside = (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0);
            if inside && x >= 0 && y >= 0 {
                renderer.draw_pixel(x as u16, y as u16, ink)?;
            }
        }
    }
    Ok(())
}

fn isqrt(value: u16) -> u16 {
    let mut root = 0u16;
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}
