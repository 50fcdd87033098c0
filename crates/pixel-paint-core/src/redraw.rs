//! Restores committed canvas colours under a cursor that moved away.
//!
//! The cursor is only ever drawn on the display, never into the store, so the
//! store still holds the true picture. Repainting the old footprint from it
//! erases the overlay without a full-screen render.

use crate::{
    canvas::{HEIGHT, PIXELS_PER_GROUP, PixelStore, WIDTH, decode_pixel},
    cursor::Anchor,
    raster::{BrushSize, Footprint, Shape},
    render::Renderer,
};

/// Repaints the canvas part of the footprint of a cursor at `anchor` with the
/// colours held in `store`. Rows in the icon bar are left alone.
///
/// Each pixel is drawn once; each packed byte is read once per row.
/// Returns the number of pixels drawn.
pub fn redraw_region<R>(
    store: &PixelStore,
    renderer: &mut R,
    anchor: Anchor,
    shape: Shape,
    size: BrushSize,
) -> Result<usize, R::Error>
where
    R: Renderer + ?Sized,
{
    let Some(region) = Footprint::of(anchor, shape, size).clipped(WIDTH, HEIGHT) else {
        return Ok(0);
    };

    repaint(store, renderer, region)
}

/// Repaints the whole canvas from `store`.
pub fn repaint_canvas<R>(store: &PixelStore, renderer: &mut R) -> Result<usize, R::Error>
where
    R: Renderer + ?Sized,
{
    let canvas = Footprint {
        x: 0,
        y: 0,
        width: WIDTH,
        height: HEIGHT,
    };
    repaint(store, renderer, canvas)
}

fn repaint<R>(store: &PixelStore, renderer: &mut R, region: Footprint) -> Result<usize, R::Error>
where
    R: Renderer + ?Sized,
{
    let x_end = region.x + region.width;
    let first_column = region.x / PIXELS_PER_GROUP;
    let last_column = (x_end - 1) / PIXELS_PER_GROUP;
    let mut drawn = 0;

    for y in region.y..region.y + region.height {
        for column in first_column..=last_column {
            let Some(group) = store.group(column, y) else {
                continue;
            };

            let base = column * PIXELS_PER_GROUP;
            let from = region.x.max(base);
            let to = x_end.min(base + PIXELS_PER_GROUP);
            for x in from..to {
                let color = decode_pixel(group, (x - base) as u8);
                renderer.draw_pixel(x, y, color.into())?;
                drawn += 1;
            }
        }
    }

    Ok(drawn)
}
