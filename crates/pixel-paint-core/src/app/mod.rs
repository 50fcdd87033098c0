//! Paint loop: joystick frames in, stamped pixels and cursor overlays out.

pub mod icons;

use core::fmt;

use log::{debug, info};

use crate::{
    canvas::{HEIGHT, PixelStore, WIDTH},
    color::Color,
    cursor::{Anchor, Cursor, SCREEN_HEIGHT},
    input::{InputFrame, InputProvider},
    raster::{BrushSize, Mask, Shape},
    redraw::{redraw_region, repaint_canvas},
    render::{ChromeView, Ink, Renderer},
    tool::ToolState,
};

use self::icons::{ICON_BAR_TOP, IconAction, icon_at, palette_color_at};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    Idle,
    CursorMoved,
    Painted,
    ToolChanged,
    Cleared,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppError<InErr, RenderErr> {
    Input(InErr),
    Render(RenderErr),
}

impl<InErr: fmt::Debug, RenderErr: fmt::Debug> fmt::Display for AppError<InErr, RenderErr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "input error: {err:?}"),
            Self::Render(err) => write!(f, "render error: {err:?}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaintConfig {
    pub size: BrushSize,
    pub color: Color,
    pub shape: Shape,
    /// Delay after a painting tick.
    pub paint_pace_ms: u16,
    /// Delay after a cursor move, indexed Small, Medium, Large.
    pub move_pace_ms: [u16; 3],
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            size: BrushSize::Medium,
            color: Color::Blue,
            shape: Shape::Square,
            paint_pace_ms: 30,
            move_pace_ms: [30, 20, 10],
        }
    }
}

impl PaintConfig {
    pub const fn with_size(mut self, size: BrushSize) -> Self {
        self.size = size;
        self
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub const fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub const fn with_pacing(mut self, paint_pace_ms: u16, move_pace_ms: [u16; 3]) -> Self {
        self.paint_pace_ms = paint_pace_ms;
        self.move_pace_ms = move_pace_ms;
        self
    }
}

pub struct PaintApp<IN>
where
    IN: InputProvider,
{
    input: IN,
    config: PaintConfig,
    store: PixelStore,
    tool: ToolState,
    anchor: Anchor,
    size: BrushSize,
    /// Cursor as currently drawn on the display.
    shown: Cursor,
    shown_outlined: bool,
    button_was_down: bool,
}

impl<IN> PaintApp<IN>
where
    IN: InputProvider,
{
    pub fn new(input: IN, config: PaintConfig) -> Self {
        let half = config.size.px() as u16 / 2;
        let anchor = Anchor::new(WIDTH / 2 - half, HEIGHT / 2 - half);
        let tool = ToolState::new(config.color, config.shape);
        let shown = Cursor {
            anchor,
            size: config.size,
            shape: tool.shape(),
            color: tool.color(),
        };

        Self {
            input,
            config,
            store: PixelStore::new(),
            tool,
            anchor,
            size: config.size,
            shown,
            shown_outlined: true,
            button_was_down: false,
        }
    }

    /// Paints the blank canvas, the icon bar and the initial cursor.
    pub fn start<R>(&mut self, renderer: &mut R) -> Result<(), R::Error>
    where
        R: Renderer + ?Sized,
    {
        info!(
            "paint: start {}x{} size={} colour={:?} shape={:?}",
            WIDTH,
            HEIGHT,
            self.size.px(),
            self.tool.color(),
            self.tool.shape()
        );

        repaint_canvas(&self.store, renderer)?;
        let cursor = self.next_cursor();
        renderer.draw_icon_bar(&self.chrome_view(cursor, cursor, true))?;
        self.draw_cursor(renderer, cursor, true)?;
        self.shown = cursor;
        self.shown_outlined = true;
        Ok(())
    }

    /// Polls one input frame and applies it.
    pub fn tick<R>(&mut self, renderer: &mut R) -> Result<TickResult, AppError<IN::Error, R::Error>>
    where
        R: Renderer + ?Sized,
    {
        let frame = self.input.poll_frame().map_err(AppError::Input)?;
        self.apply_frame(frame, renderer).map_err(AppError::Render)
    }

    /// How long the host should wait before the next tick.
    pub fn pace_ms(&self, result: TickResult) -> u16 {
        match result {
            TickResult::Painted => self.config.paint_pace_ms,
            TickResult::CursorMoved => {
                let index = BrushSize::ALL
                    .iter()
                    .position(|size| *size == self.size)
                    .unwrap_or(0);
                self.config.move_pace_ms[index]
            }
            TickResult::Idle | TickResult::ToolChanged | TickResult::Cleared => 0,
        }
    }

    pub fn store(&self) -> &PixelStore {
        &self.store
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    /// Cursor as currently drawn.
    pub fn cursor(&self) -> Cursor {
        self.shown
    }

    pub fn config(&self) -> PaintConfig {
        self.config
    }
}

include!("runtime.rs");

#[cfg(test)]
mod tests;
