//! Pencil/eraser tool state.

use log::debug;

use crate::{color::Color, raster::Shape};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Pencil,
    Eraser,
}

/// Active colour, shape and mode, plus the pencil settings parked while the
/// eraser is in use.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToolState {
    mode: Mode,
    color: Color,
    shape: Shape,
    pencil_color: Color,
    pencil_shape: Shape,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Color::Blue, Shape::Square)
    }
}

impl ToolState {
    /// Pencil mode with the given colour and shape.
    pub const fn new(color: Color, shape: Shape) -> Self {
        Self {
            mode: Mode::Pencil,
            color,
            shape,
            pencil_color: color,
            pencil_shape: shape,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Switches to the eraser, which always paints white. Returns `false`
    /// when already erasing.
    pub fn enter_eraser(&mut self) -> bool {
        if self.mode == Mode::Eraser {
            return false;
        }

        self.pencil_color = self.color;
        self.pencil_shape = self.shape;
        self.color = Color::White;
        self.mode = Mode::Eraser;
        debug!("tool: eraser (parked {:?} {:?})", self.pencil_color, self.pencil_shape);
        true
    }

    /// Returns to the pencil with the colour and shape it had before the
    /// eraser. Returns `false` when already in pencil mode.
    pub fn enter_pencil(&mut self) -> bool {
        if self.mode == Mode::Pencil {
            return false;
        }

        self.color = self.pencil_color;
        self.shape = self.pencil_shape;
        self.mode = Mode::Pencil;
        debug!("tool: pencil {:?} {:?}", self.color, self.shape);
        true
    }

    /// Palette pick; ignored while erasing.
    pub fn pick_color(&mut self, color: Color) -> bool {
        if self.mode != Mode::Pencil || self.color == color {
            return false;
        }

        self.color = color;
        debug!("tool: colour {:?}", color);
        true
    }

    /// Advances Square -> Circle -> Diagonal -> Square in either mode.
    pub fn cycle_shape(&mut self) -> Shape {
        self.shape = self.shape.next();
        debug!("tool: shape {:?}", self.shape);
        self.shape
    }
}
