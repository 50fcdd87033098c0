//! In-memory renderer double used by the unit tests.

use std::vec::Vec;

use crate::{
    canvas::WIDTH,
    cursor::SCREEN_HEIGHT,
    render::{ChromeView, Ink, Renderer},
};

const PIXELS: usize = WIDTH as usize * SCREEN_HEIGHT as usize;

/// Remembers the last ink of every screen pixel and how often it was drawn.
pub(crate) struct ShadowScreen {
    inks: Vec<Option<Ink>>,
    draws: Vec<u16>,
    pub(crate) chrome: Vec<ChromeView>,
}

impl ShadowScreen {
    pub(crate) fn new() -> Self {
        Self {
            inks: vec![None; PIXELS],
            draws: vec![0; PIXELS],
            chrome: Vec::new(),
        }
    }

    fn index(x: u16, y: u16) -> Option<usize> {
        (x < WIDTH && y < SCREEN_HEIGHT).then(|| y as usize * WIDTH as usize + x as usize)
    }

    pub(crate) fn ink(&self, x: u16, y: u16) -> Option<Ink> {
        Self::index(x, y).and_then(|index| self.inks[index])
    }

    pub(crate) fn draws_at(&self, x: u16, y: u16) -> u16 {
        Self::index(x, y).map_or(0, |index| self.draws[index])
    }

    pub(crate) fn total_draws(&self) -> usize {
        self.draws.iter().map(|count| *count as usize).sum()
    }

    /// Forget draw counts, keep the picture.
    pub(crate) fn reset_counts(&mut self) {
        self.draws.fill(0);
        self.chrome.clear();
    }
}

impl Renderer for ShadowScreen {
    type Error = ();

    fn draw_pixel(&mut self, x: u16, y: u16, ink: Ink) -> Result<(), Self::Error> {
        let index = Self::index(x, y).ok_or(())?;
        self.inks[index] = Some(ink);
        self.draws[index] += 1;
        Ok(())
    }

    fn draw_icon_bar(&mut self, view: &ChromeView) -> Result<(), Self::Error> {
        self.chrome.push(*view);
        Ok(())
    }
}
