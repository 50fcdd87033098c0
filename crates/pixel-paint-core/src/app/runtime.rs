impl<IN> PaintApp<IN>
where
    IN: InputProvider,
{
    fn apply_frame<R>(&mut self, frame: InputFrame, renderer: &mut R) -> Result<TickResult, R::Error>
    where
        R: Renderer + ?Sized,
    {
        if let Some(size) = frame.size
            && size != self.size
        {
            debug!("paint: brush size {} -> {}", self.size.px(), size.px());
            self.size = size;
        }

        let pressed = frame.button_down && !self.button_was_down;
        self.button_was_down = frame.button_down;

        self.anchor = self.anchor.stepped(
            frame.dx,
            frame.dy,
            self.extent(),
            WIDTH,
            SCREEN_HEIGHT,
        );

        let mut action = None;
        if pressed && self.anchor.y >= ICON_BAR_TOP {
            action = self.press_icon();
            // A new shape may have grown the box past the screen edge.
            self.anchor = self.anchor.stepped(0, 0, self.extent(), WIDTH, SCREEN_HEIGHT);
        }

        let next = self.next_cursor();
        let previous = self.shown;
        let changed = next != previous;

        let chrome_refreshed = if action.is_some() {
            renderer.draw_icon_bar(&self.chrome_view(previous, next, true))?;
            true
        } else if changed
            && (next.footprint().reaches_row(ICON_BAR_TOP)
                || previous.footprint().reaches_row(ICON_BAR_TOP))
        {
            renderer.draw_icon_bar(&self.chrome_view(previous, next, false))?;
            true
        } else {
            false
        };

        if action == Some(TickResult::Cleared) {
            self.clear_canvas(renderer)?;
        } else if changed {
            redraw_region(&self.store, renderer, previous.anchor, previous.shape, previous.size)?;
        }

        let painting = frame.button_down && self.anchor.y < HEIGHT;
        let result = if painting {
            self.store.stamp(next.anchor, next.mask(), next.color);
            if changed || chrome_refreshed || self.shown_outlined {
                self.replace_cursor(renderer, next, false)?;
            }
            TickResult::Painted
        } else if changed || chrome_refreshed || !self.shown_outlined {
            self.replace_cursor(renderer, next, true)?;
            TickResult::CursorMoved
        } else {
            TickResult::Idle
        };

        Ok(action.unwrap_or(result))
    }

    /// Applies the icon under the cursor. Returns `None` when nothing changed.
    fn press_icon(&mut self) -> Option<TickResult> {
        let extent = self.extent();
        let icon = icon_at(self.anchor.x)?;
        debug!("paint: icon {:?} at x={}", icon, self.anchor.x);

        let changed = match icon {
            IconAction::Palette => {
                let half = extent / 2;
                palette_color_at(self.anchor.x + half, self.anchor.y + half)
                    .is_some_and(|color| self.tool.pick_color(color))
            }
            IconAction::Pencil => self.tool.enter_pencil(),
            IconAction::Eraser => self.tool.enter_eraser(),
            IconAction::Shape => {
                self.tool.cycle_shape();
                true
            }
            IconAction::Clear => return Some(TickResult::Cleared),
        };

        changed.then_some(TickResult::ToolChanged)
    }

    fn clear_canvas<R>(&mut self, renderer: &mut R) -> Result<(), R::Error>
    where
        R: Renderer + ?Sized,
    {
        debug!("paint: clear canvas");
        self.store.clear();
        renderer.fill_rect(0, 0, WIDTH, HEIGHT, Ink::from(Color::White))
    }

    fn replace_cursor<R>(&mut self, renderer: &mut R, cursor: Cursor, outlined: bool) -> Result<(), R::Error>
    where
        R: Renderer + ?Sized,
    {
        self.draw_cursor(renderer, cursor, outlined)?;
        self.shown = cursor;
        self.shown_outlined = outlined;
        Ok(())
    }

    /// Draws the cursor mask in its colour; outlined cursors get a green rim.
    /// Pixels past the screen are skipped.
    fn draw_cursor<R>(&self, renderer: &mut R, cursor: Cursor, outlined: bool) -> Result<(), R::Error>
    where
        R: Renderer + ?Sized,
    {
        let mask = cursor.mask();
        let fill = Ink::from(cursor.color);

        for (dx, dy) in mask.offsets() {
            let x = cursor.anchor.x + dx as u16;
            let y = cursor.anchor.y + dy as u16;
            if x >= WIDTH || y >= SCREEN_HEIGHT {
                continue;
            }

            let ink = if outlined && mask.is_edge(dx, dy) {
                Ink::Green
            } else {
                fill
            };
            renderer.draw_pixel(x, y, ink)?;
        }

        Ok(())
    }

    fn next_cursor(&self) -> Cursor {
        Cursor {
            anchor: self.anchor,
            size: self.size,
            shape: self.tool.shape(),
            color: self.tool.color(),
        }
    }

    fn extent(&self) -> u16 {
        Mask::lookup(self.tool.shape(), self.size).extent() as u16
    }

    fn chrome_view(&self, previous: Cursor, next: Cursor, full: bool) -> ChromeView {
        let (old, new) = (previous.footprint(), next.footprint());
        ChromeView {
            mode: self.tool.mode(),
            color: self.tool.color(),
            shape: self.tool.shape(),
            dirty_from: old.x.min(new.x),
            dirty_to: (old.x + old.width).max(new.x + new.width),
            full,
        }
    }
}
