use super::*;
use crate::{render::Ink, testing::ShadowScreen, tool::Mode};

struct ScriptedInput<'a> {
    frames: &'a [InputFrame],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(frames: &'a [InputFrame]) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_frame(&mut self) -> Result<InputFrame, Self::Error> {
        let frame = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        Ok(frame)
    }
}

const fn step(dx: i8, dy: i8) -> InputFrame {
    InputFrame {
        dx,
        dy,
        size: None,
        button_down: false,
    }
}

const fn press(dx: i8, dy: i8) -> InputFrame {
    InputFrame {
        dx,
        dy,
        size: None,
        button_down: true,
    }
}

fn started(frames: &[InputFrame], config: PaintConfig) -> (PaintApp<ScriptedInput<'_>>, ShadowScreen) {
    let mut app = PaintApp::new(ScriptedInput::new(frames), config);
    let mut screen = ShadowScreen::new();
    app.start(&mut screen).unwrap();
    (app, screen)
}

#[test]
fn start_paints_blank_canvas_chrome_and_centred_cursor() {
    let (app, screen) = started(&[], PaintConfig::default());

    assert_eq!(app.cursor().anchor, Anchor::new(60, 64));
    assert_eq!(screen.ink(0, 0), Some(Ink::White));
    assert_eq!(screen.ink(60, 64), Some(Ink::Green));
    assert_eq!(screen.ink(63, 67), Some(Ink::Blue));
    assert_eq!(screen.chrome.len(), 1);
    assert!(screen.chrome[0].full);
    assert!(app.store().bytes().iter().all(|byte| *byte == 0));
}

#[test]
fn pressing_commits_a_small_black_square() {
    let frames = [step(-52, -56), press(0, 0)];
    let config = PaintConfig::default()
        .with_size(BrushSize::Small)
        .with_color(Color::Black);
    let (mut app, mut screen) = started(&frames, config);

    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().anchor, Anchor::new(10, 10));
    assert_eq!(app.tick(&mut screen), Ok(TickResult::Painted));

    for y in 0..20 {
        for x in 0..20 {
            let inside = (10..14).contains(&x) && (10..14).contains(&y);
            let expected = if inside { Color::Black } else { Color::White };
            assert_eq!(app.store().get(x, y), Ok(expected), "store at ({x}, {y})");
            assert_eq!(screen.ink(x, y), Some(Ink::from(expected)), "screen at ({x}, {y})");
        }
    }
}

#[test]
fn hovering_away_restores_committed_paint() {
    let frames = [step(-52, -56), press(0, 0), step(20, 0)];
    let config = PaintConfig::default()
        .with_size(BrushSize::Small)
        .with_color(Color::Black);
    let (mut app, mut screen) = started(&frames, config);

    app.tick(&mut screen).unwrap();
    app.tick(&mut screen).unwrap();
    screen.reset_counts();

    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().anchor, Anchor::new(30, 10));
    assert_eq!(screen.ink(10, 10), Some(Ink::Black));
    assert_eq!(screen.draws_at(10, 10), 1);
    assert_eq!(screen.ink(30, 10), Some(Ink::Green));
    assert_eq!(app.store().get(30, 10), Ok(Color::White));
    assert!(screen.chrome.is_empty());
}

#[test]
fn overlapping_move_restores_before_drawing() {
    let frames = [step(1, 0)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    let cursor = app.cursor();
    assert_eq!(cursor.anchor, Anchor::new(61, 64));

    for y in 64..72 {
        assert_eq!(screen.ink(60, y), Some(Ink::White), "vacated column at row {y}");
    }

    let mask = cursor.mask();
    for (dx, dy) in mask.offsets() {
        let (x, y) = (61 + dx as u16, 64 + dy as u16);
        let expected = if mask.is_edge(dx, dy) { Ink::Green } else { Ink::Blue };
        assert_eq!(screen.ink(x, y), Some(expected), "cursor at ({x}, {y})");
    }
}

#[test]
fn drag_stroke_leaves_screen_matching_store() {
    let frames = [press(0, 0), press(1, 0), press(1, 1), step(3, 0)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    for _ in 0..3 {
        assert_eq!(app.tick(&mut screen), Ok(TickResult::Painted));
    }
    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().anchor, Anchor::new(65, 65));

    let store = app.store();
    assert_eq!(store.get(60, 64), Ok(Color::Blue));
    assert_eq!(store.get(69, 72), Ok(Color::Blue));
    assert_eq!(store.get(60, 72), Ok(Color::White));

    let footprint = app.cursor().footprint();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if footprint.contains(x, y) {
                continue;
            }
            let expected = store.get(x, y).map(Ink::from).ok();
            assert_eq!(screen.ink(x, y), expected, "screen at ({x}, {y})");
        }
    }
}

#[test]
fn restarting_on_a_fresh_screen_repaints_committed_pixels() {
    let frames = [press(0, 0), step(20, 0)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());
    app.tick(&mut screen).unwrap();
    app.tick(&mut screen).unwrap();

    let mut fresh = ShadowScreen::new();
    app.start(&mut fresh).unwrap();

    assert_eq!(fresh.ink(60, 64), Some(Ink::Blue));
    assert_eq!(fresh.ink(67, 71), Some(Ink::Blue));
    assert_eq!(fresh.ink(0, 0), Some(Ink::White));
    assert_eq!(fresh.ink(80, 64), Some(Ink::Green));
    assert_eq!(app.store().get(60, 64), Ok(Color::Blue));
}

#[test]
fn holding_still_is_idle() {
    let frames = [step(0, 0)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());
    screen.reset_counts();

    assert_eq!(app.tick(&mut screen), Ok(TickResult::Idle));
    assert_eq!(screen.total_draws(), 0);
}

#[test]
fn brush_size_change_is_adopted_and_redrawn() {
    let frames = [InputFrame {
        size: Some(BrushSize::Large),
        ..InputFrame::default()
    }];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().size, BrushSize::Large);
    assert_eq!(screen.ink(71, 75), Some(Ink::Green));
}

#[test]
fn palette_quadrant_picks_colour_without_painting() {
    // Start (60, 64), medium cursor centre lands at (4, 144): black swatch.
    let frames = [step(-60, 76), press(0, 0)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().anchor, Anchor::new(0, 140));
    screen.reset_counts();

    assert_eq!(app.tick(&mut screen), Ok(TickResult::ToolChanged));
    assert_eq!(app.tool().color(), Color::Black);
    assert_eq!(app.cursor().color, Color::Black);
    assert_eq!(screen.chrome.len(), 1);
    assert!(screen.chrome[0].full);
    assert_eq!(screen.chrome[0].color, Color::Black);
    assert!(app.store().bytes().iter().all(|byte| *byte == 0));
}

#[test]
fn eraser_and_pencil_icons_switch_modes() {
    let frames = [
        press(0, 76),
        step(-30, 0),
        press(0, 0),
        step(0, 0),
        press(0, 0),
    ];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    assert_eq!(app.tick(&mut screen), Ok(TickResult::ToolChanged));
    assert_eq!(app.tool().mode(), Mode::Eraser);
    assert_eq!(app.tool().color(), Color::White);

    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().anchor, Anchor::new(30, 140));

    assert_eq!(app.tick(&mut screen), Ok(TickResult::ToolChanged));
    assert_eq!(app.tool().mode(), Mode::Pencil);
    assert_eq!(app.tool().color(), Color::Blue);

    assert_eq!(app.tick(&mut screen), Ok(TickResult::Idle));
    // Already in pencil mode.
    assert_eq!(app.tick(&mut screen), Ok(TickResult::Idle));
    assert_eq!(app.tool().mode(), Mode::Pencil);
}

#[test]
fn held_button_cycles_shape_once() {
    let frames = [step(30, 76), press(0, 0), press(0, 0), press(0, 0)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    app.tick(&mut screen).unwrap();
    assert_eq!(app.cursor().anchor, Anchor::new(90, 140));

    assert_eq!(app.tick(&mut screen), Ok(TickResult::ToolChanged));
    assert_eq!(app.tool().shape(), Shape::Circle);
    assert_eq!(app.tick(&mut screen), Ok(TickResult::Idle));
    assert_eq!(app.tick(&mut screen), Ok(TickResult::Idle));
    assert_eq!(app.tool().shape(), Shape::Circle);
    assert_eq!(app.cursor().extent(), 9);
}

#[test]
fn clear_icon_wipes_store_and_screen() {
    let frames = [press(0, 0), step(60, 76), press(0, 0)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    assert_eq!(app.tick(&mut screen), Ok(TickResult::Painted));
    assert_eq!(app.store().get(62, 66), Ok(Color::Blue));

    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().anchor, Anchor::new(120, 140));

    assert_eq!(app.tick(&mut screen), Ok(TickResult::Cleared));
    assert!(app.store().bytes().iter().all(|byte| *byte == 0));
    assert_eq!(screen.ink(62, 66), Some(Ink::White));
    assert_eq!(screen.ink(WIDTH - 1, HEIGHT - 1), Some(Ink::White));
    assert_eq!(app.tool().color(), Color::Blue);
}

#[test]
fn holding_the_button_in_the_icon_bar_never_paints() {
    let frames = [press(0, 76), press(0, -1), press(0, -1)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    app.tick(&mut screen).unwrap();
    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.tick(&mut screen), Ok(TickResult::CursorMoved));
    assert_eq!(app.cursor().anchor.y, 138);
    assert!(app.store().bytes().iter().all(|byte| *byte == 0));
}

#[test]
fn cursor_touching_the_icon_bar_refreshes_dirty_columns() {
    let frames = [step(0, 66)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());
    screen.reset_counts();

    app.tick(&mut screen).unwrap();

    assert_eq!(app.cursor().anchor, Anchor::new(60, 130));
    assert_eq!(screen.chrome.len(), 1);
    let view = screen.chrome[0];
    assert!(!view.full);
    assert_eq!((view.dirty_from, view.dirty_to), (60, 68));
    assert!(view.is_dirty(52, 76));
    assert!(!view.is_dirty(0, 24));
}

#[test]
fn movement_clamps_to_the_screen() {
    let frames = [step(-128, -128), step(127, 127), step(127, 127)];
    let (mut app, mut screen) = started(&frames, PaintConfig::default());

    app.tick(&mut screen).unwrap();
    assert_eq!(app.cursor().anchor, Anchor::new(0, 0));
    app.tick(&mut screen).unwrap();
    app.tick(&mut screen).unwrap();
    assert_eq!(app.cursor().anchor, Anchor::new(WIDTH - 8, SCREEN_HEIGHT - 8));
}

#[test]
fn pacing_follows_activity_and_brush_size() {
    let config = PaintConfig::default().with_pacing(16, [30, 20, 10]);
    let app = PaintApp::new(ScriptedInput::new(&[]), config);

    assert_eq!(app.pace_ms(TickResult::Painted), 16);
    assert_eq!(app.pace_ms(TickResult::CursorMoved), 20);
    assert_eq!(app.pace_ms(TickResult::Idle), 0);
    assert_eq!(app.pace_ms(TickResult::Cleared), 0);
}

struct BrokenInput;

impl InputProvider for BrokenInput {
    type Error = &'static str;

    fn poll_frame(&mut self) -> Result<InputFrame, Self::Error> {
        Err("adc")
    }
}

#[test]
fn input_failures_are_reported_without_drawing() {
    let mut app = PaintApp::new(BrokenInput, PaintConfig::default());
    let mut screen = ShadowScreen::new();

    assert_eq!(app.tick(&mut screen), Err(AppError::Input("adc")));
    assert_eq!(screen.total_draws(), 0);
}

#[test]
fn resting_stick_leaves_the_picture_alone() {
    let mut app = PaintApp::new(crate::input::MockInput::new(), PaintConfig::default());
    let mut screen = ShadowScreen::new();
    app.start(&mut screen).unwrap();
    screen.reset_counts();

    for _ in 0..3 {
        assert_eq!(app.tick(&mut screen), Ok(TickResult::Idle));
    }
    assert_eq!(screen.total_draws(), 0);
    assert_eq!(app.config().move_pace_ms, [30, 20, 10]);
}
