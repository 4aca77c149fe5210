//! Full-frame rendering tests on a vt100 virtual terminal.


use std::time::Duration;

use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::style::Color;

use termodoro_core::{ManualClock, Session};
use termodoro_tui::{Dashboard, Palette, SCREEN_TOO_SMALL, draw};
use termodoro_types::{DisplayOptions, PhaseKind, SessionSettings};

use vt100_backend::VT100Backend;

// 40x12 gives a diameter of 10 with labels starting at column 12.
const WIDTH: u16 = 40;
const HEIGHT: u16 = 12;
const LABEL_X: u16 = 12;

fn render(
    width: u16,
    height: u16,
    dashboard: &mut Dashboard,
    session: &Session<ManualClock>,
) -> Terminal<VT100Backend> {
    let backend = VT100Backend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal
        .draw(|frame| draw(frame, dashboard, session))
        .expect("failed to draw");
    terminal
}

fn labels(terminal: &Terminal<VT100Backend>, from: u16) -> String {
    (0..3)
        .map(|row| terminal.backend().row_text(row, from))
        .collect::<Vec<_>>()
        .join("\n")
}

fn vt(color: Color) -> vt100::Color {
    match color {
        Color::Rgb(r, g, b) => vt100::Color::Rgb(r, g, b),
        other => panic!("standard palette is all RGB, got {other:?}"),
    }
}

fn start() -> (ManualClock, Session<ManualClock>) {
    let clock = ManualClock::new();
    let session = Session::start(clock.clone(), SessionSettings::default());
    (clock, session)
}

#[test]
fn undersized_terminal_shows_only_the_warning() {
    let (_clock, session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());

    let terminal = render(20, 5, &mut dashboard, &session);

    assert_snapshot!(terminal.backend().to_string().trim_end(), @"screen too small");
}

#[test]
fn too_short_terminal_is_undersized_too() {
    let (_clock, session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());

    let terminal = render(80, 4, &mut dashboard, &session);

    assert_eq!(terminal.backend().row_text(0, 0), SCREEN_TOO_SMALL);
    assert_eq!(terminal.backend().bg(2, 0), vt100::Color::Default);
}

#[test]
fn labels_sit_right_of_the_face() {
    let (_clock, session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());

    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);

    assert_snapshot!(labels(&terminal, LABEL_X), @r"
    Rounds completed: 0
    Next long break in 3 rounds
    Time remaining: 30:00
    ");
    assert_eq!(terminal.backend().row_text(0, LABEL_X - 1), " Rounds completed: 0");
}

#[test]
fn face_paints_rim_and_work_hand() {
    let (_clock, session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());
    let palette = Palette::standard();

    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);
    let backend = terminal.backend();

    // Cardinal rim points of a diameter-10 face centred on (5, 5).
    assert_eq!(backend.bg(5, 0), vt(palette.rim));
    assert_eq!(backend.bg(0, 5), vt(palette.rim));
    // The hand points straight up from the pivot.
    for y in 3..=5 {
        assert_eq!(backend.bg(5, y), vt(palette.hand_work), "hand cell (5, {y})");
    }
    assert_eq!(backend.bg(5, 7), vt100::Color::Default);
    assert_eq!(backend.bg(2, 5), vt100::Color::Default);
}

#[test]
fn hand_moves_with_elapsed_time() {
    let (clock, session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());
    let palette = Palette::standard();

    clock.advance(Duration::from_secs(15 * 60));
    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);
    let backend = terminal.backend();

    // Half way round: straight down.
    for y in 5..=7 {
        assert_eq!(backend.bg(5, y), vt(palette.hand_work), "hand cell (5, {y})");
    }
    assert_eq!(backend.bg(5, 4), vt100::Color::Default);
    assert_eq!(backend.row_text(2, LABEL_X), "Time remaining: 15:00");
}

#[test]
fn finished_phase_drops_the_hand() {
    let (clock, session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());
    let palette = Palette::standard();

    clock.advance(Duration::from_secs(30 * 60));
    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);
    let backend = terminal.backend();

    assert_eq!(backend.bg(5, 0), vt(palette.rim));
    assert_eq!(backend.bg(5, 4), vt100::Color::Default);
    assert_eq!(backend.row_text(2, LABEL_X), "Time remaining: 00:00");
}

#[test]
fn break_uses_the_break_hand_color() {
    let (clock, mut session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());
    let palette = Palette::standard();

    clock.advance(Duration::from_secs(30 * 60));
    assert_eq!(session.tick(), Some(PhaseKind::ShortBreak));
    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);

    assert_eq!(terminal.backend().bg(5, 4), vt(palette.hand_break));
    assert_snapshot!(labels(&terminal, LABEL_X), @r"
    Rounds completed: 1
    Next long break in 3 rounds
    Time remaining: 05:00
    ");
}

#[test]
fn fourth_round_announces_and_takes_the_long_break() {
    let (clock, mut session) = start();
    let mut dashboard = Dashboard::new(DisplayOptions::default());
    let palette = Palette::standard();

    // Three work rounds with short breaks, then the fourth round begins.
    for _ in 0..6 {
        clock.advance(session.timer().duration());
        assert!(session.tick().is_some());
    }
    assert_eq!(session.phase(), PhaseKind::Work);
    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);
    assert_snapshot!(labels(&terminal, LABEL_X), @r"
    Rounds completed: 3
    Next long break in 0 rounds
    Time remaining: 30:00
    ");

    clock.advance(session.timer().duration());
    assert_eq!(session.tick(), Some(PhaseKind::LongBreak));
    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);

    assert_eq!(terminal.backend().bg(5, 4), vt(palette.hand_break));
    assert_snapshot!(labels(&terminal, LABEL_X), @r"
    Rounds completed: 4
    Next long break in 0 rounds
    Time remaining: 15:00
    ");

    clock.advance(session.timer().duration());
    assert_eq!(session.tick(), Some(PhaseKind::Work));
    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);
    assert_eq!(
        terminal.backend().row_text(1, LABEL_X),
        "Next long break in 3 rounds"
    );
}

#[test]
fn hidden_face_moves_labels_to_the_left_edge() {
    let (_clock, session) = start();
    let options = DisplayOptions {
        show_analog: false,
        ..DisplayOptions::default()
    };
    let mut dashboard = Dashboard::new(options);

    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);

    assert_eq!(terminal.backend().bg(5, 0), vt100::Color::Default);
    assert_snapshot!(labels(&terminal, 0), @r"
    Rounds completed: 0
    Next long break in 3 rounds
    Time remaining: 30:00
    ");
}

#[test]
fn disabled_labels_are_skipped() {
    let (_clock, session) = start();
    let options = DisplayOptions {
        show_completed: false,
        show_next_long: false,
        ..DisplayOptions::default()
    };
    let mut dashboard = Dashboard::new(options);

    let terminal = render(WIDTH, HEIGHT, &mut dashboard, &session);

    assert_eq!(terminal.backend().row_text(0, LABEL_X), "Time remaining: 30:00");
    assert_eq!(terminal.backend().row_text(1, LABEL_X), "");
}
