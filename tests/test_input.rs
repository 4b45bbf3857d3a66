use std::sync::mpsc;

use alien_invasion::game::AlienInvasion;
use alien_invasion::input::*;
use alien_invasion::settings::Settings;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

fn started_game() -> AlienInvasion {
    let mut g = AlienInvasion::new(Settings::with_screen_size(40, 20), 0);
    g.start_game();
    g
}

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn held_until_release_when_terminal_reports_releases() {
    let mut keys = KeyTracker::new(true);
    keys.press(KeyCode::Right, 1);

    let held: Vec<bool> = (1..=15).map(|f| keys.any_held(&RIGHT_KEYS, f)).collect();
    assert!(held.iter().all(|&h| h));

    keys.release(KeyCode::Right);
    assert!(!keys.any_held(&RIGHT_KEYS, 16));
}

#[test]
fn hold_window_expires_without_release_events() {
    let mut keys = KeyTracker::new(false);
    keys.press(KeyCode::Right, 1);

    assert!(keys.any_held(&RIGHT_KEYS, 1 + HOLD_WINDOW));
    assert!(!keys.any_held(&RIGHT_KEYS, 2 + HOLD_WINDOW));

    // A key-repeat press refreshes it.
    keys.press(KeyCode::Right, 10);
    assert!(keys.any_held(&RIGHT_KEYS, 12));
}

#[test]
fn letter_keys_count_as_directions() {
    let mut keys = KeyTracker::new(true);
    keys.press(KeyCode::Char('a'), 1);
    assert!(keys.any_held(&LEFT_KEYS, 1));
    assert!(!keys.any_held(&RIGHT_KEYS, 1));
}

#[test]
fn apply_sets_and_clears_ship_flags() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(true);

    handle_event(&mut g, &mut keys, key(KeyCode::Left, KeyEventKind::Press), 1);
    keys.apply(&mut g, 30);
    assert!(g.ship.moving_left);
    assert!(!g.ship.moving_right);

    handle_event(&mut g, &mut keys, key(KeyCode::Left, KeyEventKind::Release), 31);
    keys.apply(&mut g, 31);
    assert!(!g.ship.moving_left);
}

// ── handle_event ──────────────────────────────────────────────────────────────

#[test]
fn space_fires() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(false);
    let control = handle_event(&mut g, &mut keys, key(KeyCode::Char(' '), KeyEventKind::Press), 1);
    assert_eq!(control, Control::Continue);
    assert_eq!(g.bullets.len(), 1);
}

#[test]
fn quit_keys_quit() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(false);
    for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
        assert_eq!(
            handle_event(&mut g, &mut keys, key(code, KeyEventKind::Press), 1),
            Control::Quit
        );
    }
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(handle_event(&mut g, &mut keys, ctrl_c, 1), Control::Quit);
}

#[test]
fn p_restarts_but_not_on_repeat() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(true);
    g.stats.score = 400;

    handle_event(&mut g, &mut keys, key(KeyCode::Char('p'), KeyEventKind::Repeat), 1);
    assert_eq!(g.stats.score, 400);

    handle_event(&mut g, &mut keys, key(KeyCode::Char('p'), KeyEventKind::Press), 2);
    assert_eq!(g.stats.score, 0);
}

#[test]
fn click_on_play_button_starts_game() {
    let mut g = AlienInvasion::new(Settings::with_screen_size(40, 20), 0);
    let mut keys = KeyTracker::new(false);
    let r = g.play_button.rect;

    handle_event(&mut g, &mut keys, click(r.x as u16 + 1, r.y as u16 + 1), 1);

    assert!(g.stats.game_active);
}

// ── drain_events ──────────────────────────────────────────────────────────────

#[test]
fn drain_handles_every_pending_event() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(false);
    let (tx, rx) = mpsc::channel();
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();

    assert_eq!(drain_events(&rx, &mut g, &mut keys, 1), Control::Continue);
    assert_eq!(g.bullets.len(), 2);
    drop(tx);
}

#[test]
fn drain_stops_at_quit() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(false);
    let (tx, rx) = mpsc::channel();
    tx.send(key(KeyCode::Char('q'), KeyEventKind::Press)).unwrap();
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();

    assert_eq!(drain_events(&rx, &mut g, &mut keys, 1), Control::Quit);
    assert!(g.bullets.is_empty());
    drop(tx);
}

#[test]
fn closed_input_channel_quits() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(false);
    let (tx, rx) = mpsc::channel::<Event>();
    drop(tx);

    assert_eq!(drain_events(&rx, &mut g, &mut keys, 1), Control::Quit);
}

#[test]
fn events_sent_before_close_still_apply() {
    let mut g = started_game();
    let mut keys = KeyTracker::new(false);
    let (tx, rx) = mpsc::channel();
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    drop(tx);

    assert_eq!(drain_events(&rx, &mut g, &mut keys, 1), Control::Quit);
    assert_eq!(g.bullets.len(), 1);
}
