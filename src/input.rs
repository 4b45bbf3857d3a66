//! Keyboard and mouse handling for the frame loop.
//!
//! Events arrive on an `mpsc` channel fed by a reader thread. Each frame the
//! loop drains the channel through `drain_events`, which applies one-shot
//! actions (fire, restart, play click) immediately and records direction keys
//! in a `KeyTracker`; the tracker then sets the ship's movement flags.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::AlienInvasion;

/// Without release events, a key counts as held if its last press/repeat
/// arrived within this many frames. OS key-repeat presses at ≥ 15 Hz refresh
/// the key before it expires.
pub const HOLD_WINDOW: u64 = 4;

pub const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
pub const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Whether the frame loop should keep going after draining input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Remembers which keys are down.
///
/// When the terminal reports key releases (`release_events`), a key stays
/// held from its press until its release. Otherwise it expires `HOLD_WINDOW`
/// frames after the last press/repeat.
#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    release_events: bool,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        KeyTracker {
            key_frame: HashMap::new(),
            release_events,
        }
    }

    pub fn press(&mut self, key: KeyCode, frame: u64) {
        self.key_frame.insert(key, frame);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.key_frame.remove(&key);
    }

    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        match self.key_frame.get(key) {
            Some(_) if self.release_events => true,
            Some(&last) => frame.saturating_sub(last) <= HOLD_WINDOW,
            None => false,
        }
    }

    pub fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    /// Copy the direction keys onto the ship's movement flags.
    pub fn apply(&self, game: &mut AlienInvasion, frame: u64) {
        game.set_moving_left(self.any_held(&LEFT_KEYS, frame));
        game.set_moving_right(self.any_held(&RIGHT_KEYS, frame));
    }
}

// ── Event dispatch ────────────────────────────────────────────────────────────

/// Apply one input event. Returns `Control::Quit` for the quit keys.
pub fn handle_event(
    game: &mut AlienInvasion,
    keys: &mut KeyTracker,
    ev: Event,
    frame: u64,
) -> Control {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) => match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                keys.press(code, frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        log::info!("quit requested");
                        return Control::Quit;
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        log::info!("quit requested");
                        return Control::Quit;
                    }
                    KeyCode::Char(' ') => {
                        game.fire_bullet();
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') if kind == KeyEventKind::Press => {
                        game.start_game();
                    }
                    _ => {}
                }
            }
            KeyEventKind::Release => keys.release(code),
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            game.check_play_button(column, row);
        }
        _ => {}
    }
    Control::Continue
}

/// Handle every pending event without blocking.
///
/// A disconnected channel means the reader thread is gone (the terminal went
/// away) and is treated as a quit, so the caller still persists the score.
pub fn drain_events(
    rx: &Receiver<Event>,
    game: &mut AlienInvasion,
    keys: &mut KeyTracker,
    frame: u64,
) -> Control {
    loop {
        match rx.try_recv() {
            Ok(ev) => {
                if handle_event(game, keys, ev, frame) == Control::Quit {
                    return Control::Quit;
                }
            }
            Err(TryRecvError::Empty) => return Control::Continue,
            Err(TryRecvError::Disconnected) => {
                log::info!("input closed, quitting");
                return Control::Quit;
            }
        }
    }
}
