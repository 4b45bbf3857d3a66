mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::compute::fleet_dimensions;
use alien_invasion::game::AlienInvasion;
use alien_invasion::high_score::HighScoreStore;
use alien_invasion::input::{drain_events, Control, KeyTracker};
use alien_invasion::settings::Settings;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Freeze after losing a ship, before play resumes.
const SHIP_HIT_PAUSE: Duration = Duration::from_millis(500);

const LOG_FILE_NAME: &str = "alien_invasion.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is the render surface, so log lines go to a file instead.
fn init_logging() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames until the player quits or the input thread goes away.
///
/// `release_events` is true when the terminal accepted the keyboard
/// enhancement flags and will report key releases.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut AlienInvasion,
    rx: &mpsc::Receiver<Event>,
    release_events: bool,
) -> std::io::Result<()> {
    let mut keys = KeyTracker::new(release_events);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        if drain_events(rx, game, &mut keys, frame) == Control::Quit {
            return Ok(());
        }
        keys.apply(game, frame);

        let outcome = game.update();
        if outcome.pause_required() {
            // Nothing is read or drawn during the pause; queued input is
            // handled on the next frame.
            thread::sleep(SHIP_HIT_PAUSE);
        }

        display::render(out, game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let (width, height) = terminal::size().context("failed to query terminal size")?;
    let settings = Settings::with_screen_size(width, height);
    let (cols, rows) = fleet_dimensions(
        settings.screen_width,
        settings.screen_height,
        settings.alien_width,
        settings.alien_height,
        settings.ship_height,
    );
    if cols == 0 || rows == 0 {
        bail!("terminal is too small ({width}x{height}) to fit a fleet");
    }

    let store = HighScoreStore::default();
    let high_score = store
        .load()
        .with_context(|| format!("failed to load high score from {}", store.path().display()))?
        .unwrap_or(0);
    log::info!("starting on a {width}x{height} terminal, high score {high_score}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut game = AlienInvasion::new(settings, high_score);
    let result = game_loop(&mut out, &mut game, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")?;

    let high_score = game.stats.high_score;
    if store
        .save_if_higher(high_score)
        .with_context(|| format!("failed to save high score to {}", store.path().display()))?
    {
        log::info!("saved high score {high_score}");
    }
    Ok(())
}
