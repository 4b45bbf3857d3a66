//! Rendering layer — all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game. No game logic is performed; this module only translates state into
//! terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::button::Button;
use alien_invasion::entities::{Rect, Sprite};
use alien_invasion::game::AlienInvasion;
use alien_invasion::settings::Rgb;

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGH: Color = Color::Magenta;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_SHIPS: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const SHIP_SPRITE: [&str; 2] = [" ▲ ", "/█\\"];
const ALIEN_SPRITE: [&str; 2] = ["«▼»", "╚═╝"];
const BULLET_GLYPH: &str = "║";

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &AlienInvasion) -> std::io::Result<()> {
    let width = game.settings.screen_width as u16;
    let height = game.settings.screen_height as u16;

    out.queue(style::SetBackgroundColor(rgb(game.settings.bg_color)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_sprite(out, &game.ship, &SHIP_SPRITE, rgb(game.settings.ship_color), width, height)?;
    for bullet in &game.bullets {
        draw_sprite(out, bullet, &[BULLET_GLYPH], rgb(game.settings.bullet_color), width, height)?;
    }
    for alien in &game.aliens {
        draw_sprite(out, alien, &ALIEN_SPRITE, rgb(game.settings.alien_color), width, height)?;
    }

    draw_scoreboard(out, game, width)?;

    if !game.stats.game_active {
        draw_button(out, &game.play_button, rgb(game.settings.bg_color))?;
        draw_controls_hint(out, &game.play_button, width)?;
    }

    out.queue(style::ResetColor)?;
    if game.pointer_visible {
        // Rest the cursor on the button so it reads as the pointer.
        let r = game.play_button.rect;
        out.queue(cursor::MoveTo(r.center_x() as u16, (r.y + 1.0) as u16))?;
        out.queue(cursor::Show)?;
    } else {
        out.queue(cursor::Hide)?;
    }
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw `rows` of glyphs starting at the sprite's rounded top-left corner,
/// skipping anything that falls outside the screen.
fn draw_sprite<W: Write, S: Sprite>(
    out: &mut W,
    sprite: &S,
    rows: &[&str],
    color: Color,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let Rect { x, y, .. } = sprite.rect();
    let col = x.round();
    let top = y.round();
    if col < 0.0 || col >= width as f32 {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in rows.iter().enumerate() {
        let row = top + i as f32;
        if row < 0.0 || row >= height as f32 {
            continue;
        }
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

// ── Scoreboard (rows 0–1) ─────────────────────────────────────────────────────

fn draw_scoreboard<W: Write>(out: &mut W, game: &AlienInvasion, width: u16) -> std::io::Result<()> {
    let sb = &game.scoreboard;

    // Ships — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SHIPS))?;
    out.queue(Print("▲ ".repeat(sb.ships as usize)))?;

    // High score — centre
    let high = format!("HI {}", sb.high_score_text);
    out.queue(cursor::MoveTo(
        (width / 2).saturating_sub(high.chars().count() as u16 / 2),
        0,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(&high))?;

    // Score — right, level beneath it
    let score = &sb.score_text;
    out.queue(cursor::MoveTo(
        width.saturating_sub(score.chars().count() as u16 + 1),
        0,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(score))?;

    let level = format!("L{}", sb.level_text);
    out.queue(cursor::MoveTo(
        width.saturating_sub(level.chars().count() as u16 + 1),
        1,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level))?;

    Ok(())
}

// ── Play button ───────────────────────────────────────────────────────────────

fn draw_button<W: Write>(out: &mut W, button: &Button, bg: Color) -> std::io::Result<()> {
    let r = button.rect;
    let w = r.width as usize;
    let left = r.x as u16;
    let top = r.y as u16;

    out.queue(style::SetBackgroundColor(rgb(button.button_color)))?;
    out.queue(style::SetForegroundColor(rgb(button.text_color)))?;
    for i in 0..r.height as u16 {
        out.queue(cursor::MoveTo(left, top + i))?;
        if i == r.height as u16 / 2 {
            out.queue(Print(format!("{:^w$}", button.label, w = w)))?;
        } else {
            out.queue(Print(" ".repeat(w)))?;
        }
    }
    out.queue(style::SetBackgroundColor(bg))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, button: &Button, width: u16) -> std::io::Result<()> {
    let hint = "← → / A D : Move   SPACE : Shoot   P : New game   Q : Quit";
    let row = (button.rect.bottom() + 1.0) as u16;
    out.queue(cursor::MoveTo(
        (width / 2).saturating_sub(hint.chars().count() as u16 / 2),
        row,
    ))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
