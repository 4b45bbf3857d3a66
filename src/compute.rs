//! Fleet layout and collision rules.
//!
//! Free functions over plain slices and vectors; nothing here knows about the
//! controller, the terminal or the clock.

use crate::entities::{Alien, Bullet, Ship, Sprite};
use crate::settings::Settings;

// ── Fleet layout ──────────────────────────────────────────────────────────────

/// How many columns and rows of aliens fit on screen.
///
/// Each alien needs itself plus one alien-sized gap; a margin of one alien is
/// kept at both sides, and room for three alien rows plus the ship is kept
/// free vertically. Results are floored and never negative.
pub fn fleet_dimensions(
    screen_width: f32,
    screen_height: f32,
    alien_width: f32,
    alien_height: f32,
    ship_height: f32,
) -> (u32, u32) {
    if alien_width <= 0.0 || alien_height <= 0.0 {
        return (0, 0);
    }
    let available_x = screen_width - 2.0 * alien_width;
    let available_y = screen_height - 3.0 * alien_height - ship_height;
    let cols = (available_x / (2.0 * alien_width)).floor().max(0.0) as u32;
    let rows = (available_y / (2.0 * alien_height)).floor().max(0.0) as u32;
    (cols, rows)
}

/// Build a full fleet for the current screen, row by row.
pub fn create_fleet(settings: &Settings, ship_height: f32) -> Vec<Alien> {
    let (cols, rows) = fleet_dimensions(
        settings.screen_width,
        settings.screen_height,
        settings.alien_width,
        settings.alien_height,
        ship_height,
    );
    log::debug!("spawning fleet of {cols} x {rows}");

    let mut aliens = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            aliens.push(Alien::at(settings, col, row));
        }
    }
    aliens
}

// ── Fleet movement ────────────────────────────────────────────────────────────

/// Flip the fleet if any alien touches a side. Returns whether it flipped.
pub fn check_fleet_edges(aliens: &mut [Alien], settings: &mut Settings) -> bool {
    if aliens.iter().any(|a| a.check_edges(settings)) {
        change_fleet_direction(aliens, settings);
        true
    } else {
        false
    }
}

/// Drop every alien one step and reverse the shared direction.
pub fn change_fleet_direction(aliens: &mut [Alien], settings: &mut Settings) {
    for alien in aliens.iter_mut() {
        alien.y += settings.alien_drop_speed;
    }
    settings.fleet_direction *= -1;
}

// ── Collisions ────────────────────────────────────────────────────────────────

/// Remove every bullet that overlaps at least one alien, together with every
/// alien it overlaps. Returns the number of aliens destroyed.
///
/// All overlaps are decided against the state before removal, so a single
/// bullet can take out several aliens and several bullets can share one.
pub fn bullet_alien_collisions(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> u32 {
    let mut spent_bullets = vec![false; bullets.len()];
    let mut dead_aliens = vec![false; aliens.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let b = bullet.rect();
        for (ai, alien) in aliens.iter().enumerate() {
            if b.intersects(&alien.rect()) {
                spent_bullets[bi] = true;
                dead_aliens[ai] = true;
            }
        }
    }

    let destroyed = dead_aliens.iter().filter(|&&d| d).count() as u32;

    let mut spent = spent_bullets.into_iter();
    bullets.retain(|_| !spent.next().unwrap_or(false));
    let mut dead = dead_aliens.into_iter();
    aliens.retain(|_| !dead.next().unwrap_or(false));

    destroyed
}

pub fn any_alien_hits_ship(aliens: &[Alien], ship: &Ship) -> bool {
    let ship_rect = ship.rect();
    aliens.iter().any(|a| a.rect().intersects(&ship_rect))
}

pub fn any_alien_at_bottom(aliens: &[Alien], settings: &Settings) -> bool {
    aliens
        .iter()
        .any(|a| a.rect().bottom() >= settings.screen_height)
}
