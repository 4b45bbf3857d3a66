//! Tuning values for one session.
//!
//! Units are terminal cells (positions, sizes) and cells per frame (speeds).
//! The static block never changes during a session; the dynamic block is
//! reset by `initialize_dynamic_settings` at every game start and scaled up
//! by `increase_speed` whenever a fleet is cleared.

/// An RGB triple; the display layer converts it to a terminal colour.
pub type Rgb = (u8, u8, u8);

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: Rgb,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_limit: u32,
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_color: Rgb,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Rgb,
    pub bullet_allowed: usize,

    // ── Aliens ───────────────────────────────────────────────────────────────
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_color: Rgb,
    pub alien_drop_speed: f32,
    pub alien_point: u32,

    // ── Difficulty scaling ───────────────────────────────────────────────────
    pub speedup_scale: f32,
    pub score_scale: f32,

    // ── Dynamic (reset at every game start) ──────────────────────────────────
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// `1` moves the fleet right, `-1` moves it left.
    pub fleet_direction: i32,
}

const BASE_SHIP_SPEED: f32 = 1.0;
const BASE_BULLET_SPEED: f32 = 1.0;
const BASE_ALIEN_SPEED: f32 = 0.08;
const BASE_ALIEN_POINT: u32 = 50;

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_width: 120.0,
            screen_height: 40.0,
            bg_color: (16, 16, 28),

            ship_limit: 3,
            ship_width: 3.0,
            ship_height: 2.0,
            ship_color: (230, 230, 230),

            bullet_width: 1.0,
            bullet_height: 1.0,
            bullet_color: (90, 220, 240),
            bullet_allowed: 20,

            alien_width: 3.0,
            alien_height: 2.0,
            alien_color: (110, 220, 90),
            alien_drop_speed: 0.5,
            alien_point: BASE_ALIEN_POINT,

            speedup_scale: 1.1,
            score_scale: 1.5,

            ship_speed: BASE_SHIP_SPEED,
            bullet_speed: BASE_BULLET_SPEED,
            alien_speed: BASE_ALIEN_SPEED,
            fleet_direction: 1,
        }
    }
}

impl Settings {
    /// Default settings sized to a render surface of `width` x `height` cells.
    pub fn with_screen_size(width: u16, height: u16) -> Self {
        Settings {
            screen_width: width as f32,
            screen_height: height as f32,
            ..Settings::default()
        }
    }

    /// Restore the values that change as the game progresses.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = 1;
        // Reset on purpose: a new game never inherits the last game's point value.
        self.alien_point = BASE_ALIEN_POINT;
    }

    /// Speed everything up and make each alien worth more.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_point = (self.alien_point as f32 * self.score_scale) as u32;
    }
}
