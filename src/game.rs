//! The game controller: owns every component and advances one frame at a time.
//!
//! No terminal I/O and no sleeping happens here. Side effects the front end
//! has to carry out (the post-hit pause, showing the pointer again) are
//! reported through `FrameOutcome` and `pointer_visible`.

use crate::button::Button;
use crate::compute::{
    any_alien_at_bottom, any_alien_hits_ship, bullet_alien_collisions, check_fleet_edges,
    create_fleet,
};
use crate::entities::{Alien, Bullet, Ship, Sprite};
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::stats::GameStats;

/// How a ship hit was resolved.
///
/// A game lasts exactly `ship_limit` lives: the hit that spends the last one
/// ends the game straight away, with no extra respawn at zero ships.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipHit {
    /// A life was spent; the board was reset and play continues after a pause.
    Respawned,
    /// No lives remain; the game is over.
    GameOver,
}

/// What happened during one call to `AlienInvasion::update`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub aliens_destroyed: u32,
    pub fleet_cleared: bool,
    pub ship_hit: Option<ShipHit>,
}

impl FrameOutcome {
    /// The front end must freeze for the post-hit pause.
    pub fn pause_required(&self) -> bool {
        self.ship_hit == Some(ShipHit::Respawned)
    }
}

#[derive(Clone, Debug)]
pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub play_button: Button,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    /// Whether the pointer/cursor should be shown (true outside of play).
    pub pointer_visible: bool,
}

impl AlienInvasion {
    /// A new session sitting at the menu, with a fleet already on screen.
    pub fn new(settings: Settings, high_score: u32) -> Self {
        let stats = GameStats::new(&settings, high_score);
        let scoreboard = Scoreboard::new(&stats);
        let ship = Ship::new(&settings);
        let aliens = create_fleet(&settings, ship.height);
        let play_button = Button::new(&settings, "Play");
        AlienInvasion {
            settings,
            stats,
            scoreboard,
            play_button,
            ship,
            bullets: Vec::new(),
            aliens,
            pointer_visible: true,
        }
    }

    // ── Input-driven transitions ─────────────────────────────────────────────

    /// Begin a fresh game. Works from any state, so it doubles as restart.
    pub fn start_game(&mut self) {
        self.stats.game_active = true;
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.scoreboard.prep_score(&self.stats);
        self.scoreboard.prep_level(&self.stats);
        self.scoreboard.prep_ships(&self.stats);

        self.bullets.clear();
        self.aliens = create_fleet(&self.settings, self.ship.height);
        self.ship.center_ship(&self.settings);

        self.pointer_visible = false;
        log::info!(
            "game started: {} aliens, {} ships",
            self.aliens.len(),
            self.stats.ships_left
        );
    }

    /// Start a game if the click landed on the play button while at the menu.
    pub fn check_play_button(&mut self, col: u16, row: u16) -> bool {
        if self.play_button.contains(col, row) && !self.stats.game_active {
            self.start_game();
            true
        } else {
            false
        }
    }

    /// Fire a bullet if the game is running and the on-screen cap allows it.
    pub fn fire_bullet(&mut self) -> bool {
        if !self.stats.game_active || self.bullets.len() >= self.settings.bullet_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        true
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        self.ship.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.ship.moving_right = moving;
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Advance one frame. Does nothing unless a game is active.
    pub fn update(&mut self) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        if !self.stats.game_active {
            return outcome;
        }

        self.ship.update(&self.settings);
        self.update_bullets(&mut outcome);
        outcome.ship_hit = self.update_aliens();
        outcome
    }

    fn update_bullets(&mut self, outcome: &mut FrameOutcome) {
        for bullet in self.bullets.iter_mut() {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.check_bullet_alien_collisions(outcome);
    }

    fn check_bullet_alien_collisions(&mut self, outcome: &mut FrameOutcome) {
        let destroyed = bullet_alien_collisions(&mut self.bullets, &mut self.aliens);
        outcome.aliens_destroyed = destroyed;
        if destroyed == 0 {
            return;
        }

        let points = self.settings.alien_point.saturating_mul(destroyed);
        self.stats.score = self.stats.score.saturating_add(points);
        self.scoreboard.prep_score(&self.stats);
        self.scoreboard.check_high_score(&mut self.stats);

        if self.aliens.is_empty() {
            self.bullets.clear();
            self.aliens = create_fleet(&self.settings, self.ship.height);
            self.settings.increase_speed();

            self.stats.level += 1;
            self.scoreboard.prep_level(&self.stats);
            outcome.fleet_cleared = true;
            log::info!("fleet cleared, advancing to level {}", self.stats.level);
        }
    }

    fn update_aliens(&mut self) -> Option<ShipHit> {
        check_fleet_edges(&mut self.aliens, &mut self.settings);
        for alien in self.aliens.iter_mut() {
            alien.update(&self.settings);
        }

        // At most one hit per frame, whichever rule fires first.
        if any_alien_hits_ship(&self.aliens, &self.ship)
            || any_alien_at_bottom(&self.aliens, &self.settings)
        {
            return Some(self.ship_hit());
        }
        None
    }

    /// Spend a life, or end the game when the last one is lost.
    pub fn ship_hit(&mut self) -> ShipHit {
        if self.stats.ships_left > 1 {
            self.stats.ships_left -= 1;
            self.scoreboard.prep_ships(&self.stats);

            self.bullets.clear();
            self.aliens = create_fleet(&self.settings, self.ship.height);
            self.ship.center_ship(&self.settings);

            log::info!("ship hit, {} left", self.stats.ships_left);
            ShipHit::Respawned
        } else {
            self.stats.ships_left = 0;
            self.scoreboard.prep_ships(&self.stats);
            self.stats.game_active = false;
            self.pointer_visible = true;

            log::info!("game over with score {}", self.stats.score);
            ShipHit::GameOver
        }
    }
}
