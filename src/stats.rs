use crate::settings::Settings;

/// Session statistics.
///
/// `high_score` survives across games (and, through the high-score store,
/// across runs); everything else is reset by `reset_stats`.
#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub game_active: bool,
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
}

impl GameStats {
    /// Fresh stats in the inactive (menu) state.
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = GameStats {
            game_active: false,
            ships_left: 0,
            score: 0,
            level: 1,
            high_score,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Reset the per-game counters. Leaves `game_active` and `high_score` alone.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}

