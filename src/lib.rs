//! Alien Invasion: a terminal arcade shooter.
//!
//! The library holds everything that does not touch the terminal: tuning
//! values, session statistics, entities, fleet/collision logic, the game
//! controller, input dispatch and high-score persistence. The binary owns the
//! terminal: setup, rendering and the event reader thread.

pub mod button;
pub mod compute;
pub mod entities;
pub mod game;
pub mod high_score;
pub mod input;
pub mod scoreboard;
pub mod settings;
pub mod stats;
