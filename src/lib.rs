//! Turtle chase game library.
//!
//! A single-screen arcade chase: a player-controlled turtle steers toward
//! click-set waypoints, trying to reach home while four kinds of enemies
//! with distinct motion policies try to run it down. All gameplay advances
//! on a fixed tick ([`TICK_HZ`]); per-tick speeds throughout the crate
//! assume that rate.

pub mod gameplay;
pub mod session;
pub mod theme;
#[cfg(test)]
pub mod testing;

use bevy::prelude::*;

use session::SessionPhase;

/// Fixed simulation rate (ticks per second).
pub const TICK_HZ: f64 = 25.0;

// === Z Layers ===

pub const Z_HOME: f32 = 0.0;
pub const Z_ENEMY: f32 = 1.0;
pub const Z_PLAYER: f32 = 2.0;
pub const Z_WAYPOINT: f32 = 3.0;

// === System Sets ===

/// Per-tick gameplay phases, chained in `FixedUpdate`.
///
/// The order is a behavioral contract: the player moves before the enemies,
/// so an enemy's chase or patrol decision reads a player position already
/// advanced this tick. Collision resolution and session-outcome resolution
/// come last.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Drain the wave delay queue and inject newly due enemies.
    Waves,
    /// Player win check and waypoint-directed movement.
    Player,
    /// Enemy motion policies.
    Enemies,
    /// Enemy-vs-player hit tests.
    Collision,
    /// Apply the first win/lose signal of the tick.
    Resolve,
}

/// Run condition: the session has not reached a terminal state.
pub fn session_running(phase: Res<State<SessionPhase>>) -> bool {
    *phase.get() == SessionPhase::Running
}

/// Top-level plugin wiring the fixed clock, the gameplay set chain, and all
/// domain plugins. Expects a [`session::Arena`] resource (a default one is
/// provided for tests and ad-hoc use).
pub fn plugin(app: &mut App) {
    app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ));

    app.configure_sets(
        FixedUpdate,
        (
            GameSet::Waves,
            GameSet::Player,
            GameSet::Enemies,
            GameSet::Collision,
            GameSet::Resolve,
        )
            .chain()
            .run_if(session_running),
    );

    app.add_plugins((session::plugin, gameplay::plugin));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn session_phase_default_is_running() {
        assert_eq!(SessionPhase::default(), SessionPhase::Running);
    }

    #[test]
    fn game_sets_are_distinct() {
        assert_ne!(GameSet::Waves, GameSet::Player);
        assert_ne!(GameSet::Player, GameSet::Enemies);
        assert_ne!(GameSet::Enemies, GameSet::Collision);
        assert_ne!(GameSet::Collision, GameSet::Resolve);
    }

    #[test]
    fn tick_rate_matches_per_tick_speeds() {
        // 40ms per tick; per-tick speeds elsewhere assume this cadence.
        assert!((1000.0 / TICK_HZ - 40.0).abs() < f64::EPSILON);
    }
}
