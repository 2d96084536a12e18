//! Color constants for arena entities and the endgame banner.

use bevy::prelude::*;

// === Entities ===

/// Player turtle (green).
pub const PLAYER: Color = Color::srgb(0.2, 0.8, 0.2);

/// Home square (brown).
pub const HOME: Color = Color::srgb(0.55, 0.35, 0.2);

/// Waypoint X-mark (green).
pub const WAYPOINT: Color = Color::srgb(0.2, 0.8, 0.2);

/// Hostile enemies: random walkers, chasers, and the truck (red).
pub const HOSTILE: Color = Color::srgb(0.8, 0.2, 0.2);

/// Fencing enemies patrolling home (green).
pub const FENCER: Color = Color::srgb(0.2, 0.8, 0.2);

// === Endgame Banner ===

pub const WIN_TEXT: Color = Color::srgb(0.2, 0.8, 0.2);
pub const LOSE_TEXT: Color = Color::srgb(0.8, 0.2, 0.2);
