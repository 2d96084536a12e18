//! Gameplay domain: the home goal, the waypoint marker, the player turtle,
//! the enemy roster, wave scheduling, and the endgame banner.

pub mod endgame;
pub mod enemies;
pub mod home;
pub mod player;
pub mod waves;
pub mod waypoint;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        home::plugin,
        waypoint::plugin,
        player::plugin,
        enemies::plugin,
        waves::plugin,
        endgame::plugin,
    ));
}
