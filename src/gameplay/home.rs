//! The goal region the player must reach to win.

use bevy::prelude::*;

use crate::Z_HOME;
use crate::session::Arena;
use crate::theme::palette;

// === Constants ===

/// Side length of the home square.
pub const HOME_SIZE: f32 = 20.0;

/// Distance of home's center from the right edge of the canvas.
const HOME_EDGE_INSET: f32 = 100.0;

// === Components ===

/// Static goal region. Immutable after construction; `size > 0`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Home {
    pub size: f32,
}

impl Home {
    /// Point containment over the `size` x `size` square centered at
    /// `center`, inclusive on all four bounds.
    #[must_use]
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let half = self.size / 2.0;
        (point.x - center.x).abs() <= half && (point.y - center.y).abs() <= half
    }
}

// === Systems ===

/// Home sits near the right edge at mid-height; the player starts on the
/// far left and has to cross the whole arena.
fn spawn_home(mut commands: Commands, arena: Res<Arena>) {
    commands.spawn((
        Name::new("Home"),
        Home { size: HOME_SIZE },
        Sprite::from_color(palette::HOME, Vec2::splat(HOME_SIZE)),
        Transform::from_xyz(arena.max().x - HOME_EDGE_INSET, 0.0, Z_HOME),
    ));
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Home>();
    app.add_systems(Startup, spawn_home);
}
