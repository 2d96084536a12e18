//! Scripted charge attack: crosses the screen right-to-left at the player's
//! height, then rests off-screen until the next summon.

use std::time::Duration;

use bevy::prelude::*;

use crate::gameplay::waves::{WaveAction, WaveQueue};
use crate::session::Arena;
use crate::theme::palette;
use crate::{GameSet, Z_ENEMY};

use super::Enemy;

// === Constants ===

/// Side length of the truck square.
pub const TRUCK_SIZE: f32 = 100.0;

/// Leftward distance covered per tick while charging.
pub const CHARGE_SPEED: f32 = 10.0;

/// How far past the right edge the truck lines up before a charge.
const OFFSCREEN_LEAD: f32 = 100.0;

/// Rest period between charges.
pub const RESUMMON_DELAY: Duration = Duration::from_millis(5000);

// === Components ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum TruckPhase {
    /// Parked off-screen and hidden, waiting for the next summon.
    Idle,
    /// Driving left across the screen.
    Charging,
}

/// The truck is a single persistent entity; it recycles itself between
/// charges instead of despawning.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Truck {
    pub phase: TruckPhase,
    pub speed: f32,
}

// === Spawning ===

fn spawn_truck(mut commands: Commands) {
    commands.spawn((
        Name::new("TruckKun"),
        Enemy { size: TRUCK_SIZE },
        Truck {
            phase: TruckPhase::Idle,
            speed: CHARGE_SPEED,
        },
        Sprite::from_color(palette::HOSTILE, Vec2::splat(TRUCK_SIZE)),
        Transform::from_xyz(0.0, 0.0, Z_ENEMY),
        Visibility::Hidden,
    ));
}

/// Lines the truck up just past the right edge at the player's current
/// height and sets it charging.
pub fn summon(
    truck: &mut Truck,
    transform: &mut Transform,
    visibility: &mut Visibility,
    arena: &Arena,
    player_y: f32,
) {
    truck.phase = TruckPhase::Charging;
    transform.translation.x = arena.max().x + OFFSCREEN_LEAD;
    transform.translation.y = player_y;
    *visibility = Visibility::Inherited;
    info!("truck summoned at y={player_y}");
}

// === Systems ===

/// One charge tick. On reaching the left edge without a hit, the truck goes
/// idle, hides, and books its own re-summon on the wave queue. Collisions
/// are handled by the shared hit detector after this system.
fn charge(
    time: Res<Time>,
    arena: Res<Arena>,
    mut queue: ResMut<WaveQueue>,
    mut truck: Single<(&mut Truck, &mut Transform, &mut Visibility)>,
) {
    let (truck, transform, visibility) = &mut *truck;
    if truck.phase != TruckPhase::Charging {
        return;
    }
    if transform.translation.x <= arena.min().x {
        truck.phase = TruckPhase::Idle;
        **visibility = Visibility::Hidden;
        queue.schedule(time.elapsed() + RESUMMON_DELAY, WaveAction::TruckCharge);
        info!("truck crossed the screen; next charge in {RESUMMON_DELAY:?}");
    } else {
        transform.translation.x -= truck.speed;
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Truck>();
    app.add_systems(Startup, spawn_truck);
    app.add_systems(FixedUpdate, charge.in_set(GameSet::Enemies));
}
