//! Enemy that wanders between random destinations, one leg at a time.

use bevy::prelude::*;
use rand::Rng;

use crate::session::Arena;
use crate::{GameSet, Z_ENEMY};

use super::{Enemy, EnemyAssets};

// === Constants ===

/// Diameter of the walker circle, and its y-axis arrival tolerance.
pub const RANDOM_WALKER_SIZE: f32 = 20.0;

/// How close the x coordinate must get to its destination to count as
/// arrived. Deliberately much wider than the y tolerance; legs end early on
/// the x axis, which keeps the wander jittery.
const X_ARRIVAL_TOLERANCE: f32 = 100.0;

/// Speed range re-rolled at the start of each new leg.
const LEG_SPEED_MIN: f32 = 3.0;
const LEG_SPEED_MAX: f32 = 10.0;

/// Slower speed range for the very first leg.
const INITIAL_SPEED_MIN: f32 = 1.0;
const INITIAL_SPEED_MAX: f32 = 2.0;

// === Components ===

/// Wander state: the current destination and the per-leg speed. The speed
/// is shared by both axes and re-rolled whenever either axis arrives.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct RandomWalk {
    pub dest: Vec2,
    pub speed: f32,
}

// === Pure Functions ===

/// One axis of a wander tick: either re-roll the destination or take a
/// step, never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum AxisStep {
    Reroll,
    Step(f32),
}

/// Arrival check and step direction for one axis. Within `tolerance` of the
/// destination the leg ends (re-roll); otherwise step `speed` toward it.
pub(super) fn axis_step(pos: f32, dest: f32, tolerance: f32, speed: f32) -> AxisStep {
    if (pos - dest).abs() < tolerance {
        AxisStep::Reroll
    } else if dest > pos {
        AxisStep::Step(speed)
    } else {
        AxisStep::Step(-speed)
    }
}

// === Spawning ===

pub fn spawn_random_walker(
    commands: &mut Commands,
    assets: &EnemyAssets,
    arena: &Arena,
) -> Entity {
    let mut rng = rand::rng();
    let position = Vec2::new(
        rng.random_range(arena.min().x..=arena.max().x),
        rng.random_range(arena.min().y..=arena.max().y),
    );
    let dest = Vec2::new(
        rng.random_range(arena.min().x..=arena.max().x),
        rng.random_range(arena.min().y..=arena.max().y),
    );
    commands
        .spawn((
            Name::new("RandomWalkEnemy"),
            Enemy {
                size: RANDOM_WALKER_SIZE,
            },
            RandomWalk {
                dest,
                speed: rng.random_range(INITIAL_SPEED_MIN..=INITIAL_SPEED_MAX),
            },
            Mesh2d(assets.walker_mesh.clone()),
            MeshMaterial2d(assets.hostile_material.clone()),
            Transform::from_xyz(position.x, position.y, Z_ENEMY),
        ))
        .id()
}

// === Systems ===

/// One wander tick per walker: independent per-axis decisions, which
/// produces diagonal or axis-aligned motion rather than straight lines.
fn wander(arena: Res<Arena>, mut walkers: Query<(&Enemy, &mut RandomWalk, &mut Transform)>) {
    let mut rng = rand::rng();
    for (enemy, mut walk, mut transform) in &mut walkers {
        match axis_step(
            transform.translation.x,
            walk.dest.x,
            X_ARRIVAL_TOLERANCE,
            walk.speed,
        ) {
            AxisStep::Reroll => {
                walk.dest.x = rng.random_range(arena.min().x..=arena.max().x);
                walk.speed = rng.random_range(LEG_SPEED_MIN..=LEG_SPEED_MAX);
            }
            AxisStep::Step(dx) => transform.translation.x += dx,
        }
        match axis_step(
            transform.translation.y,
            walk.dest.y,
            enemy.size,
            walk.speed,
        ) {
            AxisStep::Reroll => {
                walk.dest.y = rng.random_range(arena.min().y..=arena.max().y);
                walk.speed = rng.random_range(LEG_SPEED_MIN..=LEG_SPEED_MAX);
            }
            AxisStep::Step(dy) => transform.translation.y += dy,
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<RandomWalk>();
    app.add_systems(FixedUpdate, wander.in_set(GameSet::Enemies));
}
