//! Pure-pursuit enemy: re-aims at the player's current position every tick.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::player::Player;
use crate::session::Arena;
use crate::{GameSet, Z_ENEMY};

use super::{Enemy, EnemyAssets};

// === Constants ===

/// Diameter of the chaser circle.
pub const CHASER_SIZE: f32 = 65.0;

/// Chase step per tick.
const CHASE_SPEED: f32 = 2.0;

/// Chasers spawn away from the canvas edges so they do not materialize on
/// top of the player or home.
const SPAWN_EDGE_MARGIN: f32 = 100.0;

// === Components ===

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Chasing {
    pub speed: f32,
}

// === Spawning ===

pub fn spawn_chaser(commands: &mut Commands, assets: &EnemyAssets, arena: &Arena) -> Entity {
    let mut rng = rand::rng();
    let position = Vec2::new(
        rng.random_range(arena.min().x + SPAWN_EDGE_MARGIN..=arena.max().x - SPAWN_EDGE_MARGIN),
        rng.random_range(arena.min().y + SPAWN_EDGE_MARGIN..=arena.max().y - SPAWN_EDGE_MARGIN),
    );
    commands
        .spawn((
            Name::new("ChasingEnemy"),
            Enemy { size: CHASER_SIZE },
            Chasing { speed: CHASE_SPEED },
            Mesh2d(assets.chaser_mesh.clone()),
            MeshMaterial2d(assets.hostile_material.clone()),
            Transform::from_xyz(position.x, position.y, Z_ENEMY),
        ))
        .id()
}

// === Systems ===

/// Pure pursuit: no prediction, no steering delay. A zero-magnitude
/// direction (chaser exactly on the player) skips the tick instead of
/// dividing by zero.
fn pursue(
    player: Single<&Transform, With<Player>>,
    mut chasers: Query<(&Chasing, &mut Transform), Without<Player>>,
) {
    let target = player.translation.xy();
    for (chasing, mut transform) in &mut chasers {
        let Some(heading) = (target - transform.translation.xy()).try_normalize() else {
            continue;
        };
        transform.translation += (heading * chasing.speed).extend(0.0);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Chasing>();
    app.add_systems(FixedUpdate, pursue.in_set(GameSet::Enemies));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_session_test_app;
    use pretty_assertions::assert_eq;

    fn create_pursuit_test_app() -> App {
        let mut app = create_session_test_app();
        app.add_systems(Update, pursue);
        app.world_mut().spawn((
            Player { speed: 5.0 },
            Transform::from_xyz(0.0, 0.0, 0.0),
        ));
        app
    }

    fn spawn_chaser_at(app: &mut App, x: f32, y: f32) -> Entity {
        app.world_mut()
            .spawn((
                Enemy { size: CHASER_SIZE },
                Chasing { speed: CHASE_SPEED },
                Transform::from_xyz(x, y, 0.0),
            ))
            .id()
    }

    fn chaser_position(app: &App, chaser: Entity) -> Vec2 {
        app.world().get::<Transform>(chaser).unwrap().translation.xy()
    }

    #[test]
    fn distance_strictly_decreases_until_within_one_step() {
        let mut app = create_pursuit_test_app();
        let chaser = spawn_chaser_at(&mut app, 120.0, -90.0);

        let mut distance = chaser_position(&app, chaser).length();
        while distance > CHASE_SPEED {
            app.update();
            let next = chaser_position(&app, chaser).length();
            assert!(
                next < distance,
                "distance should strictly decrease, {next} >= {distance}"
            );
            distance = next;
        }
    }

    #[test]
    fn step_magnitude_is_the_chase_speed() {
        let mut app = create_pursuit_test_app();
        let chaser = spawn_chaser_at(&mut app, 100.0, 0.0);

        app.update();

        assert_eq!(
            chaser_position(&app, chaser),
            Vec2::new(100.0 - CHASE_SPEED, 0.0)
        );
    }

    #[test]
    fn exact_overlap_skips_the_tick() {
        let mut app = create_pursuit_test_app();
        let chaser = spawn_chaser_at(&mut app, 0.0, 0.0);

        app.update();

        let pos = chaser_position(&app, chaser);
        assert_eq!(pos, Vec2::ZERO);
        assert!(pos.x.is_finite() && pos.y.is_finite());
    }
}
