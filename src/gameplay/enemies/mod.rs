//! Enemy roster: shared size/hit-test state, render assets, and the four
//! motion-policy variants.

pub mod chasing;
pub mod fencing;
pub mod random_walk;
pub mod truck;

use bevy::prelude::*;

use crate::GameSet;
use crate::session::SessionOver;
use crate::theme::palette;

use super::player::Player;
use truck::{Truck, TruckPhase};

// === Components ===

/// Common enemy state. The hit box is a `size` x `size` square centered on
/// the entity.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Enemy {
    pub size: f32,
}

/// Strict AABB overlap between the enemy's box and the player's point
/// position. Points exactly on a boundary do not hit.
#[must_use]
pub fn hits_player(enemy_center: Vec2, size: f32, player: Vec2) -> bool {
    let half = size / 2.0;
    (player.x - enemy_center.x).abs() < half && (player.y - enemy_center.y).abs() < half
}

// === Resources ===

/// Shared mesh and material handles for circle-rendered enemies.
#[derive(Resource, Debug)]
pub struct EnemyAssets {
    pub walker_mesh: Handle<Mesh>,
    pub chaser_mesh: Handle<Mesh>,
    pub hostile_material: Handle<ColorMaterial>,
}

// === Systems ===

fn setup_enemy_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(EnemyAssets {
        walker_mesh: meshes.add(Circle::new(random_walk::RANDOM_WALKER_SIZE / 2.0)),
        chaser_mesh: meshes.add(Circle::new(chasing::CHASER_SIZE / 2.0)),
        hostile_material: materials.add(palette::HOSTILE),
    });
}

/// Checks every enemy against the player once all motion systems have run
/// and signals a loss on the first hit. An idle truck is parked off-screen
/// and hidden; it cannot hit.
pub(super) fn detect_player_hits(
    player: Single<&Transform, With<Player>>,
    enemies: Query<(&Enemy, &Transform, Option<&Truck>), Without<Player>>,
    mut outcome: MessageWriter<SessionOver>,
) {
    let player_pos = player.translation.xy();
    for (enemy, transform, truck) in &enemies {
        if truck.is_some_and(|t| t.phase == TruckPhase::Idle) {
            continue;
        }
        if hits_player(transform.translation.xy(), enemy.size, player_pos) {
            outcome.write(SessionOver::Lost);
            return;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Enemy>();
    app.add_systems(Startup, setup_enemy_assets);
    app.add_plugins((
        random_walk::plugin,
        chasing::plugin,
        fencing::plugin,
        truck::plugin,
    ));
    app.add_systems(FixedUpdate, detect_player_hits.in_set(GameSet::Collision));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionPhase, resolve_session_over};
    use crate::testing::{create_session_test_app, session_phase};
    use pretty_assertions::assert_eq;

    #[test]
    fn hit_requires_strict_interior() {
        let center = Vec2::new(10.0, 10.0);
        assert!(hits_player(center, 20.0, center));
        assert!(hits_player(center, 20.0, Vec2::new(19.9, 10.0)));
        assert!(hits_player(center, 20.0, Vec2::new(10.0, 0.1)));
    }

    #[test]
    fn boundary_points_do_not_hit() {
        let center = Vec2::new(10.0, 10.0);
        // Exactly on each bound of the 20x20 box.
        assert!(!hits_player(center, 20.0, Vec2::new(20.0, 10.0)));
        assert!(!hits_player(center, 20.0, Vec2::new(0.0, 10.0)));
        assert!(!hits_player(center, 20.0, Vec2::new(10.0, 20.0)));
        assert!(!hits_player(center, 20.0, Vec2::new(10.0, 0.0)));
    }

    fn create_collision_test_app() -> App {
        let mut app = create_session_test_app();
        app.add_systems(
            Update,
            (detect_player_hits, resolve_session_over).chain(),
        );
        app.world_mut().spawn((
            Player { speed: 5.0 },
            Transform::from_xyz(0.0, 0.0, 0.0),
        ));
        app
    }

    #[test]
    fn overlapping_enemy_loses_the_session() {
        let mut app = create_collision_test_app();
        app.world_mut()
            .spawn((Enemy { size: 20.0 }, Transform::from_xyz(5.0, 5.0, 0.0)));

        app.update();
        app.update();

        assert_eq!(session_phase(&app), SessionPhase::Lost);
    }

    #[test]
    fn distant_enemy_keeps_session_running() {
        let mut app = create_collision_test_app();
        app.world_mut()
            .spawn((Enemy { size: 20.0 }, Transform::from_xyz(300.0, 0.0, 0.0)));

        app.update();
        app.update();

        assert_eq!(session_phase(&app), SessionPhase::Running);
    }

    #[test]
    fn idle_truck_cannot_hit() {
        let mut app = create_collision_test_app();
        app.world_mut().spawn((
            Enemy {
                size: truck::TRUCK_SIZE,
            },
            Truck {
                phase: TruckPhase::Idle,
                speed: 10.0,
            },
            Transform::from_xyz(0.0, 0.0, 0.0),
        ));

        app.update();
        app.update();

        assert_eq!(session_phase(&app), SessionPhase::Running);
    }
}
