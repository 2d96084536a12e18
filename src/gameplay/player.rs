//! The controlled turtle: steers toward the active waypoint and wins on
//! reaching home.

use bevy::prelude::*;

use crate::session::{Arena, SessionOver};
use crate::theme::palette;
use crate::{GameSet, Z_PLAYER};

use super::home::Home;
use super::waypoint::Waypoint;

// === Constants ===

/// Player step per tick.
pub const PLAYER_SPEED: f32 = 5.0;

/// Visual radius of the turtle circle.
const PLAYER_RADIUS: f32 = 10.0;

/// Distance of the starting position from the left edge of the canvas.
const START_EDGE_INSET: f32 = 50.0;

// === Components ===

/// The controlled agent. Owned exclusively by the session; mutated only by
/// [`move_player`].
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Player {
    pub speed: f32,
}

// === Systems ===

fn spawn_player(
    mut commands: Commands,
    arena: Res<Arena>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Name::new("Player"),
        Player {
            speed: PLAYER_SPEED,
        },
        Mesh2d(meshes.add(Circle::new(PLAYER_RADIUS))),
        MeshMaterial2d(materials.add(palette::PLAYER)),
        Transform::from_xyz(arena.min().x + START_EDGE_INSET, 0.0, Z_PLAYER),
    ));
}

/// One player tick.
///
/// Home arrival is checked first and wins the session. Otherwise, if the
/// waypoint is active, the player advances `speed` along the unit vector
/// toward it (straight-line interpolation). When the remaining distance
/// falls below `speed`, the waypoint deactivates so the player does not
/// oscillate around it.
pub fn move_player(
    home: Single<(&Home, &Transform), (Without<Player>, Without<Waypoint>)>,
    mut player: Single<(&Player, &mut Transform), Without<Waypoint>>,
    mut waypoint: Single<(&mut Waypoint, &Transform, &mut Visibility), Without<Player>>,
    mut outcome: MessageWriter<SessionOver>,
) {
    let (home, home_transform) = *home;
    let (player, transform) = &mut *player;
    let position = transform.translation.xy();

    if home.contains(home_transform.translation.xy(), position) {
        outcome.write(SessionOver::Won);
        return;
    }

    let (waypoint, waypoint_transform, visibility) = &mut *waypoint;
    if !waypoint.active {
        return;
    }
    let target = waypoint_transform.translation.xy();
    // Zero-distance heading is undefined; skip the step, the arrival check
    // below still deactivates.
    if let Some(heading) = (target - position).try_normalize() {
        transform.translation += (heading * player.speed).extend(0.0);
    }
    if transform.translation.xy().distance(target) < player.speed {
        waypoint.active = false;
        **visibility = Visibility::Hidden;
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Player>();
    app.add_systems(Startup, spawn_player);
    app.add_systems(FixedUpdate, move_player.in_set(GameSet::Player));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionPhase, resolve_session_over};
    use crate::testing::{create_session_test_app, session_phase};
    use pretty_assertions::assert_eq;

    /// App with the player tick and outcome resolution registered in
    /// `Update`, plus a home far out of the way.
    fn create_player_test_app() -> App {
        let mut app = create_session_test_app();
        app.add_systems(Update, (move_player, resolve_session_over).chain());
        app.world_mut().spawn((
            Home { size: 20.0 },
            Transform::from_xyz(10_000.0, 10_000.0, 0.0),
        ));
        app
    }

    fn spawn_player_at(app: &mut App, x: f32, y: f32) -> Entity {
        app.world_mut()
            .spawn((
                Player { speed: 5.0 },
                Transform::from_xyz(x, y, 0.0),
            ))
            .id()
    }

    fn spawn_waypoint_at(app: &mut App, active: bool, x: f32, y: f32) -> Entity {
        app.world_mut()
            .spawn((
                Waypoint { active },
                Transform::from_xyz(x, y, 0.0),
                Visibility::Inherited,
            ))
            .id()
    }

    fn player_position(app: &mut App, player: Entity) -> Vec2 {
        app.world().get::<Transform>(player).unwrap().translation.xy()
    }

    #[test]
    fn advances_toward_active_waypoint_by_speed() {
        let mut app = create_player_test_app();
        let player = spawn_player_at(&mut app, 0.0, 0.0);
        spawn_waypoint_at(&mut app, true, 100.0, 0.0);

        app.update();

        assert_eq!(player_position(&mut app, player), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn heading_is_recomputed_as_a_unit_vector() {
        let mut app = create_player_test_app();
        let player = spawn_player_at(&mut app, 0.0, 0.0);
        spawn_waypoint_at(&mut app, true, 30.0, 40.0);

        app.update();

        // 3-4-5 triangle: one step of 5 lands at (3, 4).
        let pos = player_position(&mut app, player);
        assert!((pos - Vec2::new(3.0, 4.0)).length() < 1e-4);
    }

    #[test]
    fn inactive_waypoint_leaves_player_still() {
        let mut app = create_player_test_app();
        let player = spawn_player_at(&mut app, 10.0, 20.0);
        spawn_waypoint_at(&mut app, false, 100.0, 0.0);

        app.update();

        assert_eq!(player_position(&mut app, player), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn arrival_deactivates_waypoint_once() {
        let mut app = create_player_test_app();
        let player = spawn_player_at(&mut app, 0.0, 0.0);
        // Distance 3 < speed 5: a single tick overshoots and deactivates.
        let waypoint = spawn_waypoint_at(&mut app, true, 3.0, 0.0);

        app.update();

        let marker = app.world().get::<Waypoint>(waypoint).unwrap();
        assert!(!marker.active);
        assert_eq!(
            *app.world().get::<Visibility>(waypoint).unwrap(),
            Visibility::Hidden
        );

        // Second tick with no new activation: no further heading change.
        let after_arrival = player_position(&mut app, player);
        app.update();
        assert_eq!(player_position(&mut app, player), after_arrival);
    }

    #[test]
    fn waypoint_under_player_deactivates_without_nan() {
        let mut app = create_player_test_app();
        let player = spawn_player_at(&mut app, 7.0, 7.0);
        spawn_waypoint_at(&mut app, true, 7.0, 7.0);

        app.update();

        let pos = player_position(&mut app, player);
        assert_eq!(pos, Vec2::new(7.0, 7.0));
        let mut query = app.world_mut().query::<&Waypoint>();
        assert!(!query.single(app.world()).unwrap().active);
    }

    #[test]
    fn reaching_home_wins_the_session() {
        let mut app = create_session_test_app();
        app.add_systems(Update, (move_player, resolve_session_over).chain());
        app.world_mut().spawn((
            Home { size: 20.0 },
            Transform::from_xyz(50.0, 0.0, 0.0),
        ));
        spawn_player_at(&mut app, 45.0, 5.0);
        spawn_waypoint_at(&mut app, false, 0.0, 0.0);

        app.update();
        app.update();

        assert_eq!(session_phase(&app), SessionPhase::Won);
    }
}
