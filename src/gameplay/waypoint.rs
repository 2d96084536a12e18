//! Click-target marker the player steers toward.

use std::f32::consts::{FRAC_PI_4, SQRT_2};

use bevy::prelude::*;

use crate::theme::palette;
use crate::{Z_WAYPOINT, session_running};

// === Constants ===

/// Half-extent of the X-mark arms.
pub const WAYPOINT_HALF_SIZE: f32 = 10.0;

const ARM_THICKNESS: f32 = 2.0;

// === Components ===

/// The player's current movement target, set by pointer click.
///
/// At most one per session. Invariant: an inactive waypoint renders hidden;
/// [`activate`](Self) and the player's arrival handling keep visibility in
/// sync with `active`.
#[derive(Component, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct Waypoint {
    pub active: bool,
}

// === Systems ===

/// The X-mark: two crossing diagonal arms, hidden until the first click.
fn spawn_waypoint(mut commands: Commands) {
    let arm = Sprite::from_color(
        palette::WAYPOINT,
        Vec2::new(2.0 * WAYPOINT_HALF_SIZE * SQRT_2, ARM_THICKNESS),
    );
    commands.spawn((
        Name::new("Waypoint"),
        Waypoint::default(),
        Transform::from_xyz(0.0, 0.0, Z_WAYPOINT),
        Visibility::Hidden,
        children![
            (
                arm.clone(),
                Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_4)),
            ),
            (
                arm,
                Transform::from_rotation(Quat::from_rotation_z(-FRAC_PI_4)),
            ),
        ],
    ));
}

/// Moves the waypoint to the clicked world position and activates it.
///
/// Click coordinates are taken as-is; no clamping to the canvas.
fn activate_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    window: Single<&Window>,
    camera: Single<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut waypoint: Single<(&mut Waypoint, &mut Transform, &mut Visibility)>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let (camera, camera_global) = *camera;
    let Some(world_pos) = window
        .cursor_position()
        .and_then(|screen_pos| camera.viewport_to_world_2d(camera_global, screen_pos).ok())
    else {
        return;
    };

    let (waypoint, transform, visibility) = &mut *waypoint;
    waypoint.active = true;
    transform.translation.x = world_pos.x;
    transform.translation.y = world_pos.y;
    **visibility = Visibility::Inherited;
    debug!("waypoint set to {world_pos}");
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Waypoint>();
    app.add_systems(Startup, spawn_waypoint);
    app.add_systems(Update, activate_on_click.run_if(session_running));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_session_test_app;

    #[test]
    fn spawns_inactive_and_hidden() {
        let mut app = create_session_test_app();
        app.add_systems(Startup, spawn_waypoint);
        app.update();

        let mut query = app
            .world_mut()
            .query::<(&Waypoint, &Visibility)>();
        let (waypoint, visibility) = query.single(app.world()).unwrap();
        assert!(!waypoint.active);
        assert_eq!(*visibility, Visibility::Hidden);
    }

    #[test]
    fn x_mark_has_two_arms() {
        let mut app = create_session_test_app();
        app.add_systems(Startup, spawn_waypoint);
        app.update();

        let mut arms = app.world_mut().query::<(&Sprite, &ChildOf)>();
        assert_eq!(arms.iter(app.world()).count(), 2);
    }
}
