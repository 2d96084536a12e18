//! Perimeter patrol around home: a four-leg cyclic state machine.

use bevy::prelude::*;
use rand::Rng;

use crate::session::Arena;
use crate::theme::palette;
use crate::{GameSet, Z_ENEMY};

use super::Enemy;

// === Constants ===

/// Side length of the fencer square, and the corner tolerance band.
pub const FENCER_SIZE: f32 = 10.0;

/// Patrol speed cap; high levels stop getting faster here.
const MAX_PATROL_SPEED: f32 = 20.0;

// === Components ===

/// The current patrol leg. Legs cycle Left -> Down -> Right -> Up -> Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum PatrolLeg {
    Left,
    Down,
    Right,
    Up,
}

/// The square the fencer walks. Axis-aligned, centered on home.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PatrolBounds {
    pub west: f32,
    pub east: f32,
    pub south: f32,
    pub north: f32,
}

impl PatrolBounds {
    /// Square clearing home's bounding box plus the fencer's own size plus
    /// one step of margin.
    #[must_use]
    pub fn around(home_center: Vec2, home_size: f32, fencer_size: f32, speed: f32) -> Self {
        let reach = home_size + fencer_size + speed;
        Self {
            west: home_center.x - reach,
            east: home_center.x + reach,
            south: home_center.y - reach,
            north: home_center.y + reach,
        }
    }
}

/// Patrol state machine. The leg switches when the moving coordinate lands
/// within the tolerance band around that leg's corner value.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Fencing {
    pub leg: PatrolLeg,
    pub speed: f32,
    pub bounds: PatrolBounds,
}

impl Fencing {
    /// Patrol step per tick: the level, capped at [`MAX_PATROL_SPEED`].
    #[must_use]
    pub fn patrol_speed(level: u32) -> f32 {
        (level as f32).min(MAX_PATROL_SPEED)
    }

    /// Advance one tick: move along the current leg, then switch legs once
    /// the moving coordinate is within `band` of the leg's corner.
    pub fn advance(&mut self, pos: Vec2, band: f32) -> Vec2 {
        let mut pos = pos;
        match self.leg {
            PatrolLeg::Left => {
                pos.x -= self.speed;
                if (pos.x - self.bounds.west).abs() < band {
                    self.leg = PatrolLeg::Down;
                }
            }
            PatrolLeg::Down => {
                pos.y -= self.speed;
                if (pos.y - self.bounds.south).abs() < band {
                    self.leg = PatrolLeg::Right;
                }
            }
            PatrolLeg::Right => {
                pos.x += self.speed;
                if (pos.x - self.bounds.east).abs() < band {
                    self.leg = PatrolLeg::Up;
                }
            }
            PatrolLeg::Up => {
                pos.y += self.speed;
                if (pos.y - self.bounds.north).abs() < band {
                    self.leg = PatrolLeg::Left;
                }
            }
        }
        pos
    }
}

// === Spawning ===

/// Fencers start somewhere along the top edge, moving left.
pub fn spawn_fencer(
    commands: &mut Commands,
    arena: &Arena,
    home_center: Vec2,
    home_size: f32,
) -> Entity {
    let speed = Fencing::patrol_speed(arena.level);
    let bounds = PatrolBounds::around(home_center, home_size, FENCER_SIZE, speed);
    let start_x = rand::rng().random_range(bounds.west..=bounds.east);
    commands
        .spawn((
            Name::new("FencingEnemy"),
            Enemy { size: FENCER_SIZE },
            Fencing {
                leg: PatrolLeg::Left,
                speed,
                bounds,
            },
            Sprite::from_color(palette::FENCER, Vec2::splat(FENCER_SIZE)),
            Transform::from_xyz(start_x, bounds.north, Z_ENEMY),
        ))
        .id()
}

// === Systems ===

fn patrol(mut fencers: Query<(&Enemy, &mut Fencing, &mut Transform)>) {
    for (enemy, mut fencing, mut transform) in &mut fencers {
        let next = fencing.advance(transform.translation.xy(), enemy.size);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Fencing>();
    app.add_systems(FixedUpdate, patrol.in_set(GameSet::Enemies));
}
