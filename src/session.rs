//! Session lifecycle: construction parameters, the arena, and terminal
//! win/lose resolution.

use bevy::prelude::*;
use thiserror::Error;

use crate::GameSet;

/// Validated construction parameters for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub level: u32,
}

/// Construction-parameter validation failures. These are the only errors in
/// the crate; everything past construction is infallible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionConfigError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("level must be at least 1, got {level}")]
    InvalidLevel { level: u32 },
}

impl SessionConfig {
    /// Fail-fast validation of the three launch parameters.
    pub fn new(width: u32, height: u32, level: u32) -> Result<Self, SessionConfigError> {
        if width == 0 || height == 0 {
            return Err(SessionConfigError::InvalidDimensions { width, height });
        }
        if level == 0 {
            return Err(SessionConfigError::InvalidLevel { level });
        }
        Ok(Self {
            width,
            height,
            level,
        })
    }
}

/// Playfield bounds and difficulty, fixed for the session lifetime.
///
/// World origin is the screen center; the visible canvas spans
/// [`Self::min`]..=[`Self::max`]. Entities are allowed to roam or render
/// outside these bounds.
#[derive(Resource, Debug, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub level: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            level: 1,
        }
    }
}

impl From<SessionConfig> for Arena {
    fn from(config: SessionConfig) -> Self {
        Self {
            width: config.width as f32,
            height: config.height as f32,
            level: config.level,
        }
    }
}

impl Arena {
    /// Bottom-left corner of the canvas in world coordinates.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        Vec2::new(-self.width / 2.0, -self.height / 2.0)
    }

    /// Top-right corner of the canvas in world coordinates.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Terminal flag for the session. Once out of `Running`, no further ticks
/// are processed.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Running,
    Won,
    Lost,
}

/// Win/lose signal, written by the player (win) or any enemy (loss).
///
/// Signals are buffered and resolved once per tick by
/// [`resolve_session_over`]: the first signal of a tick decides the outcome
/// and every later or repeated signal is dropped.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOver {
    Won,
    Lost,
}

/// Applies the first outcome signal of the tick and discards the rest.
///
/// Gated on `session_running`, so signals arriving after termination are
/// no-ops and cannot resurrect a terminal session.
pub fn resolve_session_over(
    mut outcomes: MessageReader<SessionOver>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
) {
    let mut pending = outcomes.read();
    let Some(first) = pending.next() else {
        return;
    };
    info!("session over: {first:?}");
    next_phase.set(match first {
        SessionOver::Won => SessionPhase::Won,
        SessionOver::Lost => SessionPhase::Lost,
    });
    // Drop any later signals from the same tick.
    for _ in pending {}
}

/// Spawns the global 2D camera.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn plugin(app: &mut App) {
    app.register_type::<Arena>()
        .init_state::<SessionPhase>()
        .init_resource::<Arena>()
        .add_message::<SessionOver>()
        .add_systems(Startup, setup_camera)
        .add_systems(
            FixedUpdate,
            resolve_session_over.in_set(GameSet::Resolve),
        );
}
