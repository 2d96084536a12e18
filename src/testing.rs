//! Testing utilities for Bevy systems.

#![cfg(test)]

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::session::{Arena, SessionOver, SessionPhase};

/// Minimal app with session state, outcome messages, and a default arena.
pub fn create_session_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<SessionPhase>();
    app.insert_resource(Arena::default());
    app.add_message::<SessionOver>();
    app
}

/// Current session phase.
pub fn session_phase(app: &App) -> SessionPhase {
    *app.world().resource::<State<SessionPhase>>().get()
}

/// Asserts the number of entities matching the query filter.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let count = app
        .world_mut()
        .query_filtered::<(), F>()
        .iter(app.world())
        .count();
    assert_eq!(
        count, expected,
        "expected {expected} matching entities, found {count}",
    );
}
