//! Front-loaded enemy wave scheduling over a session-owned delay queue.
//!
//! Deferred one-shot actions are explicit timer entries drained once per
//! tick against the fixed clock, in (fire time, insertion) order. The
//! schedule is seeded at startup; only the truck re-enters the queue
//! afterwards, perpetually re-booking its own charge.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use bevy::prelude::*;

use crate::GameSet;
use crate::session::Arena;

use super::enemies::truck::Truck;
use super::enemies::{EnemyAssets, chasing, fencing, random_walk, truck};
use super::home::Home;
use super::player::Player;

// === Constants ===

/// Delay before the opening wave: fencers plus level-scaled walkers and
/// chasers.
const OPENING_WAVE_DELAY: Duration = Duration::from_millis(100);

/// Delay before the first truck charge.
const TRUCK_WAVE_DELAY: Duration = Duration::from_millis(3000);

/// Two later chaser reinforcement waves.
const REINFORCEMENT_DELAYS: [Duration; 2] =
    [Duration::from_millis(10_000), Duration::from_millis(30_000)];

/// Fencers guarding home, independent of level.
const FENCER_COUNT: u32 = 4;

/// Walkers beyond the level-scaled portion.
const RANDOM_WALKER_BASE: u32 = 2;

// === Pure Functions ===

/// Random walkers in the opening wave: linear in level.
#[must_use]
pub fn random_walker_count(level: u32) -> u32 {
    level + RANDOM_WALKER_BASE
}

/// Chasers per wave: sub-linear in level.
#[must_use]
pub fn chaser_count(level: u32) -> u32 {
    1 + level / 10
}

// === Delay Queue ===

/// What a scheduled entry does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveAction {
    /// Fencers + walkers + chasers.
    Opening,
    /// Summon (or re-summon) the truck.
    TruckCharge,
    /// An extra round of chasers.
    ChaserReinforcements,
}

#[derive(Debug, PartialEq, Eq)]
struct ScheduledWave {
    fire_at: Duration,
    seq: u64,
    action: WaveAction,
}

impl Ord for ScheduledWave {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fire_at
            .cmp(&other.fire_at)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScheduledWave {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One-shot deferred actions owned by the session. Entries fire in
/// (time, insertion) order; ties on time preserve insertion order.
#[derive(Resource, Debug, Default)]
pub struct WaveQueue {
    entries: BinaryHeap<Reverse<ScheduledWave>>,
    next_seq: u64,
}

impl WaveQueue {
    /// Registers a one-shot action to fire once `now` reaches `fire_at`.
    pub fn schedule(&mut self, fire_at: Duration, action: WaveAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Reverse(ScheduledWave {
            fire_at,
            seq,
            action,
        }));
    }

    /// Pops the next entry due at or before `now`, if any.
    pub fn pop_due(&mut self, now: Duration) -> Option<WaveAction> {
        if self
            .entries
            .peek()
            .is_some_and(|Reverse(entry)| entry.fire_at <= now)
        {
            self.entries.pop().map(|Reverse(entry)| entry.action)
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// === Systems ===

/// Seeds the front-loaded schedule. The total enemy population is
/// level-dependent but fixed once all entries fire, except the truck.
fn seed_wave_schedule(mut queue: ResMut<WaveQueue>) {
    queue.schedule(OPENING_WAVE_DELAY, WaveAction::Opening);
    queue.schedule(TRUCK_WAVE_DELAY, WaveAction::TruckCharge);
    for delay in REINFORCEMENT_DELAYS {
        queue.schedule(delay, WaveAction::ChaserReinforcements);
    }
}

/// Drains every due entry against the fixed clock. Enemies spawned here
/// become eligible for update starting the next full tick.
fn drain_wave_queue(
    mut commands: Commands,
    time: Res<Time>,
    arena: Res<Arena>,
    assets: Res<EnemyAssets>,
    mut queue: ResMut<WaveQueue>,
    home: Single<(&Home, &Transform), (Without<Player>, Without<Truck>)>,
    player: Single<&Transform, With<Player>>,
    mut truck: Single<(&mut Truck, &mut Transform, &mut Visibility), Without<Player>>,
) {
    let now = time.elapsed();
    while let Some(action) = queue.pop_due(now) {
        match action {
            WaveAction::Opening => {
                let (home, home_transform) = *home;
                let home_center = home_transform.translation.xy();
                for _ in 0..FENCER_COUNT {
                    fencing::spawn_fencer(&mut commands, &arena, home_center, home.size);
                }
                for _ in 0..random_walker_count(arena.level) {
                    random_walk::spawn_random_walker(&mut commands, &assets, &arena);
                }
                for _ in 0..chaser_count(arena.level) {
                    chasing::spawn_chaser(&mut commands, &assets, &arena);
                }
                info!("opening wave deployed at level {}", arena.level);
            }
            WaveAction::TruckCharge => {
                let (truck, truck_transform, truck_visibility) = &mut *truck;
                truck::summon(
                    truck,
                    truck_transform,
                    truck_visibility,
                    &arena,
                    player.translation.y,
                );
            }
            WaveAction::ChaserReinforcements => {
                for _ in 0..chaser_count(arena.level) {
                    chasing::spawn_chaser(&mut commands, &assets, &arena);
                }
                info!("chaser reinforcements deployed");
            }
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<WaveQueue>();
    app.add_systems(Startup, seed_wave_schedule);
    app.add_systems(FixedUpdate, drain_wave_queue.in_set(GameSet::Waves));
}
