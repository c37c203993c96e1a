//! Periodic generation scheduler
//!
//! Each tick: check the session flag, run the suffocation check for
//! vulnerable observers, then generate every untracked region within a
//! fixed radius of the observer. The periodic driver runs the tick on a
//! tokio interval and cancels cooperatively when the session goes
//! inactive; an in-progress tick always completes.

pub mod session;
pub mod tracker;

pub use session::GenerationSession;
pub use tracker::{RegionCoord, RegionTracker};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::generation::{self, LayoutKind, LayoutParams};
use crate::safety::{self, SafetyOutcome};
use crate::world::{AssetPlacer, GridWorld, Observer};

/// Scheduler settings. Loadable from a JSON file for the simulation
/// binary; everything defaults to the canonical values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Chebyshev radius, in regions, generated around the observer.
    pub radius: i32,
    /// Tick period in milliseconds.
    pub period_millis: u64,
    /// Vertical base level rooms are generated at.
    pub base_level: i32,
    /// Layout family for this session.
    pub layout: LayoutKind,
    /// Layout generator parameters.
    pub params: LayoutParams,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            radius: 4,
            period_millis: 1000,
            base_level: 232,
            layout: LayoutKind::default(),
            params: LayoutParams::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_millis)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is inactive; the driver should exit.
    Stopped,
    Ran {
        /// Regions generated this tick.
        generated: usize,
        /// Result of the suffocation check, when one ran.
        safety: Option<SafetyOutcome>,
    },
}

/// Owns the session and drives generation around an observer.
pub struct Scheduler {
    pub session: GenerationSession,
    pub config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(session: GenerationSession, config: SchedulerConfig) -> Self {
        Self { session, config }
    }

    /// Run one tick against the world and observer handles.
    ///
    /// Collaborator failures are logged here, at the tick boundary,
    /// and never propagate; a failed region stays claimed in the
    /// tracker and is not retried.
    pub fn tick<W, O>(&mut self, world: &mut W, observer: &mut O) -> TickOutcome
    where
        W: GridWorld + AssetPlacer,
        O: Observer,
    {
        if !self.session.active {
            return TickOutcome::Stopped;
        }

        let safety = if observer.movement_mode().is_vulnerable() {
            Some(safety::check_and_relocate(world, observer, self.config.base_level))
        } else {
            None
        };

        let center = RegionCoord::from_block(observer.position());
        let mut generated = 0;
        for dx in -self.config.radius..=self.config.radius {
            for dz in -self.config.radius..=self.config.radius {
                let coord = RegionCoord::new(center.x + dx, center.z + dz);
                if !self.session.tracker.insert_new(coord) {
                    continue;
                }

                let (start_x, start_z) = coord.block_origin();
                match generation::generate_region(
                    world,
                    self.session.rng.as_mut(),
                    self.session.layout,
                    start_x,
                    start_z,
                    self.config.base_level,
                    &self.config.params,
                ) {
                    Ok(()) => generated += 1,
                    Err(e) => log::error!("generating region {coord:?} failed: {e}"),
                }
            }
        }

        if generated > 0 {
            log::debug!(
                "generated {generated} regions around {center:?} ({} total)",
                self.session.tracker.len()
            );
        }

        TickOutcome::Ran { generated, safety }
    }
}

/// Drive a scheduler on its configured period until the session goes
/// inactive. The tick body runs under the mutexes; the stop flag is
/// observed at the top of each tick.
pub fn run_periodic<W, O>(
    scheduler: Arc<Mutex<Scheduler>>,
    world: Arc<Mutex<W>>,
    observer: Arc<Mutex<O>>,
) -> tokio::task::JoinHandle<()>
where
    W: GridWorld + AssetPlacer + Send + 'static,
    O: Observer + Send + 'static,
{
    let period = scheduler.lock().expect("scheduler mutex poisoned").config.period();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;

            let mut scheduler = scheduler.lock().expect("scheduler mutex poisoned");
            let mut world = world.lock().expect("world mutex poisoned");
            let mut observer = observer.lock().expect("observer mutex poisoned");

            match scheduler.tick(&mut *world, &mut *observer) {
                TickOutcome::Stopped => {
                    log::info!("generation loop stopped");
                    break;
                }
                TickOutcome::Ran { .. } => {}
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ChaChaRandom;
    use crate::core::types::IVec3;
    use crate::core::Error;
    use crate::world::{CellData, CellType, MemoryGrid, MovementMode, SimulatedObserver};

    fn test_scheduler(seed: u64) -> Scheduler {
        let mut session = GenerationSession::new(Box::new(ChaChaRandom::seeded(seed)));
        session.activate();
        Scheduler::new(session, SchedulerConfig::default())
    }

    #[test]
    fn test_tick_generates_radius() {
        let mut scheduler = test_scheduler(1);
        let mut world = MemoryGrid::filled(CellType::Stone);
        let mut observer = SimulatedObserver::new(IVec3::new(3, 233, 3), MovementMode::Creative);

        let outcome = scheduler.tick(&mut world, &mut observer);
        // 9x9 regions around the observer's region.
        assert_eq!(outcome, TickOutcome::Ran { generated: 81, safety: None });
        assert_eq!(scheduler.session.tracker.len(), 81);
    }

    #[test]
    fn test_second_tick_is_idempotent() {
        let mut scheduler = test_scheduler(2);
        let mut world = MemoryGrid::filled(CellType::Stone);
        let mut observer = SimulatedObserver::new(IVec3::new(3, 233, 3), MovementMode::Creative);

        scheduler.tick(&mut world, &mut observer);
        let writes_after_first = world.write_count();

        let outcome = scheduler.tick(&mut world, &mut observer);
        assert_eq!(outcome, TickOutcome::Ran { generated: 0, safety: None });
        assert_eq!(world.write_count(), writes_after_first);
    }

    #[test]
    fn test_moving_observer_extends_coverage() {
        let mut scheduler = test_scheduler(3);
        let mut world = MemoryGrid::filled(CellType::Stone);
        let mut observer = SimulatedObserver::new(IVec3::new(0, 233, 0), MovementMode::Creative);

        scheduler.tick(&mut world, &mut observer);
        observer.pos.x += 16;
        scheduler.tick(&mut world, &mut observer);

        // One new column of 9 regions.
        assert_eq!(scheduler.session.tracker.len(), 90);
    }

    #[test]
    fn test_inactive_session_stops() {
        let mut scheduler = test_scheduler(4);
        scheduler.session.deactivate();
        let mut world = MemoryGrid::filled(CellType::Stone);
        let mut observer = SimulatedObserver::new(IVec3::ZERO, MovementMode::Survival);

        assert_eq!(scheduler.tick(&mut world, &mut observer), TickOutcome::Stopped);
        assert_eq!(world.write_count(), 0);
    }

    #[test]
    fn test_stop_then_start_does_not_regenerate() {
        let mut scheduler = test_scheduler(5);
        let mut world = MemoryGrid::filled(CellType::Stone);
        let mut observer = SimulatedObserver::new(IVec3::new(3, 233, 3), MovementMode::Creative);

        scheduler.tick(&mut world, &mut observer);
        let writes = world.write_count();

        scheduler.session.deactivate();
        assert_eq!(scheduler.tick(&mut world, &mut observer), TickOutcome::Stopped);

        assert!(scheduler.session.activate());
        let outcome = scheduler.tick(&mut world, &mut observer);
        assert_eq!(outcome, TickOutcome::Ran { generated: 0, safety: None });
        assert_eq!(world.write_count(), writes);
    }

    #[test]
    fn test_safety_runs_only_for_vulnerable_modes() {
        let mut scheduler = test_scheduler(6);
        let mut world = MemoryGrid::filled(CellType::Stone);
        let mut observer = SimulatedObserver::new(IVec3::new(3, 233, 3), MovementMode::Spectator);

        let TickOutcome::Ran { safety, .. } = scheduler.tick(&mut world, &mut observer) else {
            panic!("expected a running tick");
        };
        assert_eq!(safety, None);

        // A survival observer buried in stone triggers the search; the
        // freshly generated rooms are at the same level, so a later
        // tick finds the observer breathing.
        let mut scheduler = test_scheduler(7);
        let mut observer = SimulatedObserver::new(IVec3::new(3, 233, 3), MovementMode::Survival);
        let TickOutcome::Ran { safety, .. } = scheduler.tick(&mut world, &mut observer) else {
            panic!("expected a running tick");
        };
        assert_eq!(safety, Some(SafetyOutcome::Breathing));
    }

    /// Grid whose cell writes all fail, for the catch-and-log path.
    struct RejectingGrid;

    impl GridWorld for RejectingGrid {
        fn cell(&self, _pos: IVec3) -> CellType {
            CellType::Stone
        }
        fn set_cell(&mut self, _pos: IVec3, _cell: CellType) -> crate::core::types::Result<()> {
            Err(Error::Grid("write rejected".to_string()))
        }
        fn set_cell_data(
            &mut self,
            _pos: IVec3,
            _data: CellData,
        ) -> crate::core::types::Result<()> {
            Err(Error::Grid("write rejected".to_string()))
        }
    }

    impl crate::world::AssetPlacer for RejectingGrid {
        fn place_asset(&mut self, _key: &str, _pos: IVec3) {}
    }

    #[test]
    fn test_write_failures_do_not_abort_the_tick() {
        let mut scheduler = test_scheduler(8);
        let mut world = RejectingGrid;
        let mut observer = SimulatedObserver::new(IVec3::new(3, 233, 3), MovementMode::Creative);

        let outcome = scheduler.tick(&mut world, &mut observer);
        // Every region failed, none succeeded, nothing panicked, and
        // all 81 stayed claimed.
        assert_eq!(outcome, TickOutcome::Ran { generated: 0, safety: None });
        assert_eq!(scheduler.session.tracker.len(), 81);
    }

    #[tokio::test]
    async fn test_periodic_driver_stops_cooperatively() {
        let mut session = GenerationSession::new(Box::new(ChaChaRandom::seeded(9)));
        session.activate();
        let config = SchedulerConfig { period_millis: 5, radius: 1, ..Default::default() };
        let scheduler = Arc::new(Mutex::new(Scheduler::new(session, config)));
        let world = Arc::new(Mutex::new(MemoryGrid::filled(CellType::Stone)));
        let observer = Arc::new(Mutex::new(SimulatedObserver::new(
            IVec3::new(3, 233, 3),
            MovementMode::Creative,
        )));

        let handle = run_periodic(scheduler.clone(), world.clone(), observer.clone());

        tokio::time::sleep(Duration::from_millis(30)).await;
        scheduler.lock().unwrap().session.deactivate();

        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("driver did not observe the stop flag")
            .expect("driver task panicked");

        assert_eq!(scheduler.lock().unwrap().session.tracker.len(), 9);
        assert!(world.lock().unwrap().write_count() > 0);
    }
}
