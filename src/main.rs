//! Liminal simulation
//!
//! Drives the full pipeline against an in-memory grid: a stone world, a
//! survival observer buried at the base level, a start command, a few
//! seconds of wandering, then a cooperative stop. Pass a JSON config
//! path as the first argument to override the scheduler defaults.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use liminal::command::{self, CommandOutcome};
use liminal::core::logging;
use liminal::core::random::ChaChaRandom;
use liminal::core::types::{IVec3, Result};
use liminal::scheduler::{run_periodic, GenerationSession, Scheduler, SchedulerConfig};
use liminal::world::{CellType, MemoryGrid, MovementMode, SimulatedObserver};

const OBSERVER_NAME: &str = "wanderer";
const WANDER_STEPS: u32 = 20;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SchedulerConfig::load(&path)?,
        None => SchedulerConfig { period_millis: 100, ..Default::default() },
    };
    let period = config.period();
    let base_level = config.base_level;

    let mut session = GenerationSession::new(Box::new(ChaChaRandom::from_entropy()));
    session.layout = config.layout;
    let scheduler = Arc::new(Mutex::new(Scheduler::new(session, config)));

    // A solid world: the observer starts buried and the first tick has
    // to dig them out.
    let world = Arc::new(Mutex::new(MemoryGrid::filled(CellType::Stone)));
    let observer = Arc::new(Mutex::new(SimulatedObserver::new(
        IVec3::new(0, base_level + 1, 0),
        MovementMode::Survival,
    )));

    let directory: HashSet<String> = [OBSERVER_NAME.to_string()].into();

    let outcome = command::handle(
        &["start", OBSERVER_NAME],
        Some(OBSERVER_NAME),
        &directory,
        &mut scheduler.lock().expect("scheduler mutex poisoned"),
    );
    log::info!("{}", outcome.user_message());
    if !matches!(outcome, CommandOutcome::Started { .. }) {
        return Ok(());
    }

    let driver = run_periodic(scheduler.clone(), world.clone(), observer.clone());

    // Wander east, one region every couple of ticks.
    for _ in 0..WANDER_STEPS {
        tokio::time::sleep(period).await;
        let mut observer = observer.lock().expect("observer mutex poisoned");
        observer.pos.x += 7;
        log::debug!("observer wandered to {:?}", observer.pos);
    }

    let outcome = command::handle(
        &["stop"],
        Some(OBSERVER_NAME),
        &directory,
        &mut scheduler.lock().expect("scheduler mutex poisoned"),
    );
    log::info!("{}", outcome.user_message());

    driver.await.expect("driver task panicked");

    let scheduler = scheduler.lock().expect("scheduler mutex poisoned");
    let world = world.lock().expect("world mutex poisoned");
    let observer = observer.lock().expect("observer mutex poisoned");
    log::info!(
        "simulation done: {} regions generated, {} grid writes, observer at {:?} in {:?} mode",
        scheduler.session.tracker.len(),
        world.write_count(),
        observer.pos,
        observer.mode,
    );

    Ok(())
}
