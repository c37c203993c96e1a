//! Generation session state
//!
//! One explicit object owns what used to be process-wide state: the
//! active flag, the region tracker, and the randomness source. The
//! tracker survives stop/start cycles; only a process restart forgets
//! generated regions.

use crate::core::random::RandomSource;
use crate::generation::LayoutKind;

use super::tracker::RegionTracker;

pub struct GenerationSession {
    pub active: bool,
    pub tracker: RegionTracker,
    pub rng: Box<dyn RandomSource + Send>,
    pub layout: LayoutKind,
}

impl GenerationSession {
    /// Create an inactive session around a randomness source.
    pub fn new(rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            active: false,
            tracker: RegionTracker::new(),
            rng,
            layout: LayoutKind::default(),
        }
    }

    /// Flip the session active. Returns `false` if it already was,
    /// in which case the start request should be rejected.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Request a cooperative stop; the loop observes the flag at the
    /// top of its next tick.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
