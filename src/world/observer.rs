//! Observer handle and movement modes

use crate::core::types::IVec3;

/// Movement mode of an observer in the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementMode {
    Survival,
    Adventure,
    Creative,
    Spectator,
}

impl MovementMode {
    /// Whether this mode can suffocate inside solid cells.
    ///
    /// Free-fly modes are exempt from the safety check.
    pub fn is_vulnerable(self) -> bool {
        matches!(self, MovementMode::Survival | MovementMode::Adventure)
    }
}

/// Handle to the observer the generation session follows.
pub trait Observer {
    /// Cell position of the observer's feet.
    fn position(&self) -> IVec3;

    /// Cell position of the observer's eyes.
    fn eye_position(&self) -> IVec3;

    fn movement_mode(&self) -> MovementMode;

    fn set_movement_mode(&mut self, mode: MovementMode);

    fn teleport(&mut self, pos: IVec3);

    /// Empty the observer's carried-items container.
    fn clear_inventory(&mut self);

    /// Play an audio cue at the observer's position.
    fn play_cue(&mut self, cue: &str, volume: f32, pitch: f32);
}

/// Scripted observer for tests and the simulation binary.
#[derive(Debug)]
pub struct SimulatedObserver {
    pub pos: IVec3,
    pub mode: MovementMode,
    pub inventory: Vec<String>,
    /// Cues played, in order.
    pub cues: Vec<String>,
}

impl SimulatedObserver {
    pub fn new(pos: IVec3, mode: MovementMode) -> Self {
        Self { pos, mode, inventory: Vec::new(), cues: Vec::new() }
    }
}

impl Observer for SimulatedObserver {
    fn position(&self) -> IVec3 {
        self.pos
    }

    fn eye_position(&self) -> IVec3 {
        self.pos + IVec3::Y
    }

    fn movement_mode(&self) -> MovementMode {
        self.mode
    }

    fn set_movement_mode(&mut self, mode: MovementMode) {
        self.mode = mode;
    }

    fn teleport(&mut self, pos: IVec3) {
        self.pos = pos;
    }

    fn clear_inventory(&mut self) {
        self.inventory.clear();
    }

    fn play_cue(&mut self, cue: &str, _volume: f32, _pitch: f32) {
        self.cues.push(cue.to_string());
    }
}
