//! The single process-wide match behind a mutual-exclusion gate.

use crate::action::{MoveError, MoveRequest};
use crate::engine::MatchEngine;
use crate::slots::SlotError;
use crate::state::{GameState, Snapshot};
use crate::types::Slot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, instrument};

/// Owns the authoritative match and serializes every operation on it.
///
/// Clones share the same match. Each method takes the lock for its whole
/// duration, so operations never interleave and no caller sees a half-applied
/// move.
#[derive(Debug, Clone, Default)]
pub struct MatchGate {
    state: Arc<Mutex<GameState>>,
}

impl MatchGate {
    /// Creates a gate around a fresh match.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating match");
        Self::default()
    }

    // Operations validate before they mutate, so a poisoned lock still guards
    // a consistent state.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assigns the lowest free slot.
    #[instrument(skip(self))]
    pub fn connect(&self) -> Result<Slot, SlotError> {
        MatchEngine::connect(&mut self.lock())
    }

    /// Frees a slot; unknown or free slots are ignored.
    #[instrument(skip(self))]
    pub fn disconnect(&self, slot: Option<Slot>) {
        MatchEngine::disconnect(&mut self.lock(), slot);
    }

    /// Returns a copy of the client-visible state.
    #[instrument(skip(self))]
    pub fn state(&self) -> Snapshot {
        MatchEngine::snapshot(&self.lock())
    }

    /// Validates and applies a move.
    #[instrument(skip(self))]
    pub fn submit_move(&self, request: MoveRequest) -> Result<Snapshot, MoveError> {
        MatchEngine::submit_move(&mut self.lock(), request)
    }

    /// Clears the board for a rematch; connected players keep their slots.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        MatchEngine::reset(&mut self.lock());
    }

    /// Runs `f` against the full state, slot table included, under the gate.
    pub fn inspect<T>(&self, f: impl FnOnce(&GameState) -> T) -> T {
        f(&self.lock())
    }
}
