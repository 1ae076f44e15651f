//! Player slot occupancy.

use crate::types::Slot;
use derive_more::{Display, Error};
use strum::IntoEnumIterator;
use tracing::debug;

/// Connection refused because both slots are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SlotError {
    /// Both slots are occupied.
    #[display("Server full")]
    ServerFull,
}

/// Occupancy flags for the two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotTable {
    taken: [bool; 2],
}

impl SlotTable {
    /// Creates a table with both slots free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lowest free slot.
    pub fn claim(&mut self) -> Result<Slot, SlotError> {
        let slot = Slot::iter()
            .find(|slot| !self.is_taken(*slot))
            .ok_or(SlotError::ServerFull)?;
        self.taken[usize::from(slot.id())] = true;
        debug!(slot = %slot, "Slot claimed");
        Ok(slot)
    }

    /// Frees `slot`. Releasing a free slot does nothing.
    pub fn release(&mut self, slot: Slot) {
        if self.is_taken(slot) {
            debug!(slot = %slot, "Slot released");
        }
        self.taken[usize::from(slot.id())] = false;
    }

    /// Checks if `slot` is taken.
    pub fn is_taken(&self, slot: Slot) -> bool {
        self.taken[usize::from(slot.id())]
    }

    /// Number of taken slots.
    pub fn occupied(&self) -> usize {
        self.taken.iter().filter(|taken| **taken).count()
    }
}
