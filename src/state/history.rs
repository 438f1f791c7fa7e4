//! Collection-level undo/redo history.
//!
//! Stores whole-collection snapshots. Snapshots are `Arc` clones of
//! the copy-on-write feature list, so keeping a few dozen of them
//! costs pointers, not feature copies.

use crate::state::collection::FeatureSnapshot;

#[derive(Debug, Default)]
pub struct UndoHistory {
    undo: Vec<FeatureSnapshot>,
    redo: Vec<FeatureSnapshot>,
    max_depth: usize,
}

impl UndoHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Record the state as it was before a mutation. Clears the redo
    /// stack: a new edit forks history.
    pub fn push(&mut self, snapshot: FeatureSnapshot) {
        self.undo.push(snapshot);
        if self.max_depth > 0 && self.undo.len() > self.max_depth {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    /// Step back, handing over the current state for redo. None when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: FeatureSnapshot) -> Option<FeatureSnapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again. None when there is nothing to redo.
    pub fn redo(&mut self, current: FeatureSnapshot) -> Option<FeatureSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
}
