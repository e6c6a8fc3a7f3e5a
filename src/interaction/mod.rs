//! Pointer interaction state and the read-only selection snapshot consumed by
//! each render pass.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::SelectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// A scrollbar thumb drag is in progress.
    DraggingThumb,
}

/// Pointer state tracked between input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor_x: f64,
    cursor_y: f64,
    pointer_inside: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor_x: 0.0,
            cursor_y: 0.0,
            pointer_inside: false,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.pointer_inside
            .then_some((self.cursor_x, self.cursor_y))
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.pointer_inside = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer_inside = false;
    }

    pub fn on_drag_start(&mut self) {
        self.mode = InteractionMode::DraggingThumb;
    }

    pub fn on_drag_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}

/// Read-only view of the host's selection, queried once per render pass.
pub trait SelectionSnapshot: Send + Sync {
    fn is_selected(&self, id: &SelectionId) -> bool;

    fn has_selection(&self) -> bool;
}

/// Snapshot with nothing selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl SelectionSnapshot for NoSelection {
    fn is_selected(&self, _id: &SelectionId) -> bool {
        false
    }

    fn has_selection(&self) -> bool {
        false
    }
}

/// Insertion-ordered set of selected identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: IndexSet<SelectionId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` when absent, removes it when present. Returns the new state.
    pub fn toggle(&mut self, id: SelectionId) -> bool {
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn insert(&mut self, id: SelectionId) -> bool {
        self.ids.insert(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionId> {
        self.ids.iter()
    }
}

impl FromIterator<SelectionId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = SelectionId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl SelectionSnapshot for SelectionSet {
    fn is_selected(&self, id: &SelectionId) -> bool {
        self.ids.contains(id)
    }

    fn has_selection(&self) -> bool {
        !self.ids.is_empty()
    }
}
