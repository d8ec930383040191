//! Change notifications for list state.

use std::sync::Arc;

use listkit_core::Signal;

use super::item::Item;

/// An immutable snapshot of a list. Published snapshots are never mutated.
pub type ListSnapshot = Arc<Vec<Item>>;

/// Describes which operation produced a new list snapshot.
///
/// Views that only need to re-render can ignore this and listen to
/// [`ListSignals::list_changed`]; views that track per-row state (scroll
/// anchors, animations) can use it to update incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChange {
    /// The whole list was replaced and renormalized.
    Reset,
    /// `count` items were inserted starting at row `first`.
    Inserted { first: usize, count: usize },
    /// The items at these rows were merged with changes.
    Updated { rows: Vec<usize> },
    /// The items at these rows (positions before removal) were removed.
    Removed { rows: Vec<usize> },
    /// Match flags were recomputed for `property`.
    Filtered { property: String },
    /// Every match flag was cleared.
    FiltersCleared,
    /// Items were reordered by `property`.
    Sorted { property: String, ascending: bool },
    /// Selection flags changed on these rows.
    SelectionChanged { rows: Vec<usize> },
}

/// Signals emitted by [`ListState`](super::ListState).
///
/// Both signals fire once per committed operation, after the new snapshot is
/// stored: `change` first, then `list_changed`. Rejected operations (invalid
/// arguments, out-of-range rows, empty batches) emit nothing.
///
/// `list_changed` always carries the latest stored snapshot. When a `change`
/// slot commits another operation, the last `list_changed` payload observed
/// is the final state.
pub struct ListSignals {
    /// Emitted with a description of each committed operation.
    pub change: Signal<ListChange>,

    /// Emitted with the current snapshot after each committed operation.
    pub list_changed: Signal<ListSnapshot>,
}

impl Default for ListSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSignals {
    /// Creates a new set of list signals.
    pub fn new() -> Self {
        Self {
            change: Signal::new(),
            list_changed: Signal::new(),
        }
    }

    /// Blocks or unblocks both signals.
    pub fn set_blocked(&self, blocked: bool) {
        self.change.set_blocked(blocked);
        self.list_changed.set_blocked(blocked);
    }

    /// Emits `change` followed by `list_changed`.
    ///
    /// `current` is read after the `change` slots have run, so a slot that
    /// called back into the list cannot leave `list_changed` delivering an
    /// older snapshot than the one stored.
    pub(crate) fn emit(&self, change: ListChange, current: impl FnOnce() -> ListSnapshot) {
        self.change.emit(change);
        self.list_changed.emit(current());
    }
}
