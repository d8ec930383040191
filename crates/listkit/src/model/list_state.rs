//! Reactive list state.
//!
//! `ListState` owns the authoritative sequence of [`Item`]s behind a list
//! view and evolves it through a closed set of operations: insertion, update,
//! deletion, filtering, sorting and selection. Every operation computes a
//! fresh snapshot from the current one and publishes it atomically; views
//! observe [`ListSignals`] and re-read [`ListState::list`].

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use listkit_core::logging::targets;
use listkit_core::{PerfSpan, Property};

use super::item::{Item, items_from_json};
use super::options::ListOptions;
use super::signals::{ListChange, ListSignals, ListSnapshot};
use super::value::{SortKey, matches_query};
use crate::error::Result;

/// Stateful list container for list-backed user interfaces.
///
/// Each item carries two reserved boolean fields, named by [`ListOptions`]:
/// a selection flag and a filter-match flag. Filtering and selection only
/// update these flags; they never remove or reorder items.
///
/// Operations never fail. Invalid input (a missing property, an
/// out-of-range row, an empty batch) leaves the list untouched and emits
/// nothing, so a misclick can never take the view down.
///
/// # Thread Safety
///
/// `ListState` is `Send + Sync`. Each operation's read-compute-publish cycle
/// runs under the state cell's write lock, so concurrent callers are
/// serialized. Signals fire after the lock is released, which lets a slot
/// call back into the list; `list_changed` then still ends on the latest
/// snapshot.
///
/// # Example
///
/// ```
/// use listkit::model::{Item, ListOptions, ListState};
///
/// let users = ListState::with_items(
///     vec![
///         Item::new().with("id", 1).with("name", "Alice"),
///         Item::new().with("id", 2).with("name", "Bob"),
///     ],
///     ListOptions::default(),
/// );
///
/// users.signals().list_changed.connect(|list| {
///     println!("re-render {} rows", list.len());
/// });
///
/// users.add_item(Item::new().with("id", 3).with("name", "Carl"), 1);
/// users.toggle_select_item(1, true);
/// assert_eq!(users.selected_indices(), vec![1]);
/// ```
pub struct ListState {
    items: Property<ListSnapshot>,
    options: ListOptions,
    signals: ListSignals,
}

impl ListState {
    /// Creates an empty list.
    pub fn new(options: ListOptions) -> Self {
        Self {
            items: Property::new(Arc::new(Vec::new())),
            options,
            signals: ListSignals::new(),
        }
    }

    /// Creates a list from an initial sequence.
    ///
    /// The sequence is normalized exactly as [`set_list`](Self::set_list)
    /// would, once, at construction. `None` entries are dropped.
    pub fn with_items<I, E>(items: I, options: ListOptions) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<Item>>,
    {
        let state = Self::new(options);
        let normalized = state.normalize(items.into_iter().map(Into::into));
        tracing::debug!(target: targets::LIST, len = normalized.len(), "initialized list");
        state.items.set_silent(Arc::new(normalized));
        state
    }

    /// Returns the configured field names.
    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Returns the signals emitted by this list.
    pub fn signals(&self) -> &ListSignals {
        &self.signals
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the current snapshot.
    ///
    /// The snapshot is immutable; later operations publish new snapshots
    /// instead of changing this one.
    pub fn list(&self) -> ListSnapshot {
        self.items.get()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    /// Returns `true` if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.with(|items| items.is_empty())
    }

    /// Returns a copy of the item at `index`.
    pub fn get(&self, index: usize) -> Option<Item> {
        self.items.with(|items| items.get(index).cloned())
    }

    /// Returns `true` if the item at `index` exists and is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        let field = self.options.selected_field();
        self.items
            .with(|items| items.get(index).is_some_and(|item| item.flag(field)))
    }

    /// Returns `true` if the item at `index` exists and matches the filter.
    pub fn is_matched(&self, index: usize) -> bool {
        let field = self.options.matched_field();
        self.items
            .with(|items| items.get(index).is_some_and(|item| item.flag(field)))
    }

    /// Rows whose selection flag is set.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.indices_where(self.options.selected_field())
    }

    /// Rows whose filter-match flag is set.
    pub fn matched_indices(&self) -> Vec<usize> {
        self.indices_where(self.options.matched_field())
    }

    /// Copies of the selected items, in list order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.items_where(self.options.selected_field())
    }

    /// Copies of the items matching the filter, in list order.
    pub fn matched_items(&self) -> Vec<Item> {
        self.items_where(self.options.matched_field())
    }

    /// Renders the current snapshot as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(self.items.with(|items| serde_json::to_string(&**items))?)
    }

    fn indices_where(&self, field: &str) -> Vec<usize> {
        self.items.with(|items| {
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.flag(field))
                .map(|(row, _)| row)
                .collect()
        })
    }

    fn items_where(&self, field: &str) -> Vec<Item> {
        self.items.with(|items| {
            items
                .iter()
                .filter(|item| item.flag(field))
                .cloned()
                .collect()
        })
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replaces the list.
    ///
    /// `None` entries are dropped, each item's selection flag is coerced to a
    /// boolean (missing means `false`) and its match flag is set to `true`.
    pub fn set_list<I, E>(&self, list: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<Item>>,
    {
        let normalized = self.normalize(list.into_iter().map(Into::into));
        self.commit("set_list", move |_| Some((normalized, ListChange::Reset)));
    }

    /// Replaces the list with records parsed from a JSON array.
    ///
    /// JSON `null` entries are dropped. Nothing changes if parsing fails.
    pub fn set_list_json(&self, json: &str) -> Result<()> {
        let entries = items_from_json(json)?;
        self.set_list(entries);
        Ok(())
    }

    /// Inserts a copy of `item` at `index`, then renormalizes the list.
    ///
    /// An `index` past the end appends; `0` (the conventional default)
    /// prepends. Passing `None` inserts nothing but still renormalizes.
    /// Renormalizing resets every match flag to `true`.
    pub fn add_item(&self, item: impl Into<Option<Item>>, index: usize) {
        let item = item.into();
        self.commit("add_item", |current| {
            let mut next = current.to_vec();
            let change = match item {
                Some(item) => {
                    let first = index.min(next.len());
                    next.insert(first, item);
                    ListChange::Inserted { first, count: 1 }
                }
                None => ListChange::Reset,
            };
            Some((self.normalize(next.into_iter().map(Some)), change))
        });
    }

    /// Adds `items` after (`at_end = true`, the conventional default) or
    /// before the current items, then renormalizes the list.
    ///
    /// An empty `items` is a no-op. `None` entries count as input but are
    /// dropped by normalization.
    pub fn add_items<I, E>(&self, items: I, at_end: bool)
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<Item>>,
    {
        let incoming: Vec<Option<Item>> = items.into_iter().map(Into::into).collect();
        if incoming.is_empty() {
            tracing::trace!(target: targets::LIST, "add_items: empty input, ignored");
            return;
        }

        self.commit("add_items", |current| {
            let count = incoming.iter().flatten().count();
            let first = if at_end { current.len() } else { 0 };
            let existing = current.iter().cloned().map(Some);
            let merged: Vec<Option<Item>> = if at_end {
                existing.chain(incoming).collect()
            } else {
                incoming.into_iter().chain(existing).collect()
            };
            let change = if count == 0 {
                ListChange::Reset
            } else {
                ListChange::Inserted { first, count }
            };
            Some((self.normalize(merged), change))
        });
    }

    /// Shallow-merges `changes` into the item at `index`.
    ///
    /// Out-of-range rows are ignored. The list is not renormalized, so the
    /// reserved flags only change if `changes` names them.
    pub fn update_item(&self, changes: &Item, index: usize) {
        self.commit("update_item", |current| {
            if index >= current.len() {
                tracing::trace!(target: targets::LIST, index, len = current.len(), "update_item: row out of range, ignored");
                return None;
            }
            let mut next = current.to_vec();
            next[index].merge(changes);
            Some((next, ListChange::Updated { rows: vec![index] }))
        });
    }

    /// Shallow-merges `changes` into every item whose row is in `indices`.
    ///
    /// An empty `indices` is a no-op; out-of-range rows are skipped.
    pub fn update_items(&self, changes: &Item, indices: &[usize]) {
        if indices.is_empty() {
            tracing::trace!(target: targets::LIST, "update_items: no rows, ignored");
            return;
        }

        self.commit("update_items", |current| {
            let rows = rows_in_range(indices, current.len());
            let mut next = current.to_vec();
            for &row in &rows {
                next[row].merge(changes);
            }
            Some((next, ListChange::Updated { rows }))
        });
    }

    /// Removes the item at `index`. Out-of-range rows are ignored.
    pub fn delete_item(&self, index: usize) {
        self.commit("delete_item", |current| {
            if index >= current.len() {
                tracing::trace!(target: targets::LIST, index, len = current.len(), "delete_item: row out of range, ignored");
                return None;
            }
            let mut next = current.to_vec();
            next.remove(index);
            Some((next, ListChange::Removed { rows: vec![index] }))
        });
    }

    /// Removes every item whose row is in `indices`.
    ///
    /// An empty `indices` is a no-op; out-of-range rows are skipped.
    pub fn delete_items(&self, indices: &[usize]) {
        if indices.is_empty() {
            tracing::trace!(target: targets::LIST, "delete_items: no rows, ignored");
            return;
        }

        let doomed: HashSet<usize> = indices.iter().copied().collect();
        self.commit("delete_items", |current| {
            let rows = rows_in_range(indices, current.len());
            let next = current
                .iter()
                .enumerate()
                .filter(|(row, _)| !doomed.contains(row))
                .map(|(_, item)| item.clone())
                .collect();
            Some((next, ListChange::Removed { rows }))
        });
    }

    /// Recomputes every item's match flag against `query`.
    ///
    /// An item matches when its value at `property` is present and contains
    /// `query`: case-insensitively for text, and against the value's text form
    /// otherwise. Empty values (missing, null, `false`, `0`, `""`) never
    /// match. Items are not removed; views hide unmatched rows themselves.
    ///
    /// A `None` property is a no-op.
    pub fn filter_items<'a>(&self, property: impl Into<Option<&'a str>>, query: &str) {
        let property: Option<&str> = property.into();
        let Some(property) = property else {
            tracing::trace!(target: targets::LIST, "filter_items: no property, ignored");
            return;
        };

        let matched_field = self.options.matched_field();
        self.commit("filter_items", |current| {
            let next = current
                .iter()
                .map(|item| {
                    let hit = item
                        .get(property)
                        .is_some_and(|value| matches_query(value, query));
                    let mut item = item.clone();
                    item.set_flag(matched_field, hit);
                    item
                })
                .collect();
            Some((
                next,
                ListChange::Filtered {
                    property: property.to_string(),
                },
            ))
        });
    }

    /// Sets every item's match flag to `false`.
    ///
    /// This hides every row. To show every row again, filter with an empty
    /// query or replace the list.
    pub fn clear_filters(&self) {
        let matched_field = self.options.matched_field();
        self.commit("clear_filters", |current| {
            Some((
                with_flag(current, matched_field, false),
                ListChange::FiltersCleared,
            ))
        });
    }

    /// Stably sorts the items by their value at `property`.
    ///
    /// Text compares case-insensitively; other values compare natively; a
    /// missing value sorts as null, before everything else. `ascending` is
    /// the conventional default; descending uses the exact reverse ordering.
    ///
    /// A `None` property is a no-op.
    pub fn sort_items<'a>(&self, property: impl Into<Option<&'a str>>, ascending: bool) {
        let property: Option<&str> = property.into();
        let Some(property) = property else {
            tracing::trace!(target: targets::LIST, "sort_items: no property, ignored");
            return;
        };

        self.commit("sort_items", |current| {
            let mut keyed: Vec<(SortKey, Item)> = current
                .iter()
                .map(|item| (SortKey::of(item.get(property)), item.clone()))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });
            Some((
                keyed.into_iter().map(|(_, item)| item).collect(),
                ListChange::Sorted {
                    property: property.to_string(),
                    ascending,
                },
            ))
        });
    }

    /// Sets every item's selection flag to `do_select`.
    pub fn toggle_select_all_items(&self, do_select: bool) {
        let selected_field = self.options.selected_field();
        self.commit("toggle_select_all_items", |current| {
            Some((
                with_flag(current, selected_field, do_select),
                ListChange::SelectionChanged {
                    rows: (0..current.len()).collect(),
                },
            ))
        });
    }

    /// Sets the selection flag of the item at `index` to `do_select`.
    ///
    /// Out-of-range rows are ignored.
    pub fn toggle_select_item(&self, index: usize, do_select: bool) {
        let selected_field = self.options.selected_field();
        self.commit("toggle_select_item", |current| {
            if index >= current.len() {
                tracing::trace!(target: targets::LIST, index, len = current.len(), "toggle_select_item: row out of range, ignored");
                return None;
            }
            let mut next = current.to_vec();
            next[index].set_flag(selected_field, do_select);
            Some((next, ListChange::SelectionChanged { rows: vec![index] }))
        });
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn normalize<I>(&self, entries: I) -> Vec<Item>
    where
        I: IntoIterator<Item = Option<Item>>,
    {
        let selected_field = self.options.selected_field();
        let matched_field = self.options.matched_field();
        entries
            .into_iter()
            .flatten()
            .map(|mut item| {
                let selected = item.flag(selected_field);
                item.set_flag(selected_field, selected);
                item.set_flag(matched_field, true);
                item
            })
            .collect()
    }

    /// Runs one read-compute-publish cycle.
    ///
    /// `compute` sees the current items and returns the replacement plus a
    /// description of the change, or `None` to leave the list untouched.
    fn commit<F>(&self, operation: &'static str, compute: F) -> bool
    where
        F: FnOnce(&[Item]) -> Option<(Vec<Item>, ListChange)>,
    {
        let _span = PerfSpan::new(operation);
        let mut change = None;
        let snapshot = self.items.update(|current| {
            let (next, description) = compute(current.as_slice())?;
            change = Some(description);
            Some(Arc::new(next))
        });

        match (snapshot, change) {
            (Some(snapshot), Some(change)) => {
                tracing::debug!(target: targets::LIST, operation, len = snapshot.len(), ?change, "list updated");
                self.signals.emit(change, || self.items.get());
                true
            }
            _ => false,
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

impl fmt::Debug for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListState")
            .field("options", &self.options)
            .field("items", &*self.list())
            .finish()
    }
}

/// Sorted, deduplicated rows of `indices` that exist in a list of `len` items.
fn rows_in_range(indices: &[usize], len: usize) -> Vec<usize> {
    indices
        .iter()
        .copied()
        .filter(|&row| row < len)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn with_flag(items: &[Item], field: &str, on: bool) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            item.set_flag(field, on);
            item
        })
        .collect()
}

static_assertions::assert_impl_all!(ListState: Send, Sync);
