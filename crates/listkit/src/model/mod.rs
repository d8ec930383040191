//! List state for list-backed views.
//!
//! This module separates the data behind a list view from the view itself.
//! A [`ListState`] holds the items; views render them and call back into
//! the state in response to user actions.
//!
//! # Core Types
//!
//! - `Item`: One record, a mapping from field name to value
//! - `ListOptions`: Names of the reserved selection and match fields
//! - `ListState`: The list container and its operations
//! - `ListSignals` / `ListChange`: Change notifications
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  operations   ┌─────────────┐
//! │    View     │──────────────>│  ListState  │
//! │             │<──────────────│             │
//! └─────────────┘  ListSignals  └─────────────┘
//!        │                             │
//!        └────────> ListSnapshot <─────┘
//!             (matched → visible, selected → checked)
//! ```

mod item;
mod list_state;
mod options;
mod signals;
pub mod value;

pub use item::{Item, items_from_json, items_from_values};
pub use list_state::ListState;
pub use options::{DEFAULT_MATCHED_PROP, DEFAULT_SELECTED_PROP, ListOptions};
pub use signals::{ListChange, ListSignals, ListSnapshot};
