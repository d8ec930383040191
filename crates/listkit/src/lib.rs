//! Reactive list state for list-backed user interfaces.
//!
//! listkit provides [`ListState`](model::ListState), a container that owns
//! the items behind a list view and evolves them through insertion, update,
//! deletion, filtering, sorting and selection. Views subscribe to its
//! signals and re-render from the published snapshot.
//!
//! # Example
//!
//! ```
//! use listkit::prelude::*;
//!
//! let users = ListState::with_items(
//!     vec![
//!         Item::new().with("id", 1).with("name", "Alice").with("state", "NY"),
//!         Item::new().with("id", 2).with("name", "Bob").with("state", "CA"),
//!     ],
//!     ListOptions::new().selected_prop("chosen"),
//! );
//!
//! users.filter_items("state", "ny");
//! assert_eq!(users.matched_indices(), vec![0]);
//!
//! users.sort_items("name", false);
//! assert_eq!(users.get(0).unwrap().get("name").unwrap(), "Bob");
//! ```

pub mod error;
pub mod model;
pub mod prelude;

pub use error::{ListError, Result};
