//! Commonly used types, for glob import.
//!
//! ```
//! use listkit::prelude::*;
//!
//! let list = ListState::new(ListOptions::default());
//! list.add_item(Item::new().with("id", 1), 0);
//! assert_eq!(list.len(), 1);
//! ```

pub use crate::error::{ListError, Result};
pub use crate::model::{Item, ListChange, ListOptions, ListSnapshot, ListState};
pub use listkit_core::{ConnectionGuard, ConnectionId, Signal};
