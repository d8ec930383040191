//! Core systems for listkit.
//!
//! This crate provides the reactive building blocks that list state
//! containers are made of:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: State cells with atomic read-compute-replace updates
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Example
//!
//! ```
//! use listkit_core::{Property, Signal};
//!
//! let value = Property::new(0);
//! let value_changed = Signal::<i32>::new();
//!
//! value_changed.connect(|value| println!("Value changed to: {}", value));
//!
//! if let Some(new_value) = value.update(|v| (*v != 42).then_some(42)) {
//!     value_changed.emit(new_value);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
