//! Property system for listkit.
//!
//! Properties are the state cells behind the signal/slot system: a property
//! holds a value and supports an atomic read-compute-replace cycle. The owner of a property emits a signal
//! once a change has been committed.
//!
//! # Example
//!
//! ```
//! use listkit_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         if let Some(new_value) = self.value.update(|v| Some(v + 1)) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.increment();
//! assert_eq!(counter.value.get(), 1);
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;

/// A reactive state cell.
///
/// `Property<T>` wraps a value that is read by cloning or borrowing and
/// replaced through [`update`](Self::update), which reports whether a
/// replacement was stored.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider `with()` or storing
    /// an `Arc`.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }

    /// Compute and store a replacement value atomically.
    ///
    /// The write lock is held for the whole call, so concurrent updates are
    /// serialized and no update observes a half-applied one. Returning `None`
    /// from `f` leaves the value untouched.
    ///
    /// Returns a clone of the stored replacement, if any. The lock is released
    /// before this returns, so the caller may notify observers safely.
    pub fn update<F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&T) -> Option<T>,
    {
        let mut current = self.value.write();
        let next = f(&current)?;
        *current = next.clone();
        tracing::trace!(target: targets::PROPERTY, "property replaced");
        Some(next)
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<Vec<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(vec![1, 2, 3]);
        let sum: i32 = prop.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_update_commits_and_returns_value() {
        let prop = Property::new(vec![1, 2]);

        let next = prop.update(|v| {
            let mut v = v.clone();
            v.push(3);
            Some(v)
        });

        assert_eq!(next, Some(vec![1, 2, 3]));
        assert_eq!(prop.get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_update_none_leaves_value() {
        let prop = Property::new(5);
        assert_eq!(prop.update(|_| None), None);
        assert_eq!(prop.get(), 5);
    }

    #[test]
    fn test_update_is_serialized_across_threads() {
        let prop = Arc::new(Property::new(0u32));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let prop = prop.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        prop.update(|v| Some(v + 1));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(prop.get(), 800);
    }

    #[test]
    fn test_property_default() {
        let prop: Property<String> = Property::default();
        assert_eq!(prop.get(), "");
    }
}
