/// External layout store collaborator.
///
/// Column order and widths survive across sessions through an
/// external key-value store, keyed by each list's persistence
/// identity. The store is advisory: the engine validates and clamps
/// whatever comes back, and a failed read simply means "use
/// defaults" — it is never surfaced to the user.
use std::collections::HashMap;

use thiserror::Error;

/// A failed store operation.
///
/// The engine logs these and falls back to defaults; they never
/// cross the UI event boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No value saved under this key.
    #[error("no saved value for {0:?}")]
    Missing(String),

    /// A value exists but could not be decoded.
    #[error("saved value for {key:?} is malformed: {reason}")]
    Malformed {
        /// Store key the value was read from.
        key: String,
        /// Backend-specific decode failure description.
        reason: String,
    },
}

/// Key-value store for per-list column layout.
///
/// `name` is the list's persistence identity — one opaque name per
/// list instance, constant for its lifetime. Sort order is
/// deliberately *not* part of this interface; only layout persists.
pub trait LayoutStore {
    /// Saved display order for the named list.
    fn column_order(&self, name: &str) -> Result<Vec<usize>, StoreError>;

    /// Persist the display order for the named list.
    fn set_column_order(&mut self, name: &str, order: &[usize]) -> Result<(), StoreError>;

    /// Saved per-column pixel widths for the named list.
    fn column_widths(&self, name: &str) -> Result<Vec<u32>, StoreError>;

    /// Persist the per-column pixel widths for the named list.
    fn set_column_widths(&mut self, name: &str, widths: &[u32]) -> Result<(), StoreError>;
}

/// HashMap-backed store for tests and embedding hosts.
///
/// Hosts with a real settings backend (file, registry, database)
/// implement [`LayoutStore`] over it themselves; this one keeps
/// everything in memory and forgets it on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: HashMap<String, Vec<usize>>,
    widths: HashMap<String, Vec<u32>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    fn column_order(&self, name: &str) -> Result<Vec<usize>, StoreError> {
        self.orders
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::Missing(name.to_string()))
    }

    fn set_column_order(&mut self, name: &str, order: &[usize]) -> Result<(), StoreError> {
        self.orders.insert(name.to_string(), order.to_vec());
        Ok(())
    }

    fn column_widths(&self, name: &str) -> Result<Vec<u32>, StoreError> {
        self.widths
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::Missing(name.to_string()))
    }

    fn set_column_widths(&mut self, name: &str, widths: &[u32]) -> Result<(), StoreError> {
        self.widths.insert(name.to_string(), widths.to_vec());
        Ok(())
    }
}
