//! Application state for the web layer.

use crate::network::{MetroMap, SharedMetroMap};

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    /// The metro line behind its read/write lock
    pub metro: SharedMetroMap,
}

impl AppState {
    /// Create a new app state serving `map`.
    pub fn new(map: MetroMap) -> Self {
        Self {
            metro: SharedMetroMap::new(map),
        }
    }
}
