//! Demonstration line data.
//!
//! A fluent builder for assembling a `MetroMap` from static data, and the
//! Karachi demo line served by default.

use crate::domain::{MetroError, StationIndex};
use crate::network::MetroMap;

/// Builder for a `MetroMap`.
///
/// Stations are appended in line order; routes refer to stations by the
/// index they were given. The first failing step is reported by `build`.
#[derive(Debug, Default)]
pub struct LineBuilder {
    inner: MetroMap,
    error: Option<MetroError>,
}

impl LineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a station.
    pub fn station(mut self, name: &str, distance: u32, time: u32) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.inner.register_station(name, distance, time) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Add a directed route between two station indices.
    pub fn route(mut self, from: usize, to: usize, distance: u32, time: u32) -> Self {
        if self.error.is_none() {
            if let Err(e) =
                self.inner
                    .add_route(StationIndex(from), StationIndex(to), distance, time)
            {
                self.error = Some(e);
            }
        }
        self
    }

    /// Finish the line.
    pub fn build(self) -> Result<MetroMap, MetroError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }
}

/// The Karachi demo line: 18 stations from Model Colony to Tower, with
/// routes registered along the first seven.
pub fn karachi_line() -> Result<MetroMap, MetroError> {
    LineBuilder::new()
        .station("Model Colony", 0, 0)
        .station("Malir Halt", 2, 5)
        .station("Malir City", 3, 7)
        .station("Jinnah Square", 4, 8)
        .station("Kala Board", 2, 4)
        .station("Star Gate", 3, 6)
        .station("Drigh Road", 5, 10)
        .station("Shah Faisal Colony", 4, 8)
        .station("Gulistan-e-Johar", 6, 12)
        .station("Gulshan-e-Iqbal", 4, 8)
        .station("Nipa", 3, 7)
        .station("Gulshan Chowrangi", 2, 4)
        .station("Askari Park", 3, 5)
        .station("Peoples Secretariat", 5, 10)
        .station("Karsaz", 6, 12)
        .station("Bahadurabad", 4, 7)
        .station("Cantt Station", 3, 5)
        .station("Tower", 5, 12)
        .route(0, 1, 2, 5)
        .route(1, 2, 3, 7)
        .route(2, 3, 4, 8)
        .route(3, 4, 2, 4)
        .route(4, 5, 3, 6)
        .route(5, 6, 5, 10)
        .build()
}
