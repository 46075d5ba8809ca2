//! Station registry and name search.
//!
//! The registry owns stations in line order and resolves names to their
//! current index case-insensitively.

mod finder;
mod registry;

pub use finder::find_by_name_contains;
pub use registry::StationRegistry;
