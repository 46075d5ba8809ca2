//! Web layer for the metro line planner.
//!
//! JSON endpoints over the command/query API of `MetroMap`. No logic
//! lives here beyond parsing requests and shaping responses.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
