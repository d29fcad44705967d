//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Occupancy Refresh: rewrites every station's live fields on a randomized
//!   schedule and invalidates the query cache once per cycle

mod refresh;

pub use refresh::spawn_refresh_task;
