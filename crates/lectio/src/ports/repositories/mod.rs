//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod reading_repository;
mod user_repository;

pub use reading_repository::*;
pub use user_repository::*;
