//! Domain Services
//!
//! Pure domain logic that does not belong to a single entity.

mod catalog;
mod content;

pub use catalog::*;
