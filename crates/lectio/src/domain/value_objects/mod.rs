//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod bible_version;
mod delivery_time;
mod passage;
mod reading_order;
mod reading_plan;

pub use bible_version::*;
pub use delivery_time::*;
pub use passage::*;
pub use reading_order::*;
pub use reading_plan::*;
