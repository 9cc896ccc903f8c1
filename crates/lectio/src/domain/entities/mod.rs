//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - User: a registered subscriber with delivery preferences
//! - Reading: one issued daily reading with its confirmation state

mod reading;
mod user;

pub use reading::*;
pub use user::*;
