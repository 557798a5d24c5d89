//! src/domain/mod.rs
mod feature;
pub use feature::*;

mod subscriber_email;
pub use subscriber_email::*;
