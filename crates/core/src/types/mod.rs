//! Newtype wrappers for common domain concepts.

pub mod email;
pub mod money;

pub use email::{Email, EmailError};
pub use money::Money;
