//! Session-stored models and keys.

pub mod session;

pub use session::session_keys;
