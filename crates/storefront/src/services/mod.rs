//! Domain services: figure spec generation and the remote store backend client.

pub mod figures;
pub mod store_api;
