//! Agent Figures Core - Shared domain types.
//!
//! This crate provides the types used across the storefront:
//! - [`cart`] - The shopping cart and its line items
//! - [`identity`] - The logged-in visitor's identity
//! - [`types`] - Newtype wrappers for emails and money
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! backends. Cart and identity state is a plain data structure here; where it
//! is persisted (the session store) is the storefront binary's concern, which
//! keeps everything in this crate testable without a real backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod identity;
pub mod types;

pub use cart::{Cart, CartItem, CartLine};
pub use identity::Identity;
pub use types::{Email, EmailError, Money};
