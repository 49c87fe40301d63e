//! Session keys for per-visitor state.
//!
//! Everything a visitor accumulates while browsing (their cart, their
//! identity once logged in) lives in the session under these keys.

/// Session keys for per-visitor state.
pub mod session_keys {
    /// Key for the currently logged-in visitor's [`Identity`].
    ///
    /// [`Identity`]: agent_figures_core::Identity
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the visitor's [`Cart`].
    ///
    /// [`Cart`]: agent_figures_core::Cart
    pub const CART: &str = "cart";
}
