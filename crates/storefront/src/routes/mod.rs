//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (agent grid with role filter)
//! GET  /health                 - Health check
//!
//! # Agents
//! GET  /agents/{uuid}/quick-view - Figure detail fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add figure (returns cart_count fragment)
//! POST /cart/increase          - Quantity +1 (returns cart_items fragment)
//! POST /cart/decrease          - Quantity -1 (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout               - Submit order (returns checkout_result fragment)
//!
//! # Auth (rate limited)
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//! ```

pub mod agents;
pub mod auth;
pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware;
use crate::state::AppState;

/// Create the auth routes router.
///
/// Auth endpoints call the remote store backend and are rate limited per IP.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
        .layer(middleware::auth_rate_limiter())
}

/// Create the agent routes router.
pub fn agent_routes() -> Router<AppState> {
    Router::new().route("/{uuid}/quick-view", get(agents::quick_view))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Agent routes
        .nest("/agents", agent_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout submission
        .route("/checkout", post(cart::checkout))
        // Auth routes
        .nest("/auth", auth_routes())
}
