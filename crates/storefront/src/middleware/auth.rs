//! Authentication extractors and session identity helpers.
//!
//! This is the single identity provider for the storefront: `login` replaces
//! the session identity, `logout` clears it, and handlers read it through
//! [`OptionalUser`].

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use agent_figures_core::Identity;

use crate::models::session_keys;

/// Extractor that optionally gets the current visitor.
///
/// Never rejects the request; anonymous visitors yield `None`.
pub struct OptionalUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Identity>(session_keys::CURRENT_USER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user))
    }
}

/// Helper to set the current visitor in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &Identity,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current visitor from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Identity>(session_keys::CURRENT_USER).await?;
    Ok(())
}
