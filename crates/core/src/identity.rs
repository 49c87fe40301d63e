//! The logged-in visitor's identity.

use serde::{Deserialize, Serialize};

use crate::types::Email;

/// Display data for the currently logged-in visitor.
///
/// This is the *result* of authentication, independent of how it was
/// obtained; the remote store backend owns credentials. At most one identity
/// exists per session, and an anonymous session simply has no value (there is
/// no sentinel demo user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: Email,
}

impl Identity {
    /// Create a new identity.
    #[must_use]
    pub const fn new(name: String, email: Email) -> Self {
        Self { name, email }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn identity_serde_round_trip() {
        let identity = Identity::new(
            "Ana".to_string(),
            Email::parse("ana@example.com").unwrap(),
        );
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }
}
