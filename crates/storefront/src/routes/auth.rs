//! Authentication route handlers.
//!
//! Local form validation happens before any network call; authentication
//! itself is delegated to the remote store backend, and only its *result*
//! (the visitor's display name and email) is kept in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use agent_figures_core::{Email, Identity};

use crate::filters;
use crate::middleware::{OptionalUser, clear_current_user, set_current_user};
use crate::state::AppState;

/// Minimum password length for new accounts.
const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
    pub user: Option<Identity>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub user: Option<Identity>,
}

/// Map an error code from the redirect query to a display message.
fn error_message(code: &str) -> String {
    match code {
        "fields" => "Por favor, completa todos los campos.".to_string(),
        "email" => "El correo no es válido.".to_string(),
        "credentials" => "Correo o contraseña incorrectos.".to_string(),
        "password_mismatch" => "Las contraseñas no coinciden.".to_string(),
        "password_too_short" => {
            format!("La contraseña debe tener al menos {MIN_PASSWORD_LENGTH} caracteres.")
        }
        "connect" => "No se pudo conectar con el servidor.".to_string(),
        "session" => "La sesión expiró, inténtalo de nuevo.".to_string(),
        other => format!("No se pudo completar la operación ({other})."),
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(
    OptionalUser(user): OptionalUser,
    Query(query): Query<MessageQuery>,
) -> LoginTemplate {
    LoginTemplate {
        error: query.error.as_deref().map(error_message),
        success: query
            .success
            .map(|_| "¡Registro exitoso! Ya puedes iniciar sesión.".to_string()),
        user,
    }
}

/// Handle login form submission.
///
/// Validates locally, then authenticates against the store backend.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Redirect::to("/auth/login?error=fields").into_response();
    }

    let Ok(email) = Email::parse(form.email.trim()) else {
        return Redirect::to("/auth/login?error=email").into_response();
    };

    match state.store_api().login(email.as_str(), &form.password).await {
        Ok(account) => {
            let name = account
                .nombre_usuario
                .unwrap_or_else(|| email.as_str().to_string());
            let identity = Identity::new(name, email);

            if let Err(e) = set_current_user(&session, &identity).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/auth/login?error=session").into_response();
            }

            Redirect::to("/").into_response()
        }
        Err(e) if e.is_client_error() => {
            tracing::warn!("Login rejected: {e}");
            Redirect::to("/auth/login?error=credentials").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            Redirect::to("/auth/login?error=connect").into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(
    OptionalUser(user): OptionalUser,
    Query(query): Query<MessageQuery>,
) -> RegisterTemplate {
    RegisterTemplate {
        error: query.error.as_deref().map(error_message),
        user,
    }
}

/// Handle registration form submission.
///
/// Validates locally (all fields present, passwords match, minimum length),
/// creates the account on the store backend, and logs the visitor in.
#[instrument(skip(state, session, form))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
        || form.password_confirm.is_empty()
    {
        return Redirect::to("/auth/register?error=fields").into_response();
    }

    if form.password != form.password_confirm {
        return Redirect::to("/auth/register?error=password_mismatch").into_response();
    }

    if form.password.len() < MIN_PASSWORD_LENGTH {
        return Redirect::to("/auth/register?error=password_too_short").into_response();
    }

    let Ok(email) = Email::parse(form.email.trim()) else {
        return Redirect::to("/auth/register?error=email").into_response();
    };

    let name = form.name.trim().to_string();

    match state
        .store_api()
        .register(&name, email.as_str(), &form.password)
        .await
    {
        Ok(account) => {
            let name = account.nombre_usuario.unwrap_or(name);
            let identity = Identity::new(name, email);

            if let Err(e) = set_current_user(&session, &identity).await {
                tracing::error!("Failed to set session after registration: {e}");
                return Redirect::to("/auth/login?success=registered").into_response();
            }

            Redirect::to("/").into_response()
        }
        Err(e) if e.is_client_error() => {
            tracing::warn!("Registration rejected: {e}");
            Redirect::to("/auth/register?error=rejected").into_response()
        }
        Err(e) => {
            tracing::warn!("Registration failed: {e}");
            Redirect::to("/auth/register?error=connect").into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the visitor's identity and destroys the whole session, which also
/// drops the cart.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    Redirect::to("/").into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn auth_pages_keep_the_logged_in_header() {
        let user = Identity::new(
            "Ana".to_string(),
            Email::parse("ana@example.com").unwrap(),
        );
        let query = Query(MessageQuery {
            error: None,
            success: None,
        });

        let page = login_page(OptionalUser(Some(user.clone())), query).await;
        assert_eq!(page.user.as_ref().map(|u| u.name.as_str()), Some("Ana"));
        assert!(page.render().unwrap().contains("Cerrar sesión"));

        let query = Query(MessageQuery {
            error: None,
            success: None,
        });
        let page = register_page(OptionalUser(Some(user)), query).await;
        assert_eq!(page.user.as_ref().map(|u| u.name.as_str()), Some("Ana"));
    }

    #[test]
    fn error_codes_map_to_spanish_messages() {
        assert_eq!(
            error_message("password_mismatch"),
            "Las contraseñas no coinciden."
        );
        assert_eq!(
            error_message("password_too_short"),
            "La contraseña debe tener al menos 6 caracteres."
        );
        assert!(error_message("something_else").contains("something_else"));
    }
}
