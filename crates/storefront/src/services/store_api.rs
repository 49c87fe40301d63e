//! Client for the remote store backend (authentication + orders).
//!
//! The backend speaks plain JSON over HTTP with Spanish field names
//! (`nombreUsuario`, `correo`, `precioUnitario`, ...). Login and registration
//! are retried with exponential backoff; order submission is a single
//! fire-and-forget POST with no retry and no idempotency key, so a failure
//! leaves the caller's cart untouched.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use agent_figures_core::{Cart, Identity};

/// Maximum attempts for retried calls (1 initial + 2 retries).
const MAX_ATTEMPTS: u32 = 3;

/// Base delay before the first retry; doubles each attempt (1s, 2s, 4s).
const BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Errors that can occur when talking to the store backend.
#[derive(Debug, Error)]
pub enum StoreApiError {
    /// Network or protocol failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request.
    #[error("store API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl StoreApiError {
    /// Whether this is a 4xx rejection that must not be retried.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Registration request body.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombreUsuario")]
    pub nombre_usuario: String,
    pub correo: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub correo: String,
    pub password: String,
}

/// User body returned by the auth endpoints on success.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "nombreUsuario", default)]
    pub nombre_usuario: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
}

/// Order request body for `POST /ventas`.
#[derive(Debug, Serialize)]
pub struct OrderRequest {
    #[serde(rename = "nombreUsuario")]
    pub nombre_usuario: String,
    pub correo: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub productos: Vec<OrderLine>,
}

/// One product line within an order.
#[derive(Debug, Serialize)]
pub struct OrderLine {
    #[serde(rename = "idProducto")]
    pub id_producto: String,
    pub nombre: String,
    pub cantidad: u32,
    #[serde(rename = "precioUnitario", with = "rust_decimal::serde::float")]
    pub precio_unitario: Decimal,
}

/// Order confirmation returned by the backend.
#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub id: Option<i64>,
}

impl OrderRequest {
    /// Build an order payload from the current cart and buyer identity.
    #[must_use]
    pub fn build(cart: &Cart, buyer: &Identity) -> Self {
        Self {
            nombre_usuario: buyer.name.clone(),
            correo: buyer.email.to_string(),
            total: cart.total_price(),
            productos: cart
                .lines()
                .iter()
                .map(|line| OrderLine {
                    id_producto: line.id.clone(),
                    nombre: line.name.clone(),
                    cantidad: line.quantity,
                    precio_unitario: line.unit_price,
                })
                .collect(),
        }
    }
}

// =============================================================================
// StoreApiClient
// =============================================================================

/// Client for the remote store backend.
///
/// Cheaply cloneable; the HTTP client is shared behind an `Arc`.
#[derive(Clone)]
pub struct StoreApiClient {
    inner: Arc<StoreApiClientInner>,
}

struct StoreApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl StoreApiClient {
    /// Create a new store backend client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(StoreApiClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Register a new account.
    ///
    /// Retried with exponential backoff on network failures and 5xx
    /// responses; 4xx rejections are returned immediately.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError` once all attempts are exhausted or the backend
    /// rejects the request.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, StoreApiError> {
        let body = RegisterRequest {
            nombre_usuario: name.to_string(),
            correo: email.to_string(),
            password: password.to_string(),
        };
        self.post_with_retry("/auth/register", &body).await
    }

    /// Log in with email and password.
    ///
    /// Same retry policy as [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError` once all attempts are exhausted or the
    /// credentials are rejected.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, StoreApiError> {
        let body = LoginRequest {
            correo: email.to_string(),
            password: password.to_string(),
        };
        self.post_with_retry("/auth/login", &body).await
    }

    /// Submit an order. Single attempt: the request either fully succeeds or
    /// fully fails from the caller's point of view.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError` on network failure or any non-success status.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderResponse, StoreApiError> {
        self.post("/ventas", order).await
    }

    /// POST a JSON body and decode a JSON response.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, StoreApiError>
    where
        B: Serialize + Sync,
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// POST with retry: up to [`MAX_ATTEMPTS`] attempts with 1s/2s/4s delays,
    /// retrying on any outcome other than HTTP success or a 4xx rejection.
    async fn post_with_retry<B, T>(&self, path: &str, body: &B) -> Result<T, StoreApiError>
    where
        B: Serialize + Sync,
        T: for<'de> Deserialize<'de>,
    {
        let mut delay = BACKOFF_BASE;
        let mut last_error: Option<StoreApiError> = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.post(path, body).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_client_error() => return Err(err),
                Err(err) => {
                    warn!(path, attempt, error = %err, "store API call failed");
                    last_error = Some(err);
                }
            }

            if attempt < MAX_ATTEMPTS {
                debug!(path, delay_secs = delay.as_secs(), "backing off before retry");
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }

        // last_error is always set when the loop falls through.
        Err(last_error.unwrap_or(StoreApiError::Api {
            status: 0,
            message: "no attempts made".to_string(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use agent_figures_core::{CartItem, Email};
    use std::str::FromStr;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(CartItem {
            id: "add6443a".to_string(),
            name: "Jett".to_string(),
            image: "https://example.com/jett.png".to_string(),
            unit_price: Decimal::from_str("29.99").unwrap(),
        });
        cart.add(CartItem {
            id: "add6443a".to_string(),
            name: "Jett".to_string(),
            image: "https://example.com/jett.png".to_string(),
            unit_price: Decimal::from_str("29.99").unwrap(),
        });
        cart
    }

    fn buyer() -> Identity {
        Identity::new(
            "Ana".to_string(),
            Email::parse("ana@example.com").unwrap(),
        )
    }

    #[test]
    fn order_request_uses_backend_field_names() {
        let order = OrderRequest::build(&sample_cart(), &buyer());
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["nombreUsuario"], "Ana");
        assert_eq!(json["correo"], "ana@example.com");
        assert_eq!(json["total"], serde_json::json!(59.98));

        let productos = json["productos"].as_array().unwrap();
        assert_eq!(productos.len(), 1);
        assert_eq!(productos[0]["idProducto"], "add6443a");
        assert_eq!(productos[0]["nombre"], "Jett");
        assert_eq!(productos[0]["cantidad"], 2);
        assert_eq!(productos[0]["precioUnitario"], serde_json::json!(29.99));
    }

    #[test]
    fn register_request_renames_user_field() {
        let body = RegisterRequest {
            nombre_usuario: "Ana".to_string(),
            correo: "ana@example.com".to_string(),
            password: "secreta".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["nombreUsuario"], "Ana");
        assert!(json.get("nombre_usuario").is_none());
    }

    #[test]
    fn user_response_tolerates_missing_fields() {
        let user: UserResponse = serde_json::from_str("{}").unwrap();
        assert!(user.nombre_usuario.is_none());
        assert!(user.correo.is_none());

        let user: UserResponse =
            serde_json::from_str(r#"{"nombreUsuario": "Ana", "correo": "a@b.c", "id": 7}"#)
                .unwrap();
        assert_eq!(user.nombre_usuario.as_deref(), Some("Ana"));
    }

    #[test]
    fn order_response_id_is_optional() {
        let confirmed: OrderResponse = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(confirmed.id, Some(42));

        let anonymous: OrderResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(anonymous.id, None);
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let err = StoreApiError::Api {
            status: 400,
            message: "bad".to_string(),
        };
        assert!(err.is_client_error());

        let err = StoreApiError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert!(!err.is_client_error());
    }
}
