//! Cart and checkout route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session, serialized after every mutation; a
//! stored value that fails to deserialize is treated as an empty cart. Lines
//! are addressed by the agent's uuid, never by position.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use agent_figures_core::{Cart, CartItem, Identity, Money};

use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::session_keys;
use crate::services::figures::figure_price;
use crate::services::store_api::{OrderRequest, StoreApiError};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView {
                    id: line.id.clone(),
                    name: line.name.clone(),
                    image: line.image.clone(),
                    quantity: line.quantity,
                    price: Money::from(line.unit_price).to_string(),
                    line_price: Money::from(line.line_price()).to_string(),
                })
                .collect(),
            subtotal: Money::from(cart.total_price()).to_string(),
            item_count: cart.total_items(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session.
///
/// A missing or unparseable stored cart yields an empty one.
pub(crate) async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart to the session. Called after every mutation.
pub(crate) async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub agent_id: String,
}

/// Form data addressing an existing cart line by product id.
#[derive(Debug, Deserialize)]
pub struct CartLineForm {
    pub id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub user: Option<Identity>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Checkout result fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutResultTemplate {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Cart Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session, user))]
pub async fn show(session: Session, OptionalUser(user): OptionalUser) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartShowTemplate {
        cart: CartView::from(&cart),
        user,
    }
}

/// Add one unit of a figure to the cart (HTMX).
///
/// Looks the agent up in the catalog so the cart line carries its display
/// name and portrait. Returns the cart count badge with an HTMX trigger so
/// other fragments refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let agent = match state.catalog().get_agent(&form.agent_id).await {
        Ok(agent) => agent,
        Err(e) => {
            tracing::error!("Failed to add figure to cart: {e}");
            // The add forms target the #cart-count badge; redirect the error
            // notice to the #notices container so the badge markup survives.
            return (
                StatusCode::BAD_GATEWAY,
                AppendHeaders([("HX-Retarget", "#notices"), ("HX-Reswap", "innerHTML")]),
                CheckoutResultTemplate {
                    success: false,
                    message: "No se pudo agregar la figura al carrito.".to_string(),
                },
            )
                .into_response();
        }
    };

    let mut cart = load_cart(&session).await;
    cart.add(CartItem {
        id: agent.uuid,
        name: agent.display_name,
        image: agent.full_portrait.unwrap_or_default(),
        unit_price: figure_price(),
    });

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_items(),
        },
    )
        .into_response()
}

/// Increment a line's quantity (HTMX).
#[instrument(skip(session))]
pub async fn increase(session: Session, Form(form): Form<CartLineForm>) -> Response {
    mutate_cart(&session, |cart| cart.increase(&form.id)).await
}

/// Decrement a line's quantity; a quantity-1 line is removed (HTMX).
#[instrument(skip(session))]
pub async fn decrease(session: Session, Form(form): Form<CartLineForm>) -> Response {
    mutate_cart(&session, |cart| cart.decrease(&form.id)).await
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<CartLineForm>) -> Response {
    mutate_cart(&session, |cart| cart.remove(&form.id)).await
}

/// Apply a mutation to the session cart and return the items fragment.
async fn mutate_cart(session: &Session, mutation: impl FnOnce(&mut Cart)) -> Response {
    let mut cart = load_cart(session).await;
    mutation(&mut cart);

    if let Err(e) = save_cart(session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartCountTemplate {
        count: cart.total_items(),
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Submit the cart as an order (HTMX).
///
/// Checkout is blocked for anonymous visitors and for empty carts, both
/// before any network call. On success the cart is cleared; on any failure
/// it is left untouched.
#[instrument(skip(state, session, user))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    OptionalUser(user): OptionalUser,
) -> Response {
    let Some(buyer) = user else {
        return (
            StatusCode::UNAUTHORIZED,
            CheckoutResultTemplate {
                success: false,
                message: "Inicia sesión para completar la compra.".to_string(),
            },
        )
            .into_response();
    };

    let mut cart = load_cart(&session).await;
    if cart.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            CheckoutResultTemplate {
                success: false,
                message: "Tu carrito está vacío. Agrega productos para comprar.".to_string(),
            },
        )
            .into_response();
    }

    let order = OrderRequest::build(&cart, &buyer);
    let total = Money::from(cart.total_price());

    match state.store_api().create_order(&order).await {
        Ok(confirmation) => {
            cart.clear();
            if let Err(e) = save_cart(&session, &cart).await {
                tracing::error!("Failed to clear cart after checkout: {e}");
            }

            let order_id = confirmation
                .id
                .map_or_else(|| "N/A".to_string(), |id| id.to_string());
            (
                AppendHeaders([("HX-Trigger", "cart-updated")]),
                CheckoutResultTemplate {
                    success: true,
                    message: format!(
                        "¡Compra exitosa! Total pagado: {total}. ID de venta: {order_id}"
                    ),
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Checkout failed: {e}");
            let message = match &e {
                StoreApiError::Api { status, message } if !message.is_empty() => {
                    format!("Error {status} al procesar la compra: {message}")
                }
                StoreApiError::Api { status, .. } => {
                    format!("Error {status} al procesar la compra.")
                }
                StoreApiError::Http(_) => {
                    "No se pudo conectar con el servidor para procesar la compra.".to_string()
                }
            };
            (
                StatusCode::BAD_GATEWAY,
                CheckoutResultTemplate {
                    success: false,
                    message,
                },
            )
                .into_response()
        }
    }
}
