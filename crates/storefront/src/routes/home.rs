//! Home page: the figure grid with role filters.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use agent_figures_core::{Identity, Money};

use crate::catalog::{Agent, ROLE_FILTERS};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::services::figures::figure_price;
use crate::state::AppState;

/// Figure card display data for templates.
#[derive(Clone)]
pub struct AgentCardView {
    pub uuid: String,
    pub name: String,
    pub role: String,
    pub portrait: String,
    pub price: String,
}

impl From<&Agent> for AgentCardView {
    fn from(agent: &Agent) -> Self {
        Self {
            uuid: agent.uuid.clone(),
            name: agent.display_name.clone(),
            role: agent.role_name().to_string(),
            portrait: agent.full_portrait.clone().unwrap_or_default(),
            price: Money::from(figure_price()).to_string(),
        }
    }
}

/// Role filter button display data.
#[derive(Clone)]
pub struct FilterView {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// Role filter query parameter.
#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub agents: Vec<AgentCardView>,
    pub role_filters: Vec<FilterView>,
    pub catalog_unavailable: bool,
    pub user: Option<Identity>,
}

/// Display the home page.
///
/// A catalog failure renders an empty grid with a notice instead of failing
/// the whole page.
#[instrument(skip(state, user))]
pub async fn home(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<RoleQuery>,
) -> impl IntoResponse {
    let selected_role = query.role.unwrap_or_else(|| "all".to_string());

    let (agents, catalog_unavailable) = match state.catalog().get_agents().await {
        Ok(agents) => {
            let cards = agents
                .iter()
                .filter(|agent| agent.matches_role(&selected_role))
                .map(AgentCardView::from)
                .collect();
            (cards, false)
        }
        Err(e) => {
            tracing::warn!("Failed to load catalog: {e}");
            (Vec::new(), true)
        }
    };

    let role_filters = ROLE_FILTERS
        .iter()
        .map(|(id, label)| FilterView {
            id: (*id).to_string(),
            label: (*label).to_string(),
            selected: *id == selected_role,
        })
        .collect();

    HomeTemplate {
        agents,
        role_filters,
        catalog_unavailable,
        user,
    }
}
