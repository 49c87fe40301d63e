//! Agent figure detail handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use agent_figures_core::Money;

use crate::catalog::Agent;
use crate::error::Result;
use crate::services::figures::{FigureSpecs, figure_price, figure_specs};
use crate::state::AppState;

/// Ability display data for templates.
#[derive(Clone)]
pub struct AbilityView {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

/// Figure detail display data for templates.
#[derive(Clone)]
pub struct AgentDetailView {
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub role: String,
    pub portrait: String,
    pub price: String,
    pub abilities: Vec<AbilityView>,
    pub specs: FigureSpecs,
}

impl From<&Agent> for AgentDetailView {
    fn from(agent: &Agent) -> Self {
        Self {
            uuid: agent.uuid.clone(),
            name: agent.display_name.clone(),
            description: agent.description.clone(),
            role: agent.role_name().to_string(),
            portrait: agent.full_portrait.clone().unwrap_or_default(),
            price: Money::from(figure_price()).to_string(),
            abilities: agent
                .abilities
                .iter()
                .map(|ability| AbilityView {
                    name: ability.display_name.clone(),
                    description: ability.description.clone(),
                    icon: ability.display_icon.clone(),
                })
                .collect(),
            specs: figure_specs(agent),
        }
    }
}

/// Quick view fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub agent: AgentDetailView,
}

/// Display the figure quick view fragment.
#[instrument(skip(state))]
pub async fn quick_view(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<QuickViewTemplate> {
    let agent = state.catalog().get_agent(&uuid).await?;
    Ok(QuickViewTemplate {
        agent: AgentDetailView::from(&agent),
    })
}
