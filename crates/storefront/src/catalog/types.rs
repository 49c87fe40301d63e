//! Character catalog records as served by the public agent API.
//!
//! These are read-only and externally owned; we only deserialize the fields
//! the storefront renders.

use serde::Deserialize;

/// Response envelope for catalog endpoints: `{ "status": 200, "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct AgentsEnvelope {
    pub status: u16,
    #[serde(default)]
    pub data: Vec<Agent>,
}

/// A playable character from the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub uuid: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_icon: Option<String>,
    #[serde(default)]
    pub full_portrait: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub is_playable_character: bool,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

/// A character's role classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub uuid: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_icon: Option<String>,
}

/// One ability descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub slot: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_icon: Option<String>,
}

impl Agent {
    /// The role display name, or a generic fallback.
    #[must_use]
    pub fn role_name(&self) -> &str {
        self.role.as_ref().map_or("Agente", |r| r.display_name.as_str())
    }

    /// Whether this agent belongs to a role filter.
    ///
    /// Filter ids are the English role names; the catalog is fetched in
    /// Spanish, so both spellings are accepted.
    #[must_use]
    pub fn matches_role(&self, filter: &str) -> bool {
        if filter == "all" {
            return true;
        }
        let Some(role) = &self.role else {
            return false;
        };
        role.display_name == filter || role.display_name == localized_role(filter)
    }
}

/// Maps an English role filter id to its Spanish catalog display name.
fn localized_role(filter: &str) -> &str {
    match filter {
        "Duelist" => "Duelista",
        "Controller" => "Controlador",
        "Sentinel" => "Centinela",
        "Initiator" => "Iniciador",
        other => other,
    }
}

/// Role filter buttons shown on the home page: `(id, label)`.
pub const ROLE_FILTERS: &[(&str, &str)] = &[
    ("all", "TODOS"),
    ("Duelist", "DUELISTAS"),
    ("Controller", "CONTROLADORES"),
    ("Sentinel", "CENTINELAS"),
    ("Initiator", "INICIADORES"),
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": 200,
        "data": [{
            "uuid": "add6443a-41bd-e414-f6ad-e58d267f4e95",
            "displayName": "Jett",
            "description": "Representando a su pais de origen...",
            "displayIcon": "https://media.valorant-api.com/agents/add6443a/displayicon.png",
            "fullPortrait": "https://media.valorant-api.com/agents/add6443a/fullportrait.png",
            "background": "https://media.valorant-api.com/agents/add6443a/background.png",
            "isPlayableCharacter": true,
            "role": {
                "uuid": "dbe8757e-9e92-4ed4-b39f-9dfc589691d4",
                "displayName": "Duelista",
                "description": "...",
                "displayIcon": "https://media.valorant-api.com/agentroles/duelist.png"
            },
            "abilities": [{
                "slot": "Ability1",
                "displayName": "Corriente Ascendente",
                "description": "...",
                "displayIcon": null
            }]
        }]
    }"#;

    #[test]
    fn deserializes_catalog_envelope() {
        let envelope: AgentsEnvelope = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data.len(), 1);

        let agent = &envelope.data[0];
        assert_eq!(agent.display_name, "Jett");
        assert!(agent.full_portrait.is_some());
        assert_eq!(agent.role_name(), "Duelista");
        assert_eq!(agent.abilities.len(), 1);
        assert!(agent.abilities[0].display_icon.is_none());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"uuid": "x", "displayName": "Misterio"}"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert!(agent.full_portrait.is_none());
        assert!(agent.role.is_none());
        assert!(agent.abilities.is_empty());
        assert_eq!(agent.role_name(), "Agente");
    }

    #[test]
    fn role_filter_accepts_both_spellings() {
        let envelope: AgentsEnvelope = serde_json::from_str(SAMPLE).unwrap();
        let agent = &envelope.data[0];
        assert!(agent.matches_role("all"));
        assert!(agent.matches_role("Duelist"));
        assert!(agent.matches_role("Duelista"));
        assert!(!agent.matches_role("Sentinel"));
    }
}
