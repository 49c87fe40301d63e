//! Collectible figure pricing and physical specifications.
//!
//! Every figure sells at a flat price. Specs are derived from the agent's
//! role, with hand-tuned overrides for well-known characters.

use rust_decimal::Decimal;

use crate::catalog::Agent;

/// Flat price of every figure: $29.99.
#[must_use]
pub const fn figure_price() -> Decimal {
    Decimal::from_parts(2999, 0, 0, false, 2)
}

/// Physical specifications of a collectible figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureSpecs {
    pub height: &'static str,
    pub weight: &'static str,
    pub material: &'static str,
    pub joints: &'static str,
    pub accessories: &'static str,
    pub age: &'static str,
}

impl Default for FigureSpecs {
    fn default() -> Self {
        Self {
            height: "25 cm",
            weight: "450 g",
            material: "PVC Premium",
            joints: "15 puntos",
            accessories: "Base + Armas",
            age: "14+ años",
        }
    }
}

/// Derive figure specs for an agent.
#[must_use]
pub fn figure_specs(agent: &Agent) -> FigureSpecs {
    let mut specs = role_specs(agent.role_name());

    let name = agent.display_name.to_lowercase();
    if let Some(overrides) = character_overrides(&name) {
        if let Some(height) = overrides.height {
            specs.height = height;
        }
        if let Some(weight) = overrides.weight {
            specs.weight = weight;
        }
        if let Some(accessories) = overrides.accessories {
            specs.accessories = accessories;
        }
    }

    specs
}

/// Base specs by role. Both English and Spanish role names are recognized
/// since the catalog language is configurable.
fn role_specs(role: &str) -> FigureSpecs {
    let mut specs = FigureSpecs::default();
    match role {
        "Duelist" | "Duelista" => {
            specs.height = "26 cm";
            specs.weight = "480 g";
            specs.joints = "18 puntos";
            specs.accessories = "Base + Armas + Efectos";
        }
        "Controller" | "Controlador" => {
            specs.height = "24 cm";
            specs.weight = "420 g";
            specs.joints = "16 puntos";
            specs.accessories = "Base + Dispositivos";
        }
        "Sentinel" | "Centinela" => {
            specs.weight = "460 g";
            specs.joints = "17 puntos";
            specs.accessories = "Base + Equipos Defensivos";
        }
        "Initiator" | "Iniciador" => {
            specs.weight = "440 g";
            specs.joints = "16 puntos";
            specs.accessories = "Base + Herramientas de Reconocimiento";
        }
        _ => {}
    }
    specs
}

/// Per-character spec overrides.
struct SpecOverrides {
    height: Option<&'static str>,
    weight: Option<&'static str>,
    accessories: Option<&'static str>,
}

const fn overrides(
    height: &'static str,
    weight: &'static str,
    accessories: &'static str,
) -> SpecOverrides {
    SpecOverrides {
        height: Some(height),
        weight: Some(weight),
        accessories: Some(accessories),
    }
}

fn character_overrides(name: &str) -> Option<SpecOverrides> {
    let table: &[(&str, SpecOverrides)] = &[
        ("jett", overrides("24 cm", "420 g", "Base + Cuchillos + Efectos de Viento")),
        ("sage", overrides("25 cm", "450 g", "Base + Orbe de Curación + Efectos de Hielo")),
        ("phoenix", overrides("26 cm", "480 g", "Base + Bola de Fuego + Efectos de Llamas")),
        ("sova", overrides("26 cm", "470 g", "Base + Arco + Flechas + Dron")),
        ("viper", overrides("25 cm", "460 g", "Base + Dispositivos de Gas + Efectos Tóxicos")),
        ("cypher", overrides("25 cm", "450 g", "Base + Cámaras + Cables + Efectos de Vigilancia")),
        ("reyna", overrides("25 cm", "460 g", "Base + Orbe de Vida + Efectos de Almas")),
        ("killjoy", overrides("24 cm", "430 g", "Base + Turret + Alarmbot + Nanoswarm")),
        ("breach", overrides("27 cm", "500 g", "Base + Dispositivos Sísmicos + Efectos de Terremoto")),
        ("omen", overrides("26 cm", "480 g", "Base + Orbes de Sombra + Efectos de Teletransporte")),
        ("raze", overrides("25 cm", "470 g", "Base + Granadas + Bot + Efectos Explosivos")),
        ("skye", overrides("25 cm", "450 g", "Base + Animales Espirituales + Efectos de Naturaleza")),
        ("yoru", overrides("26 cm", "480 g", "Base + Máscara + Efectos Dimensionales")),
        ("astra", overrides("25 cm", "460 g", "Base + Estrellas + Efectos Cósmicos")),
        ("kay/o", overrides("26 cm", "490 g", "Base + Cuchillo + Efectos de Supresión")),
        ("chamber", overrides("26 cm", "480 g", "Base + Armas Personalizadas + Efectos de Elegancia")),
        ("neon", overrides("25 cm", "450 g", "Base + Efectos Eléctricos + Carril de Velocidad")),
        ("fade", overrides("25 cm", "460 g", "Base + Pesadillas + Efectos de Terror")),
        ("harbor", overrides("26 cm", "480 g", "Base + Escudo de Agua + Efectos Acuáticos")),
        ("gekko", overrides("25 cm", "450 g", "Base + Criaturas + Efectos Biológicos")),
        ("deadlock", overrides("25 cm", "460 g", "Base + Nanofilamentos + Efectos de Contención")),
        ("iso", overrides("26 cm", "480 g", "Base + Efectos Dimensionales + Escudo de Energía")),
        ("clove", overrides("25 cm", "450 g", "Base + Efectos de Humo + Regeneración")),
    ];

    table
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, o)| SpecOverrides {
            height: o.height,
            weight: o.weight,
            accessories: o.accessories,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::types::Role;
    use std::str::FromStr;

    fn agent(name: &str, role: &str) -> Agent {
        Agent {
            uuid: "uuid".to_string(),
            display_name: name.to_string(),
            description: String::new(),
            display_icon: None,
            full_portrait: Some("portrait.png".to_string()),
            background: None,
            is_playable_character: true,
            role: Some(Role {
                uuid: "role-uuid".to_string(),
                display_name: role.to_string(),
                description: String::new(),
                display_icon: None,
            }),
            abilities: Vec::new(),
        }
    }

    #[test]
    fn price_is_flat_29_99() {
        assert_eq!(figure_price(), Decimal::from_str("29.99").unwrap());
    }

    #[test]
    fn duelist_gets_role_specs() {
        let specs = figure_specs(&agent("Desconocida", "Duelista"));
        assert_eq!(specs.height, "26 cm");
        assert_eq!(specs.joints, "18 puntos");
    }

    #[test]
    fn character_override_wins_over_role() {
        let specs = figure_specs(&agent("Jett", "Duelista"));
        assert_eq!(specs.height, "24 cm");
        assert_eq!(specs.accessories, "Base + Cuchillos + Efectos de Viento");
        // Joints still come from the role specs
        assert_eq!(specs.joints, "18 puntos");
    }

    #[test]
    fn unknown_role_gets_defaults() {
        let specs = figure_specs(&agent("Misterio", "Comodín"));
        assert_eq!(specs, FigureSpecs::default());
    }

    #[test]
    fn override_match_is_case_insensitive() {
        let specs = figure_specs(&agent("KAY/O", "Iniciador"));
        assert_eq!(specs.weight, "490 g");
    }
}
