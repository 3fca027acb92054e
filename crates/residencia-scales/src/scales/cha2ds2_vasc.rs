use crate::scoring::ScaleDefinition;

use super::{band, item, risk_factor};

pub const ID: &str = "CHA2DS2-VASC";

/// CHA₂DS₂-VASc stroke risk in atrial fibrillation. Total 0–9.
/// Prior stroke scores 2 and age scores 0, 1 or 2, so not every item is
/// a 0/1 flag.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: ID.to_string(),
        name: "CHA2DS2-VASc".to_string(),
        description: Some("Riesgo de ictus en fibrilación auricular".to_string()),
        items: vec![
            risk_factor("heart-failure", "Insuficiencia cardíaca congestiva", 1),
            risk_factor("hypertension", "Hipertensión arterial", 1),
            item(
                "age",
                "Edad",
                &[(0, "Menor de 65 años"), (1, "65 a 74 años"), (2, "75 años o más")],
            ),
            risk_factor("diabetes", "Diabetes mellitus", 1),
            risk_factor("stroke", "Ictus, AIT o tromboembolismo previo", 2),
            risk_factor("vascular", "Enfermedad vascular", 1),
            risk_factor("female", "Sexo femenino", 1),
        ],
        interpretation_bands: vec![
            band(0, Some(0), "Riesgo bajo: no se recomienda anticoagulación."),
            band(1, Some(1), "Riesgo bajo-moderado: considerar anticoagulación."),
            band(2, None, "Riesgo alto: se recomienda anticoagulación."),
        ],
    }
}
