use crate::scoring::ScaleDefinition;

use super::{band, risk_factor};

pub const ID: &str = "HAS-BLED";

/// HAS-BLED bleeding risk on anticoagulation. Nine one-point factors.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: ID.to_string(),
        name: "HAS-BLED".to_string(),
        description: Some("Riesgo de sangrado en pacientes anticoagulados".to_string()),
        items: vec![
            risk_factor("hypertension", "Hipertensión no controlada", 1),
            risk_factor("renal", "Función renal alterada", 1),
            risk_factor("liver", "Función hepática alterada", 1),
            risk_factor("stroke", "Ictus previo", 1),
            risk_factor("bleeding", "Sangrado previo o predisposición", 1),
            risk_factor("labile-inr", "INR lábil", 1),
            risk_factor("elderly", "Edad mayor de 65 años", 1),
            risk_factor("drugs", "Fármacos antiagregantes o AINE", 1),
            risk_factor("alcohol", "Consumo de alcohol", 1),
        ],
        interpretation_bands: vec![
            band(0, Some(0), "Riesgo de sangrado bajo."),
            band(1, Some(2), "Riesgo de sangrado moderado."),
            band(3, None, "Riesgo de sangrado alto."),
        ],
    }
}
