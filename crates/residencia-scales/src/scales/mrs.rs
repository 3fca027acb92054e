use crate::scoring::ScaleDefinition;

use super::{band, item};

pub const ID: &str = "MRS";

/// Modified Rankin Scale: a single functional grade, 0–6.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: ID.to_string(),
        name: "Rankin modificada".to_string(),
        description: None,
        items: vec![item(
            "grade",
            "Grado funcional",
            &[
                (0, "Asintomático"),
                (1, "Síntomas sin discapacidad significativa"),
                (2, "Discapacidad leve: independiente para las actividades básicas"),
                (3, "Discapacidad moderada: camina sin ayuda de otra persona"),
                (4, "Discapacidad moderadamente grave: no camina sin ayuda"),
                (5, "Discapacidad grave: encamado, incontinente"),
                (6, "Fallecido"),
            ],
        )],
        interpretation_bands: vec![
            band(0, Some(0), "Sin síntomas."),
            band(1, Some(1), "Sin discapacidad significativa."),
            band(2, Some(2), "Discapacidad leve."),
            band(3, Some(3), "Discapacidad moderada."),
            band(4, Some(4), "Discapacidad moderadamente grave."),
            band(5, Some(5), "Discapacidad grave."),
            band(6, Some(6), "Fallecido."),
        ],
    }
}
