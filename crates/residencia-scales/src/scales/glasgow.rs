use crate::scoring::ScaleDefinition;

use super::{band, item, item_with_unscoreable};

pub const ID: &str = "GLASGOW";

/// Glasgow Coma Scale. Eye 1–4, verbal 1–5, motor 1–6; total 3–15.
///
/// The verbal response of an intubated patient is recorded as not testable,
/// which is the only way a total below 3 can occur.
pub fn definition() -> ScaleDefinition {
    ScaleDefinition {
        id: ID.to_string(),
        name: "Glasgow".to_string(),
        description: Some("Escala de coma de Glasgow".to_string()),
        items: vec![
            item(
                "eye",
                "Apertura ocular",
                &[
                    (4, "Espontánea"),
                    (3, "A la orden verbal"),
                    (2, "Al estímulo doloroso"),
                    (1, "Ninguna"),
                ],
            ),
            item_with_unscoreable(
                "verbal",
                "Respuesta verbal",
                &[
                    (5, "Orientada"),
                    (4, "Confusa"),
                    (3, "Palabras inapropiadas"),
                    (2, "Sonidos incomprensibles"),
                    (1, "Ninguna"),
                ],
                "No evaluable (intubado)",
            ),
            item(
                "motor",
                "Respuesta motora",
                &[
                    (6, "Obedece órdenes"),
                    (5, "Localiza el dolor"),
                    (4, "Retirada al dolor"),
                    (3, "Flexión anormal"),
                    (2, "Extensión anormal"),
                    (1, "Ninguna"),
                ],
            ),
        ],
        interpretation_bands: vec![
            band(0, Some(8), "Compromiso grave del nivel de conciencia."),
            band(9, Some(12), "Compromiso moderado del nivel de conciencia."),
            band(13, Some(15), "Compromiso leve o ausente del nivel de conciencia."),
        ],
    }
}
