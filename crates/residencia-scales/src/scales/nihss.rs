use crate::scoring::ScaleDefinition;

use super::{band, item, item_with_unscoreable};

pub const ID: &str = "NIHSS";

const AMPUTATION: &str = "No evaluable (amputación o fusión articular)";

/// NIHSS: National Institutes of Health Stroke Scale.
/// 15 items in the official 1a–11 order. Total 0–42; higher is more severe.
/// Limb motor, ataxia and dysarthria items may be recorded as not testable.
pub fn definition() -> ScaleDefinition {
    let arm_drift = [
        (0, "Sin caída: mantiene 10 segundos"),
        (1, "Caída antes de 10 segundos sin tocar la cama"),
        (2, "Algún esfuerzo contra la gravedad"),
        (3, "Sin esfuerzo contra la gravedad"),
        (4, "Ningún movimiento"),
    ];
    let leg_drift = [
        (0, "Sin caída: mantiene 5 segundos"),
        (1, "Caída antes de 5 segundos sin tocar la cama"),
        (2, "Algún esfuerzo contra la gravedad"),
        (3, "Sin esfuerzo contra la gravedad"),
        (4, "Ningún movimiento"),
    ];

    ScaleDefinition {
        id: ID.to_string(),
        name: "NIHSS".to_string(),
        description: Some("National Institutes of Health Stroke Scale".to_string()),
        items: vec![
            item(
                "loc",
                "1a. Nivel de conciencia",
                &[
                    (0, "Alerta"),
                    (1, "Somnoliento: responde a estímulos menores"),
                    (2, "Estuporoso: requiere estímulos repetidos o dolorosos"),
                    (3, "Coma: solo respuestas reflejas o arreactivo"),
                ],
            ),
            item(
                "loc-questions",
                "1b. Preguntas (mes y edad)",
                &[
                    (0, "Responde ambas correctamente"),
                    (1, "Responde una correctamente"),
                    (2, "Ninguna respuesta correcta"),
                ],
            ),
            item(
                "loc-commands",
                "1c. Órdenes (ojos y mano)",
                &[
                    (0, "Realiza ambas correctamente"),
                    (1, "Realiza una correctamente"),
                    (2, "No realiza ninguna"),
                ],
            ),
            item(
                "gaze",
                "2. Mirada conjugada",
                &[
                    (0, "Normal"),
                    (1, "Parálisis parcial de la mirada"),
                    (2, "Desviación forzada"),
                ],
            ),
            item(
                "visual",
                "3. Campos visuales",
                &[
                    (0, "Sin pérdida visual"),
                    (1, "Hemianopsia parcial"),
                    (2, "Hemianopsia completa"),
                    (3, "Hemianopsia bilateral"),
                ],
            ),
            item(
                "facial",
                "4. Parálisis facial",
                &[
                    (0, "Movimiento normal y simétrico"),
                    (1, "Paresia leve"),
                    (2, "Parálisis parcial"),
                    (3, "Parálisis completa"),
                ],
            ),
            item_with_unscoreable(
                "motor-left-arm",
                "5a. Motor brazo izquierdo",
                &arm_drift,
                AMPUTATION,
            ),
            item_with_unscoreable(
                "motor-right-arm",
                "5b. Motor brazo derecho",
                &arm_drift,
                AMPUTATION,
            ),
            item_with_unscoreable(
                "motor-left-leg",
                "6a. Motor pierna izquierda",
                &leg_drift,
                AMPUTATION,
            ),
            item_with_unscoreable(
                "motor-right-leg",
                "6b. Motor pierna derecha",
                &leg_drift,
                AMPUTATION,
            ),
            item_with_unscoreable(
                "ataxia",
                "7. Ataxia de miembros",
                &[
                    (0, "Ausente"),
                    (1, "Presente en un miembro"),
                    (2, "Presente en dos miembros"),
                ],
                AMPUTATION,
            ),
            item(
                "sensory",
                "8. Sensibilidad",
                &[
                    (0, "Normal"),
                    (1, "Hipoestesia leve a moderada"),
                    (2, "Hipoestesia grave o anestesia"),
                ],
            ),
            item(
                "language",
                "9. Lenguaje",
                &[
                    (0, "Normal"),
                    (1, "Afasia leve a moderada"),
                    (2, "Afasia grave"),
                    (3, "Mutismo o afasia global"),
                ],
            ),
            item_with_unscoreable(
                "dysarthria",
                "10. Disartria",
                &[
                    (0, "Normal"),
                    (1, "Leve a moderada"),
                    (2, "Grave o anartria"),
                ],
                "No evaluable (intubación u otra barrera física)",
            ),
            item(
                "extinction",
                "11. Extinción e inatención",
                &[
                    (0, "Sin alteraciones"),
                    (1, "Inatención en una modalidad"),
                    (2, "Heminegligencia profunda"),
                ],
            ),
        ],
        interpretation_bands: vec![
            band(0, Some(0), "Sin síntomas de ictus."),
            band(1, Some(4), "Ictus menor."),
            band(5, Some(15), "Ictus moderado."),
            band(16, Some(20), "Ictus moderado a grave."),
            band(21, None, "Ictus grave."),
        ],
    }
}
