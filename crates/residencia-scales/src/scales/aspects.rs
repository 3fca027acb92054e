use crate::scoring::{ItemDefinition, ScaleDefinition};

use super::{band, item};

pub const ID: &str = "ASPECTS";

/// ASPECTS: Alberta Stroke Program Early CT Score.
/// 10 middle cerebral artery regions; each preserved region scores 1, so
/// 10 is a normal scan and lower totals mean more extensive early ischaemia.
pub fn definition() -> ScaleDefinition {
    let regions = [
        ("caudate", "C. Caudado"),
        ("lentiform", "L. Núcleo lenticular"),
        ("internal-capsule", "IC. Cápsula interna"),
        ("insula", "I. Ribete insular"),
        ("m1", "M1. Corteza anterior de la ACM"),
        ("m2", "M2. Corteza lateral al ribete insular"),
        ("m3", "M3. Corteza posterior de la ACM"),
        ("m4", "M4. Territorio anterior superior de la ACM"),
        ("m5", "M5. Territorio lateral superior de la ACM"),
        ("m6", "M6. Territorio posterior superior de la ACM"),
    ];

    ScaleDefinition {
        id: ID.to_string(),
        name: "ASPECTS".to_string(),
        description: Some("Alberta Stroke Program Early CT Score".to_string()),
        items: regions.iter().map(|(id, label)| region(id, label)).collect(),
        interpretation_bands: vec![
            band(0, Some(7), "Afectación extensa: pronóstico desfavorable."),
            band(8, Some(10), "Afectación limitada: pronóstico favorable."),
        ],
    }
}

fn region(id: &str, label: &str) -> ItemDefinition {
    item(
        id,
        label,
        &[(1, "Sin cambios isquémicos"), (0, "Cambio isquémico precoz")],
    )
}
