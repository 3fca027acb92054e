//! Built-in scale definitions, one module per instrument.

pub mod aspects;
pub mod cha2ds2_vasc;
pub mod glasgow;
pub mod has_bled;
pub mod mrs;
pub mod nihss;

use crate::scoring::{
    InterpretationBand, ItemDefinition, ResponseOption, ResponseValue, ScaleDefinition,
};

/// Every built-in definition, in the order the catalog lists them.
pub fn builtin_definitions() -> Vec<ScaleDefinition> {
    vec![
        nihss::definition(),
        glasgow::definition(),
        mrs::definition(),
        aspects::definition(),
        cha2ds2_vasc::definition(),
        has_bled::definition(),
    ]
}

fn item(id: &str, label: &str, options: &[(u32, &str)]) -> ItemDefinition {
    ItemDefinition {
        id: id.to_string(),
        label: label.to_string(),
        options: options
            .iter()
            .map(|(points, description)| ResponseOption {
                value: ResponseValue::Points(*points),
                description: description.to_string(),
            })
            .collect(),
    }
}

/// An item that may also be answered as not testable.
fn item_with_unscoreable(
    id: &str,
    label: &str,
    options: &[(u32, &str)],
    unscoreable: &str,
) -> ItemDefinition {
    let mut item = item(id, label, options);
    item.options.push(ResponseOption {
        value: ResponseValue::Unscoreable,
        description: unscoreable.to_string(),
    });
    item
}

/// A present/absent risk factor worth `points` when present.
fn risk_factor(id: &str, label: &str, points: u32) -> ItemDefinition {
    item(id, label, &[(0, "No"), (points, "Sí")])
}

fn band(min_score: u32, max_score: Option<u32>, label: &str) -> InterpretationBand {
    InterpretationBand {
        min_score,
        max_score,
        label: label.to_string(),
    }
}
