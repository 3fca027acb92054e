use crate::error::ScaleError;
use crate::scoring::{
    BreakdownEntry, ItemDefinition, ResponseSet, ResponseValue, ScaleDefinition, ScoreResult,
};

/// Score a complete submission against `definition`.
///
/// The submission must answer every item and nothing else; a partial
/// submission is rejected whole. Unscoreable answers count as 0 but still
/// appear in the breakdown.
///
/// `definition` is expected to have passed [`ScaleDefinition::validate`],
/// which guarantees the total cannot overflow. A band gap in an unvalidated
/// definition surfaces as [`ScaleError::InterpretationGap`].
pub fn score_definition(
    definition: &ScaleDefinition,
    responses: &ResponseSet,
) -> Result<ScoreResult, ScaleError> {
    let mut answered = Vec::with_capacity(definition.items.len());
    let mut missing = Vec::new();
    for item in &definition.items {
        match responses.get(&item.id) {
            Some(value) => answered.push((item, *value)),
            None => missing.push(item.id.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(ScaleError::IncompleteSubmission {
            scale_id: definition.id.clone(),
            missing,
        });
    }

    if let Some(unknown) = responses.keys().find(|id| definition.item(id).is_none()) {
        return Err(ScaleError::UnknownItem {
            scale_id: definition.id.clone(),
            item_id: unknown.clone(),
        });
    }

    if let Some((item, value)) = answered.iter().find(|(item, value)| !item.allows(*value)) {
        return Err(ScaleError::InvalidResponse {
            scale_id: definition.id.clone(),
            item_id: item.id.clone(),
            value: *value,
        });
    }

    let total_score: u32 = answered.iter().map(|(_, value)| value.points()).sum();

    let interpretation = definition
        .interpret(total_score)
        .ok_or_else(|| ScaleError::InterpretationGap {
            scale_id: definition.id.clone(),
            score: total_score,
        })?
        .label
        .clone();

    let breakdown = answered
        .iter()
        .map(|(item, value)| breakdown_entry(item, *value))
        .collect();

    tracing::debug!(
        scale = %definition.id,
        total_score,
        interpretation = %interpretation,
        "scale scored"
    );

    Ok(ScoreResult {
        scale_id: definition.id.clone(),
        scale_name: definition.name.clone(),
        total_score,
        max_possible_score: definition.max_possible_score(),
        interpretation,
        breakdown,
    })
}

fn breakdown_entry(item: &ItemDefinition, value: ResponseValue) -> BreakdownEntry {
    BreakdownEntry {
        item_id: item.id.clone(),
        item_label: item.label.clone(),
        response: value,
        response_display: value.display(),
    }
}
