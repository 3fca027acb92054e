use std::collections::HashSet;
use std::sync::LazyLock;

use crate::engine;
use crate::error::{CatalogError, ScaleError};
use crate::scales;
use crate::scoring::{ResponseSet, ScaleDefinition, ScoreResult};

static BUILTIN: LazyLock<ScaleCatalog> = LazyLock::new(|| {
    ScaleCatalog::new(scales::builtin_definitions())
        .unwrap_or_else(|e| panic!("built-in scale catalog is invalid: {e}"))
});

/// A validated, read-only registry of scale definitions.
///
/// Every definition has passed [`ScaleDefinition::validate`], so each score
/// between 0 and a scale's maximum falls in exactly one band.
#[derive(Debug, Clone)]
pub struct ScaleCatalog {
    scales: Vec<ScaleDefinition>,
}

impl ScaleCatalog {
    /// Validate and register `definitions`, keeping their order.
    pub fn new(definitions: Vec<ScaleDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            definition.validate()?;
            if !seen.insert(definition.id.to_ascii_uppercase()) {
                return Err(CatalogError::DuplicateScale(definition.id.clone()));
            }
        }
        Ok(Self {
            scales: definitions,
        })
    }

    /// The process-wide catalog of built-in scales.
    ///
    /// # Panics
    ///
    /// Panics on first access if a built-in definition fails validation.
    /// Built-ins are compile-time data, so this only fires on an authoring bug
    /// and is covered by the test suite.
    pub fn builtin() -> &'static ScaleCatalog {
        &BUILTIN
    }

    /// Look up a scale by id, ignoring ASCII case and surrounding whitespace.
    pub fn get(&self, scale_id: &str) -> Result<&ScaleDefinition, ScaleError> {
        let wanted = scale_id.trim();
        self.scales
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScaleError::NotFound(scale_id.to_string()))
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.scales.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScaleDefinition> {
        self.scales.iter()
    }

    pub fn score(&self, scale_id: &str, responses: &ResponseSet) -> Result<ScoreResult, ScaleError> {
        let definition = self.get(scale_id)?;
        engine::score_definition(definition, responses)
    }
}

impl ScaleDefinition {
    /// Check the structural invariants of a definition.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyScaleId);
        }
        if self.items.is_empty() {
            return Err(CatalogError::NoItems(self.id.clone()));
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem {
                    scale_id: self.id.clone(),
                    item_id: item.id.clone(),
                });
            }
            if !item.allowed_values().any(|v| v.is_scoreable()) {
                return Err(CatalogError::NoScoreableValue {
                    scale_id: self.id.clone(),
                    item_id: item.id.clone(),
                });
            }
            let mut values = HashSet::new();
            for value in item.allowed_values() {
                if !values.insert(value) {
                    return Err(CatalogError::DuplicateOption {
                        scale_id: self.id.clone(),
                        item_id: item.id.clone(),
                        value,
                    });
                }
            }
        }

        if self.checked_max_possible_score().is_none() {
            return Err(CatalogError::ScoreOverflow(self.id.clone()));
        }

        self.validate_bands()
    }

    /// Maximum total, or `None` if it does not fit in a `u32`.
    fn checked_max_possible_score(&self) -> Option<u32> {
        self.items
            .iter()
            .try_fold(0u32, |total, item| total.checked_add(item.max_points()))
    }

    fn validate_bands(&self) -> Result<(), CatalogError> {
        if self.interpretation_bands.is_empty() {
            return Err(CatalogError::NoBands(self.id.clone()));
        }

        let last = self.interpretation_bands.len() - 1;
        // Lowest score not yet covered by a band.
        let mut next_uncovered: u32 = 0;
        for (i, band) in self.interpretation_bands.iter().enumerate() {
            if band.min_score > next_uncovered {
                return Err(CatalogError::BandGap {
                    scale_id: self.id.clone(),
                    from: next_uncovered,
                    to: band.min_score - 1,
                });
            }
            if band.min_score < next_uncovered {
                return Err(CatalogError::BandOverlap {
                    scale_id: self.id.clone(),
                    label: band.label.clone(),
                    score: band.min_score,
                });
            }
            match band.max_score {
                Some(max) if max < band.min_score => {
                    return Err(CatalogError::InvertedBand {
                        scale_id: self.id.clone(),
                        label: band.label.clone(),
                    });
                }
                Some(max) => next_uncovered = max.saturating_add(1),
                None if i != last => {
                    return Err(CatalogError::OpenBandNotLast {
                        scale_id: self.id.clone(),
                        label: band.label.clone(),
                    });
                }
                None => return Ok(()),
            }
        }

        let covered_to = next_uncovered - 1;
        let max_possible = self.max_possible_score();
        if covered_to < max_possible {
            return Err(CatalogError::UncoveredMaximum {
                scale_id: self.id.clone(),
                covered_to,
                max_possible,
            });
        }
        Ok(())
    }
}
