use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::opportunity::PracticeType;
use crate::scoring::category::ScoringCategory;

pub const DEFAULT_WEIGHT: u8 = 5;
pub const MAX_WEIGHT: u8 = 10;

/// Per-category importance sliders (0–10).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryWeights(HashMap<ScoringCategory, u8>);

impl CategoryWeights {
    /// Weight for `category`, falling back to [`DEFAULT_WEIGHT`] when unset.
    pub fn get(&self, category: ScoringCategory) -> u8 {
        self.0.get(&category).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    #[cfg(test)]
    pub fn set(&mut self, category: ScoringCategory, weight: u8) {
        self.0.insert(category, weight);
    }

    /// Every category at the same weight.
    pub fn uniform(weight: u8) -> Self {
        Self(ScoringCategory::ALL.iter().map(|c| (*c, weight)).collect())
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::uniform(DEFAULT_WEIGHT)
    }
}

/// A physician's weighted priorities and hard constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    // Geography
    pub preferred_states: Vec<String>,
    pub preferred_cities: Vec<String>,
    pub practice_type: Option<PracticeType>,

    // Practice model
    pub icu_schedule_model: Option<String>,
    pub call_frequency: Option<String>,
    pub nocturnist_coverage: bool,
    pub tele_icu: bool,
    pub procedures_comfort: Vec<String>,

    // Team support
    pub has_residents: bool,
    pub has_fellows: bool,
    pub has_apps: bool,

    // Compensation
    pub min_base_salary: Option<f64>,
    pub signing_bonus_important: bool,
    pub loan_repayment_important: bool,
    pub min_pto_days: Option<u32>,
    pub cme_budget_important: bool,
    pub malpractice_important: bool,

    pub must_haves: Vec<String>,
    pub dealbreakers: Vec<String>,

    pub weights: CategoryWeights,
}

impl Preferences {
    /// Checks slider bounds. Scoring itself never fails; this is for inputs
    /// arriving over the API.
    pub fn validate(&self) -> Result<(), String> {
        let out_of_range: Vec<String> = ScoringCategory::ALL
            .iter()
            .filter(|c| self.weights.get(**c) > MAX_WEIGHT)
            .map(|c| format!("{}={}", c.key(), self.weights.get(*c)))
            .collect();

        if out_of_range.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "weights must be between 0 and {MAX_WEIGHT}: {}",
                out_of_range.join(", ")
            ))
        }
    }
}
