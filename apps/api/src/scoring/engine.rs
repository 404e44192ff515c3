//! Opportunity fit scoring: weighted aggregation of the category rules.
//!
//! `compute_score` is pure: no I/O, no shared state, same input → same output.
//! `AppState` holds an `Arc<dyn OpportunityScorer>` so handlers never call the
//! rules directly.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::opportunity::Opportunity;
use crate::models::preferences::Preferences;
use crate::scoring::category::ScoringCategory;
use crate::scoring::rules::{scorer_for, MAX_SCORE};

/// Dealbreaker phrases the engine can check against an opportunity.
/// Any other dealbreaker text is carried on the preferences but not scored.
const DEALBREAKER_TRIGGERS: &[(&str, fn(&Opportunity) -> bool)] = &[
    ("no nocturnist", |opp| !opp.nocturnist_coverage),
    ("no research", |opp| !opp.research_support),
    ("no residents", |opp| !opp.has_residents),
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub category: ScoringCategory,
    pub raw_score: f64,      // 0 – 10, one decimal
    pub weight: u8,          // 0 – 10
    pub weighted_score: f64, // raw_score × weight, one decimal
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score_total: f64, // 0 – 100
    pub breakdown: Vec<ScoreBreakdown>,
    pub rationale: String,
}

/// Colour band for an overall fit score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Strong,
    Moderate,
    Weak,
}

impl ScoreTier {
    pub fn for_total(score_total: f64) -> Self {
        match score_total {
            s if s >= 70.0 => ScoreTier::Strong,
            s if s >= 50.0 => ScoreTier::Moderate,
            _ => ScoreTier::Weak,
        }
    }

    /// Band for a single category on the 0–10 scale.
    pub fn for_category(raw_score: f64) -> Self {
        Self::for_total(raw_score * 10.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait OpportunityScorer: Send + Sync {
    fn score(&self, opportunity: &Opportunity, preferences: &Preferences) -> ScoreResult;

    /// Short backend name reported alongside scores.
    fn backend(&self) -> &'static str;
}

/// Deterministic rule-based scorer.
pub struct RuleBasedScorer;

impl OpportunityScorer for RuleBasedScorer {
    fn score(&self, opportunity: &Opportunity, preferences: &Preferences) -> ScoreResult {
        compute_score(opportunity, preferences)
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_score(opportunity: &Opportunity, preferences: &Preferences) -> ScoreResult {
    let mut breakdown = Vec::with_capacity(ScoringCategory::ALL.len());
    let mut total_weighted_score = 0.0_f64;
    let mut total_weight = 0_u32;

    for category in ScoringCategory::ALL {
        let weight = preferences.weights.get(category);
        let category_score = scorer_for(category)(opportunity, preferences);
        let weighted_score = category_score.score * f64::from(weight);

        breakdown.push(ScoreBreakdown {
            category,
            raw_score: round_to_tenth(category_score.score),
            weight,
            weighted_score: round_to_tenth(weighted_score),
            rationale: category_score.rationale,
        });

        total_weighted_score += weighted_score;
        total_weight += u32::from(weight);
    }

    let score_total = if total_weight > 0 {
        round_to_tenth(total_weighted_score / (f64::from(total_weight) * MAX_SCORE) * 100.0)
    } else {
        0.0
    };

    let dealbreakers = find_dealbreakers(opportunity, &preferences.dealbreakers);
    let rationale = if dealbreakers.is_empty() {
        format!(
            "Overall fit score based on {} weighted categories.",
            ScoringCategory::ALL.len()
        )
    } else {
        info!(
            opportunity = %opportunity.organization_name,
            hits = dealbreakers.len(),
            "Dealbreakers triggered"
        );
        format!(
            "Dealbreakers triggered: {}. Score may not reflect overall fit.",
            dealbreakers.join(", ")
        )
    };

    debug!(
        opportunity = %opportunity.organization_name,
        score_total,
        total_weight,
        "Computed fit score"
    );

    ScoreResult {
        score_total,
        breakdown,
        rationale,
    }
}

/// Returns every dealbreaker whose trigger phrase applies to `opportunity`.
/// A dealbreaker naming several triggers is listed once per trigger that fires.
pub fn find_dealbreakers(opportunity: &Opportunity, dealbreakers: &[String]) -> Vec<String> {
    let mut hits = Vec::new();
    for dealbreaker in dealbreakers {
        let lower = dealbreaker.to_lowercase();
        for (phrase, is_missing) in DEALBREAKER_TRIGGERS {
            if lower.contains(phrase) && is_missing(opportunity) {
                hits.push(dealbreaker.clone());
            }
        }
    }
    hits
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::opportunity::PracticeType;
    use crate::models::preferences::CategoryWeights;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn michigan_opportunity() -> Opportunity {
        Opportunity {
            organization_name: "University Hospital".to_string(),
            state: "MI".to_string(),
            city: "Ann Arbor".to_string(),
            practice_type: Some(PracticeType::Academic),
            base_salary: Some(380_000.0),
            nocturnist_coverage: true,
            has_residents: true,
            research_support: true,
            ..Default::default()
        }
    }

    fn michigan_preferences() -> Preferences {
        Preferences {
            preferred_states: strings(&["MI"]),
            practice_type: Some(PracticeType::Academic),
            min_base_salary: Some(350_000.0),
            nocturnist_coverage: true,
            has_residents: true,
            weights: CategoryWeights::uniform(5),
            ..Default::default()
        }
    }

    fn breakdown_for(result: &ScoreResult, category: ScoringCategory) -> &ScoreBreakdown {
        result
            .breakdown
            .iter()
            .find(|b| b.category == category)
            .unwrap()
    }

    #[test]
    fn test_empty_inputs_score_exactly_fifty() {
        let result = compute_score(&Opportunity::default(), &Preferences::default());
        assert_eq!(result.score_total, 50.0);
        assert!(result.breakdown.iter().all(|b| b.raw_score == 5.0));
        assert_eq!(
            result.rationale,
            "Overall fit score based on 9 weighted categories."
        );
    }

    #[test]
    fn test_breakdown_has_nine_categories_in_fixed_order() {
        let result = compute_score(&michigan_opportunity(), &michigan_preferences());
        let order: Vec<ScoringCategory> = result.breakdown.iter().map(|b| b.category).collect();
        assert_eq!(order, ScoringCategory::ALL.to_vec());
    }

    #[test]
    fn test_strong_match_scores_above_midpoint() {
        let result = compute_score(&michigan_opportunity(), &michigan_preferences());
        assert!(result.score_total > 50.0, "got {}", result.score_total);

        for category in [
            ScoringCategory::Location,
            ScoringCategory::ScheduleCall,
            ScoringCategory::TeamSupport,
            ScoringCategory::Compensation,
            ScoringCategory::ResearchAcademics,
        ] {
            let entry = breakdown_for(&result, category);
            assert!(entry.raw_score > 5.0, "{category:?} scored {}", entry.raw_score);
        }
    }

    #[test]
    fn test_weighted_score_and_rounding() {
        let result = compute_score(&michigan_opportunity(), &michigan_preferences());
        // 30k over a 350k minimum → +0.857…
        let comp = breakdown_for(&result, ScoringCategory::Compensation);
        assert_eq!(comp.raw_score, 5.9);
        assert_eq!(comp.weight, 5);
        assert_eq!(comp.weighted_score, 29.3);
    }

    #[test]
    fn test_all_zero_weights_score_zero() {
        let prefs = Preferences {
            weights: CategoryWeights::uniform(0),
            ..michigan_preferences()
        };
        let result = compute_score(&michigan_opportunity(), &prefs);
        assert_eq!(result.score_total, 0.0);
        assert_eq!(result.breakdown.len(), 9);
        assert!(result.breakdown.iter().all(|b| b.weighted_score == 0.0));
    }

    #[test]
    fn test_location_only_weight_reaches_one_hundred() {
        let mut weights = CategoryWeights::uniform(0);
        weights.set(ScoringCategory::Location, 10);
        let prefs = Preferences {
            preferred_cities: strings(&["Ann Arbor"]),
            weights,
            ..michigan_preferences()
        };

        let result = compute_score(&michigan_opportunity(), &prefs);
        assert_eq!(breakdown_for(&result, ScoringCategory::Location).raw_score, 10.0);
        assert_eq!(result.score_total, 100.0);
    }

    #[test]
    fn test_scores_stay_in_range_for_extreme_inputs() {
        let hostile = Opportunity {
            state: "TX".to_string(),
            practice_type: Some(PracticeType::Community),
            base_salary: Some(1.0),
            pto_days: Some(1),
            ..Default::default()
        };
        let demanding = Preferences {
            preferred_states: strings(&["MI"]),
            practice_type: Some(PracticeType::Academic),
            nocturnist_coverage: true,
            tele_icu: true,
            has_residents: true,
            has_fellows: true,
            has_apps: true,
            min_base_salary: Some(900_000.0),
            signing_bonus_important: true,
            loan_repayment_important: true,
            min_pto_days: Some(40),
            weights: CategoryWeights::uniform(10),
            ..Default::default()
        };

        for (opp, prefs) in [
            (&hostile, &demanding),
            (&michigan_opportunity(), &michigan_preferences()),
        ] {
            let result = compute_score(opp, prefs);
            assert!((0.0..=100.0).contains(&result.score_total));
            for entry in &result.breakdown {
                assert!((0.0..=10.0).contains(&entry.raw_score), "{entry:?}");
            }
        }
    }

    #[test]
    fn test_compute_score_is_idempotent() {
        let opp = michigan_opportunity();
        let prefs = michigan_preferences();
        assert_eq!(compute_score(&opp, &prefs), compute_score(&opp, &prefs));
    }

    #[test]
    fn test_nocturnist_dealbreaker_reported_in_rationale() {
        let opp = Opportunity {
            nocturnist_coverage: false,
            ..michigan_opportunity()
        };
        let prefs = Preferences {
            dealbreakers: strings(&["No nocturnist coverage"]),
            ..michigan_preferences()
        };

        let result = compute_score(&opp, &prefs);
        assert!(result.rationale.contains("Dealbreakers triggered"));
        assert!(result.rationale.contains("No nocturnist coverage"));
        assert!(result.rationale.ends_with("Score may not reflect overall fit."));
    }

    #[test]
    fn test_dealbreaker_not_triggered_when_satisfied() {
        let prefs = Preferences {
            dealbreakers: strings(&["No residents", "No research time"]),
            ..michigan_preferences()
        };
        let result = compute_score(&michigan_opportunity(), &prefs);
        assert!(!result.rationale.contains("Dealbreakers"));
    }

    #[test]
    fn test_unrecognised_dealbreakers_are_ignored() {
        let hits = find_dealbreakers(
            &Opportunity::default(),
            &strings(&["Long commute", "More than 1:3 call"]),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_dealbreaker_with_two_triggers_listed_per_trigger() {
        let hits = find_dealbreakers(
            &Opportunity::default(),
            &strings(&["NO RESEARCH and no residents"]),
        );
        assert_eq!(hits.len(), 2);

        let prefs = Preferences {
            dealbreakers: strings(&["no nocturnist", "no residents"]),
            ..Default::default()
        };
        let result = compute_score(&Opportunity::default(), &prefs);
        assert_eq!(
            result.rationale,
            "Dealbreakers triggered: no nocturnist, no residents. Score may not reflect overall fit."
        );
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::for_total(70.0), ScoreTier::Strong);
        assert_eq!(ScoreTier::for_total(69.9), ScoreTier::Moderate);
        assert_eq!(ScoreTier::for_total(50.0), ScoreTier::Moderate);
        assert_eq!(ScoreTier::for_total(12.5), ScoreTier::Weak);
        assert_eq!(ScoreTier::for_category(7.0), ScoreTier::Strong);
        assert_eq!(ScoreTier::for_category(4.9), ScoreTier::Weak);
    }

    #[test]
    fn test_rule_based_scorer_delegates() {
        let scorer = RuleBasedScorer;
        let opp = michigan_opportunity();
        let prefs = michigan_preferences();
        assert_eq!(scorer.score(&opp, &prefs), compute_score(&opp, &prefs));
        assert_eq!(scorer.backend(), "rules");
    }
}
