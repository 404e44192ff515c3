//! Side-by-side comparison of several opportunities against one set of
//! preferences.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::opportunity::Opportunity;
use crate::models::preferences::Preferences;
use crate::scoring::category::ScoringCategory;
use crate::scoring::engine::{OpportunityScorer, ScoreResult, ScoreTier};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub opportunity_id: Option<Uuid>,
    pub organization_name: String,
    pub score_total: f64,
    pub tier: ScoreTier,
    pub score: ScoreResult,
}

/// Highest value per numeric offer field across the compared set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestValues {
    pub base_salary: Option<f64>,
    pub signing_bonus: Option<f64>,
    pub loan_repayment: Option<f64>,
    pub pto_days: Option<u32>,
    pub cme_budget: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLeader {
    pub category: ScoringCategory,
    pub label: String,
    pub opportunity_id: Option<Uuid>,
    pub organization_name: String,
    pub raw_score: f64,
    pub tier: ScoreTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub ranked: Vec<ComparisonEntry>,
    pub best_values: BestValues,
    pub category_leaders: Vec<CategoryLeader>,
}

/// Scores every opportunity and ranks them by `score_total`, highest first.
/// Ties keep their input order.
pub fn compare_opportunities(
    scorer: &dyn OpportunityScorer,
    opportunities: &[Opportunity],
    preferences: &Preferences,
) -> ComparisonReport {
    let mut ranked: Vec<ComparisonEntry> = opportunities
        .iter()
        .map(|opp| {
            let score = scorer.score(opp, preferences);
            ComparisonEntry {
                opportunity_id: opp.id,
                organization_name: opp.organization_name.clone(),
                score_total: score.score_total,
                tier: ScoreTier::for_total(score.score_total),
                score,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.score_total.total_cmp(&a.score_total));

    let best_values = if opportunities.len() > 1 {
        collect_best_values(opportunities)
    } else {
        BestValues::default()
    };

    let category_leaders = if ranked.is_empty() {
        Vec::new()
    } else {
        ScoringCategory::ALL
            .iter()
            .filter_map(|category| category_leader(&ranked, *category))
            .collect()
    };

    ComparisonReport {
        ranked,
        best_values,
        category_leaders,
    }
}

fn collect_best_values(opportunities: &[Opportunity]) -> BestValues {
    fn max_of<T: PartialOrd + Copy>(values: impl Iterator<Item = Option<T>>) -> Option<T> {
        values.flatten().fold(None, |best, v| match best {
            Some(b) if b >= v => Some(b),
            _ => Some(v),
        })
    }

    BestValues {
        base_salary: max_of(opportunities.iter().map(|o| o.base_salary)),
        signing_bonus: max_of(opportunities.iter().map(|o| o.signing_bonus)),
        loan_repayment: max_of(opportunities.iter().map(|o| o.loan_repayment)),
        pto_days: max_of(opportunities.iter().map(|o| o.pto_days)),
        cme_budget: max_of(opportunities.iter().map(|o| o.cme_budget)),
    }
}

fn category_leader(ranked: &[ComparisonEntry], category: ScoringCategory) -> Option<CategoryLeader> {
    let mut leader: Option<(&ComparisonEntry, f64)> = None;
    for entry in ranked {
        let Some(breakdown) = entry.score.breakdown.iter().find(|b| b.category == category) else {
            continue;
        };
        match leader {
            Some((_, best)) if best >= breakdown.raw_score => {}
            _ => leader = Some((entry, breakdown.raw_score)),
        }
    }

    leader.map(|(entry, raw_score)| CategoryLeader {
        category,
        label: category.label().to_string(),
        opportunity_id: entry.opportunity_id,
        organization_name: entry.organization_name.clone(),
        raw_score,
        tier: ScoreTier::for_category(raw_score),
    })
}
