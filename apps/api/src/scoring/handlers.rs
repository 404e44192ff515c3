//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::opportunity::Opportunity;
use crate::models::preferences::Preferences;
use crate::scoring::category::ScoringCategory;
use crate::scoring::compare::{compare_opportunities, ComparisonReport};
use crate::scoring::engine::{ScoreResult, ScoreTier};
use crate::state::AppState;

const MIN_COMPARE_OPPORTUNITIES: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub opportunity: Opportunity,
    pub preferences: Preferences,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub opportunity_id: Option<Uuid>,
    pub score: ScoreResult,
    pub tier: ScoreTier,
    pub backend: String,
    pub scored_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub opportunities: Vec<Opportunity>,
    pub preferences: Preferences,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: ScoringCategory,
    pub label: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/scoring/categories
///
/// The nine categories in breakdown order, with display labels.
pub async fn handle_list_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        ScoringCategory::ALL
            .iter()
            .map(|category| CategoryInfo {
                category: *category,
                label: category.label(),
            })
            .collect(),
    )
}

/// POST /api/v1/scoring/score
///
/// Scores one opportunity against the caller's preferences. Nothing is stored.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    request.preferences.validate().map_err(AppError::Validation)?;

    let score = state
        .scorer
        .score(&request.opportunity, &request.preferences);
    let tier = ScoreTier::for_total(score.score_total);

    info!(
        opportunity = %request.opportunity.organization_name,
        score_total = score.score_total,
        "Scored opportunity"
    );

    Ok(Json(ScoreResponse {
        opportunity_id: request.opportunity.id,
        score,
        tier,
        backend: state.scorer.backend().to_string(),
        scored_at: Utc::now(),
    }))
}

/// POST /api/v1/scoring/compare
///
/// Ranks 2..=`max_compare_opportunities` opportunities by fit score.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ComparisonReport>, AppError> {
    let max = state.config.max_compare_opportunities;
    let count = request.opportunities.len();
    if !(MIN_COMPARE_OPPORTUNITIES..=max).contains(&count) {
        return Err(AppError::Validation(format!(
            "compare needs between {MIN_COMPARE_OPPORTUNITIES} and {max} opportunities, got {count}"
        )));
    }
    request.preferences.validate().map_err(AppError::Validation)?;

    let report = compare_opportunities(
        state.scorer.as_ref(),
        &request.opportunities,
        &request.preferences,
    );

    info!(compared = count, "Compared opportunities");
    Ok(Json(report))
}
