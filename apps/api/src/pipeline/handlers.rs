//! Axum route handlers for the Pipeline API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::opportunity::Opportunity;
use crate::pipeline::{summarize, PipelineSummary};

#[derive(Debug, Deserialize)]
pub struct PipelineSummaryRequest {
    pub opportunities: Vec<Opportunity>,
}

#[derive(Debug, Serialize)]
pub struct PipelineSummaryResponse {
    pub total: usize,
    pub stages: Vec<PipelineSummary>,
}

/// POST /api/v1/pipeline/summary
///
/// Stage counts for the supplied opportunities. Nothing is stored.
pub async fn handle_pipeline_summary(
    Json(request): Json<PipelineSummaryRequest>,
) -> Json<PipelineSummaryResponse> {
    Json(PipelineSummaryResponse {
        total: request.opportunities.len(),
        stages: summarize(&request.opportunities),
    })
}
