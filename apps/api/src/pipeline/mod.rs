// Recruiting pipeline overview: opportunity counts per stage.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::opportunity::{Opportunity, PipelineStage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub stage: PipelineStage,
    pub label: String,
    pub count: usize,
}

/// Counts opportunities per stage. Every stage is listed, in pipeline order,
/// including the empty ones.
pub fn summarize(opportunities: &[Opportunity]) -> Vec<PipelineSummary> {
    PipelineStage::ALL
        .iter()
        .map(|stage| PipelineSummary {
            stage: *stage,
            label: stage.label().to_string(),
            count: opportunities.iter().filter(|o| o.stage == *stage).count(),
        })
        .collect()
}
