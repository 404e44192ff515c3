use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PracticeType {
    Academic,
    Community,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    #[default]
    Researching,
    Applied,
    Interviewing,
    OfferReceived,
    Negotiating,
    Accepted,
    Declined,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 7] = [
        PipelineStage::Researching,
        PipelineStage::Applied,
        PipelineStage::Interviewing,
        PipelineStage::OfferReceived,
        PipelineStage::Negotiating,
        PipelineStage::Accepted,
        PipelineStage::Declined,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::Researching => "Researching",
            PipelineStage::Applied => "Applied",
            PipelineStage::Interviewing => "Interviewing",
            PipelineStage::OfferReceived => "Offer Received",
            PipelineStage::Negotiating => "Negotiating",
            PipelineStage::Accepted => "Accepted",
            PipelineStage::Declined => "Declined",
        }
    }
}

/// A recruiting opportunity as tracked on the dashboard.
///
/// Free-text fields are `Option<String>`; an empty string reads the same as
/// an absent one (see [`text`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Opportunity {
    pub id: Option<Uuid>,
    pub organization_name: String,
    pub city: String,
    pub state: String,
    pub practice_type: Option<PracticeType>,
    pub stage: PipelineStage,

    // ICU model
    pub icu_model_description: Option<String>,
    pub icu_beds: Option<u32>,
    pub open_vs_closed: Option<String>,

    // Schedule & call
    pub call_frequency: Option<String>,
    pub nocturnist_coverage: bool,
    pub tele_icu: bool,

    // Compensation
    pub base_salary: Option<f64>,
    pub rvu_rate: Option<f64>,
    pub signing_bonus: Option<f64>,
    pub loan_repayment: Option<f64>,
    pub pto_days: Option<u32>,
    pub cme_budget: Option<f64>,
    pub malpractice_covered: bool,

    // Team
    pub has_residents: bool,
    pub has_fellows: bool,
    pub has_apps: bool,
    pub app_count: Option<u32>,

    // Culture & growth
    pub culture_notes: Option<String>,
    pub leadership_opportunities: Option<String>,
    pub research_support: bool,
    pub teaching_opportunities: bool,
    pub procedures_available: Vec<String>,
}

/// Returns the text when it is present and non-empty.
pub fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let opp: Opportunity = serde_json::from_value(json!({
            "organization_name": "Mercy General",
            "state": "MI",
            "practice_type": "community"
        }))
        .unwrap();

        assert_eq!(opp.practice_type, Some(PracticeType::Community));
        assert_eq!(opp.stage, PipelineStage::Researching);
        assert!(opp.base_salary.is_none());
        assert!(opp.procedures_available.is_empty());
        assert!(!opp.nocturnist_coverage);
    }

    #[test]
    fn test_pipeline_stage_wire_format() {
        let stage: PipelineStage = serde_json::from_value(json!("offer_received")).unwrap();
        assert_eq!(stage, PipelineStage::OfferReceived);
    }

    #[test]
    fn test_empty_text_reads_as_absent() {
        assert_eq!(text(&Some(String::new())), None);
        assert_eq!(text(&None), None);
        assert_eq!(text(&Some("Closed".to_string())), Some("Closed"));
    }
}
