use serde::{Deserialize, Serialize};

/// The nine fixed fit dimensions, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoringCategory {
    Location,
    ScheduleCall,
    IcuModel,
    TeamSupport,
    Compensation,
    Culture,
    GrowthLeadership,
    Procedures,
    ResearchAcademics,
}

impl ScoringCategory {
    pub const ALL: [ScoringCategory; 9] = [
        ScoringCategory::Location,
        ScoringCategory::ScheduleCall,
        ScoringCategory::IcuModel,
        ScoringCategory::TeamSupport,
        ScoringCategory::Compensation,
        ScoringCategory::Culture,
        ScoringCategory::GrowthLeadership,
        ScoringCategory::Procedures,
        ScoringCategory::ResearchAcademics,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScoringCategory::Location => "location",
            ScoringCategory::ScheduleCall => "schedule_call",
            ScoringCategory::IcuModel => "icu_model",
            ScoringCategory::TeamSupport => "team_support",
            ScoringCategory::Compensation => "compensation",
            ScoringCategory::Culture => "culture",
            ScoringCategory::GrowthLeadership => "growth_leadership",
            ScoringCategory::Procedures => "procedures",
            ScoringCategory::ResearchAcademics => "research_academics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringCategory::Location => "Location",
            ScoringCategory::ScheduleCall => "Schedule & Call",
            ScoringCategory::IcuModel => "ICU Model",
            ScoringCategory::TeamSupport => "Team Support",
            ScoringCategory::Compensation => "Compensation",
            ScoringCategory::Culture => "Culture",
            ScoringCategory::GrowthLeadership => "Growth & Leadership",
            ScoringCategory::Procedures => "Procedures",
            ScoringCategory::ResearchAcademics => "Research & Academics",
        }
    }
}
