//! Per-category scoring rules.
//!
//! Every scorer starts from a neutral 5.0, applies additive adjustments, and
//! clamps to 0–10 only once all rules have run. An absent input skips its
//! rule; it never counts as zero or "no".

use crate::models::opportunity::{text, Opportunity, PracticeType};
use crate::models::preferences::Preferences;
use crate::scoring::category::ScoringCategory;

pub const BASE_SCORE: f64 = 5.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Raw output of one category scorer, before weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub score: f64,
    pub rationale: String,
}

pub type CategoryScorer = fn(&Opportunity, &Preferences) -> CategoryScore;

/// Scorer for `category`.
pub fn scorer_for(category: ScoringCategory) -> CategoryScorer {
    match category {
        ScoringCategory::Location => score_location,
        ScoringCategory::ScheduleCall => score_schedule_call,
        ScoringCategory::IcuModel => score_icu_model,
        ScoringCategory::TeamSupport => score_team_support,
        ScoringCategory::Compensation => score_compensation,
        ScoringCategory::Culture => score_culture,
        ScoringCategory::GrowthLeadership => score_growth_leadership,
        ScoringCategory::Procedures => score_procedures,
        ScoringCategory::ResearchAcademics => score_research_academics,
    }
}

pub fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Running score plus the reasons behind each adjustment.
struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            reasons: Vec::new(),
        }
    }

    fn adjust(&mut self, delta: f64, reason: impl Into<String>) {
        self.score += delta;
        self.reasons.push(reason.into());
    }

    fn note(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    fn finish(self, fallback: &str) -> CategoryScore {
        let rationale = if self.reasons.is_empty() {
            fallback.to_string()
        } else {
            self.reasons.join(". ")
        };
        CategoryScore {
            score: clamp_score(self.score),
            rationale,
        }
    }
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystack.iter().any(|item| item.to_lowercase() == needle)
}

/// Length in UTF-16 code units, the unit the dashboard's text limits are
/// written against.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn in_thousands(amount: f64) -> String {
    format!("${:.0}k", amount / 1000.0)
}

fn practice_label(practice: PracticeType) -> &'static str {
    match practice {
        PracticeType::Academic => "academic",
        PracticeType::Community => "community",
        PracticeType::Hybrid => "hybrid",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category scorers
// ────────────────────────────────────────────────────────────────────────────

pub fn score_location(opp: &Opportunity, prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if !prefs.preferred_states.is_empty() {
        if contains_ignore_case(&prefs.preferred_states, &opp.state) {
            tally.adjust(3.0, format!("State \"{}\" is in your preferred list", opp.state));
        } else {
            tally.adjust(-2.0, format!("State \"{}\" is not in your preferred states", opp.state));
        }
    }

    if !prefs.preferred_cities.is_empty() && contains_ignore_case(&prefs.preferred_cities, &opp.city)
    {
        tally.adjust(2.0, format!("City \"{}\" is a preferred city", opp.city));
    }

    if let (Some(offered), Some(wanted)) = (opp.practice_type, prefs.practice_type) {
        if offered == wanted {
            tally.adjust(
                1.0,
                format!("Practice type matches your preference ({})", practice_label(wanted)),
            );
        } else if offered == PracticeType::Hybrid || wanted == PracticeType::Hybrid {
            tally.note("Practice type is a partial match (hybrid)");
        } else {
            tally.adjust(
                -1.0,
                format!(
                    "Practice type \"{}\" doesn't match preference \"{}\"",
                    practice_label(offered),
                    practice_label(wanted)
                ),
            );
        }
    }

    tally.finish("No specific location preferences set")
}

pub fn score_schedule_call(opp: &Opportunity, prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if prefs.nocturnist_coverage {
        if opp.nocturnist_coverage {
            tally.adjust(2.0, "Nocturnist coverage available as preferred");
        } else {
            tally.adjust(-2.0, "No nocturnist coverage (you prefer it)");
        }
    }

    if prefs.tele_icu {
        if opp.tele_icu {
            tally.adjust(1.0, "Tele-ICU available");
        } else {
            tally.adjust(-1.0, "No tele-ICU support");
        }
    }

    if let (Some(offered), Some(wanted)) = (text(&opp.call_frequency), text(&prefs.call_frequency)) {
        if offered.to_lowercase() == wanted.to_lowercase() {
            tally.adjust(2.0, "Call frequency matches your preference");
        }
    }

    tally.finish("Schedule details not fully specified")
}

pub fn score_icu_model(opp: &Opportunity, prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if text(&opp.icu_model_description).is_some() {
        tally.adjust(1.0, "ICU model description provided");
    }

    if let Some(beds) = opp.icu_beds.filter(|beds| *beds > 0) {
        tally.adjust(1.0, format!("{beds} ICU beds"));
    }

    if let Some(model) = text(&opp.open_vs_closed) {
        tally.adjust(1.0, format!("{model} ICU model"));
        if let Some(wanted) = text(&prefs.icu_schedule_model) {
            if model.to_lowercase().contains(&wanted.to_lowercase()) {
                tally.adjust(2.0, "ICU model matches your preference");
            }
        }
    }

    tally.finish("ICU model details not specified")
}

pub fn score_team_support(opp: &Opportunity, prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if prefs.has_residents {
        if opp.has_residents {
            tally.adjust(1.5, "Residents available as preferred");
        } else {
            tally.adjust(-1.5, "No residents (you prefer them)");
        }
    }

    if prefs.has_fellows {
        if opp.has_fellows {
            tally.adjust(1.0, "Fellows available");
        } else {
            tally.adjust(-1.0, "No fellows");
        }
    }

    if prefs.has_apps {
        if opp.has_apps {
            let reason = match opp.app_count.filter(|count| *count > 0) {
                Some(count) => format!("APPs available ({count})"),
                None => "APPs available".to_string(),
            };
            tally.adjust(1.5, reason);
        } else {
            tally.adjust(-1.5, "No APPs (you prefer them)");
        }
    }

    tally.finish("Team support details not specified")
}

pub fn score_compensation(opp: &Opportunity, prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    // Zero reads as "not entered" and keeps the percentage well defined.
    let salary = opp.base_salary.filter(|v| *v != 0.0);
    let minimum = prefs.min_base_salary.filter(|v| *v != 0.0);
    if let (Some(salary), Some(minimum)) = (salary, minimum) {
        if salary >= minimum {
            let percent_over = (salary - minimum) / minimum * 100.0;
            tally.adjust(
                (percent_over / 10.0).min(3.0),
                format!(
                    "Base salary {} meets your minimum ({})",
                    in_thousands(salary),
                    in_thousands(minimum)
                ),
            );
        } else {
            tally.adjust(
                -2.0,
                format!(
                    "Base salary {} below your minimum ({})",
                    in_thousands(salary),
                    in_thousands(minimum)
                ),
            );
        }
    }

    if prefs.signing_bonus_important {
        match opp.signing_bonus {
            Some(bonus) if bonus > 0.0 => {
                tally.adjust(1.0, format!("Signing bonus: {}", in_thousands(bonus)))
            }
            Some(bonus) if bonus < 0.0 => {}
            _ => tally.adjust(-0.5, "No signing bonus"),
        }
    }

    if prefs.loan_repayment_important {
        match opp.loan_repayment {
            Some(amount) if amount > 0.0 => {
                tally.adjust(1.0, format!("Loan repayment: {}", in_thousands(amount)))
            }
            Some(amount) if amount < 0.0 => {}
            _ => tally.adjust(-0.5, "No loan repayment"),
        }
    }

    let pto = opp.pto_days.filter(|d| *d > 0);
    let min_pto = prefs.min_pto_days.filter(|d| *d > 0);
    if let (Some(pto), Some(min_pto)) = (pto, min_pto) {
        if pto >= min_pto {
            tally.adjust(0.5, format!("PTO {pto} days meets minimum"));
        } else {
            tally.adjust(-1.0, format!("PTO {pto} days below your minimum {min_pto}"));
        }
    }

    if prefs.malpractice_important && opp.malpractice_covered {
        tally.adjust(0.5, "Malpractice covered");
    }

    tally.finish("Compensation details not fully specified")
}

pub fn score_culture(opp: &Opportunity, _prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if let Some(notes) = text(&opp.culture_notes) {
        if text_length(notes) > 20 {
            tally.adjust(2.0, "Detailed culture notes provided");
        } else {
            tally.adjust(1.0, "Some culture information available");
        }
    }

    tally.finish("No culture notes, add notes after your visit")
}

pub fn score_growth_leadership(opp: &Opportunity, _prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if text(&opp.leadership_opportunities).is_some_and(|notes| text_length(notes) > 10) {
        tally.adjust(2.0, "Leadership opportunities described");
    }

    if opp.teaching_opportunities {
        tally.adjust(1.0, "Teaching opportunities available");
    }

    tally.finish("Growth/leadership details not specified")
}

pub fn score_procedures(opp: &Opportunity, prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if !prefs.procedures_comfort.is_empty() && !opp.procedures_available.is_empty() {
        let wanted = prefs.procedures_comfort.len();
        let matched = prefs
            .procedures_comfort
            .iter()
            .filter(|p| contains_ignore_case(&opp.procedures_available, p))
            .count();
        let match_fraction = matched as f64 / wanted as f64;
        tally.adjust(
            match_fraction * 5.0,
            format!("{matched}/{wanted} preferred procedures available"),
        );
    } else if !opp.procedures_available.is_empty() {
        tally.adjust(
            1.0,
            format!("{} procedures available", opp.procedures_available.len()),
        );
    }

    tally.finish("Procedure availability not specified")
}

pub fn score_research_academics(opp: &Opportunity, prefs: &Preferences) -> CategoryScore {
    let mut tally = Tally::new();

    if opp.research_support {
        tally.adjust(2.0, "Research support available");
    }

    if opp.teaching_opportunities {
        tally.adjust(1.0, "Teaching opportunities");
    }

    match (prefs.practice_type, opp.practice_type) {
        (Some(PracticeType::Academic), Some(PracticeType::Academic)) => {
            tally.adjust(2.0, "Academic setting matches preference")
        }
        (Some(PracticeType::Academic), Some(PracticeType::Community)) => {
            tally.adjust(-1.0, "Community setting (you prefer academic)")
        }
        _ => {}
    }

    tally.finish("Research/academic details not specified")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
