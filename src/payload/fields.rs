//! Raw form fields collected before assembly

use std::collections::BTreeMap;

use crate::{DiscoveryError, Result};

pub const CLIENT_NAME: &str = "client_name";
pub const PROJECT_NAME: &str = "project_name";
pub const TRANSCRIPT_OR_NOTES: &str = "transcript_or_notes";
pub const MEETING_TYPE: &str = "meeting_type";

/// Keys of the structured questions, in the order they are reported.
pub const STRUCTURED_KEYS: [&str; 17] = [
    "project_objective",
    "why_initiated_problem_trigger",
    "benefiting_departments",
    "impacted_people",
    "kpi_burden",
    "if_not_done_consequences",
    "internal_challenges",
    "org_changes",
    "ceo_info",
    "previous_ceo_problems",
    "why_external_vendor",
    "why_not_listening_internally",
    "ownership_and_misalignment",
    "contracts_dependencies",
    "ma_and_culture",
    "budget_duration_payment",
    "long_term_vision_and_next",
];

/// Kind of meeting the notes were taken in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MeetingType {
    #[default]
    DiscoveryIntake,
    StakeholderInterview,
    ProjectKickoff,
    Other,
}

impl MeetingType {
    /// Label shown to users and sent to the model.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DiscoveryIntake => "Discovery / Intake",
            Self::StakeholderInterview => "Stakeholder interview",
            Self::ProjectKickoff => "Project kick-off (discovery)",
            Self::Other => "Other",
        }
    }

    /// Parse either the kebab-case name or the display label.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        [
            Self::DiscoveryIntake,
            Self::StakeholderInterview,
            Self::ProjectKickoff,
            Self::Other,
        ]
        .into_iter()
        .find(|t| t.label().eq_ignore_ascii_case(s) || t.slug() == s.to_ascii_lowercase())
    }

    fn slug(&self) -> &'static str {
        match self {
            Self::DiscoveryIntake => "discovery-intake",
            Self::StakeholderInterview => "stakeholder-interview",
            Self::ProjectKickoff => "project-kickoff",
            Self::Other => "other",
        }
    }
}

/// Raw, unvalidated text fields keyed by field name.
///
/// Mirrors a form: every field may be missing or padded with whitespace.
/// Normalization happens in [`crate::payload::assemble`].
#[derive(Debug, Clone, Default)]
pub struct SessionFields {
    pub meeting_type: MeetingType,
    values: BTreeMap<&'static str, String>,
}

impl SessionFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field by name. Unknown names are rejected.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();

        if key == MEETING_TYPE {
            self.meeting_type = MeetingType::parse(&value)
                .ok_or_else(|| DiscoveryError::UnknownMeetingType(value.trim().to_string()))?;
            return Ok(());
        }

        let key = known_key(key).ok_or_else(|| DiscoveryError::UnknownField(key.to_string()))?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Builder-style [`SessionFields::set`].
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Raw value of a field, if it was provided.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parse a flat TOML table of `field = "text"` pairs.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let table: BTreeMap<String, String> = toml::from_str(content)?;
        let mut fields = Self::new();
        for (key, value) in table {
            fields.set(&key, value)?;
        }
        Ok(fields)
    }
}

fn known_key(key: &str) -> Option<&'static str> {
    [CLIENT_NAME, PROJECT_NAME, TRANSCRIPT_OR_NOTES]
        .into_iter()
        .chain(STRUCTURED_KEYS)
        .find(|k| *k == key)
}
