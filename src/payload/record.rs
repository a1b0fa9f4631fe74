//! Normalized session input record sent to the model

use serde::Serialize;

use crate::payload::fields::{
    SessionFields, CLIENT_NAME, PROJECT_NAME, STRUCTURED_KEYS, TRANSCRIPT_OR_NOTES,
};
use crate::{DiscoveryError, Result};

const DEFAULT_CLIENT_NAME: &str = "Client";

/// Flags that shape the report but carry no text.
#[derive(Debug, Clone, Copy)]
pub struct ReportFlags {
    pub include_open_questions: bool,
}

impl Default for ReportFlags {
    fn default() -> Self {
        Self {
            include_open_questions: true,
        }
    }
}

/// Snapshot of everything the user provided for one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInputRecord {
    pub client_name: String,
    pub meeting_type: String,
    pub project_name: String,
    pub transcript_or_notes: String,
    pub structured_inputs: StructuredInputs,
    pub report_constraints: ReportConstraints,
}

/// Answers to the structured discovery questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredInputs {
    pub project_objective: String,
    pub why_initiated_problem_trigger: String,
    pub benefiting_departments: String,
    pub impacted_people: String,
    pub kpi_burden: String,
    pub if_not_done_consequences: String,
    pub internal_challenges: String,
    pub org_changes: String,
    pub ceo_info: String,
    pub previous_ceo_problems: String,
    pub why_external_vendor: String,
    pub why_not_listening_internally: String,
    pub ownership_and_misalignment: String,
    pub contracts_dependencies: String,
    pub ma_and_culture: String,
    pub budget_duration_payment: String,
    pub long_term_vision_and_next: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportConstraints {
    pub no_solutions: bool,
    pub include_open_questions: bool,
}

impl StructuredInputs {
    /// Values in reporting order, matching [`STRUCTURED_KEYS`].
    pub fn values(&self) -> [&str; 17] {
        [
            self.project_objective.as_str(),
            self.why_initiated_problem_trigger.as_str(),
            self.benefiting_departments.as_str(),
            self.impacted_people.as_str(),
            self.kpi_burden.as_str(),
            self.if_not_done_consequences.as_str(),
            self.internal_challenges.as_str(),
            self.org_changes.as_str(),
            self.ceo_info.as_str(),
            self.previous_ceo_problems.as_str(),
            self.why_external_vendor.as_str(),
            self.why_not_listening_internally.as_str(),
            self.ownership_and_misalignment.as_str(),
            self.contracts_dependencies.as_str(),
            self.ma_and_culture.as_str(),
            self.budget_duration_payment.as_str(),
            self.long_term_vision_and_next.as_str(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|v| v.is_empty())
    }

    fn from_fields(fields: &SessionFields) -> Self {
        let [
            project_objective,
            why_initiated_problem_trigger,
            benefiting_departments,
            impacted_people,
            kpi_burden,
            if_not_done_consequences,
            internal_challenges,
            org_changes,
            ceo_info,
            previous_ceo_problems,
            why_external_vendor,
            why_not_listening_internally,
            ownership_and_misalignment,
            contracts_dependencies,
            ma_and_culture,
            budget_duration_payment,
            long_term_vision_and_next,
        ] = STRUCTURED_KEYS.map(|key| clean_text(fields.get(key)));

        Self {
            project_objective,
            why_initiated_problem_trigger,
            benefiting_departments,
            impacted_people,
            kpi_burden,
            if_not_done_consequences,
            internal_challenges,
            org_changes,
            ceo_info,
            previous_ceo_problems,
            why_external_vendor,
            why_not_listening_internally,
            ownership_and_misalignment,
            contracts_dependencies,
            ma_and_culture,
            budget_duration_payment,
            long_term_vision_and_next,
        }
    }
}

impl SessionInputRecord {
    /// Pretty-printed JSON, non-ASCII text kept as-is.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the session record from raw form fields.
///
/// Fails with [`DiscoveryError::IncompleteInput`] when there is neither a
/// transcript nor a single structured answer.
pub fn assemble(fields: &SessionFields, flags: ReportFlags) -> Result<SessionInputRecord> {
    let client_name = clean_text(fields.get(CLIENT_NAME));

    let record = SessionInputRecord {
        client_name: if client_name.is_empty() {
            DEFAULT_CLIENT_NAME.to_string()
        } else {
            client_name
        },
        meeting_type: fields.meeting_type.label().to_string(),
        project_name: clean_text(fields.get(PROJECT_NAME)),
        transcript_or_notes: clean_text(fields.get(TRANSCRIPT_OR_NOTES)),
        structured_inputs: StructuredInputs::from_fields(fields),
        report_constraints: ReportConstraints {
            no_solutions: true,
            include_open_questions: flags.include_open_questions,
        },
    };

    if record.transcript_or_notes.is_empty() && record.structured_inputs.is_empty() {
        return Err(DiscoveryError::IncompleteInput);
    }

    tracing::debug!(
        client = %record.client_name,
        meeting_type = %record.meeting_type,
        "Assembled session input record"
    );

    Ok(record)
}

fn clean_text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
