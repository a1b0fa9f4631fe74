use crate::llm::client::ReportRequest;
use crate::payload::SessionInputRecord;
use crate::Result;

/// Persona and ground rules for every report.
pub const DISCOVERY_SYSTEM: &str = "You are a senior management consultant.
Your job: convert messy discovery notes into a premium, neutral, executive-ready \"Discovery Intelligence Report\".
Rules:
- Do NOT provide solutions or recommendations.
- Do NOT propose vendors, tools, or implementation steps.
- Be factual and neutral; avoid blame.
- If information is missing, label it as \"Unknown\" or \"Not confirmed\".
- Use crisp consulting language, but keep it understandable.
- Prefer structured outputs (headings, bullets, matrices, short tables).
- If user content contains sensitive details, do not invent names or specifics.
";

/// Build the system instructions and user prompt for a session record.
pub fn format_request(record: &SessionInputRecord) -> Result<ReportRequest> {
    let inputs_json = record.to_pretty_json()?;

    Ok(ReportRequest {
        system_instructions: DISCOVERY_SYSTEM.to_string(),
        user_prompt: build_report_prompt(&inputs_json),
    })
}

fn build_report_prompt(inputs_json: &str) -> String {
    format!(
        r#"Create a Discovery Intelligence Report from the inputs.

OUTPUT FORMAT (Markdown):
1. Title block (client name if provided; otherwise "Client"; date placeholder; meeting type)
2. Executive Narrative Map
   - Problem–Pressure–Consequence narrative (6–10 lines)
   - Why now (3 bullets)
   - What happens if not done (3 bullets)
3. Scope & Objective Clarity
   - Project objective (as heard)
   - In-scope / Out-of-scope (based on notes only; if unknown say Unknown)
4. Stakeholder & Power Reality Map
   - Stakeholder list by role/department
   - Influence vs Ownership matrix (ASCII table)
   - Accountability vs Authority mismatch signals (bullets)
5. KPI & Load Signal Snapshot
   - KPI burden signals
   - BAU impact signals
   - Evidence statements (quote-like paraphrases, neutral; 3–6 items)
6. Organizational Context Timeline (last 3–5 years if possible)
   - CEO transitions, org changes, M&A, vendor history, change programs
   - If missing, write "Not provided"
7. Risk Exposure Canvas (no solutions)
   - Strategic / Operational / Financial / Organizational / Cultural
   - For each: risk statement + trigger + consequence
8. Engagement Justification (Why external support is logical)
   - Constraint vs Neutrality table (ASCII)
9. Open Questions & Data Needed
   - Grouped list (Governance, KPIs, Stakeholders, Contracts, Change history, Budget)
10. Meeting Close Summary (3 bullets)
   - What we heard
   - What we did today (discovery)
   - Proposed next step (ONLY: "alignment workshop / diagnostic deep-dive" style, not a solution)

INPUTS:
{inputs_json}
"#
    )
}
