//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::args::{ConfigCommand, InputArgs};
use crate::config::Settings;
use crate::docx::{markdown_to_docx, DOCX_MIME, MARKDOWN_MIME};
use crate::llm::{build_provider, format_request};
use crate::payload::fields::{CLIENT_NAME, PROJECT_NAME, TRANSCRIPT_OR_NOTES};
use crate::payload::{assemble, ReportFlags, SessionFields, SessionInputRecord};
use crate::report::ReportSession;

/// Generate a report and write the Markdown (and DOCX) exports
pub async fn generate_report(
    settings: &Settings,
    input: &InputArgs,
    no_docx: bool,
    output_dir: Option<PathBuf>,
    name: Option<String>,
) -> Result<()> {
    let record = build_record(settings, input)?;
    let provider = build_provider(settings)?;

    let mut settings = settings.clone();
    if let Some(dir) = output_dir {
        settings.general.output_dir = dir;
    }
    if let Some(name) = name {
        settings.report.file_stem = name;
    }
    let include_docx = settings.report.include_docx && !no_docx;

    println!("Generating executive-ready report...");

    let mut session = ReportSession::new();
    session
        .generate(provider.as_ref(), &record, include_docx)
        .await?;

    std::fs::create_dir_all(&settings.general.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            settings.general.output_dir.display()
        )
    })?;

    if let Some(report) = session.report() {
        let path = settings.markdown_path();
        std::fs::write(&path, report.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Markdown ({}): {}", MARKDOWN_MIME, path.display());
    }

    if let Some(document) = session.document() {
        let path = settings.docx_path();
        std::fs::write(&path, document.bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("DOCX ({}): {}", DOCX_MIME, path.display());
    }

    Ok(())
}

/// Print the system instructions and user prompt without calling the model
pub fn show_prompt(settings: &Settings, input: &InputArgs) -> Result<()> {
    let record = build_record(settings, input)?;
    let request = format_request(&record)?;

    println!("=== SYSTEM ===");
    println!("{}", request.system_instructions);
    println!("=== USER ===");
    println!("{}", request.user_prompt);

    Ok(())
}

/// Convert a Markdown report to DOCX
pub fn convert_markdown(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let markdown = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let bytes = markdown_to_docx(&markdown)?;
    let path = output.unwrap_or_else(|| input.with_extension("docx"));

    std::fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Converted to: {}", path.display());

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn build_record(settings: &Settings, input: &InputArgs) -> Result<SessionInputRecord> {
    let fields = collect_fields(input)?;
    let flags = ReportFlags {
        include_open_questions: settings.report.include_open_questions
            && !input.no_open_questions,
    };

    Ok(assemble(&fields, flags)?)
}

/// Merge the inputs file, notes and individual flags, later sources winning.
fn collect_fields(input: &InputArgs) -> Result<SessionFields> {
    let mut fields = match &input.inputs {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read inputs file: {}", path.display()))?;
            SessionFields::from_toml_str(&content)
                .with_context(|| format!("Failed to parse inputs file: {}", path.display()))?
        }
        None => SessionFields::new(),
    };

    if let Some(path) = &input.notes_file {
        fields.set(TRANSCRIPT_OR_NOTES, read_notes(path)?)?;
    }
    if let Some(notes) = &input.notes {
        fields.set(TRANSCRIPT_OR_NOTES, notes.as_str())?;
    }
    if let Some(client) = &input.client {
        fields.set(CLIENT_NAME, client.as_str())?;
    }
    if let Some(project) = &input.project {
        fields.set(PROJECT_NAME, project.as_str())?;
    }
    if let Some(meeting_type) = input.meeting_type {
        fields.meeting_type = meeting_type;
    }

    for entry in &input.set {
        let (key, value) = entry
            .split_once('=')
            .with_context(|| format!("Expected KEY=VALUE, got '{}'", entry))?;
        fields.set(key.trim(), value)?;
    }

    Ok(fields)
}

fn read_notes(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut notes = String::new();
        std::io::stdin()
            .read_to_string(&mut notes)
            .context("Failed to read notes from stdin")?;
        return Ok(notes);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read notes file: {}", path.display()))
}
