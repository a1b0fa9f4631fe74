mod common;

use common::{run_discovery, TestEnv};

const TRANSCRIPT: &str = "We need to fix onboarding. CEO joined 6 months ago.";

#[test]
fn prompt_embeds_transcript_in_inputs() {
    let output = run_discovery(&["prompt", "--notes", TRANSCRIPT, "--client", "  Acme  "]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "prompt should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Do NOT provide solutions or recommendations."));
    assert!(stdout.contains("INPUTS:"));
    assert!(stdout.contains(&format!("\"transcript_or_notes\": \"{}\"", TRANSCRIPT)));
    assert!(stdout.contains("\"client_name\": \"Acme\""));
    assert!(stdout.contains("\"no_solutions\": true"));
}

#[test]
fn prompt_rejects_empty_inputs() {
    let output = run_discovery(&["prompt", "--notes", "   "]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Please provide a transcript/notes or fill at least one structured field"),
        "expected validation message, got:\n{}",
        stderr
    );
}

#[test]
fn prompt_rejects_unknown_field() {
    let output = run_discovery(&["prompt", "--set", "favourite_colour=blue"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unknown input field: favourite_colour"));
}

#[test]
fn generate_without_api_key_is_a_config_error() {
    let env = TestEnv::new();
    let output = env.run(&["generate", "--notes", TRANSCRIPT]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("OpenAI API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
    assert!(!env
        .work_dir()
        .join("discovery_intelligence_report.md")
        .exists());
}

#[test]
fn generate_writes_markdown_and_docx() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/responses")
        .match_header("authorization", "Bearer sk-test")
        .match_body(mockito::Matcher::Regex(
            "We need to fix onboarding".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r##"{"output":[{"type":"message","content":[{"type":"output_text","text":"# Title\n\nSome text\n- Point one\n"}]}]}"##,
        )
        .expect(1)
        .create();

    let env = TestEnv::new();
    env.write_config(&format!(
        "[llm]\napi_key = \"sk-test\"\nendpoint = \"{}\"\n",
        server.url()
    ));

    let output = env.run(&["generate", "--notes", TRANSCRIPT, "--name", "acme"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "generate should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    mock.assert();

    let markdown = std::fs::read_to_string(env.work_dir().join("acme.md")).unwrap();
    assert_eq!(markdown, "# Title\n\nSome text\n- Point one\n");

    let docx = std::fs::read(env.work_dir().join("acme.docx")).unwrap();
    assert_eq!(&docx[..2], b"PK");
}

#[test]
fn generate_respects_no_docx() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/responses")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"output_text":"Plain report"}"#)
        .create();

    let env = TestEnv::new();
    env.write_config(&format!(
        "[llm]\napi_key = \"sk-test\"\nendpoint = \"{}\"\n",
        server.url()
    ));

    let output = env.run(&["generate", "--set", "kpi_burden=40 KPIs", "--no-docx"]);
    assert!(
        output.status.success(),
        "generate should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(env
        .work_dir()
        .join("discovery_intelligence_report.md")
        .exists());
    assert!(!env
        .work_dir()
        .join("discovery_intelligence_report.docx")
        .exists());
}

#[test]
fn generate_reports_model_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/responses")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"upstream exploded"}}"#)
        .create();

    let env = TestEnv::new();
    env.write_config(&format!(
        "[llm]\napi_key = \"sk-test\"\nendpoint = \"{}\"\n",
        server.url()
    ));

    let output = env.run(&["generate", "--notes", TRANSCRIPT]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Generation failed:") && stderr.contains("upstream exploded"),
        "expected generation error, got:\n{}",
        stderr
    );
    assert!(!env
        .work_dir()
        .join("discovery_intelligence_report.md")
        .exists());
}

#[test]
fn convert_writes_docx_next_to_markdown() {
    let env = TestEnv::new();
    let input = env.work_dir().join("report.md");
    std::fs::write(&input, "# Report\n\n## Scope\n- Onboarding\n#### not a heading\n").unwrap();

    let output = env.run(&["convert", input.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "convert should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let docx = std::fs::read(env.work_dir().join("report.docx")).unwrap();
    assert_eq!(&docx[..2], b"PK");
}

#[test]
fn convert_reports_missing_file() {
    let output = run_discovery(&["convert", "does-not-exist.md"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read does-not-exist.md"));
}
