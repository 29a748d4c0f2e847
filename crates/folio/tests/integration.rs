use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn folio_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("folio");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let catalog = r#"{
  "profile": {
    "name": "Test Person",
    "title": "Engineer",
    "email": "test@example.com",
    "linkedin": "https://www.linkedin.com/in/test",
    "github": "https://github.com/test",
    "resume_url": "resume.pdf"
  },
  "projects": [
    {
      "name": "Nexus",
      "description": "A realtime collaboration platform.",
      "period": "2023",
      "featured": true,
      "technologies": ["Angular", "Node.js"],
      "features": ["Live editing"],
      "challenges": ["Sync latency"],
      "outcomes": ["Adopted internally"],
      "tags": ["realtime"]
    }
  ],
  "skills": [
    { "name": "Angular", "category": "Frontend", "level": "Expert", "description": "Component architecture." }
  ]
}"#;
    let catalog_path = root.join("catalog.json");
    fs::write(&catalog_path, catalog).unwrap();

    let config_content = format!(
        r#"[catalog]
path = "{}"

[engine]
context_cap = 8
history_cap = 20

[speech]
locale = "en-US"
auto_speak = false
"#,
        catalog_path.display()
    );
    let config_path = root.join("folio.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_folio(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = folio_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run folio binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn search_surfaces_title_and_technology_matches() {
    let (_tmp, config) = setup_test_env();
    let (stdout, stderr, ok) = run_folio(&config, &["search", "angular"]);
    assert!(ok, "search failed: {stderr}");
    assert!(stdout.contains("Angular"), "missing title match: {stdout}");
    assert!(stdout.contains("Nexus"), "missing technology match: {stdout}");
}

#[test]
fn search_no_results() {
    let (_tmp, config) = setup_test_env();
    let (stdout, _, ok) = run_folio(&config, &["search", "zzzznothing"]);
    assert!(ok);
    assert!(stdout.contains("No results."));
}

#[test]
fn suggest_dedupes_and_caps() {
    let (_tmp, config) = setup_test_env();
    let (stdout, _, ok) = run_folio(&config, &["suggest", "ski"]);
    assert!(ok);
    let skills_lines = stdout
        .lines()
        .filter(|l| l.to_lowercase().contains("skills"))
        .count();
    assert_eq!(skills_lines, 1, "Skills suggested more than once: {stdout}");
    assert!(stdout.lines().filter(|l| l.starts_with("- ")).count() <= 8);
}

#[test]
fn ask_navigation_renders_side_effect() {
    let (_tmp, config) = setup_test_env();
    let (stdout, _, ok) = run_folio(&config, &["ask", "show projects"]);
    assert!(ok);
    assert!(stdout.contains("-> view: projects"), "stdout: {stdout}");
    assert!(stdout.contains("[navigate]"), "stdout: {stdout}");
}

#[test]
fn ask_fallback_echoes_utterance() {
    let (_tmp, config) = setup_test_env();
    let (stdout, _, ok) = run_folio(&config, &["ask", "xyz gibberish"]);
    assert!(ok);
    assert!(stdout.contains("xyz gibberish"));
    assert!(!stdout.contains("-> view:"));
}

#[test]
fn ask_with_speak_renders_spoken_line() {
    let (_tmp, config) = setup_test_env();
    let (stdout, _, ok) = run_folio(&config, &["ask", "what can you do", "--speak"]);
    assert!(ok);
    assert!(stdout.contains("(speaking, en-US)"), "stdout: {stdout}");
}

#[test]
fn index_lists_documents_with_counts() {
    let (_tmp, config) = setup_test_env();
    let (stdout, _, ok) = run_folio(&config, &["index"]);
    assert!(ok);
    assert!(stdout.contains("documents"));
    assert!(stdout.contains("project-nexus"));
    assert!(stdout.contains("project-nexus-tech-angular"));
    assert!(stdout.contains("skill-angular"));
}

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let (stdout, stderr, ok) = run_folio(&missing, &["ask", "help"]);
    assert!(ok, "stderr: {stderr}");
    assert!(!stdout.is_empty());
}
