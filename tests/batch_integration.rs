//! Integration tests for `run_batch` against a local mock server.
//!
//! These tests verify:
//! - Per-URL fetch, extraction and export end to end
//! - Failed URLs become notes without aborting the batch
//! - The configured User-Agent is sent
//! - The polite delay only separates consecutive URLs

use std::io::{Read, Write};
use std::path::PathBuf;

use page_text::{run_batch, Config, LogFormat, LogLevel};
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_USER_AGENT: &str = "page_text_test/1.0";

/// Helper function to write URLs to a temporary file
fn write_urls_to_file(urls: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for url in urls {
        writeln!(file, "{}", url).expect("Failed to write URL");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Helper function to create a basic Config for testing
fn create_test_config(input_file: PathBuf, output_dir: PathBuf) -> Config {
    Config {
        file: input_file,
        output_dir,
        delay_seconds: 0.0,
        timeout_seconds: 5,
        user_agent: TEST_USER_AGENT.to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

async fn start_site() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(html_response(
            "<html><head><title> About us </title><script>track()</script></head>\
             <body><h1>About</h1><p>We&nbsp;make   things.</p><div hidden>secret</div></body></html>",
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(html_response("<p>No title here</p>"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_run_batch_end_to_end() {
    let server = start_site().await;
    let base = server.uri();
    let urls = vec![
        format!("{base}/about"),
        format!("{base}/missing"),
        format!("{base}/plain"),
        // duplicate is dropped
        format!("{base}/about"),
    ];
    let input = write_urls_to_file(&urls);
    let output = TempDir::new().expect("Failed to create temp dir");

    let report = run_batch(create_test_config(
        input.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .await
    .expect("batch should complete");

    assert_eq!(report.total_urls, 3);
    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 1);

    let about = &report.records[0];
    assert_eq!(about.title, "About us");
    assert_eq!(about.text, "About\nWe make things.");
    assert!(about.notes.is_empty());

    let missing = &report.records[1];
    assert!(missing.title.is_empty() && missing.text.is_empty());
    assert!(missing.notes.starts_with("Error: HTTP 404"), "{}", missing.notes);

    let plain = &report.records[2];
    assert_eq!(plain.title, "");
    assert_eq!(plain.text, "No title here");

    // CSV
    let mut reader = csv::Reader::from_path(&report.exports.csv).expect("csv exists");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["url", "title", "text", "notes"]);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][2], "About\nWe make things.");
    assert!(rows[1][3].starts_with("Error:"));

    // ZIP
    let file = std::fs::File::open(&report.exports.zip).expect("zip exists");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip");
    assert_eq!(archive.len(), 3);
    let port = server.address().port();
    let mut content = String::new();
    archive
        .by_name(&format!("01_127.0.0.1_{port}_about.txt"))
        .expect("about entry")
        .read_to_string(&mut content)
        .expect("read entry");
    assert_eq!(content, "About\nWe make things.");

    // Combined
    let combined = std::fs::read_to_string(&report.exports.combined).expect("combined exists");
    assert!(combined.starts_with(&format!("===== [1] About us :: {base}/about =====\n")));
    assert!(combined.contains(&format!("===== [2] (no title) :: {base}/missing =====")));
    assert!(combined.ends_with("No title here"));

    // Individual files
    assert_eq!(report.exports.individual.len(), 3);
    assert_eq!(
        std::fs::read_to_string(&report.exports.individual[2]).expect("read"),
        "No title here"
    );
}

#[tokio::test]
async fn test_run_batch_records_invalid_url_and_continues() {
    let server = start_site().await;
    let urls = vec![
        "ftp://example.com/file".to_string(),
        format!("{}/plain", server.uri()),
    ];
    let input = write_urls_to_file(&urls);
    let output = TempDir::new().expect("Failed to create temp dir");

    let report = run_batch(create_test_config(
        input.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .await
    .expect("batch should complete");

    assert_eq!(report.total_urls, 2);
    assert!(report.records[0].notes.starts_with("Error: invalid URL"));
    assert_eq!(report.records[1].text, "No title here");
}

#[tokio::test]
async fn test_run_batch_hash_line_is_an_invalid_url_item() {
    let server = start_site().await;
    let urls = vec!["# skip me".to_string(), format!("{}/plain", server.uri())];
    let input = write_urls_to_file(&urls);
    let output = TempDir::new().expect("Failed to create temp dir");

    let report = run_batch(create_test_config(
        input.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .await
    .expect("batch should complete");

    assert_eq!(report.total_urls, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.records[0].url, "# skip me");
    assert!(report.records[0].notes.starts_with("Error: invalid URL"));
    assert_eq!(report.records[1].text, "No title here");
}

#[tokio::test]
async fn test_run_batch_unreachable_host_is_a_note() {
    // Bind then drop a listener so the port is very likely closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let input = write_urls_to_file(&[format!("http://127.0.0.1:{port}/")]);
    let output = TempDir::new().expect("Failed to create temp dir");

    let report = run_batch(create_test_config(
        input.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .await
    .expect("batch should complete");

    assert_eq!(report.failed, 1);
    assert!(report.records[0].notes.starts_with("Error:"));
}

#[tokio::test]
async fn test_run_batch_empty_input_is_error() {
    let input = write_urls_to_file(&["".to_string(), "   ".to_string()]);
    let output = TempDir::new().expect("Failed to create temp dir");

    let result = run_batch(create_test_config(
        input.path().to_path_buf(),
        output.path().to_path_buf(),
    ))
    .await;

    let err = result.expect_err("empty input must fail");
    assert!(format!("{err:#}").contains("Please provide at least one valid URL"));
}

#[tokio::test]
async fn test_run_batch_delay_is_only_between_urls() {
    let server = start_site().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    // A single URL never waits, however long the delay
    let single = write_urls_to_file(&[format!("{}/plain", server.uri())]);
    let mut config = create_test_config(single.path().to_path_buf(), output.path().to_path_buf());
    config.delay_seconds = 10.0;
    let started = std::time::Instant::now();
    run_batch(config).await.expect("batch should complete");
    assert!(started.elapsed() < std::time::Duration::from_secs(5));

    // Three URLs wait twice
    let three = write_urls_to_file(&[
        format!("{}/plain", server.uri()),
        format!("{}/about", server.uri()),
        format!("{}/missing", server.uri()),
    ]);
    let mut config = create_test_config(three.path().to_path_buf(), output.path().to_path_buf());
    config.delay_seconds = 0.4;
    let started = std::time::Instant::now();
    run_batch(config).await.expect("batch should complete");
    let elapsed = started.elapsed();
    assert!(elapsed >= std::time::Duration::from_millis(800));
    assert!(elapsed < std::time::Duration::from_secs(5));
}
