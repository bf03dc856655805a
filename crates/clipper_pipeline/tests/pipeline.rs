//! End-to-end state machine tests with fake fetchers: no network involved.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use clipper_core::{
    Article, Error, PipelineConfig, ProcessingOutcome, Result, ResultDocument,
};
use clipper_pipeline::{frontmatter, ArticleFetcher, Pipeline};

/// Succeeds for every URL not containing "fail", using a sentinel date when
/// the stub carried none.
struct FakeFetcher;

#[async_trait]
impl ArticleFetcher for FakeFetcher {
    async fn fetch(&self, url: &str, clipped: Option<&str>) -> Result<ResultDocument> {
        if url.contains("fail") {
            return Err(Error::Fetch("connection refused".to_string()));
        }
        let article = Article {
            url: url.to_string(),
            title: "Fetched Title".to_string(),
            html_content: "<p>converted body</p>".to_string(),
            author: Some("Jane Doe".to_string()),
            description: None,
            keywords: vec![],
        };
        let clipped = clipped.unwrap_or("2099-01-01");
        Ok(ResultDocument {
            file_content: frontmatter::synthesize(&article, clipped, "converted body\n"),
            sanitized_title: "Fetched Title".to_string(),
        })
    }
}

fn write_stub(root: &Path, name: &str, content: &str) {
    fs::write(root.join(name), content).unwrap();
}

#[tokio::test]
async fn test_bootstrap_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig::for_root(dir.path());
    let pipeline = Pipeline::new(config.clone(), FakeFetcher);

    pipeline.run().await.unwrap();
    pipeline.run().await.unwrap();

    assert!(config.processed_dir.is_dir());
    assert!(config.result_dir.is_dir());
    assert!(config.manual_dir.is_dir());
}

#[tokio::test]
async fn test_stub_without_url_goes_to_manual_and_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "a-no-url.md", "just a note, nothing to fetch\n");
    write_stub(
        dir.path(),
        "b-ok.md",
        "source: https://example.com/article\nclipped:: [[2023-05-01]]\n",
    );

    let config = PipelineConfig::for_root(dir.path());
    let pipeline = Pipeline::new(config.clone(), FakeFetcher);
    let outcomes = pipeline.run().await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0], ProcessingOutcome::NoUrlFound);
    assert!(matches!(outcomes[1], ProcessingOutcome::Converted { .. }));

    // The no-URL stub moved, unmodified, to the manual directory.
    assert!(!dir.path().join("a-no-url.md").exists());
    assert_eq!(
        fs::read_to_string(config.manual_dir.join("a-no-url.md")).unwrap(),
        "just a note, nothing to fetch\n"
    );

    // The good stub was processed normally.
    assert!(config.processed_dir.join("b-ok.md").is_file());
    assert!(config.result_dir.join("b-ok.md").is_file());
}

#[tokio::test]
async fn test_fetch_failure_is_isolated_and_logged() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "a-bad.md", "source: https://fail.example.com/x\n");
    write_stub(dir.path(), "b-good.md", "source: https://example.com/y\n");

    let config = PipelineConfig::for_root(dir.path());
    let pipeline = Pipeline::new(config.clone(), FakeFetcher);
    let outcomes = pipeline.run().await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        outcomes[0],
        ProcessingOutcome::FetchFailed {
            reason: "Fetch error: connection refused".to_string()
        }
    );
    assert!(matches!(outcomes[1], ProcessingOutcome::Converted { .. }));

    // The failed stub stays in the pending directory for a future run.
    assert!(dir.path().join("a-bad.md").is_file());

    // One structured entry in the failure log: [<timestamp>] <message>.
    let log = fs::read_to_string(&config.error_log).unwrap();
    let entries: Vec<&str> = log.lines().collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with('['));
    assert!(entries[0].contains("] Failed to process URL https://fail.example.com/x"));
    assert!(entries[0].contains("a-bad.md"));

    // The subsequent file still processed normally.
    assert!(config.result_dir.join("b-good.md").is_file());
}

#[tokio::test]
async fn test_embedded_clipped_date_wins_over_today() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(
        dir.path(),
        "dated.md",
        "URL: https://example.com/a\nclipped:: [[2023-05-01]]\n",
    );
    write_stub(dir.path(), "undated.md", "URL: https://example.com/b\n");

    let config = PipelineConfig::for_root(dir.path());
    let pipeline = Pipeline::new(config.clone(), FakeFetcher);
    pipeline.run().await.unwrap();

    let dated = fs::read_to_string(config.result_dir.join("dated.md")).unwrap();
    assert!(dated.contains("clipped: 2023-05-01\n"));

    // No embedded date: the fetcher received `None` and fell back.
    let undated = fs::read_to_string(config.result_dir.join("undated.md")).unwrap();
    assert!(undated.contains("clipped: 2099-01-01\n"));
}

#[tokio::test]
async fn test_result_keeps_frontmatter_shape() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "note.md", "source: https://example.com/z\n");

    let config = PipelineConfig::for_root(dir.path());
    let pipeline = Pipeline::new(config.clone(), FakeFetcher);
    let outcomes = pipeline.run().await.unwrap();

    let ProcessingOutcome::Converted { result_path } = &outcomes[0] else {
        panic!("expected a conversion, got {:?}", outcomes[0]);
    };
    assert_eq!(result_path, &config.result_dir.join("note.md"));

    let content = fs::read_to_string(result_path).unwrap();
    assert!(content.starts_with("---\ncategory: \"[[Clippings]]\"\n"));
    assert!(content.contains("source: https://example.com/z\n"));
    assert!(content.contains("tags:\n  - AI\n"));
    assert!(content.contains("publish: false\n---\n\n# Fetched Title\n"));
    assert!(content.ends_with("converted body\n"));
}
