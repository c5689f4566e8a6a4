//! Test helpers for composing feed files and scoring inputs on disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

/// Reference time pinned for every CLI test.
pub(super) const NOW: i64 = 1_700_000_000;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding the inputs of one CLI invocation.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Cybersecurity scores 90 and investigative journalism 60.
    pub(super) fn write_topic_scores(&self) -> Utf8PathBuf {
        let path = self.path("topic_scores.json");
        let document = json!({
            "complete_topic_list": [
                {"topic": "Cybersecurity", "score": 90},
                {"topic": "Investigative Journalism", "score": 60}
            ]
        });
        write_utf8(&path, document.to_string().as_bytes());
        path
    }

    pub(super) fn write_feed(&self, document: &serde_json::Value) -> Utf8PathBuf {
        let path = self.path("items.json");
        write_utf8(&path, document.to_string().as_bytes());
        path
    }
}

/// Items scoring 90, 60, and 30 under [`Workspace::write_topic_scores`],
/// listed out of rank order.
pub(super) fn ranked_items() -> Vec<serde_json::Value> {
    vec![
        json!({"id": "c", "title": "Garden roses bloom"}),
        json!({"id": "a", "title": "Malware outbreak", "published": NOW}),
        json!({"id": "b", "title": "Leaked documents", "published": NOW}),
    ]
}

pub(super) fn ids(report: &serde_json::Value) -> Vec<String> {
    report["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|entry| {
            entry["article"]["id"]
                .as_str()
                .expect("article id")
                .to_owned()
        })
        .collect()
}
