//! Tests for the on-disk and JSON formats.

use cringein::detect::{analyze, compare};
use cringein::report::{to_json, Report};
use cringein::store::{History, Settings, Store, Theme, HISTORY_CAPACITY};
use tempfile::TempDir;

#[test]
fn test_json_report_document() {
    let text = "I'm humbled to announce my new role. Agree? Thoughts?";
    let mut report = Report::new("post.txt", analyze(text));
    report.comparison = Some(compare(text));
    report.share_url = Some("https://twitter.com/intent/tweet?text=hi".to_string());
    report.truncated = true;

    let json = serde_json::to_value(to_json(&[report])).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));

    let result = &json["results"][0];
    assert_eq!(result["originalText"], text);
    assert_eq!(result["score"], 35);
    assert_eq!(result["label"], "Mildly Corporate");
    assert_eq!(result["truncated"], true);
    assert_eq!(result["shareUrl"], "https://twitter.com/intent/tweet?text=hi");
    assert!(result["annotatedText"]
        .as_str()
        .unwrap()
        .contains("highlight-cringe"));

    let patterns = result["detectedPatterns"].as_array().unwrap();
    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0]["label"], "Agree? Thoughts?");
    assert_eq!(patterns[1]["label"], "Humble Announcement");
    assert_eq!(patterns[1]["points"], "+20");
    assert_eq!(patterns[1]["description"], "Found 1 instance");

    let decringed = &result["decringed"];
    assert_eq!(decringed["text"], "I wanted to share my new role.");
    assert_eq!(decringed["score"], 0);
    assert_eq!(decringed["label"], "Actually Normal");
    assert_eq!(decringed["improvement"], 35);
}

#[test]
fn test_history_file_is_a_flat_array() {
    let dir = TempDir::new().unwrap();
    let store = Store::at(dir.path());

    let mut history = History::new();
    history.push(analyze("Kudos to the team"));
    store.save_history(&history).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert!(entry["id"].is_i64());
    assert_eq!(entry["originalText"], "Kudos to the team");
    assert_eq!(entry["score"], 10);
    assert_eq!(entry["detectedPatterns"][0]["label"], "Kudos Giver");

    let loaded = store.load_history();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(0).unwrap().analysis.score, 10);
}

#[test]
fn test_oversized_history_file_is_truncated_on_load() {
    let dir = TempDir::new().unwrap();
    let store = Store::at(dir.path());

    let entries: Vec<_> = (0..8)
        .map(|i| {
            let analysis = analyze(&format!("post {}", i));
            let mut value = serde_json::to_value(&analysis).unwrap();
            value["id"] = serde_json::json!(i);
            value
        })
        .collect();
    std::fs::write(
        dir.path().join("history.json"),
        serde_json::to_string(&entries).unwrap(),
    )
    .unwrap();

    let history = store.load_history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history.get(0).unwrap().id, 0);
    assert_eq!(history.get(0).unwrap().analysis.original_text, "post 0");
}

#[test]
fn test_settings_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = Store::at(dir.path());
    assert_eq!(store.load_settings(), Settings::default());

    let settings = Settings {
        sound_enabled: false,
        theme: Theme::Dark,
    };
    store.save_settings(&settings).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["soundEnabled"], false);
    assert_eq!(json["theme"], "dark");

    assert_eq!(store.load_settings(), settings);
}

#[test]
fn test_corrupt_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("history.json"), "{not json").unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"soundEnabled": "loud"}"#,
    )
    .unwrap();

    let store = Store::at(dir.path());
    assert!(store.load_history().is_empty());
    assert_eq!(store.load_settings(), Settings::default());
}
