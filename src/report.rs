//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output with highlighted matches
//! - JSON: the analysis document for programmatic consumption

use colored::*;
use serde::Serialize;
use std::fmt::Write as _;

use crate::detect::{segments, AnalysisResult, Comparison};
use crate::score::Severity;
use crate::store::{Settings, Theme};

/// Number of patterns shown in the summary card.
pub const TOP_PATTERNS: usize = 3;

/// One analyzed input and everything derived from it.
#[derive(Debug, Clone)]
pub struct Report {
    /// File path, or "<stdin>".
    pub source: String,
    pub analysis: AnalysisResult,
    pub comparison: Option<Comparison>,
    pub share_url: Option<String>,
    /// Whether the input was cut to the configured maximum.
    pub truncated: bool,
}

impl Report {
    pub fn new(source: impl Into<String>, analysis: AnalysisResult) -> Self {
        Self {
            source: source.into(),
            analysis,
            comparison: None,
            share_url: None,
            truncated: false,
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'static str,
    pub results: Vec<JsonReport<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub source: &'a str,
    #[serde(flatten)]
    pub analysis: &'a AnalysisResult,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decringed: Option<JsonRewrite<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRewrite<'a> {
    pub text: &'a str,
    pub score: i32,
    pub label: String,
    pub improvement: i32,
}

pub fn to_json(reports: &[Report]) -> JsonOutput<'_> {
    JsonOutput {
        version: env!("CARGO_PKG_VERSION"),
        results: reports
            .iter()
            .map(|r| JsonReport {
                source: &r.source,
                analysis: &r.analysis,
                truncated: r.truncated,
                decringed: r.comparison.as_ref().map(|c| JsonRewrite {
                    text: &c.rewritten,
                    score: c.after.score,
                    label: c.after.label.to_string(),
                    improvement: c.improvement(),
                }),
                share_url: r.share_url.as_deref(),
            })
            .collect(),
    }
}

/// Write results in JSON format.
pub fn write_json(reports: &[Report]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&to_json(reports))?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(reports: &[Report], settings: &Settings) {
    print!("{}", render_pretty(reports, settings));
    if settings.sound_enabled && !reports.is_empty() {
        // terminal bell
        print!("\x07");
    }
}

pub fn render_pretty(reports: &[Report], settings: &Settings) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let title = match settings.theme {
        Theme::Light => "cringein".blue().bold(),
        Theme::Dark => "cringein".cyan().bold(),
    };
    let _ = writeln!(out, "  {} v{}", title, env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out);

    for report in reports {
        render_report(&mut out, report);
    }

    out
}

fn render_report(out: &mut String, report: &Report) {
    let analysis = &report.analysis;

    let _ = writeln!(out, "  {}{}", "Post: ".dimmed(), report.source);
    if report.truncated {
        let _ = writeln!(out, "  {}", "(input truncated)".dimmed());
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  Cringe: {}%  {}",
        colored_score(analysis.score),
        analysis.label.to_string().bold()
    );
    if analysis.is_capped() {
        let _ = writeln!(
            out,
            "  {}",
            format!("({} points before cap)", analysis.total_points()).dimmed()
        );
    }
    let _ = writeln!(out);

    if !analysis.detected_patterns.is_empty() {
        render_patterns(out, analysis);
        let _ = writeln!(out);

        let _ = writeln!(out, "  {}", "Highlighted:".bold());
        for line in render_annotated(&analysis.annotated_text).lines() {
            let _ = writeln!(out, "    {}", line);
        }
        let _ = writeln!(out);
    }

    if let Some(comparison) = &report.comparison {
        render_comparison(out, comparison);
        let _ = writeln!(out);
    }

    if let Some(url) = &report.share_url {
        let _ = writeln!(out, "  {} {}", "Share:".bold(), url.blue());
        let _ = writeln!(out);
    }
}

fn render_patterns(out: &mut String, analysis: &AnalysisResult) {
    let _ = writeln!(
        out,
        "  {} ({}):",
        "Detected".bold(),
        analysis.detected_patterns.len()
    );
    for p in &analysis.detected_patterns {
        let _ = writeln!(
            out,
            "    {:<26} {:>4}  {}",
            p.label,
            p.points_display().red(),
            p.description.dimmed()
        );
    }

    let top: Vec<&str> = analysis
        .top_patterns(TOP_PATTERNS)
        .iter()
        .map(|p| p.label.as_str())
        .collect();
    let _ = writeln!(out, "  {} {}", "Worst offenders:".dimmed(), top.join(", "));
}

fn render_comparison(out: &mut String, comparison: &Comparison) {
    let _ = writeln!(out, "  {}", "Decringed:".bold());
    for line in comparison.rewritten.lines() {
        let _ = writeln!(out, "    {}", line);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Before: {}%  After: {}%  ({})",
        colored_score(comparison.before.score),
        colored_score(comparison.after.score),
        improvement_text(comparison.improvement())
    );
}

fn improvement_text(delta: i32) -> String {
    match delta {
        d if d > 0 => format!("-{} points", d).green().to_string(),
        0 => "no change".dimmed().to_string(),
        d => format!("+{} points", -d).red().to_string(),
    }
}

/// Render highlight markup as terminal emphasis. Nested spans render the same
/// as single ones.
pub fn render_annotated(annotated: &str) -> String {
    segments(annotated)
        .into_iter()
        .map(|(text, depth)| {
            if depth > 0 {
                text.red().bold().underline().to_string()
            } else {
                text.to_string()
            }
        })
        .collect()
}

pub fn colored_score(score: i32) -> ColoredString {
    let s = score.to_string();
    match Severity::for_score(score) {
        Severity::Low => s.green().bold(),
        Severity::Moderate => s.yellow(),
        Severity::High => s.yellow().bold(),
        Severity::Extreme => s.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{analyze, compare};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_json_shape() {
        let report = Report::new("post.txt", analyze("Agree? Thoughts?"));
        let json = serde_json::to_value(to_json(&[report])).unwrap();

        let result = &json["results"][0];
        assert_eq!(result["source"], "post.txt");
        assert_eq!(result["score"], 15);
        assert_eq!(result["label"], "Actually Normal");
        assert_eq!(result["detectedPatterns"][0]["label"], "Agree? Thoughts?");
        assert_eq!(result["detectedPatterns"][0]["points"], "+15");
        assert_eq!(result["detectedPatterns"][0]["occurrences"], 1);
        assert!(result["createdAt"].is_string());
        assert!(result.get("decringed").is_none());
        assert!(result.get("truncated").is_none());
    }

    #[test]
    fn test_json_includes_rewrite() {
        let text = "Let me tell you a story. Kudos to my mentor.";
        let mut report = Report::new("<stdin>", analyze(text));
        report.comparison = Some(compare(text));

        let json = serde_json::to_value(to_json(&[report])).unwrap();
        let decringed = &json["results"][0]["decringed"];
        assert_eq!(decringed["text"], "Here's what happened. thanks to my mentor.");
        assert_eq!(decringed["score"], 0);
        assert_eq!(decringed["improvement"], 25);
    }

    #[test]
    fn test_render_annotated_strips_markup() {
        plain();
        let result = analyze("Huge synergy here");
        assert_eq!(render_annotated(&result.annotated_text), "Huge synergy here");
    }

    #[test]
    fn test_render_pretty_lists_patterns() {
        plain();
        let report = Report::new("post.txt", analyze("Kudos to everyone. #blessed"));
        let out = render_pretty(&[report], &Settings::default());

        assert!(out.contains("Post: post.txt"));
        assert!(out.contains("Cringe: 20%  Actually Normal"));
        assert!(out.contains("Kudos Giver"));
        assert!(out.contains("Inspirational Hashtags"));
        assert!(out.contains("+10"));
    }

    #[test]
    fn test_improvement_text() {
        plain();
        assert_eq!(improvement_text(10), "-10 points");
        assert_eq!(improvement_text(0), "no change");
        assert_eq!(improvement_text(-4), "+4 points");
    }
}
