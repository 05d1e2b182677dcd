//! The analyzer: evaluates the catalog and structural rules against a post.

use chrono::Utc;
use tracing::{debug, trace};

use super::highlight::highlight_all;
use super::structure::{
    detect_hashtag_overload, detect_tragedy_to_success, detect_wall_of_text,
    TRAGEDY_TO_SUCCESS_PATTERN,
};
use super::{AnalysisResult, Comparison, DetectedPattern};
use crate::rewrite;
use crate::rules::RuleCatalog;
use crate::score::{self, CringeLabel};

/// Scores text against a rule catalog.
pub struct Analyzer<'a> {
    catalog: &'a RuleCatalog,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(RuleCatalog::builtin())
    }
}

impl<'a> Analyzer<'a> {
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Analyze a post. Never fails; empty input scores zero.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut total: i32 = 0;
        let mut detected = Vec::new();
        let mut annotated = text.to_string();

        for compiled in self.catalog.iter() {
            let count = compiled.regex.find_iter(text).count();
            if count == 0 {
                continue;
            }

            let points = score::weighted(compiled.rule.weight, count);
            trace!(rule = compiled.rule.label, count, points, "rule matched");
            total = i32::saturating_add(total, points);
            detected.push(DetectedPattern::counted(compiled.rule.label, points, count));
            annotated = highlight_all(&compiled.regex, &annotated);
        }

        if let Some(wall) = detect_wall_of_text(text) {
            debug!("wall of text detected");
            total = i32::saturating_add(total, wall.points);
            detected.push(wall);
        }

        if let Some(overload) = detect_hashtag_overload(text) {
            debug!(hashtags = overload.occurrences, "hashtag overload detected");
            total = i32::saturating_add(total, overload.points);
            detected.push(overload);
        }

        if let Some(tragedy) = detect_tragedy_to_success(text) {
            debug!(matches = tragedy.occurrences, "tragedy-to-success arc detected");
            total = i32::saturating_add(total, tragedy.points);
            detected.push(tragedy);
            annotated = highlight_all(&TRAGEDY_TO_SUCCESS_PATTERN, &annotated);
        }

        let score = score::clamp(total);
        debug!(total, score, patterns = detected.len(), "analysis complete");

        AnalysisResult {
            original_text: text.to_string(),
            score,
            label: CringeLabel::for_score(score),
            detected_patterns: detected,
            annotated_text: annotated,
            created_at: Utc::now(),
        }
    }

    /// Rewrite a post and score both versions.
    pub fn compare(&self, text: &str) -> Comparison {
        let before = self.analyze(text);
        let rewritten = rewrite::rewrite(text);
        let after = self.analyze(&rewritten);
        Comparison {
            before,
            after,
            rewritten,
        }
    }
}

/// Analyze with the built-in catalog.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::default().analyze(text)
}

/// Rewrite with the built-in rewriter and re-analyze.
pub fn compare(text: &str) -> Comparison {
    Analyzer::default().compare(text)
}
