//! Structural rules: properties of the whole post rather than phrases.
//!
//! - Wall of Text: one long paragraph with no blank-line breaks
//! - Hashtag Overload: more than five hashtags
//! - Tragedy to Success: a hardship followed later by a triumph

use lazy_static::lazy_static;
use regex::Regex;

use super::DetectedPattern;
use crate::score::{self, points};

/// Character count above which a single paragraph is a wall of text.
pub const WALL_OF_TEXT_MIN_CHARS: usize = 500;

/// Hashtags allowed before the overload rule fires.
pub const HASHTAG_LIMIT: usize = 5;

pub const WALL_OF_TEXT: &str = "Wall of Text";
pub const HASHTAG_OVERLOAD: &str = "Hashtag Overload";
pub const TRAGEDY_TO_SUCCESS: &str = "Tragedy to Success";

lazy_static! {
    /// Blank-line paragraph separator.
    pub static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();

    /// A hashtag token. ASCII word characters only.
    pub static ref HASHTAG: Regex = Regex::new(r"#[A-Za-z0-9_]+").unwrap();

    /// A hardship term followed, possibly paragraphs later, by the nearest triumph term.
    pub static ref TRAGEDY_TO_SUCCESS_PATTERN: Regex = Regex::new(
        r"(?is)(died|cancer|divorced|fired|homeless|broke|struggling|depression|anxiety|lost everything).*?(success|ceo|founder|promoted|grateful|blessed|lesson|growth)"
    ).unwrap();
}

/// Number of non-empty paragraphs separated by blank lines.
pub fn paragraph_count(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count()
}

/// Hashtag tokens in order of appearance.
pub fn hashtags(text: &str) -> Vec<&str> {
    HASHTAG.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn detect_wall_of_text(text: &str) -> Option<DetectedPattern> {
    if paragraph_count(text) == 1 && text.chars().count() > WALL_OF_TEXT_MIN_CHARS {
        Some(DetectedPattern {
            label: WALL_OF_TEXT.to_string(),
            points: points::WALL_OF_TEXT,
            occurrences: 1,
            description: "No paragraph breaks in long post".to_string(),
        })
    } else {
        None
    }
}

pub fn detect_hashtag_overload(text: &str) -> Option<DetectedPattern> {
    let count = HASHTAG.find_iter(text).count();
    if count > HASHTAG_LIMIT {
        Some(DetectedPattern {
            label: HASHTAG_OVERLOAD.to_string(),
            points: points::HASHTAG_OVERLOAD,
            occurrences: count,
            description: format!("{} hashtags (over {} limit)", count, HASHTAG_LIMIT),
        })
    } else {
        None
    }
}

pub fn detect_tragedy_to_success(text: &str) -> Option<DetectedPattern> {
    let count = TRAGEDY_TO_SUCCESS_PATTERN.find_iter(text).count();
    if count == 0 {
        return None;
    }
    Some(DetectedPattern::counted(
        TRAGEDY_TO_SUCCESS,
        score::weighted(points::TRAGEDY_TO_SUCCESS, count),
        count,
    ))
}
