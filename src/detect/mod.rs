//! Detection of cringe patterns in posts.

pub mod highlight;
mod runner;
pub mod structure;
mod types;

pub use highlight::{highlight_all, segments, strip_highlights, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use runner::{analyze, compare, Analyzer};
pub use types::{format_points, found_instances, AnalysisResult, Comparison, DetectedPattern};
