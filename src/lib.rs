//! cringein - corporate cringe detector.
//!
//! Scores social media posts for cliched "thought leader" phrasing, explains
//! which phrases triggered the score, and rewrites posts without them.
//!
//! # Architecture
//!
//! The engine is two pure functions over strings:
//!
//! - `rules`: the ordered catalog of phrase detectors
//! - `detect`: the analyzer (catalog + structural rules, highlighting)
//! - `rewrite`: the decringe pipeline, with its own phrase list
//! - `score`: clamping and score labels
//!
//! Everything else is a collaborator that feeds the engine and consumes
//! its results:
//!
//! - `cli`: command-line front end
//! - `config`: YAML config for the CLI
//! - `report`: output formatting (pretty, JSON)
//! - `share`: share messages and links
//! - `gallery`: the Hall of Cringe examples
//! - `store`: best-effort JSON persistence of history and settings

pub mod cli;
pub mod config;
pub mod detect;
pub mod gallery;
pub mod report;
pub mod rewrite;
pub mod rules;
pub mod score;
pub mod share;
pub mod store;

pub use config::Config;
pub use detect::{analyze, compare, AnalysisResult, Analyzer, Comparison, DetectedPattern};
pub use rewrite::rewrite;
pub use rules::{Rule, RuleCatalog};
pub use score::CringeLabel;
pub use store::{History, Settings, Store, Theme};
