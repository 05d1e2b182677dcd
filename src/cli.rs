//! Command-line interface for cringein.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{self, Config};
use crate::detect::{self, structure, Analyzer};
use crate::gallery::{self, HALL_OF_CRINGE};
use crate::report::{self, Report};
use crate::rewrite;
use crate::rules::RuleCatalog;
use crate::score::points;
use crate::share;
use crate::store::{Settings, Store, Theme};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

const STDIN_SOURCE: &str = "<stdin>";

/// File extensions picked up when a directory is analyzed.
const POST_EXTENSIONS: &[&str] = &["txt", "md"];

/// Corporate cringe detector for social media posts.
///
/// Scores a post for cliched "thought leader" phrasing, explains which
/// phrases triggered the score, and can rewrite the post without them.
#[derive(Parser)]
#[command(name = "cringein")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score posts for cringe
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
    /// Rewrite a post without the cringe
    Decringe(DecringeArgs),
    /// Show or clear recent analyses
    History(HistoryArgs),
    /// Show or change preferences
    Settings(SettingsArgs),
    /// Browse the Hall of Cringe
    Gallery(GalleryArgs),
    /// List the detection rules
    Rules,
    /// Create a config file from the default template
    Init(InitArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze (reads stdin if none provided)
    pub paths: Vec<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: Format,

    /// Maximum acceptable score (exit non-zero if exceeded)
    #[arg(short, long)]
    pub threshold: Option<i32>,

    /// Also rewrite each post and score the rewrite
    #[arg(short, long)]
    pub decringe: bool,

    /// Include a share link for each result
    #[arg(long)]
    pub share: bool,

    /// Use the "beat my score" message for share links
    #[arg(long, requires = "share")]
    pub challenge: bool,

    /// Do not record results in history
    #[arg(long)]
    pub no_history: bool,
}

/// Arguments for the decringe command.
#[derive(Parser)]
pub struct DecringeArgs {
    /// File to rewrite (reads stdin if omitted)
    pub path: Option<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print scores before and after the rewrite
    #[arg(long)]
    pub compare: bool,
}

#[derive(Parser)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub action: Option<HistoryAction>,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recent analyses (default)
    List,
    /// Show a past analysis in full (0 = most recent)
    Show { index: usize },
    /// Forget all past analyses
    Clear,
}

#[derive(Parser)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: Option<SettingsAction>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings (default)
    Show,
    /// Turn the result bell on or off (toggles when omitted)
    Sound { state: Option<Switch> },
    /// Choose the color theme, light or dark (toggles when omitted)
    Theme { theme: Option<String> },
}

#[derive(Parser)]
pub struct GalleryArgs {
    /// Analyze each example
    #[arg(short, long)]
    pub analyze: bool,

    /// Print the full report for one example
    #[arg(short, long, value_name = "TITLE", conflicts_with = "analyze")]
    pub show: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "cringein.yaml")]
    pub output: PathBuf,
}

/// Install the tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    let default = if verbose { "cringein=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Open the store, degrading to none when the platform has no data dir.
fn open_store() -> Option<Store> {
    match Store::open_default() {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, "history and settings unavailable");
            None
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input)
}

/// Collect post files under a directory.
fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden directories
            let name = e.file_name().to_string_lossy();
            !(e.depth() > 0 && e.file_type().is_dir() && name.starts_with('.'))
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let ext = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            if POST_EXTENSIONS.contains(&ext) {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    Ok(files)
}

/// Resolve the inputs for analyze: `(source, text)` pairs.
fn gather_inputs(paths: &[PathBuf]) -> anyhow::Result<Vec<(String, String)>> {
    if paths.is_empty() {
        return Ok(vec![(STDIN_SOURCE.to_string(), read_stdin()?)]);
    }

    let mut files = Vec::new();
    for path in paths {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("cannot access path {}", path.display()))?;
        if metadata.is_dir() {
            files.extend(collect_files(path)?);
        } else {
            files.push(path.clone());
        }
    }

    files
        .into_iter()
        .map(|file| {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            Ok((file.to_string_lossy().to_string(), text))
        })
        .collect()
}

/// Load the config for a command, or `None` after reporting why it is invalid.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Option<Config>> {
    let cwd = std::env::current_dir().context("resolving current directory")?;
    match Config::load(explicit, &cwd) {
        Ok(c) => Ok(Some(c)),
        Err(e) => {
            eprintln!("Error: invalid config: {:#}", e);
            Ok(None)
        }
    }
}

/// Cut `text` to the configured maximum, warning when it is cut.
fn clip_input<'t>(source: &str, text: &'t str, config: &Config) -> (&'t str, bool) {
    let (clipped, truncated) = clip_input(source, text, config);
    (clipped, truncated)
}

/// Drop inputs with nothing but whitespace.
fn drop_blank(inputs: Vec<(String, String)>) -> Vec<(String, String)> {
    inputs
        .into_iter()
        .filter(|(source, text)| {
            let blank = text.trim().is_empty();
            if blank {
                warn!(source = source.as_str(), "skipping empty post");
            }
            !blank
        })
        .collect()
}

fn build_report(
    source: &str,
    text: &str,
    config: &Config,
    args: &AnalyzeArgs,
) -> anyhow::Result<Report> {
    let (clipped, truncated) = config.clip(text);
    if truncated {
        warn!(source, max_chars = config.max_chars, "input truncated");
    }

    let analyzer = Analyzer::default();
    let mut report = Report::new(source, analyzer.analyze(clipped));
    report.truncated = truncated;

    if args.decringe {
        report.comparison = Some(analyzer.compare(clipped));
    }

    if args.share {
        let text = if args.challenge {
            share::challenge_text(&report.analysis)
        } else {
            share::share_text(&report.analysis)
        };
        report.share_url = Some(share::intent_url(&text)?.to_string());
    }

    Ok(report)
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let Some(config) = load_config(args.config.as_deref())? else {
        return Ok(EXIT_ERROR);
    };

    let inputs = gather_inputs(&args.paths)?;
    if inputs.is_empty() {
        eprintln!("Warning: no posts to analyze");
        return Ok(EXIT_SUCCESS);
    }
    let inputs = drop_blank(inputs);
    if inputs.is_empty() {
        eprintln!("Error: please enter a post to analyze");
        return Ok(EXIT_ERROR);
    }
    debug!(inputs = inputs.len(), "analyzing");

    let reports = inputs
        .par_iter()
        .map(|(source, text)| build_report(source, text, &config, args))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let store = open_store();
    let settings = store
        .as_ref()
        .map(|s| s.load_settings())
        .unwrap_or_default();

    if config.record_history && !args.no_history {
        if let Some(store) = &store {
            let mut history = store.load_history();
            for report in &reports {
                history.push(report.analysis.clone());
            }
            if let Err(e) = store.save_history(&history) {
                warn!(error = %e, "could not save history");
            }
        }
    }

    match args.format {
        Format::Json => report::write_json(&reports)?,
        Format::Pretty => report::write_pretty(&reports, &settings),
    }

    let threshold = args.threshold.or(config.threshold);
    if let Some(threshold) = threshold {
        let worst = reports.iter().map(|r| r.analysis.score).max().unwrap_or(0);
        if worst > threshold {
            info!(worst, threshold, "threshold exceeded");
            return Ok(EXIT_FAILED);
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Run the decringe command.
pub fn run_decringe(args: &DecringeArgs) -> anyhow::Result<i32> {
    let Some(config) = load_config(args.config.as_deref())? else {
        return Ok(EXIT_ERROR);
    };

    let (source, input) = match &args.path {
        Some(path) => (
            path.to_string_lossy().to_string(),
            std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
        ),
        None => (STDIN_SOURCE.to_string(), read_stdin()?),
    };
    let (text, _) = clip_input(&source, &input, &config);

    if !args.compare {
        println!("{}", rewrite::rewrite(text));
        return Ok(EXIT_SUCCESS);
    }

    let comparison = detect::compare(text);
    println!("{}", comparison.rewritten);
    println!();
    println!(
        "Before: {}% ({})  After: {}% ({})",
        report::colored_score(comparison.before.score),
        comparison.before.label,
        report::colored_score(comparison.after.score),
        comparison.after.label
    );
    Ok(EXIT_SUCCESS)
}

/// Run the history command.
pub fn run_history(args: &HistoryArgs) -> anyhow::Result<i32> {
    let Some(store) = open_store() else {
        eprintln!("Error: no data directory available for history");
        return Ok(EXIT_ERROR);
    };
    let mut history = store.load_history();

    match args.action.as_ref().unwrap_or(&HistoryAction::List) {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No analyses yet.");
                return Ok(EXIT_SUCCESS);
            }
            for (i, entry) in history.iter().enumerate() {
                let a = &entry.analysis;
                println!(
                    "  {}  {:>3}%  {:<36} {}",
                    i,
                    report::colored_score(a.score),
                    a.label.to_string(),
                    preview(&a.original_text, 40).dimmed()
                );
            }
        }
        HistoryAction::Show { index } => {
            let Some(entry) = history.get(*index) else {
                eprintln!("Error: no history entry {}", index);
                return Ok(EXIT_ERROR);
            };
            let report = Report::new(
                format!("history #{} ({})", index, entry.analysis.created_at.to_rfc3339()),
                entry.analysis.clone(),
            );
            print!(
                "{}",
                report::render_pretty(&[report], &store.load_settings())
            );
        }
        HistoryAction::Clear => {
            history.clear();
            store.save_history(&history)?;
            println!("History cleared.");
        }
    }

    Ok(EXIT_SUCCESS)
}

/// First line of a post, shortened to `max` characters.
fn preview(text: &str, max: usize) -> String {
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    if line.chars().count() <= max {
        line.to_string()
    } else {
        let cut: String = line.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Run the settings command.
pub fn run_settings(args: &SettingsArgs) -> anyhow::Result<i32> {
    let Some(store) = open_store() else {
        eprintln!("Error: no data directory available for settings");
        return Ok(EXIT_ERROR);
    };
    let mut settings = store.load_settings();

    match args.action.as_ref().unwrap_or(&SettingsAction::Show) {
        SettingsAction::Show => {}
        SettingsAction::Sound { state } => {
            match state {
                Some(state) => settings.sound_enabled = *state == Switch::On,
                None => {
                    settings.toggle_sound();
                }
            }
            save_settings(&store, &settings);
        }
        SettingsAction::Theme { theme } => {
            match theme.as_deref().map(str::parse::<Theme>) {
                Some(Ok(t)) => settings.theme = t,
                Some(Err(e)) => {
                    eprintln!("Error: {}", e);
                    return Ok(EXIT_ERROR);
                }
                None => {
                    settings.toggle_theme();
                }
            }
            save_settings(&store, &settings);
        }
    }

    print_settings(&settings);
    Ok(EXIT_SUCCESS)
}

fn save_settings(store: &Store, settings: &Settings) {
    if let Err(e) = store.save_settings(settings) {
        eprintln!("Warning: settings not saved: {}", e);
    }
}

fn print_settings(settings: &Settings) {
    let sound = if settings.sound_enabled { "on" } else { "off" };
    println!("  {:<8} {}", "sound", sound);
    println!("  {:<8} {}", "theme", settings.theme);
}

/// Run the gallery command.
pub fn run_gallery(args: &GalleryArgs) -> anyhow::Result<i32> {
    if let Some(title) = &args.show {
        let Some(report) = example_report(title) else {
            eprintln!("Error: no example titled {:?}", title);
            return Ok(EXIT_ERROR);
        };
        let settings = open_store()
            .map(|s| s.load_settings())
            .unwrap_or_default();
        print!("{}", report::render_pretty(&[report], &settings));
        return Ok(EXIT_SUCCESS);
    }

    println!("Hall of Cringe:");
    println!();

    for example in HALL_OF_CRINGE {
        if args.analyze {
            let result = detect::analyze(example.post);
            println!(
                "  {:<24} {:>3}%  {}",
                example.title,
                report::colored_score(result.score),
                result.label
            );
        } else {
            println!(
                "  {:<24} {:>3}%  {}",
                example.title,
                example.advertised_score,
                preview(example.post, 48).dimmed()
            );
        }
    }

    println!();
    println!("Usage:");
    println!("  cringein gallery --analyze");
    println!("  cringein gallery --show \"The Dropout Hero\"");
    Ok(EXIT_SUCCESS)
}

/// Full report for a Hall of Cringe example, found by title.
fn example_report(title: &str) -> Option<Report> {
    let example = gallery::find(title)?;
    Some(Report::new(example.title, detect::analyze(example.post)))
}

/// Run the rules command.
pub fn run_rules() -> anyhow::Result<i32> {
    println!("Detection rules:");
    println!();

    for compiled in RuleCatalog::builtin().iter() {
        let rule = &compiled.rule;
        println!(
            "  {:<26} {:>3} pts  {}",
            rule.label,
            rule.weight,
            rule.description.dimmed()
        );
    }

    println!();
    println!("Structural rules:");
    println!();
    let structural = [
        (structure::WALL_OF_TEXT, points::WALL_OF_TEXT, "Long post with no paragraph breaks"),
        (structure::HASHTAG_OVERLOAD, points::HASHTAG_OVERLOAD, "More than 5 hashtags"),
        (
            structure::TRAGEDY_TO_SUCCESS,
            points::TRAGEDY_TO_SUCCESS,
            "Hardship story that ends in a work lesson",
        ),
    ];
    for (label, weight, description) in structural {
        println!("  {:<26} {:>3} pts  {}", label, weight, description.dimmed());
    }

    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, config::TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to set a threshold", args.output.display());
    println!("  2. Run: cringein analyze post.txt --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "cringein", "check", "post.txt", "--format", "json", "--decringe", "-t", "40",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("post.txt")]);
                assert!(args.format == Format::Json);
                assert!(args.decringe);
                assert_eq!(args.threshold, Some(40));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_challenge_requires_share() {
        assert!(Cli::try_parse_from(["cringein", "analyze", "--challenge"]).is_err());
        assert!(Cli::try_parse_from(["cringein", "analyze", "--share", "--challenge"]).is_ok());
    }

    #[test]
    fn test_collect_files_filters_extensions_and_hidden() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "post").unwrap();
        std::fs::write(temp.path().join("b.md"), "post").unwrap();
        std::fs::write(temp.path().join("c.rs"), "fn main() {}").unwrap();
        std::fs::create_dir(temp.path().join(".drafts")).unwrap();
        std::fs::write(temp.path().join(".drafts/d.txt"), "draft").unwrap();

        let files = collect_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.md"]);
    }

    #[test]
    fn test_build_report_truncates_and_shares() {
        let config = Config {
            max_chars: 16,
            ..Config::default()
        };
        let cli = Cli::try_parse_from(["cringein", "analyze", "--share", "--decringe"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };

        let report =
            build_report("<stdin>", "Agree? Thoughts? Kudos to me.", &config, &args).unwrap();
        assert!(report.truncated);
        assert_eq!(report.analysis.original_text, "Agree? Thoughts?");
        assert_eq!(report.analysis.score, 15);
        assert!(report
            .share_url
            .unwrap()
            .starts_with("https://twitter.com/intent/tweet?text="));
        assert_eq!(report.comparison.unwrap().after.score, 0);
    }

    #[test]
    fn test_settings_toggle_when_value_omitted() {
        let cli = Cli::try_parse_from(["cringein", "settings", "theme"]).unwrap();
        let Commands::Settings(args) = cli.command else {
            panic!("expected settings");
        };
        assert!(matches!(
            args.action,
            Some(SettingsAction::Theme { theme: None })
        ));

        let cli = Cli::try_parse_from(["cringein", "settings", "sound", "off"]).unwrap();
        let Commands::Settings(args) = cli.command else {
            panic!("expected settings");
        };
        assert!(matches!(
            args.action,
            Some(SettingsAction::Sound {
                state: Some(Switch::Off)
            })
        ));
    }

    #[test]
    fn test_drop_blank_skips_whitespace_posts() {
        let inputs = vec![
            ("<stdin>".to_string(), "".to_string()),
            ("a.txt".to_string(), " \n\t\n".to_string()),
            ("b.txt".to_string(), "Kudos to the team".to_string()),
        ];
        let kept = drop_blank(inputs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, "b.txt");
    }

    #[test]
    fn test_decringe_parses_config() {
        let cli =
            Cli::try_parse_from(["cringein", "decringe", "post.txt", "-c", "strict.yaml"]).unwrap();
        let Commands::Decringe(args) = cli.command else {
            panic!("expected decringe");
        };
        assert_eq!(args.path, Some(PathBuf::from("post.txt")));
        assert_eq!(args.config, Some(PathBuf::from("strict.yaml")));
        assert!(!args.compare);
    }

    #[test]
    fn test_clip_input_respects_max_chars() {
        let config = Config {
            max_chars: 5,
            ..Config::default()
        };
        assert_eq!(clip_input("post.txt", "Synergy", &config), ("Syner", true));
        assert_eq!(clip_input("post.txt", "Hi", &config), ("Hi", false));
    }

    #[test]
    fn test_gallery_show_finds_example() {
        let report = example_report("the dropout hero").unwrap();
        assert_eq!(report.source, "The Dropout Hero");
        assert!(report.analysis.score > 50);
        assert!(example_report("The Quiet Professional").is_none());

        let cli = Cli::try_parse_from(["cringein", "gallery", "--show", "The Dropout Hero"]).unwrap();
        let Commands::Gallery(args) = cli.command else {
            panic!("expected gallery");
        };
        assert_eq!(args.show.as_deref(), Some("The Dropout Hero"));
        assert!(Cli::try_parse_from(["cringein", "gallery", "--analyze", "--show", "x"]).is_err());
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("\n\nshort line\nmore", 40), "short line");
        assert_eq!(preview("abcdefghij", 8), "abcde...");
    }
}
