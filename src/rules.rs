//! The built-in catalog of cringe-phrase detectors.
//!
//! Each rule is plain data: a case-insensitive pattern, the points awarded
//! per occurrence, a display label and a one-line description. The catalog
//! is compiled once per process and never mutated; evaluation lives in
//! [`crate::detect`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Whether a rule's `.` may cross line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSpan {
    /// `.` stops at `\n` and `\r`.
    Line,
    /// `.` also matches `\n`.
    Multiline,
}

/// A single detector definition.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: &'static str,
    pub weight: i32,
    pub label: &'static str,
    pub description: &'static str,
    pub span: MatchSpan,
}

impl Rule {
    pub const fn line(
        pattern: &'static str,
        weight: i32,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            pattern,
            weight,
            label,
            description,
            span: MatchSpan::Line,
        }
    }

    pub const fn multiline(
        pattern: &'static str,
        weight: i32,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            pattern,
            weight,
            label,
            description,
            span: MatchSpan::Multiline,
        }
    }

    /// Compile this rule's pattern with its matching flags applied.
    pub fn compile(&self) -> Result<Regex, regex::Error> {
        Regex::new(&flagged_pattern(self.pattern, self.span))
    }
}

/// Prefix a pattern with the inline flags for its span.
pub(crate) fn flagged_pattern(pattern: &str, span: MatchSpan) -> String {
    match span {
        MatchSpan::Line => format!("(?iR){}", pattern),
        MatchSpan::Multiline => format!("(?is){}", pattern),
    }
}

/// Rules in evaluation order.
pub static RULES: &[Rule] = &[
    Rule::line(
        r"agree\?\s*thoughts\?",
        15,
        "Agree? Thoughts?",
        "The classic engagement bait ending",
    ),
    Rule::line(
        r"i'm humbled to announce",
        20,
        "Humble Announcement",
        "Fake humility before bragging",
    ),
    Rule::line(
        r"let that sink in",
        15,
        "Let That Sink In",
        "Dramatic pause for effect",
    ),
    Rule::line(
        r"#blessed|#grateful|#journey",
        10,
        "Inspirational Hashtags",
        "Generic motivation tags",
    ),
    Rule::line(
        r"i usually don't post but",
        10,
        "Reluctant Poster",
        "False modesty opener",
    ),
    Rule::line(
        r"my team isn't just employees.*family",
        15,
        "Team Family",
        "Corporate family rhetoric",
    ),
    Rule::multiline(
        r"\n\s*\n",
        2,
        "Dramatic Line Breaks",
        "Unnecessary spacing for emphasis",
    ),
    Rule::line(
        "🚀|💪|✨|🔥|💯",
        5,
        "Corporate Emojis",
        "Overuse of motivational emojis",
    ),
    Rule::line(
        r"tears.*eyes|crying|emotional",
        20,
        "Emotional Vulnerability",
        "Fake emotional manipulation",
    ),
    Rule::line(
        r"started from the bottom",
        25,
        "Rags to Riches Story",
        "Overused success narrative",
    ),
    Rule::line(
        r"game changer|paradigm shift",
        12,
        "Buzzword Bingo",
        "Corporate jargon overload",
    ),
    Rule::line(
        r"reach out|connect with me",
        8,
        "Networking Push",
        "Shameless self-promotion",
    ),
    Rule::line(
        r"dropped out.*now (ceo|founder)",
        30,
        "Dropout Success Story",
        "The ultimate LinkedIn flex",
    ),
    Rule::line(
        r"mindset.*everything",
        10,
        "Mindset Guru",
        "Pseudo-philosophical advice",
    ),
    Rule::line(
        r"fail.*learn.*succeed",
        15,
        "Failure Wisdom",
        "Generic success formula",
    ),
    Rule::line(
        r"5am.*success",
        18,
        "Early Bird Flex",
        "Productivity culture bragging",
    ),
    Rule::line(
        r"pivot|disrupt|synergy|scale",
        8,
        "Startup Buzzwords",
        "Tech industry clichés",
    ),
    Rule::line(
        r"10x|100x|unicorn",
        12,
        "Growth Hacking",
        "Exaggerated metrics",
    ),
    Rule::line(
        r"let me tell you a story",
        15,
        "Story Opener",
        "Dramatic storytelling intro",
    ),
    Rule::line(
        r"i was rejected \d+ times",
        25,
        "Rejection Count Flex",
        "Quantified struggle narrative",
    ),
    Rule::line(
        r"kudos to",
        10,
        "Kudos Giver",
        "Performative appreciation",
    ),
];

/// A rule paired with its compiled pattern.
#[derive(Debug)]
pub struct CompiledRule {
    pub rule: Rule,
    pub regex: Regex,
}

/// An ordered, immutable set of compiled rules.
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<CompiledRule>,
}

impl RuleCatalog {
    /// Compile a catalog from rule definitions, preserving their order.
    pub fn compile(rules: &[Rule]) -> anyhow::Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                let regex = rule
                    .compile()
                    .map_err(|e| anyhow::anyhow!("compiling rule {:?}: {}", rule.label, e))?;
                Ok(CompiledRule { rule: *rule, regex })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let catalog = Self { rules };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in catalog.
    pub fn builtin() -> &'static RuleCatalog {
        &BUILTIN
    }

    /// Check the catalog invariants: positive weights, non-empty labels and patterns.
    pub fn validate(&self) -> anyhow::Result<()> {
        for compiled in &self.rules {
            let rule = &compiled.rule;
            if rule.weight <= 0 {
                anyhow::bail!("rule {:?} has non-positive weight {}", rule.label, rule.weight);
            }
            if rule.label.trim().is_empty() {
                anyhow::bail!("rule with pattern {:?} has an empty label", rule.pattern);
            }
            if rule.pattern.is_empty() {
                anyhow::bail!("rule {:?} has an empty pattern", rule.label);
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by its display label.
    pub fn get(&self, label: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.rule.label == label)
    }
}

static BUILTIN: Lazy<RuleCatalog> =
    Lazy::new(|| RuleCatalog::compile(RULES).expect("built-in rule catalog must compile"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_compiles() {
        let catalog = RuleCatalog::builtin();
        assert_eq!(catalog.len(), RULES.len());
        assert_eq!(catalog.len(), 21);
    }

    #[test]
    fn test_weights_are_positive() {
        for rule in RULES {
            assert!(rule.weight > 0, "{} has weight {}", rule.label, rule.weight);
            assert!((2..=30).contains(&rule.weight));
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = RULES.iter().map(|r| r.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), RULES.len());
    }

    #[test]
    fn test_validate_rejects_zero_weight() {
        let rules = [Rule::line("nope", 0, "Zero", "never valid")];
        assert!(RuleCatalog::compile(&rules).is_err());
    }

    #[test]
    fn test_compile_rejects_bad_pattern() {
        let rules = [Rule::line("(unclosed", 5, "Broken", "bad regex")];
        let err = RuleCatalog::compile(&rules).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let catalog = RuleCatalog::builtin();
        let rule = catalog.get("Let That Sink In").unwrap();
        assert!(rule.regex.is_match("LET THAT SINK IN"));
    }

    #[test]
    fn test_line_rules_do_not_cross_newlines() {
        let catalog = RuleCatalog::builtin();
        let rule = catalog.get("Mindset Guru").unwrap();
        assert!(rule.regex.is_match("mindset is everything"));
        assert!(!rule.regex.is_match("mindset\nis everything"));
        assert!(!rule.regex.is_match("mindset\ris everything"));
    }
}
