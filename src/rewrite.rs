//! The "decringe" rewriter.
//!
//! Applies a fixed pipeline of transforms to a post. Each step runs on the
//! output of the previous one, so phrase substitutions change the lengths
//! and sentence counts seen by the structural steps that follow.
//!
//! The phrase list here is maintained separately from the rule catalog and
//! does not mirror it exactly.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::{debug, trace};

use crate::detect::structure::{HASHTAG, PARAGRAPH_BREAK, TRAGEDY_TO_SUCCESS_PATTERN};
use crate::rules::{flagged_pattern, MatchSpan};

/// Returned when nothing survives the rewrite.
pub const FALLBACK: &str = "This post was so cringe it couldn't be saved. Try starting over!";

/// Replacement for a hardship-to-triumph arc.
pub const TRAGEDY_REPLACEMENT: &str =
    "I learned from my experiences and am grateful for where I am now";

/// Hashtags kept by the reduction step.
pub const MAX_HASHTAGS: usize = 3;

/// Length above which an unbroken post gets a paragraph break.
pub const PARAGRAPH_SPLIT_MIN_CHARS: usize = 500;

/// Sentences required before a paragraph break is inserted.
pub const PARAGRAPH_SPLIT_MIN_SENTENCES: usize = 6;

/// A find-and-replace step.
struct Substitution {
    pattern: &'static str,
    replacement: &'static str,
}

const fn sub(pattern: &'static str, replacement: &'static str) -> Substitution {
    Substitution {
        pattern,
        replacement,
    }
}

/// Phrase substitutions in application order. The blank-line collapse sits
/// between the two groups.
static SUBSTITUTIONS: &[Substitution] = &[
    sub(r"i'm humbled to announce", "I wanted to share"),
    sub(r"let that sink in\.?", ""),
    sub(r"agree\?\s*thoughts\?", ""),
    sub(r"i usually don't post but", ""),
    sub("🚀|💪|✨|🔥|💯", ""),
    sub(r"#blessed|#grateful|#journey", ""),
    sub(r"my team isn't just employees.*family", "I work with a great team"),
    sub(r"\n\s*\n\s*\n", "\n\n"),
    sub(r"mindset.*everything", "perspective matters"),
    sub(r"game changer|paradigm shift", "improvement"),
    sub(r"tears.*eyes|crying|emotional", "excited"),
    sub(r"started from the bottom", "started my career"),
    sub(r"reach out|connect with me", "feel free to message me"),
    sub(r"dropped out.*now (ceo|founder)", "now running a company"),
    sub(r"fail.*learn.*succeed", "learned from experience"),
    sub(r"5am.*success", "early mornings help productivity"),
    sub(r"let me tell you a story", "Here's what happened"),
    sub(r"i was rejected \d+ times", "I faced some rejections"),
    sub(r"kudos to", "thanks to"),
];

static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SUBSTITUTIONS
        .iter()
        .map(|s| {
            let regex = Regex::new(&flagged_pattern(s.pattern, MatchSpan::Line))
                .expect("rewrite pattern must compile");
            (regex, s.replacement)
        })
        .collect()
});

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").unwrap());
static INLINE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Rewrite a post to remove cringe. Never returns an empty string.
pub fn rewrite(text: &str) -> String {
    let mut out = replace_phrases(text);
    out = replace_tragedy(&out);
    out = reduce_hashtags(&out);
    out = inject_paragraph_break(&out);
    out = normalize_whitespace(&out);

    if out.trim().is_empty() {
        debug!("rewrite left nothing, using fallback");
        return FALLBACK.to_string();
    }
    out
}

fn replace_phrases(text: &str) -> String {
    let mut out = text.to_string();
    for (regex, replacement) in COMPILED.iter() {
        if regex.is_match(&out) {
            trace!(pattern = regex.as_str(), "substituting phrase");
            out = regex.replace_all(&out, NoExpand(replacement)).into_owned();
        }
    }
    out
}

fn replace_tragedy(text: &str) -> String {
    TRAGEDY_TO_SUCCESS_PATTERN
        .replace_all(text, NoExpand(TRAGEDY_REPLACEMENT))
        .into_owned()
}

/// Keep only the first few hashtags, moved to the end of the post.
fn reduce_hashtags(text: &str) -> String {
    let tags: Vec<&str> = HASHTAG.find_iter(text).map(|m| m.as_str()).collect();
    if tags.len() <= MAX_HASHTAGS {
        return text.to_string();
    }

    debug!(found = tags.len(), kept = MAX_HASHTAGS, "reducing hashtags");
    let kept = tags[..MAX_HASHTAGS].join(" ");
    let mut out = HASHTAG.replace_all(text, "").into_owned();
    out.push(' ');
    out.push_str(&kept);
    out
}

/// Split a long unbroken post in half at a sentence boundary.
fn inject_paragraph_break(text: &str) -> String {
    if text.chars().count() <= PARAGRAPH_SPLIT_MIN_CHARS || text.contains("\n\n") {
        return text.to_string();
    }

    let sentences: Vec<&str> = SENTENCE_END.split(text).collect();
    if sentences.len() <= PARAGRAPH_SPLIT_MIN_SENTENCES {
        return text.to_string();
    }

    let mid = sentences.len() / 2;
    debug!(sentences = sentences.len(), at = mid, "inserting paragraph break");
    format!(
        "{}.\n\n{}",
        sentences[..mid].join(". "),
        sentences[mid..].join(". ")
    )
}

/// Collapse runs of spaces and tabs, trim, and normalize paragraph spacing.
fn normalize_whitespace(text: &str) -> String {
    let collapsed = INLINE_SPACE.replace_all(text, " ");
    PARAGRAPH_BREAK
        .replace_all(collapsed.trim(), "\n\n")
        .into_owned()
}
