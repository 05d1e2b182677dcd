//! Highlight markup for matched spans.

use regex::{Captures, Regex};

pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight-cringe">"#;
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Wrap every match of `regex` in `text` with the highlight span.
///
/// Callers apply this to an already annotated string, so a pattern can
/// match across (or inside) markers inserted by an earlier pass.
pub fn highlight_all(regex: &Regex, text: &str) -> String {
    regex
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", HIGHLIGHT_OPEN, &caps[0], HIGHLIGHT_CLOSE)
        })
        .into_owned()
}

/// Remove highlight markers, recovering the original text.
pub fn strip_highlights(annotated: &str) -> String {
    annotated
        .replace(HIGHLIGHT_OPEN, "")
        .replace(HIGHLIGHT_CLOSE, "")
}

/// Split annotated text into `(segment, depth)` pairs, where depth counts
/// the highlight spans enclosing the segment.
pub fn segments(annotated: &str) -> Vec<(&str, usize)> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut rest = annotated;

    while !rest.is_empty() {
        let open = rest.find(HIGHLIGHT_OPEN);
        let close = rest.find(HIGHLIGHT_CLOSE);
        let (idx, is_open) = match (open, close) {
            (Some(o), Some(c)) if o < c => (o, true),
            (_, Some(c)) => (c, false),
            (Some(o), None) => (o, true),
            (None, None) => {
                out.push((rest, depth));
                break;
            }
        };

        if idx > 0 {
            out.push((&rest[..idx], depth));
        }
        if is_open {
            depth += 1;
            rest = &rest[idx + HIGHLIGHT_OPEN.len()..];
        } else {
            depth = depth.saturating_sub(1);
            rest = &rest[idx + HIGHLIGHT_CLOSE.len()..];
        }
    }

    out
}
