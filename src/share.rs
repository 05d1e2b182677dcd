//! Share and challenge messages for a result.

use url::Url;

use crate::detect::AnalysisResult;

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";

pub fn share_text(result: &AnalysisResult) -> String {
    format!(
        "I just scored {}% cringe on my LinkedIn post! 😬 \"{}\" - Check your posts at CringeIn.com #LinkedInCringe #CringeIn",
        result.score, result.label
    )
}

pub fn challenge_text(result: &AnalysisResult) -> String {
    format!(
        "I just scored {}% cringe on my LinkedIn post! 😬 Can you beat my score? Check yours at CringeIn.com #LinkedInCringe #CringeChallenge",
        result.score
    )
}

/// A tweet-compose URL prefilled with `text`. Spaces are encoded as `%20`.
pub fn intent_url(text: &str) -> anyhow::Result<Url> {
    let url = format!("{}?text={}", TWEET_INTENT, urlencoding::encode(text));
    Ok(Url::parse(&url)?)
}
