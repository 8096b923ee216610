//! Shareable links
//!
//! A custom word travels as `?word=<base64>` so the recipient can play it
//! without seeing it; statistics are exported as `?statistics=<base64 json>`.

use crate::stats::Statistics;
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use thiserror::Error;
use url::Url;

const WORD_PARAM: &str = "word";
const STATISTICS_PARAM: &str = "statistics";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Link has no '{0}' parameter")]
    MissingParameter(&'static str),

    #[error("Link is not a valid URL: {0}")]
    InvalidLink(#[from] url::ParseError),

    #[error("Link payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Link payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Link payload is not valid statistics: {0}")]
    Json(#[from] serde_json::Error),
}

/// Link that starts a custom game for `word`
///
/// # Examples
/// ```
/// use wordle_game::share::{custom_link, decode_custom_link};
///
/// let link = custom_link("https://wordle.example/", "mango");
/// assert_eq!(link, "https://wordle.example/?word=bWFuZ28=");
/// assert_eq!(decode_custom_link(&link).unwrap(), "mango");
/// ```
#[must_use]
pub fn custom_link(origin: &str, word: &str) -> String {
    format!(
        "{}/?{WORD_PARAM}={}",
        origin.trim_end_matches('/'),
        STANDARD.encode(word)
    )
}

/// Recover the custom word from a link or a bare token
///
/// Anything that parses as an absolute URL must carry the `word` parameter;
/// anything else is taken as the token itself. The result still has to pass
/// custom-word validation before it is played.
///
/// # Errors
/// Returns `ShareError` if a link lacks the parameter or the payload is not
/// base64-encoded UTF-8.
pub fn decode_custom_link(link: &str) -> Result<String, ShareError> {
    let link = link.trim();
    let token = match Url::parse(link) {
        Ok(url) => query_param(&url, WORD_PARAM)?,
        Err(_) => link.to_string(),
    };
    let bytes = decode_lenient(&token)?;
    Ok(String::from_utf8(bytes)?)
}

/// Link carrying a full statistics export
///
/// # Errors
/// Returns `ShareError::Json` if the statistics cannot be serialized.
pub fn statistics_link(origin: &str, statistics: &Statistics) -> Result<String, ShareError> {
    let json = serde_json::to_string(statistics)?;
    Ok(format!(
        "{}/?{STATISTICS_PARAM}={}",
        origin.trim_end_matches('/'),
        URL_SAFE_NO_PAD.encode(json)
    ))
}

/// Import statistics from a link produced by [`statistics_link`]
///
/// # Errors
/// Returns `ShareError` if the link is not a URL, lacks the parameter or its
/// payload is malformed.
pub fn parse_statistics_link(link: &str) -> Result<Statistics, ShareError> {
    let url = Url::parse(link.trim())?;
    let token = query_param(&url, STATISTICS_PARAM)?;
    let bytes = decode_lenient(&token)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Percent-decoded value of a query parameter
///
/// Form decoding turns a literal `+` into a space; base64 never contains
/// spaces, so they are mapped back.
fn query_param(url: &Url, name: &'static str) -> Result<String, ShareError> {
    url.query_pairs()
        .find_map(|(key, value)| (key == name).then(|| value.replace(' ', "+")))
        .ok_or(ShareError::MissingParameter(name))
}

/// Accept standard or URL-safe alphabets, padded or not
fn decode_lenient(token: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if token.contains(['-', '_']) {
        let unpadded = token.trim_end_matches('=');
        return URL_SAFE_NO_PAD
            .decode(unpadded)
            .or_else(|_| URL_SAFE.decode(token));
    }

    STANDARD
        .decode(token)
        .or_else(|_| URL_SAFE_NO_PAD.decode(token.trim_end_matches('=')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameMode, GameResult};

    #[test]
    fn custom_link_matches_browser_btoa() {
        // btoa("hello") == "aGVsbG8="
        assert_eq!(
            custom_link("https://wordle.example", "hello"),
            "https://wordle.example/?word=aGVsbG8="
        );
    }

    #[test]
    fn decode_from_full_link_or_token() {
        assert_eq!(
            decode_custom_link("https://wordle.example/?word=aGVsbG8=").unwrap(),
            "hello"
        );
        assert_eq!(decode_custom_link("aGVsbG8=").unwrap(), "hello");
        assert_eq!(decode_custom_link("  aGVsbG8  ").unwrap(), "hello");
    }

    #[test]
    fn decode_handles_escaped_padding_and_other_params() {
        assert_eq!(
            decode_custom_link("https://wordle.example/?ref=x&word=aGVsbG8%3D").unwrap(),
            "hello"
        );
    }

    #[test]
    fn decode_ignores_fragment() {
        assert_eq!(
            decode_custom_link("https://wordle.example/?word=aGVsbG8=#play").unwrap(),
            "hello"
        );
    }

    #[test]
    fn decode_percent_escapes_and_literal_plus() {
        assert_eq!(STANDARD.encode("k>?"), "az4/");
        assert_eq!(
            decode_custom_link("https://wordle.example/?word=az4%2F").unwrap(),
            "k>?"
        );

        // Unescaped btoa output keeps its '+'
        assert_eq!(STANDARD.encode("k>>"), "az4+");
        assert_eq!(
            decode_custom_link("https://wordle.example/?word=az4+").unwrap(),
            "k>>"
        );

        assert_eq!(
            decode_custom_link("https://wordle.example/?x=%41&word=aGVsbG8%3d").unwrap(),
            "hello"
        );
    }

    #[test]
    fn link_without_word_parameter_is_rejected() {
        assert!(matches!(
            decode_custom_link("https://wordle.example/?ref=x"),
            Err(ShareError::MissingParameter("word"))
        ));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode_custom_link("https://wordle.example/?word=***"),
            Err(ShareError::Base64(_))
        ));
        // 0xff 0xfe is not UTF-8
        assert!(matches!(decode_custom_link("//4="), Err(ShareError::Utf8(_))));
    }

    #[test]
    fn statistics_link_round_trip() {
        let mut stats = Statistics::new();
        stats.record(GameMode::WordOfTheDay, GameResult::Win);
        stats.record(GameMode::Custom, GameResult::Lose);

        let link = statistics_link("https://wordle.example/", &stats).unwrap();
        assert!(link.starts_with("https://wordle.example/?statistics="));
        assert_eq!(parse_statistics_link(&link).unwrap(), stats);
    }

    #[test]
    fn statistics_import_needs_a_url() {
        assert!(matches!(
            parse_statistics_link("not a link"),
            Err(ShareError::InvalidLink(_))
        ));
    }

    #[test]
    fn statistics_link_requires_parameter() {
        assert!(matches!(
            parse_statistics_link("https://wordle.example/?word=aGVsbG8="),
            Err(ShareError::MissingParameter("statistics"))
        ));
    }
}
