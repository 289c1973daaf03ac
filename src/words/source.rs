//! Word sources for picking the hidden target
//!
//! `ApiSource` asks a random-word web service; `FallbackSource` draws from the
//! embedded list. `next_target` wires the two together with the silent-fallback
//! policy: a sourcing failure is never surfaced to the player.

use super::FALLBACK;
use crate::core::Word;
use anyhow::{Context, Result, bail};
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// Something that can produce the next hidden target word
pub trait WordSource {
    /// Produce a fresh target
    ///
    /// # Errors
    /// Returns an error when no valid word could be obtained; callers that
    /// face the player should recover via [`next_target`] instead of
    /// propagating it.
    fn next_word(&mut self) -> Result<Word>;
}

/// Blocking HTTP client for a random-word API
///
/// The endpoint is expected to answer with a JSON array holding one lowercase
/// 5-letter word, e.g. `["crane"]`.
pub struct ApiSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl ApiSource {
    /// Default endpoint: one random 5-letter word per request
    pub const DEFAULT_URL: &'static str = "https://random-word-api.herokuapp.com/word?length=5";

    /// Create a source against the default endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_url(Self::DEFAULT_URL)
    }

    /// Create a source against a custom endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl WordSource for ApiSource {
    fn next_word(&mut self) -> Result<Word> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .context("word API request failed")?;

        if !response.status().is_success() {
            bail!("word API returned status {}", response.status());
        }

        let body = response
            .text()
            .context("failed to read word API response")?;

        parse_word_response(&body)
    }
}

/// Parse an API body like `["crane"]` into a validated word
fn parse_word_response(body: &str) -> Result<Word> {
    let words: Vec<String> =
        serde_json::from_str(body).context("word API response was not a JSON word list")?;

    let first = words
        .first()
        .context("word API returned an empty list")?;

    Word::new(first.as_str()).context("word API returned an invalid word")
}

/// Uniform random pick from the embedded fallback list
pub struct FallbackSource {
    rng: ThreadRng,
}

impl FallbackSource {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for FallbackSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for FallbackSource {
    fn next_word(&mut self) -> Result<Word> {
        let &text = FALLBACK
            .choose(&mut self.rng)
            .context("fallback list is empty")?;
        Word::new(text).context("fallback list contains an invalid word")
    }
}

/// Pick the next target, never failing
///
/// Tries the given source first; on any error it quietly substitutes a word
/// from the fallback list instead of reporting the failure.
pub fn next_target(source: &mut dyn WordSource) -> Word {
    source.next_word().unwrap_or_else(|_| {
        let mut fallback = FallbackSource::new();
        fallback
            .next_word()
            .expect("embedded fallback list always yields a word")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl WordSource for FailingSource {
        fn next_word(&mut self) -> Result<Word> {
            bail!("network down")
        }
    }

    struct FixedSource(&'static str);

    impl WordSource for FixedSource {
        fn next_word(&mut self) -> Result<Word> {
            Ok(Word::new(self.0).unwrap())
        }
    }

    #[test]
    fn parse_word_response_accepts_a_word_list() {
        let word = parse_word_response(r#"["crane"]"#).unwrap();
        assert_eq!(word.text(), "crane");

        // Extra entries are ignored; only the first counts
        let word = parse_word_response(r#"["slate", "crane"]"#).unwrap();
        assert_eq!(word.text(), "slate");
    }

    #[test]
    fn parse_word_response_rejects_bad_bodies() {
        assert!(parse_word_response("not json").is_err());
        assert!(parse_word_response(r#"{"word": "crane"}"#).is_err());
        assert!(parse_word_response("[]").is_err());
        assert!(parse_word_response(r#"["toolong"]"#).is_err());
        assert!(parse_word_response(r#"["cr4ne"]"#).is_err());
    }

    #[test]
    fn fallback_source_yields_listed_words() {
        let mut source = FallbackSource::new();

        for _ in 0..20 {
            let word = source.next_word().unwrap();
            assert!(FALLBACK.contains(&word.text()));
        }
    }

    #[test]
    fn next_target_uses_the_source_when_it_works() {
        let mut source = FixedSource("crane");
        assert_eq!(next_target(&mut source).text(), "crane");
    }

    #[test]
    fn next_target_substitutes_silently_on_failure() {
        let mut source = FailingSource;
        let word = next_target(&mut source);
        assert!(FALLBACK.contains(&word.text()));
    }
}
