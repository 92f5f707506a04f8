mod client;

pub use client::WiktionaryClient;

/// Failures of the wiki API layer.
///
/// "Word has no page" and "file has no URL" are not failures; those come
/// back as `Ok(None)` from the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed API response: missing `{0}`")]
    MalformedResponse(&'static str),

    #[error("page {0} returned empty wikitext")]
    EmptyWikitext(u64),
}
