use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use wortkarte_core::types::Page;

use crate::Error;

/// Client for the MediaWiki query/parse API of de.wiktionary.
///
/// One instance per run; every lookup is an independent GET with no state
/// carried between calls.
#[derive(Clone)]
pub struct WiktionaryClient {
    api_url: String,
    client: reqwest::Client,
}

impl WiktionaryClient {
    pub fn new(api_url: String, timeout: Duration, user_agent: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { api_url, client })
    }

    /// Resolve a word to its dictionary page.
    ///
    /// Returns `Ok(None)` when the wiki has no entry for the word; the
    /// word is used verbatim, so trim it first.
    pub async fn find_word_page(&self, word: &str) -> Result<Option<Page>, Error> {
        // https://www.mediawiki.org/wiki/API:Query
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("prop", "info"),
            ("inprop", "url"),
            ("titles", word),
        ];

        let response: QueryResponse = self.get(&params).await?;
        response.into_page()
    }

    /// Fetch the raw wikitext body of a page resolved moments earlier.
    pub async fn page_wikitext(&self, page_id: u64) -> Result<String, Error> {
        // https://www.mediawiki.org/wiki/API:Parsing_wikitext
        let id = page_id.to_string();
        let params = [
            ("action", "parse"),
            ("format", "json"),
            ("prop", "wikitext"),
            ("pageid", id.as_str()),
        ];

        let response: ParseResponse = self.get(&params).await?;
        let wikitext = response.into_wikitext()?;

        if wikitext.trim().is_empty() {
            return Err(Error::EmptyWikitext(page_id));
        }

        Ok(wikitext)
    }

    /// Resolve a media filename to its direct download URL.
    pub async fn file_url(&self, file_name: &str) -> Result<Option<String>, Error> {
        let title = format!("File:{file_name}");
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("prop", "imageinfo"),
            ("iiprop", "url"),
            ("titles", title.as_str()),
        ];

        let response: QueryResponse = self.get(&params).await?;
        response.into_file_url()
    }

    async fn get<T>(&self, params: &[(&str, &str)]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(url = %self.api_url, ?params, "wiki API request");

        let response = self
            .client
            .get(&self.api_url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: HashMap<String, PageInfo>,
}

#[derive(Deserialize)]
struct PageInfo {
    pageid: Option<u64>,
    fullurl: Option<String>,
    /// Present (as an empty string or true) when the title has no page.
    missing: Option<serde_json::Value>,
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Deserialize)]
struct ImageInfo {
    url: Option<String>,
}

impl QueryResponse {
    /// First page of the result, or `None` for an empty/missing mapping.
    ///
    /// A response without the `query` envelope is malformed; a stub entry
    /// for a nonexistent title is a normal "not found".
    fn into_page(self) -> Result<Option<Page>, Error> {
        let query = self.query.ok_or(Error::MalformedResponse("query"))?;

        let Some(info) = query.pages.into_values().next() else {
            return Ok(None);
        };

        if info.missing.is_some() {
            return Ok(None);
        }

        match (info.pageid, info.fullurl) {
            (Some(page_id), Some(full_url)) => Ok(Some(Page { page_id, full_url })),
            _ => Ok(None),
        }
    }

    /// Direct URL of the first image-info result, if any.
    fn into_file_url(self) -> Result<Option<String>, Error> {
        let query = self.query.ok_or(Error::MalformedResponse("query"))?;

        let Some(info) = query.pages.into_values().next() else {
            return Ok(None);
        };

        Ok(info.imageinfo.into_iter().next().and_then(|i| i.url))
    }
}

#[derive(Deserialize)]
struct ParseResponse {
    parse: Option<ParseBody>,
}

#[derive(Deserialize)]
struct ParseBody {
    wikitext: Option<WikitextBody>,
}

#[derive(Deserialize)]
struct WikitextBody {
    #[serde(rename = "*")]
    content: String,
}

impl ParseResponse {
    fn into_wikitext(self) -> Result<String, Error> {
        self.parse
            .and_then(|p| p.wikitext)
            .map(|w| w.content)
            .ok_or(Error::MalformedResponse("parse.wikitext"))
    }
}
