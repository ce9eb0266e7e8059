//! Look up the title and purchase link of a single track page.

use crate::macros::selector;
use crate::site;
use scraper::Html;
use thiserror::Error;

const USER_AGENT: &str = concat!("buylinks/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered, but not with a success status.
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not read response body: {0}")]
    Body(String),
}

/// Retrieves the body of a page.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Fetch`] over plain HTTP, without a browser.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match self.agent.get(url).call() {
            Ok(response) => response
                .into_string()
                .map_err(|e| FetchError::Body(e.to_string())),
            Err(ureq::Error::Status(code, _)) => Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(transport)) => {
                Err(FetchError::Transport(transport.to_string()))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackInfo {
    pub title: String,
    pub purchase_link: Option<String>,
}

impl TrackInfo {
    pub fn unknown() -> Self {
        Self {
            title: String::from(site::UNKNOWN_TITLE),
            purchase_link: None,
        }
    }
}

/// Fetch the track page at `url` and extract its [`TrackInfo`].
///
/// Failing to retrieve the page is reported on the console and yields
/// [`TrackInfo::unknown`], so the caller can carry on with the next track.
pub fn track_info<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> TrackInfo {
    log::debug!("Fetching {}", url);
    match fetcher.fetch(url) {
        Ok(body) => parse_track_page(&body),
        Err(FetchError::Status(code)) => {
            log::debug!("{} answered with status {}", url, code);
            println!("Could not retrieve track page: {}", url);
            TrackInfo::unknown()
        }
        Err(e) => {
            println!("Error while retrieving {}: {}", url, e);
            TrackInfo::unknown()
        }
    }
}

/// Extract the title and the first purchase link from a track page.
pub fn parse_track_page(html: &str) -> TrackInfo {
    let document = Html::parse_document(html);

    let title = document
        .select(selector!("title"))
        .next()
        .map(|title| {
            let text = title.text().collect::<String>();
            let text = text.trim();
            match text.split_once(site::TITLE_SUFFIX) {
                Some((name, _)) => name.trim().to_string(),
                None => text.to_string(),
            }
        })
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| String::from(site::UNKNOWN_TITLE));

    let purchase_link = document
        .select(selector!("a[href]"))
        .find(|anchor| {
            let text = anchor.text().map(str::trim).collect::<String>();
            site::is_purchase_text(&text)
        })
        .and_then(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(site::absolutize);

    TrackInfo {
        title,
        purchase_link,
    }
}
