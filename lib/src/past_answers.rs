use crate::results::WordleError;
use crate::tree::{search, Visit};
use ego_tree::NodeRef;
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use scraper::node::Element;
use scraper::{Html, Node};
use std::time::Duration;

/// The page that lists every answer used so far.
pub const DEFAULT_PAST_ANSWERS_URL: &str = "https://www.rockpapershotgun.com/wordle-past-answers";
/// How long to wait for the past answers page before giving up.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Past answers are listed as `<ul class="inline"><li>WORD</li>...</ul>`.
const ANSWER_LIST_CLASS: &str = "inline";
/// Elements that never contain answers.
const SKIPPED_ELEMENTS: [&str; 3] = ["head", "script", "style"];

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Provides the answers that have already been used, which are removed from the dictionary.
pub trait PastAnswerSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<String>, WordleError>;
}

impl<F> PastAnswerSource for F
where
    F: Fn() -> Result<Vec<String>, WordleError> + Send + Sync,
{
    fn fetch(&self) -> Result<Vec<String>, WordleError> {
        self()
    }
}

/// Downloads past answers from a web page.
///
/// Each call to [`fetch`](PastAnswerSource::fetch) makes exactly one request, bounded by the
/// configured timeout. There are no retries.
pub struct PastAnswerFetcher {
    url: String,
    timeout: Duration,
    client: Client,
}

impl PastAnswerFetcher {
    /// Creates a fetcher for the given page.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<PastAnswerFetcher, WordleError> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| WordleError::Fetch {
                url: url.clone(),
                source,
            })?;
        Ok(PastAnswerFetcher {
            url,
            timeout,
            client,
        })
    }

    fn fetch_error(&self, source: reqwest::Error) -> WordleError {
        if source.is_timeout() {
            WordleError::FetchTimeout {
                url: self.url.clone(),
                timeout: self.timeout,
            }
        } else {
            WordleError::Fetch {
                url: self.url.clone(),
                source,
            }
        }
    }
}

impl PastAnswerSource for PastAnswerFetcher {
    fn fetch(&self) -> Result<Vec<String>, WordleError> {
        info!("Fetching past answers from {}", self.url);
        let body = self
            .client
            .get(&self.url)
            .send()
            .and_then(Response::error_for_status)
            .and_then(Response::bytes)
            .map_err(|source| self.fetch_error(source))?;
        let page = std::str::from_utf8(&body).map_err(|err| WordleError::Parse {
            url: self.url.clone(),
            reason: err.to_string(),
        })?;
        let answers = past_answers_from_html(page);
        info!("Loaded {} past answers", answers.len());
        Ok(answers)
    }
}

/// Extracts the past answers from the given page, in page order and in lower case.
///
/// A page without any answer lists yields an empty list.
pub fn past_answers_from_html(page: &str) -> Vec<String> {
    let document = Html::parse_document(page);
    if !document.errors.is_empty() {
        debug!("Recovered from {} HTML parse errors", document.errors.len());
    }
    search(document.tree.root(), visit_node)
        .into_iter()
        .filter_map(|node| node.value().as_text().map(|text| text.trim().to_lowercase()))
        .filter(|answer| !answer.is_empty())
        .collect()
}

fn visit_node(node: &NodeRef<'_, Node>) -> Visit {
    match node.value() {
        Node::Element(element) if SKIPPED_ELEMENTS.contains(&element.name()) => Visit::PRUNE,
        Node::Text(_) if is_answer_text(node) => Visit::KEEP,
        _ => Visit::SKIP,
    }
}

fn is_answer_text(node: &NodeRef<'_, Node>) -> bool {
    let Some(item) = node.parent() else {
        return false;
    };
    let Some(list) = item.parent() else {
        return false;
    };
    element_named(&item, "li").is_some()
        && element_named(&list, "ul").map_or(false, |list| {
            list.attr("class").map_or(false, |classes| {
                classes
                    .split_whitespace()
                    .any(|class| class == ANSWER_LIST_CLASS)
            })
        })
}

fn element_named<'a>(node: &NodeRef<'a, Node>, name: &str) -> Option<&'a Element> {
    node.value()
        .as_element()
        .filter(|element| element.name() == name)
}
