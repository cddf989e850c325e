//! Client side of the compute-engine query proxy.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::QueryError;

pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

const WEB_QUERY_URL: &str = "https://www.wolframalpha.com/input";

/// Body returned by the proxy, whatever the status code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryReply {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<QueryReply, QueryError>;
}

#[derive(Clone, Debug)]
pub struct HttpQueryTransport {
    client: Client,
    base_url: String,
}

impl HttpQueryTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Uses `PROOFMASTER_PROXY_URL`, falling back to [`DEFAULT_PROXY_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("PROOFMASTER_PROXY_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROXY_URL.into());
        Self::new(base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QueryTransport for HttpQueryTransport {
    async fn fetch(&self, query: &str) -> Result<QueryReply, QueryError> {
        let url = format!("{}/api/query", self.base_url.trim_end_matches('/'));
        let response = self.client.get(url).query(&[("q", query)]).send().await?;
        let status = response.status();
        let reply: QueryReply = response.json().await?;
        debug!(%status, has_result = reply.result.is_some(), "proxy replied");
        Ok(reply)
    }
}

/// Sends learner queries through a [`QueryTransport`].
pub struct QueryClient<T> {
    transport: T,
}

impl<T: QueryTransport> QueryClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Sends `text` to the proxy. Blank input sends nothing and yields `None`.
    ///
    /// # Errors
    ///
    /// `Rejected` when the proxy reports an error, `NoResult` when the reply
    /// carries no result, `Transport` when the request itself fails.
    pub async fn query(&self, text: &str) -> Result<Option<String>, QueryError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let reply = self.transport.fetch(text).await.inspect_err(|err| {
            warn!(error = %err, "query request failed");
        })?;
        if let Some(message) = reply.error {
            return Err(QueryError::Rejected(message));
        }
        reply.result.map(Some).ok_or(QueryError::NoResult)
    }
}

/// Identifies one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

/// Loading flag and last result for the learner's query panel.
///
/// Responses may arrive out of order. Only the response for the most recently
/// issued ticket is applied; older ones are dropped.
#[derive(Debug, Clone, Default)]
pub struct QueryPanel {
    issued: u64,
    pending: Option<QueryTicket>,
    last: Option<Result<String, QueryError>>,
}

impl QueryPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for `text`, or `None` if it is blank.
    pub fn begin(&mut self, text: &str) -> Option<QueryTicket> {
        if text.trim().is_empty() {
            return None;
        }
        self.issued += 1;
        let ticket = QueryTicket(self.issued);
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Applies the outcome for `ticket`. Returns `false` and discards the
    /// outcome if a newer query has been issued since.
    pub fn resolve(&mut self, ticket: QueryTicket, outcome: Result<Option<String>, QueryError>) -> bool {
        if ticket.0 != self.issued {
            debug!(ticket = ticket.0, newest = self.issued, "dropping stale query response");
            return false;
        }
        self.pending = None;
        self.last = match outcome {
            Ok(Some(result)) => Some(Ok(result)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        };
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Result<String, QueryError>> {
        self.last.as_ref()
    }

    /// Issues, sends and resolves one query.
    ///
    /// Returns whether the outcome was applied.
    pub async fn run<T: QueryTransport>(&mut self, client: &QueryClient<T>, text: &str) -> bool {
        let Some(ticket) = self.begin(text) else {
            return false;
        };
        let outcome = client.query(text).await;
        self.resolve(ticket, outcome)
    }
}

/// Public web page for `text` on the compute engine's site.
///
/// # Errors
///
/// Never fails for the built-in base URL; the error is surfaced from `url`.
pub fn external_url(text: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(WEB_QUERY_URL, &[("i", text)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let mut panel = QueryPanel::new();
        let first = panel.begin("2^5").unwrap();
        let second = panel.begin("2^6").unwrap();
        assert!(first < second);

        assert!(panel.resolve(second, Ok(Some("64".into()))));
        assert!(!panel.is_loading());
        assert!(!panel.resolve(first, Ok(Some("32".into()))));
        assert_eq!(panel.last(), Some(&Ok("64".to_string())));
    }

    #[test]
    fn stale_response_keeps_loading_state() {
        let mut panel = QueryPanel::new();
        let first = panel.begin("a").unwrap();
        let _second = panel.begin("b").unwrap();
        assert!(!panel.resolve(first, Err(QueryError::NoResult)));
        assert!(panel.is_loading());
        assert!(panel.last().is_none());
    }

    #[test]
    fn blank_queries_get_no_ticket() {
        let mut panel = QueryPanel::new();
        assert!(panel.begin("  \t").is_none());
        assert!(!panel.is_loading());
    }

    #[test]
    fn external_url_encodes_the_query() {
        let url = external_url("2^3 + 1").unwrap();
        assert_eq!(url.host_str(), Some("www.wolframalpha.com"));
        assert_eq!(url.path(), "/input");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "i");
        assert_eq!(value, "2^3 + 1");
    }
}
