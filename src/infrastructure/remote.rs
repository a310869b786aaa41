//! HTTP client for the mock quote server
//!
//! The remote side is a JSONPlaceholder-style posts endpoint: GET returns
//! generic posts whose `title` we take as quote text, POST accepts a
//! `{title, body, userId}` object. There is no authentication and no
//! pagination beyond slicing the first batch.

use crate::domain::Quote;
use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Category assigned to every quote pulled from the server.
pub const SERVER_CATEGORY: &str = "From Server";

/// Mock user id the endpoint requires on POST.
const PUSH_USER_ID: u32 = 1;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the sync/push use cases and the network, so tests can
/// substitute an in-memory batch.
pub trait RemoteQuoteSource {
    /// Fetch up to `limit` quotes from the server.
    fn fetch_quotes(&self, limit: usize) -> Result<Vec<Quote>>;

    /// Submit a local quote to the server.
    fn push_quote(&self, quote: &Quote) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct RemotePost {
    title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PushBody<'a> {
    title: &'a str,
    body: &'a str,
    user_id: u32,
}

/// Blocking HTTP implementation of [`RemoteQuoteSource`].
pub struct HttpRemoteClient {
    server_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRemoteClient {
    /// Build a client for the given endpoint with fixed connect/request
    /// timeouts. No retries: a failed request surfaces as a single error.
    pub fn new(server_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| QuillError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(HttpRemoteClient {
            server_url: server_url.to_string(),
            client,
        })
    }
}

impl RemoteQuoteSource for HttpRemoteClient {
    fn fetch_quotes(&self, limit: usize) -> Result<Vec<Quote>> {
        let posts: Vec<RemotePost> = self
            .client
            .get(&self.server_url)
            .send()
            .map_err(|e| QuillError::Http(format!("GET {} failed: {}", self.server_url, e)))?
            .error_for_status()
            .map_err(|e| QuillError::Http(format!("GET {} failed: {}", self.server_url, e)))?
            .json()
            .map_err(|e| {
                QuillError::Http(format!(
                    "GET {} returned unexpected body: {}",
                    self.server_url, e
                ))
            })?;

        Ok(posts
            .into_iter()
            .take(limit)
            .map(|post| Quote {
                text: post.title,
                category: SERVER_CATEGORY.to_string(),
            })
            .collect())
    }

    fn push_quote(&self, quote: &Quote) -> Result<()> {
        let body = PushBody {
            title: &quote.text,
            body: &quote.category,
            user_id: PUSH_USER_ID,
        };

        self.client
            .post(&self.server_url)
            .json(&body)
            .send()
            .map_err(|e| QuillError::Http(format!("POST {} failed: {}", self.server_url, e)))?
            .error_for_status()
            .map_err(|e| QuillError::Http(format!("POST {} failed: {}", self.server_url, e)))?;

        Ok(())
    }
}
