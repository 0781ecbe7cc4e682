use core::pin::pin;

use futures_util::future::{Either, select};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use jeopardy_core::{CategoryId, FetchError, TriviaSource};

/// Where the trivia API lives and how it is queried.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SourceConfig {
    pub base_url: String,
    /// How many categories to list when picking a board.
    pub pool_size: usize,
    pub timeout_ms: u32,
}

/// Races `request` against a timer, giving up with [`FetchError::Timeout`] once `timeout_ms` elapsed.
async fn with_timeout<F>(request: F, timeout_ms: u32) -> Result<String, FetchError>
where
    F: Future<Output = Result<String, FetchError>>,
{
    let request = pin!(request);
    let timeout = pin!(TimeoutFuture::new(timeout_ms));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            log::warn!("request timed out after {}ms", timeout_ms);
            Err(FetchError::Timeout)
        }
    }
}

/// Trivia API reached over `fetch`, every request bounded by a timeout.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    base_url: String,
    timeout_ms: u32,
}

impl HttpTriviaSource {
    pub(crate) fn new(config: &SourceConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        }
    }

    fn listing_url(&self, count: usize) -> String {
        format!("{}/categories?count={}", self.base_url, count)
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!("{}/category?id={}", self.base_url, id)
    }

    async fn get_text(&self, url: String) -> Result<String, FetchError> {
        log::debug!("GET {}", url);

        let request = async {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|err| FetchError::Unreachable(err.to_string()))?;
            if !response.ok() {
                return Err(FetchError::Status(response.status()));
            }
            response
                .text()
                .await
                .map_err(|err| FetchError::Malformed(err.to_string()))
        };
        with_timeout(request, self.timeout_ms).await
    }
}

impl TriviaSource for HttpTriviaSource {
    async fn category_listing(&self, count: usize) -> Result<String, FetchError> {
        self.get_text(self.listing_url(count)).await
    }

    async fn category(&self, id: CategoryId) -> Result<String, FetchError> {
        self.get_text(self.category_url(id)).await
    }
}
