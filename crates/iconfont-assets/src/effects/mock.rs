use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;
use futures_util::stream;
use thiserror::Error;

use super::http::{HttpClient, HttpResponse};

/// Failures produced by [`MockHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    #[error("no route to {0}")]
    Unreachable(String),

    #[error("connection reset after {0} bytes")]
    ConnectionReset(usize),
}

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    body: Bytes,
    broken: bool,
}

/// In-memory HTTP client for tests.
///
/// Responds from registered routes and counts every request per URL,
/// including requests to unregistered URLs, which fail as unreachable.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    routes: HashMap<String, Route>,
    requests: Mutex<HashMap<String, usize>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `url` with `status` and `body`.
    pub fn route(mut self, url: impl Into<String>, status: u16, body: impl Into<Bytes>) -> Self {
        self.routes.insert(
            url.into(),
            Route {
                status,
                body: body.into(),
                broken: false,
            },
        );
        self
    }

    /// Respond to `url` with status 200, then fail after yielding `body`.
    pub fn broken_route(mut self, url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.routes.insert(
            url.into(),
            Route {
                status: 200,
                body: body.into(),
                broken: true,
            },
        );
        self
    }

    /// Number of requests made to `url` so far.
    pub fn requests(&self, url: &str) -> usize {
        self.lock().get(url).copied().unwrap_or(0)
    }

    /// Number of requests made to any URL so far.
    pub fn total_requests(&self) -> usize {
        self.lock().values().sum()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, usize>> {
        // a panicking test thread must not hide the counts from the others
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HttpClient for MockHttpClient {
    type Error = MockError;

    async fn get(&self, url: &str) -> Result<HttpResponse<Self::Error>, Self::Error> {
        *self.lock().entry(url.to_string()).or_default() += 1;

        let route = self
            .routes
            .get(url)
            .cloned()
            .ok_or_else(|| MockError::Unreachable(url.to_string()))?;

        let mut chunks = vec![Ok(route.body.clone())];
        if route.broken {
            chunks.push(Err(MockError::ConnectionReset(route.body.len())));
        }

        Ok(HttpResponse {
            status: route.status,
            body: Box::pin(stream::iter(chunks)),
        })
    }
}
