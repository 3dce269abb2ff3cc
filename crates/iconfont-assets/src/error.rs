//! Error types for iconfont-assets.

use std::fmt;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Step of a request at which a [`TransportError`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportPhase {
    /// No response was received (DNS, connect, TLS, timeout).
    Request,
    /// The response started but its body could not be read to the end.
    Body,
    /// The body was received but is not a valid index document.
    Decode,
}

impl fmt::Display for TransportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportPhase::Request => write!(f, "request"),
            TransportPhase::Body => write!(f, "reading body"),
            TransportPhase::Decode => write!(f, "decoding body"),
        }
    }
}

/// The only error either fetch operation produces.
#[derive(Debug, Error)]
#[error("{phase} failed for {url}")]
pub struct TransportError {
    url: String,
    phase: TransportPhase,
    #[source]
    source: BoxError,
}

impl TransportError {
    pub fn new(url: impl Into<String>, phase: TransportPhase, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.into(),
            phase,
            source: source.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> TransportPhase {
        self.phase
    }
}

/// Errors raised while preparing endpoints or the HTTP client, before any
/// request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: &'static str },

    #[error("invalid URL {url}: {source}")]
    ParseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[cfg(feature = "reqwest")]
    #[error("invalid proxy URL {url}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[cfg(feature = "reqwest")]
    #[error("failed to build client: {0}")]
    Build(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
