use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status and body of a completed request.
///
/// The body has not been read yet; callers decide whether to collect or
/// drain it.
pub struct HttpResponse<E> {
    pub status: u16,
    pub body: BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations must not treat non-2xx statuses as errors and must not
/// retry on their own.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - [`MockHttpClient`](super::MockHttpClient): In-memory routes for tests
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET and return once the response head has arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received (DNS failure, connection
    /// refused, TLS failure, timeout).
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_client {
    use super::*;
    use futures_util::TryStreamExt;
    use reqwest::{Client, Proxy};

    use crate::error::ConfigError;

    /// Settings applied when building the shared [`ReqwestClient`].
    #[derive(Debug, Clone, Default)]
    pub struct ClientSetting {
        /// `None` keeps the system proxy configuration. `Some` replaces it,
        /// so `Some(vec![])` always connects directly.
        pub proxies: Option<Vec<String>>,
    }

    impl ClientSetting {
        pub fn build(self) -> Result<Client, ConfigError> {
            let mut cb = Client::builder();

            if let Some(proxies) = self.proxies {
                cb = cb.no_proxy();

                let (secure, insecure): (Vec<String>, Vec<String>) =
                    proxies.into_iter().partition(|u| u.starts_with("https://"));

                for url in secure {
                    let proxy = Proxy::https(&url)
                        .map_err(|source| ConfigError::Proxy { url: url.clone(), source })?;
                    cb = cb.proxy(proxy);
                }

                for url in insecure {
                    let proxy = Proxy::http(&url)
                        .map_err(|source| ConfigError::Proxy { url: url.clone(), source })?;
                    cb = cb.proxy(proxy);
                }
            }

            cb.build().map_err(ConfigError::Build)
        }
    }

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self, ConfigError> {
            Self::with_setting(ClientSetting::default())
        }

        pub fn with_setting(setting: ClientSetting) -> Result<Self, ConfigError> {
            let client = setting.build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes_stream().map_ok(Bytes::from);

            Ok(HttpResponse {
                status,
                body: Box::pin(body),
            })
        }
    }

}

#[cfg(feature = "reqwest")]
pub use reqwest_client::{ClientSetting, ReqwestClient};
