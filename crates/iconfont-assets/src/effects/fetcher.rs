use futures_util::TryStreamExt;
use tracing::debug;

use crate::data::{AssetEndpoints, IconIndexResponse};
use crate::error::{Result, TransportError, TransportPhase};
use crate::effects::http::{HttpClient, HttpResponse};

/// Performs the index lookup and the asset download over one shared client.
///
/// Every call makes exactly one request. Status codes are logged but never
/// turned into errors.
pub struct Fetcher<C: HttpClient> {
    client: C,
    endpoints: AssetEndpoints,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, endpoints: AssetEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn endpoints(&self) -> &AssetEndpoints {
        &self.endpoints
    }

    /// Fetch and decode the index for `version`.
    pub async fn fetch_index(&self, version: &str) -> Result<IconIndexResponse> {
        let url = self.endpoints.index_url(version);
        let response = self.request(&url).await?;

        let body = response
            .body
            .try_fold(Vec::new(), |mut buf, chunk| async move {
                buf.extend_from_slice(&chunk);
                Ok::<_, C::Error>(buf)
            })
            .await
            .map_err(|e| TransportError::new(&url, TransportPhase::Body, e))?;

        debug!(url = %url, status = response.status, bytes = body.len(), "index received");

        serde_json::from_slice(&body)
            .map_err(|e| TransportError::new(&url, TransportPhase::Decode, e))
    }

    /// Download `url` and drop the body.
    pub async fn download_asset(&self, url: &str) -> Result<()> {
        let response = self.request(url).await?;

        let bytes = response
            .body
            .try_fold(0u64, |n, chunk| async move { Ok::<_, C::Error>(n + chunk.len() as u64) })
            .await
            .map_err(|e| TransportError::new(url, TransportPhase::Body, e))?;

        debug!(url = %url, status = response.status, bytes, "asset received and discarded");
        Ok(())
    }

    async fn request(&self, url: &str) -> Result<HttpResponse<C::Error>> {
        debug!(url = %url, "GET");
        self.client
            .get(url)
            .await
            .map_err(|e| TransportError::new(url, TransportPhase::Request, e))
    }
}
