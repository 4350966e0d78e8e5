//! HTTP layer: the single POST exchange.
//!
//! Sends the request and reads status plus raw body; transport failures end
//! here. Decoding and classification of the body live in helpers.rs.

use tracing::{debug, warn};

use crate::error::{RequestError, RequestResult};
use crate::types::{ApiResponse, FormParams};

use super::helpers::{classify_body, decode_body};

/// HTTP backend for making requests (holds reqwest client and base URL).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl HttpBackend {
    /// POST `fields` form-encoded to `base_url + endpoint` and classify the answer.
    ///
    /// Two fallible steps: the exchange (transport failure) then the body
    /// (parse/emptiness/status). No retries.
    pub(crate) async fn post_form(
        &self,
        endpoint: &str,
        fields: &FormParams,
    ) -> RequestResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, endpoint);

        let (status, body) = match self.exchange(&url, fields).await {
            Ok(received) => received,
            Err(e) => {
                warn!(url = %url, error = %e, timed_out = e.is_timeout(), "request failed");
                return Err(e);
            }
        };
        debug!(url = %url, status, body_len = body.len(), "response received");

        decode_body(status, body)
            .and_then(|text| classify_body(status, text))
            .inspect_err(|e| {
                warn!(
                    url = %url,
                    status,
                    kind = %e.kind(),
                    "unusable response"
                );
            })
    }

    async fn exchange(&self, url: &str, fields: &FormParams) -> RequestResult<(u16, Vec<u8>)> {
        let response = self
            .client
            .post(url)
            .form(&fields.to_pairs())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| RequestError::RequestFailed {
            timed_out: e.is_timeout(),
            message: format!("failed to read response body: {}", e),
        })?;

        Ok((status, body.to_vec()))
    }
}
