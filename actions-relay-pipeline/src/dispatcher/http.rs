use std::time::Duration;

use actions_relay_codec::raw_action_calldata;
use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::dispatcher::DispatchAction;
use crate::errors::DispatchError;

/// Bytes of a rejection body kept for the failure note.
const MAX_REJECTION_BODY_LEN: usize = 1024;

/// Body posted to the receiver endpoint.
#[derive(Debug, Serialize)]
struct RawActionCall {
    to: Address,
    data: Bytes,
}

/// Forwards payloads to a receiver endpoint over HTTP.
///
/// Each payload is wrapped into `sendRawAction` calldata and posted as
/// `{"to": <receiver>, "data": <calldata>}`. Transport failures and non-2xx
/// statuses are faults; the response body is otherwise ignored.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    endpoint: String,
    receiver: Address,
}

impl HttpDispatcher {
    /// Creates a dispatcher posting to `endpoint` on behalf of `receiver`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL accepting the call body
    /// * `receiver` - Address the calldata is addressed to
    /// * `timeout` - Upper bound for a whole request
    pub fn new(
        endpoint: impl Into<String>,
        receiver: Address,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            receiver,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DispatchAction for HttpDispatcher {
    async fn dispatch(&self, payload: &Bytes) -> Result<(), DispatchError> {
        let call = RawActionCall {
            to: self.receiver,
            data: raw_action_calldata(payload),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&call)
            .send()
            .await
            .map_err(|e| DispatchError::unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body: read_body_prefix(response).await,
            });
        }

        debug!(endpoint = %self.endpoint, status = status.as_u16(), "Payload forwarded");
        Ok(())
    }
}

/// Reads at most `MAX_REJECTION_BODY_LEN` bytes of the response body.
async fn read_body_prefix(mut response: reqwest::Response) -> String {
    let mut body = Vec::new();
    while body.len() < MAX_REJECTION_BODY_LEN {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(err) => return format!("unreadable response body: {err}"),
        }
    }
    body.truncate(MAX_REJECTION_BODY_LEN);
    String::from_utf8_lossy(&body).into_owned()
}
