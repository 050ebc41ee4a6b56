//! Synthesis client.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use uuid::Uuid;

use super::cancel::{cancel_pair, CancelToken};
use super::types::{AudioEncoding, AudioOutput, SynthesisRequest};
use crate::voice::ResolvedVoice;
use crate::{config, Error, ErrorContext, Result};

/// Client for cloud speech synthesis.
///
/// Holds a single in-flight permit: a second `synthesize` call while one is
/// pending is rejected with [`Error::AlreadyInProgress`] rather than queued.
pub struct SynthesisClient {
    http_client: reqwest::Client,
    base_url: String,
    endpoint_path: String,
    api_key: String,
    encoding: AudioEncoding,
    inflight: Arc<Semaphore>,
}

impl SynthesisClient {
    pub fn builder() -> SynthesisClientBuilder {
        SynthesisClientBuilder::new()
    }

    /// Synthesize `text` with the given voice and return the decoded audio.
    ///
    /// Suspends on network I/O; no retry, no caching. The call cannot be
    /// aborted — use [`Self::synthesize_with_cancel`] for that.
    pub async fn synthesize(&self, text: &str, voice: &ResolvedVoice) -> Result<AudioOutput> {
        let (_handle, token) = cancel_pair();
        self.synthesize_with_cancel(text, voice, token).await
    }

    /// Synthesize `text`, aborting with [`Error::Cancelled`] if the linked
    /// [`crate::CancelHandle`] fires while the request is pending.
    pub async fn synthesize_with_cancel(
        &self,
        text: &str,
        voice: &ResolvedVoice,
        mut cancel: CancelToken,
    ) -> Result<AudioOutput> {
        if text.is_empty() {
            return Err(Error::validation_with_context(
                "Synthesis text must not be empty",
                ErrorContext::new()
                    .with_field_path("request.input.text")
                    .with_source("synthesis_client"),
            ));
        }

        // Acquired before any network work and released on every exit path,
        // so completion and the in-flight state cannot race.
        let _permit = self
            .inflight
            .clone()
            .try_acquire_owned()
            .map_err(|_| Error::AlreadyInProgress)?;

        let request_id = Uuid::new_v4();
        debug!(voice = %voice.voice_id, %request_id, "dispatching synthesis request");

        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(%request_id, "synthesis cancelled");
                Err(Error::Cancelled)
            }
            result = self.execute(text, voice, request_id) => result,
        }
    }

    async fn execute(
        &self,
        text: &str,
        voice: &ResolvedVoice,
        request_id: Uuid,
    ) -> Result<AudioOutput> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path);
        let body = SynthesisRequest::new(text, voice, self.encoding);

        // Provider contract: the key travels as a query parameter. Known to
        // leak into proxy logs; use restricted, short-lived keys.
        let response = self
            .http_client
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .header("x-request-id", request_id.to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(%request_id, "synthesis transport failure: {e}");
                Error::transport_with_context(
                    format!("Synthesis request failed: {}", e),
                    ErrorContext::new().with_source("synthesis_client"),
                )
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            Error::transport_with_context(
                format!("Failed to read synthesis response: {}", e),
                ErrorContext::new().with_source("synthesis_client"),
            )
        })?;

        if !status.is_success() {
            let snippet: String = raw.chars().take(200).collect();
            return Err(Error::transport_with_context(
                format!("Synthesis API error ({})", status),
                ErrorContext::new().with_details(snippet),
            ));
        }

        let json: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            Error::malformed_with_context(
                format!("Response body is not valid JSON: {}", e),
                ErrorContext::new().with_source("synthesis_client"),
            )
        })?;

        let audio_b64 = json
            .get("audioContent")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                Error::malformed_with_context(
                    "Response is missing the audioContent field",
                    ErrorContext::new().with_field_path("audioContent"),
                )
            })?;

        let data = BASE64.decode(audio_b64).map_err(|e| {
            Error::malformed_with_context(
                format!("audioContent is not valid base64: {}", e),
                ErrorContext::new().with_field_path("audioContent"),
            )
        })?;

        debug!(%request_id, bytes = data.len(), "synthesis complete");
        Ok(AudioOutput {
            data,
            encoding: self.encoding,
        })
    }

    /// Whether a synthesis call is currently pending.
    pub fn in_flight(&self) -> bool {
        self.inflight.available_permits() == 0
    }

    pub fn encoding(&self) -> AudioEncoding {
        self.encoding
    }
}

pub struct SynthesisClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    endpoint_path: Option<String>,
    encoding: AudioEncoding,
    timeout: Option<std::time::Duration>,
}

impl SynthesisClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            endpoint_path: None,
            encoding: AudioEncoding::Mp3,
            timeout: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }

    pub fn encoding(mut self, encoding: AudioEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SynthesisClient> {
        let api_key = self
            .api_key
            .or_else(|| config::lookup_api_key("google"))
            .ok_or_else(|| Error::configuration("API key required"))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| "https://texttospeech.googleapis.com".to_string());
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| "/v1/text:synthesize".to_string());
        let endpoint_path = if endpoint_path.starts_with('/') {
            endpoint_path
        } else {
            format!("/{}", endpoint_path)
        };

        let mut http_builder =
            reqwest::Client::builder().timeout(self.timeout.unwrap_or_else(config::http_timeout));
        if let Some(proxy_url) = config::proxy_url() {
            if let Ok(proxy) = reqwest::Proxy::all(&proxy_url) {
                http_builder = http_builder.proxy(proxy);
            }
        }
        let http_client = http_builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(SynthesisClient {
            http_client,
            base_url,
            endpoint_path,
            api_key,
            encoding: self.encoding,
            inflight: Arc::new(Semaphore::new(1)),
        })
    }
}

impl Default for SynthesisClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
