//! 会话模块：由调用方持有的 speak/stop 会话对象。
//!
//! A caller-owned session composing voice resolution, synthesis and
//! playback. It replaces ambient "is speaking" state with an explicit
//! object: `speak` runs the full resolve → synthesize → play pipeline and
//! `stop` aborts a pending synthesis call as well as active playback.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::config::DEFAULT_SUPPORTED_LANGUAGES;
use crate::playback::{AudioSink, PlaybackHandle};
use crate::synth::{cancel_pair, CancelHandle, SynthesisClient};
use crate::voice::{self, VoiceSelection};
use crate::{Error, ErrorContext, Result};

#[derive(Default)]
struct ActiveState {
    cancel: Option<CancelHandle>,
    playing: Option<PlaybackHandle>,
}

/// One logical speaking session.
///
/// A second `speak` while one is pending is rejected with
/// [`Error::AlreadyInProgress`]; starting a new utterance while audio is
/// still playing stops the old playback first.
pub struct SpeechSession {
    client: SynthesisClient,
    sink: Arc<dyn AudioSink>,
    supported_languages: Vec<String>,
    active: Mutex<ActiveState>,
}

impl SpeechSession {
    pub fn builder() -> SpeechSessionBuilder {
        SpeechSessionBuilder::new()
    }

    /// Speak `text` with the given voice selection.
    ///
    /// Returns the playback handle once audio has been handed to the sink.
    pub async fn speak(&self, text: &str, selection: &VoiceSelection) -> Result<PlaybackHandle> {
        if !self
            .supported_languages
            .iter()
            .any(|l| l == &selection.language)
        {
            return Err(Error::validation_with_context(
                format!("Unsupported language: {}", selection.language),
                ErrorContext::new()
                    .with_field_path("selection.language")
                    .with_source("session"),
            ));
        }

        let resolved = voice::resolve(selection);
        let (handle, token) = cancel_pair();

        {
            let mut active = self.active.lock().await;
            if active.cancel.is_some() {
                return Err(Error::AlreadyInProgress);
            }
            if let Some(playing) = active.playing.take() {
                self.sink.stop(playing).await?;
            }
            active.cancel = Some(handle.clone());
        }

        let audio = match self
            .client
            .synthesize_with_cancel(text, &resolved, token)
            .await
        {
            Ok(audio) => audio,
            Err(e) => {
                self.active.lock().await.cancel = None;
                return Err(e);
            }
        };

        info!(voice = %resolved.voice_id, bytes = audio.data.len(), "starting playback");
        let playback = self.sink.play(audio).await;
        let mut active = self.active.lock().await;
        active.cancel = None;
        match playback {
            Ok(playing) => {
                active.playing = Some(playing);
                Ok(playing)
            }
            Err(e) => Err(e),
        }
    }

    /// Stop the session: abort a pending synthesis call and stop active
    /// playback. A no-op when nothing is active.
    pub async fn stop(&self) -> Result<()> {
        let mut active = self.active.lock().await;
        if let Some(cancel) = active.cancel.take() {
            cancel.cancel();
        }
        if let Some(playing) = active.playing.take() {
            self.sink.stop(playing).await?;
        }
        Ok(())
    }

    /// Whether a synthesis call is pending or a playback handle is live.
    /// Playback counts as live until `stop` or the next `speak`.
    pub async fn is_speaking(&self) -> bool {
        if self.client.in_flight() {
            return true;
        }
        let active = self.active.lock().await;
        active.cancel.is_some() || active.playing.is_some()
    }

    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }
}

pub struct SpeechSessionBuilder {
    client: Option<SynthesisClient>,
    sink: Option<Arc<dyn AudioSink>>,
    supported_languages: Vec<String>,
}

impl SpeechSessionBuilder {
    pub fn new() -> Self {
        Self {
            client: None,
            sink: None,
            supported_languages: DEFAULT_SUPPORTED_LANGUAGES
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }

    pub fn client(mut self, client: SynthesisClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn AudioSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn supported_languages(mut self, languages: Vec<String>) -> Self {
        self.supported_languages = languages;
        self
    }

    pub fn build(self) -> Result<SpeechSession> {
        let client = self
            .client
            .ok_or_else(|| Error::configuration("Synthesis client required"))?;
        let sink = self
            .sink
            .ok_or_else(|| Error::configuration("Audio sink required"))?;
        if self.supported_languages.is_empty() {
            return Err(Error::configuration(
                "Supported language set must not be empty",
            ));
        }
        Ok(SpeechSession {
            client,
            sink,
            supported_languages: self.supported_languages,
            active: Mutex::new(ActiveState::default()),
        })
    }
}

impl Default for SpeechSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
