//! 播放模块：将合成的音频交给外部播放协作者。
//!
//! Playback collaborator interface. The core never decodes or buffers
//! audio; it hands encoded bytes to an [`AudioSink`] and keeps the returned
//! handle so the session can stop playback later. The sinks shipped here
//! exist for wiring and tests — real applications plug in their platform
//! player.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::synth::AudioOutput;
use crate::Result;

/// Identifies one playback started through [`AudioSink::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackHandle(pub u64);

/// Destination for synthesized audio.
///
/// Implementations must accept encoded bytes in the format advertised by
/// [`AudioOutput::encoding`] and report failures through
/// [`crate::Error::Playback`] instead of swallowing them.
#[async_trait]
pub trait AudioSink: Send + Sync {
    async fn play(&self, audio: AudioOutput) -> Result<PlaybackHandle>;
    async fn stop(&self, handle: PlaybackHandle) -> Result<()>;
}

/// Discards audio. Useful for headless runs and wiring tests.
pub struct NullSink {
    next_handle: AtomicU64,
}

impl NullSink {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicU64::new(1),
        }
    }
}

impl Default for NullSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSink for NullSink {
    async fn play(&self, _audio: AudioOutput) -> Result<PlaybackHandle> {
        Ok(PlaybackHandle(
            self.next_handle.fetch_add(1, Ordering::Relaxed),
        ))
    }

    async fn stop(&self, _handle: PlaybackHandle) -> Result<()> {
        Ok(())
    }
}

/// Records played buffers in memory for test assertions.
pub struct InMemorySink {
    played: RwLock<Vec<AudioOutput>>,
    stopped: RwLock<Vec<PlaybackHandle>>,
    next_handle: AtomicU64,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            played: RwLock::new(Vec::new()),
            stopped: RwLock::new(Vec::new()),
            next_handle: AtomicU64::new(1),
        }
    }

    pub fn played(&self) -> Vec<AudioOutput> {
        self.played.read().unwrap().clone()
    }

    pub fn stopped(&self) -> Vec<PlaybackHandle> {
        self.stopped.read().unwrap().clone()
    }
}

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSink for InMemorySink {
    async fn play(&self, audio: AudioOutput) -> Result<PlaybackHandle> {
        self.played.write().unwrap().push(audio);
        Ok(PlaybackHandle(
            self.next_handle.fetch_add(1, Ordering::Relaxed),
        ))
    }

    async fn stop(&self, handle: PlaybackHandle) -> Result<()> {
        self.stopped.write().unwrap().push(handle);
        Ok(())
    }
}
