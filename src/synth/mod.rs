//! 语音合成模块：通过 Google Cloud TTS API 将文本合成为音频。
//!
//! Speech synthesis: builds the provider request, posts it and decodes the
//! base64 audio payload. One call may be in flight at a time; pending calls
//! can be aborted through a [`CancelHandle`].

mod cancel;
mod client;
mod types;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use client::{SynthesisClient, SynthesisClientBuilder};
pub use types::{
    AudioConfig, AudioEncoding, AudioOutput, SynthesisInput, SynthesisRequest, VoiceParams,
};
