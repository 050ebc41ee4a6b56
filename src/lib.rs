//! # tts-lib-rust
//!
//! 云端文字转语音客户端库：音色解析与语音合成的 Rust 实现。
//!
//! Cloud text-to-speech client library for the Google Cloud TTS REST API,
//! providing deterministic voice resolution and asynchronous speech synthesis.
//!
//! ## Overview
//!
//! The library has two core pieces and a thin orchestration layer on top:
//!
//! - **Voice resolution**: a total, side-effect-free mapping from a
//!   (language, gender, style) triple to a provider voice identifier.
//!   Combinations outside the explicit catalog fall back to a deterministic
//!   default identifier, so resolution never fails.
//! - **Synthesis**: [`SynthesisClient`] builds the provider JSON request,
//!   posts it, decodes the base64 `audioContent` payload and returns raw
//!   audio bytes. One synthesis call may be in flight at a time; a second
//!   call is rejected with [`Error::AlreadyInProgress`]. Pending calls can
//!   be aborted through a [`CancelHandle`].
//! - **Session**: [`SpeechSession`] composes resolver, client and an
//!   [`AudioSink`] playback collaborator, so "speak" and "stop" are explicit
//!   operations on an object the caller owns rather than ambient state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tts_lib_rust::{Gender, SynthesisClient, VoiceSelection, VoiceStyle};
//!
//! #[tokio::main]
//! async fn main() -> tts_lib_rust::Result<()> {
//!     let client = SynthesisClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let selection = VoiceSelection::new("en-US", Gender::Female, VoiceStyle::Wavenet);
//!     let voice = tts_lib_rust::voice::resolve(&selection);
//!
//!     let audio = client.synthesize("Hello, world!", &voice).await?;
//!     println!("{} bytes of {}", audio.data.len(), audio.encoding.mime_type());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`voice`] | Voice catalog and (language, gender, style) resolution |
//! | [`synth`] | Synthesis client, wire types and cancellation |
//! | [`playback`] | Playback collaborator trait and test sinks |
//! | [`session`] | Caller-owned speak/stop session |
//! | [`config`] | API key lookup and environment knobs |

pub mod config;
pub mod playback;
pub mod session;
pub mod synth;
pub mod voice;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

// Re-export main types for convenience
pub use playback::{AudioSink, InMemorySink, NullSink, PlaybackHandle};
pub use session::{SpeechSession, SpeechSessionBuilder};
pub use synth::{
    cancel_pair, AudioEncoding, AudioOutput, CancelHandle, CancelToken, SynthesisClient,
    SynthesisClientBuilder,
};
pub use voice::{Gender, ResolvedVoice, VoiceSelection, VoiceStyle};
