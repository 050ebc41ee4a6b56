//! Synthesis wire types and audio output.

use serde::Serialize;

use crate::voice::ResolvedVoice;

/// Audio container requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AudioEncoding {
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "OGG_OPUS")]
    OggOpus,
}

impl AudioEncoding {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Linear16 => "audio/wav",
            Self::OggOpus => "audio/ogg",
        }
    }
}

impl Default for AudioEncoding {
    fn default() -> Self {
        Self::Mp3
    }
}

/// Decoded audio returned by a synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOutput {
    pub data: Vec<u8>,
    pub encoding: AudioEncoding,
}

/// Request body for `POST /v1/text:synthesize`.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub input: SynthesisInput,
    pub voice: VoiceParams,
    #[serde(rename = "audioConfig")]
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceParams {
    pub language_code: String,
    pub name: String,
    pub ssml_gender: crate::voice::Gender,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, voice: &ResolvedVoice, encoding: AudioEncoding) -> Self {
        Self {
            input: SynthesisInput { text: text.into() },
            voice: VoiceParams {
                language_code: voice.language_code.clone(),
                name: voice.voice_id.clone(),
                ssml_gender: voice.gender,
            },
            audio_config: AudioConfig {
                audio_encoding: encoding,
            },
        }
    }
}
