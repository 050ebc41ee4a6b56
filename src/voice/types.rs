//! Voice selection types.

use serde::Serialize;

/// The synthesis provider's voice-gender tag (ssmlGender on the wire),
/// distinct from any speaker's actual identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "FEMALE",
            Self::Male => "MALE",
        }
    }
}

/// Synthesis voice quality tier offered by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceStyle {
    Standard,
    Wavenet,
}

impl VoiceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Wavenet => "Wavenet",
        }
    }
}

/// A user's voice choice: language tag plus gender and quality tier.
///
/// Construction does not validate the language; sessions check it against
/// their configured supported set before any network work.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoiceSelection {
    pub language: String,
    pub gender: Gender,
    pub style: VoiceStyle,
}

impl VoiceSelection {
    pub fn new(language: impl Into<String>, gender: Gender, style: VoiceStyle) -> Self {
        Self {
            language: language.into(),
            gender,
            style,
        }
    }
}

/// A concrete provider voice, derived deterministically from a
/// [`VoiceSelection`] by [`crate::voice::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVoice {
    pub language_code: String,
    pub voice_id: String,
    pub gender: Gender,
}
