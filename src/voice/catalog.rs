//! Static voice catalog and resolution.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::{Gender, ResolvedVoice, VoiceSelection, VoiceStyle};

type CatalogKey = (String, Gender, VoiceStyle);

/// Explicit catalog entries: the cross product of the default supported
/// languages with both genders and both quality tiers.
static CATALOG: Lazy<HashMap<CatalogKey, &'static str>> = Lazy::new(|| {
    let entries = [
        ("en-US", Gender::Female, VoiceStyle::Wavenet, "en-US-Wavenet-F"),
        ("en-US", Gender::Male, VoiceStyle::Wavenet, "en-US-Wavenet-D"),
        ("ru-RU", Gender::Female, VoiceStyle::Wavenet, "ru-RU-Wavenet-C"),
        ("ru-RU", Gender::Male, VoiceStyle::Wavenet, "ru-RU-Wavenet-B"),
        ("en-US", Gender::Female, VoiceStyle::Standard, "en-US-Standard-F"),
        ("en-US", Gender::Male, VoiceStyle::Standard, "en-US-Standard-D"),
        ("ru-RU", Gender::Female, VoiceStyle::Standard, "ru-RU-Standard-C"),
        ("ru-RU", Gender::Male, VoiceStyle::Standard, "ru-RU-Standard-B"),
    ];
    entries
        .into_iter()
        .map(|(language, gender, style, voice_id)| {
            ((language.to_string(), gender, style), voice_id)
        })
        .collect()
});

/// Resolve a selection to a concrete provider voice.
///
/// Total function: explicit catalog entries take precedence, and anything
/// else falls back to `{language}-Standard-D`. The fallback keeps the
/// historical shape and deliberately does not vary with the selected
/// gender; the gender still travels separately as ssmlGender.
pub fn resolve(selection: &VoiceSelection) -> ResolvedVoice {
    let key = (
        selection.language.clone(),
        selection.gender,
        selection.style,
    );
    let voice_id = CATALOG
        .get(&key)
        .map(|id| (*id).to_string())
        .unwrap_or_else(|| format!("{}-Standard-D", selection.language));

    ResolvedVoice {
        language_code: selection.language.clone(),
        voice_id,
        gender: selection.gender,
    }
}
