//! 配置模块：API Key 查找与环境变量开关。
//!
//! API key lookup and environment knobs. Secrets are injected, never
//! hardcoded: resolution order is explicit builder value, then the OS
//! keyring, then the environment.

use keyring::Entry;
use std::env;
use std::time::Duration;

/// Keyring service name under which keys are stored.
const KEYRING_SERVICE: &str = "tts-lib";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "GOOGLE_TTS_API_KEY";

/// Default language set accepted by a session. Callers can widen this
/// through [`crate::session::SpeechSessionBuilder::supported_languages`].
pub const DEFAULT_SUPPORTED_LANGUAGES: &[&str] = &["en-US", "ru-RU"];

/// Look up the API key for a provider.
///
/// 1. Try the OS keyring (service "tts-lib", account = provider id)
/// 2. Try the environment variable `GOOGLE_TTS_API_KEY`
pub fn lookup_api_key(provider_id: &str) -> Option<String> {
    if let Ok(entry) = Entry::new(KEYRING_SERVICE, provider_id) {
        if let Ok(key) = entry.get_password() {
            return Some(key);
        }
    }

    env::var(API_KEY_ENV).ok()
}

/// HTTP timeout for synthesis calls, env-overridable via
/// `TTS_HTTP_TIMEOUT_SECS`. Defaults to 30 seconds.
pub fn http_timeout() -> Duration {
    let secs = env::var("TTS_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}

/// Optional proxy URL for outbound requests (`TTS_PROXY_URL`).
pub fn proxy_url() -> Option<String> {
    env::var("TTS_PROXY_URL").ok()
}
