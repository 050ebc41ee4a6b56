//! 音色模块：将（语言、性别、风格）组合解析为具体的 Provider 音色标识。
//!
//! Voice catalog: resolves a (language, gender, style) selection to a
//! concrete provider voice identifier. Resolution is total — unknown
//! combinations fall back to a deterministic default instead of failing.

mod catalog;
mod types;

pub use catalog::resolve;
pub use types::{Gender, ResolvedVoice, VoiceSelection, VoiceStyle};
