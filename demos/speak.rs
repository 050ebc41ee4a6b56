//! Synthesize a phrase and write the MP3 to disk.
//!
//! Usage:
//!   GOOGLE_TTS_API_KEY=... cargo run --example speak -- "Hello, world!"

use tts_lib_rust::{voice, Gender, SynthesisClient, VoiceSelection, VoiceStyle};

#[tokio::main]
async fn main() -> tts_lib_rust::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello from tts-lib-rust!".to_string());

    let client = SynthesisClient::builder().build()?;

    let selection = VoiceSelection::new("en-US", Gender::Female, VoiceStyle::Wavenet);
    let resolved = voice::resolve(&selection);
    println!("Synthesizing with voice {}", resolved.voice_id);

    let audio = client.synthesize(&text, &resolved).await?;
    let path = "speech.mp3";
    if let Err(e) = std::fs::write(path, &audio.data) {
        eprintln!("Failed to write {path}: {e}");
        std::process::exit(1);
    }
    println!("Wrote {} bytes ({}) to {path}", audio.data.len(), audio.encoding.mime_type());
    Ok(())
}
