//! Speech session tests: resolve → synthesize → play, stop semantics.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use mockito::{Matcher, Server, ServerGuard};
use tts_lib_rust::{
    AudioSink, Error, Gender, InMemorySink, PlaybackHandle, SpeechSession, SynthesisClient,
    VoiceSelection, VoiceStyle,
};

fn selection() -> VoiceSelection {
    VoiceSelection::new("en-US", Gender::Female, VoiceStyle::Wavenet)
}

fn client_for(server: &ServerGuard) -> SynthesisClient {
    SynthesisClient::builder()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .unwrap()
}

async fn mock_audio(server: &mut ServerGuard, payload: &str) -> mockito::Mock {
    server
        .mock("POST", "/v1/text:synthesize")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"audioContent":"{}"}}"#,
            BASE64.encode(payload)
        ))
        .create_async()
        .await
}

#[tokio::test]
async fn test_speak_delivers_audio_to_sink() {
    let mut server = Server::new_async().await;
    let mock = mock_audio(&mut server, "ABC").await;

    let sink = Arc::new(InMemorySink::new());
    let session = SpeechSession::builder()
        .client(client_for(&server))
        .sink(sink.clone())
        .build()
        .unwrap();

    let handle = session.speak("Hello", &selection()).await.unwrap();
    assert!(session.is_speaking().await);

    let played = sink.played();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].data, b"ABC".to_vec());

    session.stop().await.unwrap();
    assert!(!session.is_speaking().await);
    assert_eq!(sink.stopped(), vec![handle]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unsupported_language_is_rejected_without_network_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/text:synthesize")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let session = SpeechSession::builder()
        .client(client_for(&server))
        .sink(Arc::new(InMemorySink::new()))
        .build()
        .unwrap();

    let err = session
        .speak("Bonjour", &VoiceSelection::new("fr-FR", Gender::Male, VoiceStyle::Standard))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_widened_language_set_resolves_through_fallback() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/text:synthesize")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "voice": { "name": "fr-FR-Standard-D" }
        })))
        .with_status(200)
        .with_body(format!(r#"{{"audioContent":"{}"}}"#, BASE64.encode("oui")))
        .create_async()
        .await;

    let session = SpeechSession::builder()
        .client(client_for(&server))
        .sink(Arc::new(InMemorySink::new()))
        .supported_languages(vec!["fr-FR".to_string()])
        .build()
        .unwrap();

    session
        .speak("Bonjour", &VoiceSelection::new("fr-FR", Gender::Male, VoiceStyle::Standard))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stop_cancels_pending_synthesis() {
    let mut server = Server::new_async().await;
    let body = format!(r#"{{"audioContent":"{}"}}"#, BASE64.encode("late"));
    server
        .mock("POST", "/v1/text:synthesize")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_chunked_body(move |w| {
            std::thread::sleep(Duration::from_millis(500));
            w.write_all(body.as_bytes())
        })
        .create_async()
        .await;

    let sink = Arc::new(InMemorySink::new());
    let session = Arc::new(
        SpeechSession::builder()
            .client(client_for(&server))
            .sink(sink.clone())
            .build()
            .unwrap(),
    );

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.speak("Hello", &selection()).await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(session.is_speaking().await);
    session.stop().await.unwrap();

    let err = pending.await.unwrap().unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert!(sink.played().is_empty());
    assert!(!session.is_speaking().await);
}

#[tokio::test]
async fn test_second_speak_while_pending_is_rejected() {
    let mut server = Server::new_async().await;
    let body = format!(r#"{{"audioContent":"{}"}}"#, BASE64.encode("slow"));
    server
        .mock("POST", "/v1/text:synthesize")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_chunked_body(move |w| {
            std::thread::sleep(Duration::from_millis(300));
            w.write_all(body.as_bytes())
        })
        .expect_at_least(1)
        .create_async()
        .await;

    let session = Arc::new(
        SpeechSession::builder()
            .client(client_for(&server))
            .sink(Arc::new(InMemorySink::new()))
            .build()
            .unwrap(),
    );

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.speak("Hello", &selection()).await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    let err = session.speak("again", &selection()).await.unwrap_err();
    assert!(matches!(err, Error::AlreadyInProgress));

    assert!(first.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_new_speak_stops_previous_playback() {
    let mut server = Server::new_async().await;
    mock_audio(&mut server, "one").await;

    let sink = Arc::new(InMemorySink::new());
    let session = SpeechSession::builder()
        .client(client_for(&server))
        .sink(sink.clone())
        .build()
        .unwrap();

    let first = session.speak("first", &selection()).await.unwrap();
    let second = session.speak("second", &selection()).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(sink.stopped(), vec![first]);
    assert_eq!(sink.played().len(), 2);
}

struct FailingSink;

#[async_trait]
impl AudioSink for FailingSink {
    async fn play(&self, _audio: tts_lib_rust::AudioOutput) -> tts_lib_rust::Result<PlaybackHandle> {
        Err(Error::playback("speaker unavailable"))
    }

    async fn stop(&self, _handle: PlaybackHandle) -> tts_lib_rust::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_sink_failure_surfaces_as_playback_error() {
    let mut server = Server::new_async().await;
    mock_audio(&mut server, "ABC").await;

    let session = SpeechSession::builder()
        .client(client_for(&server))
        .sink(Arc::new(FailingSink))
        .build()
        .unwrap();

    let err = session.speak("Hello", &selection()).await.unwrap_err();
    assert!(matches!(err, Error::Playback { .. }));
    assert!(!session.is_speaking().await);
}
