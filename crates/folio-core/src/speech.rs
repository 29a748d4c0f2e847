//! Speech capability boundaries.
//!
//! The engine consumes recognition and synthesis as external
//! capabilities behind the [`Recognizer`] and [`Synthesizer`] traits;
//! the locale tag is forwarded to them unchanged. Two invariants of
//! the voice surface live here:
//!
//! - **Final-only dispatch** — [`TranscriptGate`] accumulates interim
//!   transcripts for live display and releases an utterance only on a
//!   final event, so a recognition session triggers exactly one
//!   dispatch. Stopping mid-utterance discards pending interim text.
//! - **At-most-one utterance** — [`Speaker`] cancels any in-flight
//!   utterance before speaking a new one; responses are never queued.

use anyhow::Result;

/// One recognition event, interim or final.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
    pub is_final: bool,
    pub confidence: f32,
}

/// Recognition failure codes, mapped to fixed user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionError {
    NoSpeech,
    PermissionDenied,
    Network,
    /// Explicit user stop. Suppressed, never surfaced.
    Aborted,
}

impl RecognitionError {
    /// The notification text for this error, or `None` when it should
    /// be silently suppressed.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            RecognitionError::NoSpeech => {
                Some("I didn't catch that. Please try speaking again.")
            }
            RecognitionError::PermissionDenied => {
                Some("Microphone access is blocked. Please allow it and retry.")
            }
            RecognitionError::Network => {
                Some("The speech service is unreachable. Check your connection.")
            }
            RecognitionError::Aborted => None,
        }
    }
}

/// Speech-to-text capability, consumed by the voice surface.
pub trait Recognizer {
    /// Begin listening. The locale tag is passed through unchanged.
    fn start(&mut self, locale: &str) -> Result<()>;

    /// Stop listening. Any pending interim transcript must be
    /// discarded by the caller via [`TranscriptGate::discard`].
    fn stop(&mut self);
}

/// Text-to-speech capability, consumed by the voice surface.
pub trait Synthesizer {
    fn speak(&mut self, text: &str, locale: &str);
    fn cancel(&mut self);
}

/// Gate between raw recognition events and the dispatcher.
#[derive(Debug, Default)]
pub struct TranscriptGate {
    interim: Option<String>,
}

impl TranscriptGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one recognition event. Returns the utterance to dispatch
    /// only for final events; interim events update the live display
    /// text and return `None`.
    pub fn accept(&mut self, event: Transcript) -> Option<String> {
        if event.is_final {
            self.interim = None;
            Some(event.text)
        } else {
            self.interim = Some(event.text);
            None
        }
    }

    /// The latest interim text, for a live display.
    pub fn interim(&self) -> Option<&str> {
        self.interim.as_deref()
    }

    /// Drop any pending interim transcript without dispatching
    /// (user stop, recognition error).
    pub fn discard(&mut self) {
        self.interim = None;
    }
}

/// Wraps a [`Synthesizer`] and enforces the at-most-one-utterance
/// policy: the visitor always hears only the most recent response.
pub struct Speaker {
    synth: Box<dyn Synthesizer>,
    locale: String,
}

impl Speaker {
    pub fn new(synth: Box<dyn Synthesizer>, locale: impl Into<String>) -> Self {
        Self {
            synth,
            locale: locale.into(),
        }
    }

    /// Speak `text`, cancelling any in-flight utterance first.
    /// Utterances are never queued.
    pub fn say(&mut self, text: &str) {
        self.synth.cancel();
        self.synth.speak(text, &self.locale);
    }

    /// Stop speaking without starting a new utterance.
    pub fn stop(&mut self) {
        self.synth.cancel();
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}
