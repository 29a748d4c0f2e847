//! Session state: conversation context and command history.
//!
//! One [`Session`] is shared by all three input surfaces (search bar,
//! chat panel, voice panel) and is the sole writer of both rings —
//! mutation only ever happens as part of a completed dispatch call,
//! so there is no concurrent-writer scenario to arbitrate. A host
//! that drives surfaces from multiple threads must serialize dispatch
//! calls itself.

use std::collections::VecDeque;

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::host::Host;
use crate::intent::{self, Outcome};
use crate::models::{ActionKind, CommandRecord};
use crate::speech::{RecognitionError, Speaker, Transcript, TranscriptGate};

/// Default capacity of the conversation-context ring.
pub const DEFAULT_CONTEXT_CAP: usize = 8;

/// Default capacity of the command-history ring.
pub const DEFAULT_HISTORY_CAP: usize = 20;

/// Bounded rolling log of topic tags, appended every time an intent
/// fires and read by the rules to disambiguate follow-up utterances.
/// No dedup: repeated tags accumulate; the oldest is dropped on
/// overflow.
#[derive(Debug)]
pub struct ConversationContext {
    tags: VecDeque<&'static str>,
    cap: usize,
}

impl ConversationContext {
    pub fn new(cap: usize) -> Self {
        Self {
            tags: VecDeque::with_capacity(cap),
            cap: cap.max(1),
        }
    }

    pub fn append(&mut self, tag: &'static str) {
        if self.tags.len() == self.cap {
            self.tags.pop_front();
        }
        self.tags.push_back(tag);
    }

    pub fn most_recent(&self) -> Option<&'static str> {
        self.tags.back().copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Only called on explicit session reset, never by the ring
    /// itself.
    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_CAP)
    }
}

/// Fixed-capacity ring of executed commands, most recent last.
/// Records are never mutated; the whole ring is cleared only by an
/// explicit "clear history" action.
#[derive(Debug)]
pub struct CommandHistory {
    records: VecDeque<CommandRecord>,
    cap: usize,
}

impl CommandHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(cap),
            cap: cap.max(1),
        }
    }

    pub fn record(&mut self, utterance: &str, response: &str, action: Option<ActionKind>) {
        if self.records.len() == self.cap {
            self.records.pop_front();
        }
        self.records.push_back(CommandRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            utterance: utterance.to_string(),
            response: response.to_string(),
            action,
        });
    }

    /// Records in reverse-chronological order, for display.
    pub fn iter_recent(&self) -> impl Iterator<Item = &CommandRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

/// One assistant session: context, history, and the transcript gate
/// for the voice surface.
pub struct Session {
    pub context: ConversationContext,
    pub history: CommandHistory,
    pub auto_speak: bool,
    gate: TranscriptGate,
}

impl Session {
    pub fn new(context_cap: usize, history_cap: usize) -> Self {
        Self {
            context: ConversationContext::new(context_cap),
            history: CommandHistory::new(history_cap),
            auto_speak: false,
            gate: TranscriptGate::new(),
        }
    }

    /// Run the full dispatch pipeline for one utterance: classify,
    /// execute the side effect, append the context tag, record
    /// history, and (when auto-speak is on) hand the response to the
    /// speaker.
    pub fn dispatch(
        &mut self,
        utterance: &str,
        catalog: &Catalog,
        host: &mut dyn Host,
        speaker: Option<&mut Speaker>,
    ) -> Outcome {
        let outcome = intent::dispatch(utterance, &self.context, catalog, host);
        if let Some(tag) = outcome.context_tag {
            self.context.append(tag);
        }
        self.history
            .record(utterance, &outcome.response, outcome.action);
        if self.auto_speak {
            if let Some(speaker) = speaker {
                speaker.say(&outcome.response);
            }
        }
        outcome
    }

    /// Feed one recognition event from the voice surface. Dispatches
    /// only on final transcripts; interim events are held for display.
    pub fn on_transcript(
        &mut self,
        event: Transcript,
        catalog: &Catalog,
        host: &mut dyn Host,
        speaker: Option<&mut Speaker>,
    ) -> Option<Outcome> {
        let utterance = self.gate.accept(event)?;
        Some(self.dispatch(&utterance, catalog, host, speaker))
    }

    /// Latest interim transcript text, for a live display.
    pub fn interim_transcript(&self) -> Option<&str> {
        self.gate.interim()
    }

    /// Handle a recognition failure: the pending utterance is
    /// discarded (never retried), session state is left untouched,
    /// and the fixed notification text is returned — `None` for an
    /// explicit user abort, which is silently suppressed.
    pub fn on_recognition_error(&mut self, err: RecognitionError) -> Option<&'static str> {
        self.gate.discard();
        err.user_message()
    }

    /// Explicit session reset ("new chat", assistant deactivation).
    pub fn reset(&mut self) {
        self.context.clear();
        self.history.clear();
        self.gate.discard();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_CAP, DEFAULT_HISTORY_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::test_support::RecordingHost;
    use crate::speech::Synthesizer;

    #[test]
    fn context_ring_evicts_oldest_fifo() {
        let mut ctx = ConversationContext::new(3);
        ctx.append("projects");
        ctx.append("skills");
        ctx.append("blog");
        ctx.append("contact");
        assert_eq!(ctx.len(), 3);
        assert!(!ctx.contains("projects"));
        assert_eq!(ctx.most_recent(), Some("contact"));
    }

    #[test]
    fn context_allows_repeats() {
        let mut ctx = ConversationContext::new(4);
        ctx.append("projects");
        ctx.append("projects");
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn history_ring_evicts_oldest_fifo() {
        let mut history = CommandHistory::new(20);
        for i in 0..25 {
            history.record(&format!("utterance {i}"), "ok", None);
        }
        assert_eq!(history.len(), 20);
        let newest = history.iter_recent().next().unwrap();
        assert_eq!(newest.utterance, "utterance 24");
        let oldest = history.iter_recent().last().unwrap();
        assert_eq!(oldest.utterance, "utterance 5");
    }

    #[test]
    fn dispatch_appends_context_and_history() {
        let catalog = Catalog::sample();
        let mut session = Session::default();
        let mut host = RecordingHost::default();
        session.dispatch("show projects", &catalog, &mut host, None);
        assert_eq!(session.context.most_recent(), Some("projects"));
        assert_eq!(session.history.len(), 1);

        // Follow-up disambiguated by the rolling context.
        let outcome = session.dispatch("tell me more", &catalog, &mut host, None);
        assert_eq!(outcome.rule, "context-fallback");
        assert!(outcome.response.contains("projects"));
        assert_eq!(session.history.len(), 2);
    }

    #[test]
    fn fallback_still_records_history() {
        let catalog = Catalog::sample();
        let mut session = Session::default();
        let mut host = RecordingHost::default();
        session.dispatch("xyz nonsense", &catalog, &mut host, None);
        assert_eq!(session.history.len(), 1);
        let record = session.history.iter_recent().next().unwrap();
        assert_eq!(record.action, None);
        assert!(record.response.contains("xyz nonsense"));
    }

    #[test]
    fn interim_events_never_dispatch() {
        let catalog = Catalog::sample();
        let mut session = Session::default();
        let mut host = RecordingHost::default();

        let events = [
            Transcript { text: "show proj".into(), is_final: false, confidence: 0.3 },
            Transcript { text: "show projects".into(), is_final: false, confidence: 0.5 },
            Transcript { text: "show projects".into(), is_final: true, confidence: 0.9 },
        ];
        let mut dispatched = 0;
        for event in events {
            if session.on_transcript(event, &catalog, &mut host, None).is_some() {
                dispatched += 1;
            }
        }
        assert_eq!(dispatched, 1);
        assert_eq!(session.history.len(), 1);
        assert_eq!(host.views.len(), 1);
    }

    #[test]
    fn recognition_error_leaves_state_untouched() {
        let catalog = Catalog::sample();
        let mut session = Session::default();
        let mut host = RecordingHost::default();
        session.dispatch("show projects", &catalog, &mut host, None);

        session.on_transcript(
            Transcript { text: "half an utt".into(), is_final: false, confidence: 0.2 },
            &catalog,
            &mut host,
            None,
        );
        let msg = session.on_recognition_error(RecognitionError::Network);
        assert!(msg.is_some());
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.context.len(), 1);
        assert_eq!(session.interim_transcript(), None);

        assert_eq!(session.on_recognition_error(RecognitionError::Aborted), None);
    }

    #[test]
    fn auto_speak_hands_response_to_speaker() {
        struct CaptureSynth(std::rc::Rc<std::cell::RefCell<Vec<String>>>);
        impl Synthesizer for CaptureSynth {
            fn speak(&mut self, text: &str, _locale: &str) {
                self.0.borrow_mut().push(text.to_string());
            }
            fn cancel(&mut self) {}
        }

        let spoken = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut speaker = Speaker::new(Box::new(CaptureSynth(spoken.clone())), "en-US");

        let catalog = Catalog::sample();
        let mut session = Session::default();
        session.auto_speak = true;
        let mut host = RecordingHost::default();

        let outcome = session.dispatch("show skills", &catalog, &mut host, Some(&mut speaker));
        assert_eq!(spoken.borrow().len(), 1);
        assert_eq!(spoken.borrow()[0], outcome.response);
    }

    #[test]
    fn reset_clears_both_rings() {
        let catalog = Catalog::sample();
        let mut session = Session::default();
        let mut host = RecordingHost::default();
        session.dispatch("show projects", &catalog, &mut host, None);
        session.reset();
        assert!(session.context.is_empty());
        assert!(session.history.is_empty());
    }
}
