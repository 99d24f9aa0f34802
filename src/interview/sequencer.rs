//! Interview sequencer — a linear state machine over the script.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::PacingConfig;

use super::record::OnboardData;
use super::step::{Step, StepOutcome, script};

/// Outbound events emitted by the sequencer.
#[derive(Debug, Clone)]
pub enum InterviewEvent {
    /// Assistant prompt to display.
    Prompt(String),
    /// Validation failure message; the current step repeats.
    Rejected(String),
    /// The interview finished. Carries the finalized record; fires exactly
    /// once per sequencer.
    Complete(OnboardData),
}

/// Injectable presentation delay ("Architect is typing...").
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Real pacing via the tokio timer.
pub struct TypingPacer;

#[async_trait]
impl Pacer for TypingPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// No-op pacing for tests and headless drivers.
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self, _duration: Duration) {}
}

/// Walks the interview script one accepted answer at a time.
///
/// `current` only ever increases, by exactly one per accepted submission.
/// Reaching the end of the script emits [`InterviewEvent::Complete`] once;
/// afterwards every call is a no-op.
pub struct Sequencer {
    steps: Vec<Step>,
    current: usize,
    record: OnboardData,
    pacer: Arc<dyn Pacer>,
    pacing: PacingConfig,
}

impl Sequencer {
    pub fn new(pacer: Arc<dyn Pacer>, pacing: PacingConfig) -> Self {
        Self {
            steps: script(),
            current: 0,
            record: OnboardData::default(),
            pacer,
            pacing,
        }
    }

    /// Number of steps in the script.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Zero-based index of the current step; equals `step_count` once done.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Identifier of the current step, `None` once the interview is done.
    pub fn current_step_id(&self) -> Option<&'static str> {
        self.steps.get(self.current).map(|s| s.id)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.steps.len()
    }

    /// Answers collected so far.
    pub fn record(&self) -> &OnboardData {
        &self.record
    }

    /// Resolve and emit the current step's prompt, after the typing delay.
    /// No-op (`None`) when the interview is already complete.
    pub async fn present_current_prompt(&self) -> Option<InterviewEvent> {
        let step = self.steps.get(self.current)?;
        self.pacer.pause(self.pacing.typing_delay).await;
        Some(InterviewEvent::Prompt(step.prompt.resolve(&self.record)))
    }

    /// Feed one user submission through the current step.
    ///
    /// Input is trimmed first; whitespace-only input and input after
    /// completion are silent no-ops (no processor runs, no events). On
    /// acceptance the index advances and either the next prompt or the
    /// completion event is emitted; on rejection the re-prompt message is
    /// emitted and nothing changes.
    pub async fn submit(&mut self, raw: &str) -> Vec<InterviewEvent> {
        let input = raw.trim();
        if input.is_empty() {
            return Vec::new();
        }
        let Some(step) = self.steps.get(self.current) else {
            // Terminal state — the interview already completed.
            return Vec::new();
        };

        match step.process(&mut self.record, input) {
            StepOutcome::Accepted => {
                self.current += 1;
                if self.current == self.steps.len() {
                    self.pacer.pause(self.pacing.completion_delay).await;
                    vec![InterviewEvent::Complete(self.record.clone())]
                } else {
                    self.present_current_prompt().await.into_iter().collect()
                }
            }
            StepOutcome::Rejected(message) => {
                self.pacer.pause(self.pacing.reply_delay).await;
                vec![InterviewEvent::Rejected(message.to_string())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> Sequencer {
        Sequencer::new(Arc::new(NoDelay), PacingConfig::instant())
    }

    async fn drive(seq: &mut Sequencer, inputs: &[&str]) -> Vec<InterviewEvent> {
        let mut events = Vec::new();
        for input in inputs {
            events.extend(seq.submit(input).await);
        }
        events
    }

    #[tokio::test]
    async fn opening_prompt_is_the_intro() {
        let seq = sequencer();
        match seq.present_current_prompt().await {
            Some(InterviewEvent::Prompt(text)) => {
                assert!(text.starts_with("Welcome to AlphaReach"));
            }
            other => panic!("expected prompt, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn accepted_submission_advances_and_prompts_next() {
        let mut seq = sequencer();
        let events = seq.submit("Jane from Acme").await;
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.current_step_id(), Some("vision"));
        match events.as_slice() {
            [InterviewEvent::Prompt(text)] => {
                // The vision prompt is personalized from the intro answer.
                assert!(text.contains("Nice to meet you, Jane"));
                assert!(text.contains("Acme"));
            }
            other => panic!("expected one prompt, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_and_whitespace_submissions_are_ignored() {
        let mut seq = sequencer();
        assert!(seq.submit("").await.is_empty());
        assert!(seq.submit("   \t  ").await.is_empty());
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.record(), &OnboardData::default());
    }

    #[tokio::test]
    async fn submission_is_trimmed_before_processing() {
        let mut seq = sequencer();
        seq.submit("  Jane  ").await;
        assert_eq!(seq.record().client_name, "Jane");
    }

    #[tokio::test]
    async fn rejection_changes_nothing() {
        let mut seq = sequencer();
        drive(
            &mut seq,
            &["Jane from Acme", "Grow 2x", "reports", "generic", "Slack"],
        )
        .await;
        assert_eq!(seq.current_step_id(), Some("handover_email"));

        let before = seq.record().clone();
        let events = seq.submit("not-an-email").await;
        match events.as_slice() {
            [InterviewEvent::Rejected(message)] => {
                assert!(message.contains("valid email"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(seq.current_step_id(), Some("handover_email"));
        assert_eq!(seq.record(), &before);

        // The same step processes the next submission.
        seq.submit("jane@acme.com").await;
        assert_eq!(seq.record().email, "jane@acme.com");
        assert_eq!(seq.current_step_id(), Some("handover_url"));
    }

    #[tokio::test]
    async fn full_interview_completes_once() {
        let mut seq = sequencer();
        let inputs = [
            "Jane from Acme",
            "Grow 2x",
            "Too many manual reports",
            "ChatGPT is too generic",
            "Slack Notion",
            "jane@acme.com",
            "acme.com",
        ];
        let events = drive(&mut seq, &inputs).await;

        let completions: Vec<&OnboardData> = events
            .iter()
            .filter_map(|e| match e {
                InterviewEvent::Complete(record) => Some(record),
                _ => None,
            })
            .collect();
        assert_eq!(completions.len(), 1);

        let record = completions[0];
        assert_eq!(record.client_name, "Jane");
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.vision, "Grow 2x");
        assert_eq!(
            record.pain_points,
            ["Too many manual reports", "Shortcoming: ChatGPT is too generic"]
        );
        assert_eq!(record.current_stack, ["Slack", "Notion"]);
        assert_eq!(record.email, "jane@acme.com");
        assert_eq!(record.website, "acme.com");

        assert!(seq.is_complete());
        assert_eq!(seq.current_index(), seq.step_count());
        assert_eq!(seq.current_step_id(), None);
    }

    #[tokio::test]
    async fn terminal_sequencer_ignores_everything() {
        let mut seq = sequencer();
        drive(
            &mut seq,
            &[
                "Jane", "goal", "friction", "shortfall", "Slack", "j@a.co", "a.co",
            ],
        )
        .await;
        assert!(seq.is_complete());

        let record = seq.record().clone();
        assert!(seq.submit("anything else").await.is_empty());
        assert!(seq.present_current_prompt().await.is_none());
        assert_eq!(seq.record(), &record);
        assert_eq!(seq.current_index(), seq.step_count());
    }

    #[tokio::test]
    async fn index_tracks_accepted_submissions() {
        let mut seq = sequencer();
        let inputs = ["Jane", "goal", "friction", "shortfall", "Slack"];
        for (accepted, input) in inputs.iter().enumerate() {
            assert_eq!(seq.current_index(), accepted);
            seq.submit(input).await;
        }
        assert_eq!(seq.current_index(), inputs.len());
    }
}
