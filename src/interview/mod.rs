//! Conversational onboarding interview.
//!
//! A fixed script of chat-style questions collects lead information into an
//! [`OnboardData`] record. The [`Sequencer`] walks the script one accepted
//! answer at a time; the [`InterviewManager`] hosts sequencers as sessions
//! behind the REST surface and hands the finalized record to the dossier
//! writer on completion.

pub mod manager;
pub mod record;
pub mod routes;
pub mod sequencer;
pub mod step;

pub use manager::{InterviewManager, SessionStatus, Turn};
pub use record::OnboardData;
pub use sequencer::{InterviewEvent, NoDelay, Pacer, Sequencer, TypingPacer};
pub use step::{Prompt, Step, StepOutcome, script};
