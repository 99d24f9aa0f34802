//! InterviewManager — owns interview sessions and the completion handoff.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::config::PacingConfig;
use crate::dossier::DossierWriter;
use crate::error::InterviewError;

use super::record::OnboardData;
use super::sequencer::{InterviewEvent, Pacer, Sequencer};

/// What one user submission produced, flattened for transport.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    /// Assistant messages to display, in order.
    pub messages: Vec<String>,
    /// Whether the messages include a validation re-prompt.
    pub rejected: bool,
    /// Whether the interview just finished.
    pub complete: bool,
    /// Path of the dossier written on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dossier_path: Option<String>,
}

/// Session status for the REST surface.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub session_id: Uuid,
    pub step_index: usize,
    pub step_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_id: Option<&'static str>,
    pub complete: bool,
    /// Answers collected so far.
    pub record: OnboardData,
}

/// Hosts sequencers as in-memory sessions and hands finalized records to the
/// dossier writer.
///
/// Each session sits behind its own mutex, so submissions to one session are
/// serialized while other sessions stay unblocked during pacing delays.
pub struct InterviewManager {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Sequencer>>>>,
    pacer: Arc<dyn Pacer>,
    pacing: PacingConfig,
    dossier: DossierWriter,
}

impl InterviewManager {
    pub fn new(pacer: Arc<dyn Pacer>, pacing: PacingConfig, dossier: DossierWriter) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            pacer,
            pacing,
            dossier,
        }
    }

    /// Start a new interview session, returning its id and opening prompt.
    pub async fn start(&self) -> (Uuid, Vec<String>) {
        let sequencer = Sequencer::new(Arc::clone(&self.pacer), self.pacing);
        let opening = match sequencer.present_current_prompt().await {
            Some(InterviewEvent::Prompt(text)) => vec![text],
            _ => Vec::new(),
        };

        let id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(sequencer)));
        tracing::info!(session = %id, "interview started");
        (id, opening)
    }

    /// Feed one submission into a session.
    ///
    /// On completion the finalized record is written as a dossier; a handoff
    /// failure is logged but does not fail the turn (the lead's answers are
    /// still in memory and the page still gets its confirmation).
    pub async fn submit(&self, id: Uuid, text: &str) -> Result<Turn, InterviewError> {
        let session = self.session(id).await?;
        let events = {
            let mut sequencer = session.lock().await;
            sequencer.submit(text).await
        };

        let mut turn = Turn {
            messages: Vec::new(),
            rejected: false,
            complete: false,
            dossier_path: None,
        };
        for event in events {
            match event {
                InterviewEvent::Prompt(text) => turn.messages.push(text),
                InterviewEvent::Rejected(message) => {
                    turn.rejected = true;
                    turn.messages.push(message);
                }
                InterviewEvent::Complete(record) => {
                    turn.complete = true;
                    tracing::info!(session = %id, company = %record.company_name, "interview complete");
                    match self.dossier.write(&record).await {
                        Ok(path) => turn.dossier_path = Some(path.display().to_string()),
                        Err(e) => {
                            tracing::warn!(session = %id, "dossier handoff failed: {e}");
                        }
                    }
                }
            }
        }
        Ok(turn)
    }

    /// Current status of a session.
    pub async fn status(&self, id: Uuid) -> Result<SessionStatus, InterviewError> {
        let session = self.session(id).await?;
        let sequencer = session.lock().await;
        Ok(SessionStatus {
            session_id: id,
            step_index: sequencer.current_index(),
            step_count: sequencer.step_count(),
            step_id: sequencer.current_step_id(),
            complete: sequencer.is_complete(),
            record: sequencer.record().clone(),
        })
    }

    async fn session(&self, id: Uuid) -> Result<Arc<Mutex<Sequencer>>, InterviewError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(InterviewError::SessionNotFound { id })
    }
}
