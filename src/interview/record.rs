//! The answer record accumulated across one interview.

use serde::{Deserialize, Serialize};

/// Lead information collected by the onboarding interview.
///
/// Created fresh at interview start, mutated only by accepted steps, and
/// considered finalized once the last step accepts. The field names are the
/// dossier wire format — do not rename them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardData {
    pub client_name: String,
    pub company_name: String,
    /// The lead's 12-month "North Star" goal.
    pub vision: String,
    /// Friction points, including current tool shortcomings.
    pub pain_points: Vec<String>,
    /// Tools currently in use (the lead's "Command Center").
    pub current_stack: Vec<String>,
    pub email: String,
    pub website: String,
}

impl OnboardData {
    /// Slug used in dossier filenames: lowercased company name with spaces
    /// replaced by underscores, `"unknown"` when no company was recorded.
    pub fn company_slug(&self) -> String {
        if self.company_name.trim().is_empty() {
            return "unknown".to_string();
        }
        self.company_name.to_lowercase().replace(' ', "_")
    }
}
