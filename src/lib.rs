//! AlphaReach — onboarding funnel service for the marketing site.

pub mod config;
pub mod dossier;
pub mod error;
pub mod interview;
pub mod server;
pub mod workflows;
