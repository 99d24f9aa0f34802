//! Static workflow catalog backing the landing page's modal cards.
//!
//! Pure data — the page decides how to render it.

use std::sync::LazyLock;

use serde::Serialize;

/// One stage inside a workflow walkthrough.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowStage {
    pub heading: &'static str,
    pub detail: &'static str,
}

/// A workflow entry shown in a landing page modal.
#[derive(Debug, Clone, Serialize)]
pub struct Workflow {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub stages: Vec<WorkflowStage>,
}

fn stage(heading: &'static str, detail: &'static str) -> WorkflowStage {
    WorkflowStage { heading, detail }
}

static CATALOG: LazyLock<Vec<Workflow>> = LazyLock::new(|| {
    vec![
        Workflow {
            id: "gen_wf",
            title: "Generative Workflow Architecture",
            description: "Autonomous LLM chains that execute business processes from input to multi-channel export.",
            image: "images/gen_wf.png",
            stages: vec![
                stage("Step 1: Data Ingestion", "Scraping and cleaning raw unstructured business data."),
                stage("Step 2: Clustering", "LLM-driven categorization of data into actionable high-intent segments."),
                stage("Step 3: Synthesis", "Generating custom assets (copy, reports, creative) based on segments."),
                stage("Step 4: Quality Gate", "Self-correcting AI layer verifying output against brand guidelines."),
            ],
        },
        Workflow {
            id: "models_wf",
            title: "Proprietary Model Pipeline",
            description: "Tailoring open-source architectures to your specific domain expertise using LoRA and fine-tuning.",
            image: "images/models_wf.png",
            stages: vec![
                stage("Stage 1: Base Selection", "Selecting Llama 3 or Mistral based on tokens and latency needs."),
                stage("Stage 2: Synthetic Data", "Generating high-quality training pairs using teacher models."),
                stage("Stage 3: Fine-Tuning", "Executing Low-Rank Adaptation (LoRA) on enterprise hardware."),
                stage("Stage 4: Deployment", "Quantized hosting for 10x faster inference at 90% lower cost."),
            ],
        },
        Workflow {
            id: "agents_wf",
            title: "Autonomous Agent Core",
            description: "Sophisticated agents equipped with memory, planning, and executive tool access.",
            image: "images/agents_wf.png",
            stages: vec![
                stage("Perception", "Agent detects triggers in Slack, Email, or CRM dashboards."),
                stage("Reasoning", "Breaking down complex tasks into sub-goals using Chain-of-Thought."),
                stage("Action", "Calling external APIs (Stripe, Zapier, GitHub) to execute the plan."),
                stage("Reflection", "Storing the outcome in long-term vector memory for future optimization."),
            ],
        },
        Workflow {
            id: "alpha_wf",
            title: "Alpha Stack Framework",
            description: "Our 4-layer proprietary growth stack for high-performance B2B scaling.",
            image: "images/alpha_wf.png",
            stages: vec![
                stage("Layer 1: Unified Data", "Centralizing all business signals into a single source of truth."),
                stage("Layer 2: Intelligence", "Applying AI models to predict churn and identify high-LTV leads."),
                stage("Layer 3: Automation", "Hard-coding deterministic paths for routine operations."),
                stage("Layer 4: Scaling", "Unlocking recursive loops that grow without increasing headcount."),
            ],
        },
        Workflow {
            id: "outreach_wf",
            title: "High-Performance Outreach",
            description: "AI-personalized outreach that achieves 80%+ open rates and 10%+ booking rates.",
            image: "images/outreach_wf.png",
            stages: vec![
                stage("Mining", "Identifying decision-makers using Sales Navigator and Apollo."),
                stage("Personalization", "Scanning their recent posts and company news for AI-hooks."),
                stage("Dispatch", "Multi-channel sequence (LinkedIn -> Email -> Twitter)."),
                stage("Optimization", "A/B testing subject lines and hooks automatically via AI analysis."),
            ],
        },
    ]
});

/// All workflows, in display order.
pub fn catalog() -> &'static [Workflow] {
    &CATALOG
}

/// Look up a workflow by id.
pub fn find(id: &str) -> Option<&'static Workflow> {
    CATALOG.iter().find(|w| w.id == id)
}
