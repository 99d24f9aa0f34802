//! The interview script — one [`Step`] per question.
//!
//! Prompts and parsing rules are the AlphaReach funnel copy. The split
//! patterns keep the original alternation order (leftmost-first), so inputs
//! mixing separators parse the same way the page always has.

use std::sync::LazyLock;

use regex::Regex;

use super::record::OnboardData;

/// Splits "name and venture" answers on `" from "`, `", "` or `" "`.
static NAME_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" from |, | ").expect("static regex"));

/// Splits tool stack answers on `", "` or `" "`.
static STACK_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(", | ").expect("static regex"));

/// Anchored "looks like an email" shape check.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

const EMAIL_REPROMPT: &str = "Please provide a valid email address so we can reach you.";
const DEFAULT_COMPANY: &str = "Your Venture";

/// A prompt shown when a step becomes current.
pub enum Prompt {
    /// Fixed copy.
    Static(&'static str),
    /// Personalized from earlier answers.
    Computed(fn(&OnboardData) -> String),
}

impl Prompt {
    /// Resolve the prompt text against the answers collected so far.
    pub fn resolve(&self, data: &OnboardData) -> String {
        match self {
            Self::Static(text) => (*text).to_string(),
            Self::Computed(f) => f(data),
        }
    }
}

/// Result of running a step's processor on user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Input stored; the interview advances.
    Accepted,
    /// Input refused; the message is shown and the same step repeats.
    Rejected(&'static str),
}

/// One question in the interview script.
pub struct Step {
    /// Stable identifier, used in status reporting.
    pub id: &'static str,
    /// Question copy for this step.
    pub prompt: Prompt,
    processor: fn(&mut OnboardData, &str) -> StepOutcome,
}

impl Step {
    /// Run this step's processor. Mutates `data` only on acceptance.
    pub fn process(&self, data: &mut OnboardData, input: &str) -> StepOutcome {
        (self.processor)(data, input)
    }
}

fn process_intro(data: &mut OnboardData, input: &str) -> StepOutcome {
    let parts: Vec<&str> = NAME_SPLIT_RE.split(input).collect();
    data.client_name = match parts.first() {
        Some(first) if !first.is_empty() => (*first).to_string(),
        _ => input.to_string(),
    };
    let company = parts.get(1..).unwrap_or(&[]).join(" ");
    data.company_name = if company.is_empty() {
        DEFAULT_COMPANY.to_string()
    } else {
        company
    };
    StepOutcome::Accepted
}

fn process_email(data: &mut OnboardData, input: &str) -> StepOutcome {
    if EMAIL_RE.is_match(input) {
        data.email = input.to_string();
        StepOutcome::Accepted
    } else {
        StepOutcome::Rejected(EMAIL_REPROMPT)
    }
}

/// The full onboarding script, in interview order.
pub fn script() -> Vec<Step> {
    vec![
        Step {
            id: "intro",
            prompt: Prompt::Static(
                "Welcome to AlphaReach. I'm your Automation Architect. To start, what is \
                 your name and the name of the venture we are scaling today?",
            ),
            processor: process_intro,
        },
        Step {
            id: "vision",
            prompt: Prompt::Computed(|data| {
                format!(
                    "Nice to meet you, {}. Briefly, what is the 'North Star' goal for {} \
                     in the next 12 months?",
                    data.client_name, data.company_name
                )
            }),
            processor: |data, input| {
                data.vision = input.to_string();
                StepOutcome::Accepted
            },
        },
        Step {
            id: "friction",
            prompt: Prompt::Static(
                "Vision noted. If you could wave a magic wand and delete one repetitive \
                 task from your team's daily schedule, what would it be?",
            ),
            processor: |data, input| {
                data.pain_points.push(input.to_string());
                StepOutcome::Accepted
            },
        },
        Step {
            id: "current_ai",
            prompt: Prompt::Static(
                "Are you currently using any AI tools (ChatGPT, Claude, etc.), and where \
                 are they falling short of your expectations?",
            ),
            processor: |data, input| {
                data.pain_points.push(format!("Shortcoming: {input}"));
                StepOutcome::Accepted
            },
        },
        Step {
            id: "stack",
            prompt: Prompt::Static(
                "Understood. What does your current 'Command Center' look like? \
                 (e.g., Slack, Notion, GoHighLevel, Shopify, etc.)",
            ),
            processor: |data, input| {
                data.current_stack = STACK_SPLIT_RE.split(input).map(str::to_string).collect();
                StepOutcome::Accepted
            },
        },
        Step {
            id: "handover_email",
            prompt: Prompt::Static(
                "Lastly, please provide your business email so we can send you our \
                 preliminary audit.",
            ),
            processor: process_email,
        },
        Step {
            id: "handover_url",
            prompt: Prompt::Static(
                "And your website URL? Our system will run a quick infrastructure check.",
            ),
            processor: |data, input| {
                data.website = input.to_string();
                StepOutcome::Accepted
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str) -> Step {
        script()
            .into_iter()
            .find(|s| s.id == id)
            .unwrap_or_else(|| panic!("no step {id}"))
    }

    #[test]
    fn script_order_is_fixed() {
        let ids: Vec<&str> = script().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            [
                "intro",
                "vision",
                "friction",
                "current_ai",
                "stack",
                "handover_email",
                "handover_url"
            ]
        );
    }

    #[test]
    fn intro_splits_on_from() {
        let mut data = OnboardData::default();
        let outcome = step("intro").process(&mut data, "Jane from Acme Corp");
        assert_eq!(outcome, StepOutcome::Accepted);
        assert_eq!(data.client_name, "Jane");
        assert_eq!(data.company_name, "Acme Corp");
    }

    #[test]
    fn intro_splits_on_comma() {
        let mut data = OnboardData::default();
        step("intro").process(&mut data, "Jane, Acme");
        assert_eq!(data.client_name, "Jane");
        assert_eq!(data.company_name, "Acme");
    }

    #[test]
    fn intro_splits_on_space() {
        let mut data = OnboardData::default();
        step("intro").process(&mut data, "Jane Acme");
        assert_eq!(data.client_name, "Jane");
        assert_eq!(data.company_name, "Acme");
    }

    #[test]
    fn intro_defaults_company() {
        let mut data = OnboardData::default();
        step("intro").process(&mut data, "Jane");
        assert_eq!(data.client_name, "Jane");
        assert_eq!(data.company_name, "Your Venture");
    }

    #[test]
    fn vision_prompt_is_personalized() {
        let data = OnboardData {
            client_name: "Jane".to_string(),
            company_name: "Acme".to_string(),
            ..Default::default()
        };
        let text = step("vision").prompt.resolve(&data);
        assert!(text.contains("Nice to meet you, Jane"));
        assert!(text.contains("goal for Acme"));
    }

    #[test]
    fn friction_and_current_ai_append_pain_points() {
        let mut data = OnboardData::default();
        step("friction").process(&mut data, "Too many manual reports");
        step("current_ai").process(&mut data, "ChatGPT is too generic");
        assert_eq!(
            data.pain_points,
            ["Too many manual reports", "Shortcoming: ChatGPT is too generic"]
        );
    }

    #[test]
    fn stack_split_prefers_comma_space() {
        let mut data = OnboardData::default();
        step("stack").process(&mut data, "Slack, Notion GoHighLevel");
        assert_eq!(data.current_stack, ["Slack", "Notion", "GoHighLevel"]);
    }

    #[test]
    fn stack_split_replaces_previous_tokens() {
        let mut data = OnboardData {
            current_stack: vec!["Old".to_string()],
            ..Default::default()
        };
        step("stack").process(&mut data, "Shopify");
        assert_eq!(data.current_stack, ["Shopify"]);
    }

    #[test]
    fn email_shape_accepted() {
        let mut data = OnboardData::default();
        let outcome = step("handover_email").process(&mut data, "user@domain.com");
        assert_eq!(outcome, StepOutcome::Accepted);
        assert_eq!(data.email, "user@domain.com");
    }

    #[test]
    fn email_shape_rejected_without_mutation() {
        let mut data = OnboardData::default();
        for bad in ["not-an-email", "user@domain", "user @domain.com", "@domain.com"] {
            let outcome = step("handover_email").process(&mut data, bad);
            assert!(
                matches!(outcome, StepOutcome::Rejected(_)),
                "{bad} should be rejected"
            );
            assert!(data.email.is_empty(), "{bad} must not be stored");
        }
    }

    #[test]
    fn website_is_stored_verbatim() {
        let mut data = OnboardData::default();
        step("handover_url").process(&mut data, "acme.com");
        assert_eq!(data.website, "acme.com");
    }
}
