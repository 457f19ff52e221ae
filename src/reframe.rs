use crate::client::GenerateClient;
use crate::models::{Reframe, ReframeField, ReframeResult, ReframeStatus};
use tracing::{info, warn};

pub const UNSPECIFIED_HABIT: &str = "not specified";
pub const EMPTY_REFLECTION_MESSAGE: &str = "Please write a reflection before submitting.";
pub const CONNECTION_TROUBLE_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to my thoughts right now.";

const PROMPT_TEMPLATE: &str = "
User's selected habit:
{habit}

User reflection:
{user_input}

Prompted assumption:
If [this situation happens], then [this belief about myself must be true].

Respond in the following format:
1. Assumption: [One sentence, max 25 words]
2. Mood Impact: [One sentence, max 25 words]
3. Reframe: [One sentence, max 25 words]
4. Micro-action: [Short paragraph, max 3 sentences]

Use a supportive, non-judgmental tone. Avoid elaboration or repetition.
";

const LABELS: [(&str, ReframeField); 4] = [
    ("1. Assumption:", ReframeField::Assumption),
    ("2. Mood Impact:", ReframeField::MoodImpact),
    ("3. Reframe:", ReframeField::Reframe),
    ("4. Micro-action:", ReframeField::MicroAction),
];

/// Fills the habit first, then the reflection; only the first placeholder of each is replaced.
pub fn build_prompt(habit: Option<&str>, journal: &str) -> String {
    PROMPT_TEMPLATE
        .replacen("{habit}", habit.unwrap_or(UNSPECIFIED_HABIT), 1)
        .replacen("{user_input}", journal, 1)
}

pub fn parse_response(text: &str) -> Reframe {
    let mut result = ReframeResult::default();
    let mut seen = Vec::with_capacity(LABELS.len());

    for line in text.lines() {
        let Some((value, field)) = LABELS
            .iter()
            .find_map(|(label, field)| line.strip_prefix(label).map(|rest| (rest.trim(), *field)))
        else {
            continue;
        };

        *field_mut(&mut result, field) = value.to_string();
        if !seen.contains(&field) {
            seen.push(field);
        }
    }

    let missing: Vec<ReframeField> = LABELS
        .iter()
        .map(|(_, field)| *field)
        .filter(|field| !seen.contains(field))
        .collect();

    let status = if missing.is_empty() {
        ReframeStatus::Complete
    } else {
        ReframeStatus::Partial { missing }
    };

    Reframe { result, status }
}

fn field_mut(result: &mut ReframeResult, field: ReframeField) -> &mut String {
    match field {
        ReframeField::Assumption => &mut result.assumption,
        ReframeField::MoodImpact => &mut result.mood_impact,
        ReframeField::Reframe => &mut result.reframe,
        ReframeField::MicroAction => &mut result.micro_action,
    }
}

/// Runs one reframe round trip. Transport problems become a failure outcome, never an error.
pub async fn reframe_reflection(client: &GenerateClient, habit: Option<&str>, journal: &str) -> Reframe {
    let prompt = build_prompt(habit, journal);

    match client.generate(&prompt).await {
        Ok(text) => {
            let reframe = parse_response(&text);
            info!(status = ?reframe.status, "reframe parsed");
            reframe
        }
        Err(err) => {
            warn!(endpoint = client.endpoint(), "reframe request failed: {err}");
            Reframe::transport_failure(err.to_string())
        }
    }
}

pub fn outcome_message(reframe: &Reframe) -> Option<String> {
    reframe
        .is_failure()
        .then(|| CONNECTION_TROUBLE_MESSAGE.to_string())
}
