use crate::page::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub time: TimeOfDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionState {
    pub current_page: Page,
    pub habit: Option<Habit>,
    pub completed_today: bool,
    pub streak: u32,
    pub mood: Mood,
    pub journal_text: String,
    pub blocker_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReframeResult {
    pub assumption: String,
    pub mood_impact: String,
    pub reframe: String,
    pub micro_action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReframeField {
    Assumption,
    MoodImpact,
    Reframe,
    MicroAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReframeStatus {
    Complete,
    Partial { missing: Vec<ReframeField> },
    TransportFailure { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reframe {
    pub result: ReframeResult,
    pub status: ReframeStatus,
}

impl Reframe {
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        Self {
            result: ReframeResult::default(),
            status: ReframeStatus::TransportFailure {
                reason: reason.into(),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, ReframeStatus::TransportFailure { .. })
    }
}

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    pub page: Page,
}

#[derive(Debug, Deserialize, Default)]
pub struct OnboardingRequest {
    #[serde(default)]
    pub habit: Option<String>,
    #[serde(default)]
    pub custom_habit: Option<String>,
    #[serde(default)]
    pub time: Option<TimeOfDay>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CognitiveSetupRequest {
    #[serde(default)]
    pub blocker: Option<String>,
    #[serde(default)]
    pub custom_blocker: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlockerRequest {
    pub blocker: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: Mood,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub text: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReflectionForm {
    #[serde(default)]
    pub journal: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: SessionState,
    pub next_pages: Vec<Page>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub message: String,
    pub session: SessionState,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReflectionResponse {
    pub message: Option<String>,
    pub reframe: Reframe,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReflectionStatusResponse {
    pub pending: bool,
    pub reframe: Option<Reframe>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub date: String,
    pub habit: String,
    pub streak: u32,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PresetsResponse {
    pub habits: Vec<String>,
    pub blockers: Vec<String>,
    pub times: Vec<TimeOfDay>,
}
