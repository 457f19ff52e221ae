use crate::models::{Habit, Mood, SessionState, TimeOfDay};
use crate::page::Page;
use thiserror::Error;

pub const PRESET_HABITS: [&str; 4] = [
    "Drink a glass of water after waking up",
    "Stretch for 5 minutes",
    "Read one page of a book",
    "Write down one thing you are grateful for",
];

pub const PRESET_BLOCKERS: [&str; 5] = [
    "I don't have time.",
    "I'm too tired.",
    "I'll do it later.",
    "It's not important.",
    "I don't have one",
];

pub const COMPLETED_MESSAGE: &str = "🎉 Great job!";
pub const ALREADY_COMPLETED_MESSAGE: &str = "You've already marked this habit as done today!";
pub const INCOMPLETE_MESSAGE: &str = "🥲 Don't give up, you can always try again!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot go from {from} to {to}")]
    InvalidTransition { from: Page, to: Page },

    #[error("Please select a habit and a time.")]
    MissingHabit,

    #[error("Please select or add a blocker.")]
    MissingBlocker,
}

impl SessionState {
    pub fn set_page(&mut self, page: Page) -> Result<(), SessionError> {
        if !self.current_page.can_go_to(page) {
            return Err(SessionError::InvalidTransition {
                from: self.current_page,
                to: page,
            });
        }
        self.current_page = page;
        Ok(())
    }

    pub fn set_habit_data(&mut self, habit: Option<Habit>) {
        self.habit = habit;
    }

    /// Counts today's completion once; repeated calls only report.
    pub fn mark_completed(&mut self) -> &'static str {
        if self.completed_today {
            return ALREADY_COMPLETED_MESSAGE;
        }
        self.streak = self.streak.saturating_add(1);
        self.completed_today = true;
        COMPLETED_MESSAGE
    }

    pub fn mark_incomplete(&mut self) -> &'static str {
        if self.completed_today {
            self.streak = self.streak.saturating_sub(1);
            self.completed_today = false;
        }
        INCOMPLETE_MESSAGE
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn set_journal(&mut self, text: impl Into<String>) {
        self.journal_text = text.into();
    }

    pub fn set_blocker(&mut self, text: impl Into<String>) {
        self.blocker_text = text.into();
    }

    /// A custom habit wins over the selected preset.
    pub fn complete_onboarding(
        &mut self,
        selected: Option<&str>,
        custom: Option<&str>,
        time: Option<TimeOfDay>,
    ) -> Result<(), SessionError> {
        let name = first_filled(custom, selected).ok_or(SessionError::MissingHabit)?;
        let time = time.ok_or(SessionError::MissingHabit)?;
        self.set_page(Page::CognitiveSetup)?;
        self.set_habit_data(Some(Habit {
            name: name.to_string(),
            time,
        }));
        Ok(())
    }

    pub fn complete_cognitive_setup(
        &mut self,
        selected: Option<&str>,
        custom: Option<&str>,
    ) -> Result<(), SessionError> {
        let blocker = first_filled(custom, selected).ok_or(SessionError::MissingBlocker)?;
        self.set_page(Page::Dashboard)?;
        self.set_blocker(blocker);
        Ok(())
    }

    pub fn habit_name(&self) -> Option<&str> {
        self.habit.as_ref().map(|habit| habit.name.as_str())
    }
}

fn first_filled<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    [preferred, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

pub fn motivational_message(streak: u32) -> String {
    match streak {
        0 => "Every new beginning starts with a single step. You can do it!".to_string(),
        1..=6 => format!("You're building momentum! Keep it up for {streak} days."),
        _ => format!("Wow, {streak} days in a row! You are on a roll. Keep pushing forward!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: Page) -> SessionState {
        SessionState {
            current_page: page,
            ..SessionState::default()
        }
    }

    #[test]
    fn defaults_start_on_landing() {
        let session = SessionState::default();
        assert_eq!(session.current_page, Page::Landing);
        assert_eq!(session.streak, 0);
        assert!(!session.completed_today);
        assert_eq!(session.mood, Mood::Happy);
        assert!(session.habit.is_none());
    }

    #[test]
    fn mark_completed_counts_once_per_day() {
        let mut session = SessionState::default();
        assert_eq!(session.mark_completed(), COMPLETED_MESSAGE);
        assert_eq!(session.streak, 1);
        assert!(session.completed_today);

        assert_eq!(session.mark_completed(), ALREADY_COMPLETED_MESSAGE);
        assert_eq!(session.streak, 1);
    }

    #[test]
    fn mark_incomplete_undoes_completion() {
        let mut session = SessionState {
            streak: 4,
            ..SessionState::default()
        };
        session.mark_completed();
        assert_eq!(session.streak, 5);

        assert_eq!(session.mark_incomplete(), INCOMPLETE_MESSAGE);
        assert_eq!(session.streak, 4);
        assert!(!session.completed_today);

        // not completed any more: message only
        assert_eq!(session.mark_incomplete(), INCOMPLETE_MESSAGE);
        assert_eq!(session.streak, 4);
    }

    #[test]
    fn streak_never_goes_below_zero() {
        let mut session = SessionState {
            completed_today: true,
            ..SessionState::default()
        };
        session.mark_incomplete();
        assert_eq!(session.streak, 0);
        for _ in 0..3 {
            session.mark_incomplete();
        }
        assert_eq!(session.streak, 0);

        session.mark_completed();
        session.mark_incomplete();
        session.mark_incomplete();
        assert_eq!(session.streak, 0);
    }

    #[test]
    fn set_page_rejects_transitions_outside_the_table() {
        let mut session = on_page(Page::Insights);
        let err = session.set_page(Page::Onboarding).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                from: Page::Insights,
                to: Page::Onboarding
            }
        );
        assert_eq!(session.current_page, Page::Insights);

        session.set_page(Page::Dashboard).unwrap();
        assert_eq!(session.current_page, Page::Dashboard);
    }

    #[test]
    fn onboarding_prefers_custom_habit() {
        let mut session = on_page(Page::Onboarding);
        session
            .complete_onboarding(
                Some("Stretch for 5 minutes"),
                Some("  Floss one tooth "),
                Some(TimeOfDay::Evening),
            )
            .unwrap();
        assert_eq!(
            session.habit,
            Some(Habit {
                name: "Floss one tooth".to_string(),
                time: TimeOfDay::Evening,
            })
        );
        assert_eq!(session.current_page, Page::CognitiveSetup);
    }

    #[test]
    fn onboarding_requires_habit_and_time() {
        let mut session = on_page(Page::Onboarding);
        assert_eq!(
            session.complete_onboarding(Some("Read one page of a book"), None, None),
            Err(SessionError::MissingHabit)
        );
        assert_eq!(
            session.complete_onboarding(None, Some("   "), Some(TimeOfDay::Morning)),
            Err(SessionError::MissingHabit)
        );
        assert!(session.habit.is_none());
        assert_eq!(session.current_page, Page::Onboarding);
    }

    #[test]
    fn cognitive_setup_sets_blocker_and_opens_dashboard() {
        let mut session = on_page(Page::CognitiveSetup);
        assert_eq!(
            session.complete_cognitive_setup(None, Some("")),
            Err(SessionError::MissingBlocker)
        );
        session
            .complete_cognitive_setup(Some("I'm too tired."), None)
            .unwrap();
        assert_eq!(session.blocker_text, "I'm too tired.");
        assert_eq!(session.current_page, Page::Dashboard);
    }

    #[test]
    fn motivational_message_tracks_streak() {
        assert!(motivational_message(0).starts_with("Every new beginning"));
        assert_eq!(
            motivational_message(3),
            "You're building momentum! Keep it up for 3 days."
        );
        assert!(motivational_message(7).starts_with("Wow, 7 days in a row!"));
    }
}
