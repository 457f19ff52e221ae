use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Landing,
    Onboarding,
    #[serde(alias = "cognitive-setup")]
    CognitiveSetup,
    Dashboard,
    Insights,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Landing,
        Page::Onboarding,
        Page::CognitiveSetup,
        Page::Dashboard,
        Page::Insights,
    ];

    /// Pages reachable from `self` in one step.
    pub fn next_pages(self) -> &'static [Page] {
        match self {
            Page::Landing => &[Page::Onboarding, Page::Dashboard],
            Page::Onboarding => &[Page::Landing, Page::CognitiveSetup],
            Page::CognitiveSetup => &[Page::Onboarding, Page::Dashboard],
            Page::Dashboard => &[Page::CognitiveSetup, Page::Onboarding, Page::Insights],
            Page::Insights => &[Page::Dashboard],
        }
    }

    pub fn can_go_to(self, next: Page) -> bool {
        self == next || self.next_pages().contains(&next)
    }

    pub fn key(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Onboarding => "onboarding",
            Page::CognitiveSetup => "cognitive_setup",
            Page::Dashboard => "dashboard",
            Page::Insights => "insights",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Tiny habits. Big change.",
            Page::Onboarding => "Onboarding",
            Page::CognitiveSetup => "Cognitive Setup",
            Page::Dashboard => "Dashboard",
            Page::Insights => "Your Progress",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_way_out() {
        for page in Page::ALL {
            assert!(!page.next_pages().is_empty(), "{page} is a dead end");
        }
    }

    #[test]
    fn every_page_is_reachable_from_landing() {
        let mut seen = vec![Page::Landing];
        let mut frontier = vec![Page::Landing];
        while let Some(page) = frontier.pop() {
            for next in page.next_pages() {
                if !seen.contains(next) {
                    seen.push(*next);
                    frontier.push(*next);
                }
            }
        }
        assert_eq!(seen.len(), Page::ALL.len());
    }

    #[test]
    fn insights_only_returns_to_dashboard() {
        assert!(Page::Insights.can_go_to(Page::Dashboard));
        assert!(!Page::Insights.can_go_to(Page::Onboarding));
        assert!(Page::Insights.can_go_to(Page::Insights));
    }

    #[test]
    fn page_ids_accept_hyphenated_cognitive_setup() {
        let page: Page = serde_json::from_str("\"cognitive-setup\"").unwrap();
        assert_eq!(page, Page::CognitiveSetup);
        let page: Page = serde_json::from_str("\"cognitive_setup\"").unwrap();
        assert_eq!(page, Page::CognitiveSetup);
        assert!(serde_json::from_str::<Page>("\"settings\"").is_err());
    }
}
