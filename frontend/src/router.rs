use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;
use yew::functional::Reducible;

/// The full-screen view currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Quiz,
    Result,
    MainContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    TakeAssessment,
    ExploreSite,
    SkipQuiz,
    QuizCompleted(Vec<String>),
    ContinueWithoutSending,
}

impl ScreenEvent {
    fn name(&self) -> &'static str {
        match self {
            ScreenEvent::TakeAssessment => "take-assessment",
            ScreenEvent::ExploreSite => "explore-site",
            ScreenEvent::SkipQuiz => "skip-quiz",
            ScreenEvent::QuizCompleted(_) => "quiz-completed",
            ScreenEvent::ContinueWithoutSending => "continue-without-sending",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no transition from {from:?} on {event}")]
pub struct TransitionError {
    pub from: Screen,
    pub event: &'static str,
}

/// Transition table. `None` means the event is not defined in that state.
pub fn next_screen(from: Screen, event: &ScreenEvent) -> Option<Screen> {
    match (from, event) {
        (Screen::Splash, ScreenEvent::TakeAssessment) => Some(Screen::Quiz),
        (Screen::Splash, ScreenEvent::ExploreSite) => Some(Screen::MainContent),
        (Screen::Quiz, ScreenEvent::QuizCompleted(_)) => Some(Screen::Result),
        (Screen::Quiz, ScreenEvent::SkipQuiz) => Some(Screen::MainContent),
        (Screen::Result, ScreenEvent::ContinueWithoutSending) => Some(Screen::MainContent),
        _ => None,
    }
}

/// Owns the current screen and the answers handed from the quiz to the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRouter {
    screen: Screen,
    answers: Vec<String>,
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self { screen: Screen::Splash, answers: Vec::new() }
    }
}

impl ScreenRouter {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn apply(&mut self, event: ScreenEvent) -> Result<Screen, TransitionError> {
        let to = next_screen(self.screen, &event).ok_or(TransitionError {
            from: self.screen,
            event: event.name(),
        })?;
        info!("Screen {:?} -> {:?} ({})", self.screen, to, event.name());
        if let ScreenEvent::QuizCompleted(answers) = event {
            self.answers = answers;
        }
        self.screen = to;
        Ok(to)
    }
}

impl Reducible for ScreenRouter {
    type Action = ScreenEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(_) => Rc::new(next),
            Err(e) => {
                warn!("Ignoring screen event: {}", e);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREENS: [Screen; 4] = [Screen::Splash, Screen::Quiz, Screen::Result, Screen::MainContent];

    fn all_events() -> Vec<ScreenEvent> {
        vec![
            ScreenEvent::TakeAssessment,
            ScreenEvent::ExploreSite,
            ScreenEvent::SkipQuiz,
            ScreenEvent::QuizCompleted(vec!["A".into()]),
            ScreenEvent::ContinueWithoutSending,
        ]
    }

    #[test]
    fn starts_on_splash() {
        let router = ScreenRouter::default();
        assert_eq!(router.screen(), Screen::Splash);
        assert!(router.answers().is_empty());
    }

    #[test]
    fn assessment_path_carries_answers_to_result() {
        let mut router = ScreenRouter::default();
        router.apply(ScreenEvent::TakeAssessment).unwrap();
        let answers: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        assert_eq!(router.apply(ScreenEvent::QuizCompleted(answers.clone())), Ok(Screen::Result));
        assert_eq!(router.answers(), answers.as_slice());
        assert_eq!(router.apply(ScreenEvent::ContinueWithoutSending), Ok(Screen::MainContent));
    }

    #[test]
    fn skip_and_explore_reach_main_content() {
        let mut router = ScreenRouter::default();
        assert_eq!(router.apply(ScreenEvent::ExploreSite), Ok(Screen::MainContent));

        let mut router = ScreenRouter::default();
        router.apply(ScreenEvent::TakeAssessment).unwrap();
        assert_eq!(router.apply(ScreenEvent::SkipQuiz), Ok(Screen::MainContent));
        assert!(router.answers().is_empty());
    }

    #[test]
    fn undefined_transitions_are_rejected_without_change() {
        let mut router = ScreenRouter::default();
        let err = router.apply(ScreenEvent::QuizCompleted(vec!["A".into()])).unwrap_err();
        assert_eq!(err, TransitionError { from: Screen::Splash, event: "quiz-completed" });
        assert_eq!(router.screen(), Screen::Splash);
        assert!(router.answers().is_empty());
    }

    #[test]
    fn main_content_is_terminal() {
        for event in all_events() {
            assert_eq!(next_screen(Screen::MainContent, &event), None, "{:?}", event);
        }
    }

    #[test]
    fn table_only_yields_known_screens() {
        let mut defined = 0;
        for from in SCREENS {
            for event in all_events() {
                if let Some(to) = next_screen(from, &event) {
                    assert!(SCREENS.contains(&to));
                    assert_ne!(from, to);
                    defined += 1;
                }
            }
        }
        assert_eq!(defined, 5);
    }

    #[test]
    fn reducer_keeps_state_on_rejected_event() {
        let router = Rc::new(ScreenRouter::default());
        let same = router.clone().reduce(ScreenEvent::ContinueWithoutSending);
        assert!(Rc::ptr_eq(&router, &same));

        let quiz = router.reduce(ScreenEvent::TakeAssessment);
        assert_eq!(quiz.screen(), Screen::Quiz);
    }
}
