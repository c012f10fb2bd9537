use crate::config::Theme;
use crate::error::{SessionError, SourceError};
use crate::models::QuestionSet;
use crate::session::{LoadTicket, Phase, SessionController, Submission};
use crate::ui::Palette;

/// Terminal-side state wrapped around the session: which option is
/// highlighted, how far the review is scrolled, which colours to use.
pub struct App {
    session: SessionController,
    question_count: usize,
    palette: Palette,
    highlighted: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(question_count: usize, theme: Theme) -> Self {
        Self {
            session: SessionController::new(),
            question_count,
            palette: Palette::for_theme(theme),
            highlighted: 0,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn phase(&self) -> &Phase {
        self.session.state().phase()
    }

    /// Begin loading a new session. Returns `None` if a load is already in
    /// flight.
    pub fn start_session(&mut self) -> Option<LoadTicket> {
        match self.session.begin_load(self.question_count) {
            Ok(ticket) => {
                self.highlighted = 0;
                self.result_scroll = 0;
                Some(ticket)
            }
            Err(err) => {
                log::debug!("start ignored: {}", err);
                None
            }
        }
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<QuestionSet, SourceError>) {
        self.session.complete_load(ticket, result);
    }

    pub fn abandon_load(&mut self) {
        self.session.abandon();
    }

    fn current_option_count(&self) -> usize {
        self.session
            .state()
            .current_question()
            .map_or(0, |question| question.options().len())
    }

    fn current_is_answered(&self) -> bool {
        self.session
            .state()
            .current_answer()
            .is_some_and(|answer| answer.is_answered())
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_option_count();
        if count > 0 && !self.current_is_answered() {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.current_option_count();
        if count > 0 && !self.current_is_answered() {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    pub fn submit_highlighted(&mut self) {
        self.submit_option(self.highlighted);
    }

    pub fn submit_option(&mut self, index: usize) {
        match self.session.submit_option(index) {
            Ok(Submission::Recorded { .. }) => {
                if self.session.state().is_completed() {
                    self.result_scroll = 0;
                }
            }
            Ok(Submission::AlreadyAnswered | Submission::Ignored) => {}
            Err(SessionError::InvalidTransition(reason)) => {
                log::debug!("submission rejected: {}", reason);
            }
            Err(err) => log::error!("submission failed: {}", err),
        }
    }

    pub fn next_question(&mut self) {
        let before = self.session.state().cursor();
        if self.session.next() != before {
            self.highlighted = 0;
        }
    }

    pub fn previous_question(&mut self) {
        let before = self.session.state().cursor();
        if self.session.previous() != before {
            self.highlighted = 0;
        }
    }

    pub fn scroll_results_down(&mut self) {
        let lines: usize = self
            .session
            .state()
            .questions()
            .iter()
            .map(|question| question.options().len() + 2)
            .sum();
        self.result_scroll = (self.result_scroll + 1).min(lines.saturating_sub(1));
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::Question;

    fn question_set(n: usize) -> QuestionSet {
        let mut rng = StdRng::seed_from_u64(4);
        let questions = (0..n)
            .map(|i| {
                Question::new(
                    format!("Q{}", i),
                    "right".to_string(),
                    vec!["wrong".to_string(), "other".to_string(), "nope".to_string()],
                    &mut rng,
                )
                .unwrap()
            })
            .collect();
        QuestionSet::new(questions)
    }

    fn loaded_app(n: usize) -> App {
        let mut app = App::new(n, Theme::Dark);
        let ticket = app.start_session().unwrap();
        app.finish_load(ticket, Ok(question_set(n)));
        app
    }

    #[test]
    fn test_start_is_not_reentrant() {
        let mut app = App::new(3, Theme::Dark);
        assert!(app.start_session().is_some());
        assert!(app.start_session().is_none());
        assert_eq!(*app.phase(), Phase::Loading);
    }

    #[test]
    fn test_option_highlight_wraps() {
        let mut app = loaded_app(2);
        app.select_previous_option();
        assert_eq!(app.highlighted(), 3);
        app.select_next_option();
        assert_eq!(app.highlighted(), 0);
    }

    #[test]
    fn test_highlight_frozen_after_answer() {
        let mut app = loaded_app(2);
        app.select_next_option();
        app.submit_highlighted();
        app.select_next_option();
        assert_eq!(app.highlighted(), 1);
    }

    #[test]
    fn test_navigation_resets_highlight() {
        let mut app = loaded_app(3);
        app.select_next_option();
        app.next_question();
        assert_eq!(app.session().state().cursor(), 1);
        assert_eq!(app.highlighted(), 0);

        app.previous_question();
        app.previous_question();
        assert_eq!(app.session().state().cursor(), 0);
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut app = App::new(3, Theme::Dark);
        app.start_session();
        app.submit_option(0);
        app.next_question();
        app.select_next_option();
        assert_eq!(*app.phase(), Phase::Loading);
        assert_eq!(app.highlighted(), 0);
    }

    #[test]
    fn test_answering_everything_completes() {
        let mut app = loaded_app(2);
        app.submit_option(0);
        app.next_question();
        app.submit_option(1);
        assert_eq!(*app.phase(), Phase::Completed);

        app.scroll_results_down();
        app.scroll_results_down();
        assert_eq!(app.result_scroll(), 2);
        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 1);
    }

    #[test]
    fn test_abandon_returns_to_welcome() {
        let mut app = App::new(3, Theme::Dark);
        let ticket = app.start_session().unwrap();
        app.abandon_load();
        assert_eq!(*app.phase(), Phase::Idle);

        app.finish_load(ticket, Ok(question_set(3)));
        assert_eq!(*app.phase(), Phase::Idle);
    }
}
