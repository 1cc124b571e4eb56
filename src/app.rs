use crate::bank::{QuestionBank, load_bank};
use crate::config::Config;
use crate::error::QuizError;
use crate::input::KeyInput;
use crate::models::{AppState, IncorrectAnswer, Question};
use crate::selection::{CourseSelection, SamplingMode, Selection, resolve, resolve_course};
use crate::session::QuizSession;
use crate::ui::Presenter;
use crate::views::{CategoryMenuView, CourseMenuView, ReviewView};
use rand::Rng;

/// Drives course selection, category selection, quiz runs and review.
pub struct App<I, P, R> {
    config: Config,
    input: I,
    presenter: P,
    rng: R,
    bank: Option<QuestionBank>,
}

impl<I: KeyInput, P: Presenter, R: Rng> App<I, P, R> {
    pub fn new(config: Config, input: I, presenter: P, rng: R) -> Self {
        Self {
            config,
            input,
            presenter,
            rng,
            bank: None,
        }
    }

    /// Run until the user quits from the course menu.
    pub fn run(&mut self) -> Result<(), QuizError> {
        let mut state = AppState::CourseSelect;
        loop {
            state = match state {
                AppState::CourseSelect => self.select_course()?,
                AppState::CategoryMenu => self.select_category()?,
                AppState::QuizRun { title, pool, mode } => self.run_quiz(&title, &pool, mode)?,
                AppState::Review(log) => self.review(&log)?,
                AppState::Exit => return Ok(()),
            };
        }
    }

    fn select_course(&mut self) -> Result<AppState, QuizError> {
        self.presenter.course_menu(&CourseMenuView::new())?;
        loop {
            let key = self.input.read_key()?;
            match resolve_course(key) {
                CourseSelection::Quit => return Ok(AppState::Exit),
                CourseSelection::Chosen(course) => {
                    let bank = load_bank(&self.config.bank_path(course), course)?;
                    self.bank = Some(bank);
                    return Ok(AppState::CategoryMenu);
                }
                CourseSelection::Invalid => {
                    tracing::debug!(?key, "ignored key on course menu");
                }
            }
        }
    }

    fn select_category(&mut self) -> Result<AppState, QuizError> {
        let Some(bank) = &self.bank else {
            return Ok(AppState::CourseSelect);
        };
        self.presenter
            .category_menu(&CategoryMenuView::from_bank(bank))?;

        loop {
            let key = self.input.read_key()?;
            match resolve(key, bank.categories.len()) {
                Selection::Quit => {
                    self.bank = None;
                    return Ok(AppState::CourseSelect);
                }
                Selection::Chosen { index, mode } => match bank.pool(index) {
                    Some((title, pool)) if !pool.is_empty() => {
                        return Ok(AppState::QuizRun { title, pool, mode });
                    }
                    _ => tracing::debug!(index, "no questions behind menu entry"),
                },
                Selection::Invalid => {
                    tracing::debug!(?key, "ignored key on category menu");
                }
            }
        }
    }

    fn run_quiz(
        &mut self,
        title: &str,
        pool: &[Question],
        mode: SamplingMode,
    ) -> Result<AppState, QuizError> {
        tracing::info!(category = title, "starting quiz");
        let mut session =
            QuizSession::start(pool, mode, self.config.question_limit, &mut self.rng);

        while !session.is_complete() {
            let view = session.present_current(&mut self.rng)?;
            self.presenter.question(&view, None)?;

            let feedback = loop {
                let key = self.input.read_key()?;
                if key == 'q' {
                    session.quit()?;
                    return Ok(AppState::CategoryMenu);
                }
                if let Some(choice @ 1..=4) = key.to_digit(10) {
                    break session.submit(choice as usize)?;
                }
            };

            self.presenter.question(&view, Some(&feedback))?;
            if feedback.correct {
                self.presenter.pause(self.config.feedback_delay())?;
            } else {
                self.input.read_key()?;
            }
            session.advance()?;
        }

        let results = session.results()?;
        tracing::info!(
            category = title,
            score = results.score,
            total = results.total,
            percentage = results.percentage,
            "quiz finished"
        );
        self.presenter.results(&results)?;
        self.input.read_key()?;

        if session.incorrect_log().is_empty() {
            Ok(AppState::CategoryMenu)
        } else {
            Ok(AppState::Review(session.into_incorrect_log()))
        }
    }

    fn review(&mut self, log: &[IncorrectAnswer]) -> Result<AppState, QuizError> {
        let mut view = ReviewView::from_log(log);
        loop {
            self.presenter.review(&view)?;
            match self.input.read_key()? {
                'j' => view.scroll_down(),
                'k' => view.scroll_up(),
                _ => return Ok(AppState::CategoryMenu),
            }
        }
    }
}
