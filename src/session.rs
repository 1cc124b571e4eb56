use crate::error::SessionError;
use crate::models::{IncorrectAnswer, Question};
use crate::sampling::sample;
use crate::selection::SamplingMode;
use crate::views::{FeedbackView, QuestionView, ResultsView, ReviewView};
use rand::Rng;
use rand::seq::SliceRandom;

/// The four displayed choices of one question, tagged with the slot that
/// holds the canonical answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    choices: [String; 4],
    answer_slot: usize,
}

impl ChoiceSet {
    /// `order[slot]` is the index into `Question::choices()` shown at `slot`.
    fn arrange(question: &Question, order: [usize; 4]) -> Self {
        let source = question.choices();
        let choices = order.map(|i| source[i].to_string());
        let answer_slot = order.iter().position(|&i| i == 0).unwrap_or(0);
        Self {
            choices,
            answer_slot,
        }
    }

    fn shuffled<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let mut order = [0, 1, 2, 3];
        order.shuffle(rng);
        Self::arrange(question, order)
    }

    pub fn choices(&self) -> &[String; 4] {
        &self.choices
    }

    pub fn is_correct(&self, slot: usize) -> bool {
        slot == self.answer_slot
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Feedback(Feedback),
    Complete,
    /// Quit mid-question; no results are reported.
    Aborted,
}

#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    incorrect: Vec<IncorrectAnswer>,
    current_choices: Option<ChoiceSet>,
    state: SessionState,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(
        pool: &[Question],
        mode: SamplingMode,
        limit: usize,
        rng: &mut R,
    ) -> Self {
        let questions = sample(pool, mode, limit, rng);
        let state = if questions.is_empty() {
            SessionState::Complete
        } else {
            SessionState::Active
        };
        tracing::info!(
            pool = pool.len(),
            questions = questions.len(),
            ?mode,
            "quiz started"
        );
        Self {
            questions,
            current_index: 0,
            score: 0,
            incorrect: Vec::new(),
            current_choices: None,
            state,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Shuffle the current question's choices afresh and describe it for display.
    pub fn present_current<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<QuestionView, SessionError> {
        let question = self.active_question()?;
        let choices = ChoiceSet::shuffled(question, rng);
        Ok(self.hold(choices))
    }

    #[cfg(test)]
    fn present_arranged(&mut self, order: [usize; 4]) -> Result<QuestionView, SessionError> {
        let choices = ChoiceSet::arrange(self.active_question()?, order);
        Ok(self.hold(choices))
    }

    fn active_question(&self) -> Result<&Question, SessionError> {
        if self.state != SessionState::Active {
            return Err(SessionError::NotActive);
        }
        self.questions
            .get(self.current_index)
            .ok_or(SessionError::NotActive)
    }

    fn hold(&mut self, choices: ChoiceSet) -> QuestionView {
        let question = &self.questions[self.current_index];
        let view = QuestionView {
            position: self.current_index + 1,
            total: self.questions.len(),
            id: question.id.clone(),
            text: question.question.clone(),
            choices: choices.choices().clone(),
        };
        self.current_choices = Some(choices);
        view
    }

    /// Answer the current question with a 1-based choice number.
    pub fn submit(&mut self, choice: usize) -> Result<FeedbackView, SessionError> {
        if self.state != SessionState::Active {
            return Err(SessionError::NotActive);
        }
        if !(1..=4).contains(&choice) {
            return Err(SessionError::ChoiceOutOfRange(choice));
        }
        let choices = self
            .current_choices
            .take()
            .ok_or(SessionError::NotPresented)?;

        let slot = choice - 1;
        let question = &self.questions[self.current_index];
        let correct = choices.is_correct(slot);
        if correct {
            self.score += 1;
        } else {
            self.incorrect.push(IncorrectAnswer {
                question: question.clone(),
                selected: choices.choices()[slot].clone(),
                correct: question.answer.clone(),
            });
        }
        tracing::debug!(id = %question.id, slot, correct, "answer submitted");

        let feedback = Feedback {
            correct,
            correct_answer: question.answer.clone(),
        };
        let view = FeedbackView {
            correct: feedback.correct,
            correct_answer: feedback.correct_answer.clone(),
        };
        self.state = SessionState::Feedback(feedback);
        Ok(view)
    }

    /// Leave feedback for the next question, or finish the quiz.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, SessionState::Feedback(_)) {
            return Err(SessionError::NotInFeedback);
        }
        self.current_index += 1;
        if self.current_index == self.questions.len() {
            self.state = SessionState::Complete;
            tracing::info!(score = self.score, total = self.questions.len(), "quiz complete");
        } else {
            self.state = SessionState::Active;
        }
        Ok(())
    }

    /// Abandon the quiz; only honoured while a question awaits an answer.
    pub fn quit(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Active {
            return Err(SessionError::NotActive);
        }
        tracing::debug!(
            answered = self.current_index,
            total = self.questions.len(),
            "quiz abandoned"
        );
        self.current_choices = None;
        self.state = SessionState::Aborted;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.score as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn incorrect_log(&self) -> &[IncorrectAnswer] {
        &self.incorrect
    }

    pub fn results(&self) -> Result<ResultsView, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        Ok(ResultsView {
            score: self.score,
            total: self.total(),
            percentage: (self.percentage() * 10.0).round() / 10.0,
            incorrect: self.incorrect.len(),
        })
    }

    pub fn review(&self) -> Result<ReviewView, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        Ok(ReviewView::from_log(&self.incorrect))
    }

    pub fn into_incorrect_log(self) -> Vec<IncorrectAnswer> {
        self.incorrect
    }
}
