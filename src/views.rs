//! Render-ready snapshots handed to the presentation layer.

use crate::bank::QuestionBank;
use crate::models::{Course, IncorrectAnswer};

pub const ALL_CATEGORIES: &str = "All Categories";

#[derive(Debug, Clone, PartialEq)]
pub struct CourseMenuView {
    pub entries: Vec<CourseEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseEntry {
    pub key: char,
    pub course: Course,
}

impl CourseMenuView {
    pub fn new() -> Self {
        let entries = Course::ALL
            .iter()
            .enumerate()
            .map(|(i, &course)| CourseEntry {
                key: char::from(b'1' + i as u8),
                course,
            })
            .collect();
        Self { entries }
    }
}

impl Default for CourseMenuView {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub index: usize,
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMenuView {
    pub course: Course,
    /// Row 0 is always "All Categories" with the aggregate count.
    pub rows: Vec<CategoryRow>,
    pub skipped: usize,
}

impl CategoryMenuView {
    pub fn from_bank(bank: &QuestionBank) -> Self {
        let mut rows = vec![CategoryRow {
            index: 0,
            title: ALL_CATEGORIES.to_string(),
            count: bank.total_questions(),
        }];
        rows.extend(
            bank.categories
                .iter()
                .enumerate()
                .map(|(i, category)| CategoryRow {
                    index: i + 1,
                    title: category.title.clone(),
                    count: category.questions.len(),
                }),
        );
        Self {
            course: bank.course,
            rows,
            skipped: bank.skipped.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    /// 1-based ordinal.
    pub position: usize,
    pub total: usize,
    pub id: String,
    pub text: String,
    pub choices: [String; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView {
    pub correct: bool,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub score: usize,
    pub total: usize,
    /// One decimal place; 0.0 for an empty quiz.
    pub percentage: f64,
    pub incorrect: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub question_id: String,
    pub question_text: String,
    pub your_answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub entries: Vec<ReviewEntry>,
    /// Index of the entry shown at the top of the screen.
    pub first: usize,
}

impl ReviewView {
    pub fn from_log(log: &[IncorrectAnswer]) -> Self {
        let entries = log
            .iter()
            .map(|record| ReviewEntry {
                question_id: record.question.id.clone(),
                question_text: record.question.question.clone(),
                your_answer: record.selected.clone(),
                correct_answer: record.correct.clone(),
            })
            .collect();
        Self { entries, first: 0 }
    }

    pub fn scroll_down(&mut self) {
        if self.first + 1 < self.entries.len() {
            self.first += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.first = self.first.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Question};

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            question: format!("{}?", id),
            answer: "A".to_string(),
            distractor_1: "B".to_string(),
            distractor_2: "C".to_string(),
            distractor_3: "D".to_string(),
        }
    }

    fn category(code: &str, title: &str, n: usize) -> Category {
        Category {
            code: code.to_string(),
            title: title.to_string(),
            questions: (0..n)
                .map(|i| question(&format!("{}-001-{:03}", code, i)))
                .collect(),
        }
    }

    #[test]
    fn test_course_menu_keys() {
        let view = CourseMenuView::new();
        assert_eq!(view.entries[0].key, '1');
        assert_eq!(view.entries[0].course, Course::Basic);
        assert_eq!(view.entries[1].key, '2');
        assert_eq!(view.entries[1].course, Course::Advanced);
    }

    #[test]
    fn test_category_menu_aggregates_all() {
        let bank = QuestionBank {
            course: Course::Basic,
            categories: vec![category("B-001", "Operating", 5), category("B-002", "Regulation", 7)],
            skipped: Vec::new(),
        };
        let view = CategoryMenuView::from_bank(&bank);

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].index, 0);
        assert_eq!(view.rows[0].title, ALL_CATEGORIES);
        assert_eq!(view.rows[0].count, 12);
        assert_eq!(view.rows[2].index, 2);
        assert_eq!(view.rows[2].title, "Regulation");
        assert_eq!(view.rows[2].count, 7);
    }

    #[test]
    fn test_review_from_log_keeps_order() {
        let log = vec![
            IncorrectAnswer {
                question: question("B-001-001-002"),
                selected: "C".to_string(),
                correct: "A".to_string(),
            },
            IncorrectAnswer {
                question: question("B-001-001-001"),
                selected: "B".to_string(),
                correct: "A".to_string(),
            },
        ];
        let view = ReviewView::from_log(&log);
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].question_id, "B-001-001-002");
        assert_eq!(view.entries[0].your_answer, "C");
        assert_eq!(view.entries[1].correct_answer, "A");
        assert_eq!(view.first, 0);
    }

    #[test]
    fn test_review_scroll_stays_on_an_entry() {
        let log: Vec<IncorrectAnswer> = ["B-001-001-001", "B-001-001-002"]
            .iter()
            .map(|id| IncorrectAnswer {
                question: question(id),
                selected: "B".to_string(),
                correct: "A".to_string(),
            })
            .collect();
        let mut view = ReviewView::from_log(&log);
        view.scroll_up();
        assert_eq!(view.first, 0);
        view.scroll_down();
        view.scroll_down();
        assert_eq!(view.first, 1);
        view.scroll_up();
        assert_eq!(view.first, 0);
    }
}
