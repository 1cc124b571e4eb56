use crate::selection::SamplingMode;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub distractor_1: String,
    pub distractor_2: String,
    pub distractor_3: String,
}

impl Question {
    /// All four answer texts, canonical answer first.
    pub fn choices(&self) -> [&str; 4] {
        [
            &self.answer,
            &self.distractor_1,
            &self.distractor_2,
            &self.distractor_3,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub code: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// A wrong answer recorded during a single quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectAnswer {
    pub question: Question,
    pub selected: String,
    pub correct: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Basic,
    Advanced,
}

impl Course {
    pub const ALL: [Course; 2] = [Course::Basic, Course::Advanced];

    pub fn title(self) -> &'static str {
        match self {
            Course::Basic => "Basic",
            Course::Advanced => "Advanced",
        }
    }

    /// Level slug used in bank file names.
    pub fn slug(self) -> &'static str {
        match self {
            Course::Basic => "basic",
            Course::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    CourseSelect,
    CategoryMenu,
    QuizRun {
        title: String,
        pool: Vec<Question>,
        mode: SamplingMode,
    },
    Review(Vec<IncorrectAnswer>),
    Exit,
}
