use crate::models::Course;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("{course} question bank not found at {}", path.display())]
    DataNotFound { course: Course, path: PathBuf },
    #[error("failed to read question bank {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid question bank {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Terminal(#[from] io::Error),
    #[error("quiz session error: {0}")]
    Session(#[from] SessionError),
}

impl QuizError {
    /// Process exit code. Zero stays reserved for a normal quit.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Misuse of the quiz session state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no question is awaiting an answer")]
    NotActive,
    #[error("no answer feedback is being shown")]
    NotInFeedback,
    #[error("quiz is not complete")]
    NotComplete,
    #[error("current question has not been presented")]
    NotPresented,
    #[error("choice {0} is out of range (1-4)")]
    ChoiceOutOfRange(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedQuestion {
    #[error("question {id} is missing field `{field}`")]
    MissingField { id: String, field: &'static str },
    #[error("entry {position} of category {category} is not a question object")]
    NotAnObject { category: String, position: usize },
}
