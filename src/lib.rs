pub mod app;
pub mod bank;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod sampling;
pub mod selection;
pub mod session;
pub mod ui;
pub mod utils;
pub mod views;


// Re-exports for convenience
pub use app::App;
pub use bank::{QuestionBank, load_bank};
pub use config::Config;
pub use error::{MalformedQuestion, QuizError, SessionError};
pub use input::{KeyInput, ScriptedInput, TerminalInput};
pub use models::{AppState, Category, Course, IncorrectAnswer, Question};
pub use sampling::{QUESTION_LIMIT, sample};
pub use selection::{CourseSelection, SamplingMode, Selection, resolve, resolve_course};
pub use session::{QuizSession, SessionState};
pub use ui::{Presenter, TerminalPresenter};
