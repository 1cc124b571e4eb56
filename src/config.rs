use crate::models::Course;
use crate::sampling::QUESTION_LIMIT;
use clap::Parser;
use clap::builder::TypedValueParser as _;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "amateur-radio-quiz",
    version,
    about = "Quiz yourself on the Canadian amateur radio question banks"
)]
pub struct Config {
    /// Directory holding the converted question banks
    #[arg(long, env = "AMATEUR_QUIZ_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Seed for reproducible shuffling
    #[arg(long, env = "AMATEUR_QUIZ_SEED")]
    pub seed: Option<u64>,

    /// Questions per quiz unless SHIFT+number selects the whole category
    #[arg(long, default_value_t = QUESTION_LIMIT, value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    pub question_limit: usize,

    /// Pause after a correct answer, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub feedback_delay_ms: u64,

    #[arg(long, env = "AMATEUR_QUIZ_LOG", default_value = "amateur_quiz.log")]
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["amateur-radio-quiz"])
    }
}

impl Config {
    pub fn bank_path(&self, course: Course) -> PathBuf {
        self.data_dir
            .join(format!("amateur_{}_question.json", course.slug()))
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }
}
