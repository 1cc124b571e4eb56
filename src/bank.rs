use crate::error::{MalformedQuestion, QuizError};
use crate::models::{Category, Course, Question};
use crate::views::ALL_CATEGORIES;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

lazy_static::lazy_static! {
    static ref QUESTION_ID: Regex = Regex::new(r"^([A-Z]-\d{3})-\d{3}-\d{3}$").unwrap();
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    questions: Vec<Value>,
}

// Fields stay untyped so one bad question cannot reject the whole file.
#[derive(Debug, Default, Deserialize)]
struct RawQuestion {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    question: Option<Value>,
    #[serde(default)]
    answer: Option<Value>,
    #[serde(default)]
    distractor_1: Option<Value>,
    #[serde(default)]
    distractor_2: Option<Value>,
    #[serde(default)]
    distractor_3: Option<Value>,
}

/// Replace the bare `NaN`/`Infinity` tokens pandas writes for empty cells
/// with `null`, leaving string contents alone.
fn replace_non_finite(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut rest = json;
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = rest.chars().next() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = ["-Infinity", "Infinity", "NaN"]
            .into_iter()
            .find(|token| rest.starts_with(token))
        {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn text(value: Option<Value>) -> Option<String> {
    let s = match value? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.trim().is_empty() { None } else { Some(s) }
}

impl RawQuestion {
    fn into_question(self, position: usize) -> Result<Question, MalformedQuestion> {
        let id = text(self.id);
        let label = id.clone().unwrap_or_else(|| format!("#{}", position + 1));
        let require = |value: Option<Value>, field: &'static str| {
            text(value).ok_or_else(|| MalformedQuestion::MissingField {
                id: label.clone(),
                field,
            })
        };

        Ok(Question {
            question: require(self.question, "question")?,
            answer: require(self.answer, "answer")?,
            distractor_1: require(self.distractor_1, "distractor_1")?,
            distractor_2: require(self.distractor_2, "distractor_2")?,
            distractor_3: require(self.distractor_3, "distractor_3")?,
            id: id.ok_or_else(|| MalformedQuestion::MissingField {
                id: label.clone(),
                field: "id",
            })?,
        })
    }
}

/// Category code (`B-001`) of a conventional question id (`B-001-002-003`).
pub fn category_code(id: &str) -> Option<&str> {
    QUESTION_ID
        .captures(id)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    pub course: Course,
    /// Sorted by title.
    pub categories: Vec<Category>,
    pub skipped: Vec<MalformedQuestion>,
}

impl QuestionBank {
    pub fn from_json(course: Course, json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, RawCategory> =
            serde_json::from_str(&replace_non_finite(json))?;
        Ok(Self::from_raw(course, raw))
    }

    fn from_raw(course: Course, raw: BTreeMap<String, RawCategory>) -> Self {
        let mut by_title: BTreeMap<String, Category> = BTreeMap::new();
        let mut skipped = Vec::new();

        for (code, raw_category) in raw {
            let title = raw_category.title.unwrap_or_else(|| code.clone());
            let entry = by_title.entry(title.clone()).or_insert_with(|| Category {
                code: code.clone(),
                title,
                questions: Vec::new(),
            });

            for (position, value) in raw_category.questions.into_iter().enumerate() {
                let parsed = serde_json::from_value::<RawQuestion>(value)
                    .map_err(|_| MalformedQuestion::NotAnObject {
                        category: code.clone(),
                        position: position + 1,
                    })
                    .and_then(|raw_question| raw_question.into_question(position));
                match parsed {
                    Ok(question) => {
                        match category_code(&question.id) {
                            Some(prefix) if prefix == code => {}
                            Some(prefix) => tracing::warn!(
                                id = %question.id,
                                filed_under = %code,
                                prefix,
                                "question filed under a different category code"
                            ),
                            None => tracing::warn!(
                                id = %question.id,
                                "question id does not follow the X-NNN-NNN-NNN convention"
                            ),
                        }
                        entry.questions.push(question);
                    }
                    Err(err) => {
                        tracing::warn!(category = %code, "skipping question: {}", err);
                        skipped.push(err);
                    }
                }
            }
        }

        let categories: Vec<Category> = by_title
            .into_values()
            .filter(|category| !category.questions.is_empty())
            .collect();

        Self {
            course,
            categories,
            skipped,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// The "All Categories" pool, in menu order.
    pub fn all_questions(&self) -> Vec<Question> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter().cloned())
            .collect()
    }

    /// Title and questions behind a menu index (0 = all, 1.. = sorted categories).
    pub fn pool(&self, index: usize) -> Option<(String, Vec<Question>)> {
        if index == 0 {
            return Some((ALL_CATEGORIES.to_string(), self.all_questions()));
        }
        self.categories
            .get(index - 1)
            .map(|c| (c.title.clone(), c.questions.clone()))
    }
}

pub fn load_bank(path: &Path, course: Course) -> Result<QuestionBank, QuizError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(QuizError::DataNotFound {
                course,
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(QuizError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let bank = QuestionBank::from_json(course, &content).map_err(|source| QuizError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        course = %course,
        path = %path.display(),
        categories = bank.categories.len(),
        questions = bank.total_questions(),
        skipped = bank.skipped.len(),
        "loaded question bank"
    );
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BANK: &str = r#"{
        "B-002": {
            "title": "Operating and Procedures",
            "questions": [
                {"id": "B-002-001-001", "question": "Q1", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"},
                {"id": "B-002-001-002", "question": "Q2", "answer": 50, "distractor_1": 25, "distractor_2": 75, "distractor_3": 100}
            ]
        },
        "B-001": {
            "title": "Regulation and Policies",
            "questions": [
                {"id": "B-001-001-001", "question": "Q3", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"},
                {"id": "B-001-001-002", "question": "Q4", "answer": "A", "distractor_1": "B", "distractor_2": null, "distractor_3": "D"},
                {"id": "B-001-001-003", "question": "Q5", "answer": "A", "distractor_1": "B", "distractor_2": "C"}
            ]
        },
        "B-003": {
            "title": "Empty After Skipping",
            "questions": [
                {"id": "B-003-001-001", "question": "  ", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"}
            ]
        }
    }"#;

    #[test]
    fn test_categories_sorted_by_title() {
        let bank = QuestionBank::from_json(Course::Basic, BANK).unwrap();
        let titles: Vec<&str> = bank.categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Operating and Procedures", "Regulation and Policies"]);
        assert_eq!(bank.categories[1].code, "B-001");
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let json = r#"{
            "A-001": {"title": "alpha", "questions": [{"id": "A-001-001-001", "question": "Q", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"}]},
            "A-002": {"title": "Zulu", "questions": [{"id": "A-002-001-001", "question": "Q", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"}]}
        }"#;
        let bank = QuestionBank::from_json(Course::Advanced, json).unwrap();
        assert_eq!(bank.categories[0].title, "Zulu");
        assert_eq!(bank.categories[1].title, "alpha");
    }

    #[test]
    fn test_malformed_questions_are_skipped_and_reported() {
        let bank = QuestionBank::from_json(Course::Basic, BANK).unwrap();
        assert_eq!(bank.total_questions(), 3);
        assert_eq!(bank.skipped.len(), 3);
        assert!(bank.skipped.contains(&MalformedQuestion::MissingField {
            id: "B-001-001-002".to_string(),
            field: "distractor_2",
        }));
        assert!(bank.skipped.contains(&MalformedQuestion::MissingField {
            id: "B-001-001-003".to_string(),
            field: "distractor_3",
        }));
    }

    #[test]
    fn test_empty_categories_dropped() {
        let bank = QuestionBank::from_json(Course::Basic, BANK).unwrap();
        assert!(
            bank.categories
                .iter()
                .all(|c| c.title != "Empty After Skipping")
        );
    }

    #[test]
    fn test_numeric_fields_become_text() {
        let bank = QuestionBank::from_json(Course::Basic, BANK).unwrap();
        let q = &bank.categories[0].questions[1];
        assert_eq!(q.answer, "50");
        assert_eq!(q.distractor_3, "100");
    }

    #[test]
    fn test_same_title_categories_merge() {
        let json = r#"{
            "B-001": {"title": "Shared", "questions": [{"id": "B-001-001-001", "question": "Q1", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"}]},
            "B-009": {"title": "Shared", "questions": [{"id": "B-009-001-001", "question": "Q2", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"}]}
        }"#;
        let bank = QuestionBank::from_json(Course::Basic, json).unwrap();
        assert_eq!(bank.categories.len(), 1);
        assert_eq!(bank.categories[0].questions.len(), 2);
    }

    #[test]
    fn test_all_categories_pool() {
        let bank = QuestionBank::from_json(Course::Basic, BANK).unwrap();
        let (title, questions) = bank.pool(0).unwrap();
        assert_eq!(title, ALL_CATEGORIES);
        assert_eq!(questions.len(), bank.total_questions());

        let (title, questions) = bank.pool(2).unwrap();
        assert_eq!(title, "Regulation and Policies");
        assert_eq!(questions.len(), 1);
        assert!(bank.pool(3).is_none());
    }

    #[test]
    fn test_category_code() {
        assert_eq!(category_code("B-001-002-003"), Some("B-001"));
        assert_eq!(category_code("A-007-001-010"), Some("A-007"));
        assert_eq!(category_code("bogus"), None);
        assert_eq!(category_code("B-001"), None);
    }

    #[test]
    fn test_load_bank_missing_file_is_data_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amateur_basic_question.json");
        let err = load_bank(&path, Course::Basic).unwrap_err();
        assert!(matches!(err, QuizError::DataNotFound { course: Course::Basic, .. }));
    }

    #[test]
    fn test_nan_cells_skip_only_their_question() {
        let json = r#"{
            "B-001": {"title": "Regulation", "questions": [
                {"id": "B-001-001-001", "question": "Q1", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": NaN},
                {"id": "B-001-001-002", "question": "NaN in text stays", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"}
            ]}
        }"#;
        let bank = QuestionBank::from_json(Course::Basic, json).unwrap();
        assert_eq!(bank.total_questions(), 1);
        assert_eq!(
            bank.categories[0].questions[0].question,
            "NaN in text stays"
        );
        assert_eq!(
            bank.skipped,
            [MalformedQuestion::MissingField {
                id: "B-001-001-001".to_string(),
                field: "distractor_3",
            }]
        );
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let json = r#"{
            "B-001": {"title": "Regulation", "questions": [
                null,
                {"id": "B-001-001-002", "question": "Q2", "answer": "A", "distractor_1": "B", "distractor_2": "C", "distractor_3": "D"},
                "stray"
            ]}
        }"#;
        let bank = QuestionBank::from_json(Course::Basic, json).unwrap();
        assert_eq!(bank.total_questions(), 1);
        assert_eq!(bank.categories[0].questions[0].id, "B-001-001-002");
        assert_eq!(
            bank.skipped,
            [
                MalformedQuestion::NotAnObject {
                    category: "B-001".to_string(),
                    position: 1,
                },
                MalformedQuestion::NotAnObject {
                    category: "B-001".to_string(),
                    position: 3,
                },
            ]
        );
    }

    #[test]
    fn test_replace_non_finite_ignores_strings() {
        assert_eq!(
            replace_non_finite(r#"[NaN, -Infinity, "NaN \" Infinity"]"#),
            r#"[null, null, "NaN \" Infinity"]"#
        );
    }

    #[test]
    fn test_load_bank_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_bank(file.path(), Course::Basic).unwrap_err();
        assert!(matches!(err, QuizError::Parse { .. }));
    }

    #[test]
    fn test_load_bank_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", BANK).unwrap();
        let bank = load_bank(file.path(), Course::Advanced).unwrap();
        assert_eq!(bank.course, Course::Advanced);
        assert_eq!(bank.categories.len(), 2);
    }
}
