use crate::models::Course;

/// Shifted digit symbols on a US layout, indexed by the digit they share a key with.
const SHIFTED_DIGITS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Capped at the configured question limit.
    Limited,
    /// Every question in the pool.
    Unlimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    Invalid,
    Chosen { index: usize, mode: SamplingMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseSelection {
    Quit,
    Invalid,
    Chosen(Course),
}

/// Interpret a keypress against a menu whose entry 0 is "All" and whose
/// entries `1..=option_count` are the named categories.
pub fn resolve(key: char, option_count: usize) -> Selection {
    if key == 'q' {
        return Selection::Quit;
    }

    let (index, mode) = if let Some(digit) = key.to_digit(10) {
        (digit as usize, SamplingMode::Limited)
    } else if let Some(digit) = SHIFTED_DIGITS.iter().position(|&c| c == key) {
        (digit, SamplingMode::Unlimited)
    } else {
        return Selection::Invalid;
    };

    if index > option_count {
        return Selection::Invalid;
    }
    Selection::Chosen { index, mode }
}

/// Course menu: `1`/`2` pick a course, `q` quits, nothing else is accepted.
pub fn resolve_course(key: char) -> CourseSelection {
    match resolve(key, Course::ALL.len()) {
        Selection::Quit => CourseSelection::Quit,
        Selection::Chosen {
            index,
            mode: SamplingMode::Limited,
        } if index >= 1 => CourseSelection::Chosen(Course::ALL[index - 1]),
        _ => CourseSelection::Invalid,
    }
}
