use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub choices_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

/// Title, body, one-line help: used by the menus, results and review screens.
pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

/// `choice_lines` is the wrapped height of the four choices, borders excluded.
pub fn calculate_quiz_chunks(area: Rect, choice_lines: u16) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(choice_lines.saturating_add(2)),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        choices_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}
