use super::draw_help;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::{format_percentage, truncate_string};
use crate::views::{ResultsView, ReviewView};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const LINES_PER_ENTRY: usize = 5;

pub fn draw_results(f: &mut Frame, results: &ResultsView) {
    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new("Quiz Complete!")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::from("Score: "),
        Span::styled(
            results.score.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" / {}", results.total)),
    ]));
    text.push_line(Line::from(vec![
        Span::from("Percentage: "),
        Span::styled(
            format_percentage(results.percentage),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let body = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(body, layout.body_area);

    if results.incorrect > 0 {
        draw_help(f, layout.help_area, &[("any key", "Review incorrect answers")]);
    } else {
        draw_help(f, layout.help_area, &[("any key", "Return to menu")]);
    }
}

pub fn draw_review(f: &mut Frame, review: &ReviewView) {
    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new(format!(
        "Review Incorrect Answers ({} questions)",
        review.entries.len()
    ))
    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(title, layout.header_area);

    // Borders plus the "Your answer: " label.
    let width = (layout.body_area.width as usize).saturating_sub(2);
    let answer_width = width.saturating_sub(18);

    let total = review.entries.len();
    let first = review.first.min(total.saturating_sub(1));
    let fits = ((layout.body_area.height as usize).saturating_sub(2) / LINES_PER_ENTRY).max(1);
    let last = (first + fits).min(total);

    let mut text = Text::default();
    for (i, entry) in review.entries.iter().enumerate().skip(first).take(fits) {
        text.push_line(Line::from(vec![
            Span::styled(
                format!("Question {}: ", i + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.question_id.as_str(), Style::default().fg(Color::Cyan)),
        ]));
        text.push_line(Line::from(truncate_string(&entry.question_text, width)));
        text.push_line(Line::from(vec![
            Span::styled(
                "  Your answer: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from(truncate_string(&entry.your_answer, answer_width)),
        ]));
        text.push_line(Line::from(vec![
            Span::styled(
                "  Correct answer: ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(truncate_string(&entry.correct_answer, answer_width)),
        ]));
        text.push_line(Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let mut block = Block::default().borders(Borders::ALL);
    if total > 0 {
        block = block.title_bottom(
            Line::from(format!(" {}-{} of {} ", first + 1, last, total)).right_aligned(),
        );
    }
    f.render_widget(Paragraph::new(text).block(block), layout.body_area);

    if first > 0 || last < total {
        draw_help(
            f,
            layout.help_area,
            &[("j/k ↓/↑", "Scroll"), ("any key", "Continue")],
        );
    } else {
        draw_help(f, layout.help_area, &[("any key", "Continue")]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tests::render_to_string;
    use crate::views::ReviewEntry;

    #[test]
    fn test_results_screen() {
        let results = ResultsView {
            score: 2,
            total: 3,
            percentage: 66.7,
            incorrect: 1,
        };
        let screen = render_to_string(80, 20, |f| draw_results(f, &results));
        assert!(screen.contains("Quiz Complete!"));
        assert!(screen.contains("Score: 2 / 3"));
        assert!(screen.contains("Percentage: 66.7%"));
        assert!(screen.contains("Review incorrect answers"));
    }

    #[test]
    fn test_perfect_results_return_to_menu() {
        let results = ResultsView {
            score: 3,
            total: 3,
            percentage: 100.0,
            incorrect: 0,
        };
        let screen = render_to_string(80, 20, |f| draw_results(f, &results));
        assert!(screen.contains("Return to menu"));
    }

    #[test]
    fn test_review_screen_lists_entries() {
        let review = ReviewView {
            entries: vec![ReviewEntry {
                question_id: "B-001-002-003".to_string(),
                question_text: "What is the maximum power?".to_string(),
                your_answer: "10 W".to_string(),
                correct_answer: "1000 W".to_string(),
            }],
            first: 0,
        };
        let screen = render_to_string(80, 24, |f| draw_review(f, &review));
        assert!(screen.contains("Review Incorrect Answers (1 questions)"));
        assert!(screen.contains("B-001-002-003"));
        assert!(screen.contains("Your answer: 10 W"));
        assert!(screen.contains("Correct answer: 1000 W"));
        assert!(screen.contains("1-1 of 1"));
        assert!(!screen.contains("Scroll"));
    }

    fn missed(n: usize) -> ReviewView {
        let entries = (1..=n)
            .map(|i| ReviewEntry {
                question_id: format!("B-001-001-{:03}", i),
                question_text: format!("Question text {}", i),
                your_answer: "wrong".to_string(),
                correct_answer: "right".to_string(),
            })
            .collect();
        ReviewView { entries, first: 0 }
    }

    #[test]
    fn test_review_screen_pages_through_long_lists() {
        let mut review = missed(10);
        let screen = render_to_string(80, 40, |f| draw_review(f, &review));
        // 30 inner rows hold six entries.
        assert!(screen.contains("B-001-001-006"));
        assert!(!screen.contains("B-001-001-007"));
        assert!(screen.contains("1-6 of 10"));
        assert!(screen.contains("Scroll"));

        for _ in 0..20 {
            review.scroll_down();
        }
        let screen = render_to_string(80, 40, |f| draw_review(f, &review));
        assert!(screen.contains("Question 10: B-001-001-010"));
        assert!(!screen.contains("B-001-001-009"));
        assert!(screen.contains("10-10 of 10"));
    }
}
