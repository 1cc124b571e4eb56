use super::draw_help;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::wrap_words;
use crate::views::{FeedbackView, QuestionView};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

// "1. " before the first line of a choice, blanks before the rest.
const CHOICE_INDENT: usize = 3;

pub fn draw_quiz(f: &mut Frame, question: &QuestionView, feedback: Option<&FeedbackView>) {
    // Outer margin and the choices border.
    let inner_width = (f.area().width as usize).saturating_sub(4);
    let choices = choice_text(question, inner_width.saturating_sub(CHOICE_INDENT));
    let choice_lines = u16::try_from(choices.lines.len()).unwrap_or(u16::MAX);
    let layout = calculate_quiz_chunks(f.area(), choice_lines);

    let progress = format!("Question {} of {}", question.position, question.total);
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_text = Paragraph::new(format!("{}: {}", question.id, question.text))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(question_text, layout.question_area);

    let choices = Paragraph::new(choices)
        .block(Block::default().borders(Borders::ALL).title("Choices"));
    f.render_widget(choices, layout.choices_area);

    if let Some(feedback) = feedback {
        draw_feedback(f, layout.feedback_area, feedback);
        if feedback.correct {
            draw_help(f, layout.help_area, &[]);
        } else {
            draw_help(f, layout.help_area, &[("any key", "Continue")]);
        }
    } else {
        draw_help(f, layout.help_area, &[("1-4", "Answer"), ("q", "Back to Categories")]);
    }
}

/// Numbered choices, each wrapped under its own number so none hides another.
fn choice_text(question: &QuestionView, width: usize) -> Text<'static> {
    let mut text = Text::default();
    for (i, choice) in question.choices.iter().enumerate() {
        for (n, line) in wrap_words(choice, width).into_iter().enumerate() {
            let prefix = if n == 0 {
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::from(" ".repeat(CHOICE_INDENT))
            };
            text.push_line(Line::from(vec![prefix, Span::from(line)]));
        }
    }
    text
}

fn draw_feedback(f: &mut Frame, area: Rect, feedback: &FeedbackView) {
    let (text, color) = if feedback.correct {
        (
            Text::from(Line::from(Span::styled(
                "✓ Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))),
            Color::Green,
        )
    } else {
        let mut text = Text::default();
        text.push_line(Line::from(Span::styled(
            "✗ Wrong!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(vec![
            Span::from("Correct answer: "),
            Span::styled(
                feedback.correct_answer.as_str(),
                Style::default().fg(Color::Yellow),
            ),
        ]));
        (text, Color::Red)
    };

    let panel = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(panel, area);
}
