pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_screen_chunks};
pub use menu::{draw_category_menu, draw_course_menu};
pub use quiz::draw_quiz;
pub use summary::{draw_results, draw_review};

use crate::views::{
    CategoryMenuView, CourseMenuView, FeedbackView, QuestionView, ResultsView, ReviewView,
};
use crossterm::event;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub const APP_TITLE: &str = "Canadian Amateur Radio Quiz";

/// Everything the orchestrator needs from a display.
pub trait Presenter {
    fn course_menu(&mut self, view: &CourseMenuView) -> io::Result<()>;
    fn category_menu(&mut self, view: &CategoryMenuView) -> io::Result<()>;
    fn question(&mut self, view: &QuestionView, feedback: Option<&FeedbackView>)
    -> io::Result<()>;
    fn results(&mut self, view: &ResultsView) -> io::Result<()>;
    fn review(&mut self, view: &ReviewView) -> io::Result<()>;
    /// Hold the current screen; keys pressed meanwhile are discarded.
    fn pause(&mut self, duration: Duration) -> io::Result<()>;
}

pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    fn course_menu(&mut self, view: &CourseMenuView) -> io::Result<()> {
        self.terminal.draw(|f| draw_course_menu(f, view))?;
        Ok(())
    }

    fn category_menu(&mut self, view: &CategoryMenuView) -> io::Result<()> {
        self.terminal.draw(|f| draw_category_menu(f, view))?;
        Ok(())
    }

    fn question(
        &mut self,
        view: &QuestionView,
        feedback: Option<&FeedbackView>,
    ) -> io::Result<()> {
        self.terminal.draw(|f| draw_quiz(f, view, feedback))?;
        Ok(())
    }

    fn results(&mut self, view: &ResultsView) -> io::Result<()> {
        self.terminal.draw(|f| draw_results(f, view))?;
        Ok(())
    }

    fn review(&mut self, view: &ReviewView) -> io::Result<()> {
        self.terminal.draw(|f| draw_review(f, view))?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> io::Result<()> {
        std::thread::sleep(duration);
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }
}

pub(crate) fn draw_title(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(header, area);
}

pub(crate) fn draw_help(f: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, label) in keys {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}  ", label)));
    }
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
