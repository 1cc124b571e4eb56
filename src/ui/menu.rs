use super::{APP_TITLE, draw_help, draw_title};
use crate::ui::layout::calculate_screen_chunks;
use crate::views::{CategoryMenuView, CourseMenuView};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

fn header_row(columns: &[&'static str]) -> Row<'static> {
    Row::new(columns.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_course_menu(f: &mut Frame, view: &CourseMenuView) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, APP_TITLE);

    let rows: Vec<Row> = view
        .entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(Line::from(entry.key.to_string()).right_aligned())
                    .style(Style::default().fg(Color::Cyan)),
                Cell::from(entry.course.title()).style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(3), Constraint::Min(10)])
        .header(header_row(&["#", "Course"]))
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL).title("Select a course"));
    f.render_widget(table, layout.body_area);

    draw_help(f, layout.help_area, &[("1/2", "Select Course"), ("q", "Quit")]);
}

pub fn draw_category_menu(f: &mut Frame, view: &CategoryMenuView) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, &format!("{} - {}", APP_TITLE, view.course));

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(Line::from(row.index.to_string()).right_aligned())
                    .style(Style::default().fg(Color::Cyan)),
                Cell::from(row.title.as_str()).style(Style::default().fg(Color::Green)),
                Cell::from(Line::from(row.count.to_string()).right_aligned())
                    .style(Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let mut block = Block::default().borders(Borders::ALL).title("Categories");
    if view.skipped > 0 {
        block = block.title_bottom(
            Line::from(format!(" {} malformed questions skipped ", view.skipped))
                .style(Style::default().fg(Color::DarkGray))
                .right_aligned(),
        );
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(9),
        ],
    )
    .header(header_row(&["#", "Category", "Questions"]))
    .column_spacing(2)
    .block(block);
    f.render_widget(table, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("0-9", "Start (20 questions)"),
            ("SHIFT+0-9", "All questions"),
            ("q", "Back"),
        ],
    );
}
