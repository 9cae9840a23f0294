//! Dashboard rendering.

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::app::App;
use super::modal::{Focus, Modal};

/// Short labels so every binding fits an 80-column footer.
const FOOTER_KEYS: [(&str, &str); 7] = [
    ("F1", "Server"),
    ("F2", "Refresh"),
    ("F5", "Duplicate"),
    ("F6", "Rename"),
    ("F8", "Delete"),
    ("?", "Help"),
    ("F10", "Exit"),
];

const KEYS: [(&str, &str); 7] = [
    ("F1", "Set Controller"),
    ("F2", "Refresh projects"),
    ("F5", "Duplicate project"),
    ("F6", "Rename project"),
    ("F8", "Delete project"),
    ("?", "Help"),
    ("F10", "Exit"),
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Projects
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_projects(frame, app, chunks[1]);
    render_footer(frame, chunks[2]);

    if let Some(modal) = &app.modal {
        render_modal(frame, modal);
    } else if app.show_help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.title()),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    match &app.server_version {
        Some(version) => {
            spans.push(Span::raw("│ "));
            spans.push(Span::styled(
                format!("v{version}"),
                Style::default().fg(Color::Cyan),
            ));
        }
        None if !app.is_connected() => {
            spans.push(Span::raw("│ "));
            spans.push(Span::styled(
                "No controller (press F1)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        None => {}
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn status_style(status: &str) -> Style {
    match status {
        "opened" => Style::default().fg(Color::Green),
        "closed" => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::Yellow),
    }
}

fn render_projects(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec![
        "Project Name",
        "Project ID",
        "Project Status",
        "Project Path",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = app
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let stripe = if i % 2 == 1 {
                Style::default().bg(Color::Rgb(30, 30, 40))
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(project.name.clone()),
                Cell::from(project.project_id.clone()),
                Cell::from(project.status.clone()).style(status_style(&project.status)),
                Cell::from(project.path.clone()),
            ])
            .style(stripe)
        })
        .collect();

    let widths = [
        Constraint::Percentage(25),
        Constraint::Length(38),
        Constraint::Length(14),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Projects ({}) ", app.projects.len()))
                .border_style(Style::default().fg(Color::Blue)),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in FOOTER_KEYS {
        spans.push(Span::styled(format!("{key} "), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!("{label}  ")));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn button<'a>(label: &'a str, focused: bool, primary: bool) -> Span<'a> {
    let color = if primary { Color::Blue } else { Color::Red };
    let style = if focused {
        Style::default()
            .bg(color)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!("  {label}  "), style)
}

fn render_modal(frame: &mut Frame, modal: &Modal) {
    let screen = frame.area();
    let [column] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(screen);

    let message = Paragraph::new(modal.message.as_str()).wrap(Wrap { trim: false });
    // Rows after wrapping inside the borders
    let message_lines = message.line_count(column.width.saturating_sub(2)) as u16;
    let input_height = if modal.input.is_some() { 3 } else { 0 };
    // Borders + message + input + spacer + buttons
    let height = (2 + message_lines + input_height + 1 + 1).min(screen.height);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(modal.title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [message_area, input_area, _, button_area] = Layout::vertical([
        Constraint::Length(message_lines),
        Constraint::Length(input_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(message, message_area);

    if let Some(input) = &modal.input {
        let field = Block::default().borders(Borders::ALL);
        let field_inner = field.inner(input_area);
        frame.render_widget(Paragraph::new(input.value()).block(field), input_area);

        let x = field_inner.x + (input.cursor() as u16).min(field_inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, field_inner.y));
    }

    let (primary, secondary) = modal.buttons();
    let buttons = Line::from(vec![
        button(primary, modal.focus == Focus::Primary, true),
        Span::raw("   "),
        button(secondary, modal.focus == Focus::Secondary, false),
    ])
    .centered();
    frame.render_widget(Paragraph::new(buttons), button_area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(50, KEYS.len() as u16 + 10, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "GNS3 SERVER TUI HELP",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(KEYS.iter().map(|(key, label)| {
        Line::from(vec![
            Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Yellow)),
            Span::raw(*label),
        ])
    }));
    lines.push(Line::from(vec![
        Span::styled("  ↑/↓    ", Style::default().fg(Color::Yellow)),
        Span::raw("Navigate projects"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Tab    ", Style::default().fg(Color::Yellow)),
        Span::raw("Switch dialog button"),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
