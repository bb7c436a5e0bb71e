//! UI rendering functions for the chat TUI.
//!
//! Draws a header, the scrolling conversation, the input line and a shortcut
//! bar using ratatui widgets and layout management.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use time::macros::format_description;

use super::app::App;
use crate::session::Exchange;

const TITLE: &str = "Welcome Real Estate AI";
const GREETING: &str = "תשאלו את Welcome Real Estate AI כל דבר שתרצו לדעת על נדל\"ן בישראל";
const INPUT_PLACEHOLDER: &str = "הקלידו כאן את השאלה שלכם...";

/// Main rendering function for the TUI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Conversation
            Constraint::Length(3), // Input
            Constraint::Length(1), // Shortcut bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_conversation(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
    render_shortcut_bar(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let text = Text::from(vec![
        Line::from(vec![
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  ({} records)", app.dataset_len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(GREETING),
    ]);

    frame.render_widget(Paragraph::new(text), area);
}

/// Renders the conversation, anchored to the newest exchange unless scrolled back.
fn render_conversation(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("שיחה");

    let paragraph = Paragraph::new(Text::from(conversation_lines(app.session().exchanges())))
        .wrap(Wrap { trim: false });

    // Offsets are in wrapped rows, so measure at the width inside the borders
    let visible = area.height.saturating_sub(2);
    let total = paragraph.line_count(area.width.saturating_sub(2));
    let total = u16::try_from(total).unwrap_or(u16::MAX);
    let offset = total
        .saturating_sub(visible)
        .saturating_sub(app.scroll_back());

    let paragraph = paragraph.block(block).scroll((offset, 0));

    frame.render_widget(paragraph, area);
}

/// Builds the display lines for a list of exchanges.
fn conversation_lines(exchanges: &[Exchange]) -> Vec<Line<'_>> {
    let speaker = Style::default().add_modifier(Modifier::BOLD);
    let stamp = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(exchanges.len() * 3);
    for exchange in exchanges {
        let time = exchange
            .asked_at
            .format(format_description!("[hour]:[minute]"))
            .unwrap_or_else(|_| "??:??".to_string());

        lines.push(Line::from(vec![
            Span::styled(format!("[{time}] "), stamp),
            Span::styled("אתם: ", speaker.fg(Color::Cyan)),
            Span::raw(exchange.question.as_str()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("        ", stamp),
            Span::styled("עוזר: ", speaker.fg(Color::Green)),
            Span::raw(exchange.answer.as_str()),
        ]));
        lines.push(Line::from(""));
    }
    lines
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = if app.input().is_empty() {
        Line::from(vec![
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            Span::raw("█"),
        ])
    } else {
        Line::from(vec![Span::raw(app.input()), Span::raw("█")])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_shortcut_bar(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let sep_style = Style::default().fg(Color::DarkGray);

    let spans = vec![
        Span::styled("Enter", key_style),
        Span::raw(": ask"),
        Span::styled(" | ", sep_style),
        Span::styled("↑/↓", key_style),
        Span::raw(": scroll"),
        Span::styled(" | ", sep_style),
        Span::styled("Ctrl+L", key_style),
        Span::raw(": clear"),
        Span::styled(" | ", sep_style),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
