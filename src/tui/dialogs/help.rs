//! Help dialog

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("q", "Quit"),
    ("Tab", "Switch tab"),
    ("a", "Add transaction"),
    ("b", "Set initial balance"),
    ("r", "Refresh forecast"),
    ("j / Down", "Scroll down"),
    ("k / Up", "Scroll up"),
    ("?", "This help"),
    ("Esc", "Close dialog"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(40, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
