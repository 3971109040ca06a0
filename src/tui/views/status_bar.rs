//! Status bar view
//!
//! Shows the current balance, projection depth, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if let Some(last) = app.entries.last() {
        let balance_color = if last.balance.is_negative() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::styled(" Final: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            last.balance.format_with_symbol(&app.settings.currency_symbol),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} days", app.entries.len()),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " q:Quit  Tab:Switch  a:Add  b:Balance  ?:Help ";

    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
