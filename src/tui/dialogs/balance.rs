//! Set-balance dialog

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::{CashcastError, CashcastResult};
use crate::models::Money;
use crate::services::TrackerService;
use crate::storage::Storage;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the set-balance dialog
#[derive(Debug, Clone)]
pub struct BalanceFormState {
    /// Amount input
    pub amount_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for BalanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceFormState {
    pub fn new() -> Self {
        Self {
            amount_input: TextInput::new()
                .label("Balance")
                .placeholder("0.00")
                .focused(true),
            error_message: None,
        }
    }
}

/// Validate the form and persist the new initial balance
pub fn save_balance(
    form: &BalanceFormState,
    storage: &Storage,
    symbol: &str,
) -> CashcastResult<String> {
    let balance = Money::parse(form.amount_input.value()).map_err(|e| {
        CashcastError::InvalidAmount(format!("{}: {}", form.amount_input.value(), e))
    })?;

    let service = TrackerService::new(storage);
    service.update_initial_balance(balance)?;
    Ok(format!("Balance set to {}", balance.format_with_symbol(symbol)))
}

/// Render the set-balance dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(40, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Initial Balance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(app.balance_form.amount_input.clone().focused(true), rows[1]);

    if let Some(ref error) = app.balance_form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[2],
        );
    }

    frame.render_widget(
        Paragraph::new("Enter:Save  Esc:Cancel").style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}
