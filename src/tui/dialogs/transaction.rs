//! Add-transaction dialog
//!
//! Modal form for adding recurring or one-time transactions with field
//! navigation and validation feedback.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
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

/// What kind of transaction the form creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    #[default]
    MonthlyIncome,
    MonthlyExpense,
    OneTimeIncome,
    OneTimeExpense,
}

impl EntryMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::MonthlyIncome => "Monthly Income",
            Self::MonthlyExpense => "Monthly Expense",
            Self::OneTimeIncome => "One-time Income",
            Self::OneTimeExpense => "One-time Expense",
        }
    }

    pub fn is_recurring(self) -> bool {
        matches!(self, Self::MonthlyIncome | Self::MonthlyExpense)
    }

    pub fn next(self) -> Self {
        match self {
            Self::MonthlyIncome => Self::MonthlyExpense,
            Self::MonthlyExpense => Self::OneTimeIncome,
            Self::OneTimeIncome => Self::OneTimeExpense,
            Self::OneTimeExpense => Self::MonthlyIncome,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::MonthlyIncome => Self::OneTimeExpense,
            Self::MonthlyExpense => Self::MonthlyIncome,
            Self::OneTimeIncome => Self::MonthlyExpense,
            Self::OneTimeExpense => Self::OneTimeIncome,
        }
    }

    fn default_color(self) -> &'static str {
        match self {
            Self::MonthlyIncome | Self::OneTimeIncome => "green",
            Self::MonthlyExpense | Self::OneTimeExpense => "red",
        }
    }
}

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Mode,
    When,
    Amount,
    Label,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::Mode => Self::When,
            Self::When => Self::Amount,
            Self::Amount => Self::Label,
            Self::Label => Self::Mode,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Mode => Self::Label,
            Self::When => Self::Mode,
            Self::Amount => Self::When,
            Self::Label => Self::Amount,
        }
    }
}

/// State for the add-transaction dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// Currently focused field
    pub focused_field: TransactionField,

    /// Transaction kind being entered
    pub mode: EntryMode,

    /// Day of month (recurring) or date (one-time)
    pub when_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Description input
    pub label_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        Self {
            focused_field: TransactionField::Mode,
            mode: EntryMode::default(),
            when_input: TextInput::new().label("Day").placeholder("1-31"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            label_input: TextInput::new().label("Label").placeholder("Description"),
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Cycle the entry mode and relabel the date field accordingly
    pub fn cycle_mode(&mut self, forward: bool) {
        self.mode = if forward {
            self.mode.next()
        } else {
            self.mode.prev()
        };
        self.when_input = if self.mode.is_recurring() {
            TextInput::new().label("Day").placeholder("1-31")
        } else {
            TextInput::new().label("Date").placeholder("YYYY-MM-DD")
        };
    }

    /// Mutable reference to the focused text input, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Mode => None,
            TransactionField::When => Some(&mut self.when_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Label => Some(&mut self.label_input),
        }
    }
}

/// Validate the form and persist the transaction
///
/// Returns a confirmation message on success; validation failures come back
/// as errors for the form to display.
pub fn save_transaction(form: &TransactionFormState, storage: &Storage) -> CashcastResult<String> {
    let service = TrackerService::new(storage);

    let amount = Money::parse(form.amount_input.value())
        .map_err(|e| CashcastError::InvalidAmount(format!("{}: {}", form.amount_input.value(), e)))?;

    let label = if form.label_input.value().is_empty() {
        form.mode.title().to_string()
    } else {
        form.label_input.value().to_string()
    };
    let color = form.mode.default_color();

    if form.mode.is_recurring() {
        let day: u32 = form
            .when_input
            .value()
            .parse()
            .map_err(|_| CashcastError::InvalidDay(0))?;
        match form.mode {
            EntryMode::MonthlyIncome => service.add_monthly_income(day, amount, &label, color)?,
            _ => service.add_monthly_expense(day, amount, &label, color)?,
        };
        Ok(format!("Added '{}' on day {}", label, day))
    } else {
        let date = if form.when_input.value().is_empty() {
            Local::now().date_naive()
        } else {
            NaiveDate::parse_from_str(form.when_input.value(), "%Y-%m-%d").map_err(|e| {
                CashcastError::Config(format!("Invalid date '{}': {}", form.when_input.value(), e))
            })?
        };
        match form.mode {
            EntryMode::OneTimeIncome => service.add_income(amount, date, &label, color)?,
            _ => service.add_expense(amount, date, &label, color)?,
        };
        Ok(format!("Added '{}' on {}", label, date))
    }
}

/// Render the add-transaction dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(50, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode
            Constraint::Length(1),
            Constraint::Length(1), // When
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Label
            Constraint::Length(1),
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let form = &app.transaction_form;

    let mode_style = if form.focused_field == TransactionField::Mode {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let mode_line = Line::from(vec![
        Span::styled("Type", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("< {} >", form.mode.title()), mode_style),
    ]);
    frame.render_widget(Paragraph::new(mode_line), rows[0]);

    frame.render_widget(
        form.when_input
            .clone()
            .focused(form.focused_field == TransactionField::When),
        rows[2],
    );
    frame.render_widget(
        form.amount_input
            .clone()
            .focused(form.focused_field == TransactionField::Amount),
        rows[3],
    );
    frame.render_widget(
        form.label_input
            .clone()
            .focused(form.focused_field == TransactionField::Label),
        rows[4],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[6],
        );
    }

    frame.render_widget(
        Paragraph::new("Tab:Next  ←/→:Type  Enter:Save  Esc:Cancel")
            .style(Style::default().fg(Color::DarkGray)),
        rows[7],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle_round_trip() {
        let mut mode = EntryMode::MonthlyIncome;
        for _ in 0..4 {
            mode = mode.next();
        }
        assert_eq!(mode, EntryMode::MonthlyIncome);
        assert_eq!(EntryMode::MonthlyIncome.prev(), EntryMode::OneTimeExpense);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut field = TransactionField::Mode;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, TransactionField::Mode);
        assert_eq!(TransactionField::Mode.prev(), TransactionField::Label);
    }

    #[test]
    fn test_cycle_mode_relabels_when_field() {
        let mut form = TransactionFormState::new();
        assert_eq!(form.when_input.label, "Day");
        form.cycle_mode(true);
        form.cycle_mode(true);
        assert_eq!(form.mode, EntryMode::OneTimeIncome);
        assert_eq!(form.when_input.label, "Date");
    }
}
