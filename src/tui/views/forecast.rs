//! Forecast tab view
//!
//! Balance curve chart on top, the day-by-day ledger table below.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, GraphType, Row, Table,
    },
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::ForecastLayout;

use super::color_from_name;

/// Render the forecast tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ForecastLayout::new(area);
    render_chart(frame, app, layout.chart);
    render_bars(frame, app, layout.bars);
    render_table(frame, app, layout.table);
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let points: Vec<(f64, f64)> = app
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| (i as f64, e.balance.to_f64()))
        .collect();

    let block = Block::default()
        .title(" Balance Projection ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if points.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let max_y = points.iter().map(|(_, y)| *y).fold(f64::MIN, f64::max);
    let min_y = points.iter().map(|(_, y)| *y).fold(f64::MAX, f64::min);
    let y_pad = ((max_y - min_y).abs() * 0.1).max(1.0);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let last_date = app
        .entries
        .last()
        .map(|e| e.date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let first_date = app
        .entries
        .first()
        .map(|e| e.date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let dataset = Dataset::default()
        .name("balance")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first_date), Span::raw(last_date)]),
        )
        .y_axis(
            Axis::default()
                .bounds([min_y - y_pad, max_y + y_pad])
                .labels(vec![
                    Span::raw(format!("{:.0}", min_y - y_pad)),
                    Span::raw(format!("{:.0}", max_y + y_pad)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_bars(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Income / Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    // One group per day with activity: income and expense totals side by side
    let active: Vec<_> = app
        .entries
        .iter()
        .filter(|e| !e.transactions.is_empty())
        .collect();

    if active.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let group_width = 5u16; // two bars plus gaps
    let visible = (area.width.saturating_sub(2) / group_width).max(1) as usize;

    let groups: Vec<BarGroup> = active
        .iter()
        .take(visible)
        .map(|entry| {
            let bars = vec![
                Bar::default()
                    .value(entry.income_total().major().max(0) as u64)
                    .style(Style::default().fg(Color::Green)),
                Bar::default()
                    .value(entry.expense_total().major().max(0) as u64)
                    .style(Style::default().fg(Color::Red)),
            ];
            BarGroup::default()
                .label(Line::from(entry.date.format("%m-%d").to_string()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default().block(block).bar_width(2).bar_gap(0).group_gap(1);
    for group in groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.settings.currency_symbol;

    let block = Block::default()
        .title(" Ledger ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let header = Row::new(["Date", "Transaction", "Income", "Expense", "Balance"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let visible = area.height.saturating_sub(3) as usize;
    let mut rows = Vec::new();

    for entry in app.entries.iter().skip(app.scroll_offset).take(visible) {
        let date = entry.date.format("%Y-%m-%d").to_string();
        let balance_style = if entry.balance.is_negative() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        let balance = Cell::from(entry.balance.format_with_symbol(symbol)).style(balance_style);

        if entry.transactions.is_empty() {
            rows.push(Row::new(vec![
                Cell::from(date),
                Cell::from("-"),
                Cell::from(Money::zero().format_with_symbol(symbol)),
                Cell::from(Money::zero().format_with_symbol(symbol)),
                balance,
            ]));
            continue;
        }

        for txn in &entry.transactions {
            let label =
                Cell::from(txn.label.clone()).style(Style::default().fg(color_from_name(&txn.color)));
            let (income, expense) = if txn.amount.is_positive() {
                (
                    txn.amount.format_with_symbol(symbol),
                    Money::zero().format_with_symbol(symbol),
                )
            } else {
                (
                    Money::zero().format_with_symbol(symbol),
                    txn.amount.abs().format_with_symbol(symbol),
                )
            };
            rows.push(Row::new(vec![
                Cell::from(date.clone()),
                label,
                Cell::from(income),
                Cell::from(expense),
                balance.clone(),
            ]));
        }
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
