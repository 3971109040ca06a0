//! Sales tab view
//!
//! Headline metrics, category revenue bars, region shares, and the
//! monthly revenue series.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::month_name;
use crate::services::sales::{
    monthly_revenue, revenue_by_category, revenue_by_region, summarize,
};
use crate::tui::app::App;
use crate::tui::layout::SalesLayout;

/// Render the sales tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.sales.is_empty() {
        let block = Block::default()
            .title(" Sales ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let text = Paragraph::new("No sales data loaded. Start with --sales <file.csv>.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let layout = SalesLayout::new(area);
    render_summary(frame, app, layout.summary);
    render_categories(frame, app, layout.categories);
    render_regions(frame, app, layout.regions);
    render_monthly(frame, app, layout.monthly);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary = summarize(&app.sales);
    let symbol = &app.settings.currency_symbol;

    let lines = vec![
        metric_line("Records", summary.record_count.to_string()),
        metric_line("Total revenue", summary.total_revenue.format_with_symbol(symbol)),
        metric_line("Total quantity", summary.total_quantity.to_string()),
        metric_line(
            "Avg unit price",
            summary.average_unit_price.format_with_symbol(symbol),
        ),
    ];

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn metric_line(label: &str, value: String) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let breakdown = revenue_by_category(&app.sales);

    let bars: Vec<Bar> = breakdown
        .iter()
        .map(|c| {
            Bar::default()
                .label(Line::from(c.category.clone()))
                .value(c.revenue.major().max(0) as u64)
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Revenue by Category ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .direction(ratatui::layout::Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_regions(frame: &mut Frame, app: &App, area: Rect) {
    let breakdown = revenue_by_region(&app.sales);

    let lines: Vec<Line> = breakdown
        .iter()
        .map(|r| {
            Line::from(vec![
                Span::styled(format!("{:<12}", r.region), Style::default().fg(Color::Cyan)),
                Span::raw(format!(
                    "{:>12}  ",
                    r.revenue.format_with_symbol(&app.settings.currency_symbol)
                )),
                Span::styled(
                    format!("{:>5.1}%", r.share),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Regions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_monthly(frame: &mut Frame, app: &App, area: Rect) {
    let series = monthly_revenue(&app.sales);

    let lines: Vec<Line> = series
        .iter()
        .map(|m| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", format!("{} {}", month_name(m.month), m.year)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(
                    "{:>12}",
                    m.revenue.format_with_symbol(&app.settings.currency_symbol)
                )),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Monthly Revenue ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
