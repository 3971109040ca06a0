//! Layout definitions for the TUI
//!
//! Tab bar on top, main content, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar at the top
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the forecast tab: charts on top, ledger table below
pub struct ForecastLayout {
    /// Balance curve chart
    pub chart: Rect,
    /// Income/expense bars for active days
    pub bars: Rect,
    /// Day-by-day table
    pub table: Rect,
}

impl ForecastLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40), // Charts
                Constraint::Min(5),         // Table
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Balance line
                Constraint::Percentage(40), // Income/expense bars
            ])
            .split(vertical[0]);

        Self {
            chart: horizontal[0],
            bars: horizontal[1],
            table: vertical[1],
        }
    }
}

/// Layout for the sales tab: summary strip, then charts side by side
pub struct SalesLayout {
    /// Headline metrics
    pub summary: Rect,
    /// Category bar chart
    pub categories: Rect,
    /// Region share list
    pub regions: Rect,
    /// Monthly series list
    pub monthly: Rect,
}

impl SalesLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Summary
                Constraint::Min(6),    // Charts
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40), // Categories
                Constraint::Percentage(30), // Regions
                Constraint::Percentage(30), // Monthly
            ])
            .split(vertical[1]);

        Self {
            summary: vertical[0],
            categories: horizontal[0],
            regions: horizontal[1],
            monthly: horizontal[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
