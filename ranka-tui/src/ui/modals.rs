use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::ThemeColors;
use crate::app::{App, Tab};

/// Create a centered rect using a percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Render help modal
pub fn render_help_modal(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    // Create centered modal area (70% width, 80% height)
    let modal_area = centered_rect(70, 80, area);

    // Clear background
    frame.render_widget(Clear, modal_area);

    let shortcuts = get_shortcuts_for_context(app);

    let mut lines = vec![Line::from("")];

    for (category, items) in shortcuts {
        lines.push(Line::from(Span::styled(
            category,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (key, description) in items {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<15}", key), Style::default().fg(theme.success)),
                Span::styled(description, Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
    }

    let help_content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .title(" Keyboard Shortcuts ")
                .title_alignment(Alignment::Center)
                .style(Style::default().bg(theme.background)),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });

    frame.render_widget(help_content, modal_area);
}

/// Get shortcuts relevant to current context
fn get_shortcuts_for_context(
    app: &App,
) -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let mut shortcuts = vec![
        (
            "Global",
            vec![("q / Esc", "Quit application"), ("?", "Toggle this help")],
        ),
        (
            "Tab Navigation",
            vec![("Tab", "Next tab"), ("Shift+Tab", "Previous tab")],
        ),
    ];

    match app.current_tab {
        Tab::Leaderboard => shortcuts.push((
            "Leaderboard Tab",
            vec![("r", "Refresh all metrics (simulated)")],
        )),
        Tab::Search => shortcuts.push((
            "Search Tab",
            vec![
                ("Type", "Search by username or display name"),
                ("↑/↓", "Move through results"),
                ("Enter", "Select highlighted account"),
                ("Esc", "Clear query / unfocus input"),
                ("/", "Focus the search input"),
                ("r", "Refresh selected profile (simulated)"),
            ],
        )),
    }

    shortcuts
}
