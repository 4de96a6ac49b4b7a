use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::formatting::{format_count, format_optional_count, format_timestamp};
use super::modals::render_help_modal;
use super::theme::ThemeColors;
use crate::app::{App, InputMode, Tab};
use crate::log_rendering;
use crate::store::LEADERBOARD_SIZE;

pub fn render_main_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    log_rendering!(
        app.log_config,
        "render_main_screen: tab={:?}, help={}",
        app.current_tab,
        app.show_help
    );

    // Adaptive layout: reduce footer sizes on small terminals
    let (header_height, footer_height) = if area.height < 30 {
        (3u16, 2u16) // Compact mode for small terminals
    } else {
        (3u16, 3u16) // Normal mode
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Tab header
            Constraint::Min(0),                // Content (flexible)
            Constraint::Length(1),             // Page-specific actions
            Constraint::Length(footer_height), // Global footer
        ])
        .split(area);

    // Render tab header
    render_tab_header(frame, app, chunks[0]);

    // Render tab content
    match app.current_tab {
        Tab::Leaderboard => render_leaderboard_tab(frame, app, chunks[1]),
        Tab::Search => render_search_tab(frame, app, chunks[1]),
    }

    // Render page-specific actions bar
    render_page_actions(frame, app, chunks[2]);

    // Render global footer
    render_global_footer(frame, app, chunks[3]);

    // Render help modal (highest priority - render last)
    if app.show_help {
        render_help_modal(frame, app, area);
    }
}

/// Render tab header
pub fn render_tab_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    let tabs = ["Leaderboard", "Search"];
    let current_index = match app.current_tab {
        Tab::Leaderboard => 0,
        Tab::Search => 1,
    };

    let mut tab_spans = vec![];
    for (i, tab) in tabs.iter().enumerate() {
        let style = if i == current_index {
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_dim)
        };

        tab_spans.push(Span::styled(format!(" {} ", tab), style));
        if i < tabs.len() - 1 {
            tab_spans.push(Span::raw(" | "));
        }
    }

    let header = Paragraph::new(Line::from(tab_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Get context-appropriate action text for the current view
pub fn get_action_bar_text(app: &App) -> &'static str {
    match app.current_tab {
        Tab::Leaderboard => "r: Refresh Data",
        Tab::Search => match app.input_mode {
            InputMode::Typing => "Type to search | ↑/↓: Navigate results | Enter: Select | Esc: Clear",
            InputMode::Navigation => {
                if app.search_state.selected_profile.is_some() {
                    "r: Refresh profile | /: Search"
                } else {
                    "/: Search"
                }
            }
        },
    }
}

/// Render page-specific actions bar (centered, with wrapping support)
pub fn render_page_actions(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    // Clear the area first to prevent text bleeding from previous renders
    frame.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    frame.render_widget(background, area);

    let text = get_action_bar_text(app);
    let widget = Paragraph::new(text)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

/// Render global footer with global shortcuts only
pub fn render_global_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    // Clear the area first to prevent text bleeding
    frame.render_widget(Clear, area);

    let footer = Paragraph::new("Tab: Next | Shift+Tab: Previous | ?: Help | q/Esc: Quit")
        .style(Style::default().fg(theme.text_dim).bg(theme.background))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(footer, area);
}

/// Render the Leaderboard tab: title, ranked table, summary panels
pub fn render_leaderboard_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + last updated
            Constraint::Min(0),    // Ranking table
            Constraint::Length(5), // Summary panels
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Top {} Accounts", LEADERBOARD_SIZE),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Last updated: {}", format_timestamp(&app.last_refresh)),
            Style::default().fg(theme.text_dim),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    render_ranking_table(frame, app, chunks[1]);
    render_summary_panels(frame, app, chunks[2]);
}

/// Render the top-10 ranking table
fn render_ranking_table(frame: &mut Frame, app: &App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);
    let ranked = app.store.top_profiles(LEADERBOARD_SIZE);

    let header = Row::new(vec![
        Cell::from("Rank"),
        Cell::from("Username"),
        Cell::from("Display Name"),
        Cell::from("Followers"),
        Cell::from("Following"),
        Cell::from("Posts"),
        Cell::from("Likes"),
        Cell::from("Views"),
    ])
    .style(
        Style::default()
            .fg(theme.secondary)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = ranked
        .iter()
        .enumerate()
        .map(|(index, profile)| {
            let rank = match index {
                0 => "🥇".to_string(),
                1 => "🥈".to_string(),
                2 => "🥉".to_string(),
                _ => format!("#{}", index + 1),
            };

            Row::new(vec![
                Cell::from(rank),
                Cell::from(Span::styled(
                    format!("@{}", profile.username),
                    Style::default().fg(theme.primary),
                )),
                Cell::from(Span::styled(
                    profile.display_name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    format_count(profile.followers),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    format_count(profile.following),
                    Style::default().fg(theme.text),
                )),
                Cell::from(Span::styled(
                    format_count(profile.posts),
                    Style::default().fg(theme.text),
                )),
                Cell::from(Span::styled(
                    format_count(profile.latest_post_likes),
                    Style::default().fg(theme.text),
                )),
                Cell::from(Span::styled(
                    format_optional_count(profile.latest_post_views),
                    Style::default().fg(theme.text),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(18),
        Constraint::Min(14),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Leaderboard ")
            .border_style(Style::default().fg(theme.border)),
    );

    frame.render_widget(table, area);
}

/// Render summary panels: total profiles, average followers, top account
fn render_summary_panels(frame: &mut Frame, app: &App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let total = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.store.len().to_string(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Total Profiles ")
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(total, chunks[0]);

    let average = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_count(app.store.average_followers()),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Avg Followers ")
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(average, chunks[1]);

    let top = app.store.top_profiles(1);
    let top_lines = match top.first() {
        Some(profile) => vec![
            Line::from(Span::styled(
                format!("@{}", profile.username),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} followers", format_count(profile.followers)),
                Style::default().fg(theme.text_dim),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "-",
            Style::default().fg(theme.text_dim),
        ))],
    };
    let top_widget = Paragraph::new(top_lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top Account ")
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(top_widget, chunks[2]);
}

/// Render the Search tab: query input plus results or detail panel
pub fn render_search_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(0),    // Results or detail
        ])
        .split(area);

    render_search_input(frame, app, chunks[0]);

    if app.search_state.query.is_empty() {
        render_profile_detail(frame, app, chunks[1]);
    } else {
        render_search_results(frame, app, chunks[1]);
    }
}

/// Render the live query input
fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);
    let typing = app.input_mode == InputMode::Typing;

    let content = if app.search_state.query.is_empty() && !typing {
        Line::from(Span::styled(
            "Enter username or display name...",
            Style::default().fg(theme.text_dim),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.search_state.query.clone(),
            Style::default().fg(theme.text),
        )];
        if typing {
            spans.push(Span::styled("▌", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };

    let border_style = if typing {
        Style::default().fg(theme.success)
    } else {
        Style::default().fg(theme.border)
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search Accounts ")
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

/// Render search results for the active query
fn render_search_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    if app.search_state.results.is_empty() {
        let empty = Paragraph::new("No accounts found")
            .style(Style::default().fg(theme.text_dim))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .search_state
        .results
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            let is_selected = app.search_state.list_state.selected() == Some(i);
            let prefix = if is_selected { "▶ " } else { "  " };

            let name_style = if is_selected {
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix.to_string(), name_style),
                Span::styled(profile.display_name.clone(), name_style),
                Span::styled(
                    format!(" @{}", profile.username),
                    Style::default().fg(theme.text_dim),
                ),
                Span::styled(
                    format!("  {} followers", format_count(profile.followers)),
                    Style::default().fg(theme.secondary),
                ),
            ]))
        })
        .collect();

    let results_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Results ({}) ", app.search_state.results.len()))
                .border_style(Style::default().fg(theme.border)),
        )
        .highlight_style(Style::default().bg(theme.highlight_bg));

    frame.render_stateful_widget(results_widget, area, &mut app.search_state.list_state);
}

/// Render the selected profile's detail panel, or a hint when nothing is
/// selected yet
fn render_profile_detail(frame: &mut Frame, app: &App, area: Rect) {
    let theme = ThemeColors::for_scheme(app.color_scheme);

    let Some(profile) = &app.search_state.selected_profile else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Search for an account to view details",
                Style::default().fg(theme.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(hint, area);
        return;
    };

    let mut lines = vec![];

    lines.push(Line::from(Span::styled(
        profile.display_name.clone(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("@{}", profile.username),
        Style::default().fg(theme.text_dim),
    )));
    lines.push(Line::from(""));

    lines.push(metric_line("Followers: ", format_count(profile.followers), theme.accent, &theme));
    lines.push(metric_line("Following: ", format_count(profile.following), theme.success, &theme));
    lines.push(metric_line("Total Posts: ", format_count(profile.posts), theme.secondary, &theme));
    lines.push(metric_line(
        "Latest Post Likes: ",
        format_count(profile.latest_post_likes),
        theme.error,
        &theme,
    ));
    lines.push(metric_line(
        "Latest Post Views: ",
        profile
            .latest_post_views
            .map(format_count)
            .unwrap_or_else(|| "N/A".to_string()),
        theme.warning,
        &theme,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Last updated: {}", format_timestamp(&app.last_refresh)),
        Style::default().fg(theme.text_dim),
    )));

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile Details ")
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(detail, area);
}

/// One labeled metric line for the detail panel
fn metric_line(
    label: &'static str,
    value: String,
    label_color: ratatui::style::Color,
    theme: &ThemeColors,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(label_color)),
        Span::styled(
            value,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ])
}
