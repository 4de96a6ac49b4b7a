use crate::app::state::{App, InputMode, Tab};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Priority 1: Help modal (highest priority)
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.toggle_help();
        }
        return Ok(());
    }

    // Priority 2: Global keys (help/quit), disabled while typing a query
    match key.code {
        KeyCode::Char('?') if app.input_mode == InputMode::Navigation => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
            if app.input_mode == InputMode::Navigation =>
        {
            app.running = false;
            return Ok(());
        }
        KeyCode::Tab => {
            app.next_tab();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.previous_tab();
            return Ok(());
        }
        _ => {}
    }

    // Tab-specific keys
    match app.current_tab {
        Tab::Leaderboard => handle_leaderboard_keys(app, key),
        Tab::Search => handle_search_keys(app, key),
    }
}

fn handle_leaderboard_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
        app.refresh_leaderboard();
    }
    Ok(())
}

fn handle_search_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.input_mode {
        InputMode::Typing => match key.code {
            KeyCode::Esc => {
                // First Esc clears an in-progress query, a second one
                // unfocuses the input (after which Esc quits globally)
                if app.search_state.query.is_empty() {
                    app.exit_search_input();
                } else {
                    app.clear_query();
                }
            }
            KeyCode::Enter => app.select_highlighted_result(),
            KeyCode::Down => app.select_next_result(),
            KeyCode::Up => app.select_previous_result(),
            KeyCode::Backspace => {
                app.pop_query_char();
            }
            KeyCode::Char(c) => {
                app.push_query_char(c);
            }
            _ => {}
        },
        InputMode::Navigation => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => app.refresh_selected(),
            KeyCode::Char('/') => app.enter_search_input(),
            _ => {}
        },
    }
    Ok(())
}
