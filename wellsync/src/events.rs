//! Event handling for the WellSync TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode, Page};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            app.toggle_help();
            return EventResult::NeedsRedraw;
        }
        return EventResult::Continue;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

/// Handle keys in NORMAL mode (navigation and hotkeys)
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Mode switching
        KeyCode::Char('i') => {
            app.enter_insert_mode();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('a') => {
            // Append mode - go to insert at end
            app.enter_insert_mode();
            app.cursor_end();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(':') => {
            app.enter_command_mode();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('q') => EventResult::Quit,

        // Page switching
        KeyCode::Tab | KeyCode::Char('l') => {
            app.next_page();
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab | KeyCode::Char('h') => {
            app.prev_page();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c @ '1'..='9') => {
            match c.to_digit(10).and_then(Page::from_number) {
                Some(page) => app.go_to(page),
                None => app.set_status(format!("No page {c}")),
            }
            EventResult::NeedsRedraw
        }

        KeyCode::Char('j') | KeyCode::Down => {
            app.move_cursor(true);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_cursor(false);
            EventResult::NeedsRedraw
        }

        _ => handle_page_hotkeys(app, key),
    }
}

/// Hotkeys that only make sense on one page (normal mode)
fn handle_page_hotkeys(app: &mut App, key: KeyEvent) -> EventResult {
    match (app.page, key.code) {
        (Page::Scheduler, KeyCode::Char(' ') | KeyCode::Enter) => {
            app.toggle_schedule_item();
            EventResult::NeedsRedraw
        }
        (Page::Scheduler, KeyCode::Char('r')) => {
            app.refresh_schedule();
            EventResult::NeedsRedraw
        }
        (Page::Reflection, KeyCode::Char(' ') | KeyCode::Enter) => {
            app.choose_morning_mood();
            app.enter_insert_mode();
            EventResult::NeedsRedraw
        }
        (Page::Insights, KeyCode::Char('r')) => {
            app.refresh_insights();
            EventResult::NeedsRedraw
        }
        (Page::Analyzer, KeyCode::Char('c')) => {
            app.clear_analysis();
            EventResult::NeedsRedraw
        }
        (Page::Quiz | Page::Chat | Page::Analyzer, KeyCode::Enter) => {
            app.enter_insert_mode();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys in INSERT mode (free text input)
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.enter_normal_mode();
            EventResult::NeedsRedraw
        }

        // Submit input; blank submissions are reported by the page
        KeyCode::Enter => {
            let text = app.submit_input().unwrap_or_default();
            app.submit_text(text);
            EventResult::NeedsRedraw
        }

        // Input editing
        KeyCode::Left => {
            app.cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.cursor_home();
            EventResult::NeedsRedraw
        }
        KeyCode::End => {
            app.cursor_end();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Delete => {
            app.delete();
            EventResult::NeedsRedraw
        }

        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle keys in COMMAND mode (: commands)
fn handle_command_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.enter_normal_mode();
            EventResult::NeedsRedraw
        }

        KeyCode::Enter => {
            let command = app.input_buffer().to_string();
            app.clear_input();
            app.input_mode = InputMode::Normal;

            if command.len() > 1 {
                app.process_command(&command);
            }

            if app.should_quit {
                EventResult::Quit
            } else {
                EventResult::NeedsRedraw
            }
        }

        KeyCode::Left => {
            if app.cursor_position() > 1 {
                app.cursor_left();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            if app.cursor_position() > 1 {
                app.backspace();
            } else {
                // Backspace on just ":" exits command mode
                app.input_mode = InputMode::Normal;
                app.clear_input();
            }
            EventResult::NeedsRedraw
        }

        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}
