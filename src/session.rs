use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rusqlite::Connection;

use crate::app::{App, AppState};
use crate::db;
use crate::loader::LoadRequest;
use crate::platform;
use crate::prefs;

/// Routes a key press to the active screen's handler. Ctrl+C always quits.
pub fn handle_key(app: &mut App, key: KeyEvent, conn: &Connection, loader: &Sender<LoadRequest>) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Menu => handle_menu_input(app, key, conn),
        AppState::OnBoarding => handle_onboarding_input(app, key, loader),
        AppState::Quiz => handle_quiz_input(app, key, conn),
        AppState::QuizQuitConfirm => handle_quit_confirm_input(app, key, loader),
        AppState::Score => handle_score_input(app, key, loader),
        AppState::Review => handle_review_input(app, key, loader),
        AppState::Announcements => handle_announcements_input(app, key),
        AppState::About => handle_about_input(app, key),
        AppState::Settings => handle_settings_input(app, key),
    }
}

pub fn handle_menu_input(app: &mut App, key: KeyEvent, conn: &Connection) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('1') => app.focused_panel = 0,
        KeyCode::Char('2') => app.focused_panel = 1,
        KeyCode::Tab => app.focused_panel = (app.focused_panel + 1) % 2,
        KeyCode::Up => {
            if app.focused_panel == 0 {
                if app.selected_category_index > 0 {
                    app.selected_category_index -= 1;
                }
            } else if app.selected_announcement_index > 0 {
                app.selected_announcement_index -= 1;
            }
        }
        KeyCode::Down => {
            if app.focused_panel == 0 {
                if app.selected_category_index + 1 < app.categories().len() {
                    app.selected_category_index += 1;
                }
            } else if app.selected_announcement_index + 1 < app.announcements.len() {
                app.selected_announcement_index += 1;
            }
        }
        KeyCode::Enter => {
            if app.focused_panel == 0 {
                if let Some(selected) = app.selected_category() {
                    let averages =
                        db::average::load_averages(conn, &selected.category.id).unwrap_or_default();
                    app.open_onboarding(averages);
                }
            } else {
                app.state = AppState::Announcements;
            }
        }
        KeyCode::Char('a') => app.state = AppState::About,
        KeyCode::Char('s') => app.state = AppState::Settings,
        _ => {}
    }
}

pub fn handle_onboarding_input(app: &mut App, key: KeyEvent, loader: &Sender<LoadRequest>) {
    if key.code == KeyCode::Esc {
        app.return_to_menu();
        return;
    }

    let Some(onboarding) = app.onboarding.as_mut() else {
        return;
    };

    // One fetch at a time, tied to the setting it was sent for; the
    // selection stays put until the response lands.
    if onboarding.loading {
        return;
    }

    match key.code {
        KeyCode::Up => {
            if onboarding.selected_setting > 0 {
                onboarding.selected_setting -= 1;
                onboarding.no_questions = false;
            }
        }
        KeyCode::Down => {
            if onboarding.selected_setting + 1 < onboarding.category.settings.len() {
                onboarding.selected_setting += 1;
                onboarding.no_questions = false;
            }
        }
        KeyCode::Enter => {
            // The response either starts the quiz or flags an empty pool.
            if let Some(setting) = onboarding.setting().copied() {
                onboarding.loading = true;
                onboarding.no_questions = false;
                let _ = loader.send(LoadRequest::Questions {
                    category_id: onboarding.category.id.clone(),
                    setting_index: onboarding.selected_setting,
                    amount: setting.questions,
                });
            }
        }
        _ => {}
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent, conn: &Connection) {
    if key.code == KeyCode::Esc {
        app.state = AppState::QuizQuitConfirm;
        return;
    }
    if key.code == KeyCode::Char('s') {
        app.finish_quiz(conn);
        return;
    }

    let Some(quiz) = app.quiz.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Up => quiz.cursor_up(),
        KeyCode::Down => quiz.cursor_down(),
        KeyCode::Left => quiz.previous_question(),
        KeyCode::Right => quiz.next_question(),
        KeyCode::Enter | KeyCode::Char(' ') => quiz.pick_current(),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10)
                && digit >= 1
            {
                quiz.jump_pick(digit as usize - 1);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(app: &mut App, key: KeyEvent, loader: &Sender<LoadRequest>) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.refresh_menu();
            let _ = loader.send(LoadRequest::Categories);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.state = AppState::Quiz,
        _ => {}
    }
}

pub fn handle_score_input(app: &mut App, key: KeyEvent, loader: &Sender<LoadRequest>) {
    match key.code {
        KeyCode::Char('v') | KeyCode::Enter => {
            if app.score.is_some() {
                app.review_scroll = 0;
                app.state = AppState::Review;
            }
        }
        KeyCode::Char('m') | KeyCode::Esc => {
            app.refresh_menu();
            let _ = loader.send(LoadRequest::Categories);
        }
        _ => {}
    }
}

pub fn handle_review_input(app: &mut App, key: KeyEvent, loader: &Sender<LoadRequest>) {
    match key.code {
        KeyCode::Up => app.review_scroll = app.review_scroll.saturating_sub(1),
        KeyCode::Down => app.review_scroll = app.review_scroll.saturating_add(1),
        KeyCode::PageUp => app.review_scroll = app.review_scroll.saturating_sub(10),
        KeyCode::PageDown => app.review_scroll = app.review_scroll.saturating_add(10),
        KeyCode::Esc => app.state = AppState::Score,
        KeyCode::Char('m') => {
            app.refresh_menu();
            let _ = loader.send(LoadRequest::Categories);
        }
        _ => {}
    }
}

pub fn handle_announcements_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            if app.selected_announcement_index > 0 {
                app.selected_announcement_index -= 1;
            }
        }
        KeyCode::Down => {
            if app.selected_announcement_index + 1 < app.announcements.len() {
                app.selected_announcement_index += 1;
            }
        }
        KeyCode::Esc => app.state = AppState::Menu,
        _ => {}
    }
}

pub fn handle_about_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('o') => {
            if let Some(about) = &app.about
                && !about.link.trim().is_empty()
            {
                platform::open_link(&about.link).ok();
            }
        }
        KeyCode::Esc => app.state = AppState::Menu,
        _ => {}
    }
}

pub fn handle_settings_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.settings_cursor = app.settings_cursor.saturating_sub(1),
        KeyCode::Down => app.settings_cursor = (app.settings_cursor + 1).min(1),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
            if app.settings_cursor == 0 {
                app.prefs.theme = app.prefs.theme.next();
            } else {
                app.prefs.accent = app.prefs.accent.next();
            }
            prefs::save(&app.settings_path, &app.prefs).ok();
        }
        KeyCode::Esc => app.state = AppState::Menu,
        _ => {}
    }
}
