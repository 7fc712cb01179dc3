//! Keyboard and mouse input handling for the TUI.
//!
//! This module translates terminal events into application state changes.
//! Overlay states (help, quit confirmation, form editing) capture input
//! before the global browsing keys.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use crate::app::{App, AppState};
use crate::form::FormFocus;
use crate::scroll::{LINE_SCROLL, PAGE_SCROLL};
use crate::ui::render::NAV_HEIGHT;
use crate::ui::sections::Section;

/// Rows moved per mouse wheel notch.
const WHEEL_SCROLL: i32 = 3;

/// Handle a keyboard event.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.state = AppState::Viewing;
        }
        return;
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Viewing;
            }
            _ => {}
        }
        return;
    }

    // Handle form editing
    if matches!(app.state, AppState::EditingForm) {
        handle_form_input(app, key);
        return;
    }

    // Browsing keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = (c as u8 - b'1') as usize;
            if let Some(section) = Section::NAV.get(idx) {
                app.scroll_to_section(*section);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll.scroll_by(LINE_SCROLL as i32);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll.scroll_by(-(LINE_SCROLL as i32));
        }
        KeyCode::PageDown => {
            app.scroll.scroll_by(PAGE_SCROLL as i32);
        }
        KeyCode::PageUp => {
            app.scroll.scroll_by(-(PAGE_SCROLL as i32));
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.scroll.scroll_to(0);
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.scroll.scroll_to(app.scroll.max_offset());
        }
        KeyCode::Char('t') => {
            let now = app.now;
            app.scroll.glide_to(0, now);
        }
        KeyCode::Char('f') => {
            app.toggle_filter();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            // Bring the form into view before handing it the keyboard.
            app.scroll_to_section(Section::Contact);
            app.state = AppState::EditingForm;
        }
        _ => {}
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Viewing;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
        }
        KeyCode::Enter => {
            match app.form.focus {
                FormFocus::Submit => {
                    // Validation feedback and the delivery timer are both
                    // handled inside; nothing to do with the outcome here.
                    let _ = app.submit_contact_form();
                }
                FormFocus::Message => {
                    app.form.insert_newline();
                }
                _ => {
                    app.form.focus_next();
                }
            }
        }
        KeyCode::Backspace => {
            app.form.backspace();
        }
        KeyCode::Char(c) => {
            app.form.insert_char(c);
        }
        _ => {}
    }
}

/// Handle a mouse event. The wheel scrolls the page; pointer motion only
/// matters for the marquee hover pause.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if !matches!(app.state, AppState::ShowingHelp | AppState::ConfirmingQuit) {
                app.scroll.scroll_by(WHEEL_SCROLL);
            }
        }
        MouseEventKind::ScrollUp => {
            if !matches!(app.state, AppState::ShowingHelp | AppState::ConfirmingQuit) {
                app.scroll.scroll_by(-WHEEL_SCROLL);
            }
        }
        MouseEventKind::Moved => {
            let hovered = mouse.row >= NAV_HEIGHT
                && page_row(app, mouse.row)
                    .zip(app.marquee_page_row)
                    .is_some_and(|(row, marquee)| row == marquee);
            app.marquee.set_hover(hovered);
        }
        _ => {}
    }
}

/// Map a screen row to a page row, or `None` above the content area.
fn page_row(app: &App, screen_row: u16) -> Option<u16> {
    let content_row = screen_row.checked_sub(NAV_HEIGHT)?;
    if content_row >= app.viewport_height {
        return None;
    }
    Some(app.scroll.offset().saturating_add(content_row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crossterm::event::{KeyModifiers, MouseButton};

    use crate::config::Config;
    use crate::content::{AssetMap, Person, Portfolio, Project, ProjectFilter, Skills};
    use crate::form::FormState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sample_app() -> App {
        let portfolio = Portfolio {
            personal: Person {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Person::default()
            },
            skills: Skills {
                frontend: vec!["Punch cards".to_string()],
                ..Skills::default()
            },
            projects: vec![
                Project {
                    id: "a".to_string(),
                    featured: true,
                    ..Project::default()
                },
                Project {
                    id: "b".to_string(),
                    featured: false,
                    ..Project::default()
                },
            ],
            ..Portfolio::default()
        };
        let assets = AssetMap::build(&portfolio, Path::new("assets"));
        let mut app = App::new(Config::default(), portfolio, assets);
        app.rebuild_layout(100, 30);
        app
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.state, AppState::ConfirmingQuit);

        handle_input(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.state, AppState::Viewing);

        handle_input(&mut app, key(KeyCode::Char('q')));
        handle_input(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn number_keys_glide_to_sections() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('3')));
        assert!(app.scroll.is_gliding());
    }

    #[test]
    fn vim_keys_scroll_the_page() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.scroll.offset(), LINE_SCROLL);
        handle_input(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.scroll.offset(), 0);

        handle_input(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.scroll.offset(), app.scroll.max_offset());
        handle_input(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.scroll.offset(), 0);
    }

    #[test]
    fn filter_key_toggles_projects() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.filter, ProjectFilter::Featured);
        handle_input(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.filter, ProjectFilter::All);
    }

    #[test]
    fn edit_key_enters_the_form_and_typing_lands_in_fields() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.state, AppState::EditingForm);

        for c in "Ada".chars() {
            handle_input(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.form.field(crate::form::FormField::Name), "Ada");

        // 'q' is text while editing, not a quit request.
        handle_input(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.state, AppState::EditingForm);
        assert_eq!(app.form.field(crate::form::FormField::Name), "Adaq");

        handle_input(&mut app, key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Viewing);
    }

    #[tokio::test]
    async fn enter_advances_fields_and_submits_on_the_button() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('e')));

        for text in ["Ada", "ada@example.com", "Engines", "Hello there"] {
            for c in text.chars() {
                handle_input(&mut app, key(KeyCode::Char(c)));
            }
            handle_input(&mut app, key(KeyCode::Tab));
        }
        assert_eq!(app.form.focus, FormFocus::Submit);

        handle_input(&mut app, key(KeyCode::Enter));
        assert_eq!(app.form.state(), FormState::Submitting);
    }

    #[test]
    fn enter_in_message_inserts_newline() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('e')));
        app.form.focus = FormFocus::Message;
        handle_input(&mut app, key(KeyCode::Char('a')));
        handle_input(&mut app, key(KeyCode::Enter));
        handle_input(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.form.field(crate::form::FormField::Message), "a\nb");
    }

    #[test]
    fn help_overlay_swallows_browsing_keys() {
        let mut app = sample_app();
        handle_input(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::ShowingHelp);

        handle_input(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.scroll.offset(), 0);

        handle_input(&mut app, key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Viewing);
    }

    #[test]
    fn wheel_scrolls_and_clicks_are_ignored() {
        let mut app = sample_app();
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.scroll.offset(), WHEEL_SCROLL as u16);
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollUp, 10, 10));
        assert_eq!(app.scroll.offset(), 0);

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        assert_eq!(app.scroll.offset(), 0);
    }

    #[test]
    fn hovering_the_marquee_row_pauses_it() {
        let mut app = sample_app();
        let marquee_row = app.marquee_page_row.unwrap();
        // Hover needs the row on screen first.
        app.scroll.scroll_to(marquee_row);
        let screen_row = NAV_HEIGHT + (marquee_row - app.scroll.offset());

        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 5, screen_row));
        assert!(app.marquee.is_paused());

        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 5, screen_row + 1));
        assert!(!app.marquee.is_paused());
    }
}
