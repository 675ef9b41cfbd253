/*
[INPUT]:  Crossterm key events
[OUTPUT]: Form edits and the resulting FormAction
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{FieldId, FormApp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FormAction {
    None,
    Submit,
    Quit,
}

pub(super) fn handle_key_event(app: &mut FormApp, key: KeyEvent) -> FormAction {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return FormAction::Quit;
    }

    let field = app.focused();
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.move_focus(1),
        KeyCode::BackTab | KeyCode::Up => app.move_focus(-1),
        KeyCode::Left if field.is_choice() => app.cycle(field, false),
        KeyCode::Right | KeyCode::Char(' ') if field.is_choice() => app.cycle(field, true),
        KeyCode::Enter if field == FieldId::PlaceOrder => {
            if app.can_submit() {
                return FormAction::Submit;
            }
            app.status = format!("Cannot place order, missing: {}", app.missing_fields().join(", "));
        }
        KeyCode::Enter => app.move_focus(1),
        KeyCode::Backspace => {
            if let Some(value) = app.text_mut(field) {
                value.pop();
            }
        }
        KeyCode::Char(ch) => {
            if let Some(value) = app.text_mut(field) {
                if field == FieldId::Symbol {
                    value.push(ch.to_ascii_uppercase());
                } else {
                    value.push(ch);
                }
            }
        }
        _ => {}
    }
    FormAction::None
}
