use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind};

#[derive(Debug, Clone, Copy)]
pub enum DashboardAction {
    NextField,
    PrevField,
    MoveUp,
    MoveDown,
    ToTop,
    ToBottom,
    Submit,
    DeleteRow,
    CycleSort,
    ClearAll,
    FocusForm,
    FocusTable,
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub enum EditAction {
    Insert(char),
    MoveLeft,
    MoveRight,
    DeleteLeft,
    DeleteRight,
}

/// What a key press means while a form field has focus.
#[derive(Debug, Clone, Copy)]
pub enum FormEvent {
    Edit(EditAction),
    Act(DashboardAction),
}

pub fn key_pressed() -> Option<KeyCode> {
    if poll(Duration::from_millis(50)).ok()? {
        if let Event::Key(key) = read().ok()? {
            if key.kind == KeyEventKind::Press {
                return Some(key.code);
            }
        }
    }
    None
}

pub fn table_action(code: KeyCode) -> Option<DashboardAction> {
    match code {
        KeyCode::Char(c) => match c {
            'k' => Some(DashboardAction::MoveUp),
            'j' => Some(DashboardAction::MoveDown),
            'g' => Some(DashboardAction::ToTop),
            'G' => Some(DashboardAction::ToBottom),
            'd' => Some(DashboardAction::DeleteRow),
            's' => Some(DashboardAction::CycleSort),
            'c' => Some(DashboardAction::ClearAll),
            'a' | 'i' => Some(DashboardAction::FocusForm),
            'q' => Some(DashboardAction::Exit),
            _ => None,
        },
        KeyCode::Up => Some(DashboardAction::MoveUp),
        KeyCode::Down => Some(DashboardAction::MoveDown),
        KeyCode::Delete => Some(DashboardAction::DeleteRow),
        KeyCode::Tab => Some(DashboardAction::FocusForm),
        KeyCode::Esc => Some(DashboardAction::Exit),
        _ => None,
    }
}

pub fn form_event(code: KeyCode) -> Option<FormEvent> {
    match code {
        KeyCode::Char(c) => {
            if c.is_alphanumeric() || c.is_ascii_whitespace() || ".,-'&/!?".contains(c) {
                Some(FormEvent::Edit(EditAction::Insert(c)))
            } else {
                None
            }
        }
        KeyCode::Left => Some(FormEvent::Edit(EditAction::MoveLeft)),
        KeyCode::Right => Some(FormEvent::Edit(EditAction::MoveRight)),
        KeyCode::Backspace => Some(FormEvent::Edit(EditAction::DeleteLeft)),
        KeyCode::Delete => Some(FormEvent::Edit(EditAction::DeleteRight)),
        KeyCode::Tab => Some(FormEvent::Act(DashboardAction::NextField)),
        KeyCode::BackTab => Some(FormEvent::Act(DashboardAction::PrevField)),
        KeyCode::Enter => Some(FormEvent::Act(DashboardAction::Submit)),
        KeyCode::Esc => Some(FormEvent::Act(DashboardAction::FocusTable)),
        _ => None,
    }
}
