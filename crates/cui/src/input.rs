use crossterm::event::{KeyCode, KeyEvent};
use janken_core::Hand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveLeft,
    MoveRight,
    Pick(Hand),
    Select,
    ClearSelection,
    Submit,
    NewGame,
    CycleLanguage,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::ClearSelection,
        KeyCode::Left => InputAction::MoveLeft,
        KeyCode::Right | KeyCode::Tab => InputAction::MoveRight,
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char(' ') => InputAction::Select,
        KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Char('1') => InputAction::Pick(Hand::Rock),
        KeyCode::Char('2') => InputAction::Pick(Hand::Scissors),
        KeyCode::Char('3') => InputAction::Pick(Hand::Paper),
        KeyCode::Char('n') => InputAction::NewGame,
        KeyCode::Char('g') => InputAction::CycleLanguage,
        _ => InputAction::None,
    }
}
