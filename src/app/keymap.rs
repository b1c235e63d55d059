// src/app/keymap.rs
use super::command::{Command, Motion};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn motion_for(code: KeyCode) -> Option<Motion> {
    let motion = match code {
        KeyCode::Up => Motion::Up,
        KeyCode::Down => Motion::Down,
        KeyCode::Left => Motion::Left,
        KeyCode::Right => Motion::Right,
        KeyCode::Home => Motion::Home,
        KeyCode::End => Motion::End,
        KeyCode::PageUp => Motion::PageUp,
        KeyCode::PageDown => Motion::PageDown,
        _ => return None,
    };
    Some(motion)
}

/// Maps a key press to a command. Releases and unbound keys map to `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('s' | 'S') if shift => Some(Command::SaveAs),
            KeyCode::Char('S') => Some(Command::SaveAs),
            KeyCode::Char('s') => Some(Command::Save),
            KeyCode::Char('n') => Some(Command::NewTab),
            KeyCode::Char('o') => Some(Command::Open),
            KeyCode::Char('w') => Some(Command::CloseTab),
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char(' ') => Some(Command::Autocomplete),
            KeyCode::Char('a') => Some(Command::SelectAll),
            KeyCode::Char('c') => Some(Command::Copy),
            KeyCode::Char('x') => Some(Command::Cut),
            KeyCode::Char('v') => Some(Command::Paste),
            KeyCode::Char('f') => Some(Command::Find),
            KeyCode::PageDown => Some(Command::NextTab),
            KeyCode::PageUp => Some(Command::PrevTab),
            _ => None,
        };
    }
    if alt {
        return match key.code {
            KeyCode::Char('z') => Some(Command::ToggleWordWrap),
            KeyCode::Right => Some(Command::NextTab),
            KeyCode::Left => Some(Command::PrevTab),
            _ => None,
        };
    }

    if let Some(motion) = motion_for(key.code) {
        return Some(if shift { Command::Select(motion) } else { Command::Move(motion) });
    }

    let command = match key.code {
        KeyCode::Enter => Command::Newline,
        KeyCode::Tab => Command::Insert('\t'),
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Delete => Command::Delete,
        KeyCode::F(1) => Command::ShowHelp,
        KeyCode::F(2) => Command::CycleTheme,
        KeyCode::F(3) => Command::CycleLocale,
        KeyCode::F(4) => Command::ShowAbout,
        KeyCode::Char(c) => Command::Insert(c),
        _ => return None,
    };
    Some(command)
}
