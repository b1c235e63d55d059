// src/app/command.rs

/// Everything a key press can ask the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewTab,
    Open,
    Save,
    SaveAs,
    CloseTab,
    Quit,
    NextTab,
    PrevTab,
    /// Enter: newline with smart indentation.
    Newline,
    Autocomplete,
    Insert(char),
    Backspace,
    Delete,
    Move(Motion),
    /// Shift+motion: extends the selection.
    Select(Motion),
    SelectAll,
    Copy,
    Cut,
    Paste,
    Find,
    ShowHelp,
    ShowAbout,
    CycleTheme,
    CycleLocale,
    ToggleWordWrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Whether the event loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
