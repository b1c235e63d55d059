// tests/editing_scenarios.rs
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tabedit::app::{Command, Controller, Flow, Motion};
use tabedit::config::Settings;
use tabedit::editor::TextBuffer;
use tabedit::filesystem::LocalFs;
use tabedit::session::TabId;
use tabedit::ui::{Choice, Presenter};

/// Answers dialogs from queues and remembers what it was asked.
#[derive(Default)]
struct Script {
    answers: VecDeque<Choice>,
    save_paths: VecDeque<PathBuf>,
    open_paths: VecDeque<PathBuf>,
    picks: VecDeque<Option<usize>>,
    queries: VecDeque<String>,
    confirms: Vec<String>,
    errors: Vec<String>,
    status: String,
    title: String,
}

impl Presenter for Script {
    fn confirm(&mut self, document: &str) -> Choice {
        self.confirms.push(document.to_string());
        self.answers.pop_front().unwrap_or(Choice::Cancel)
    }

    fn ask_save_path(&mut self, _suggested: &Path) -> Option<PathBuf> {
        self.save_paths.pop_front()
    }

    fn ask_open_path(&mut self) -> Option<PathBuf> {
        self.open_paths.pop_front()
    }

    fn pick_completion(&mut self, _candidates: &[&str]) -> Option<usize> {
        self.picks.pop_front().flatten()
    }

    fn ask_find(&mut self, _previous: &str) -> Option<String> {
        self.queries.pop_front()
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_title(&mut self, text: &str) {
        self.title = text.to_string();
    }

    fn set_tab_label(&mut self, _tab: TabId, _text: &str) {}
}

fn editor() -> Controller<Script, LocalFs> {
    Controller::new(Script::default(), LocalFs, Settings::default())
}

fn type_text(editor: &mut Controller<Script, LocalFs>, text: &str) {
    for ch in text.chars() {
        editor.handle(if ch == '\n' { Command::Newline } else { Command::Insert(ch) });
    }
}

fn open(editor: &mut Controller<Script, LocalFs>, path: &Path) {
    editor_script(editor).open_paths.push_back(path.to_path_buf());
    editor.handle(Command::Open);
}

fn editor_script(editor: &mut Controller<Script, LocalFs>) -> &mut Script {
    editor.ui_mut()
}

#[test]
fn test_opening_the_same_file_twice_focuses_existing_tab() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "alpha").unwrap();

    let mut editor = editor();
    open(&mut editor, &path);
    editor.handle(Command::NewTab);
    open(&mut editor, &path);

    assert_eq!(editor.registry().len(), 2);
    assert_eq!(editor.registry().active_index(), 0);
    assert_eq!(editor.ui().status, "Switched to a.txt");
}

#[test]
fn test_close_with_save_prompts_once_and_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "old").unwrap();

    let mut editor = editor();
    open(&mut editor, &path);
    editor.handle(Command::Move(Motion::End));
    type_text(&mut editor, "er");
    assert_eq!(editor.ui().title, "Tabedit - notes.txt *");

    editor_script(&mut editor).answers.push_back(Choice::Save);
    editor.handle(Command::CloseTab);

    assert_eq!(editor.ui().confirms, vec!["notes.txt"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "older");
    assert_eq!(editor.registry().len(), 1);
    assert!(editor.registry().active().path().is_untitled());
}

#[test]
fn test_smart_indent_after_then() {
    let mut editor = editor();
    type_text(&mut editor, "if a then\n");
    let buffer = editor.registry().active().buffer();
    assert_eq!(buffer.text(), "if a then\n    ");
    assert_eq!(buffer.cursor().col, 4);
}

#[test]
fn test_save_untitled_then_edit_again() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = editor();
    type_text(&mut editor, "draft");

    editor_script(&mut editor).save_paths.push_back(dir.path().join("draft"));
    editor.handle(Command::Save);

    let written = dir.path().join("draft.txt");
    assert_eq!(fs::read_to_string(&written).unwrap(), "draft");
    assert!(!editor.registry().active().is_dirty());
    assert_eq!(editor.ui().title, "Tabedit - draft.txt");

    type_text(&mut editor, "!");
    assert!(editor.registry().active().is_dirty());
    editor.handle(Command::Save);
    assert_eq!(fs::read_to_string(&written).unwrap(), "draft!");
    assert!(editor.ui().save_paths.is_empty());
}

#[test]
fn test_quit_gates_every_dirty_tab_and_cancel_stops() {
    let mut editor = editor();
    type_text(&mut editor, "one");
    editor.handle(Command::NewTab);
    type_text(&mut editor, "two");

    editor_script(&mut editor).answers.extend([Choice::Discard, Choice::Cancel]);
    assert_eq!(editor.handle(Command::Quit), Flow::Continue);
    assert_eq!(editor.ui().confirms, vec!["Untitled 1", "Untitled 2"]);
    assert_eq!(editor.registry().len(), 2);

    editor_script(&mut editor).answers.extend([Choice::Discard, Choice::Discard]);
    assert_eq!(editor.handle(Command::Quit), Flow::Quit);
}

#[test]
fn test_open_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = editor();
    open(&mut editor, &dir.path().join("missing.cs"));
    assert_eq!(editor.ui().errors.len(), 1);
    assert!(editor.ui().errors[0].starts_with("Error opening"));
    assert_eq!(editor.registry().len(), 1);
}

#[test]
fn test_completion_picks_keyword() {
    let mut editor = editor();
    type_text(&mut editor, "names");
    editor_script(&mut editor).picks.push_back(Some(0));
    editor.handle(Command::Autocomplete);
    assert_eq!(editor.registry().active().buffer().text(), "namespace");
}

#[test]
fn test_cut_line_paste_below_and_find_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.txt");
    fs::write(&path, "one\ntwo").unwrap();

    let mut editor = editor();
    open(&mut editor, &path);
    editor.handle(Command::Cut);
    assert_eq!(editor.registry().active().buffer().text(), "two");
    assert!(editor.registry().active().is_dirty());

    editor.handle(Command::Move(Motion::End));
    editor.handle(Command::Newline);
    editor.handle(Command::Paste);
    editor.handle(Command::Save);
    assert_eq!(fs::read_to_string(&path).unwrap(), "two\none");
    assert!(!editor.registry().active().is_dirty());

    editor_script(&mut editor).queries.push_back("one".into());
    editor.handle(Command::Find);
    assert_eq!(editor.ui().status, "Found at Ln 2, Col 1");
    let buffer = editor.registry().active().buffer();
    assert_eq!(buffer.selected_text().as_deref(), Some("one"));
}
