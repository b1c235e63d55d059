// src/app/controller.rs
use super::command::{Command, Flow, Motion};
use crate::assist::{self, complete};
use crate::clipboard::{ClipboardService, InternalClipboard};
use crate::config::Settings;
use crate::editor::TextBuffer;
use crate::filesystem::FileSystem;
use crate::session::{Opened, SessionRegistry};
use crate::ui::i18n::{self, Msg};
use crate::ui::Presenter;
use std::path::Path;
use tracing::debug;

/// Owns the open documents and routes commands to them.
#[derive(Debug)]
pub struct Controller<P: Presenter, F: FileSystem> {
    pub(crate) registry: SessionRegistry,
    pub(crate) ui: P,
    fs: F,
    clipboard: Box<dyn ClipboardService>,
    settings: Settings,
    last_search: String,
    page_size: usize,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

impl<P: Presenter, F: FileSystem> Controller<P, F> {
    pub fn new(mut ui: P, fs: F, settings: Settings) -> Self {
        ui.apply_settings(&settings);
        let mut controller = Controller {
            registry: SessionRegistry::new(),
            ui,
            fs,
            clipboard: Box::new(InternalClipboard::default()),
            settings,
            last_search: String::new(),
            page_size: 20,
        };
        controller.status(Msg::Ready, &[]);
        controller.registry.publish(&mut controller.ui);
        controller
    }

    /// Replaces the default process-local clipboard.
    pub fn with_clipboard(mut self, clipboard: impl ClipboardService + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn ui(&self) -> &P {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut P {
        &mut self.ui
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
    }

    fn status(&mut self, msg: Msg, args: &[&str]) {
        let text = i18n::format(self.settings.locale, msg, args);
        self.ui.set_status(&text);
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        let flow = self.dispatch(command);
        self.registry.publish(&mut self.ui);
        flow
    }

    fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::NewTab => {
                self.registry.new_tab();
                self.status(Msg::NewFile, &[]);
            }
            Command::Open => match self.registry.open_prompted(&mut self.ui, &self.fs) {
                Ok(Opened::Loaded(_)) => {
                    let name = self.registry.active().path().name();
                    self.status(Msg::Loaded, &[&name]);
                }
                Ok(Opened::Existing(_)) => {
                    let name = self.registry.active().path().name();
                    self.status(Msg::SwitchedTo, &[&name]);
                }
                Err(_) => {}
            },
            Command::Save => {
                let id = self.registry.active_id();
                if let Ok(path) = self.registry.save(id, &mut self.ui, &self.fs) {
                    self.status(Msg::Saved, &[&file_label(&path)]);
                }
            }
            Command::SaveAs => {
                let id = self.registry.active_id();
                if let Ok(path) = self.registry.save_as(id, &mut self.ui, &self.fs) {
                    self.status(Msg::SavedAs, &[&file_label(&path)]);
                }
            }
            Command::CloseTab => {
                let id = self.registry.active_id();
                if self.registry.close(id, &mut self.ui, &self.fs) {
                    self.status(Msg::TabClosed, &[]);
                }
            }
            Command::Quit => {
                if self.registry.close_all_with_gate(&mut self.ui, &self.fs) {
                    return Flow::Quit;
                }
            }
            Command::NextTab => self.registry.next_tab(),
            Command::PrevTab => self.registry.prev_tab(),
            Command::Newline => {
                self.registry.active_mut().edit(|buffer| {
                    buffer.delete_selection();
                    if !assist::smart_newline(buffer) {
                        buffer.insert_newline();
                    }
                });
            }
            Command::Autocomplete => self.autocomplete(),
            Command::Insert(ch) => self.registry.active_mut().edit(|b| {
                b.delete_selection();
                b.insert_char(ch);
            }),
            Command::Backspace => {
                self.registry.active_mut().edit(|b| {
                    if b.delete_selection().is_none() {
                        b.delete_char();
                    }
                });
            }
            Command::Delete => {
                self.registry.active_mut().edit(|b| {
                    if b.delete_selection().is_none() {
                        b.delete_forward();
                    }
                });
            }
            Command::Move(motion) => {
                self.registry.active_mut().edit(|b| b.clear_selection());
                self.move_cursor(motion);
            }
            Command::Select(motion) => {
                self.registry.active_mut().edit(|b| b.start_selection());
                self.move_cursor(motion);
            }
            Command::SelectAll => {
                self.registry.active_mut().edit(|b| b.select_all());
                self.status(Msg::SelectedAll, &[]);
            }
            Command::Copy => {
                let buffer = self.registry.active().buffer();
                let text = buffer.selected_text().unwrap_or_else(|| {
                    buffer.line(buffer.cursor().line).unwrap_or_default().to_string()
                });
                self.store_clipboard(text, Msg::Copied);
            }
            Command::Cut => {
                let text = self
                    .registry
                    .active_mut()
                    .edit(|b| b.delete_selection().unwrap_or_else(|| b.cut_line()));
                self.store_clipboard(text, Msg::CutDone);
            }
            Command::Paste => {
                let text = self.clipboard.get();
                if text.is_empty() {
                    self.status(Msg::ClipboardEmpty, &[]);
                } else {
                    self.registry.active_mut().edit(|b| b.insert_text(&text));
                    self.status(Msg::Pasted, &[]);
                }
            }
            Command::Find => self.find(),
            Command::ShowHelp => self.ui.show_help(),
            Command::ShowAbout => self.ui.show_about(),
            Command::CycleTheme => {
                self.settings.theme = self.settings.theme.next();
                self.ui.apply_settings(&self.settings);
                self.status(Msg::ThemeChanged, &[self.settings.theme.name()]);
            }
            Command::CycleLocale => {
                self.settings.locale = self.settings.locale.next();
                self.ui.apply_settings(&self.settings);
                self.status(Msg::LanguageChanged, &[self.settings.locale.name()]);
            }
            Command::ToggleWordWrap => {
                self.settings.word_wrap = !self.settings.word_wrap;
                self.ui.apply_settings(&self.settings);
                let msg = if self.settings.word_wrap { Msg::WordWrapOn } else { Msg::WordWrapOff };
                self.status(msg, &[]);
            }
        }
        Flow::Continue
    }

    fn move_cursor(&mut self, motion: Motion) {
        let page = isize::try_from(self.page_size).unwrap_or(isize::MAX);
        self.registry.active_mut().edit(|b| match motion {
            Motion::Up => b.move_cursor(-1, 0),
            Motion::Down => b.move_cursor(1, 0),
            Motion::Left => b.move_left(),
            Motion::Right => b.move_right(),
            Motion::Home => b.move_home(),
            Motion::End => b.move_end(),
            Motion::PageUp => b.move_cursor(-page, 0),
            Motion::PageDown => b.move_cursor(page, 0),
        });
    }

    fn store_clipboard(&mut self, text: String, done: Msg) {
        let system = self.clipboard.put(text);
        let mut status = i18n::text(self.settings.locale, done).to_string();
        if !system {
            status.push(' ');
            status.push_str(i18n::text(self.settings.locale, Msg::InternalClipboard));
        }
        self.ui.set_status(&status);
    }

    fn find(&mut self) {
        let Some(query) = self.ui.ask_find(&self.last_search) else {
            return;
        };
        if query.is_empty() {
            return;
        }
        let found = self.registry.active_mut().edit(|b| b.find_next(&query));
        match found {
            Some(at) => {
                let (line, col) = at.display_position();
                self.status(Msg::Found, &[&line.to_string(), &col.to_string()]);
            }
            None => self.status(Msg::NotFound, &[&query]),
        }
        debug!(query = %query, found = found.is_some(), "search");
        self.last_search = query;
    }

    fn autocomplete(&mut self) {
        let session = self.registry.active();
        let Some(context) = assist::suggest(session.buffer(), session.language()) else {
            self.status(Msg::NoSuggestions, &[]);
            return;
        };
        let Some(word) = self
            .ui
            .pick_completion(&context.candidates)
            .and_then(|i| context.candidates.get(i).copied())
        else {
            return;
        };
        debug!(partial = %context.partial, word, "completion accepted");
        self.registry
            .active_mut()
            .edit(|b| complete::apply(b, &context, word));
    }
}
