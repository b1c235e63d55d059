// src/ui/terminal.rs
use super::i18n::{self, Locale, Msg};
use super::{Choice, Palette, Presenter, Theme};
use crate::config::Settings;
use crate::editor::{Cursor, TextBuffer};
use crate::filesystem::DirNavigator;
use crate::session::{SessionRegistry, TabId};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};
use std::ops::Range;
use std::path::{Path, PathBuf};

const TAB_WIDTH: usize = 4;
/// Title bar, tab strip and status line.
const CHROME_ROWS: u16 = 3;

const HELP: &[&str] = &[
    "File Operations:",
    "  Ctrl+N        New tab",
    "  Ctrl+O        Open file in new tab",
    "  Ctrl+S        Save current tab",
    "  Ctrl+Shift+S  Save as",
    "  Ctrl+W        Close current tab",
    "  Ctrl+Q        Quit editor",
    "",
    "Editing:",
    "  Enter         New line with indentation",
    "  Ctrl+Space    Keyword suggestions",
    "  Tab           Insert tab",
    "  Shift+Arrows  Select text",
    "  Ctrl+A        Select all",
    "  Ctrl+C/X/V    Copy, cut, paste",
    "  Ctrl+F        Find next",
    "",
    "Navigation:",
    "  Arrow Keys    Move cursor",
    "  Home/End      Line start/end",
    "  PgUp/PgDn     Page up/down",
    "  Ctrl+PgUp/Dn  Previous/next tab",
    "",
    "Other:",
    "  F1            This help",
    "  F2            Next color theme",
    "  F3            Next language",
    "  F4            About",
    "  Alt+Z         Word wrap",
];

const ABOUT: &[&str] = &[
    concat!("Tabedit v", env!("CARGO_PKG_VERSION")),
    "",
    "Tabbed terminal text editor",
    "with smart indent and keyword completion.",
];

fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Screen column of character `col` in `line`.
fn visual_col(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

fn wrapped_rows(line: &str, width: usize) -> usize {
    expand_tabs(line).chars().count().div_ceil(width).max(1)
}

/// Column ranges of the screen rows an expanded line of `len` columns occupies.
fn row_ranges(len: usize, width: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return vec![0..0];
    }
    (0..len).step_by(width).map(|start| start..(start + width).min(len)).collect()
}

/// One screen row of `chars[range]`, with the `selected` columns highlighted.
fn styled_row(
    chars: &[char],
    range: Range<usize>,
    selected: Option<(usize, usize)>,
    highlight: Style,
) -> Line<'static> {
    let text = |r: Range<usize>| chars[r].iter().collect::<String>();
    let Some((from, to)) = selected else {
        return Line::from(text(range));
    };
    let from = from.clamp(range.start, range.end);
    let to = to.clamp(range.start, range.end);
    Line::from(vec![
        Span::raw(text(range.start..from)),
        Span::styled(text(from..to), highlight),
        Span::raw(text(to..range.end)),
    ])
}

fn horizontal_scroll(col: usize, width: usize) -> usize {
    col.saturating_sub(width.saturating_sub(1))
}

/// What the last frame showed; modals repaint it underneath themselves.
#[derive(Debug, Default)]
struct View {
    tabs: Vec<String>,
    active: usize,
    lines: Vec<String>,
    first_line: usize,
    total_lines: usize,
    cursor: Cursor,
    selection: Option<(Cursor, Cursor)>,
    position: String,
    language: &'static str,
}

impl View {
    /// Selected screen columns of the `index`th visible line.
    fn selected_columns(&self, index: usize) -> Option<(usize, usize)> {
        let (start, end) = self.selection?;
        let line = self.lines.get(index)?;
        let absolute = self.first_line + index;
        if absolute < start.line || absolute > end.line {
            return None;
        }
        let from = if absolute == start.line { visual_col(line, start.col) } else { 0 };
        let to = if absolute == end.line {
            visual_col(line, end.col)
        } else {
            visual_col(line, usize::MAX)
        };
        (from < to).then_some((from, to))
    }
}

#[derive(Debug)]
struct Chrome {
    title: String,
    status: String,
    labels: Vec<(TabId, String)>,
    palette: Palette,
    locale: Locale,
    word_wrap: bool,
    view: View,
}

impl Chrome {
    fn new() -> Self {
        Chrome {
            title: String::new(),
            status: String::new(),
            labels: Vec::new(),
            palette: Theme::default().palette(),
            locale: Locale::default(),
            word_wrap: false,
            view: View::default(),
        }
    }

    fn tr(&self, msg: Msg) -> &'static str {
        i18n::text(self.locale, msg)
    }

    fn capture(&mut self, registry: &SessionRegistry, rows: usize) {
        self.labels.retain(|(id, _)| registry.get(*id).is_some());
        let tabs = registry
            .iter()
            .map(|session| {
                self.labels
                    .iter()
                    .find(|(id, _)| *id == session.id())
                    .map_or_else(|| session.display_title(), |(_, label)| label.clone())
            })
            .collect();

        let session = registry.active();
        let buffer = session.buffer();
        let first_line = buffer.scroll_offset();
        let cursor = buffer.cursor();
        let (line, col) = cursor.display_position();
        let position = [line.to_string(), col.to_string()];
        self.view = View {
            tabs,
            active: registry.active_index(),
            lines: buffer
                .lines()
                .iter()
                .skip(first_line)
                .take(rows.max(1))
                .cloned()
                .collect(),
            first_line,
            total_lines: buffer.total_lines(),
            cursor,
            selection: buffer.selection(),
            position: i18n::format(self.locale, Msg::Position, &[&position[0], &position[1]]),
            language: session.language().name(),
        };
    }
}

fn screen_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area)
}

/// Splits the body into line-number gutter and text area.
fn body_split(body: Rect, view: &View) -> (Rect, Rect) {
    let digits = view.total_lines.max(1).to_string().len().max(3) as u16;
    let gutter = (digits + 1).min(body.width);
    (
        Rect::new(body.x, body.y, gutter, body.height),
        Rect::new(body.x + gutter, body.y, body.width - gutter, body.height),
    )
}

fn cursor_cell(chrome: &Chrome, text_area: Rect) -> Option<(u16, u16)> {
    let view = &chrome.view;
    let width = usize::from(text_area.width.max(1));
    let index = view.cursor.line.checked_sub(view.first_line)?;
    let line = view.lines.get(index)?;
    let col = visual_col(line, view.cursor.col);

    let (row, x) = if chrome.word_wrap {
        let above: usize = view.lines[..index].iter().map(|l| wrapped_rows(l, width)).sum();
        (above + col / width, col % width)
    } else {
        (index, col - horizontal_scroll(col, width))
    };
    if row >= usize::from(text_area.height) {
        return None;
    }
    Some((text_area.x + x as u16, text_area.y + row as u16))
}

fn render_screen(frame: &mut Frame, chrome: &Chrome, show_cursor: bool) {
    let palette = chrome.palette;
    let rows = screen_layout(frame.size());

    frame.render_widget(Paragraph::new(chrome.title.as_str()).style(palette.bar()), rows[0]);

    let tabs = Tabs::new(chrome.view.tabs.clone())
        .select(chrome.view.active)
        .style(palette.dim())
        .highlight_style(palette.highlight())
        .divider("|");
    frame.render_widget(tabs, rows[1]);

    render_body(frame, rows[2], chrome, show_cursor);

    let status = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(32)])
        .split(rows[3]);
    frame.render_widget(Paragraph::new(chrome.status.as_str()).style(palette.bar()), status[0]);
    let position = format!("{}  {}", chrome.view.position, chrome.view.language);
    frame.render_widget(
        Paragraph::new(position).style(palette.bar()).alignment(Alignment::Right),
        status[1],
    );
}

fn render_body(frame: &mut Frame, body: Rect, chrome: &Chrome, show_cursor: bool) {
    let palette = chrome.palette;
    let view = &chrome.view;
    let (gutter, text_area) = body_split(body, view);
    let width = usize::from(text_area.width.max(1));
    let number_width = usize::from(gutter.width.saturating_sub(1));

    let mut numbers = Vec::new();
    let mut rows = Vec::new();
    for (offset, line) in view.lines.iter().enumerate() {
        let chars: Vec<char> = expand_tabs(line).chars().collect();
        let selected = view.selected_columns(offset);
        let ranges = if chrome.word_wrap {
            row_ranges(chars.len(), width)
        } else {
            vec![0..chars.len()]
        };
        for (i, range) in ranges.into_iter().enumerate() {
            let number = if i == 0 {
                format!("{:>number_width$} ", view.first_line + offset + 1)
            } else {
                String::new()
            };
            numbers.push(Line::from(number));
            rows.push(styled_row(&chars, range, selected, palette.highlight()));
        }
    }

    frame.render_widget(Paragraph::new(numbers).style(palette.dim()), gutter);
    let mut text = Paragraph::new(rows).style(palette.base());
    if !chrome.word_wrap {
        let col = view
            .lines
            .get(view.cursor.line.saturating_sub(view.first_line))
            .map_or(0, |l| visual_col(l, view.cursor.col));
        text = text.scroll((0, horizontal_scroll(col, width) as u16));
    }
    frame.render_widget(text, text_area);

    if show_cursor {
        if let Some((x, y)) = cursor_cell(chrome, text_area) {
            frame.set_cursor(x, y);
        }
    }
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Clears `area`, draws a titled border and returns the inside.
fn popup(frame: &mut Frame, area: Rect, title: &str, style: Style) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

enum Step<T> {
    Stay,
    Done(T),
}

/// A dialog drawn over the editor that runs its own key loop until answered.
trait Modal {
    type Output;
    fn render(&self, frame: &mut Frame, chrome: &Chrome);
    fn on_key(&mut self, key: KeyEvent) -> Step<Self::Output>;
    /// Answer used when the terminal fails mid-dialog.
    fn dismissed(&self) -> Self::Output;
}

struct ConfirmDialog {
    document: String,
    selected: usize,
}

const CHOICES: [Choice; 3] = [Choice::Save, Choice::Discard, Choice::Cancel];

impl Modal for ConfirmDialog {
    type Output = Choice;

    fn render(&self, frame: &mut Frame, chrome: &Chrome) {
        let area = centered(64, 8, frame.size());
        let inner = popup(frame, area, chrome.tr(Msg::UnsavedTitle), chrome.palette.bar());
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let message = format!("'{}' {}", self.document, chrome.tr(Msg::UnsavedChanges));
        frame.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), parts[0]);

        let labels = [Msg::Save, Msg::Discard, Msg::Cancel];
        let buttons: Vec<Span> = labels
            .iter()
            .enumerate()
            .flat_map(|(i, msg)| {
                let style = if i == self.selected {
                    chrome.palette.highlight()
                } else {
                    chrome.palette.bar()
                };
                [Span::styled(format!("[ {} ]", chrome.tr(*msg)), style), Span::raw("  ")]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
            parts[1],
        );
    }

    fn on_key(&mut self, key: KeyEvent) -> Step<Choice> {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.selected = (self.selected + CHOICES.len() - 1) % CHOICES.len();
            }
            KeyCode::Right | KeyCode::Tab => self.selected = (self.selected + 1) % CHOICES.len(),
            KeyCode::Enter => return Step::Done(CHOICES[self.selected]),
            KeyCode::Esc => return Step::Done(Choice::Cancel),
            _ => {}
        }
        Step::Stay
    }

    fn dismissed(&self) -> Choice {
        Choice::Cancel
    }
}

/// Single-line text entry. Blank input cannot be submitted.
struct InputPrompt {
    title: Msg,
    input: String,
}

impl Modal for InputPrompt {
    type Output = Option<String>;

    fn render(&self, frame: &mut Frame, chrome: &Chrome) {
        let area = centered(70, 3, frame.size());
        let inner = popup(frame, area, chrome.tr(self.title), chrome.palette.bar());
        let shown = self.input.chars().count() as u16;
        let scroll = shown.saturating_sub(inner.width.saturating_sub(1));
        frame.render_widget(Paragraph::new(self.input.as_str()).scroll((0, scroll)), inner);
        frame.set_cursor(inner.x + shown - scroll, inner.y);
    }

    fn on_key(&mut self, key: KeyEvent) -> Step<Option<String>> {
        match key.code {
            KeyCode::Esc => return Step::Done(None),
            KeyCode::Enter if !self.input.trim().is_empty() => {
                return Step::Done(Some(self.input.clone()));
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
        Step::Stay
    }

    fn dismissed(&self) -> Option<String> {
        None
    }
}

/// Directory browser; typing a path and pressing Enter opens it directly.
struct OpenDialog {
    nav: DirNavigator,
    selected: usize,
    input: String,
}

impl OpenDialog {
    fn new() -> Self {
        let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        OpenDialog {
            nav: DirNavigator::new(start),
            selected: 0,
            input: String::new(),
        }
    }

    fn enter_dir(&mut self, path: &Path) {
        self.nav.navigate_to(path);
        self.selected = 0;
    }

    fn go_up(&mut self) {
        self.nav.navigate_up();
        self.selected = 0;
    }

    fn accept(&mut self) -> Step<Option<PathBuf>> {
        let typed = self.input.trim();
        if !typed.is_empty() {
            let path = self.nav.current_path.join(typed);
            self.input.clear();
            if path.is_dir() {
                self.enter_dir(&path);
                return Step::Stay;
            }
            return Step::Done(Some(path));
        }

        // row 0 is the parent directory
        let entry = self.selected.checked_sub(1).and_then(|i| self.nav.entries.get(i));
        let Some(entry) = entry else {
            self.go_up();
            return Step::Stay;
        };
        if entry.is_dir {
            let path = entry.path.clone();
            self.enter_dir(&path);
            Step::Stay
        } else {
            Step::Done(Some(entry.path.clone()))
        }
    }
}

impl Modal for OpenDialog {
    type Output = Option<PathBuf>;

    fn render(&self, frame: &mut Frame, chrome: &Chrome) {
        let area = centered(76, 22, frame.size());
        let title = format!("{} {}", chrome.tr(Msg::OpenTitle), self.nav.current_path.display());
        let inner = popup(frame, area, &title, chrome.palette.bar());
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let prompt = format!("> {}", self.input);
        frame.render_widget(Paragraph::new(prompt.as_str()), parts[0]);
        frame.set_cursor(parts[0].x + prompt.chars().count() as u16, parts[0].y);

        let items: Vec<ListItem> = std::iter::once(ListItem::new("../"))
            .chain(self.nav.entries.iter().map(|e| ListItem::new(e.label())))
            .collect();
        let list = List::new(items).highlight_style(chrome.palette.highlight());
        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, parts[1], &mut state);

        let hint = format!(
            "Enter open | Tab sort ({:?}) | Ctrl+F filter | Alt+H hidden | Esc",
            self.nav.sort_by
        );
        frame.render_widget(Paragraph::new(hint).style(chrome.palette.dim()), parts[2]);
    }

    fn on_key(&mut self, key: KeyEvent) -> Step<Option<PathBuf>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => return Step::Done(None),
            KeyCode::Enter => return self.accept(),
            KeyCode::Char('h') if alt => {
                self.nav.toggle_hidden();
                self.selected = 0;
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.nav.entries.len()),
            KeyCode::Tab => self.nav.cycle_sort(),
            KeyCode::Char('f') if ctrl => {
                self.nav.search(&self.input);
                self.input.clear();
                self.selected = 0;
            }
            KeyCode::Backspace if self.input.is_empty() => self.go_up(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl && !alt => self.input.push(c),
            _ => {}
        }
        Step::Stay
    }

    fn dismissed(&self) -> Option<PathBuf> {
        None
    }
}

struct CompletionPopup {
    items: Vec<String>,
    selected: usize,
}

impl Modal for CompletionPopup {
    type Output = Option<usize>;

    fn render(&self, frame: &mut Frame, chrome: &Chrome) {
        let screen = frame.size();
        let (_, text_area) = body_split(screen_layout(screen)[2], &chrome.view);
        let (x, y) = cursor_cell(chrome, text_area).unwrap_or((text_area.x, text_area.y));

        let width = self.items.iter().map(|i| i.len() as u16).max().unwrap_or(0).max(16) + 4;
        let height = self.items.len() as u16 + 2;
        let width = width.min(screen.width);
        let height = height.min(screen.height);
        let area = Rect::new(
            x.min(screen.width - width),
            (y + 1).min(screen.height - height),
            width,
            height,
        );

        let inner = popup(frame, area, chrome.tr(Msg::SuggestionsTitle), chrome.palette.bar());
        let items: Vec<ListItem> = self.items.iter().map(|i| ListItem::new(i.as_str())).collect();
        let list = List::new(items).highlight_style(chrome.palette.highlight());
        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn on_key(&mut self, key: KeyEvent) -> Step<Option<usize>> {
        match key.code {
            KeyCode::Esc => return Step::Done(None),
            KeyCode::Enter | KeyCode::Tab => return Step::Done(Some(self.selected)),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.items.len().saturating_sub(1));
            }
            _ => {}
        }
        Step::Stay
    }

    fn dismissed(&self) -> Option<usize> {
        None
    }
}

struct MessageBox {
    title: String,
    lines: Vec<String>,
    error: bool,
}

impl Modal for MessageBox {
    type Output = ();

    fn render(&self, frame: &mut Frame, chrome: &Chrome) {
        let height = self.lines.len() as u16 + 4;
        let width = self
            .lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
            .max(30)
            + 4;
        let area = centered(width, height, frame.size());
        let style = if self.error {
            chrome.palette.error_style()
        } else {
            chrome.palette.bar()
        };
        let inner = popup(frame, area, &self.title, style);
        let mut lines: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        lines.push(Line::from(""));
        let ok = Span::styled(format!("[ {} ]", chrome.tr(Msg::Ok)), chrome.palette.highlight());
        lines.push(Line::from(ok).alignment(Alignment::Center));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn on_key(&mut self, key: KeyEvent) -> Step<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Step::Done(()),
            _ => Step::Stay,
        }
    }

    fn dismissed(&self) {}
}

/// Full-screen ratatui front end. Restores the terminal when dropped.
pub struct TerminalUi {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    chrome: Chrome,
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

impl TerminalUi {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TerminalUi { terminal, chrome: Chrome::new() })
    }

    /// Rows available for document text.
    pub fn body_height(&self) -> io::Result<usize> {
        Ok(usize::from(self.terminal.size()?.height.saturating_sub(CHROME_ROWS)))
    }

    pub fn draw(&mut self, registry: &SessionRegistry) -> io::Result<()> {
        let rows = self.body_height()?;
        self.chrome.capture(registry, rows);
        let chrome = &self.chrome;
        self.terminal.draw(|frame| render_screen(frame, chrome, true))?;
        Ok(())
    }

    fn run_modal<M: Modal>(&mut self, mut modal: M) -> M::Output {
        loop {
            let chrome = &self.chrome;
            let drawn = self.terminal.draw(|frame| {
                render_screen(frame, chrome, false);
                modal.render(frame, chrome);
            });
            if drawn.is_err() {
                return modal.dismissed();
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Step::Done(answer) = modal.on_key(key) {
                        return answer;
                    }
                }
                Ok(_) => {}
                Err(_) => return modal.dismissed(),
            }
        }
    }
}

impl Drop for TerminalUi {
    fn drop(&mut self) {
        let _ = restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

impl Presenter for TerminalUi {
    fn confirm(&mut self, document: &str) -> Choice {
        self.run_modal(ConfirmDialog { document: document.to_string(), selected: 0 })
    }

    fn ask_save_path(&mut self, suggested: &Path) -> Option<PathBuf> {
        let answer = self.run_modal(InputPrompt {
            title: Msg::SaveAsTitle,
            input: suggested.display().to_string(),
        });
        answer.map(|path| PathBuf::from(path.trim()))
    }

    fn ask_open_path(&mut self) -> Option<PathBuf> {
        self.run_modal(OpenDialog::new())
    }

    fn pick_completion(&mut self, candidates: &[&str]) -> Option<usize> {
        self.run_modal(CompletionPopup {
            items: candidates.iter().map(|c| c.to_string()).collect(),
            selected: 0,
        })
    }

    fn ask_find(&mut self, previous: &str) -> Option<String> {
        self.run_modal(InputPrompt {
            title: Msg::FindTitle,
            input: previous.to_string(),
        })
    }

    fn show_error(&mut self, message: &str) {
        self.run_modal(MessageBox {
            title: self.chrome.tr(Msg::Error).to_string(),
            lines: vec![message.to_string()],
            error: true,
        });
    }

    fn set_status(&mut self, text: &str) {
        self.chrome.status = text.to_string();
    }

    fn set_title(&mut self, text: &str) {
        if self.chrome.title != text {
            self.chrome.title = text.to_string();
            // cosmetic; some terminals ignore it
            let _ = execute!(self.terminal.backend_mut(), SetTitle(text));
        }
    }

    fn set_tab_label(&mut self, tab: TabId, text: &str) {
        match self.chrome.labels.iter_mut().find(|(id, _)| *id == tab) {
            Some((_, label)) => *label = text.to_string(),
            None => self.chrome.labels.push((tab, text.to_string())),
        }
    }

    fn show_help(&mut self) {
        self.run_modal(MessageBox {
            title: self.chrome.tr(Msg::ShortcutsTitle).to_string(),
            lines: HELP.iter().map(|l| l.to_string()).collect(),
            error: false,
        });
    }

    fn show_about(&mut self) {
        self.run_modal(MessageBox {
            title: self.chrome.tr(Msg::AboutTitle).to_string(),
            lines: ABOUT.iter().map(|l| l.to_string()).collect(),
            error: false,
        });
    }

    fn apply_settings(&mut self, settings: &Settings) {
        self.chrome.palette = settings.theme.palette();
        self.chrome.locale = settings.locale;
        self.chrome.word_wrap = settings.word_wrap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome_with(lines: &[&str], cursor: Cursor, wrap: bool) -> Chrome {
        let mut chrome = Chrome::new();
        chrome.word_wrap = wrap;
        chrome.view.lines = lines.iter().map(|l| l.to_string()).collect();
        chrome.view.total_lines = lines.len();
        chrome.view.cursor = cursor;
        chrome
    }

    #[test]
    fn test_visual_col_expands_tabs() {
        assert_eq!(visual_col("\tab", 2), TAB_WIDTH + 1);
        assert_eq!(expand_tabs("\tx"), "    x");
    }

    #[test]
    fn test_row_ranges() {
        assert_eq!(row_ranges(6, 4), vec![0..4, 4..6]);
        assert_eq!(row_ranges(0, 4), vec![0..0]);
        assert_eq!(wrapped_rows("abcdefgh", 4), 2);
    }

    #[test]
    fn test_selected_columns_follow_tabs_and_line_span() {
        let mut chrome = chrome_with(&["\tab", "cd", "ef"], Cursor::new(2, 1), false);
        chrome.view.selection = Some((Cursor::new(0, 1), Cursor::new(2, 1)));
        assert_eq!(chrome.view.selected_columns(0), Some((TAB_WIDTH, TAB_WIDTH + 2)));
        assert_eq!(chrome.view.selected_columns(1), Some((0, 2)));
        assert_eq!(chrome.view.selected_columns(2), Some((0, 1)));
        chrome.view.first_line = 1;
        assert_eq!(chrome.view.selected_columns(2), None);
    }

    #[test]
    fn test_styled_row_splits_highlight() {
        let chars: Vec<char> = "abcdef".chars().collect();
        let highlight = Style::default().add_modifier(Modifier::REVERSED);
        let line = styled_row(&chars, 2..6, Some((1, 4)), highlight);
        let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["", "cd", "ef"]);
        assert_eq!(line.spans[1].style, highlight);
        let plain = styled_row(&chars, 0..3, None, highlight);
        assert_eq!(plain.spans.len(), 1);
    }

    #[test]
    fn test_cursor_cell_without_wrap_scrolls_horizontally() {
        let chrome = chrome_with(&["0123456789"], Cursor::new(0, 9), false);
        let area = Rect::new(4, 2, 5, 3);
        assert_eq!(cursor_cell(&chrome, area), Some((8, 2)));
    }

    #[test]
    fn test_cursor_cell_with_wrap_counts_rows_above() {
        let chrome = chrome_with(&["abcdefgh", "xy"], Cursor::new(1, 1), true);
        let area = Rect::new(0, 0, 4, 10);
        assert_eq!(cursor_cell(&chrome, area), Some((1, 2)));
    }

    #[test]
    fn test_body_split_gutter_grows_with_line_count() {
        let mut view = View::default();
        view.total_lines = 12345;
        let (gutter, text) = body_split(Rect::new(0, 0, 80, 10), &view);
        assert_eq!(gutter.width, 6);
        assert_eq!(text.x, 6);
        assert_eq!(text.width, 74);
    }

    #[test]
    fn test_confirm_dialog_keys() {
        let mut dialog = ConfirmDialog { document: "a".into(), selected: 0 };
        assert!(matches!(dialog.on_key(KeyEvent::from(KeyCode::Right)), Step::Stay));
        assert!(matches!(
            dialog.on_key(KeyEvent::from(KeyCode::Enter)),
            Step::Done(Choice::Discard)
        ));
        assert!(matches!(dialog.on_key(KeyEvent::from(KeyCode::Left)), Step::Stay));
        assert!(matches!(dialog.on_key(KeyEvent::from(KeyCode::Left)), Step::Stay));
        assert!(matches!(
            dialog.on_key(KeyEvent::from(KeyCode::Enter)),
            Step::Done(Choice::Cancel)
        ));
        assert!(matches!(dialog.on_key(KeyEvent::from(KeyCode::Esc)), Step::Done(Choice::Cancel)));
    }

    #[test]
    fn test_input_prompt_editing() {
        let mut prompt = InputPrompt { title: Msg::FindTitle, input: "ab".into() };
        prompt.on_key(KeyEvent::from(KeyCode::Backspace));
        prompt.on_key(KeyEvent::from(KeyCode::Char('c')));
        match prompt.on_key(KeyEvent::from(KeyCode::Enter)) {
            Step::Done(text) => assert_eq!(text.as_deref(), Some("ac")),
            Step::Stay => panic!("expected an answer"),
        }

        let mut empty = InputPrompt { title: Msg::SaveAsTitle, input: "  ".into() };
        assert!(matches!(empty.on_key(KeyEvent::from(KeyCode::Enter)), Step::Stay));
    }
}
