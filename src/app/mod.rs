// src/app/mod.rs
pub mod command;
pub mod controller;
pub mod keymap;

pub use command::{Command, Flow, Motion};
pub use controller::Controller;

use crate::clipboard::SystemClipboard;
use crate::config::Settings;
use crate::filesystem::{FileSystem, LocalFs};
use crate::ui::TerminalUi;
use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;
use tracing::info;

/// Redraw cadence while idle; keeps the cursor position readout current.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl<F: FileSystem> Controller<TerminalUi, F> {
    /// Sizes the viewport, scrolls the active buffer to its cursor and draws.
    pub fn render(&mut self) -> io::Result<()> {
        let rows = self.ui.body_height()?;
        self.set_page_size(rows);
        self.registry
            .active_mut()
            .edit(|b| b.ensure_cursor_visible(rows));
        self.ui.draw(&self.registry)
    }
}

/// Runs the editor until the user quits.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let ui = TerminalUi::new().context("failed to initialise the terminal")?;
    let mut controller =
        Controller::new(ui, LocalFs, settings).with_clipboard(SystemClipboard::new());
    info!("editor started");

    loop {
        controller.render().context("failed to draw")?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(command) = keymap::command_for(key) {
                if controller.handle(command) == Flow::Quit {
                    break;
                }
            }
        }
    }

    info!("editor stopped");
    Ok(())
}
