// src/main.rs
use colored::Colorize;
use tabedit::config::Settings;
use tabedit::utils::logging;

fn main() {
    let settings = Settings::load();
    // The editor still runs without a log file.
    let log_path = logging::init(&settings).ok();
    tracing::info!(log = ?log_path, theme = settings.theme.name(), "starting");

    if let Err(err) = tabedit::app::run(settings) {
        tracing::error!(error = %err, "fatal");
        eprintln!("{} {:#}", "tabedit:".red().bold(), err);
        std::process::exit(1);
    }
}
