//! Terminal output for CLI handlers.
//!
//! Human output goes to stdout as sections, fields and tables. With `--json`
//! a command prints exactly one JSON document and all other output is
//! suppressed. Errors always go to stderr.

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit one machine-readable JSON document instead of text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Text output is off in JSON and quiet modes.
fn text_suppressed() -> bool {
    let config = read_config();
    config.json || config.quiet
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig, color: ColorChoice) {
    write_config(config);
    let enabled = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    };
    owo_colors::set_override(enabled);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if text_suppressed() {
        return;
    }
    println!("{} {}", "fplopt".bold(), version.dimmed());
}

/// Print a section header.
pub fn section(title: &str) {
    if text_suppressed() {
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if text_suppressed() {
        return;
    }
    println!("  {:<14} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if text_suppressed() {
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line. Shown in quiet mode too.
pub fn warning(message: &str) {
    if is_json() {
        return;
    }
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "message": message,
            })
        );
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a dimmed note.
pub fn note(message: &str) {
    if text_suppressed() {
        return;
    }
    println!("  {}", message.dimmed());
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    if text_suppressed() {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Print `value` as the command's JSON document.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialised.
pub fn json_document<T: Serialize>(value: &T) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Predicted points with one decimal place.
#[must_use]
pub fn points(value: f64) -> String {
    format!("{value:.1}")
}

/// A points difference, colored by sign.
#[must_use]
pub fn gain(value: f64) -> String {
    let text = format!("{value:+.1}");
    if value > 0.0 {
        text.green().to_string()
    } else if value < 0.0 {
        text.red().to_string()
    } else {
        text
    }
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    value.to_string().cyan().to_string()
}

/// Braille spinner animation frames.
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner on stderr.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    if text_suppressed() || !std::io::stderr().is_terminal() {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    if text_suppressed() {
        pb.finish_and_clear();
        return;
    }
    pb.finish_with_message(format!("{} {}", "✓".green(), message));
}

/// Clear a spinner after a failure; the error itself is reported separately.
pub fn spinner_fail(pb: &indicatif::ProgressBar) {
    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_formatting() {
        assert_eq!(points(65.5), "65.5");
        assert_eq!(points(3.0), "3.0");
        assert_eq!(points(2.26), "2.3");
    }

    #[test]
    fn test_gain_without_color() {
        owo_colors::set_override(false);
        assert_eq!(gain(13.0), "+13.0");
        assert_eq!(gain(-0.5), "-0.5");
        assert_eq!(gain(0.0), "+0.0");
    }
}
