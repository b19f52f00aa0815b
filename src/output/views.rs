//! Loading, failure and empty-state views shared by the commands

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight.
///
/// Hidden when stderr is not a terminal so piped output stays clean.
pub fn loading(message: &str) -> ProgressBar {
    let spinner = if console_attached() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn console_attached() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Successful listing with nothing in it
pub fn no_jobs() -> String {
    format!(
        "{}\nWe could not find any jobs. Try other filters.",
        "No Jobs Found".bold()
    )
}

/// Generic failure view for listing and profile requests
pub fn failure(detail: &str) -> String {
    format!(
        "{}\nWe cannot seem to find the page you are looking for.\n{}",
        "Oops! Something Went Wrong".bold().red(),
        detail.dimmed()
    )
}

/// Inline login error, rendered under the form
pub fn login_error(message: &str) -> String {
    format!("*{}", message).red().to_string()
}
