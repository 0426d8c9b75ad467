//! Spinner shown while a quiet install is running
//!
//! Without a terminal the spinner is hidden and only the final message is
//! printed.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for a single long-running step
pub struct InstallSpinner {
    pb: ProgressBar,
}

impl InstallSpinner {
    /// Start spinning with the given message
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("valid progress bar template")
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"]),
        );
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    /// Stop with a success message
    pub fn succeed(self, message: impl Into<String>) {
        let message = message.into();
        if self.pb.is_hidden() {
            println!("{message}");
        }
        self.pb.finish_with_message(message);
    }

    /// Stop with a failure message, leaving the line visible
    pub fn fail(self, message: impl Into<String>) {
        let message = message.into();
        if self.pb.is_hidden() {
            println!("{message}");
        }
        self.pb.abandon_with_message(message);
    }
}
