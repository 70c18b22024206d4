//! Query progress spinner

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the store queries are in flight.
///
/// Disabled in quiet mode; `finish` clears the line so the result output
/// starts clean.
pub struct QueryProgress {
    bar: Option<ProgressBar>,
}

impl QueryProgress {
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// A no-op progress handle for quiet mode.
    pub fn disabled() -> Self {
        Self { bar: None }
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
