//! Terminal progress bar for creation runs.

use indicatif::{ProgressBar, ProgressStyle};

use savvy_core::ProgressSink;

/// Progress sink drawing an indicatif bar once the total is known.
pub struct BarProgress {
    label: String,
    bar: Option<ProgressBar>,
}

impl BarProgress {
    /// A bar labelled `label`, drawn once `start` is called.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bar: None,
        }
    }

    /// Clear the bar, if one was drawn.
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressSink for BarProgress {
    fn start(&mut self, total: u64) {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{msg} [{bar:36}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message(self.label.clone());
        self.bar = Some(bar);
    }

    fn advance(&mut self, completed: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(completed);
        }
    }
}
