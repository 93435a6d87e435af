//! Progress reporting for creation runs.

/// Receives progress from the builder.
///
/// `start` is called once with the expected unit count, then `advance` with
/// the number of units each pass completed.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressSink {
    fn start(&mut self, total: u64);
    fn advance(&mut self, completed: u64);
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _total: u64) {}
    fn advance(&mut self, _completed: u64) {}
}

/// Records every call, for callers that want the numbers afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingProgress {
    pub total: Option<u64>,
    pub increments: Vec<u64>,
}

impl RecordingProgress {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Units completed so far.
    pub fn completed(&self) -> u64 {
        self.increments.iter().sum()
    }
}

impl ProgressSink for RecordingProgress {
    fn start(&mut self, total: u64) {
        self.total = Some(total);
        self.increments.clear();
    }

    fn advance(&mut self, completed: u64) {
        self.increments.push(completed);
    }
}
