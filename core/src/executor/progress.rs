use indicatif::{ProgressBar, ProgressStyle};

/// Periodic "Created X of N" log lines emitted while tasks are submitted.
///
/// Reports roughly every 10% of `total`, counted in submission order, so
/// the lines say nothing about completion. A total of zero never reports.
#[derive(Debug)]
pub struct SubmissionProgress {
    verb: String,
    noun: String,
    total: usize,
    interval: usize,
    submitted: usize,
}

impl SubmissionProgress {
    /// # Arguments
    ///
    /// * `verb` - past-tense action for the log line, e.g. "Created"
    /// * `noun` - plural resource name, e.g. "domains"
    /// * `total` - number of tasks that will be submitted
    pub fn new(verb: impl Into<String>, noun: impl Into<String>, total: usize) -> Self {
        Self {
            verb: verb.into(),
            noun: noun.into(),
            total,
            interval: report_interval(total),
            submitted: 0,
        }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    pub fn submitted(&self) -> usize {
        self.submitted
    }

    /// Count one submission. Returns the running count when a line was logged.
    pub fn record_submission(&mut self) -> Option<usize> {
        self.submitted += 1;
        if self.submitted % self.interval != 0 {
            return None;
        }

        tracing::info!(
            "{} {} of {} {}",
            self.verb,
            self.submitted,
            self.total,
            self.noun
        );
        Some(self.submitted)
    }
}

/// `max(1, ceil(total / 10))`
pub fn report_interval(total: usize) -> usize {
    total.div_ceil(10).max(1)
}

/// Visual completion bar ticked by pool workers.
///
/// Cheap to clone; all clones drive the same bar. Hidden bars are no-ops.
#[derive(Clone)]
pub struct CompletionMonitor {
    bar: ProgressBar,
}

impl CompletionMonitor {
    /// # Arguments
    ///
    /// * `total_tasks` - Total number of tasks expected to complete
    /// * `enabled` - Whether to draw the bar at all
    pub fn new(total_tasks: usize, label: &str, enabled: bool) -> Self {
        if !enabled {
            return Self::hidden();
        }

        let bar = ProgressBar::new(total_tasks as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        bar.set_style(style);
        bar.set_message(label.to_string());

        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn record(&self, success: bool) {
        if !success {
            self.bar.set_message("(with failures)");
        }
        self.bar.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
