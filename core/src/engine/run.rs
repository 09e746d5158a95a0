use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::error::EngineError;
use crate::executor::{
    BatchSummary, CompletionMonitor, ExecutionOpts, SubmissionProgress, WorkerPool,
};
use crate::report::{deliver, render_report, Delivery, ReportFormat};
use crate::state::{RunPhase, StateTransition};
use crate::stats::{CategoryResults, StatRow};

/// Drives a run through its phases and owns every outcome it produces.
pub struct BenchRun {
    opts: ExecutionOpts,
    phase: RunPhase,
    results: CategoryResults,
    summaries: Vec<BatchSummary>,
}

impl BenchRun {
    pub fn new(opts: ExecutionOpts) -> Self {
        Self {
            opts,
            phase: RunPhase::Idle,
            results: CategoryResults::new(),
            summaries: Vec::new(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn opts(&self) -> &ExecutionOpts {
        &self.opts
    }

    pub fn results(&self) -> &CategoryResults {
        &self.results
    }

    pub fn summaries(&self) -> &[BatchSummary] {
        &self.summaries
    }

    fn transition(&mut self, to: RunPhase) -> Result<(), EngineError> {
        StateTransition::validate(self.phase, to)?;
        tracing::debug!(from = %self.phase, to = %to, "run phase change");
        self.phase = to;
        Ok(())
    }

    /// Open a batch of `total` tasks recorded under `category`.
    ///
    /// `verb` and `noun` only shape the log lines, e.g. "Created" and "domains".
    pub fn batch(
        &mut self,
        category: &str,
        verb: &str,
        noun: &str,
        total: usize,
    ) -> Result<Batch<'_>, EngineError> {
        self.transition(RunPhase::Submitting)?;

        let monitor = CompletionMonitor::new(total, category, self.opts.progress_bar);
        let pool = WorkerPool::with_monitor(self.opts.workers, monitor.clone());
        tracing::info!(
            "Starting {} batch: {} {} on {} workers",
            category,
            total,
            noun,
            pool.concurrency()
        );

        Ok(Batch {
            category: category.to_string(),
            verb: verb.to_string(),
            noun: noun.to_string(),
            progress: SubmissionProgress::new(verb, noun, total),
            pool,
            monitor,
            started: Instant::now(),
            run: self,
        })
    }

    /// Reduce every recorded category to report rows, in first-run order.
    pub fn rows(&mut self) -> Result<Vec<StatRow>, EngineError> {
        self.transition(RunPhase::Aggregating)?;
        Ok(self.results.rows())
    }

    /// Render `rows` and deliver them to `stdout` plus the optional file.
    pub fn render<W: Write>(
        &mut self,
        rows: &[StatRow],
        format: ReportFormat,
        destination: Option<&Path>,
        stdout: &mut W,
    ) -> Result<Delivery, EngineError> {
        let rendered = render_report(rows, format)?;
        let delivery = deliver(&rendered, stdout, destination)?;
        self.transition(RunPhase::Rendered)?;
        Ok(delivery)
    }
}

/// One category's submit/drain cycle. Holds the run mutably until finished.
pub struct Batch<'a> {
    run: &'a mut BenchRun,
    category: String,
    verb: String,
    noun: String,
    pool: WorkerPool,
    progress: SubmissionProgress,
    monitor: CompletionMonitor,
    started: Instant,
}

impl Batch<'_> {
    pub fn submit<F, Fut>(&mut self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.progress.record_submission();
        self.pool.submit(task);
    }

    pub fn submitted(&self) -> usize {
        self.pool.submitted()
    }

    /// Wait for every submitted task and record the outcomes on the run.
    pub async fn finish(self) -> Result<BatchSummary, EngineError> {
        let Self {
            run,
            category,
            verb,
            noun,
            pool,
            progress: _,
            monitor,
            started,
        } = self;

        run.transition(RunPhase::Draining)?;
        let outcomes = pool.wait().await;
        monitor.finish();

        let elapsed = started.elapsed().as_secs_f64();
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        let summary = BatchSummary {
            category: category.clone(),
            submitted: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            lost: outcomes.iter().filter(|o| o.lost).count(),
            elapsed_secs: elapsed,
        };

        tracing::info!("{} {} {} in {:.2} seconds", verb, outcomes.len(), noun, elapsed);
        if summary.failed > 0 {
            tracing::warn!("{} of {} {} failed", summary.failed, summary.submitted, noun);
        }
        if summary.lost > 0 {
            tracing::warn!(
                "{} {} outcomes lost with their worker, {} rows include them at zero duration",
                summary.lost,
                noun,
                category
            );
        }

        run.results.record(&category, outcomes);
        run.summaries.push(summary.clone());
        Ok(summary)
    }
}
