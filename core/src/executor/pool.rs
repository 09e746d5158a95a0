use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use super::progress::CompletionMonitor;
use super::types::{BoxTask, Outcome};

type TaskQueue = Arc<Mutex<mpsc::UnboundedReceiver<BoxTask>>>;

/// Fixed-size pool draining an unbounded queue of tasks.
///
/// `submit` never blocks: tasks wait in the queue until one of the
/// `workers` execution units picks them up. `wait` closes the queue and
/// returns exactly one [`Outcome`] per submitted task, in completion order.
///
/// A pool is single-use. It must be created inside a tokio runtime.
pub struct WorkerPool {
    sender: mpsc::UnboundedSender<BoxTask>,
    workers: Vec<JoinHandle<Vec<Outcome>>>,
    submitted: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self::with_monitor(workers, CompletionMonitor::hidden())
    }

    pub fn with_monitor(workers: usize, monitor: CompletionMonitor) -> Self {
        let workers = workers.max(1);
        let (sender, receiver) = mpsc::unbounded_channel::<BoxTask>();
        let queue: TaskQueue = Arc::new(Mutex::new(receiver));

        let handles = (0..workers)
            .map(|worker_id| tokio::spawn(worker_loop(worker_id, queue.clone(), monitor.clone())))
            .collect();

        Self {
            sender,
            workers: handles,
            submitted: 0,
        }
    }

    /// Enqueue a task for execution.
    pub fn submit<F, Fut>(&mut self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.submit_boxed(Box::new(task));
    }

    pub fn submit_boxed(&mut self, task: BoxTask) {
        self.submitted += 1;
        // Workers only exit once the sender is dropped in `wait`, so the
        // receiver is alive here.
        if let Err(mpsc::error::SendError(task)) = self.sender.send(task) {
            tracing::error!("worker queue closed before wait, running task inline");
            let handle = tokio::spawn(async move { vec![run_task(task).await] });
            self.workers.push(handle);
        }
    }

    pub fn submitted(&self) -> usize {
        self.submitted
    }

    pub fn concurrency(&self) -> usize {
        self.workers.len()
    }

    /// Block until every submitted task has completed and collect the outcomes.
    pub async fn wait(self) -> Vec<Outcome> {
        let Self {
            sender,
            workers,
            submitted,
        } = self;
        drop(sender);

        let mut outcomes = Vec::with_capacity(submitted);
        for handle in workers {
            match handle.await {
                Ok(worker_outcomes) => outcomes.extend(worker_outcomes),
                Err(e) => tracing::error!("worker terminated abnormally: {}", e),
            }
        }

        let lost = pad_lost_outcomes(&mut outcomes, submitted);
        if lost > 0 {
            tracing::error!("{} task outcome(s) lost with their worker, recording as failed", lost);
        }

        outcomes
    }
}

/// Fill up to `submitted` with [`Outcome::lost`] placeholders.
fn pad_lost_outcomes(outcomes: &mut Vec<Outcome>, submitted: usize) -> usize {
    let lost = submitted.saturating_sub(outcomes.len());
    outcomes.extend(std::iter::repeat(Outcome::lost()).take(lost));
    lost
}

async fn worker_loop(
    worker_id: usize,
    queue: TaskQueue,
    monitor: CompletionMonitor,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();

    loop {
        let next = {
            let mut receiver = queue.lock().await;
            receiver.recv().await
        };
        let Some(task) = next else {
            break;
        };

        let outcome = run_task(task).await;
        monitor.record(outcome.success);
        outcomes.push(outcome);
    }

    tracing::trace!(worker_id, completed = outcomes.len(), "worker drained");
    outcomes
}

/// Execute one task, converting errors and panics into a failed outcome.
pub(crate) async fn run_task(task: BoxTask) -> Outcome {
    let start = Instant::now();
    let result = AssertUnwindSafe(task.execute()).catch_unwind().await;
    let elapsed = start.elapsed();

    match result {
        Ok(Ok(())) => Outcome::succeeded(elapsed),
        Ok(Err(e)) => {
            tracing::warn!("task failed after {:.3}s: {:#}", elapsed.as_secs_f64(), e);
            Outcome::failed(elapsed)
        }
        Err(panic) => {
            tracing::warn!(
                "task panicked after {:.3}s: {}",
                elapsed.as_secs_f64(),
                panic_message(panic.as_ref())
            );
            Outcome::failed(elapsed)
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
