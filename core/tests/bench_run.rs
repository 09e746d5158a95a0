use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use csbench_core::api::{BenchRun, ExecutionOpts, ReportFormat};
use csbench_core::state::RunPhase;

fn opts(workers: usize) -> ExecutionOpts {
    ExecutionOpts {
        workers,
        progress_bar: false,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_task_yields_one_outcome() {
    let mut run = BenchRun::new(opts(10));
    let mut batch = run.batch("domain", "Created", "domains", 47).unwrap();
    for i in 0..47 {
        batch.submit(move || async move {
            match i % 7 {
                3 => anyhow::bail!("rejected"),
                5 => panic!("task {} blew up", i),
                _ => Ok(()),
            }
        });
    }
    let summary = batch.finish().await.unwrap();

    // i % 7 == 3 matches 7 values in 0..47, i % 7 == 5 matches 6
    assert_eq!(summary.submitted, 47);
    assert_eq!(summary.failed, 13);
    assert_eq!(summary.succeeded, 34);
    assert_eq!(run.results().get("domain").unwrap().len(), 47);
}

#[tokio::test]
async fn all_failed_category_has_no_successful_row() {
    let mut run = BenchRun::new(opts(4));
    let mut batch = run.batch("vm", "Created", "VMs", 20).unwrap();
    for _ in 0..20 {
        batch.submit(|| async { Err::<(), _>(anyhow::anyhow!("quota exceeded")) });
    }
    batch.finish().await.unwrap();

    let labels: Vec<String> = run.rows().unwrap().into_iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["vm - All", "vm - Failed"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn single_worker_serializes_tasks() {
    let active = Arc::new(AtomicUsize::new(0));
    let overlapped = Arc::new(AtomicUsize::new(0));

    let mut run = BenchRun::new(opts(1));
    let started = Instant::now();
    let mut batch = run.batch("network", "Created", "networks", 5).unwrap();
    for _ in 0..5 {
        let active = active.clone();
        let overlapped = overlapped.clone();
        batch.submit(move || async move {
            if active.fetch_add(1, Ordering::SeqCst) > 0 {
                overlapped.fetch_add(1, Ordering::SeqCst);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            active.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        });
    }
    batch.finish().await.unwrap();

    assert_eq!(overlapped.load(Ordering::SeqCst), 0);
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn full_run_renders_every_category() {
    let mut run = BenchRun::new(opts(3));
    for (category, total) in [("domain", 4usize), ("limits", 2), ("network", 0)] {
        let mut batch = run.batch(category, "Created", category, total).unwrap();
        for _ in 0..total {
            batch.submit(|| async { Ok(()) });
        }
        batch.finish().await.unwrap();
    }

    let rows = run.rows().unwrap();
    let mut stdout = Vec::new();
    run.render(&rows, ReportFormat::Csv, None, &mut stdout)
        .unwrap();
    assert_eq!(run.phase(), RunPhase::Rendered);

    let out = String::from_utf8(stdout).unwrap();
    assert_eq!(out.lines().count(), 3);
    assert!(out.contains("domain - All,4,"));
    assert!(out.contains("limits - All,2,"));
    assert!(!out.contains("network"));
}
