//! Command handlers: validate, build the client, drive the run, print the summary.
use std::io::Write;
use std::path::PathBuf;

use csbench_core::api as core_api;
use csbench_core::api::{AppConfig, BatchSummary, BenchRun, CliError, Delivery, LoggingConfig};
use csbench_plugins::factory::build_client;
use csbench_plugins::provision::{provision, teardown, TeardownSummary};

use crate::commands::cli::{CreateArgs, TeardownArgs};

#[tracing::instrument(name = "cli.create", skip_all)]
pub async fn run_create(cfg: &AppConfig, args: &CreateArgs) -> Result<i32, CliError> {
    let plan = core_api::validate_create(cfg, &args.to_request())?;
    let client = build_client(cfg, &plan.profile)?;

    tracing::info!(
        "Provisioning {} under domain {} with {} workers",
        plan.resources
            .iter()
            .map(|k| k.category())
            .collect::<Vec<_>>()
            .join(","),
        plan.parent_domain_id,
        plan.opts.workers
    );

    let mut run = BenchRun::new(plan.opts.clone());
    for kind in &plan.resources {
        provision(*kind, &mut run, &client, &plan.parent_domain_id, &cfg.provision).await?;
    }

    tracing::info!("Generating report");
    let rows = run.rows()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let delivery = run.render(&rows, plan.format, plan.output.as_deref(), &mut out)?;

    let summary = render_summary(run.summaries(), &delivery, log_file_path(&cfg.logging));
    out.write_all(summary.as_bytes())?;
    out.flush()?;
    Ok(0)
}

#[tracing::instrument(name = "cli.teardown", skip_all)]
pub async fn run_teardown(cfg: &AppConfig, args: &TeardownArgs) -> Result<i32, CliError> {
    let plan = core_api::validate_teardown(cfg, &args.profile)?;
    let client = build_client(cfg, &plan.profile)?;

    let summary = teardown(client.as_ref(), &plan.parent_domain_id).await;
    println!("{}", render_teardown(&summary));
    Ok(0)
}

/// File the logging layer appends to, if file logging is on.
pub fn log_file_path(logging: &LoggingConfig) -> Option<PathBuf> {
    if !logging.enabled || !logging.file {
        return None;
    }
    let dir = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    Some(dir.join(&logging.file_name))
}

pub fn render_summary(
    summaries: &[BatchSummary],
    delivery: &Delivery,
    log_file: Option<PathBuf>,
) -> String {
    let tasks: usize = summaries.iter().map(|s| s.submitted).sum();
    let succeeded: usize = summaries.iter().map(|s| s.succeeded).sum();
    let failed: usize = summaries.iter().map(|s| s.failed).sum();
    let lost: usize = summaries.iter().map(|s| s.lost).sum();
    let elapsed: f64 = summaries.iter().map(|s| s.elapsed_secs).sum();

    let mut out = String::from("\n");
    if let Some(path) = log_file {
        out.push_str(&format!("Log file : {}\n", path.display()));
    }
    if let Delivery::Mirrored(path) = delivery {
        out.push_str(&format!("Report file : {}\n", path.display()));
    }
    out.push_str(&format!(
        "Categories : {}\n",
        summaries
            .iter()
            .map(|s| s.category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!("Tasks : {}\n", tasks));
    out.push_str(&format!("Successful : {}\n", succeeded));
    out.push_str(&format!("Failed : {}\n", failed));
    if lost > 0 {
        out.push_str(&format!(
            "Lost outcomes : {} (recorded as failed with zero duration)\n",
            lost
        ));
    }
    out.push_str(&format!("Time in seconds : {:.2}\n", elapsed));
    out
}

fn render_teardown(summary: &TeardownSummary) -> String {
    format!(
        "Deleted {} of {} domains ({} failed)",
        summary.deleted, summary.found, summary.failed
    )
}
