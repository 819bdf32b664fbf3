// src/runner.rs
//
// One end-to-end pass shared by CLI and GUI:
// fetch (or cache) → records JSON → aggregate → report JSON + chart.

use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use crate::{
    aggregate::Aggregate,
    chart::ChartStyle,
    config::options::AppOptions,
    core::net::{HttpClient, NetError, PageSource},
    data::MovieRecord,
    file::{self, ExportError},
    progress::Progress,
    report::Report,
    scrape::{self, ScrapeSummary},
    store,
};

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Net(#[from] NetError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Where the records of this run came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Remote,
    Cache,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub scrape: ScrapeSummary,
    pub aggregate: Aggregate,
    /// `None` when no records were collected.
    pub report: Option<Report>,
    pub files_written: Vec<PathBuf>,
}

impl RunSummary {
    pub fn record_count(&self) -> usize {
        self.aggregate.records().len()
    }
}

/// Top-level runner. `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    source: Source,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    match source {
        Source::Remote => {
            let client = HttpClient::new()?;
            run_with(&client, opts, progress)
        }
        Source::Cache => {
            let records = store::load_records()?;
            info!("Cache: loaded {} record(s) from {}", records.len(), store::store_path().display());
            let scrape = ScrapeSummary {
                items_seen: records.len(),
                records,
                ..ScrapeSummary::default()
            };
            analyze(opts, scrape, Vec::new())
        }
    }
}

/// Same as `run` with an explicit page source (tests, alternate mirrors).
pub fn run_with(
    page_source: &dyn PageSource,
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let summary = scrape::run(page_source, &opts.scrape, &opts.extract, progress);

    if opts.export.save_cache && !summary.records.is_empty() {
        match store::save_records(&summary.records) {
            Ok(p) => info!("Cache: saved → {}", p.display()),
            Err(e) => warn!("Cache: save failed: {e}"),
        }
    }

    let records_path = file::export_records(&opts.export, &summary.records)?;
    analyze(opts, summary, vec![records_path])
}

fn analyze(
    opts: &AppOptions,
    mut scrape: ScrapeSummary,
    mut files_written: Vec<PathBuf>,
) -> Result<RunSummary, RunError> {
    let records: Vec<MovieRecord> = std::mem::take(&mut scrape.records);
    let aggregate = Aggregate::build(records);

    if aggregate.is_empty() {
        warn!("Run: no records collected, analysis skipped");
        return Ok(RunSummary { scrape, aggregate, report: None, files_written });
    }

    let report = Report::from_aggregate(&aggregate, &opts.report);
    files_written.extend(file::export_analysis(&opts.export, &report, &ChartStyle::default())?);

    Ok(RunSummary { scrape, aggregate, report: Some(report), files_written })
}
