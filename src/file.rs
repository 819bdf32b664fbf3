// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::chart::{self, ChartStyle};
use crate::config::options::ExportOptions;
use crate::data::MovieRecord;
use crate::report::{Report, ReportJson};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ExportError + '_ {
    move |source| ExportError::Io { path: path.to_path_buf(), source }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(io_err(dir))?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Pretty JSON (2-space indent). serde_json leaves non-ASCII unescaped.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExportError> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(io_err(path))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n").map_err(io_err(path))?;
    out.flush().map_err(io_err(path))?;
    Ok(())
}

pub fn write_records(path: &Path, records: &[MovieRecord]) -> Result<(), ExportError> {
    write_json(path, records)
}

pub fn read_records(path: &Path) -> Result<Vec<MovieRecord>, ExportError> {
    let text = fs::read_to_string(path).map_err(io_err(path))?;
    Ok(serde_json::from_str(&text)?)
}

pub fn write_report(path: &Path, report: &Report) -> Result<(), ExportError> {
    write_json(path, &ReportJson::new(report))
}

pub fn write_chart(path: &Path, report: &Report, style: &ChartStyle) -> Result<(), ExportError> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(io_err(path))?;
    chart::write_svg(BufWriter::new(file), report, style).map_err(io_err(path))
}

/// Records JSON only; runs right after collection, before any analysis.
pub fn export_records(export: &ExportOptions, records: &[MovieRecord]) -> Result<PathBuf, ExportError> {
    let path = export.json_path();
    write_records(&path, records)?;
    info!("Export: {} record(s) → {}", records.len(), path.display());
    Ok(path)
}

/// Report JSON plus (optionally) the chart. Returns the paths written.
pub fn export_analysis(
    export: &ExportOptions,
    report: &Report,
    style: &ChartStyle,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(2);

    let report_path = export.report_path();
    write_report(&report_path, report)?;
    info!("Export: report → {}", report_path.display());
    written.push(report_path);

    if export.write_chart {
        let chart_path = export.chart_path();
        write_chart(&chart_path, report, style)?;
        info!("Export: chart → {}", chart_path.display());
        written.push(chart_path);
    }
    Ok(written)
}

/// Trailing separator, as typed by a user who means "a directory".
pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hints() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(!looks_like_dir_hint(Path::new("out/movies.json")));
    }

    #[test]
    fn file_in_place_of_directory_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("out");
        fs::write(&blocker, "x").unwrap();
        let err = ensure_directory(&blocker).unwrap_err();
        assert!(matches!(err, ExportError::NotADirectory(_)));
    }
}
