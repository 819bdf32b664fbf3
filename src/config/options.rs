// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::extract::EmptyGenre;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub report: ReportOptions,
    pub extract: ExtractOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub pages: u32,
    pub page_size: u32,
    pub workers: usize,
    pub pause_ms: u64,
    pub jitter_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            pages: DEFAULT_PAGES,
            page_size: PAGE_SIZE,
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
            jitter_ms: JITTER_MS,
        }
    }
}

impl ScrapeOptions {
    /// `(page, url)` for every listing page, 1-based.
    pub fn page_urls(&self) -> Vec<(u32, String)> {
        (1..=self.pages)
            .map(|page| {
                let start = (page - 1).saturating_mul(self.page_size);
                (page, format!("{}?start={}", self.base_url, start))
            })
            .collect()
    }

    /// Nominal size of the ranking slice being fetched.
    pub fn expected_items(&self) -> u32 {
        self.pages.saturating_mul(self.page_size)
    }

    /// Deterministic per-page pause so workers don't hit the site in lockstep.
    pub fn pause_for(&self, page: u32) -> u64 {
        if self.jitter_ms == 0 {
            return self.pause_ms;
        }
        self.pause_ms + (page as u64 * 719) % self.jitter_ms
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    pub json_file: String,
    pub report_file: String,
    pub chart_file: String,
    pub write_chart: bool,
    /// Also keep a copy of the records in the local store.
    pub save_cache: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            json_file: s!(DEFAULT_JSON_FILE),
            report_file: s!(DEFAULT_REPORT_FILE),
            chart_file: s!(DEFAULT_CHART_FILE),
            write_chart: true,
            save_cache: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Accepts GUI/CLI text; trailing separators are fine.
    pub fn set_out_dir(&mut self, text: &str) {
        let t = text.trim();
        self.out_dir = if t.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(t)
        };
    }

    pub fn json_path(&self) -> PathBuf { self.resolve(&self.json_file) }
    pub fn report_path(&self) -> PathBuf { self.resolve(&self.report_file) }
    pub fn chart_path(&self) -> PathBuf { self.resolve(&self.chart_file) }

    // Absolute file names bypass the output dir.
    fn resolve(&self, file: &str) -> PathBuf {
        let p = Path::new(file);
        if p.is_absolute() || p.parent().is_some_and(|d| !d.as_os_str().is_empty()) {
            p.to_path_buf()
        } else {
            self.out_dir.join(p)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub top_actors: usize,
    pub top_directors: usize,
    pub top_countries: usize,
    pub top_genres: usize,
    /// CJK-capable font for on-screen charts. `None` keeps egui's built-ins.
    pub font_path: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_actors: TOP_ACTORS,
            top_directors: TOP_DIRECTORS,
            top_countries: TOP_COUNTRIES,
            top_genres: TOP_GENRES,
            font_path: std::env::var_os(FONT_ENV).map(PathBuf::from),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    pub empty_genre: EmptyGenre,
}
