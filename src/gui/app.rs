// src/gui/app.rs
use std::{
    error::Error,
    fs,
    sync::{ Arc, Mutex, mpsc::{ self, Receiver, TryRecvError }},
    thread,
};

use eframe::egui;
use log::{debug, error, info, warn};

use crate::{
    aggregate::Aggregate,
    chart::ChartStyle,
    config::{
        options::ReportOptions,
        state::{ AppState, Tab },
    },
    data::MovieRecord,
    file,
    report::Report,
    runner::{ self, RunError, RunSummary, Source },
    store,
};

use super::{
    components::{ charts, controls, records_table, tabs },
    progress::GuiProgress,
};

const CJK_FONT: &str = "cjk";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Douban Top 250",
        options,
        Box::new(|cc| {
            let state = AppState::default();
            install_font(&cc.egui_ctx, &state.options.report);
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

/// Put a CJK-capable face in front of egui's defaults, if one was configured.
fn install_font(ctx: &egui::Context, opts: &ReportOptions) {
    let Some(path) = opts.font_path.as_ref() else {
        debug!("Font: none configured, using built-ins");
        return;
    };
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!("Font: cannot read {}: {e}", path.display());
            return;
        }
    };
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(s!(CJK_FONT), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().insert(0, s!(CJK_FONT));
    }
    ctx.set_fonts(fonts);
    info!("Font: loaded {}", path.display());
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output dir text field (mapped onto ExportOptions on use)
    pub out_dir_text: String,

    // current data set and its analysis
    pub aggregate: Aggregate,
    pub report: Option<Report>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // pending background run
    job: Option<Receiver<Result<RunSummary, RunError>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        // Last collected set from disk
        let records = match store::load_records() {
            Ok(v) => {
                info!("Cache: loaded {} record(s)", v.len());
                if !v.is_empty() {
                    status = s!("Loaded local data");
                }
                v
            }
            Err(e) => {
                debug!("Cache: missing ({e})");
                Vec::new()
            }
        };

        let mut app = Self {
            state,
            out_dir_text,
            aggregate: Aggregate::build(Vec::new()),
            report: None,
            status: Arc::new(Mutex::new(status)),
            running: false,
            job: None,
        };
        app.set_records(records);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn records(&self) -> &[MovieRecord] {
        self.aggregate.records()
    }

    /// Replace the data set and rebuild the analysis.
    pub fn set_records(&mut self, records: Vec<MovieRecord>) {
        self.aggregate = Aggregate::build(records);
        self.report = if self.aggregate.is_empty() {
            None
        } else {
            Some(Report::from_aggregate(&self.aggregate, &self.state.options.report))
        };
    }

    fn sync_out_dir(&mut self) {
        let text = self.out_dir_text.clone();
        self.state.options.export.set_out_dir(&text);
    }

    /// Fetch on a worker thread; `poll_job` picks up the result.
    pub fn start_scrape(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        self.sync_out_dir();
        self.running = true;
        self.status("Fetching…");
        info!(
            "Scrape: begin pages={} workers={}",
            self.state.options.scrape.pages, self.state.options.scrape.workers
        );

        let opts = self.state.options.clone();
        let status = self.status.clone();
        let ctx = ctx.clone();
        let (tx, rx) = mpsc::channel();
        self.job = Some(rx);

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status, ctx.clone());
            let result = runner::run(&opts, Source::Remote, Some(&mut prog));
            let _ = tx.send(result); // receiver gone = window closed
            ctx.request_repaint();
        });
    }

    fn poll_job(&mut self) {
        let Some(rx) = self.job.as_ref() else { return };
        let result = match rx.try_recv() {
            Ok(r) => r,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                error!("Scrape: worker exited without a result");
                self.status("Error: scrape worker stopped");
                self.job = None;
                self.running = false;
                return;
            }
        };
        self.job = None;
        self.running = false;

        match result {
            Ok(summary) => {
                let n = summary.record_count();
                let failed = summary.scrape.pages_failed.len();
                info!("Scrape: OK records={n} failed_pages={failed}");
                if n == 0 {
                    self.status("No movies collected; check the network connection");
                    return;
                }
                self.report = summary.report;
                self.aggregate = summary.aggregate;
                self.status(if failed == 0 {
                    format!("Ready: {n} movie(s), {} file(s) written", summary.files_written.len())
                } else {
                    format!("Ready: {n} movie(s), {failed} page(s) failed")
                });
            }
            Err(e) => {
                error!("Scrape: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Write the in-memory set and its analysis to the output dir.
    pub fn export(&mut self) {
        self.sync_out_dir();
        let export = &self.state.options.export;

        let outcome = file::export_records(export, self.aggregate.records()).and_then(|json| {
            let mut written = vec![json];
            if let Some(report) = self.report.as_ref() {
                written.extend(file::export_analysis(export, report, &ChartStyle::default())?);
            }
            Ok(written)
        });

        match outcome {
            Ok(paths) => {
                let dir = export.out_dir().display();
                self.status(format!("Exported {} file(s) to {dir}", paths.len()));
            }
            Err(e) => {
                error!("Export: {e}");
                self.status(format!("Export failed: {e}"));
            }
        }
    }

    pub fn reload_cache(&mut self) {
        match store::load_records() {
            Ok(v) => {
                let n = v.len();
                self.set_records(v);
                self.status(format!("Loaded {n} movie(s) from cache"));
            }
            Err(e) => {
                warn!("Cache: reload failed: {e}");
                self.status(format!("No cache: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            controls::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.tab {
                Tab::Movies => records_table::draw(ui, self),
                Tab::Charts => charts::draw(ui, self),
            }
        });
    }
}
