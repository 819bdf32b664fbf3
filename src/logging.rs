// src/logging.rs
//
// File sink for the `log` facade. Every record lands in .store/debug.log as
// `[hh:mm:ss.mmm][LEVEL] message`; warnings and errors are echoed to stderr.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: FileLogger = FileLogger;

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct FileLogger;

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if record.level() <= log::Level::Warn {
            eprint!("{line}");
        }

        if let Ok(_guard) = LOG_LOCK.lock() {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(Path::new(STORE_DIR).join(LOG_FILE))
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Resolve the level: explicit value first, then `DOUBAN_TOP_LOG`, then `info`.
pub fn resolve_level(explicit: Option<&str>) -> LevelFilter {
    explicit
        .map(|v| s!(v))
        .or_else(|| std::env::var(LOG_ENV).ok())
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(level: LevelFilter) {
    let _ = fs::create_dir_all(STORE_DIR);
    start();
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
