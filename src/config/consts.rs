// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://movie.douban.com/top250";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Listing
pub const PAGE_SIZE: u32 = 25;
pub const DEFAULT_PAGES: u32 = 2; // 2 pages × 25 = 50 movies
pub const MAX_PAGES: u32 = 10;    // the ranking ends at 250

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "movies.json";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_JSON_FILE: &str = "douban_movies.json";
pub const DEFAULT_REPORT_FILE: &str = "douban_report.json";
pub const DEFAULT_CHART_FILE: &str = "douban_analysis.svg";

// Report
pub const TOP_ACTORS: usize = 5;
pub const TOP_DIRECTORS: usize = 5;
pub const TOP_COUNTRIES: usize = 5;
pub const TOP_GENRES: usize = 8;

// Concurrency
pub const WORKERS: usize = 2;
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite
pub const JITTER_MS: u64 = 2_000;        // extra 0..2000 ms

// Environment
pub const LOG_ENV: &str = "DOUBAN_TOP_LOG";
pub const FONT_ENV: &str = "DOUBAN_TOP_FONT";
