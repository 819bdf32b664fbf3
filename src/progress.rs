// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of listing pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One listing page fetched and parsed.
    fn item_done(&mut self, _page: u32, _items: usize) {}

    /// One listing page failed; the run goes on without it.
    fn item_failed(&mut self, _page: u32, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per event; used by the CLI.
pub struct PrintProgress;

impl Progress for PrintProgress {
    fn begin(&mut self, total: usize) {
        println!("开始爬取，共{total}页");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, page: u32, items: usize) {
        println!("第{page}页完成，{items}条");
    }
    fn item_failed(&mut self, page: u32, msg: &str) {
        println!("爬取第{page}页失败: {msg}");
    }
}
