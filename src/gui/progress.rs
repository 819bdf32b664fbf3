// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Writes scrape progress into the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Fetching {} page(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, page: u32, items: usize) {
        self.done += 1;
        self.set_status(format!("Fetched page {} ({} items, {}/{})", page, items, self.done, self.total));
    }
    fn item_failed(&mut self, page: u32, msg: &str) {
        self.failed += 1;
        self.set_status(format!("Page {} failed: {}", page, msg));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch complete")); // no counts if we never began
        } else if self.failed == 0 {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        } else {
            self.set_status(format!("Fetch complete ({}/{}, {} failed)", self.done, self.total, self.failed));
        }
    }
}
