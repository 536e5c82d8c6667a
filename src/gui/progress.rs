// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let mut s = self.status.lock().unwrap_or_else(|p| p.into_inner());
        *s = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        if self.total == 0 {
            self.set_status(msg);
        } else {
            self.set_status(format!("[{}/{}] {msg}", self.done, self.total));
        }
    }
    fn item_done(&mut self, glaze: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {glaze} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Scrape finished");
        } else {
            self.set_status(format!("Scrape finished ({}/{})", self.done, self.total));
        }
    }
}
