// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    rows: usize,
    done: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, rows: 0, done: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, rows: usize) {
        self.rows = rows;
        self.set_status(format!("Reading {} row(s)", rows));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, team: u32) {
        self.done += 1;
        self.set_status(format!("Looked up team {} ({} so far)", team, self.done));
    }
    fn finish(&mut self) {
        self.set_status(format!("Processed {} row(s), {} team name(s)", self.rows, self.done));
    }
}
