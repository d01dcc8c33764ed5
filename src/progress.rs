// src/progress.rs
/// Progress hooks for a refresh. The slow part is name lookup (one
/// request per new team), so `item_done` fires once per resolved team.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of data rows.
    fn begin(&mut self, _rows: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after a team's name has been resolved.
    fn item_done(&mut self, _team: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to the log (CLI).
#[derive(Default)]
pub struct LogProgress {
    resolved: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, rows: usize) {
        logd!("Refresh: {} data row(s)", rows);
    }
    fn log(&mut self, msg: &str) {
        logf!("{}", msg);
    }
    fn item_done(&mut self, team: u32) {
        self.resolved += 1;
        logd!("Names: resolved team {} ({} so far)", team, self.resolved);
    }
    fn finish(&mut self) {
        logd!("Refresh: {} name(s) resolved", self.resolved);
    }
}
