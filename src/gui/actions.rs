// src/gui/actions.rs
//
// Operational side of the action bar. Layout stays in components/.

use crate::{
    config::consts::UP_TO_DATE_MSG,
    gui::{app::App, progress::GuiProgress},
    runner::RefreshOutcome,
    table::TableData,
};

/// Re-read the sheet and rebuild the table. Runs on the UI thread.
pub fn refresh(app: &mut App) {
    logf!("Refresh: Begin file={}", app.state.options.data_path.display());

    let mut prog = GuiProgress::new(app.status.clone());
    match app.session.refresh(Some(&mut prog)) {
        Ok(RefreshOutcome::UpToDate) => {
            app.notice = Some(s!(UP_TO_DATE_MSG));
            app.status(UP_TO_DATE_MSG);
        }
        Ok(RefreshOutcome::Updated(summary)) => {
            app.table = TableData::from_summary(&summary, Some(app.state.gui.decimals));
            logf!("Refresh: OK rows={}", app.table.nrows());
            app.status(format!("Loaded {} team(s)", app.table.nrows()));
        }
        Err(e) => {
            loge!("Refresh: Error: {}", e);
            app.table = TableData::empty();
            app.status(format!("Error: {e}"));
        }
    }
}
