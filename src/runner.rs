// src/runner.rs
//
// One refresh = read file → fingerprint → (skip if unchanged) →
// rows → matches → teams → summary.

use std::fs;
use std::io::Read;

use crate::{
    config::options::{AppOptions, ColumnLayout},
    core::{net, Fingerprint, NameResolver},
    csv::read_rows,
    engine::{aggregate, group_rows, Summary},
    error::{Result, ScoutError},
    progress::Progress,
};

#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    /// File bytes identical to the last successful refresh; nothing recomputed.
    UpToDate,
    Updated(Summary),
}

/// Owns the "last seen" fingerprint and the name lookup for a viewer.
pub struct Session {
    options: AppOptions,
    names: Box<dyn NameResolver>,
    last: Option<Fingerprint>,
}

impl Session {
    pub fn new(options: AppOptions, names: Box<dyn NameResolver>) -> Self {
        Self { options, names, last: None }
    }

    /// Session with the resolver `options.names` asks for.
    pub fn from_options(options: AppOptions) -> Self {
        let names = net::resolver_for(&options.names);
        Self::new(options, names)
    }

    pub fn options(&self) -> &AppOptions {
        &self.options
    }

    pub fn last_fingerprint(&self) -> Option<&Fingerprint> {
        self.last.as_ref()
    }

    /// Forget the last fingerprint; the next refresh always recomputes.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Re-read the data file and recompute, unless its bytes are unchanged.
    /// The fingerprint is recorded only after the whole pipeline succeeded,
    /// so a failed refresh is retried next time.
    pub fn refresh(&mut self, mut progress: Option<&mut dyn Progress>) -> Result<RefreshOutcome> {
        let path = &self.options.data_path;
        let bytes = fs::read(path).map_err(|source| ScoutError::Io { path: path.clone(), source })?;
        let fp = Fingerprint::of_bytes(&bytes);
        logd!("Refresh: sha256={}", fp.as_hex());

        if self.last.as_ref() == Some(&fp) {
            logf!("Refresh: {} unchanged ({}), skipping", path.display(), fp);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{} unchanged", path.display()));
            }
            return Ok(RefreshOutcome::UpToDate);
        }

        logf!("Refresh: {} changed ({}), recomputing", path.display(), fp);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Reading {} ({})", path.display(), fp));
        }
        let layout = &self.options.layout;
        let names = self.names.as_ref();
        let result = match progress {
            Some(p) => {
                let r = summarize(bytes.as_slice(), layout, names, Some(&mut *p));
                p.finish();
                r
            }
            None => summarize(bytes.as_slice(), layout, names, None),
        };

        let summary = result?;
        self.last = Some(fp);
        logf!("Refresh: OK teams={}", summary.len());
        Ok(RefreshOutcome::Updated(summary))
    }
}

/// The whole pipeline over any CSV source. No fingerprinting.
pub fn summarize<R: Read>(
    reader: R,
    layout: &ColumnLayout,
    names: &dyn NameResolver,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Summary> {
    let rows = read_rows(reader)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }
    let grouping = group_rows(&rows, layout, names, progress)?;
    let teams = aggregate(&grouping);
    Ok(Summary::compute(&teams))
}
