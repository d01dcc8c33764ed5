// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub data_path: PathBuf,
    pub layout: ColumnLayout,
    pub names: NameSource,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            layout: ColumnLayout::default(),
            names: NameSource::default(),
        }
    }
}

/// Column index of every field we read from a scouting row.
/// Anything before `match_id` (timestamp, scout name, ...) is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub match_id: usize,
    pub team_id: usize,
    pub auto_park: usize,
    pub auto_samples: usize,
    pub auto_specimens: usize,
    pub teleop_samples: usize,
    pub teleop_specimens: usize,
    pub ascent: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::starting_at(FIRST_DATA_COLUMN)
    }
}

impl ColumnLayout {
    /// The form's fixed field order, shifted so that the match id sits at `first`.
    /// `first` is a `u16` so the offsets below always fit in `usize`.
    pub fn starting_at(first: u16) -> Self {
        let first = usize::from(first);
        Self {
            match_id: first,
            team_id: first + 1,
            auto_park: first + 2,
            auto_samples: first + 3,
            auto_specimens: first + 4,
            teleop_samples: first + 5,
            teleop_specimens: first + 6,
            ascent: first + 7,
        }
    }

    /// Shortest row that still holds every field.
    pub fn min_len(&self) -> usize {
        [
            self.match_id,
            self.team_id,
            self.auto_park,
            self.auto_samples,
            self.auto_specimens,
            self.teleop_samples,
            self.teleop_specimens,
            self.ascent,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameSource {
    /// GraphQL lookup, one blocking request per distinct team per refresh.
    Remote { endpoint: String, timeout: Duration },
    /// No network; every team shows the placeholder name.
    Offline,
}

impl Default for NameSource {
    fn default() -> Self {
        NameSource::Remote {
            endpoint: s!(NAME_ENDPOINT),
            timeout: Duration::from_secs(NAME_TIMEOUT_SECS),
        }
    }
}

/// CLI report formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn delim(&self) -> Option<u8> {
        match self {
            OutputFormat::Csv => Some(b','),
            OutputFormat::Tsv => Some(b'\t'),
            OutputFormat::Table | OutputFormat::Json => None,
        }
    }
}
