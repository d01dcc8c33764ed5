// src/data.rs
//
// Shapes that flow through the pipeline:
//
//   ScoredRow   one parsed sheet row
//   MatchGroup  all rows of one match, keyed by team number
//   TeamAggregate  one team across every match it played

use std::collections::HashMap;

use crate::config::consts::UNKNOWN_NAME;

/// Per-match statistics recorded by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    AutoPark,
    AutoSamples,
    AutoSpecimens,
    TeleopSamples,
    TeleopSpecimens,
    AscentLevel,
}

pub const STAT_COUNT: usize = 6;

/// One value per `Stat`, indexed by `Stat::index`.
pub type StatValues = [u32; STAT_COUNT];

impl Stat {
    pub const ALL: [Stat; STAT_COUNT] = [
        Stat::AutoPark,
        Stat::AutoSamples,
        Stat::AutoSpecimens,
        Stat::TeleopSamples,
        Stat::TeleopSpecimens,
        Stat::AscentLevel,
    ];

    /// Statistics that get a "best team" highlight, in tagging order.
    pub const LEADERS: [Stat; 4] = [
        Stat::AutoSamples,
        Stat::AutoSpecimens,
        Stat::TeleopSamples,
        Stat::TeleopSpecimens,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position in `LEADERS`, if this stat has a leader.
    pub fn leader_index(self) -> Option<usize> {
        Self::LEADERS.iter().position(|&s| s == self)
    }

    /// Table column header.
    pub fn label(self) -> &'static str {
        match self {
            Stat::AutoPark => "Avg Auto Park",
            Stat::AutoSamples => "Avg Auto Samples",
            Stat::AutoSpecimens => "Avg Auto Specimens",
            Stat::TeleopSamples => "Avg Teleop Samples",
            Stat::TeleopSpecimens => "Avg Teleop Specimens",
            Stat::AscentLevel => "Avg Ascent Level",
        }
    }

    /// Stable machine name (JSON keys).
    pub fn key(self) -> &'static str {
        match self {
            Stat::AutoPark => "auto_park",
            Stat::AutoSamples => "auto_samples",
            Stat::AutoSpecimens => "auto_specimens",
            Stat::TeleopSamples => "teleop_samples",
            Stat::TeleopSpecimens => "teleop_specimens",
            Stat::AscentLevel => "ascent_level",
        }
    }

    /// Legend text for leader highlights.
    pub fn leader_label(self) -> &'static str {
        match self {
            Stat::AutoSamples => "Best Auto Samples",
            Stat::AutoSpecimens => "Best Auto Specimens",
            Stat::TeleopSamples => "Best Teleop Samples",
            Stat::TeleopSpecimens => "Best Teleop Specimens",
            Stat::AutoPark | Stat::AscentLevel => "",
        }
    }
}

/// A sheet row after field scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredRow {
    pub line: u64,
    pub match_id: String,
    pub team: u32,
    pub values: StatValues,
}

/// Every row recorded for one match.
/// Values are keyed by team number; `teams` only remembers first-seen order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchGroup {
    pub match_id: String,
    teams: Vec<u32>,
    entries: HashMap<u32, Vec<StatValues>>,
}

impl MatchGroup {
    pub fn new(match_id: impl Into<String>) -> Self {
        Self { match_id: match_id.into(), teams: Vec::new(), entries: HashMap::new() }
    }

    pub fn push(&mut self, team: u32, values: StatValues) {
        let rows = self.entries.entry(team).or_default();
        if rows.is_empty() {
            self.teams.push(team);
        }
        rows.push(values);
    }

    /// Teams in the order their first row appeared.
    pub fn teams(&self) -> &[u32] {
        &self.teams
    }

    /// All rows for `team` in this match, in sheet order.
    pub fn entries(&self, team: u32) -> &[StatValues] {
        self.entries.get(&team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Result of the grouping pass: matches in first-seen order
/// plus the names resolved along the way.
#[derive(Clone, Debug, Default)]
pub struct Grouping {
    pub matches: Vec<MatchGroup>,
    pub names: HashMap<u32, String>,
}

impl Grouping {
    pub fn name_of(&self, team: u32) -> &str {
        self.names.get(&team).map(String::as_str).unwrap_or(UNKNOWN_NAME)
    }
}

/// One team across all matches it played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamAggregate {
    pub team: u32,
    pub name: String,
    pub matches: Vec<String>,
    series: [Vec<u32>; STAT_COUNT],
}

impl TeamAggregate {
    pub fn new(team: u32, name: impl Into<String>) -> Self {
        Self { team, name: name.into(), matches: Vec::new(), series: Default::default() }
    }

    pub fn push(&mut self, match_id: &str, values: &StatValues) {
        self.matches.push(s!(match_id));
        for (series, &v) in self.series.iter_mut().zip(values) {
            series.push(v);
        }
    }

    pub fn series(&self, stat: Stat) -> &[u32] {
        &self.series[stat.index()]
    }

    pub fn participation(&self) -> usize {
        self.matches.len()
    }
}
