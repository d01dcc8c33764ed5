// src/engine/summary.rs
use crate::data::{Stat, TeamAggregate, STAT_COUNT};

/// Arithmetic mean; an empty series averages to 0.
pub fn mean(series: &[u32]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let sum: u64 = series.iter().map(|&v| u64::from(v)).sum();
    sum as f64 / series.len() as f64
}

/// One table row's worth of numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamSummary {
    pub team: u32,
    pub name: String,
    pub matches: Vec<String>,
    means: [f64; STAT_COUNT],
}

impl TeamSummary {
    pub fn from_aggregate(agg: &TeamAggregate) -> Self {
        let means = Stat::ALL.map(|s| mean(agg.series(s)));
        Self { team: agg.team, name: agg.name.clone(), matches: agg.matches.clone(), means }
    }

    pub fn mean(&self, stat: Stat) -> f64 {
        self.means[stat.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leader {
    pub team: u32,
    pub mean: f64,
}

/// Highest mean for `stat` over `teams`, scanned in order.
/// Strict `>`: on a tie the earlier team keeps the title.
pub fn best_by<'a, I>(teams: I, stat: Stat) -> Option<Leader>
where
    I: IntoIterator<Item = &'a TeamSummary>,
{
    let mut best: Option<Leader> = None;
    for t in teams {
        let v = t.mean(stat);
        if best.is_none_or(|b| v > b.mean) {
            best = Some(Leader { team: t.team, mean: v });
        }
    }
    best
}

/// Per-team averages plus the leader of each `Stat::LEADERS` entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub teams: Vec<TeamSummary>,
    leaders: [Option<Leader>; 4],
}

impl Summary {
    pub fn compute(aggregates: &[TeamAggregate]) -> Self {
        let teams: Vec<TeamSummary> = aggregates.iter().map(TeamSummary::from_aggregate).collect();
        let leaders = Stat::LEADERS.map(|s| best_by(&teams, s));
        Self { teams, leaders }
    }

    /// Leader for a highlighted stat; `None` for the others or an empty sheet.
    pub fn best(&self, stat: Stat) -> Option<Leader> {
        stat.leader_index().and_then(|i| self.leaders[i])
    }

    /// Every stat `team` leads, in `Stat::LEADERS` order.
    pub fn leaders_of(&self, team: u32) -> Vec<Stat> {
        Stat::LEADERS
            .into_iter()
            .filter(|&s| self.best(s).is_some_and(|l| l.team == team))
            .collect()
    }

    /// The one highlight a row gets. A team leading several stats shows
    /// the last of them (tags are applied in `LEADERS` order, last wins).
    pub fn highlight_for(&self, team: u32) -> Option<Stat> {
        self.leaders_of(team).pop()
    }

    pub fn team(&self, team: u32) -> Option<&TeamSummary> {
        self.teams.iter().find(|t| t.team == team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
