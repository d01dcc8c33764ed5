// src/engine/aggregate.rs
use std::collections::HashMap;

use crate::data::{Grouping, TeamAggregate};

/// Regroup per-match data by team.
///
/// Teams come out in first-seen order (match order, then order within the
/// match). Each match contributes exactly one value per stat to a team: if
/// the sheet has several rows for the same team in one match, the first row
/// counts and the rest are ignored.
pub fn aggregate(grouping: &Grouping) -> Vec<TeamAggregate> {
    let mut order: HashMap<u32, usize> = HashMap::new();
    let mut teams: Vec<TeamAggregate> = Vec::new();

    for m in &grouping.matches {
        for &team in m.teams() {
            // Duplicates were logged with their line numbers while grouping
            let Some(first) = m.entries(team).first() else { continue };

            let ix = *order.entry(team).or_insert_with(|| {
                teams.push(TeamAggregate::new(team, grouping.name_of(team)));
                teams.len() - 1
            });
            teams[ix].push(&m.match_id, first);
        }
    }

    teams
}
