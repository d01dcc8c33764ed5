// src/engine/group.rs
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::{
    config::options::ColumnLayout,
    core::{fields, net::NameResolver},
    csv::RawRow,
    data::{Grouping, MatchGroup, ScoredRow, Stat, StatValues, STAT_COUNT},
    error::{Result, ScoutError},
    progress::Progress,
};

/// Parse one raw row through the field scorers.
/// Fails only on a short row or a non-numeric team number.
pub fn score_row(row: &RawRow, layout: &ColumnLayout) -> Result<ScoredRow> {
    let needed = layout.min_len();
    if row.width() < needed {
        return Err(ScoutError::MalformedRow {
            line: row.line,
            reason: format!("expected at least {} columns, row has {}", needed, row.width()),
        });
    }

    let match_id = row.field(layout.match_id)?;
    let team_text = row.field(layout.team_id)?;
    let team = fields::parse_team_id(team_text).ok_or_else(|| ScoutError::MalformedRow {
        line: row.line,
        reason: format!("team number {:?} is not an integer", team_text),
    })?;

    let mut values: StatValues = [0; STAT_COUNT];
    values[Stat::AutoPark.index()] = fields::parse_auto_park(row.field(layout.auto_park)?);
    values[Stat::AutoSamples.index()] = fields::parse_count_field(row.field(layout.auto_samples)?);
    values[Stat::AutoSpecimens.index()] = fields::parse_count_field(row.field(layout.auto_specimens)?);
    values[Stat::TeleopSamples.index()] = fields::parse_count_field(row.field(layout.teleop_samples)?);
    values[Stat::TeleopSpecimens.index()] = fields::parse_count_field(row.field(layout.teleop_specimens)?);
    values[Stat::AscentLevel.index()] = fields::parse_ascent_level(row.field(layout.ascent)?);

    Ok(ScoredRow { line: row.line, match_id: s!(match_id), team, values })
}

/// Single pass over the sheet: score every row, bucket it by match id,
/// and resolve each distinct team's name the first time it shows up.
///
/// The first bad row aborts the whole pass; nothing partial is returned.
pub fn group_rows(
    rows: &[RawRow],
    layout: &ColumnLayout,
    names: &dyn NameResolver,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Grouping> {
    let mut grouping = Grouping::default();
    let mut match_ix: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let scored = score_row(row, layout)?;

        if let Entry::Vacant(slot) = grouping.names.entry(scored.team) {
            let name = names.resolve(scored.team);
            logd!("Names: team {} → {}", scored.team, name);
            slot.insert(name);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(scored.team);
            }
        }

        let ix = match match_ix.get(&scored.match_id) {
            Some(&ix) => ix,
            None => {
                grouping.matches.push(MatchGroup::new(scored.match_id.clone()));
                let ix = grouping.matches.len() - 1;
                match_ix.insert(scored.match_id.clone(), ix);
                ix
            }
        };
        let group = &mut grouping.matches[ix];
        if !group.entries(scored.team).is_empty() {
            logd!(
                "Group: line {}: team {} already scouted in match {:?}; only the first row counts",
                scored.line,
                scored.team,
                scored.match_id
            );
        }
        group.push(scored.team, scored.values);
    }

    logf!(
        "Group: rows={} matches={} teams={}",
        rows.len(),
        grouping.matches.len(),
        grouping.names.len()
    );
    Ok(grouping)
}
