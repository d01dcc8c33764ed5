// benches/aggregate.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scout_viewer::{
    config::options::ColumnLayout,
    csv::read_rows,
    engine::{aggregate, group_rows, Summary},
    runner::summarize,
};

const ASCENT: [&str; 5] = ["Nothing", "Park", "Ascent 1", "Ascent 2", "Ascent 3"];
const COUNTS: [&str; 5] = ["0", "3", "5-7", "12-15", "Too much"];

/// A qualification day: 120 matches, 4 scouted teams each, 40 distinct teams.
fn synthetic_sheet() -> String {
    let mut s = String::from(
        "Timestamp,Email,Name,Event,Alliance,Match,Team,Auto Park,Auto Samples,Auto Specimens,Teleop Samples,Teleop Specimens,Ascent\n",
    );
    for m in 1..=120u32 {
        for slot in 0..4u32 {
            let team = 10_000 + (m * 7 + slot * 13) % 40;
            let k = (m + slot) as usize;
            s.push_str(&format!(
                "2024-01-01,scout@x,S,EV,{},{},{},{},{},{},{},{},{}\n",
                if slot < 2 { "Red" } else { "Blue" },
                m,
                team,
                if k % 2 == 0 { "Yes" } else { "No" },
                COUNTS[k % 5],
                COUNTS[(k + 1) % 5],
                COUNTS[(k + 2) % 5],
                COUNTS[(k + 3) % 5],
                ASCENT[k % 5],
            ));
        }
    }
    s
}

fn bench_aggregate(c: &mut Criterion) {
    let sheet = synthetic_sheet();
    let layout = ColumnLayout::default();
    let names = |team: u32| format!("Team {team}");

    c.bench_function("summarize_full", |b| {
        b.iter(|| {
            let summary = summarize(black_box(sheet.as_bytes()), &layout, &names, None).unwrap();
            black_box(summary.len())
        })
    });

    // Parsing excluded: group + aggregate + summary only
    let rows = read_rows(sheet.as_bytes()).unwrap();
    c.bench_function("group_aggregate_summary", |b| {
        b.iter(|| {
            let grouping = group_rows(black_box(&rows), &layout, &names, None).unwrap();
            let teams = aggregate(&grouping);
            black_box(Summary::compute(&teams).len())
        })
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
