// tests/table.rs
use scout_viewer::config::options::ColumnLayout;
use scout_viewer::data::Stat;
use scout_viewer::runner::summarize;
use scout_viewer::table::{headers, summary_json, TableData};

const SHEET: &str = "\
Timestamp,Email,Name,Event,Alliance,Match,Team,Auto Park,Auto Samples,Auto Specimens,Teleop Samples,Teleop Specimens,Ascent
t,e,n,ev,Red,1,100,Yes,4,0,10,0,Ascent 3
t,e,n,ev,Blue,1,200,No,1,3,2,5,Park
t,e,n,ev,Red,2,100,No,5,0,7,0,Ascent 2
";

fn table(decimals: Option<usize>) -> TableData {
    let names = |team: u32| if team == 100 { String::from("Gears, Inc") } else { format!("Team {team}") };
    let summary = summarize(SHEET.as_bytes(), &ColumnLayout::default(), &names, None).unwrap();
    TableData::from_summary(&summary, decimals)
}

#[test]
fn header_row() {
    let h = headers();
    assert_eq!(h.len(), 9);
    assert_eq!(h[0], "Team Number");
    assert_eq!(h[2], "Match Numbers");
    assert_eq!(h[8], "Avg Ascent Level");
}

#[test]
fn cells_and_highlights() {
    let t = table(Some(2));
    assert_eq!(t.nrows(), 2);
    assert_eq!(t.ncols(), 9);

    let a = &t.rows[0];
    assert_eq!(a.cells[0], "100");
    assert_eq!(a.cells[2], "1, 2");
    assert_eq!(a.cells[3], "0.50");
    assert_eq!(a.cells[4], "4.50");
    assert_eq!(a.cells[8], "2.50");
    assert_eq!(a.highlight, Some(Stat::TeleopSamples));

    let b = &t.rows[1];
    assert_eq!(b.cells[2], "1");
    assert_eq!(b.highlight, Some(Stat::TeleopSpecimens));
}

#[test]
fn empty_table_keeps_headers() {
    let t = TableData::empty();
    assert!(t.is_empty());
    assert_eq!(t.ncols(), 9);
}

#[test]
fn csv_quotes_names_with_commas() {
    let mut buf = Vec::new();
    table(None).write_delimited(&mut buf, b',', true).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Team Number,Team Name,Match Numbers,"));
    assert_eq!(lines.next().unwrap(), "100,\"Gears, Inc\",\"1, 2\",0.5,4.5,0,8.5,0,2.5");
}

#[test]
fn text_marks_leaders() {
    let mut buf = Vec::new();
    table(Some(1)).write_text(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Team Number"));
    assert!(lines[1].ends_with("* Best Teleop Samples"));
    assert!(lines[2].ends_with("* Best Teleop Specimens"));
}

#[test]
fn json_report() {
    let names = |_team: u32| String::from("x");
    let summary = summarize(SHEET.as_bytes(), &ColumnLayout::default(), &names, None).unwrap();
    let v = summary_json(&summary);
    assert_eq!(v["teams"][0]["team"], 100);
    assert_eq!(v["teams"][0]["auto_samples"], 4.5);
    assert_eq!(v["teams"][0]["leads"][0], "auto_samples");
    assert_eq!(v["leaders"]["auto_specimens"]["team"], 200);
    assert_eq!(v["leaders"]["teleop_specimens"]["mean"], 5.0);
}
