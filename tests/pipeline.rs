// tests/pipeline.rs
//
// Offline end-to-end: canned page text through season scanning, career
// aggregation, profile scanning, merge and the store round trip.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

use cbb_scrape::career;
use cbb_scrape::merge;
use cbb_scrape::scrape::profile;
use cbb_scrape::scrape::seasons::{self, SeasonRecord};
use cbb_scrape::store;

fn season_row(name: &str, pts: u32, trb: u32, stl: u32, ast: u32, blk: u32, partial: bool) -> String {
    let class = if partial { "italic_text partial_table" } else { "full_table" };
    format!(
        r#"<tr class="{class}"><td class="left " data-stat="player" csk="{key}" ><a href="/players/x/{key}.html">{name}</a></td><td class="right " data-stat="pts" >{pts}</td><td class="right " data-stat="trb" >{trb}</td><td class="right " data-stat="stl" >{stl}</td><td class="right " data-stat="ast" >{ast}</td><td class="right " data-stat="blk" >{blk}</td></tr>"#,
        key = name.to_ascii_lowercase().replace(' ', "-"),
    )
}

fn profile_page() -> Vec<String> {
    vec![
        r#"<div class="p1"><span data-tip="Games"><strong>G</strong></span>"#.to_string(),
        "<p>104</p></div>".to_string(),
        r#"<div class="p1"><span data-tip="Points"><strong>PTS</strong></span>"#.to_string(),
        "<p>13.2</p></div>".to_string(),
        r#"<div class="p1"><span data-tip="Field Goal Percentage"><strong>FG%</strong></span>"#.to_string(),
        "<p>59.9</p></div>".to_string(),
    ]
}

#[test]
fn canned_pages_to_persisted_table() {
    let tracked: HashSet<String> =
        ["Alaa Abdelnaby", "Bryan Trader"].iter().map(|s| s.to_string()).collect();

    // Year 1: both players, plus an untracked one. Year 2: Trader got
    // traded, so his combined row is flanked by partial fragments.
    let year1 = vec![
        season_row("Alaa Abdelnaby", 135, 81, 12, 30, 6, false),
        season_row("Bryan Trader", 200, 100, 20, 50, 10, false),
        season_row("Nobody Tracked", 999, 999, 99, 99, 99, false),
    ];
    let year2 = vec![
        season_row("Bryan Trader", 80, 40, 8, 20, 4, true),
        season_row("Bryan Trader", 210, 95, 22, 48, 11, false),
        season_row("Bryan Trader", 130, 55, 14, 28, 7, true),
    ];

    let mut by_player: HashMap<String, Vec<SeasonRecord>> = HashMap::new();
    for (year, lines) in [(1991u16, year1), (1992, year2)] {
        let scan = seasons::scan_year(year, lines, &tracked);
        for (name, stats) in scan.rows {
            by_player.entry(name).or_default().push(SeasonRecord { year, stats });
        }
    }

    assert_eq!(by_player["Bryan Trader"].len(), 2);
    assert_eq!(by_player["Alaa Abdelnaby"].len(), 1);
    assert!(!by_player.contains_key("Nobody Tracked"));

    // Trader's second season scores higher than his first.
    let trader = career::summarize(&by_player["Bryan Trader"]).unwrap();
    assert_eq!(trader.best_year, 2);
    assert_eq!(trader.career_length, 2);

    let abdelnaby = career::summarize(&by_player["Alaa Abdelnaby"]).unwrap();
    assert_eq!(abdelnaby.best_year, 1);
    assert_eq!(abdelnaby.career_length, 1);

    // Profile exists for one player only; the other stays career-only.
    let college = profile::scan_profile(profile_page());
    let mut records = vec![
        merge::merge("Alaa Abdelnaby".into(), Some(abdelnaby), Some(college)),
        merge::merge("Bryan Trader".into(), Some(trader), None),
    ];
    records.sort_by(|a, b| a.name.cmp(&b.name));

    let dir: PathBuf = std::env::temp_dir().join("cbb_pipeline_e2e");
    store::save_players(&dir, &records).unwrap();

    let mut names = BTreeMap::new();
    names.insert("Alaa Abdelnaby".to_string(), "/alaa-abdelnaby-1.html".to_string());
    store::save_college_players(&dir, &names).unwrap();
    assert!(store::data_loaded(&dir));

    let loaded = store::load_players(&dir).unwrap();
    assert_eq!(loaded, records);
    assert_eq!(loaded[0].games.as_deref(), Some("104"));
    assert_eq!(loaded[0].fgp.as_deref(), Some("59.9"));
    // One-sided merge persists with profile cells absent, not zeroed.
    assert_eq!(loaded[1].games, None);
    assert_eq!(loaded[1].best_year, Some(2));
}
