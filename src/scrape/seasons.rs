// src/scrape/seasons.rs
// One league-year totals page -> at most one stat row per tracked player.

use std::collections::{HashMap, HashSet};

use crate::scan::{self, FieldRule, ValueAt, ValueKind, ValuePattern};

/// Rows carrying this marker are per-team fragments of a mid-season trade;
/// the site lists them alongside the combined row, which is the one we keep.
/// Single literal, no fallback: if the site renames the class, fragment rows
/// start duplicating combined rows.
pub const PARTIAL_ROW_MARKER: &str = r#"class="italic_text partial_table""#;

macro_rules! season_rule {
    ($name:literal, $stat:literal) => {
        FieldRule {
            name: $name,
            label: concat!(r#"data-stat=""#, $stat, r#"" >"#),
            at: ValueAt::SameLine,
            value: ValuePattern {
                open: concat!(r#"data-stat=""#, $stat, r#"" >"#),
                kind: ValueKind::Integer,
                close: "</td>",
            },
        }
    };
}

/// The five tracked season totals.
pub const SEASON_RULES: [FieldRule; 5] = [
    season_rule!("points", "pts"),
    season_rule!("rebounds", "trb"),
    season_rule!("steals", "stl"),
    season_rule!("assists", "ast"),
    season_rule!("blocks", "blk"),
];

/// Raw captured stats for one player in one season. Keys are tracked stat
/// names; a key is present only when its cell matched, and the matched run
/// may be the empty string for an empty cell.
pub type SeasonStats = HashMap<&'static str, String>;

#[derive(Clone, Debug, PartialEq)]
pub struct SeasonRecord {
    pub year: u16,
    pub stats: SeasonStats,
}

/// Everything one year page yielded for the tracked players, in row order.
pub struct YearScan {
    pub year: u16,
    pub rows: Vec<(String, SeasonStats)>,
}

/// Scan one year's totals page. A row contributes only if its player name
/// is tracked and it is not a partial-season fragment; of several surviving
/// rows for the same player, the last one wins, so each player ends up with
/// at most one entry.
pub fn scan_year<I>(year: u16, lines: I, tracked: &HashSet<String>) -> YearScan
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut rows: Vec<(String, SeasonStats)> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if line.contains(PARTIAL_ROW_MARKER) {
            continue;
        }
        let Some(name) = row_player_name(line) else { continue };
        if !tracked.contains(&name) {
            continue;
        }

        let stats = scan::scan(&SEASON_RULES, [line]);
        match rows.iter().position(|(n, _)| *n == name) {
            Some(i) => rows[i].1 = stats,
            None => rows.push((name, stats)),
        }
    }

    YearScan { year, rows }
}

/// `data-stat="player" csk="..." ><a href="/players/...>NAME</a></td>`
fn row_player_name(line: &str) -> Option<String> {
    let needle = r#"data-stat="player" csk=""#;
    let rest = &line[line.find(needle)? + needle.len()..];
    let rest = &rest[rest.find('"')?..];
    let rest = rest.strip_prefix(r#"" >"#)?;
    let rest = rest.strip_prefix(r#"<a href="/players/"#)?;
    let rest = &rest[rest.find('>')? + 1..];
    let lt = rest.find('<')?;
    if !rest[lt..].starts_with("</a></td>") {
        return None;
    }
    Some(rest[..lt].to_string())
}
