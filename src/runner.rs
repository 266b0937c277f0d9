// src/runner.rs
// Full re-derivation of the player table from the live sites.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::path::Path;

use log::info;

use crate::career;
use crate::merge::{self, MergedRecord};
use crate::net;
use crate::params::{self, FIRST_SEASON, SEASON_END};
use crate::scrape::{index, profile, seasons};
use crate::scrape::seasons::SeasonRecord;
use crate::store;

/// Scrape everything, merge, persist into `dir`. Slow path: one fetch per
/// letter, per season year and per matched player profile.
pub fn rebuild_dataset(dir: &Path) -> Result<Vec<MergedRecord>, Box<dyn Error>> {
    info!("initializing data...");

    let nba_players = index::fetch_nba_players();
    let cbb_players = index::fetch_cbb_players();
    let tracked: HashSet<String> = nba_players.into_keys().collect();

    let seasons_by_player = collect_seasons(&tracked);

    info!("fetching college data for nba players...");
    info!("this may take a while");

    let mut records = Vec::new();
    let mut count = 0usize;
    let total = seasons_by_player.len().max(1);
    for (name, player_seasons) in &seasons_by_player {
        count += 1;
        if count % 100 == 0 {
            info!("{}%", count * 100 / total);
        }

        // Only players with at least one qualifying season are persisted.
        let Some(career) = career::summarize(player_seasons) else { continue };

        let college = cbb_players.get(name).map(|path| {
            let lines = net::fetch_lines(&params::profile_url(path));
            profile::scan_profile(lines)
        });

        records.push(merge::merge(name.clone(), Some(career), college));
    }

    // Scan order over a HashMap is arbitrary; sort for a stable table.
    records.sort_by(|a, b| a.name.cmp(&b.name));

    store::save_players(dir, &records)?;
    store::save_college_players(dir, &cbb_players)?;
    Ok(records)
}

/// One pass over every league year, accumulating each tracked player's
/// seasons in scan order (ascending years, rows as the site listed them).
fn collect_seasons(tracked: &HashSet<String>) -> HashMap<String, Vec<SeasonRecord>> {
    info!("retrieving nba career data...");
    let mut by_player: HashMap<String, Vec<SeasonRecord>> = HashMap::new();

    for year in FIRST_SEASON..SEASON_END {
        if (year - FIRST_SEASON) % 5 == 0 {
            info!("{}%", (year - FIRST_SEASON) as u32 * 100 / (SEASON_END - FIRST_SEASON) as u32);
        }
        let lines = net::fetch_lines(&params::year_totals_url(year));
        let scan = seasons::scan_year(year, lines, tracked);
        for (name, stats) in scan.rows {
            by_player
                .entry(name)
                .or_default()
                .push(SeasonRecord { year: scan.year, stats });
        }
    }

    by_player
}
