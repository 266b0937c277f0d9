// src/scrape/index.rs
// Per-letter player index pages -> name -> resource path maps.

use std::collections::{BTreeMap, HashMap};

use log::info;

use crate::net;
use crate::params;

/// All NBA players, keyed by display name, value is the per-letter page
/// fragment (e.g. `abdelal01.html`). Only the key set is used downstream,
/// as the tracked identity set for season scanning.
pub fn fetch_nba_players() -> HashMap<String, String> {
    info!("fetching nba player urls...");
    let mut players = HashMap::new();
    for letter in 'a'..='z' {
        let url = params::nba_letter_index_url(letter);
        for line in net::fetch_lines(&url) {
            if let Some((name, href)) = nba_index_entry(&line, letter) {
                players.insert(name, href);
            }
        }
    }
    players
}

/// All college players, keyed by display name, value is the profile path
/// starting with `/`. Sorted map: this is the known-name universe the
/// resolver iterates, and its order must be reproducible.
pub fn fetch_cbb_players() -> BTreeMap<String, String> {
    info!("fetching cbb player urls...");
    let mut players = BTreeMap::new();
    for letter in 'a'..='z' {
        let url = params::cbb_letter_index_url(letter);
        for line in net::fetch_lines(&url) {
            if let Some((name, path)) = cbb_index_entry(&line) {
                players.insert(name, path);
            }
        }
    }
    players
}

/// `data-stat="player" ><a href="/players/{letter}/FRAGMENT">NAME<...`
fn nba_index_entry(line: &str, letter: char) -> Option<(String, String)> {
    let needle = format!(r#"data-stat="player" ><a href="/players/{}/"#, letter);
    let rest = &line[line.find(&needle)? + needle.len()..];
    let end = rest.find("\">")?;
    let href = &rest[..end];
    if href.contains('>') {
        return None;
    }
    let rest = &rest[end + 2..];
    let name = &rest[..rest.find('<')?];
    Some((name.to_string(), href.to_string()))
}

/// `p><a href="/cbb/players/PATH">NAME`
fn cbb_index_entry(line: &str) -> Option<(String, String)> {
    let needle = r#"p><a href="/cbb/players"#;
    let rest = &line[line.find(needle)? + needle.len()..];
    let end = rest.find('"')?;
    let path = &rest[..end];
    let rest = &rest[end..];
    let rest = rest.strip_prefix("\">")?;
    let name = match rest.find('<') {
        Some(i) => &rest[..i],
        None => rest,
    };
    Some((name.to_string(), path.to_string()))
}
