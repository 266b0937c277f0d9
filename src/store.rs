// src/store.rs
// Local persistence of the merged player table and the college name map,
// plus the prebuilt-snapshot fallback.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::merge::MergedRecord;
use crate::net;
use crate::params::{COLLEGE_PLAYERS_FILE, PLAYER_DATA_FILE, SNAPSHOT_CSV_URL, SNAPSHOT_JSON_URL};

pub fn player_data_path(dir: &Path) -> PathBuf {
    dir.join(PLAYER_DATA_FILE)
}

pub fn college_players_path(dir: &Path) -> PathBuf {
    dir.join(COLLEGE_PLAYERS_FILE)
}

/// Both local files present; nothing says they are fresh.
pub fn data_loaded(dir: &Path) -> bool {
    player_data_path(dir).exists() && college_players_path(dir).exists()
}

pub fn save_players(dir: &Path, records: &[MergedRecord]) -> Result<(), Box<dyn Error>> {
    ensure_dir(dir)?;
    let mut writer = csv::Writer::from_path(player_data_path(dir))?;
    for rec in records {
        writer.serialize(rec)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_players(dir: &Path) -> Result<Vec<MergedRecord>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(player_data_path(dir))?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

pub fn save_college_players(
    dir: &Path,
    players: &BTreeMap<String, String>,
) -> Result<(), Box<dyn Error>> {
    ensure_dir(dir)?;
    let json = serde_json::to_string(players)?;
    fs::write(college_players_path(dir), json)?;
    Ok(())
}

pub fn load_college_players(dir: &Path) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
    let text = fs::read_to_string(college_players_path(dir))?;
    Ok(serde_json::from_str(&text)?)
}

/// Replace the local files with the prebuilt snapshot. Unlike page fetches
/// this propagates failure: without data there is nothing left to run on.
pub fn refresh_from_snapshot(dir: &Path) -> Result<(), Box<dyn Error>> {
    info!("initializing data from snapshot...");
    ensure_dir(dir)?;

    let table = net::fetch(SNAPSHOT_CSV_URL)?;
    let names = net::fetch(SNAPSHOT_JSON_URL)?;

    // Validate the JSON before overwriting anything local.
    let parsed: BTreeMap<String, String> = serde_json::from_str(&names)?;

    fs::write(player_data_path(dir), table)?;
    save_college_players(dir, &parsed)?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
