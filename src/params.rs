// src/params.rs
// Site endpoints, snapshot locations and on-disk layout.

/// Per-season stats required to score a season. Order matters only for
/// display; qualification requires all five.
pub const TRACKED_STATS: [&str; 5] = ["points", "rebounds", "steals", "assists", "blocks"];

/// League totals pages exist from 1950 up to (not including) this year.
pub const FIRST_SEASON: u16 = 1950;
pub const SEASON_END: u16 = 2022;

const NBA_HOST: &str = "https://www.basketball-reference.com";
const CBB_HOST: &str = "https://www.sports-reference.com";

/// Prebuilt snapshot of the merged player table.
pub const SNAPSHOT_CSV_URL: &str = "https://gist.githubusercontent.com/corinzarkowski/4d1e66a9253b552ee95d62dbf74b3185/raw/579c5421fae54680435ca33e104c254c74638af1/cbb_nba_data.csv";
/// Prebuilt snapshot of the college name -> profile path map.
pub const SNAPSHOT_JSON_URL: &str = "https://gist.githubusercontent.com/corinzarkowski/f6bee01b354419c4095e55173d52873b/raw/8541672e08f7f1f00dd8ef4440b7742f87357c33/cbb_names_urls.json";

pub const DATA_DIR: &str = "data";
pub const PLAYER_DATA_FILE: &str = "player_data.csv";
pub const COLLEGE_PLAYERS_FILE: &str = "college_players.json";

pub fn nba_letter_index_url(letter: char) -> String {
    format!("{}/players/{}/", NBA_HOST, letter)
}

pub fn cbb_letter_index_url(letter: char) -> String {
    format!("{}/cbb/players/{}-index.html", CBB_HOST, letter)
}

pub fn year_totals_url(year: u16) -> String {
    format!("{}/leagues/NBA_{}_totals.html", NBA_HOST, year)
}

/// `path` is the fragment captured from the letter index, starting with `/`.
pub fn profile_url(path: &str) -> String {
    format!("{}/cbb/players{}", CBB_HOST, path)
}
