// src/cli.rs

use std::collections::BTreeMap;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;

use crate::merge::{self, MergedRecord};
use crate::net;
use crate::params::{self, DATA_DIR};
use crate::resolve;
use crate::runner;
use crate::scrape::profile;
use crate::store;

pub struct Params {
    pub players: Vec<String>,
    pub reload_manual: bool,
    pub reload_gist: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli(env::args().skip(1))?;
    let dir = PathBuf::from(DATA_DIR);

    if params.reload_manual {
        runner::rebuild_dataset(&dir)?;
    }
    if params.reload_gist || !store::data_loaded(&dir) {
        store::refresh_from_snapshot(&dir)?;
    }

    let known = store::load_players(&dir)?;
    let college_players = store::load_college_players(&dir)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let queries = resolve_queries(&params.players, &college_players, &mut input)?;

    info!("fetching data on input players...");
    for name in queries {
        let career = known
            .iter()
            .find(|r| r.name == name)
            .and_then(|r| match (r.best_year, r.career_length) {
                (Some(b), Some(l)) => {
                    Some(crate::career::CareerRecord { best_year: b, career_length: l })
                }
                _ => None,
            });
        let Some(path) = college_players.get(&name) else { continue };
        let college = profile::scan_profile(net::fetch_lines(&params::profile_url(path)));
        print_record(&merge::merge(name, career, Some(college)));
    }

    Ok(())
}

/// Map each query to a known identity. Exact hits pass through; anything
/// else goes to the fuzzy resolver and its suggestion must be confirmed on
/// stdin before it enters the working set. No suggestion or a refusal
/// skips the query.
fn resolve_queries<R: BufRead>(
    queries: &[String],
    college_players: &BTreeMap<String, String>,
    input: &mut R,
) -> Result<Vec<String>, Box<dyn Error>> {
    let mut valid = Vec::new();
    for query in queries {
        if college_players.contains_key(query) {
            valid.push(query.clone());
            continue;
        }
        let suggestion =
            resolve::find_similar(query, college_players.keys().map(String::as_str));
        if suggestion.is_empty() {
            println!("{query} is not recognized as a valid college player. No close match found, skipping.");
            continue;
        }
        print!("{query} is not recognized as a valid college player. Did you mean {suggestion}? [y/n]\n>");
        io::stdout().flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if answer.trim() == "y" {
            valid.push(suggestion);
        }
    }
    Ok(valid)
}

fn print_record(rec: &MergedRecord) {
    println!("{}", rec.name);
    let fields: [(&str, &Option<String>); 9] = [
        ("Games", &rec.games),
        ("Points", &rec.points),
        ("Rebounds", &rec.rebounds),
        ("Assists", &rec.assists),
        ("FG%", &rec.fgp),
        ("3P%", &rec.tfgp),
        ("FT%", &rec.ftp),
        ("eFG%", &rec.efgp),
        ("Win shares", &rec.ws),
    ];
    for (label, value) in fields {
        if let Some(v) = value {
            println!("  {label}: {v}");
        }
    }
    if let (Some(best), Some(len)) = (rec.best_year, rec.career_length) {
        println!("  NBA career: {len} seasons, best year {best}");
    }
}

fn parse_cli<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params {
        players: Vec::new(),
        reload_manual: false,
        reload_gist: false,
    };

    for a in args {
        match a.as_str() {
            "--reload-manual" => params.reload_manual = true,
            "--reload-gist" => params.reload_gist = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown arg: {}", other).into());
            }
            _ => params.players.push(a),
        }
    }

    if params.players.is_empty() {
        return Err("No player names given. See --help.".into());
    }
    Ok(params)
}
