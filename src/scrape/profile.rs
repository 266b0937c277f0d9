// src/scrape/profile.rs
// One college profile page -> career summary fields.
//
// The profile header is a grid of stat tiles: a label line carrying a
// data-tip attribute, then a value line wrapping the number in <p>...</p>.
// That is exactly the NextLine shape of the field scanner.

use crate::scan::{self, FieldRule, ValueAt, ValueKind, ValuePattern};

macro_rules! profile_rule {
    ($name:literal, $tip:literal, $abbr:literal, $kind:ident) => {
        FieldRule {
            name: $name,
            label: concat!(r#"data-tip=""#, $tip, r#""><strong>"#, $abbr, "</strong>"),
            at: ValueAt::NextLine,
            value: ValuePattern {
                open: "<p>",
                kind: ValueKind::$kind,
                close: "</p></div>",
            },
        }
    };
}

/// The nine career-summary tiles. Games is a count; the rest are per-game
/// averages or percentages and may carry a decimal point.
pub const PROFILE_RULES: [FieldRule; 9] = [
    profile_rule!("Games", "Games", "G", Integer),
    profile_rule!("Points", "Points", "PTS", Decimal),
    profile_rule!("Rebounds", "Total Rebounds", "TRB", Decimal),
    profile_rule!("Assists", "Assists", "AST", Decimal),
    profile_rule!("FGP", "Field Goal Percentage", "FG%", Decimal),
    profile_rule!("TFGP", "3-Point Field Goal Percentage", "FG3%", Decimal),
    profile_rule!("FTP", "Free Throw Percentage", "FT%", Decimal),
    profile_rule!(
        "EFGP",
        "Effective Field Goal Percentage; this statistic adjusts for the fact that a 3-point field goal is worth one more point than a 2-point field goal.",
        "eFG%",
        Decimal
    ),
    profile_rule!(
        "WS",
        "Win Shares; an estimate of the number of wins contributed by a player due to his offense and defense.",
        "WS",
        Decimal
    ),
];

/// Career summary scraped from one profile page. Every field is optional:
/// short careers and old pages are missing tiles all the time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollegeProfile {
    pub games: Option<String>,
    pub points: Option<String>,
    pub rebounds: Option<String>,
    pub assists: Option<String>,
    pub fgp: Option<String>,
    pub tfgp: Option<String>,
    pub ftp: Option<String>,
    pub efgp: Option<String>,
    pub ws: Option<String>,
}

pub fn scan_profile<I>(lines: I) -> CollegeProfile
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut fields = scan::scan(&PROFILE_RULES, lines);
    CollegeProfile {
        games: fields.remove("Games"),
        points: fields.remove("Points"),
        rebounds: fields.remove("Rebounds"),
        assists: fields.remove("Assists"),
        fgp: fields.remove("FGP"),
        tfgp: fields.remove("TFGP"),
        ftp: fields.remove("FTP"),
        efgp: fields.remove("EFGP"),
        ws: fields.remove("WS"),
    }
}
