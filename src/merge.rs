// src/merge.rs
// Merge career and college data for one identity into the persisted row.

use serde::{Deserialize, Serialize};

use crate::career::CareerRecord;
use crate::scrape::profile::CollegeProfile;

/// One row of the persisted player table. Either side of the merge may be
/// missing; absent fields serialize as empty CSV cells, never as zeroes.
/// `serde(default)` keeps loading tolerant of snapshot files whose column
/// set drifts from the locally built one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergedRecord {
    pub name: String,
    pub best_year: Option<u32>,
    pub career_length: Option<u32>,
    #[serde(rename = "Games")]
    pub games: Option<String>,
    #[serde(rename = "Points")]
    pub points: Option<String>,
    #[serde(rename = "Rebounds")]
    pub rebounds: Option<String>,
    #[serde(rename = "Assists")]
    pub assists: Option<String>,
    #[serde(rename = "FGP")]
    pub fgp: Option<String>,
    #[serde(rename = "TFGP")]
    pub tfgp: Option<String>,
    #[serde(rename = "FTP")]
    pub ftp: Option<String>,
    #[serde(rename = "EFGP")]
    pub efgp: Option<String>,
    #[serde(rename = "WS")]
    pub ws: Option<String>,
}

/// Combine whatever exists for one identity. One-sided input is normal:
/// college-only players have no NBA career, early careers predate the
/// college source.
pub fn merge(
    name: String,
    career: Option<CareerRecord>,
    profile: Option<CollegeProfile>,
) -> MergedRecord {
    let profile = profile.unwrap_or_default();
    MergedRecord {
        name,
        best_year: career.map(|c| c.best_year),
        career_length: career.map(|c| c.career_length),
        games: profile.games,
        points: profile.points,
        rebounds: profile.rebounds,
        assists: profile.assists,
        fgp: profile.fgp,
        tfgp: profile.tfgp,
        ftp: profile.ftp,
        efgp: profile.efgp,
        ws: profile.ws,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_only_leaves_profile_fields_absent() {
        let rec = merge(
            "Alaa Abdelnaby".into(),
            Some(CareerRecord { best_year: 3, career_length: 5 }),
            None,
        );
        assert_eq!(rec.best_year, Some(3));
        assert_eq!(rec.career_length, Some(5));
        assert_eq!(rec.games, None);
        assert_eq!(rec.points, None);
    }

    #[test]
    fn profile_only_leaves_career_fields_absent() {
        let profile = CollegeProfile { games: Some("104".into()), ..Default::default() };
        let rec = merge("Alaa Abdelnaby".into(), None, Some(profile));
        assert_eq!(rec.best_year, None);
        assert_eq!(rec.career_length, None);
        assert_eq!(rec.games.as_deref(), Some("104"));
    }

    #[test]
    fn both_sides_land_in_one_row() {
        let profile = CollegeProfile {
            games: Some("104".into()),
            ws: Some("10.1".into()),
            ..Default::default()
        };
        let rec = merge(
            "Alaa Abdelnaby".into(),
            Some(CareerRecord { best_year: 2, career_length: 4 }),
            Some(profile),
        );
        assert_eq!(rec.best_year, Some(2));
        assert_eq!(rec.ws.as_deref(), Some("10.1"));
    }
}
