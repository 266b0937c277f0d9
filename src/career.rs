// src/career.rs
// Reduce a player's scanned seasons to a best-season index and a length.

use crate::params::TRACKED_STATS;
use crate::scrape::seasons::SeasonRecord;

/// Derived career shape. `best_year` is a sequential index among the
/// player's qualifying seasons (1-based), not a calendar year.
/// `career_length` counts qualifying seasons; a season that fails to
/// qualify is skipped without resetting the counter, so gaps do not
/// shrink the count below the seasons actually played in full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CareerRecord {
    pub best_year: u32,
    pub career_length: u32,
}

/// A season qualifies when all five tracked stats are present and parse as
/// non-negative integers. Its score is the product of the five values; the
/// strictly greatest score wins, so of equal scores the earliest season is
/// kept. Seasons must arrive in source-original order; the caller owns that
/// ordering.
///
/// Returns None when no season qualifies.
pub fn summarize(seasons: &[SeasonRecord]) -> Option<CareerRecord> {
    let mut best: Option<(u64, u32)> = None;
    let mut counter: u32 = 1;

    for season in seasons {
        let Some(values) = tracked_values(season) else { continue };
        let score: u64 = values.iter().product();
        match best {
            Some((max, _)) if score <= max => {}
            _ => best = Some((score, counter)),
        }
        counter += 1;
    }

    best.map(|(_, at)| CareerRecord {
        best_year: at,
        career_length: counter - 1,
    })
}

fn tracked_values(season: &SeasonRecord) -> Option<[u64; 5]> {
    let mut values = [0u64; 5];
    for (slot, stat) in values.iter_mut().zip(TRACKED_STATS) {
        *slot = season.stats.get(stat)?.parse().ok()?;
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::seasons::SeasonStats;

    fn season(year: u16, stats: &[(&'static str, &str)]) -> SeasonRecord {
        let stats: SeasonStats = stats.iter().map(|(k, v)| (*k, v.to_string())).collect();
        SeasonRecord { year, stats }
    }

    fn full(year: u16, pts: &str, reb: &str, stl: &str, ast: &str, blk: &str) -> SeasonRecord {
        season(
            year,
            &[
                ("points", pts),
                ("rebounds", reb),
                ("steals", stl),
                ("assists", ast),
                ("blocks", blk),
            ],
        )
    }

    #[test]
    fn incomplete_season_does_not_qualify() {
        let seasons = vec![
            full(1991, "10", "5", "2", "3", "1"),
            season(1992, &[("points", "8"), ("rebounds", "4")]),
        ];
        let got = summarize(&seasons).unwrap();
        assert_eq!(got, CareerRecord { best_year: 1, career_length: 1 });
    }

    #[test]
    fn equal_scores_keep_the_first_season() {
        let seasons = vec![
            full(1991, "10", "5", "2", "3", "1"),
            full(1992, "5", "10", "3", "2", "1"),
        ];
        let got = summarize(&seasons).unwrap();
        assert_eq!(got.best_year, 1);
        assert_eq!(got.career_length, 2);
    }

    #[test]
    fn higher_score_moves_best_year() {
        let seasons = vec![
            full(1991, "10", "5", "2", "3", "1"),
            full(1992, "20", "10", "4", "6", "2"),
            full(1993, "10", "5", "2", "3", "1"),
        ];
        let got = summarize(&seasons).unwrap();
        assert_eq!(got, CareerRecord { best_year: 2, career_length: 3 });
    }

    #[test]
    fn gaps_advance_neither_counter_nor_best() {
        // Middle season is missing a stat value: skipped, but the later
        // qualifying season is still counted as index 2.
        let seasons = vec![
            full(1991, "10", "5", "2", "3", "1"),
            season(1992, &[("points", ""), ("rebounds", "4")]),
            full(1993, "20", "10", "4", "6", "2"),
        ];
        let got = summarize(&seasons).unwrap();
        assert_eq!(got, CareerRecord { best_year: 2, career_length: 2 });
    }

    #[test]
    fn empty_string_stat_disqualifies() {
        let seasons = vec![full(1960, "100", "50", "", "30", "5")];
        assert_eq!(summarize(&seasons), None);
    }

    #[test]
    fn no_qualifying_season_yields_nothing() {
        assert_eq!(summarize(&[]), None);
        let seasons = vec![season(1991, &[("points", "10")])];
        assert_eq!(summarize(&seasons), None);
    }

    #[test]
    fn all_zero_scores_still_produce_a_record() {
        // A qualifying season whose product is zero (no blocks) is still a
        // qualifying season: first one becomes the best.
        let seasons = vec![
            full(1991, "10", "5", "2", "3", "0"),
            full(1992, "8", "4", "1", "2", "0"),
        ];
        let got = summarize(&seasons).unwrap();
        assert_eq!(got, CareerRecord { best_year: 1, career_length: 2 });
    }
}
