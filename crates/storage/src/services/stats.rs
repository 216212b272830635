//! Panelist scoring statistics.
//!
//! All arithmetic is done on `Decimal` regardless of the deployment's
//! scoring mode; the response mapper picks the wire representation. Standard
//! deviation bridges through `f64` for the square root and comes back as a
//! rounded `Decimal`.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Digits kept on derived figures (mean, median, standard deviation).
const STAT_SCALE: u32 = 4;
/// Digits kept on rank percentages.
const PERCENT_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub count: i64,
    pub minimum: Decimal,
    pub maximum: Decimal,
    pub mean: Decimal,
    pub median: Decimal,
    pub standard_deviation: Decimal,
    pub total: Decimal,
}

/// Summarize recorded scores. `None` for an empty slice: an unscored
/// panelist has no statistics block, which is not an error.
pub fn summarize_scores(scores: &[Decimal]) -> Option<ScoreSummary> {
    if scores.is_empty() {
        return None;
    }

    let count = scores.len() as i64;
    let total: Decimal = scores.iter().copied().sum();
    let minimum = scores.iter().copied().min()?;
    let maximum = scores.iter().copied().max()?;
    let mean = (total / Decimal::from(count)).round_dp(STAT_SCALE);

    Some(ScoreSummary {
        count,
        minimum,
        maximum,
        mean,
        median: median(scores).round_dp(STAT_SCALE),
        standard_deviation: standard_deviation(scores).round_dp(STAT_SCALE),
        total,
    })
}

fn median(scores: &[Decimal]) -> Decimal {
    let mut sorted = scores.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / Decimal::TWO
    }
}

/// Population standard deviation.
fn standard_deviation(scores: &[Decimal]) -> Decimal {
    let n = scores.len() as f64;
    let values: Vec<f64> = scores
        .iter()
        .map(|s| s.to_f64().unwrap_or_default())
        .collect();

    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Decimal::from_f64(variance.sqrt()).unwrap_or_default()
}

/// Rank tallies over appearances with a recorded rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankTally {
    pub first: i64,
    pub first_tied: i64,
    pub second: i64,
    pub second_tied: i64,
    pub third: i64,
}

impl RankTally {
    pub fn total(&self) -> i64 {
        self.first + self.first_tied + self.second + self.second_tied + self.third
    }
}

pub fn tally_ranks<'a>(ranks: impl IntoIterator<Item = &'a str>) -> RankTally {
    let mut tally = RankTally::default();

    for rank in ranks {
        match rank {
            "1" => tally.first += 1,
            "1t" => tally.first_tied += 1,
            "2" => tally.second += 1,
            "2t" => tally.second_tied += 1,
            "3" => tally.third += 1,
            // Unknown codes are dropped rather than failing the aggregate.
            _ => {}
        }
    }

    tally
}

/// Share of `count` in `total` as a percentage; zero when nothing is ranked.
pub fn rank_percentage(count: i64, total: i64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(total)).round_dp(PERCENT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(v: i32) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_empty_scores_have_no_summary() {
        assert!(summarize_scores(&[]).is_none());
    }

    #[test]
    fn test_single_score_summary() {
        let summary = summarize_scores(&[dec(14)]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.minimum, dec(14));
        assert_eq!(summary.maximum, dec(14));
        assert_eq!(summary.mean, dec(14));
        assert_eq!(summary.median, dec(14));
        assert_eq!(summary.standard_deviation, Decimal::ZERO);
        assert_eq!(summary.total, dec(14));
    }

    #[test]
    fn test_summary_over_known_values() {
        let scores = [dec(10), dec(12), dec(14), dec(18)];
        let summary = summarize_scores(&scores).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.minimum, dec(10));
        assert_eq!(summary.maximum, dec(18));
        assert_eq!(summary.total, dec(54));
        assert_eq!(summary.mean, Decimal::new(135, 1)); // 13.5
        assert_eq!(summary.median, dec(13));
        // Population stddev of [10, 12, 14, 18] is sqrt(8.75) = 2.9580...
        assert_eq!(summary.standard_deviation, Decimal::new(29580, 4));
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[dec(3), dec(1), dec(2)]), dec(2));
    }

    #[test]
    fn test_tally_counts_each_rank_code() {
        let tally = tally_ranks(["1", "1t", "1", "2", "2t", "3", "3"]);
        assert_eq!(tally.first, 2);
        assert_eq!(tally.first_tied, 1);
        assert_eq!(tally.second, 1);
        assert_eq!(tally.second_tied, 1);
        assert_eq!(tally.third, 2);
        assert_eq!(tally.total(), 7);
    }

    #[test]
    fn test_tally_ignores_unknown_codes() {
        let tally = tally_ranks(["1", "x", ""]);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_rank_percentage() {
        assert_eq!(rank_percentage(1, 4), Decimal::new(2500, 2)); // 25.00
        assert_eq!(rank_percentage(1, 3), Decimal::new(3333, 2)); // 33.33
        assert_eq!(rank_percentage(0, 0), Decimal::ZERO);
    }
}
