//! Aggregate views computed over the winning movies.
//!
//! Everything here is a pure function over data already pulled out of the
//! [`Catalog`](crate::catalog::Catalog). An empty input always yields empty
//! output.

use std::collections::BTreeMap;

use crate::models::{
    ProducerInterval, ProducerIntervals, ProducerWin, StudioWinCount, YearWinnerCount,
};

/// Years with fewer winning movies than this are left out of the years projection.
pub const MIN_WINNERS_PER_YEAR: u64 = 1;

/// Counts winning movies per year, ascending by year.
///
/// `winning_years` holds one entry per winning movie.
pub fn years_with_multiple_winners(winning_years: &[i32]) -> Vec<YearWinnerCount> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for year in winning_years {
        *counts.entry(*year).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count >= MIN_WINNERS_PER_YEAR)
        .map(|(year, winner_count)| YearWinnerCount { year, winner_count })
        .collect()
}

/// Drops studios without wins and orders the rest by win count, highest first.
///
/// The sort is stable, so studios with equal counts keep the order they came in.
pub fn rank_studios(mut counts: Vec<StudioWinCount>) -> Vec<StudioWinCount> {
    counts.retain(|s| s.win_count > 0);
    counts.sort_by(|a, b| b.win_count.cmp(&a.win_count));
    counts
}

/// Producers with the shortest and the longest span between their first and last win.
///
/// A producer needs at least two win records to be considered. Two wins in the
/// same year give an interval of zero, which counts like any other value.
/// Both lists carry every producer tied at the extreme, ordered by name.
pub fn producer_intervals(wins: &[ProducerWin]) -> ProducerIntervals {
    let mut years_by_producer: BTreeMap<&str, Vec<i32>> = BTreeMap::new();
    for win in wins {
        years_by_producer.entry(win.producer.as_str()).or_default().push(win.year);
    }

    let spans: Vec<ProducerInterval> = years_by_producer
        .into_iter()
        .filter(|(_, years)| years.len() >= 2)
        .filter_map(|(producer, years)| {
            let first = *years.iter().min()?;
            let last = *years.iter().max()?;
            Some(ProducerInterval {
                producer: producer.to_string(),
                interval: last - first,
                previous_year: first,
                following_year: last,
            })
        })
        .collect();

    let (Some(min), Some(max)) =
        (spans.iter().map(|s| s.interval).min(), spans.iter().map(|s| s.interval).max())
    else {
        return ProducerIntervals::default();
    };

    ProducerIntervals {
        min: spans.iter().filter(|s| s.interval == min).cloned().collect(),
        max: spans.iter().filter(|s| s.interval == max).cloned().collect(),
    }
}
