use std::fmt;

use serde::Serialize;

use super::criteria::{Criteria, Criterion, Distribution, DOMINANT_BAND_MIN};
use super::stats::{Band, Stats};

/// Reason a candidate draw was turned down.
///
/// Only the first failing rule is reported, checked in this order:
/// band sum, parity, individual bands, distribution.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
	OddCount { expected: usize, actual: usize },
	EvenCount { expected: usize, actual: usize },
	BandCount { band: Band, expected: usize, actual: usize },
	/// Low, mid and high were all fixed but do not add up to the line size.
	/// No draw can ever pass this rule.
	BandSumMismatch { low: usize, mid: usize, high: usize, main_count: usize },
	DistributionUnmet { distribution: Distribution },
}

impl fmt::Display for Rejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rejection::OddCount { expected, actual } => {
				write!(f, "expected {expected} odd numbers, drew {actual}")
			}
			Rejection::EvenCount { expected, actual } => {
				write!(f, "expected {expected} even numbers, drew {actual}")
			}
			Rejection::BandCount { band, expected, actual } => {
				write!(f, "expected {expected} {band} numbers, drew {actual}")
			}
			Rejection::BandSumMismatch { low, mid, high, main_count } => write!(
				f,
				"low + mid + high = {low} + {mid} + {high} but a line holds {main_count} numbers"
			),
			Rejection::DistributionUnmet { distribution } => {
				write!(f, "'{distribution}' distribution not met")
			}
		}
	}
}

fn check_count(criterion: Criterion, actual: usize, reject: impl FnOnce(usize) -> Rejection) -> Result<(), Rejection> {
	match criterion.expected() {
		Some(expected) if !criterion.accepts(actual) => Err(reject(expected)),
		_ => Ok(()),
	}
}

/// Checks a candidate's stats against `criteria`.
///
/// # Errors
/// Returns the first `Rejection` encountered.
pub fn validate(stats: &Stats, criteria: &Criteria, main_count: usize) -> Result<(), Rejection> {
	// Depends on the criteria alone, so it decides the reason for every draw
	if let (Some(low), Some(mid), Some(high)) = (criteria.low.expected(), criteria.mid.expected(), criteria.high.expected()) {
		let sum = low.checked_add(mid).and_then(|s| s.checked_add(high));
		if sum != Some(main_count) {
			return Err(Rejection::BandSumMismatch { low, mid, high, main_count });
		}
	}

	check_count(criteria.odd, stats.odd_count, |expected| Rejection::OddCount {
		expected,
		actual: stats.odd_count,
	})?;
	check_count(criteria.even, stats.even_count, |expected| Rejection::EvenCount {
		expected,
		actual: stats.even_count,
	})?;

	for (band, criterion) in [(Band::Low, criteria.low), (Band::Mid, criteria.mid), (Band::High, criteria.high)] {
		let actual = stats.band_count(band);
		check_count(criterion, actual, |expected| Rejection::BandCount { band, expected, actual })?;
	}

	let distribution_met = match criteria.distribution {
		Distribution::Any => true,
		Distribution::Low => stats.low_count >= DOMINANT_BAND_MIN,
		Distribution::Mid => stats.mid_count >= DOMINANT_BAND_MIN,
		Distribution::High => stats.high_count >= DOMINANT_BAND_MIN,
		Distribution::Balanced => stats.low_count >= 1 && stats.mid_count >= 1 && stats.high_count >= 1,
	};
	if !distribution_met {
		return Err(Rejection::DistributionUnmet { distribution: criteria.distribution });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::range_config::RangeConfig;

	fn stats_of(numbers: &[u32]) -> Stats {
		Stats::compute(numbers, &RangeConfig::default())
	}

	#[test]
	fn test_unconstrained_accepts_everything() {
		assert_eq!(validate(&stats_of(&[1, 2, 3, 4, 5]), &Criteria::default(), 5), Ok(()));
	}

	#[test]
	fn test_odd_even() {
		let stats = stats_of(&[1, 3, 5, 8, 10]);
		let criteria = Criteria { odd: Criterion::Exactly(3), ..Criteria::default() };
		assert_eq!(validate(&stats, &criteria, 5), Ok(()));

		let criteria = Criteria { odd: Criterion::Exactly(2), ..Criteria::default() };
		assert_eq!(validate(&stats, &criteria, 5), Err(Rejection::OddCount { expected: 2, actual: 3 }));

		let criteria = Criteria { even: Criterion::Exactly(3), ..Criteria::default() };
		assert_eq!(validate(&stats, &criteria, 5), Err(Rejection::EvenCount { expected: 3, actual: 2 }));
	}

	#[test]
	fn test_individual_band() {
		let stats = stats_of(&[1, 2, 20, 21, 35]);
		let criteria = Criteria { mid: Criterion::Exactly(1), ..Criteria::default() };
		assert_eq!(
			validate(&stats, &criteria, 5),
			Err(Rejection::BandCount { band: Band::Mid, expected: 1, actual: 2 })
		);
	}

	#[test]
	fn test_band_sum_mismatch_reported_before_band_counts() {
		let stats = stats_of(&[1, 2, 20, 21, 35]);
		let criteria = Criteria {
			low: Criterion::Exactly(2),
			mid: Criterion::Exactly(2),
			high: Criterion::Exactly(2),
			odd: Criterion::Exactly(0),
			..Criteria::default()
		};
		assert_eq!(
			validate(&stats, &criteria, 5),
			Err(Rejection::BandSumMismatch { low: 2, mid: 2, high: 2, main_count: 5 })
		);
	}

	#[test]
	fn test_band_sum_matching_line_size_passes() {
		let stats = stats_of(&[1, 2, 20, 21, 35]);
		let criteria = Criteria {
			low: Criterion::Exactly(2),
			mid: Criterion::Exactly(2),
			high: Criterion::Exactly(1),
			..Criteria::default()
		};
		assert_eq!(validate(&stats, &criteria, 5), Ok(()));
	}

	#[test]
	fn test_band_sum_overflow_is_a_mismatch() {
		let stats = stats_of(&[1, 2, 20, 21, 35]);
		let criteria = Criteria {
			low: Criterion::parse("low", &usize::MAX.to_string()).unwrap(),
			mid: Criterion::Exactly(usize::MAX),
			high: Criterion::Exactly(2),
			..Criteria::default()
		};
		assert!(matches!(
			validate(&stats, &criteria, 5),
			Err(Rejection::BandSumMismatch { high: 2, main_count: 5, .. })
		));
	}

	#[test]
	fn test_band_sum_not_applied_when_one_band_is_any() {
		let stats = stats_of(&[1, 2, 20, 21, 35]);
		let criteria = Criteria { low: Criterion::Exactly(2), mid: Criterion::Exactly(2), ..Criteria::default() };
		assert_eq!(validate(&stats, &criteria, 6), Ok(()));
	}

	#[test]
	fn test_dominant_distributions() {
		let low_heavy = stats_of(&[1, 5, 9, 20, 35]);
		let low = Criteria { distribution: Distribution::Low, ..Criteria::default() };
		let high = Criteria { distribution: Distribution::High, ..Criteria::default() };
		let mid = Criteria { distribution: Distribution::Mid, ..Criteria::default() };
		assert_eq!(validate(&low_heavy, &low, 5), Ok(()));
		assert_eq!(
			validate(&low_heavy, &high, 5),
			Err(Rejection::DistributionUnmet { distribution: Distribution::High })
		);
		assert!(validate(&low_heavy, &mid, 5).is_err());
		assert_eq!(validate(&stats_of(&[16, 20, 30, 31, 1]), &mid, 5), Ok(()));
	}

	#[test]
	fn test_balanced() {
		let balanced = Criteria { distribution: Distribution::Balanced, ..Criteria::default() };
		assert_eq!(validate(&stats_of(&[1, 16, 31, 32, 33]), &balanced, 5), Ok(()));
		assert!(validate(&stats_of(&[1, 2, 31, 32, 33]), &balanced, 5).is_err());
	}

	#[test]
	fn test_distribution_and_exact_bands_both_apply() {
		let stats = stats_of(&[1, 2, 16, 31, 32]);
		let criteria = Criteria {
			low: Criterion::Exactly(2),
			distribution: Distribution::Low,
			..Criteria::default()
		};
		assert_eq!(
			validate(&stats, &criteria, 5),
			Err(Rejection::DistributionUnmet { distribution: Distribution::Low })
		);
	}

	#[test]
	fn test_rejection_display() {
		let reason = Rejection::BandSumMismatch { low: 2, mid: 2, high: 2, main_count: 5 };
		assert_eq!(reason.to_string(), "low + mid + high = 2 + 2 + 2 but a line holds 5 numbers");
		let reason = Rejection::BandCount { band: Band::High, expected: 3, actual: 1 };
		assert_eq!(reason.to_string(), "expected 3 high numbers, drew 1");
	}
}
