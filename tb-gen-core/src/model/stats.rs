use std::fmt;

use serde::Serialize;

use super::range_config::RangeConfig;

/// Section of the main range a number falls in.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Band {
	Low,
	Mid,
	High,
}

impl Band {
	/// Short tag used by the text formatter.
	pub fn tag(&self) -> char {
		match self {
			Band::Low => 'L',
			Band::Mid => 'M',
			Band::High => 'H',
		}
	}
}

impl fmt::Display for Band {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Band::Low => "low",
			Band::Mid => "mid",
			Band::High => "high",
		};
		f.write_str(name)
	}
}

/// Descriptive counts over the main numbers of a line.
///
/// Always derived from the numbers through `Stats::compute`, never set by
/// hand, so the two sums below hold by construction.
///
/// # Invariants
/// - `odd_count + even_count == main_count`
/// - `low_count + mid_count + high_count == main_count`
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
	pub odd_count: usize,
	pub even_count: usize,
	pub low_count: usize,
	pub mid_count: usize,
	pub high_count: usize,
}

impl Stats {
	/// Counts parity and bands of `numbers` using the thresholds of `config`.
	pub fn compute(numbers: &[u32], config: &RangeConfig) -> Self {
		let mut stats = Self::default();
		for &n in numbers {
			if n % 2 == 1 {
				stats.odd_count += 1;
			} else {
				stats.even_count += 1;
			}
			match config.band_of(n) {
				Band::Low => stats.low_count += 1,
				Band::Mid => stats.mid_count += 1,
				Band::High => stats.high_count += 1,
			}
		}
		stats
	}

	/// Count for a single band.
	pub fn band_count(&self, band: Band) -> usize {
		match band {
			Band::Low => self.low_count,
			Band::Mid => self.mid_count,
			Band::High => self.high_count,
		}
	}
}

impl fmt::Display for Stats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} odd / {} even | {} low / {} mid / {} high",
			self.odd_count, self.even_count, self.low_count, self.mid_count, self.high_count
		)
	}
}
