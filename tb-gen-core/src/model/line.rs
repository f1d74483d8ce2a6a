use serde::Serialize;

use super::range_config::RangeConfig;
use super::stats::Stats;

/// One accepted draw.
///
/// Built in one step from a validated candidate and never mutated after.
///
/// # Invariants
/// - `main_numbers` are distinct and sorted ascending
/// - `stats` is derived from `main_numbers`
///
/// Lines only come out of the generator; they cannot be deserialized:
/// ```compile_fail
/// let line: tb_gen_core::GeneratedLine = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLine {
	main_numbers: Vec<u32>,
	bonus: u32,
	stats: Stats,
}

impl GeneratedLine {
	/// Builds a line from already sorted, distinct main numbers.
	pub(crate) fn new(main_numbers: Vec<u32>, bonus: u32, config: &RangeConfig) -> Self {
		let stats = Stats::compute(&main_numbers, config);
		Self { main_numbers, bonus, stats }
	}

	/// Main numbers, ascending.
	pub fn main_numbers(&self) -> &[u32] {
		&self.main_numbers
	}

	pub fn bonus(&self) -> u32 {
		self.bonus
	}

	pub fn stats(&self) -> &Stats {
		&self.stats
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_derives_stats() {
		let line = GeneratedLine::new(vec![2, 9, 17, 28, 36], 7, &RangeConfig::default());
		assert_eq!(line.main_numbers(), &[2, 9, 17, 28, 36]);
		assert_eq!(line.bonus(), 7);
		assert_eq!(line.stats().odd_count, 2);
		assert_eq!(line.stats().even_count, 3);
		assert_eq!(line.stats().low_count, 2);
		assert_eq!(line.stats().mid_count, 2);
		assert_eq!(line.stats().high_count, 1);
	}

	#[test]
	fn test_serialize_shape() {
		let line = GeneratedLine::new(vec![1, 2, 3, 4, 5], 14, &RangeConfig::default());
		let json = serde_json::to_value(&line).unwrap();
		assert_eq!(json["main_numbers"], serde_json::json!([1, 2, 3, 4, 5]));
		assert_eq!(json["bonus"], 14);
		assert_eq!(json["stats"]["low_count"], 5);
	}
}
