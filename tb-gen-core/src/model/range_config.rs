use serde::Serialize;

use crate::error::GeneratorError;
use super::stats::Band;

/// Numeric bounds of a draw.
///
/// Describes where main and bonus numbers come from, how many main numbers a
/// line holds, and where the low/mid/high bands split the main range.
///
/// # Invariants
/// - `main_min <= main_max` and `bonus_min <= bonus_max`
/// - `main_count >= 1` and `main_max - main_min + 1 >= main_count`
/// - `main_min <= low_max < mid_max <= main_max`
///
/// The default value is the Thunderball layout: 5 numbers in 1..=39,
/// bonus in 1..=14, bands split at 15 and 30.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeConfig {
	main_min: u32,
	main_max: u32,
	bonus_min: u32,
	bonus_max: u32,
	main_count: usize,
	/// Last number of the low band (inclusive).
	low_max: u32,
	/// Last number of the mid band (inclusive).
	mid_max: u32,
}

impl Default for RangeConfig {
	fn default() -> Self {
		Self {
			main_min: 1,
			main_max: 39,
			bonus_min: 1,
			bonus_max: 14,
			main_count: 5,
			low_max: 15,
			mid_max: 30,
		}
	}
}

impl RangeConfig {
	/// Creates a custom range configuration.
	///
	/// # Errors
	/// Returns `GeneratorError::InvalidRange` if any invariant is violated.
	pub fn new(
		main: (u32, u32),
		bonus: (u32, u32),
		main_count: usize,
		bands: (u32, u32),
	) -> Result<Self, GeneratorError> {
		let (main_min, main_max) = main;
		let (bonus_min, bonus_max) = bonus;
		let (low_max, mid_max) = bands;

		if main_min > main_max {
			return Err(GeneratorError::InvalidRange(format!("main range {main_min}..={main_max} is empty")));
		}
		if bonus_min > bonus_max {
			return Err(GeneratorError::InvalidRange(format!("bonus range {bonus_min}..={bonus_max} is empty")));
		}
		if main_count == 0 {
			return Err(GeneratorError::InvalidRange("main count must be >= 1".to_owned()));
		}
		let span = (main_max - main_min) as usize + 1;
		if span < main_count {
			return Err(GeneratorError::InvalidRange(format!(
				"cannot draw {main_count} distinct numbers from {span} candidates"
			)));
		}
		if !(main_min <= low_max && low_max < mid_max && mid_max <= main_max) {
			return Err(GeneratorError::InvalidRange(format!(
				"band thresholds {low_max}/{mid_max} do not split {main_min}..={main_max}"
			)));
		}

		Ok(Self { main_min, main_max, bonus_min, bonus_max, main_count, low_max, mid_max })
	}

	pub fn main_min(&self) -> u32 {
		self.main_min
	}

	pub fn main_max(&self) -> u32 {
		self.main_max
	}

	pub fn bonus_min(&self) -> u32 {
		self.bonus_min
	}

	pub fn bonus_max(&self) -> u32 {
		self.bonus_max
	}

	/// Number of main numbers per line.
	pub fn main_count(&self) -> usize {
		self.main_count
	}

	/// Classifies a main number into its band.
	///
	/// Shared by validation and presentation so both agree on thresholds.
	pub fn band_of(&self, number: u32) -> Band {
		if number <= self.low_max {
			Band::Low
		} else if number <= self.mid_max {
			Band::Mid
		} else {
			Band::High
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_thunderball() {
		let config = RangeConfig::default();
		assert_eq!((config.main_min(), config.main_max()), (1, 39));
		assert_eq!((config.bonus_min(), config.bonus_max()), (1, 14));
		assert_eq!(config.main_count(), 5);
	}

	#[test]
	fn test_default_passes_own_validation() {
		let config = RangeConfig::new((1, 39), (1, 14), 5, (15, 30)).unwrap();
		assert_eq!(config, RangeConfig::default());
	}

	#[test]
	fn test_band_boundaries() {
		let config = RangeConfig::default();
		assert_eq!(config.band_of(1), Band::Low);
		assert_eq!(config.band_of(15), Band::Low);
		assert_eq!(config.band_of(16), Band::Mid);
		assert_eq!(config.band_of(30), Band::Mid);
		assert_eq!(config.band_of(31), Band::High);
		assert_eq!(config.band_of(39), Band::High);
	}

	#[test]
	fn test_rejects_too_small_main_range() {
		let result = RangeConfig::new((1, 4), (1, 14), 5, (2, 3));
		assert!(matches!(result, Err(GeneratorError::InvalidRange(_))));
	}

	#[test]
	fn test_accepts_exact_main_range() {
		assert!(RangeConfig::new((1, 5), (1, 1), 5, (2, 4)).is_ok());
	}

	#[test]
	fn test_rejects_empty_ranges_and_zero_count() {
		assert!(RangeConfig::new((10, 1), (1, 14), 5, (3, 6)).is_err());
		assert!(RangeConfig::new((1, 39), (14, 1), 5, (15, 30)).is_err());
		assert!(RangeConfig::new((1, 39), (1, 14), 0, (15, 30)).is_err());
	}

	#[test]
	fn test_rejects_bad_band_thresholds() {
		assert!(RangeConfig::new((1, 39), (1, 14), 5, (30, 15)).is_err());
		assert!(RangeConfig::new((1, 39), (1, 14), 5, (15, 40)).is_err());
		assert!(RangeConfig::new((10, 39), (1, 14), 5, (5, 30)).is_err());
	}
}
