use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use super::criteria::{Criteria, Criterion, Distribution};

/// Default number of lines requested.
pub const DEFAULT_LINES: usize = 5;

/// Input parameters of a generation run.
///
/// `GenerateOptions` holds the number of lines wanted and the typed
/// `Criteria` every line must satisfy.
///
/// Raw option values (`"any"`, `"3"`, `"balanced"`) go through the string
/// setters, which parse once and fail fast on malformed input. Typed values
/// can be written directly through `criteria`.
///
/// Also deserializable; missing fields take their defaults:
/// ```
/// use tb_gen_core::model::generate_options::GenerateOptions;
///
/// let options: GenerateOptions = serde_json::from_str(r#"{ "lines": 3, "odd": "2" }"#).unwrap();
/// assert_eq!(options.lines, 3);
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerateOptions {
	/// Number of lines requested. The result may hold fewer.
	pub lines: usize,

	/// Filters applied to every line.
	#[serde(flatten)]
	pub criteria: Criteria,
}

impl Default for GenerateOptions {
	fn default() -> Self {
		Self { lines: DEFAULT_LINES, criteria: Criteria::default() }
	}
}

impl GenerateOptions {
	/// Creates options for `lines` lines with no filter.
	pub fn new(lines: usize) -> Self {
		Self { lines, ..Self::default() }
	}

	/// Sets the exact odd count, or `"any"`.
	///
	/// # Errors
	/// Returns an error if the value is neither `"any"` nor a non-negative integer.
	pub fn set_odd(&mut self, value: &str) -> Result<(), GeneratorError> {
		self.criteria.odd = Criterion::parse("odd", value)?;
		Ok(())
	}

	/// Sets the exact even count, or `"any"`.
	///
	/// # Errors
	/// Returns an error if the value is neither `"any"` nor a non-negative integer.
	pub fn set_even(&mut self, value: &str) -> Result<(), GeneratorError> {
		self.criteria.even = Criterion::parse("even", value)?;
		Ok(())
	}

	/// Sets the exact low-band count, or `"any"`.
	///
	/// # Errors
	/// Returns an error if the value is neither `"any"` nor a non-negative integer.
	pub fn set_low(&mut self, value: &str) -> Result<(), GeneratorError> {
		self.criteria.low = Criterion::parse("low", value)?;
		Ok(())
	}

	/// Sets the exact mid-band count, or `"any"`.
	///
	/// # Errors
	/// Returns an error if the value is neither `"any"` nor a non-negative integer.
	pub fn set_mid(&mut self, value: &str) -> Result<(), GeneratorError> {
		self.criteria.mid = Criterion::parse("mid", value)?;
		Ok(())
	}

	/// Sets the exact high-band count, or `"any"`.
	///
	/// # Errors
	/// Returns an error if the value is neither `"any"` nor a non-negative integer.
	pub fn set_high(&mut self, value: &str) -> Result<(), GeneratorError> {
		self.criteria.high = Criterion::parse("high", value)?;
		Ok(())
	}

	/// Sets the distribution preference by name.
	///
	/// # Errors
	/// Returns an error for names other than any, low, mid, high and balanced.
	pub fn set_distribution(&mut self, value: &str) -> Result<(), GeneratorError> {
		self.criteria.distribution = Distribution::parse(value)?;
		Ok(())
	}
}
