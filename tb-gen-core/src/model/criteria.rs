use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Keyword accepted wherever a constraint may be left open.
pub const ANY: &str = "any";

/// A single count constraint.
///
/// Replaces the loose `"any"` / numeric-string convention with a tagged
/// value decided once, at the boundary.
///
/// # Variants
/// - `Any`: the count is not constrained.
/// - `Exactly(n)`: the count must be exactly `n`. Values above the number
///   of main numbers are accepted and simply never match.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(try_from = "RawCriterion", into = "RawCriterion")]
pub enum Criterion {
	#[default]
	Any,
	Exactly(usize),
}

impl Criterion {
	/// Parses a raw option value for the criterion named `field`.
	///
	/// Accepts `"any"` (any case, surrounding whitespace ignored) or a
	/// non-negative decimal integer.
	///
	/// # Errors
	/// Returns `GeneratorError::InvalidCriteria` for anything else.
	pub fn parse(field: &'static str, value: &str) -> Result<Self, GeneratorError> {
		let trimmed = value.trim();
		if trimmed.eq_ignore_ascii_case(ANY) {
			return Ok(Criterion::Any);
		}
		trimmed
			.parse::<usize>()
			.map(Criterion::Exactly)
			.map_err(|_| GeneratorError::InvalidCriteria { field, value: value.to_owned() })
	}

	/// Returns the expected count, if constrained.
	pub fn expected(&self) -> Option<usize> {
		match self {
			Criterion::Any => None,
			Criterion::Exactly(n) => Some(*n),
		}
	}

	/// Whether `actual` satisfies this criterion.
	pub fn accepts(&self, actual: usize) -> bool {
		match self {
			Criterion::Any => true,
			Criterion::Exactly(n) => *n == actual,
		}
	}
}

impl FromStr for Criterion {
	type Err = GeneratorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Criterion::parse("criterion", s)
	}
}

impl fmt::Display for Criterion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Criterion::Any => f.write_str(ANY),
			Criterion::Exactly(n) => write!(f, "{n}"),
		}
	}
}

/// Wire shape of a criterion: a bare integer or a string.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
enum RawCriterion {
	Count(usize),
	Text(String),
}

impl TryFrom<RawCriterion> for Criterion {
	type Error = GeneratorError;

	fn try_from(raw: RawCriterion) -> Result<Self, Self::Error> {
		match raw {
			RawCriterion::Count(n) => Ok(Criterion::Exactly(n)),
			RawCriterion::Text(s) => s.parse(),
		}
	}
}

impl From<Criterion> for RawCriterion {
	fn from(criterion: Criterion) -> Self {
		match criterion {
			Criterion::Any => RawCriterion::Text(ANY.to_owned()),
			Criterion::Exactly(n) => RawCriterion::Count(n),
		}
	}
}

/// Coarse preference over the shape of band counts.
///
/// Applied on top of the exact band criteria; both must pass.
///
/// # Variants
/// - `Low` / `Mid` / `High`: at least `DOMINANT_BAND_MIN` numbers in that band.
/// - `Balanced`: at least one number in every band.
/// - `Any`: no preference.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Distribution {
	#[default]
	Any,
	Low,
	Mid,
	High,
	Balanced,
}

/// Minimum count required in the preferred band for `Low`, `Mid` and `High`.
pub const DOMINANT_BAND_MIN: usize = 3;

impl Distribution {
	/// Parses a distribution name (case-insensitive).
	///
	/// # Errors
	/// Returns `GeneratorError::InvalidCriteria` for unknown names.
	pub fn parse(value: &str) -> Result<Self, GeneratorError> {
		match value.trim().to_ascii_lowercase().as_str() {
			"any" => Ok(Distribution::Any),
			"low" => Ok(Distribution::Low),
			"mid" => Ok(Distribution::Mid),
			"high" => Ok(Distribution::High),
			"balanced" => Ok(Distribution::Balanced),
			_ => Err(GeneratorError::InvalidCriteria { field: "distribution", value: value.to_owned() }),
		}
	}
}

impl FromStr for Distribution {
	type Err = GeneratorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Distribution::parse(s)
	}
}

impl TryFrom<String> for Distribution {
	type Error = GeneratorError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Distribution::parse(&value)
	}
}

impl fmt::Display for Distribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Distribution::Any => "any",
			Distribution::Low => "low",
			Distribution::Mid => "mid",
			Distribution::High => "high",
			Distribution::Balanced => "balanced",
		};
		f.write_str(name)
	}
}

/// Full set of filters a line must satisfy.
///
/// Every field defaults to "unconstrained", so `Criteria::default()`
/// accepts any draw.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Criteria {
	pub odd: Criterion,
	pub even: Criterion,
	pub low: Criterion,
	pub mid: Criterion,
	pub high: Criterion,
	pub distribution: Distribution,
}
