use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// Generation itself never fails: a slot that cannot be filled is reported
/// and dropped instead. Only malformed inputs end up here.
///
/// # Variants
/// - `InvalidCriteria`: a criterion that is neither `"any"` nor a
///   non-negative integer, or an unknown distribution name
/// - `InvalidRange`: a `RangeConfig` whose bounds break an invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
	/// A criterion value could not be parsed.
	#[error("Invalid value '{value}' for criterion '{field}'")]
	InvalidCriteria {
		/// Name of the offending option (`odd`, `distribution`, ...)
		field: &'static str,
		/// Raw value as received
		value: String,
	},

	/// Range configuration is inconsistent.
	#[error("Invalid range configuration: {0}")]
	InvalidRange(String),
}
