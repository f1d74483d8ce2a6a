use crate::model::line::GeneratedLine;
use crate::model::range_config::RangeConfig;

/// Turns a generated line into something displayable.
pub trait LineFormatter {
	fn format_line(&self, line: &GeneratedLine) -> String;

	/// Formats every line, one per row.
	fn format_lines(&self, lines: &[GeneratedLine]) -> String {
		lines.iter().map(|line| self.format_line(line)).collect::<Vec<_>>().join("\n")
	}
}

/// Plain-text formatter.
///
/// Output looks like:
/// `03(L) 15(L) 16(M) 30(M) 31(H)  + TB 09  [3 odd / 2 even | 2 low / 2 mid / 1 high]`
///
/// Band tags come from `RangeConfig::band_of`, the same classifier used
/// during validation.
#[derive(Clone, Debug)]
pub struct TextFormatter {
	config: RangeConfig,
	/// Append `(L)`, `(M)` or `(H)` to each main number.
	pub show_bands: bool,
	/// Append the stats summary.
	pub show_stats: bool,
}

impl TextFormatter {
	pub fn new(config: RangeConfig) -> Self {
		Self { config, show_bands: true, show_stats: true }
	}
}

impl Default for TextFormatter {
	fn default() -> Self {
		Self::new(RangeConfig::default())
	}
}

impl LineFormatter for TextFormatter {
	fn format_line(&self, line: &GeneratedLine) -> String {
		let main = line
			.main_numbers()
			.iter()
			.map(|&n| {
				if self.show_bands {
					format!("{n:02}({})", self.config.band_of(n).tag())
				} else {
					format!("{n:02}")
				}
			})
			.collect::<Vec<_>>()
			.join(" ");

		let mut out = format!("{main}  + TB {:02}", line.bonus());
		if self.show_stats {
			out.push_str(&format!("  [{}]", line.stats()));
		}
		out
	}
}
