use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::Serialize;

use crate::model::criteria::Criteria;
use crate::model::generate_options::GenerateOptions;
use crate::model::line::GeneratedLine;
use crate::model::range_config::RangeConfig;
use crate::model::stats::Stats;
use crate::model::validation::{self, Rejection};

/// Attempts allowed per line before the slot is given up.
pub const MAX_ATTEMPTS: usize = 1000;

/// A requested line that could not be produced within the retry budget.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExhaustedSlot {
	/// 1-based index of the slot.
	pub slot: usize,
	/// Number of draws tried.
	pub attempts: usize,
	/// Why the last draw was rejected.
	pub reason: Option<Rejection>,
}

/// Outcome of a generation run.
///
/// `lines` keeps the order of the slots that succeeded; every other slot is
/// listed in `exhausted`.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
	pub lines: Vec<GeneratedLine>,
	pub exhausted: Vec<ExhaustedSlot>,
}

/// Draws lines of numbers that match user criteria.
///
/// # Responsibilities
/// - Draw distinct main numbers and an independent bonus number
/// - Filter draws through `validation::validate`
/// - Retry each slot up to `MAX_ATTEMPTS` times, then warn and drop it
///
/// The random source is a type parameter so tests can plug a seeded RNG;
/// `Generator::new` uses the thread-local one.
#[derive(Debug)]
pub struct Generator<R: Rng = ThreadRng> {
	config: RangeConfig,
	rng: R,
}

impl Generator<ThreadRng> {
	/// Creates a generator with the default ranges and the thread-local RNG.
	pub fn new() -> Self {
		Self::with_rng(RangeConfig::default(), rand::rng())
	}
}

impl Default for Generator<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator over `config` drawing from `rng`.
	pub fn with_rng(config: RangeConfig, rng: R) -> Self {
		Self { config, rng }
	}

	pub fn config(&self) -> &RangeConfig {
		&self.config
	}

	/// Generates up to `options.lines` lines matching `options.criteria`.
	///
	/// Slots that exhaust their retry budget are logged and left out, so the
	/// result may be shorter than requested.
	pub fn generate(&mut self, options: &GenerateOptions) -> Vec<GeneratedLine> {
		self.generate_report(options).lines
	}

	/// Same as `generate`, but also reports which slots were dropped and why.
	pub fn generate_report(&mut self, options: &GenerateOptions) -> GenerationReport {
		let mut report = GenerationReport::default();

		for slot in 1..=options.lines {
			match self.draw_valid_line(&options.criteria) {
				Ok((line, attempts)) => {
					debug!("Line {slot} accepted after {attempts} attempt(s)");
					report.lines.push(line);
				}
				Err(reason) => {
					match &reason {
						Some(r) => warn!("Could not generate valid line {slot} after {MAX_ATTEMPTS} attempts (last rejection: {r})"),
						None => warn!("Could not generate valid line {slot} after {MAX_ATTEMPTS} attempts"),
					}
					report.exhausted.push(ExhaustedSlot { slot, attempts: MAX_ATTEMPTS, reason });
				}
			}
		}

		report
	}

	/// Retries draws until one passes `criteria`.
	///
	/// Returns the accepted line with the number of attempts used, or the
	/// last rejection once the budget is spent.
	fn draw_valid_line(&mut self, criteria: &Criteria) -> Result<(GeneratedLine, usize), Option<Rejection>> {
		let mut last_rejection = None;

		for attempt in 1..=MAX_ATTEMPTS {
			let main_numbers = self.draw_main_numbers();
			let bonus = self.rng.random_range(self.config.bonus_min()..=self.config.bonus_max());

			let stats = Stats::compute(&main_numbers, &self.config);
			match validation::validate(&stats, criteria, self.config.main_count()) {
				Ok(()) => return Ok((GeneratedLine::new(main_numbers, bonus, &self.config), attempt)),
				Err(rejection) => last_rejection = Some(rejection),
			}
		}

		Err(last_rejection)
	}

	/// Draws `main_count` distinct numbers, sorted ascending.
	///
	/// Redraws on collision; the range is wide enough relative to the count
	/// that this terminates quickly.
	fn draw_main_numbers(&mut self) -> Vec<u32> {
		let count = self.config.main_count();
		let range = self.config.main_min()..=self.config.main_max();

		let mut seen = HashSet::with_capacity(count);
		let mut numbers = Vec::with_capacity(count);
		while numbers.len() < count {
			let n = self.rng.random_range(range.clone());
			if seen.insert(n) {
				numbers.push(n);
			}
		}

		numbers.sort_unstable();
		numbers
	}
}
