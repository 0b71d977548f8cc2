//! Scripted execution log: a fixed list of lines revealed one per tick.

use std::time::Duration;

use log::{info, warn};

use crate::error::PlaybackError;

/// One scheduled delivery: entry `index` becomes visible `at` after start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
	pub index: usize,
	pub at: Duration,
}

/// The ticks produced by a single [`Playback::start`].
#[derive(Clone, Copy, Debug)]
pub struct Schedule {
	len: usize,
	interval: Duration,
}

impl Schedule {
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn ticks(self) -> impl Iterator<Item = Tick> {
		let interval = self.interval;
		(0..self.len).map(move |index| Tick {
			index,
			at: interval * index as u32,
		})
	}
}

#[derive(Clone, Debug)]
pub struct Playback {
	steps: &'static [&'static str],
	interval: Duration,
	log: Vec<&'static str>,
	running: bool,
}

impl Playback {
	pub fn new(steps: &'static [&'static str], interval: Duration) -> Self {
		Self {
			steps,
			interval,
			log: Vec::with_capacity(steps.len()),
			running: false,
		}
	}

	pub fn log(&self) -> &[&'static str] {
		&self.log
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Clears the log and marks the run as in progress.
	///
	/// Nothing is appended here; the caller delivers each tick of the
	/// returned schedule once its offset has elapsed.
	pub fn start(&mut self) -> Result<Schedule, PlaybackError> {
		if self.running {
			return Err(PlaybackError::AlreadyRunning);
		}
		self.log.clear();
		self.running = !self.steps.is_empty();
		info!("playback started with {} steps", self.steps.len());
		Ok(Schedule {
			len: self.steps.len(),
			interval: self.interval,
		})
	}

	/// Appends the entry for `tick`. Returns whether anything was appended.
	pub fn deliver(&mut self, tick: Tick) -> bool {
		if !self.running || tick.index != self.log.len() {
			warn!(
				"dropping tick {} (log has {} entries)",
				tick.index,
				self.log.len()
			);
			return false;
		}
		let Some(&step) = self.steps.get(tick.index) else {
			return false;
		};
		self.log.push(step);
		if self.log.len() == self.steps.len() {
			self.running = false;
			info!("playback finished after {:?}", tick.at);
		}
		true
	}
}
