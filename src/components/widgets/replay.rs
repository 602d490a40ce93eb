//! Scripted attack replay: a fixed list of log lines revealed one per tick.

/// How loud a replayed event is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventLevel {
	/// A partner is compromised.
	Critical,
	/// Risk is spreading.
	High,
	/// Preventive action.
	Medium,
}

impl EventLevel {
	/// CSS class for the level badge.
	pub fn class(self) -> &'static str {
		match self {
			EventLevel::Critical => "level-critical",
			EventLevel::High => "level-high",
			EventLevel::Medium => "level-medium",
		}
	}
}

/// One scripted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayEvent {
	/// Wall-clock label.
	pub time: &'static str,
	/// Partner the event concerns.
	pub partner: &'static str,
	/// What happened.
	pub text: &'static str,
	/// Severity badge.
	pub level: EventLevel,
}

/// The scenario played by the attack replay widget.
pub const ATTACK_SCRIPT: [ReplayEvent; 6] = [
	ReplayEvent {
		time: "14:32:15",
		partner: "Micrologic",
		text: "Vulnerability detected: CVE-2025-1873",
		level: EventLevel::Critical,
	},
	ReplayEvent {
		time: "14:32:18",
		partner: "INSO INC",
		text: "Risk propagation detected",
		level: EventLevel::High,
	},
	ReplayEvent {
		time: "14:32:22",
		partner: "CSSDM",
		text: "Compromised partner detected",
		level: EventLevel::High,
	},
	ReplayEvent {
		time: "14:32:25",
		partner: "COGINOV inc.",
		text: "Preventive scan triggered",
		level: EventLevel::Medium,
	},
	ReplayEvent {
		time: "14:32:28",
		partner: "Zens Canada Corp.",
		text: "Preventive scan triggered",
		level: EventLevel::Medium,
	},
	ReplayEvent {
		time: "14:32:30",
		partner: "Collective",
		text: "All partners notified",
		level: EventLevel::Medium,
	},
];

/// Playback position over a script. Advanced by a one-second interval
/// while running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Replay {
	revealed: usize,
	running: bool,
	len: usize,
}

impl Replay {
	/// Stopped playback over `len` events.
	pub fn new(len: usize) -> Self {
		Self {
			revealed: 0,
			running: false,
			len,
		}
	}

	/// Number of events shown so far.
	pub fn revealed(&self) -> usize {
		self.revealed
	}

	/// Whether ticks currently reveal events.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Whether every event has been shown.
	pub fn is_finished(&self) -> bool {
		self.revealed >= self.len
	}

	/// Starts or resumes. A finished replay starts over.
	pub fn start(&mut self) {
		if self.is_finished() {
			self.revealed = 0;
		}
		self.running = self.len > 0;
	}

	/// Stops revealing without losing the position.
	pub fn pause(&mut self) {
		self.running = false;
	}

	/// Back to an empty, stopped log.
	pub fn reset(&mut self) {
		self.revealed = 0;
		self.running = false;
	}

	/// Reveals the next event if running. Stops after the last one.
	/// Returns whether anything changed.
	pub fn tick(&mut self) -> bool {
		if !self.running {
			return false;
		}
		self.revealed = (self.revealed + 1).min(self.len);
		if self.is_finished() {
			self.running = false;
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ticks_do_nothing_until_started() {
		let mut replay = Replay::new(ATTACK_SCRIPT.len());
		assert!(!replay.tick());
		assert_eq!(replay.revealed(), 0);
	}

	#[test]
	fn reveals_one_event_per_tick_then_stops() {
		let mut replay = Replay::new(3);
		replay.start();
		assert!(replay.tick());
		assert!(replay.tick());
		assert_eq!(replay.revealed(), 2);
		assert!(replay.is_running());
		assert!(replay.tick());
		assert!(replay.is_finished());
		assert!(!replay.is_running());
		assert!(!replay.tick());
		assert_eq!(replay.revealed(), 3);
	}

	#[test]
	fn pause_keeps_position_and_restart_rewinds() {
		let mut replay = Replay::new(2);
		replay.start();
		replay.tick();
		replay.pause();
		assert!(!replay.tick());
		assert_eq!(replay.revealed(), 1);

		replay.start();
		replay.tick();
		assert!(replay.is_finished());
		replay.start();
		assert_eq!(replay.revealed(), 0);
		assert!(replay.is_running());

		replay.reset();
		assert_eq!(replay, Replay::new(2));
	}

	#[test]
	fn empty_script_never_runs() {
		let mut replay = Replay::new(0);
		replay.start();
		assert!(!replay.is_running());
	}
}
