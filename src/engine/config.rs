use std::time::Duration;

/// Tunables for a fresh [`Engine`](super::Engine).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
	/// Proximity threshold used until the host supplies its own.
	pub default_range: f64,
	/// How long each node stays highlighted during traversal playback.
	pub step_delay: Duration,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			default_range: 100.0,
			step_delay: Duration::from_secs(1),
		}
	}
}
