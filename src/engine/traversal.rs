//! Timed playback of a predecessor chain.
//!
//! The walk is driven by the caller's clock: each frame the host reports how
//! much time has passed and the walk advances one node per elapsed step delay.
//! Starting a new walk tears down the one in flight, so two walks never share
//! the highlight.

use std::time::Duration;

use log::{debug, trace};

use super::error::{Error, Result};
use super::graph::{Graph, NodeId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalState {
	#[default]
	Idle,
	/// `NodeId` is the node currently highlighted.
	Active(NodeId),
	Done,
}

/// A state change produced while advancing the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalStep {
	/// Highlight moved to this node.
	Moved(NodeId),
	/// The root was reached (or the target had no predecessor) and the highlight cleared.
	Finished,
}

#[derive(Clone, Debug)]
pub struct Traversal {
	state: TraversalState,
	generation: u64,
	step_delay: Duration,
	elapsed: Duration,
}

impl Traversal {
	pub fn new(step_delay: Duration) -> Self {
		Self {
			state: TraversalState::Idle,
			generation: 0,
			step_delay,
			elapsed: Duration::ZERO,
		}
	}

	pub fn state(&self) -> TraversalState {
		self.state
	}

	/// Incremented on every [`Traversal::begin`]. Lets a host tell walks apart.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn step_delay(&self) -> Duration {
		self.step_delay
	}

	pub fn is_active(&self) -> bool {
		matches!(self.state, TraversalState::Active(_))
	}

	/// Starts walking from `target`, cancelling any walk in progress.
	pub fn begin(&mut self, graph: &mut Graph, target: NodeId) -> Result<u64> {
		if !graph.contains(target) {
			return Err(Error::UnknownNode(target));
		}
		self.cancel(graph);

		self.generation += 1;
		self.elapsed = Duration::ZERO;
		graph.node_mut(target)?.selected = true;
		self.state = TraversalState::Active(target);
		debug!("traversal {} started at node {}", self.generation, target);
		Ok(self.generation)
	}

	/// Stops the current walk and clears its highlight. No-op when idle.
	pub fn cancel(&mut self, graph: &mut Graph) {
		if let TraversalState::Active(current) = self.state {
			if let Ok(node) = graph.node_mut(current) {
				node.selected = false;
			}
			debug!("traversal {} cancelled at node {}", self.generation, current);
		}
		self.state = TraversalState::Idle;
		self.elapsed = Duration::ZERO;
	}

	/// Feeds `dt` of elapsed time into the walk and returns the steps taken.
	/// A long frame can take several steps at once.
	pub fn advance(&mut self, graph: &mut Graph, dt: Duration) -> Vec<TraversalStep> {
		let mut steps = Vec::new();
		if !self.is_active() {
			return steps;
		}

		self.elapsed += dt;
		while self.elapsed >= self.step_delay {
			let TraversalState::Active(current) = self.state else {
				break;
			};
			self.elapsed -= self.step_delay;
			steps.push(self.step(graph, current));
		}
		steps
	}

	fn step(&mut self, graph: &mut Graph, current: NodeId) -> TraversalStep {
		let predecessor = match graph.node_mut(current) {
			Ok(node) => {
				node.selected = false;
				node.predecessor
			}
			Err(_) => None,
		};

		match predecessor.and_then(|prev| graph.node_mut(prev).ok()) {
			Some(prev) => {
				prev.selected = true;
				let id = prev.id();
				self.state = TraversalState::Active(id);
				trace!("traversal {} moved {} -> {}", self.generation, current, id);
				TraversalStep::Moved(id)
			}
			None => {
				self.state = TraversalState::Done;
				self.elapsed = Duration::ZERO;
				debug!("traversal {} done at node {}", self.generation, current);
				TraversalStep::Finished
			}
		}
	}
}
