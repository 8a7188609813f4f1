use std::time::Duration;

use log::{info, warn};

use crate::engine::{Engine, EngineConfig, NodeId, Point, TraversalStep};

/// Drawn radius of a node, also used for hit testing.
pub const NODE_RADIUS: f64 = 20.0;
pub const RANGE_MIN: f64 = 0.0;
pub const RANGE_MAX: f64 = 500.0;
pub const RANGE_STEP: f64 = 1.0;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<NodeId>,
}

/// What a mouse press on the canvas turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
	Created(NodeId),
	Dragging(NodeId),
	Tracing(NodeId),
}

pub struct CanvasState {
	pub engine: Engine,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	last_frame_ms: Option<f64>,
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			engine: Engine::new(EngineConfig::default()),
			drag: DragState::default(),
			width,
			height,
			last_frame_ms: None,
		}
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<NodeId> {
		self.engine.graph().node_at(Point::new(x, y), NODE_RADIUS)
	}

	/// A press on a node starts a drag, or a trace back to the master when
	/// `tracing` is on. A press on empty canvas places a new node.
	pub fn press(&mut self, x: f64, y: f64, tracing: bool) -> Press {
		match self.node_at_position(x, y) {
			Some(id) if tracing => {
				if let Err(err) = self.engine.begin_traversal(id) {
					warn!("could not trace node {}: {}", id, err);
				}
				Press::Tracing(id)
			}
			Some(id) => {
				self.drag.active = true;
				self.drag.node = Some(id);
				Press::Dragging(id)
			}
			None => Press::Created(self.engine.create_node(x, y)),
		}
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			return;
		}
		if let Some(id) = self.drag.node {
			if let Err(err) = self.engine.move_node(id, x, y) {
				warn!("dropping drag of node {}: {}", id, err);
				self.release();
			}
		}
	}

	pub fn release(&mut self) {
		self.drag.active = false;
		self.drag.node = None;
	}

	pub fn solve(&mut self) {
		if let Err(err) = self.engine.compute_shortest_paths(None) {
			warn!("shortest paths failed: {}", err);
		}
	}

	/// One animation frame at `now_ms` (a millisecond clock): reconnect at
	/// `range`, then let playback catch up with the time since the last frame.
	pub fn tick(&mut self, now_ms: f64, range: f64) {
		self.engine.reconcile(range);

		let dt_ms = self
			.last_frame_ms
			.map_or(0.0, |last| (now_ms - last).max(0.0));
		self.last_frame_ms = Some(now_ms);

		for step in self.engine.tick(Duration::from_secs_f64(dt_ms / 1000.0)) {
			if step == TraversalStep::Finished {
				info!("trace {} reached the end", self.engine.traversal().generation());
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::TraversalState;

	#[test]
	fn test_press_on_empty_space_creates_node() {
		let mut state = CanvasState::new(800.0, 600.0);
		assert_eq!(state.press(100.0, 100.0, false), Press::Created(NodeId(0)));
		assert_eq!(state.press(300.0, 100.0, true), Press::Created(NodeId(1)));
		assert_eq!(state.engine.graph().master(), Some(NodeId(0)));
	}

	#[test]
	fn test_press_on_node_drags_it() {
		let mut state = CanvasState::new(800.0, 600.0);
		state.press(100.0, 100.0, false);

		assert_eq!(state.press(110.0, 105.0, false), Press::Dragging(NodeId(0)));
		state.drag_to(200.0, 250.0);
		state.release();
		state.drag_to(0.0, 0.0);

		let node = state.engine.graph().node(NodeId(0)).unwrap();
		assert_eq!(node.position(), Point::new(200.0, 250.0));
		assert_eq!(state.engine.graph().len(), 1);
	}

	#[test]
	fn test_trace_plays_back_over_frames() {
		let mut state = CanvasState::new(800.0, 600.0);
		state.press(100.0, 100.0, false);
		state.press(180.0, 100.0, false);
		state.tick(0.0, 100.0);
		state.solve();

		assert_eq!(state.press(180.0, 100.0, true), Press::Tracing(NodeId(1)));
		assert_eq!(
			state.engine.traversal().state(),
			TraversalState::Active(NodeId(1))
		);

		state.tick(16.0, 100.0);
		state.tick(1016.0, 100.0);
		assert_eq!(
			state.engine.traversal().state(),
			TraversalState::Active(NodeId(0))
		);

		state.tick(2016.0, 100.0);
		assert_eq!(state.engine.traversal().state(), TraversalState::Done);
	}

	#[test]
	fn test_tick_follows_range() {
		let mut state = CanvasState::new(800.0, 600.0);
		state.press(100.0, 100.0, false);
		state.press(180.0, 100.0, false);

		state.tick(0.0, 100.0);
		assert_eq!(state.engine.graph().edge_count(), 1);
		state.tick(16.0, 50.0);
		assert_eq!(state.engine.graph().edge_count(), 0);
		assert_eq!(state.engine.range(), 50.0);
	}
}
