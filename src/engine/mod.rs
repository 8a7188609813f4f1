//! The graph engine: node store, proximity connectivity, shortest paths and
//! path playback, behind a single [`Engine`] context the host drives.

mod config;
pub mod connectivity;
mod error;
pub mod geometry;
pub mod graph;
pub mod shortest_path;
pub mod traversal;

use std::time::Duration;

use log::debug;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use geometry::{Point, distance};
pub use graph::{Adjacency, Graph, Node, NodeId, UNREACHED};
pub use traversal::{Traversal, TraversalState, TraversalStep};

/// Everything the host mutates: the graph, the live proximity threshold and
/// the traversal playback. All mutation goes through `&mut self`, so a
/// reconcile pass and a shortest-path run can never interleave.
#[derive(Clone, Debug)]
pub struct Engine {
	graph: Graph,
	range: f64,
	traversal: Traversal,
}

impl Engine {
	pub fn new(config: EngineConfig) -> Self {
		Self {
			graph: Graph::new(),
			range: config.default_range,
			traversal: Traversal::new(config.step_delay),
		}
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// Threshold used by the most recent [`Engine::reconcile`].
	pub fn range(&self) -> f64 {
		self.range
	}

	pub fn traversal(&self) -> &Traversal {
		&self.traversal
	}

	pub fn create_node(&mut self, x: f64, y: f64) -> NodeId {
		self.graph.create_node(Point::new(x, y))
	}

	pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) -> Result<()> {
		self.graph.move_node(id, Point::new(x, y))
	}

	/// Per-tick connectivity pass at `range`.
	pub fn reconcile(&mut self, range: f64) {
		self.range = range;
		connectivity::reconcile(&mut self.graph, range);
	}

	/// Runs shortest paths from `source`, or from the master node when `None`.
	/// With no nodes at all there is nothing to do.
	pub fn compute_shortest_paths(&mut self, source: Option<NodeId>) -> Result<()> {
		let Some(source) = source.or_else(|| self.graph.master()) else {
			debug!("shortest paths requested on an empty graph");
			return Ok(());
		};
		shortest_path::compute_shortest_paths(&mut self.graph, source)
	}

	/// Starts playback from `target`, superseding any playback in progress.
	pub fn begin_traversal(&mut self, target: NodeId) -> Result<u64> {
		self.traversal.begin(&mut self.graph, target)
	}

	pub fn cancel_traversal(&mut self) {
		self.traversal.cancel(&mut self.graph);
	}

	/// Advances playback by `elapsed`.
	pub fn tick(&mut self, elapsed: Duration) -> Vec<TraversalStep> {
		self.traversal.advance(&mut self.graph, elapsed)
	}

	pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
		shortest_path::path_to(&self.graph, target)
	}
}

impl Default for Engine {
	fn default() -> Self {
		Self::new(EngineConfig::default())
	}
}
