use std::fmt;

use log::debug;

use super::error::{Error, Result};
use super::geometry::{Point, distance};

/// Distance held by a node no shortest-path run has reached.
pub const UNREACHED: f64 = f64::INFINITY;

/// Stable handle to a node. Ids are handed out in creation order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
	fn slot(self) -> usize {
		self.0 as usize
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One direction of an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjacency {
	pub neighbor: NodeId,
	pub weight: f64,
}

impl Adjacency {
	/// Weight as drawn on the canvas: the distance truncated towards zero.
	pub fn label(&self) -> i64 {
		self.weight.trunc() as i64
	}
}

#[derive(Clone, Debug)]
pub struct Node {
	id: NodeId,
	position: Point,
	is_master: bool,
	pub(crate) selected: bool,
	pub(crate) distance: f64,
	pub(crate) predecessor: Option<NodeId>,
	adjacency: Vec<Adjacency>,
}

impl Node {
	pub fn id(&self) -> NodeId {
		self.id
	}

	pub fn position(&self) -> Point {
		self.position
	}

	pub fn x(&self) -> f64 {
		self.position.x
	}

	pub fn y(&self) -> f64 {
		self.position.y
	}

	pub fn is_master(&self) -> bool {
		self.is_master
	}

	/// Highlighted by the current traversal playback.
	pub fn is_selected(&self) -> bool {
		self.selected
	}

	/// Distance from the source of the last shortest-path run, or [`UNREACHED`].
	pub fn distance(&self) -> f64 {
		self.distance
	}

	pub fn predecessor(&self) -> Option<NodeId> {
		self.predecessor
	}

	pub fn is_reachable(&self) -> bool {
		self.distance.is_finite()
	}

	pub fn adjacency(&self) -> &[Adjacency] {
		&self.adjacency
	}

	pub fn is_connected_to(&self, other: NodeId) -> bool {
		self.adjacency.iter().any(|a| a.neighbor == other)
	}
}

/// Node store. Nodes live in creation order and are never removed, so a node's
/// id doubles as its position in the sequence.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(id.slot())
	}

	pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
		self.nodes.get_mut(id.slot()).ok_or(Error::UnknownNode(id))
	}

	pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
		&mut self.nodes
	}

	pub fn contains(&self, id: NodeId) -> bool {
		id.slot() < self.nodes.len()
	}

	/// The default shortest-path source: the first node ever created.
	pub fn master(&self) -> Option<NodeId> {
		self.nodes.iter().find(|n| n.is_master).map(|n| n.id)
	}

	/// Appends a node at `at`. Only the very first node becomes master.
	pub fn create_node(&mut self, at: Point) -> NodeId {
		let id = NodeId(self.nodes.len() as u32);
		let is_master = self.nodes.is_empty();
		self.nodes.push(Node {
			id,
			position: at,
			is_master,
			selected: false,
			distance: UNREACHED,
			predecessor: None,
			adjacency: Vec::new(),
		});
		debug!("created node {} at ({}, {}) master={}", id, at.x, at.y, is_master);
		id
	}

	/// Relocates a node. Edge weights stay stale until the next reconcile.
	pub fn move_node(&mut self, id: NodeId, to: Point) -> Result<()> {
		self.node_mut(id)?.position = to;
		Ok(())
	}

	/// Adds a symmetric pair of adjacency entries weighted by the current distance.
	/// An existing edge is duplicated, not updated.
	pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<()> {
		self.check(a)?;
		self.check(b)?;
		self.connect_slots(a.slot(), b.slot());
		Ok(())
	}

	/// Drops every adjacency entry between `a` and `b`, in both directions.
	pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> Result<()> {
		self.check(a)?;
		self.check(b)?;
		self.disconnect_slots(a.slot(), b.slot());
		Ok(())
	}

	pub(crate) fn connect_slots(&mut self, i: usize, j: usize) {
		debug_assert_ne!(i, j, "a node cannot be connected to itself");
		let weight = distance(self.nodes[i].position, self.nodes[j].position);
		let (a, b) = (self.nodes[i].id, self.nodes[j].id);
		self.nodes[i].adjacency.push(Adjacency { neighbor: b, weight });
		self.nodes[j].adjacency.push(Adjacency { neighbor: a, weight });
	}

	pub(crate) fn disconnect_slots(&mut self, i: usize, j: usize) {
		let (a, b) = (self.nodes[i].id, self.nodes[j].id);
		self.nodes[i].adjacency.retain(|e| e.neighbor != b);
		self.nodes[j].adjacency.retain(|e| e.neighbor != a);
	}

	/// Calls `f` once per undirected edge, lower id first.
	pub fn visit_edges<F: FnMut(&Node, &Node, &Adjacency)>(&self, mut f: F) {
		for node in &self.nodes {
			for entry in &node.adjacency {
				if entry.neighbor > node.id {
					if let Some(other) = self.node(entry.neighbor) {
						f(node, other, entry);
					}
				}
			}
		}
	}

	/// Number of undirected edges.
	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|n| n.adjacency.len()).sum::<usize>() / 2
	}

	/// First node in creation order whose centre lies within `radius` of `at`.
	pub fn node_at(&self, at: Point, radius: f64) -> Option<NodeId> {
		self.nodes
			.iter()
			.find(|n| distance(n.position, at) <= radius)
			.map(|n| n.id)
	}

	fn check(&self, id: NodeId) -> Result<()> {
		if self.contains(id) { Ok(()) } else { Err(Error::UnknownNode(id)) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph_with(points: &[(f64, f64)]) -> Graph {
		let mut graph = Graph::new();
		for &p in points {
			graph.create_node(p.into());
		}
		graph
	}

	#[test]
	fn test_ids_are_sequential() {
		let graph = graph_with(&[(0.0, 0.0), (5.0, 5.0), (9.0, 1.0)]);
		let ids: Vec<_> = graph.nodes().iter().map(Node::id).collect();
		assert_eq!(ids, vec![NodeId(0), NodeId(1), NodeId(2)]);
	}

	#[test]
	fn test_only_first_node_is_master() {
		let graph = graph_with(&[(0.0, 0.0), (5.0, 5.0), (9.0, 1.0), (3.0, 3.0)]);
		let masters: Vec<_> = graph.nodes().iter().filter(|n| n.is_master()).collect();
		assert_eq!(masters.len(), 1);
		assert_eq!(graph.master(), Some(NodeId(0)));
	}

	#[test]
	fn test_new_node_defaults() {
		let graph = graph_with(&[(1.0, 2.0)]);
		let node = graph.node(NodeId(0)).unwrap();
		assert_eq!(node.position(), Point::new(1.0, 2.0));
		assert_eq!(node.distance(), UNREACHED);
		assert!(!node.is_reachable());
		assert_eq!(node.predecessor(), None);
		assert!(!node.is_selected());
		assert!(node.adjacency().is_empty());
	}

	#[test]
	fn test_connect_is_symmetric() {
		let mut graph = graph_with(&[(0.0, 0.0), (3.0, 4.0)]);
		graph.connect(NodeId(0), NodeId(1)).unwrap();

		let a = graph.node(NodeId(0)).unwrap().adjacency();
		let b = graph.node(NodeId(1)).unwrap().adjacency();
		assert_eq!(a, &[Adjacency { neighbor: NodeId(1), weight: 5.0 }]);
		assert_eq!(b, &[Adjacency { neighbor: NodeId(0), weight: 5.0 }]);
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn test_connect_twice_duplicates() {
		let mut graph = graph_with(&[(0.0, 0.0), (3.0, 4.0)]);
		graph.connect(NodeId(0), NodeId(1)).unwrap();
		graph.connect(NodeId(0), NodeId(1)).unwrap();
		assert_eq!(graph.node(NodeId(0)).unwrap().adjacency().len(), 2);
	}

	#[test]
	fn test_disconnect_removes_all_entries() {
		let mut graph = graph_with(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
		graph.connect(NodeId(0), NodeId(1)).unwrap();
		graph.connect(NodeId(0), NodeId(1)).unwrap();
		graph.connect(NodeId(1), NodeId(2)).unwrap();

		graph.disconnect(NodeId(1), NodeId(0)).unwrap();

		assert!(graph.node(NodeId(0)).unwrap().adjacency().is_empty());
		assert!(!graph.node(NodeId(1)).unwrap().is_connected_to(NodeId(0)));
		assert!(graph.node(NodeId(1)).unwrap().is_connected_to(NodeId(2)));
	}

	#[test]
	fn test_disconnect_without_edge_is_noop() {
		let mut graph = graph_with(&[(0.0, 0.0), (3.0, 4.0)]);
		graph.disconnect(NodeId(0), NodeId(1)).unwrap();
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn test_unknown_node_is_rejected() {
		let mut graph = graph_with(&[(0.0, 0.0)]);
		assert_eq!(
			graph.connect(NodeId(0), NodeId(7)),
			Err(Error::UnknownNode(NodeId(7)))
		);
		assert_eq!(
			graph.move_node(NodeId(3), Point::new(1.0, 1.0)),
			Err(Error::UnknownNode(NodeId(3)))
		);
	}

	#[test]
	fn test_move_node_keeps_stale_weight() {
		let mut graph = graph_with(&[(0.0, 0.0), (3.0, 4.0)]);
		graph.connect(NodeId(0), NodeId(1)).unwrap();
		graph.move_node(NodeId(1), Point::new(30.0, 40.0)).unwrap();

		assert_eq!(graph.node(NodeId(1)).unwrap().position(), Point::new(30.0, 40.0));
		assert_eq!(graph.node(NodeId(0)).unwrap().adjacency()[0].weight, 5.0);
	}

	#[test]
	fn test_visit_edges_once_per_pair() {
		let mut graph = graph_with(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
		graph.connect(NodeId(0), NodeId(1)).unwrap();
		graph.connect(NodeId(2), NodeId(1)).unwrap();

		let mut seen = Vec::new();
		graph.visit_edges(|a, b, e| seen.push((a.id(), b.id(), e.weight)));
		assert_eq!(
			seen,
			vec![(NodeId(0), NodeId(1), 5.0), (NodeId(1), NodeId(2), 5.0)]
		);
	}

	#[test]
	fn test_node_at_prefers_first_created() {
		let graph = graph_with(&[(0.0, 0.0), (5.0, 0.0), (100.0, 100.0)]);
		assert_eq!(graph.node_at(Point::new(3.0, 0.0), 20.0), Some(NodeId(0)));
		assert_eq!(graph.node_at(Point::new(100.0, 110.0), 20.0), Some(NodeId(2)));
		assert_eq!(graph.node_at(Point::new(50.0, 50.0), 20.0), None);
	}

	#[test]
	fn test_weight_label_truncates() {
		let entry = Adjacency { neighbor: NodeId(1), weight: 14.999 };
		assert_eq!(entry.label(), 14);
	}
}
