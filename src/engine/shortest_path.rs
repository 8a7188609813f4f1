//! Single-source shortest paths (Dijkstra) over the proximity graph.
//!
//! Results are written into the nodes themselves: every node's distance and
//! predecessor are reset and recomputed on each run. The predecessor links form
//! a tree rooted at the source, which [`path_to`] and the traversal playback walk.

use log::debug;

use super::error::{Error, Result};
use super::graph::{Graph, NodeId, UNREACHED};

/// Recomputes distance and predecessor for every node from `source`.
///
/// The frontier is scanned linearly. Among equally distant candidates the one
/// created first is settled first, which makes the chosen predecessor on tied
/// paths deterministic.
pub fn compute_shortest_paths(graph: &mut Graph, source: NodeId) -> Result<()> {
	if !graph.contains(source) {
		return Err(Error::UnknownNode(source));
	}

	for node in graph.nodes_mut() {
		node.distance = UNREACHED;
		node.predecessor = None;
	}
	graph.node_mut(source)?.distance = 0.0;

	let mut frontier: Vec<usize> = (0..graph.len()).collect();
	let mut reached = 0;
	while let Some(pos) = nearest(graph, &frontier) {
		let current = frontier.remove(pos);
		let (current_id, current_distance) = {
			let node = &graph.nodes()[current];
			(node.id(), node.distance)
		};
		if !current_distance.is_finite() {
			// Everything left is unreachable.
			break;
		}
		reached += 1;

		let edges = graph.nodes()[current].adjacency().to_vec();
		for edge in edges {
			let candidate = current_distance + edge.weight;
			let neighbor = graph.node_mut(edge.neighbor)?;
			if neighbor.distance > candidate {
				neighbor.distance = candidate;
				neighbor.predecessor = Some(current_id);
			}
		}
	}

	debug!(
		"shortest paths from node {}: reached {} of {} nodes",
		source,
		reached,
		graph.len()
	);
	Ok(())
}

/// Position in `frontier` of the closest node; the earliest one on ties.
fn nearest(graph: &Graph, frontier: &[usize]) -> Option<usize> {
	let nodes = graph.nodes();
	let mut best: Option<usize> = None;
	for (pos, &slot) in frontier.iter().enumerate() {
		match best {
			Some(b) if nodes[frontier[b]].distance <= nodes[slot].distance => {}
			_ => best = Some(pos),
		}
	}
	best
}

/// The predecessor chain from `target` back to the root of the last run,
/// `target` first. A node never reached yields just itself.
pub fn path_to(graph: &Graph, target: NodeId) -> Result<Vec<NodeId>> {
	let mut node = graph.node(target).ok_or(Error::UnknownNode(target))?;
	let mut path = vec![target];
	while let Some(prev) = node.predecessor() {
		// A chain longer than the graph means the links were corrupted.
		if path.len() > graph.len() {
			break;
		}
		path.push(prev);
		node = graph.node(prev).ok_or(Error::UnknownNode(prev))?;
	}
	Ok(path)
}
