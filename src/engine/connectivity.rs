use log::trace;

use super::geometry::distance;
use super::graph::Graph;

/// Brings the adjacency in line with `range`: every pair within `range` of each
/// other is connected exactly once, every other pair is not.
///
/// Each pair is disconnected before it is (re)connected, so repeated passes never
/// stack duplicate entries and weights always match the current positions.
pub fn reconcile(graph: &mut Graph, range: f64) {
	let n = graph.len();
	for i in 0..n {
		for j in (i + 1)..n {
			graph.disconnect_slots(i, j);
			let (a, b) = (graph.nodes()[i].position(), graph.nodes()[j].position());
			if distance(a, b) <= range {
				graph.connect_slots(i, j);
			}
		}
	}
	trace!(
		"reconciled {} nodes at range {}: {} edges",
		n,
		range,
		graph.edge_count()
	);
}
