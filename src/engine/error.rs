//! Error types for the graph engine.

use thiserror::Error;

use super::graph::NodeId;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when the host hands the engine something it never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	/// No node with this id exists in the store.
	#[error("unknown node {0}")]
	UnknownNode(NodeId),
}
