//! Shared node capabilities.

use super::Position;

/// Trait for nodes that carry a source position.
///
/// Implemented by every node type so diagnostic code can ask any node
/// where it came from without matching on its shape.
pub trait Positioned {
    /// Get the position of the token that began this node.
    fn position(&self) -> Position;
}
