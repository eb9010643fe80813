//! The scene-graph seam shapes are built on.
//!
//! Shapes never reach for an ambient document. They are handed a
//! [`SceneFactory`] and ask it for a node in an explicit namespace, then
//! write presentation attributes to that node through [`SceneNode`].
//!
//! [`SvgScene`] is the in-memory retained scene shipped with this crate.
//! Anything else that can create namespaced elements and set string
//! attributes (a browser DOM binding, a test double) can implement the two
//! traits and drive the same shapes.

mod retained;

pub use retained::{SvgElement, SvgScene};

/// XML namespace for SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Creates retained graphical nodes.
pub trait SceneFactory {
    /// The node type produced by this factory.
    type Node: SceneNode;

    /// Creates a new, detached element named `tag` in `namespace`.
    fn create_element(&self, namespace: &str, tag: &str) -> Self::Node;
}

/// A retained graphical node whose presentation is described by string attributes.
///
/// Writes are synchronous: once `set_attribute` returns, every observer of
/// the node sees the new value. Values are stored verbatim; validation, if
/// any, is the concern of whatever eventually renders the node.
pub trait SceneNode {
    /// Sets `name` to `value`, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Returns the current value of `name`, if it has been set.
    fn attribute(&self, name: &str) -> Option<String>;
}
