//! Shape builders that write directly to retained scene nodes.
//!
//! Every shape owns exactly one node created through a
//! [`SceneFactory`](crate::scene::SceneFactory) and exposes chained setters
//! that forward their arguments to that node without validation.

mod rectangle;

pub use rectangle::{DEFAULT_FILL, RectangleAttributes, RectangleShape};
