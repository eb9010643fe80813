//! Tessera Core Types and Definitions
//!
//! This crate provides the building blocks used to render game boards as
//! retained-mode SVG. It includes:
//!
//! - **Scene**: The scene-graph seam ([`scene::SceneFactory`], [`scene::SceneNode`])
//!   and an in-memory retained SVG scene ([`scene::SvgScene`])
//! - **Draw**: Fluent shape builders such as [`draw::RectangleShape`]
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod scene;
