//! Graph rendering for composedot.
//!
//! Turns a parsed compose [`Configuration`](composedot_core::Configuration)
//! into a directed graph and serializes it to DOT.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and the `DotBuilder` writer
//! - [`graph`]: in-memory graph model (`Graph`, `Node`, `Edge`, `Subgraph`)
//! - [`label`]: HTML-like table labels and the legend
//! - [`compose`]: compose configuration → graph translation

pub mod compose;
pub mod dot;
pub mod graph;
pub mod label;

pub use compose::{Relation, build_graph, render_compose};
pub use dot::{AttrValue, Attrs, DotBuilder, sanitize_id};
pub use graph::{Edge, Graph, Node, Subgraph};
