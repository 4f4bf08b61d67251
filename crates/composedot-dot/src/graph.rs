//! In-memory directed graph with DOT serialization.
//!
//! Nodes live either at the top level or inside a named subgraph; edges
//! always live at the top level. Edge endpoints are not checked against the
//! node set: an edge may name an identifier that was never declared, and
//! the layout tool draws a plain placeholder node for it.

use std::collections::HashMap;

use composedot_error::{Error, Result};

use crate::dot::{AttrValue, Attrs, DotBuilder, is_valid_id, sanitize_id};

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub attrs: Attrs,
}

impl Node {
    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// A directed edge `from -> to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub attrs: Attrs,
}

impl Edge {
    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// A named subgraph with its own label and nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    pub id: String,
    pub label: String,
    pub nodes: Vec<Node>,
}

/// Where a declared node lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Root(usize),
    Subgraph(usize, usize),
}

/// A named directed graph.
#[derive(Debug, Default)]
pub struct Graph {
    name: String,
    subgraphs: Vec<Subgraph>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, Slot>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn subgraphs(&self) -> &[Subgraph] {
        &self.subgraphs
    }

    /// Top-level nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Find a declared node, top-level or inside a subgraph.
    pub fn node(&self, id: &str) -> Option<&Node> {
        match *self.index.get(id)? {
            Slot::Root(i) => self.nodes.get(i),
            Slot::Subgraph(s, i) => self.subgraphs.get(s)?.nodes.get(i),
        }
    }

    /// Edges leaving `from`, in insertion order.
    pub fn edges_from<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == from)
    }

    /// Add an empty subgraph.
    pub fn add_subgraph(&mut self, id: &str, label: impl Into<String>) -> Result<()> {
        check_id(id, "graph::add_subgraph")?;
        if self.subgraphs.iter().any(|s| s.id == id) {
            return Err(Error::graph_build_failed(format!(
                "subgraph '{id}' is already declared"
            ))
            .with_operation("graph::add_subgraph")
            .with_context("id", id));
        }
        self.subgraphs.push(Subgraph {
            id: id.to_string(),
            label: label.into(),
            nodes: Vec::new(),
        });
        Ok(())
    }

    /// Declare a top-level node.
    ///
    /// Re-declaring an identifier with identical attributes is a no-op;
    /// re-declaring it with different attributes is an error.
    pub fn add_node(&mut self, id: &str, attrs: Attrs) -> Result<()> {
        if self.check_redeclared(id, &attrs)? {
            return Ok(());
        }
        self.index
            .insert(id.to_string(), Slot::Root(self.nodes.len()));
        self.nodes.push(Node {
            id: id.to_string(),
            attrs,
        });
        Ok(())
    }

    /// Declare a node inside the subgraph `parent`.
    pub fn add_subgraph_node(&mut self, parent: &str, id: &str, attrs: Attrs) -> Result<()> {
        let Some(s) = self.subgraphs.iter().position(|s| s.id == parent) else {
            return Err(
                Error::graph_build_failed(format!("subgraph '{parent}' is not declared"))
                    .with_operation("graph::add_subgraph_node")
                    .with_context("id", id),
            );
        };
        if self.check_redeclared(id, &attrs)? {
            return Ok(());
        }
        let nodes = &mut self.subgraphs[s].nodes;
        self.index
            .insert(id.to_string(), Slot::Subgraph(s, nodes.len()));
        nodes.push(Node {
            id: id.to_string(),
            attrs,
        });
        Ok(())
    }

    /// Add a directed edge. Endpoints need not be declared nodes.
    pub fn add_edge(&mut self, from: &str, to: &str, attrs: Attrs) -> Result<()> {
        check_id(from, "graph::add_edge")?;
        check_id(to, "graph::add_edge")?;
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            attrs,
        });
        Ok(())
    }

    /// Serialize to DOT: subgraphs, then top-level nodes, then edges.
    pub fn render(&self) -> String {
        let name = if self.name.is_empty() {
            String::new()
        } else {
            sanitize_id(&self.name)
        };
        let mut dot = DotBuilder::new(&name);

        for subgraph in &self.subgraphs {
            dot.start_cluster(&subgraph.id, &subgraph.label);
            for node in &subgraph.nodes {
                dot.node_full(&node.id, &node.attrs);
            }
            dot.end_cluster();
        }

        for node in &self.nodes {
            dot.node_full(&node.id, &node.attrs);
        }

        if !self.edges.is_empty() {
            dot.blank();
        }
        for edge in &self.edges {
            dot.edge_with_attrs(&edge.from, &edge.to, &edge.attrs);
        }

        dot.build()
    }

    /// Returns true when `id` is already declared with the same attributes.
    fn check_redeclared(&self, id: &str, attrs: &Attrs) -> Result<bool> {
        check_id(id, "graph::add_node")?;
        match self.node(id) {
            None => Ok(false),
            Some(existing) if existing.attrs == *attrs => Ok(true),
            Some(_) => Err(Error::graph_build_failed(format!(
                "node '{id}' is already declared with different attributes"
            ))
            .with_operation("graph::add_node")
            .with_context("id", id)),
        }
    }
}

fn check_id(id: &str, operation: &'static str) -> Result<()> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(
            Error::graph_build_failed(format!("'{id}' is not a valid DOT identifier"))
                .with_operation(operation)
                .with_context("id", id),
        )
    }
}
