//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// DOT keywords; the language matches them case-insensitively.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

fn is_keyword(id: &str) -> bool {
    KEYWORDS.iter().any(|kw| id.eq_ignore_ascii_case(kw))
}

/// Sanitize a string to be a valid unquoted DOT identifier.
///
/// Any character outside `[A-Za-z0-9_]` becomes an underscore, an
/// identifier that would start with a digit gets a leading underscore, and
/// a keyword (`node`, `Graph`, ...) gets a trailing underscore.
pub fn sanitize_id(input: &str) -> String {
    let mut id = String::with_capacity(input.len() + 1);
    if input.starts_with(|c: char| c.is_ascii_digit()) {
        id.push('_');
    }
    id.extend(input.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    if is_keyword(&id) {
        id.push('_');
    }
    id
}

/// Check whether `id` can be written as an unquoted DOT identifier.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with(|c: char| c.is_ascii_digit())
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_keyword(id)
}

/// Escape special characters for quoted DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Escape text placed inside an HTML-like label.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Value of a node, edge or graph attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Written as a quoted, escaped string: `label="Network: backend"`.
    Text(String),
    /// Written between angle brackets as an HTML-like label: `label=<...>`.
    /// The content is emitted verbatim.
    Html(String),
}

impl AttrValue {
    pub fn text(value: impl Into<String>) -> Self {
        AttrValue::Text(value.into())
    }

    pub fn html(value: impl Into<String>) -> Self {
        AttrValue::Html(value.into())
    }

    fn write_to(&self, output: &mut String) {
        match self {
            AttrValue::Text(value) => {
                let _ = write!(output, "\"{}\"", escape_label(value));
            }
            AttrValue::Html(value) => {
                let _ = write!(output, "<{value}>");
            }
        }
    }
}

/// Ordered attribute list of a node or edge.
pub type Attrs = Vec<(&'static str, AttrValue)>;

fn write_attrs(output: &mut String, attrs: &[(&'static str, AttrValue)]) {
    output.push('[');
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{key}=");
        value.write_to(output);
    }
    output.push(']');
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new directed graph with the given name.
    ///
    /// An empty name produces an anonymous `digraph {`.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        if name.is_empty() {
            output.push_str("digraph {\n");
        } else {
            let _ = writeln!(output, "digraph {name} {{");
        }
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with full attributes.
    pub fn node_full(&mut self, id: &str, attrs: &[(&'static str, AttrValue)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(id);
        if !attrs.is_empty() {
            write_attrs(&mut self.output, attrs);
        }
        self.output.push_str(";\n");
        self
    }

    /// Add an edge.
    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{from} -> {to};");
        self
    }

    /// Add an edge with attributes.
    pub fn edge_with_attrs(
        &mut self,
        from: &str,
        to: &str,
        attrs: &[(&'static str, AttrValue)],
    ) -> &mut Self {
        if attrs.is_empty() {
            return self.edge(from, to);
        }
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} -> {to} ");
        write_attrs(&mut self.output, attrs);
        self.output.push_str(";\n");
        self
    }

    /// Start a subgraph cluster.
    ///
    /// `id` is used as given; DOT only draws a box around subgraphs whose
    /// name starts with `cluster`.
    pub fn start_cluster(&mut self, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph {id} {{");
        self.indent += 1;
        self.attr("label", label)
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
