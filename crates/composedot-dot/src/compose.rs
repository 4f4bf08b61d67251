//! Compose configuration → graph translation.

use composedot_core::{Configuration, Service};
use composedot_error::Result;
use tracing::debug;

use crate::dot::{AttrValue, Attrs, sanitize_id};
use crate::graph::Graph;
use crate::label::{Row, TableLabel, legend_label};

pub const LEGEND_CLUSTER: &str = "cluster_legend";
pub const LEGEND_NODE: &str = "legend_service";

/// A relationship a service declares towards another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Network attachment; drawn without an arrowhead.
    Network,
    VolumesFrom,
    DependsOn,
    /// Legacy `links`.
    Links,
}

impl Relation {
    /// Edge passes, in emission order.
    pub const ALL: [Relation; 4] = [
        Relation::Network,
        Relation::VolumesFrom,
        Relation::DependsOn,
        Relation::Links,
    ];

    /// References of this kind declared by `service`.
    pub fn references(self, service: &Service) -> &[String] {
        match self {
            Relation::Network => &service.networks,
            Relation::VolumesFrom => &service.volumes_from,
            Relation::DependsOn => &service.depends_on,
            Relation::Links => &service.links,
        }
    }

    /// Target name of a reference; `backend:alias` targets `backend` for
    /// relations that allow an alias qualifier.
    pub fn target(self, reference: &str) -> &str {
        match self {
            Relation::Network | Relation::Links => reference
                .split_once(':')
                .map_or(reference, |(name, _alias)| name),
            Relation::VolumesFrom | Relation::DependsOn => reference,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Relation::Network => None,
            Relation::VolumesFrom => Some("volumes_from"),
            Relation::DependsOn => Some("depends_on"),
            Relation::Links => Some("links"),
        }
    }

    pub fn edge_attrs(self) -> Attrs {
        match self.label() {
            None => vec![("dir", AttrValue::text("none"))],
            Some(label) => vec![
                ("style", AttrValue::text("dashed")),
                ("label", AttrValue::text(label)),
            ],
        }
    }
}

/// Build the graph for a compose configuration.
///
/// Nodes come first (legend, networks, services, each in name order), then
/// edges (per service: networks, volumes_from, depends_on, links). Edge
/// targets are not checked against the declared nodes.
pub fn build_graph(project: &str, config: &Configuration) -> Result<Graph> {
    let mut graph = Graph::new(project);

    graph.add_subgraph(LEGEND_CLUSTER, "Legend")?;
    graph.add_subgraph_node(
        LEGEND_CLUSTER,
        LEGEND_NODE,
        vec![
            ("shape", AttrValue::text("plaintext")),
            ("label", legend_label()),
        ],
    )?;

    for name in config.networks.keys() {
        graph.add_node(&sanitize_id(name), network_attrs(name))?;
    }

    for (name, service) in &config.services {
        graph.add_node(&sanitize_id(name), service_attrs(name, service))?;
    }

    for (name, service) in &config.services {
        let from = sanitize_id(name);
        for relation in Relation::ALL {
            for reference in relation.references(service) {
                let to = sanitize_id(relation.target(reference));
                graph.add_edge(&from, &to, relation.edge_attrs())?;
            }
        }
    }

    debug!(
        networks = config.networks.len(),
        services = config.services.len(),
        edges = graph.edges().len(),
        "built compose graph"
    );
    Ok(graph)
}

/// Build and serialize the graph for a compose configuration.
pub fn render_compose(project: &str, config: &Configuration) -> Result<String> {
    Ok(build_graph(project, config)?.render())
}

fn network_attrs(name: &str) -> Attrs {
    vec![
        ("label", AttrValue::text(format!("Network: {name}"))),
        ("style", AttrValue::text("filled")),
        ("shape", AttrValue::text("box")),
        ("fillcolor", AttrValue::text("palegreen")),
    ]
}

fn service_attrs(name: &str, service: &Service) -> Attrs {
    let mut label = TableLabel::new();
    label
        .row(Row::Name, name)
        .rows(Row::Port, &service.ports)
        .rows(Row::Volume, &service.volumes)
        .rows(Row::Environment, &service.environment);
    vec![
        ("shape", AttrValue::text("plaintext")),
        ("label", label.finish()),
    ]
}
