use composedot_core::parse_config;
use composedot_dot::render_compose;
use pretty_assertions::assert_eq;

const LEGEND: &str = "  subgraph cluster_legend {
    label=\"Legend\";
    legend_service[shape=\"plaintext\", label=<<TABLE BORDER='0'><TR><TD BGCOLOR='lightblue'><B>container_name</B></TD></TR><TR><TD BGCOLOR='lightgrey'><FONT POINT-SIZE='9'>ports ext:int</FONT></TD></TR><TR><TD BGCOLOR='orange'><FONT POINT-SIZE='9'>volumes host:container</FONT></TD></TR><TR><TD BGCOLOR='pink'><FONT POINT-SIZE='9'>environment</FONT></TD></TR></TABLE>>];
  }

";

fn render(yaml: &str) -> String {
    let config = parse_config(yaml).expect("parse compose");
    render_compose("", &config).expect("render compose")
}

#[test]
fn empty_document_renders_legend_only() {
    assert_eq!(render(""), format!("digraph {{\n{LEGEND}}}\n"));
}

#[test]
fn web_backend_db_scenario() {
    let yaml = r#"
networks:
  backend:
services:
  web:
    ports: ["80:80"]
    networks: [backend]
    depends_on: [db]
  db: {}
"#;

    let expected = format!(
        "digraph {{\n{LEGEND}{}{}{}\n{}{}}}\n",
        "  backend[label=\"Network: backend\", style=\"filled\", shape=\"box\", fillcolor=\"palegreen\"];\n",
        "  db[shape=\"plaintext\", label=<<TABLE BORDER='0'><TR><TD BGCOLOR='lightblue'><B>db</B></TD></TR></TABLE>>];\n",
        "  web[shape=\"plaintext\", label=<<TABLE BORDER='0'><TR><TD BGCOLOR='lightblue'><B>web</B></TD></TR><TR><TD BGCOLOR='lightgrey'><FONT POINT-SIZE='9'>80:80</FONT></TD></TR></TABLE>>];\n",
        "  web -> backend [dir=\"none\"];\n",
        "  web -> db [style=\"dashed\", label=\"depends_on\"];\n",
    );

    assert_eq!(render(yaml), expected);
}

#[test]
fn hyphenated_names_and_qualified_links() {
    let yaml = r#"
services:
  my-service:
    links: ["other-db:database"]
    volumes_from: [data-only]
    environment:
      - FOO=bar
"#;
    let out = render(yaml);

    assert!(out.contains("  my_service[shape=\"plaintext\", label=<<TABLE BORDER='0'><TR><TD BGCOLOR='lightblue'><B>my-service</B></TD></TR><TR><TD BGCOLOR='pink'><FONT POINT-SIZE='9'>FOO=bar</FONT></TD></TR></TABLE>>];\n"));
    assert!(out.contains("  my_service -> data_only [style=\"dashed\", label=\"volumes_from\"];\n"));
    assert!(out.contains("  my_service -> other_db [style=\"dashed\", label=\"links\"];\n"));
    assert!(!out.contains("database"));
}

#[test]
fn dangling_reference_still_renders() {
    let out = render("services:\n  web:\n    depends_on: [ghost]\n");
    assert!(out.contains("  web -> ghost [style=\"dashed\", label=\"depends_on\"];\n"));
    assert!(!out.contains("  ghost["));
}

#[test]
fn environment_mapping_and_list_render_the_same_rows() {
    let from_map = render("services:\n  app:\n    environment:\n      FOO: bar\n      BAZ: qux\n");
    let from_list = render("services:\n  app:\n    environment: [BAZ=qux, FOO=bar]\n");
    assert_eq!(from_map, from_list);
}

#[test]
fn dot_keyword_service_names_are_escaped() {
    let yaml = "services:\n  node:\n    depends_on: [Graph]\n  Graph:\n    links: [EDGE]\n";
    let out = render(yaml);

    assert!(out.contains("  node_[shape=\"plaintext\", label=<<TABLE BORDER='0'><TR><TD BGCOLOR='lightblue'><B>node</B></TD></TR></TABLE>>];\n"));
    assert!(out.contains("  Graph_[shape=\"plaintext\""));
    assert!(out.contains("  node_ -> Graph_ [style=\"dashed\", label=\"depends_on\"];\n"));
    assert!(out.contains("  Graph_ -> EDGE_ [style=\"dashed\", label=\"links\"];\n"));
    assert!(!out.contains("\n  node["));
    assert!(!out.contains("\n  node ->"));
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let yaml = r#"
services:
  web:
    environment:
      FOO: a
      FOO: b
    depends_on:
      db: {condition: service_started}
      db: {condition: service_healthy}
    networks:
      backend:
      backend: {aliases: [api]}
  db:
"#;
    let out = render(yaml);

    assert!(out.contains("<FONT POINT-SIZE='9'>FOO=b</FONT>"), "{out}");
    assert!(!out.contains("FOO=a"), "{out}");
    assert_eq!(out.matches("  web -> db ").count(), 1, "{out}");
    assert_eq!(out.matches("  web -> backend ").count(), 1, "{out}");
}
