//! HTML-like table labels for service nodes and the legend.

use std::fmt::Write;

use crate::dot::{AttrValue, escape_html};

/// Kind of row in a service table; each kind has its own background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Header row with the service name.
    Name,
    Port,
    Volume,
    Environment,
}

impl Row {
    pub const ALL: [Row; 4] = [Row::Name, Row::Port, Row::Volume, Row::Environment];

    pub fn bgcolor(self) -> &'static str {
        match self {
            Row::Name => "lightblue",
            Row::Port => "lightgrey",
            Row::Volume => "orange",
            Row::Environment => "pink",
        }
    }

    /// Text shown for this row kind in the legend.
    pub fn legend_caption(self) -> &'static str {
        match self {
            Row::Name => "container_name",
            Row::Port => "ports ext:int",
            Row::Volume => "volumes host:container",
            Row::Environment => "environment",
        }
    }
}

/// Builder for a borderless single-column table label.
pub struct TableLabel {
    html: String,
}

impl TableLabel {
    pub fn new() -> Self {
        Self {
            html: String::from("<TABLE BORDER='0'>"),
        }
    }

    /// Append one row. `text` is escaped.
    pub fn row(&mut self, row: Row, text: &str) -> &mut Self {
        let text = escape_html(text);
        let _ = write!(self.html, "<TR><TD BGCOLOR='{}'>", row.bgcolor());
        match row {
            Row::Name => {
                let _ = write!(self.html, "<B>{text}</B>");
            }
            _ => {
                let _ = write!(self.html, "<FONT POINT-SIZE='9'>{text}</FONT>");
            }
        }
        self.html.push_str("</TD></TR>");
        self
    }

    /// Append one row per item; nothing when `items` is empty.
    pub fn rows<I, S>(&mut self, row: Row, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.row(row, item.as_ref());
        }
        self
    }

    pub fn finish(mut self) -> AttrValue {
        self.html.push_str("</TABLE>");
        AttrValue::html(self.html)
    }
}

impl Default for TableLabel {
    fn default() -> Self {
        Self::new()
    }
}

/// Label of the legend node: one row per row kind.
pub fn legend_label() -> AttrValue {
    let mut label = TableLabel::new();
    for row in Row::ALL {
        label.row(row, row.legend_caption());
    }
    label.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let mut label = TableLabel::new();
        label.row(Row::Name, "db");
        assert_eq!(
            label.finish(),
            AttrValue::html("<TABLE BORDER='0'><TR><TD BGCOLOR='lightblue'><B>db</B></TD></TR></TABLE>")
        );
    }

    #[test]
    fn test_rows_skip_empty_lists() {
        let mut label = TableLabel::new();
        label
            .row(Row::Name, "web")
            .rows(Row::Port, ["80:80"])
            .rows(Row::Volume, Vec::<String>::new());
        let AttrValue::Html(html) = label.finish() else {
            panic!("expected html label");
        };
        assert!(html.contains("<TD BGCOLOR='lightgrey'><FONT POINT-SIZE='9'>80:80</FONT></TD>"));
        assert!(!html.contains("orange"));
    }

    #[test]
    fn test_row_text_is_escaped() {
        let mut label = TableLabel::new();
        label.row(Row::Environment, "Q=a<b&c");
        let AttrValue::Html(html) = label.finish() else {
            panic!("expected html label");
        };
        assert!(html.contains(">Q=a&lt;b&amp;c<"));
    }

    #[test]
    fn test_legend_label() {
        assert_eq!(
            legend_label(),
            AttrValue::html(concat!(
                "<TABLE BORDER='0'>",
                "<TR><TD BGCOLOR='lightblue'><B>container_name</B></TD></TR>",
                "<TR><TD BGCOLOR='lightgrey'><FONT POINT-SIZE='9'>ports ext:int</FONT></TD></TR>",
                "<TR><TD BGCOLOR='orange'><FONT POINT-SIZE='9'>volumes host:container</FONT></TD></TR>",
                "<TR><TD BGCOLOR='pink'><FONT POINT-SIZE='9'>environment</FONT></TD></TR>",
                "</TABLE>",
            ))
        );
    }
}
