//! Structural reader: WordprocessingML body markup to blocks.

use roxmltree::Node;

use crate::error::{Error, Result};
use crate::model::{Block, Document, Paragraph, Table, TableCell};

use super::options::ParseOptions;

/// WordprocessingML main namespace.
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Inline wrappers whose runs belong to the enclosing paragraph.
const RUN_CONTAINERS: &[&str] = &[
    "hyperlink",
    "ins",
    "smartTag",
    "fldSimple",
    "customXml",
    "sdt",
    "sdtContent",
];

/// Property elements never contribute text.
const PROPERTY_ELEMENTS: &[&str] = &["pPr", "rPr", "sectPr", "tblPr", "tcPr", "trPr"];

/// Reads the body of a document into blocks.
///
/// Only direct children of `w:body` become blocks; anything nested in a
/// table cell is reachable through that cell's paragraphs.
#[derive(Debug, Clone, Default)]
pub struct StructureReader {
    options: ParseOptions,
}

impl StructureReader {
    /// Create a reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse `document.xml` markup into a [`Document`].
    ///
    /// `source` names the document in errors and in the result.
    pub fn read_xml(&self, xml: &str, source: &str) -> Result<Document> {
        let xml_doc = roxmltree::Document::parse(xml)?;
        let root = xml_doc.root_element();
        let body = wml(root, "body").ok_or_else(|| Error::Structure(source.to_string()))?;

        let mut document = Document::new(source);
        for child in body.children().filter(|n| n.is_element()) {
            if is_wml(child, "p") {
                document.add_block(Block::Paragraph(self.read_paragraph(child)));
            } else if is_wml(child, "tbl") {
                document.add_block(Block::Table(self.read_table(child)));
            }
        }

        log::debug!(
            "{}: read {} blocks ({} tables)",
            source,
            document.blocks.len(),
            document.table_count()
        );
        Ok(document)
    }

    fn read_paragraph(&self, node: Node) -> Paragraph {
        let mut run_nodes = Vec::new();
        collect_runs(node, &mut run_nodes);

        let runs: Vec<String> = run_nodes
            .into_iter()
            .map(|run| self.collect_text(run))
            .filter(|text| !text.is_empty())
            .collect();

        let text = if runs.is_empty() {
            self.collect_text(node)
        } else {
            runs.concat()
        };

        let style = wml(node, "pPr")
            .and_then(|ppr| wml(ppr, "pStyle"))
            .and_then(|s| s.attribute((WML_NS, "val")))
            .map(str::to_string);

        Paragraph { style, text, runs }
    }

    fn read_table(&self, node: Node) -> Table {
        let rows = wml_children(node, "tr")
            .map(|tr| {
                wml_children(tr, "tc")
                    .map(|tc| {
                        let paragraphs = wml_children(tc, "p")
                            .map(|p| self.read_paragraph(p))
                            .collect();
                        TableCell::with_paragraphs(paragraphs)
                    })
                    .collect()
            })
            .collect();
        Table::from_rows(rows)
    }

    fn collect_text(&self, node: Node) -> String {
        let mut out = String::new();
        self.walk_text(node, &mut out);
        out
    }

    fn walk_text(&self, node: Node, out: &mut String) {
        if node.tag_name().namespace() == Some(WML_NS) {
            match node.tag_name().name() {
                "t" => out.push_str(node.text().unwrap_or_default()),
                "delText" if self.options.include_deleted_text => {
                    out.push_str(node.text().unwrap_or_default())
                }
                "instrText" if self.options.include_field_codes => {
                    out.push_str(node.text().unwrap_or_default())
                }
                "tab" => out.push('\t'),
                "br" | "cr" => out.push('\n'),
                name if PROPERTY_ELEMENTS.contains(&name) => return,
                _ => {}
            }
        }
        for child in node.children().filter(|n| n.is_element()) {
            self.walk_text(child, out);
        }
    }
}

/// Parse `document.xml` markup with default options.
pub fn read_document_xml(xml: &str, source: &str) -> Result<Document> {
    StructureReader::new().read_xml(xml, source)
}

fn collect_runs<'a, 'input>(node: Node<'a, 'input>, runs: &mut Vec<Node<'a, 'input>>) {
    for child in node.children().filter(|n| n.is_element()) {
        if is_wml(child, "r") {
            runs.push(child);
        } else if child.tag_name().namespace() == Some(WML_NS)
            && RUN_CONTAINERS.contains(&child.tag_name().name())
        {
            collect_runs(child, runs);
        }
    }
}

fn is_wml(node: Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

fn wml<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_wml(*n, name))
}

fn wml_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| is_wml(*n, name))
}
