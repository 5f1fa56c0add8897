//! HTML export
//!
//! Output is deterministic: attributes and style declarations come out in
//! one fixed order and values equal to the schema defaults are skipped,
//! so exporting the same tree twice yields byte-identical markup.

use crate::css::{escape_html, serialize_style};
use crate::error::{HtmlError, HtmlResult};
use table_model::schema::Schema;
use table_model::{ModelError, Node, NodeId, NodeType, TableTree};

/// Writer that serializes table trees to an HTML fragment
pub struct HtmlWriter {
    schema: Schema,
    out: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(),
            out: String::new(),
        }
    }

    /// Serialize every top-level block of the document, in order
    pub fn write_document(mut self, tree: &TableTree) -> HtmlResult<String> {
        for &child_id in tree.document.children() {
            match tree.node_type(child_id) {
                Some(NodeType::Paragraph) => self.write_paragraph(tree, child_id)?,
                Some(NodeType::Table) => self.write_table(tree, child_id)?,
                Some(other) => {
                    return Err(HtmlError::UnexpectedMarkup(format!(
                        "{:?} node at document top level",
                        other
                    )))
                }
                None => return Err(ModelError::NodeNotFound(child_id.as_uuid()).into()),
            }
        }
        Ok(self.out)
    }

    /// Serialize one table, wrapper div included
    pub fn write_single_table(mut self, tree: &TableTree, table_id: NodeId) -> HtmlResult<String> {
        self.write_table(tree, table_id)?;
        Ok(self.out)
    }

    fn write_paragraph(&mut self, tree: &TableTree, para_id: NodeId) -> HtmlResult<()> {
        let paragraph = tree
            .get_paragraph(para_id)
            .ok_or(ModelError::NodeNotFound(para_id.as_uuid()))?;
        self.out.push_str("<p>");
        self.out.push_str(&escape_html(&paragraph.text));
        self.out.push_str("</p>");
        Ok(())
    }

    fn write_table(&mut self, tree: &TableTree, table_id: NodeId) -> HtmlResult<()> {
        let table = tree
            .get_table(table_id)
            .ok_or(ModelError::NodeNotFound(table_id.as_uuid()))?;

        self.out.push_str("<div class=\"table-wrapper\"><table");

        let classes = table.attrs.class_names();
        if !classes.is_empty() {
            self.out.push_str(" class=\"");
            self.out.push_str(&escape_html(&classes.join(" ")));
            self.out.push('"');
        }

        let decls: Vec<(String, String)> = table
            .attrs
            .style_declarations()
            .into_iter()
            .map(|(prop, value)| (prop.to_string(), value))
            .collect();
        if !decls.is_empty() {
            self.out.push_str(" style=\"");
            self.out.push_str(&escape_html(&serialize_style(&decls)));
            self.out.push('"');
        }
        self.out.push('>');

        for &row_id in table.children() {
            self.write_row(tree, row_id)?;
        }

        self.out.push_str("</table></div>");
        Ok(())
    }

    fn write_row(&mut self, tree: &TableTree, row_id: NodeId) -> HtmlResult<()> {
        let row = tree
            .get_row(row_id)
            .ok_or(ModelError::NodeNotFound(row_id.as_uuid()))?;
        self.out.push_str("<tr>");
        for &cell_id in row.children() {
            self.write_cell(tree, cell_id)?;
        }
        self.out.push_str("</tr>");
        Ok(())
    }

    fn write_cell(&mut self, tree: &TableTree, cell_id: NodeId) -> HtmlResult<()> {
        let cell = tree
            .get_cell(cell_id)
            .ok_or(ModelError::NodeNotFound(cell_id.as_uuid()))?;
        let tag = if cell.is_header() {
            self.schema.header_cell.tag
        } else {
            self.schema.body_cell.tag
        };

        self.out.push('<');
        self.out.push_str(tag);

        if cell.attrs.effective_colspan() > 1 {
            self.out
                .push_str(&format!(" colspan=\"{}\"", cell.attrs.effective_colspan()));
        }
        if cell.attrs.effective_rowspan() > 1 {
            self.out
                .push_str(&format!(" rowspan=\"{}\"", cell.attrs.effective_rowspan()));
        }
        if let Some(ref widths) = cell.attrs.colwidth {
            let joined = widths
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.out.push_str(&format!(" data-colwidth=\"{}\"", joined));
        }

        let decls = cell.attrs.style_declarations();
        if !decls.is_empty() {
            self.out.push_str(" style=\"");
            self.out.push_str(&escape_html(&serialize_style(&decls)));
            self.out.push('"');
        }
        self.out.push('>');

        self.out.push_str("<p>");
        self.out.push_str(&escape_html(&cell.content));
        self.out.push_str("</p>");

        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        Ok(())
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Export the whole document as an HTML fragment
pub fn export_document(tree: &TableTree) -> HtmlResult<String> {
    HtmlWriter::new().write_document(tree)
}

/// Export a single table as an HTML fragment
pub fn export_table(tree: &TableTree, table_id: NodeId) -> HtmlResult<String> {
    HtmlWriter::new().write_single_table(tree, table_id)
}

// =============================================================================
// Tests
// =============================================================================
