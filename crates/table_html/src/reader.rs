//! HTML import
//!
//! Event-driven parser over an HTML fragment. Malformed attribute values
//! never fail the import: the value is dropped with a warning and the
//! schema default applies. After a table closes its grid is repaired so
//! every imported table satisfies the row-span invariant.

use crate::css::parse_style;
use crate::error::{HtmlError, HtmlResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use table_model::{
    parse_colwidth, parse_positive_int, parse_px, BorderEdges, BorderStyle, CellAttrs, CellKind,
    NodeId, Paragraph, Table, TableAlignment, TableAttrs, TableCell, TableRow, TableTree,
    TextWeight, VerticalAlign,
};
use tracing::warn;

// =============================================================================
// Pending Parse State
// =============================================================================

/// A cell accumulated during parsing, before grid repair
#[derive(Debug, Clone, Default)]
struct PendingCell {
    kind: CellKind,
    attrs: CellAttrs,
    content: String,
}

/// A row accumulated during parsing
#[derive(Debug, Clone, Default)]
struct PendingRow {
    cells: Vec<PendingCell>,
}

impl PendingRow {
    fn span_total(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.attrs.effective_colspan() as usize)
            .sum()
    }
}

/// A table accumulated during parsing
#[derive(Debug, Clone, Default)]
struct PendingTable {
    attrs: TableAttrs,
    rows: Vec<PendingRow>,
    row: Option<PendingRow>,
    cell: Option<PendingCell>,
}

// =============================================================================
// Reader
// =============================================================================

/// Parser that builds a table tree from an HTML fragment
pub struct HtmlReader {
    tree: TableTree,
    table: Option<PendingTable>,
    /// Text of a top-level paragraph being accumulated
    paragraph: Option<String>,
    /// Whether the cursor is inside a cell's content paragraph
    in_cell_paragraph: bool,
    /// Depth of nested tables being flattened into the current cell
    nested_tables: usize,
}

impl HtmlReader {
    pub fn new() -> Self {
        Self {
            tree: TableTree::new(),
            table: None,
            paragraph: None,
            in_cell_paragraph: false,
            nested_tables: 0,
        }
    }

    /// Parse a fragment into a tree of paragraphs and tables
    pub fn parse(mut self, html: &str) -> HtmlResult<TableTree> {
        let mut reader = Reader::from_str(html);
        loop {
            match reader.read_event()? {
                Event::Start(e) => self.handle_start(&e)?,
                Event::Empty(e) => {
                    self.handle_start(&e)?;
                    self.handle_end(e.name().as_ref())?;
                }
                Event::End(e) => self.handle_end(e.name().as_ref())?,
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map(|cow| cow.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(t.as_ref()).into_owned());
                    self.handle_text(&text);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        // Unclosed structure at EOF still materializes
        if let Some(pending) = self.table.take() {
            warn!("table not closed before end of fragment");
            self.finalize_table(pending)?;
        }
        Ok(self.tree)
    }

    fn handle_start(&mut self, e: &BytesStart) -> HtmlResult<()> {
        match e.name().as_ref() {
            b"table" => {
                if self.table.is_some() {
                    // Nested tables are not representable; their text is
                    // flattened into the containing cell
                    warn!("flattening nested table into containing cell");
                    self.nested_tables += 1;
                } else {
                    self.table = Some(PendingTable {
                        attrs: parse_table_attrs(e),
                        ..PendingTable::default()
                    });
                }
            }
            b"tr" => {
                if self.nested_tables > 0 {
                    return Ok(());
                }
                if let Some(table) = self.table.as_mut() {
                    if let Some(row) = table.row.take() {
                        warn!("row not closed before next row");
                        table.rows.push(row);
                    }
                    table.row = Some(PendingRow::default());
                }
            }
            tag @ (b"th" | b"td") => {
                if self.nested_tables > 0 {
                    return Ok(());
                }
                let kind = if tag == b"th" {
                    CellKind::Header
                } else {
                    CellKind::Body
                };
                if let Some(table) = self.table.as_mut() {
                    if table.row.is_none() {
                        warn!("cell outside a row; opening an implicit row");
                        table.row = Some(PendingRow::default());
                    }
                    table.cell = Some(PendingCell {
                        kind,
                        attrs: parse_cell_attrs(e),
                        content: String::new(),
                    });
                }
            }
            b"p" => {
                if self.table.is_none() {
                    self.paragraph = Some(String::new());
                } else if self.table.as_ref().is_some_and(|t| t.cell.is_some()) {
                    self.in_cell_paragraph = true;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_end(&mut self, name: &[u8]) -> HtmlResult<()> {
        match name {
            b"table" => {
                if self.nested_tables > 0 {
                    self.nested_tables -= 1;
                } else if let Some(pending) = self.table.take() {
                    self.finalize_table(pending)?;
                }
            }
            b"tr" => {
                if self.nested_tables > 0 {
                    return Ok(());
                }
                if let Some(table) = self.table.as_mut() {
                    if let Some(cell) = table.cell.take() {
                        if let Some(row) = table.row.as_mut() {
                            row.cells.push(cell);
                        }
                    }
                    if let Some(row) = table.row.take() {
                        table.rows.push(row);
                    }
                }
            }
            b"th" | b"td" => {
                if self.nested_tables > 0 {
                    return Ok(());
                }
                self.in_cell_paragraph = false;
                if let Some(table) = self.table.as_mut() {
                    if let Some(cell) = table.cell.take() {
                        if let Some(row) = table.row.as_mut() {
                            row.cells.push(cell);
                        }
                    }
                }
            }
            b"p" => {
                if self.table.is_none() {
                    if let Some(text) = self.paragraph.take() {
                        self.tree.insert_paragraph(Paragraph::with_text(text), None);
                    }
                } else {
                    self.in_cell_paragraph = false;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Inside a paragraph, text is content and kept verbatim, whitespace
    /// included. Elsewhere whitespace-only text is markup formatting and
    /// is dropped.
    fn handle_text(&mut self, text: &str) {
        let in_cell_paragraph = self.in_cell_paragraph;
        if let Some(cell) = self.table.as_mut().and_then(|t| t.cell.as_mut()) {
            if in_cell_paragraph || !text.trim().is_empty() {
                cell.content.push_str(text);
            }
        } else if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        } else if !text.trim().is_empty() {
            warn!("ignoring text outside any paragraph or cell");
        }
    }

    /// Close out a parsed table: repair the grid and insert the nodes
    fn finalize_table(&mut self, mut pending: PendingTable) -> HtmlResult<()> {
        if let Some(cell) = pending.cell.take() {
            pending.row.get_or_insert_with(PendingRow::default).cells.push(cell);
        }
        if let Some(row) = pending.row.take() {
            pending.rows.push(row);
        }
        if pending.rows.iter().all(|r| r.cells.is_empty()) {
            warn!("dropping table with no cells");
            return Ok(());
        }
        pending.rows.retain(|r| !r.cells.is_empty());
        repair_grid(&mut pending.rows);

        let table_id = self.tree.insert_table(Table::with_attrs(pending.attrs), None);
        for pending_row in pending.rows {
            let row_id = self.tree.insert_table_row(TableRow::new(), table_id, None)?;
            for pending_cell in pending_row.cells {
                let mut cell = TableCell::with_attrs(pending_cell.kind, pending_cell.attrs);
                cell.set_content(pending_cell.content);
                self.tree.insert_table_cell(cell, row_id, None)?;
            }
        }
        Ok(())
    }
}

impl Default for HtmlReader {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Grid Repair
// =============================================================================

/// Make every row's span total match the first row's. Mismatched rows
/// lose their column spans; rows still too long fold surplus cell text
/// into their last kept cell, rows too short are padded with default
/// body cells.
fn repair_grid(rows: &mut [PendingRow]) {
    let Some(first) = rows.first() else {
        return;
    };
    let expected = first.span_total();

    for row in rows.iter_mut().skip(1) {
        let mut total = row.span_total();
        if total == expected {
            continue;
        }

        if row.cells.iter().any(|c| c.attrs.effective_colspan() > 1) {
            warn!(
                expected,
                found = total,
                "row span mismatch; discarding column spans"
            );
            for cell in row.cells.iter_mut() {
                let rowspan = cell.attrs.rowspan;
                cell.attrs = cell.attrs.clone().with_spans(1, rowspan);
            }
            total = row.cells.len();
        }

        // All spans are 1 past this point
        if total > expected {
            warn!(
                expected,
                found = total,
                "folding surplus cells into the last column"
            );
            let surplus = row.cells.split_off(expected);
            if let Some(last) = row.cells.last_mut() {
                for cell in surplus {
                    last.content.push_str(&cell.content);
                }
            }
            total = expected;
        }
        if total < expected {
            warn!(expected, found = total, "padding short row");
            for _ in total..expected {
                row.cells.push(PendingCell::default());
            }
        }
    }
}

// =============================================================================
// Attribute Parsing
// =============================================================================

fn parse_table_attrs(e: &BytesStart) -> TableAttrs {
    let mut attrs = TableAttrs::default();
    for attr in e.attributes().flatten() {
        let Ok(value) = attr.unescape_value() else {
            continue;
        };
        match attr.key.as_ref() {
            b"class" => {
                for class in value.split_whitespace() {
                    if let Some(theme) = class.strip_prefix("theme-") {
                        attrs.theme = theme.to_string();
                    } else if let Some(alignment) = TableAlignment::from_margin_class(class) {
                        attrs.alignment = alignment;
                    }
                }
            }
            b"style" => {
                for (prop, val) in parse_style(&value) {
                    apply_table_declaration(&mut attrs, &prop, val);
                }
            }
            _ => {}
        }
    }
    attrs
}

fn apply_table_declaration(attrs: &mut TableAttrs, prop: &str, val: String) {
    match prop {
        "--table-border-style" => match BorderStyle::parse(&val) {
            Some(style) => attrs.border_style = style,
            None => warn!(value = %val, "ignoring malformed border style"),
        },
        "--table-border-width" => match parse_px(&val) {
            Some(width) => attrs.border_width = width,
            None => warn!(value = %val, "ignoring malformed border width"),
        },
        "--table-border-color" => attrs.border_color = val,
        "--table-corner-radius" => match parse_px(&val) {
            Some(radius) => attrs.corner_radius = radius,
            None => warn!(value = %val, "ignoring malformed corner radius"),
        },
        "--table-background" => attrs.background_color = val,
        "--table-cell-padding" => match parse_px(&val) {
            Some(padding) => attrs.cell_padding = padding,
            None => warn!(value = %val, "ignoring malformed cell padding"),
        },
        "width" => attrs.width = val,
        _ => {}
    }
}

fn parse_cell_attrs(e: &BytesStart) -> CellAttrs {
    let mut attrs = CellAttrs::default();
    let mut colwidth = None;
    let mut edges = BorderEdges::all();

    for attr in e.attributes().flatten() {
        let Ok(value) = attr.unescape_value() else {
            continue;
        };
        match attr.key.as_ref() {
            b"colspan" => match parse_positive_int(&value) {
                Some(span) => attrs.colspan = span,
                None => warn!(value = %value, "ignoring malformed colspan"),
            },
            b"rowspan" => match parse_positive_int(&value) {
                Some(span) => attrs.rowspan = span,
                None => warn!(value = %value, "ignoring malformed rowspan"),
            },
            b"data-colwidth" => match parse_colwidth(&value) {
                Some(widths) => colwidth = Some(widths),
                None => warn!(value = %value, "ignoring malformed data-colwidth"),
            },
            b"style" => {
                for (prop, val) in parse_style(&value) {
                    apply_cell_declaration(&mut attrs, &mut edges, &prop, val);
                }
            }
            _ => {}
        }
    }

    if !edges.is_full() {
        attrs.border_edges = Some(edges);
    }
    if let Some(widths) = colwidth {
        if widths.len() == attrs.effective_colspan() as usize {
            attrs.colwidth = Some(widths);
        } else {
            warn!("data-colwidth length does not match colspan; dropping widths");
        }
    }
    attrs
}

/// Apply one inline declaration to cell attributes. Values equal to the
/// schema default stay unset so a round trip does not invent attributes.
fn apply_cell_declaration(attrs: &mut CellAttrs, edges: &mut BorderEdges, prop: &str, val: String) {
    match prop {
        "background-color" => {
            if val != "transparent" {
                attrs.background_color = Some(val);
            }
        }
        "border-color" => {
            if val != "inherit" {
                attrs.border_color = Some(val);
            }
        }
        "color" => {
            if val != "inherit" {
                attrs.text_color = Some(val);
            }
        }
        "font-weight" => match TextWeight::parse(&val) {
            Some(TextWeight::Normal) => {}
            Some(weight) => attrs.text_weight = Some(weight),
            None => warn!(value = %val, "ignoring malformed font weight"),
        },
        "vertical-align" => match VerticalAlign::parse(&val) {
            Some(VerticalAlign::Middle) => {}
            Some(align) => attrs.vertical_align = Some(align),
            None => warn!(value = %val, "ignoring malformed vertical alignment"),
        },
        "border-top-style" if val == "none" => edges.top = false,
        "border-bottom-style" if val == "none" => edges.bottom = false,
        "border-left-style" if val == "none" => edges.left = false,
        "border-right-style" if val == "none" => edges.right = false,
        _ => {}
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Import an HTML fragment into a table tree
pub fn import_fragment(html: &str) -> HtmlResult<TableTree> {
    HtmlReader::new().parse(html)
}

/// Import a fragment expected to contain at least one table; returns the
/// tree and the first table's ID
pub fn import_table(html: &str) -> HtmlResult<(TableTree, NodeId)> {
    let tree = import_fragment(html)?;
    let table_id = tree
        .document
        .children()
        .iter()
        .copied()
        .find(|&id| tree.get_table(id).is_some())
        .ok_or_else(|| HtmlError::UnexpectedMarkup("no table in fragment".to_string()))?;
    Ok((tree, table_id))
}

// =============================================================================
// Tests
// =============================================================================
