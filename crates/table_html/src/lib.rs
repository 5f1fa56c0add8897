//! Table HTML - bidirectional HTML codec for the table subsystem
//!
//! The writer serializes a table tree to a deterministic HTML fragment;
//! the reader parses a fragment back, recovering from malformed attribute
//! values and repairing inconsistent grids. Exporting an imported
//! fragment reproduces it byte for byte.

mod css;
mod error;
mod reader;
mod writer;

pub use error::*;
pub use reader::*;
pub use writer::*;

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use table_model::{
        BorderEdges, CellAttrs, NodeId, TableAlignment, TableTree, TextWeight, VerticalAlign,
    };

    /// Structural equivalence, ignoring node IDs
    fn assert_tables_equivalent(a: &TableTree, a_id: NodeId, b: &TableTree, b_id: NodeId) {
        assert_eq!(
            a.get_table(a_id).unwrap().attrs,
            b.get_table(b_id).unwrap().attrs
        );
        let a_cells = a.cells_in_order(a_id);
        let b_cells = b.cells_in_order(b_id);
        assert_eq!(a_cells.len(), b_cells.len());
        for (&ca, &cb) in a_cells.iter().zip(&b_cells) {
            let ca = a.get_cell(ca).unwrap();
            let cb = b.get_cell(cb).unwrap();
            assert_eq!(ca.kind, cb.kind);
            assert_eq!(ca.attrs, cb.attrs);
            assert_eq!(ca.content, cb.content);
        }
    }

    #[test]
    fn test_round_trip_preserves_structure_and_attrs() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 2, true).unwrap();
        {
            let table = tree.get_table_mut(table_id).unwrap();
            table.attrs.theme = "striped".to_string();
            table.attrs.alignment = TableAlignment::Left;
            table.attrs.cell_padding = 12;
        }
        let cells = tree.cells_in_order(table_id);
        let mut edges = BorderEdges::all();
        edges.right = false;
        let cell = tree.get_cell_mut(cells[2]).unwrap();
        cell.attrs = CellAttrs::new()
            .with_background("#ff0000")
            .with_text_color("#ffffff")
            .with_vertical_align(VerticalAlign::Bottom)
            .with_border_edges(edges);
        cell.set_content("styled");

        let html = export_table(&tree, table_id).unwrap();
        let (imported, imported_id) = import_table(&html).unwrap();
        assert_tables_equivalent(&tree, table_id, &imported, imported_id);
    }

    #[test]
    fn test_reexport_is_byte_identical() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(3, 3, true).unwrap();
        tree.get_table_mut(table_id).unwrap().attrs.border_width = 2;
        let cells = tree.cells_in_order(table_id);
        let cell = tree.get_cell_mut(cells[4]).unwrap();
        cell.attrs = CellAttrs::new().with_text_weight(TextWeight::Bold);
        cell.set_content("a & b < c");

        let first = export_table(&tree, table_id).unwrap();
        let (imported, imported_id) = import_table(&first).unwrap();
        let second = export_table(&imported, imported_id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_valued_attrs_export_bare_and_stay_stable() {
        // A toolbar command can set an attribute to its own default; the
        // export must not emit it and must stay stable across round trips
        let mut tree = TableTree::new();
        let table_id = tree.build_table(1, 1, false).unwrap();
        let cell_id = tree.cells_in_order(table_id)[0];
        {
            let attrs = &mut tree.get_cell_mut(cell_id).unwrap().attrs;
            attrs.vertical_align = Some(VerticalAlign::Middle);
            attrs.text_weight = Some(TextWeight::Normal);
            attrs.background_color = Some("transparent".to_string());
        }

        let first = export_table(&tree, table_id).unwrap();
        assert!(first.contains("<td><p></p></td>"));

        let (imported, imported_id) = import_table(&first).unwrap();
        let second = export_table(&imported, imported_id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_background_on_one_cell_stays_on_that_cell() {
        let mut tree = TableTree::new();
        let table_id = tree.build_table(2, 2, false).unwrap();
        let target = tree.cell_at(table_id, 0, 0).unwrap();
        tree.get_cell_mut(target).unwrap().attrs.background_color =
            Some("#ff0000".to_string());

        let html = export_table(&tree, table_id).unwrap();
        assert_eq!(html.matches("background-color: #ff0000;").count(), 1);

        let (imported, imported_id) = import_table(&html).unwrap();
        let cells = imported.cells_in_order(imported_id);
        assert_eq!(
            imported.get_cell(cells[0]).unwrap().attrs.background_color,
            Some("#ff0000".to_string())
        );
        for &other in &cells[1..] {
            assert!(imported.get_cell(other).unwrap().attrs.is_default());
        }
    }

    #[test]
    fn test_document_round_trip() {
        let mut tree = TableTree::new();
        tree.insert_paragraph(table_model::Paragraph::with_text("intro"), None);
        tree.build_table(1, 2, false).unwrap();

        let html = export_document(&tree).unwrap();
        let imported = import_fragment(&html).unwrap();
        let reexported = export_document(&imported).unwrap();
        assert_eq!(html, reexported);
    }

    proptest! {
        #[test]
        fn prop_export_import_export_is_stable(
            rows in 1usize..=3,
            cols in 1usize..=3,
            header in any::<bool>(),
            theme in prop::sample::select(vec!["default", "minimal", "striped", "dark"]),
            alignment in prop::sample::select(vec![
                TableAlignment::Left,
                TableAlignment::Center,
                TableAlignment::Right,
            ]),
            bold in any::<bool>(),
            background in prop::option::of(prop::sample::select(vec!["#ff0000", "#0f172a"])),
        ) {
            let mut tree = TableTree::new();
            let table_id = tree.build_table(rows, cols, header).unwrap();
            {
                let table = tree.get_table_mut(table_id).unwrap();
                table.attrs.theme = theme.to_string();
                table.attrs.alignment = alignment;
            }
            let cells = tree.cells_in_order(table_id);
            let cell = tree.get_cell_mut(cells[0]).unwrap();
            if bold {
                cell.attrs.text_weight = Some(TextWeight::Bold);
            }
            if let Some(color) = background {
                cell.attrs.background_color = Some(color.to_string());
            }
            cell.set_content("x");

            let first = export_table(&tree, table_id).unwrap();
            let (imported, imported_id) = import_table(&first).unwrap();
            let second = export_table(&imported, imported_id).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
