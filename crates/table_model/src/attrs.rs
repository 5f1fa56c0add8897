//! Typed table and cell attributes
//!
//! Every attribute has a concrete default; cell attributes store `None`
//! for "unset, falls back to the schema default" so that unchanged cells
//! serialize to markup with no custom attributes at all.
//!
//! Render order is fixed: exporting the same attribute set twice must
//! produce byte-identical markup.

use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerated Values
// =============================================================================

/// Line style for table borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// CSS keyword for this style
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }

    /// Parse a CSS keyword; unknown keywords are absent
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "solid" => Some(BorderStyle::Solid),
            "dashed" => Some(BorderStyle::Dashed),
            "dotted" => Some(BorderStyle::Dotted),
            _ => None,
        }
    }
}

/// Horizontal placement of a table within its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl TableAlignment {
    /// Margin utility class emitted for this alignment, None for the
    /// default (the stylesheet centers tables without a class)
    pub fn margin_class(&self) -> Option<&'static str> {
        match self {
            TableAlignment::Left => Some("mr-auto"),
            TableAlignment::Center => None,
            TableAlignment::Right => Some("ml-auto"),
        }
    }

    /// Map a margin utility class back to an alignment
    pub fn from_margin_class(class: &str) -> Option<Self> {
        match class {
            "mr-auto" => Some(TableAlignment::Left),
            "mx-auto" => Some(TableAlignment::Center),
            "ml-auto" => Some(TableAlignment::Right),
            _ => None,
        }
    }

    /// Parse an alignment keyword
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "left" => Some(TableAlignment::Left),
            "center" => Some(TableAlignment::Center),
            "right" => Some(TableAlignment::Right),
            _ => None,
        }
    }
}

/// Font weight for cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextWeight {
    #[default]
    Normal,
    Bold,
}

impl TextWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextWeight::Normal => "normal",
            TextWeight::Bold => "bold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "normal" | "400" => Some(TextWeight::Normal),
            "bold" | "700" => Some(TextWeight::Bold),
            _ => None,
        }
    }
}

/// Vertical alignment of cell content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "top" => Some(VerticalAlign::Top),
            "middle" => Some(VerticalAlign::Middle),
            "bottom" => Some(VerticalAlign::Bottom),
            _ => None,
        }
    }
}

/// Which of a cell's four border edges are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for BorderEdges {
    fn default() -> Self {
        Self::all()
    }
}

impl BorderEdges {
    /// All four edges drawn
    pub fn all() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    /// No edges drawn
    pub fn none() -> Self {
        Self {
            top: false,
            bottom: false,
            left: false,
            right: false,
        }
    }

    /// Check if every edge is drawn (the default)
    pub fn is_full(&self) -> bool {
        self.top && self.bottom && self.left && self.right
    }

    /// Suppressed edges in render order (top, bottom, left, right)
    pub fn suppressed(&self) -> Vec<&'static str> {
        let mut edges = Vec::new();
        if !self.top {
            edges.push("top");
        }
        if !self.bottom {
            edges.push("bottom");
        }
        if !self.left {
            edges.push("left");
        }
        if !self.right {
            edges.push("right");
        }
        edges
    }
}

// =============================================================================
// Table Attributes
// =============================================================================

/// Attributes of a table node. All fields are concrete; a freshly inserted
/// table carries exactly these defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAttrs {
    /// Border line style
    pub border_style: BorderStyle,
    /// Border width in px
    pub border_width: u32,
    /// Border color (CSS color string)
    pub border_color: String,
    /// Corner radius in px
    pub corner_radius: u32,
    /// Theme preset name
    pub theme: String,
    /// Table background color, or "transparent"
    pub background_color: String,
    /// Cell padding in px
    pub cell_padding: u32,
    /// Horizontal placement
    pub alignment: TableAlignment,
    /// CSS width of the table (length or percentage)
    pub width: String,
}

impl Default for TableAttrs {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::Solid,
            border_width: 1,
            border_color: "#e2e8f0".to_string(),
            corner_radius: 6,
            theme: "default".to_string(),
            background_color: "transparent".to_string(),
            cell_padding: 8,
            alignment: TableAlignment::Center,
            width: "100%".to_string(),
        }
    }
}

impl TableAttrs {
    /// Create default table attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border style
    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Set the border width (px)
    pub fn with_border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    /// Set the border color
    pub fn with_border_color(mut self, color: &str) -> Self {
        self.border_color = color.to_string();
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }

    /// Set the alignment
    pub fn with_alignment(mut self, alignment: TableAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the width
    pub fn with_width(mut self, width: &str) -> Self {
        self.width = width.to_string();
        self
    }

    /// Class names for export: theme class plus margin class, defaults
    /// emit nothing
    pub fn class_names(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if self.theme != "default" {
            classes.push(format!("theme-{}", self.theme));
        }
        if let Some(class) = self.alignment.margin_class() {
            classes.push(class.to_string());
        }
        classes
    }

    /// Style declarations for export, custom properties first then plain
    /// `width`, in fixed order. Values equal to the default are skipped so
    /// re-export stays minimal and byte-stable.
    pub fn style_declarations(&self) -> Vec<(&'static str, String)> {
        let defaults = TableAttrs::default();
        let mut decls = Vec::new();

        if self.border_style != defaults.border_style {
            decls.push(("--table-border-style", self.border_style.as_css().to_string()));
        }
        if self.border_width != defaults.border_width {
            decls.push(("--table-border-width", format!("{}px", self.border_width)));
        }
        if self.border_color != defaults.border_color {
            decls.push(("--table-border-color", self.border_color.clone()));
        }
        if self.corner_radius != defaults.corner_radius {
            decls.push(("--table-corner-radius", format!("{}px", self.corner_radius)));
        }
        if self.background_color != defaults.background_color {
            decls.push(("--table-background", self.background_color.clone()));
        }
        if self.cell_padding != defaults.cell_padding {
            decls.push(("--table-cell-padding", format!("{}px", self.cell_padding)));
        }
        if self.width != defaults.width {
            decls.push(("width", self.width.clone()));
        }
        decls
    }
}

// =============================================================================
// Cell Attributes
// =============================================================================

/// Attributes of a header or body cell. Visual fields are `None` when
/// unset; spans are concrete and clamped to >= 1 on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAttrs {
    /// Cell background color
    pub background_color: Option<String>,
    /// Cell border color
    pub border_color: Option<String>,
    /// Text color
    pub text_color: Option<String>,
    /// Font weight
    pub text_weight: Option<TextWeight>,
    /// Vertical alignment of content
    pub vertical_align: Option<VerticalAlign>,
    /// Which border edges are drawn
    pub border_edges: Option<BorderEdges>,
    /// Number of grid columns this cell spans
    pub colspan: u32,
    /// Number of grid rows this cell spans
    pub rowspan: u32,
    /// Pixel width per spanned column; length must equal colspan
    pub colwidth: Option<Vec<u32>>,
}

impl Default for CellAttrs {
    fn default() -> Self {
        Self {
            background_color: None,
            border_color: None,
            text_color: None,
            text_weight: None,
            vertical_align: None,
            border_edges: None,
            colspan: 1,
            rowspan: 1,
            colwidth: None,
        }
    }
}

impl CellAttrs {
    /// Create default cell attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn with_background(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }

    /// Set the border color
    pub fn with_border_color(mut self, color: &str) -> Self {
        self.border_color = Some(color.to_string());
        self
    }

    /// Set the text color
    pub fn with_text_color(mut self, color: &str) -> Self {
        self.text_color = Some(color.to_string());
        self
    }

    /// Set the text weight
    pub fn with_text_weight(mut self, weight: TextWeight) -> Self {
        self.text_weight = Some(weight);
        self
    }

    /// Set the vertical alignment
    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Set the border edges
    pub fn with_border_edges(mut self, edges: BorderEdges) -> Self {
        self.border_edges = Some(edges);
        self
    }

    /// Set the spans; values below 1 are clamped up
    pub fn with_spans(mut self, colspan: u32, rowspan: u32) -> Self {
        self.colspan = colspan.max(1);
        self.rowspan = rowspan.max(1);
        // A previously set colwidth no longer matching the span is invalid
        if let Some(ref widths) = self.colwidth {
            if widths.len() != self.colspan as usize {
                self.colwidth = None;
            }
        }
        self
    }

    /// Set per-column widths; discarded unless the length equals the
    /// colspan and every entry is positive
    pub fn with_colwidth(mut self, widths: Vec<u32>) -> Self {
        if widths.len() == self.colspan as usize && widths.iter().all(|&w| w > 0) {
            self.colwidth = Some(widths);
        }
        self
    }

    /// Effective colspan (at least 1)
    pub fn effective_colspan(&self) -> u32 {
        self.colspan.max(1)
    }

    /// Effective rowspan (at least 1)
    pub fn effective_rowspan(&self) -> u32 {
        self.rowspan.max(1)
    }

    /// Check if every attribute equals its default; such a cell exports
    /// with no custom markup at all
    pub fn is_default(&self) -> bool {
        *self == CellAttrs::default()
    }

    /// Reset visual attributes to defaults. Spans and column widths are
    /// structural and survive a formatting clear.
    pub fn clear_formatting(&mut self) {
        self.background_color = None;
        self.border_color = None;
        self.text_color = None;
        self.text_weight = None;
        self.vertical_align = None;
        self.border_edges = None;
    }

    /// Resolve to concrete style values, filling unset fields from the
    /// schema defaults
    pub fn resolve(&self) -> ResolvedCellStyle {
        ResolvedCellStyle {
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| "transparent".to_string()),
            border_color: self
                .border_color
                .clone()
                .unwrap_or_else(|| "inherit".to_string()),
            text_color: self
                .text_color
                .clone()
                .unwrap_or_else(|| "inherit".to_string()),
            text_weight: self.text_weight.unwrap_or_default(),
            vertical_align: self.vertical_align.unwrap_or_default(),
            border_edges: self.border_edges.unwrap_or_default(),
        }
    }

    /// Inline style declarations for export, in fixed order:
    /// background-color, border-color, color, font-weight, vertical-align,
    /// then per-edge border suppression. Unset fields and values equal to
    /// the resolved defaults emit nothing, so a set-then-export of a
    /// default value stays byte-stable across round trips.
    pub fn style_declarations(&self) -> Vec<(String, String)> {
        let defaults = ResolvedCellStyle::default();
        let mut decls: Vec<(String, String)> = Vec::new();

        if let Some(ref color) = self.background_color {
            if *color != defaults.background_color {
                decls.push(("background-color".to_string(), color.clone()));
            }
        }
        if let Some(ref color) = self.border_color {
            if *color != defaults.border_color {
                decls.push(("border-color".to_string(), color.clone()));
            }
        }
        if let Some(ref color) = self.text_color {
            if *color != defaults.text_color {
                decls.push(("color".to_string(), color.clone()));
            }
        }
        if let Some(weight) = self.text_weight {
            if weight != defaults.text_weight {
                decls.push(("font-weight".to_string(), weight.as_css().to_string()));
            }
        }
        if let Some(align) = self.vertical_align {
            if align != defaults.vertical_align {
                decls.push(("vertical-align".to_string(), align.as_css().to_string()));
            }
        }
        if let Some(edges) = self.border_edges {
            for edge in edges.suppressed() {
                decls.push((format!("border-{}-style", edge), "none".to_string()));
            }
        }
        decls
    }
}

/// Cell style with every field concrete; what the toolbar reads for live
/// previews. Unset attributes resolve to the schema defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCellStyle {
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub text_weight: TextWeight,
    pub vertical_align: VerticalAlign,
    pub border_edges: BorderEdges,
}

impl Default for ResolvedCellStyle {
    fn default() -> Self {
        CellAttrs::default().resolve()
    }
}

// =============================================================================
// Tests
// =============================================================================
