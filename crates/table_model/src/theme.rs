//! Theme presets - named bundles of table styling defaults
//!
//! Presets are pure data. Applying one copies its table-attribute fields
//! onto a `TableAttrs` and records the preset name; header and row-hover
//! colors are consumed by the UI and by the exported `theme-<name>` class,
//! not stored per node.

use crate::{BorderStyle, TableAttrs};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Theme Preset
// =============================================================================

/// An immutable named bundle of default visual values for a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreset {
    /// Preset name, the key in the registry
    pub name: String,
    /// Border line style
    pub border_style: BorderStyle,
    /// Border width in px
    pub border_width: u32,
    /// Border color
    pub border_color: String,
    /// Corner radius in px
    pub corner_radius: u32,
    /// Table background color
    pub background_color: String,
    /// Header row background color
    pub header_background: String,
    /// Header row text color
    pub header_text_color: String,
    /// Row hover highlight color
    pub row_hover_color: String,
    /// Cell padding in px
    pub cell_padding: u32,
}

impl ThemePreset {
    /// Copy this preset's table-attribute fields onto `attrs`, overwriting
    /// only the fields the preset defines
    pub fn apply_to(&self, attrs: &mut TableAttrs) {
        attrs.border_style = self.border_style;
        attrs.border_width = self.border_width;
        attrs.border_color = self.border_color.clone();
        attrs.corner_radius = self.corner_radius;
        attrs.background_color = self.background_color.clone();
        attrs.cell_padding = self.cell_padding;
        attrs.theme = self.name.clone();
    }
}

// =============================================================================
// Theme Registry
// =============================================================================

/// Registry of theme presets, keyed by name. Lookup never fails: an
/// unrecognized name resolves to the default preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRegistry {
    themes: HashMap<String, ThemePreset>,
    default_theme: String,
}

impl ThemeRegistry {
    /// Create a registry with the built-in presets
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            default_theme: "default".to_string(),
        };
        registry.register_built_in_themes();
        registry
    }

    fn register_built_in_themes(&mut self) {
        self.register(ThemePreset {
            name: "default".to_string(),
            border_style: BorderStyle::Solid,
            border_width: 1,
            border_color: "#e2e8f0".to_string(),
            corner_radius: 6,
            background_color: "transparent".to_string(),
            header_background: "#f8fafc".to_string(),
            header_text_color: "#0f172a".to_string(),
            row_hover_color: "#f1f5f9".to_string(),
            cell_padding: 8,
        });

        self.register(ThemePreset {
            name: "minimal".to_string(),
            border_style: BorderStyle::Solid,
            border_width: 0,
            border_color: "transparent".to_string(),
            corner_radius: 0,
            background_color: "transparent".to_string(),
            header_background: "transparent".to_string(),
            header_text_color: "#0f172a".to_string(),
            row_hover_color: "transparent".to_string(),
            cell_padding: 6,
        });

        self.register(ThemePreset {
            name: "striped".to_string(),
            border_style: BorderStyle::Solid,
            border_width: 1,
            border_color: "#e2e8f0".to_string(),
            corner_radius: 6,
            background_color: "transparent".to_string(),
            header_background: "#f1f5f9".to_string(),
            header_text_color: "#0f172a".to_string(),
            row_hover_color: "#f8fafc".to_string(),
            cell_padding: 8,
        });

        self.register(ThemePreset {
            name: "bordered".to_string(),
            border_style: BorderStyle::Solid,
            border_width: 2,
            border_color: "#94a3b8".to_string(),
            corner_radius: 0,
            background_color: "transparent".to_string(),
            header_background: "#e2e8f0".to_string(),
            header_text_color: "#0f172a".to_string(),
            row_hover_color: "#f1f5f9".to_string(),
            cell_padding: 8,
        });

        self.register(ThemePreset {
            name: "dark".to_string(),
            border_style: BorderStyle::Solid,
            border_width: 1,
            border_color: "#334155".to_string(),
            corner_radius: 6,
            background_color: "#0f172a".to_string(),
            header_background: "#1e293b".to_string(),
            header_text_color: "#f8fafc".to_string(),
            row_hover_color: "#1e293b".to_string(),
            cell_padding: 8,
        });
    }

    /// Register a preset under its own name
    pub fn register(&mut self, preset: ThemePreset) {
        self.themes.insert(preset.name.clone(), preset);
    }

    /// Look up a preset by name, falling back to the default preset for
    /// unrecognized names
    pub fn lookup(&self, name: &str) -> &ThemePreset {
        self.themes
            .get(name)
            .unwrap_or_else(|| &self.themes[&self.default_theme])
    }

    /// Names of all registered presets, sorted
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
