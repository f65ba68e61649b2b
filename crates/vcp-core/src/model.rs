//! Control-panel layout document: grid size, colors, and placed elements.
//!
//! These types are what the history snapshots. Reading and writing the
//! on-disk layout format happens elsewhere.

use serde::{Deserialize, Serialize};

/// Text overlay bound to a PLC word, drawn inside a border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlcWord {
    pub number: i32,
    pub color: String,
    pub fontsize: i32,
    pub font: String,
    pub fontstyle: String,
    pub verticalalignment: String,
    pub horizontalalignment: String,
    pub marginbottom: i32,
    pub percentage: bool,
}

/// Filled, outlined rectangle spanning grid cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub row_start: i32,
    pub column_start: i32,
    pub row_span: i32,
    pub column_span: i32,
    pub fill: String,
    pub outline_color: String,
    pub outline_thickness: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plc_word: Option<PlcWord>,
}

/// Static image spanning grid cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub row_start: i32,
    pub column_start: i32,
    pub row_span: i32,
    pub column_span: i32,
    pub path: String,
}

/// Button placed at a grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub row: i32,
    pub column: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<i32>,
    pub name: String,
    /// Button definition file; `None` until configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnClick {
    pub opacity: i32,
    pub outline_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnHover {
    pub opacity: i32,
    pub outline_color: String,
}

/// A whole layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcpDocument {
    pub background: String,
    pub column_count: i32,
    pub row_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<OnClick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_hover: Option<OnHover>,
    #[serde(default)]
    pub borders: Vec<Border>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub buttons: Vec<Button>,
}

impl Default for VcpDocument {
    fn default() -> Self {
        Self {
            background: "#E9E0B7".to_string(),
            column_count: 6,
            row_count: 14,
            on_click: Some(OnClick {
                opacity: 100,
                outline_color: "#000000".to_string(),
            }),
            on_hover: Some(OnHover {
                opacity: 100,
                outline_color: "#ffffff".to_string(),
            }),
            borders: Vec::new(),
            images: Vec::new(),
            buttons: Vec::new(),
        }
    }
}

/// The element currently selected in the editor.
///
/// Indices point into the matching collection of the live document and are
/// not valid across undo/redo, so the session resets the selection then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Border(usize),
    Image(usize),
    Button(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = VcpDocument::default();
        assert_eq!(doc.background, "#E9E0B7");
        assert_eq!(doc.column_count, 6);
        assert_eq!(doc.row_count, 14);
        assert_eq!(doc.on_click.as_ref().map(|c| c.opacity), Some(100));
        assert_eq!(
            doc.on_hover.as_ref().map(|h| h.outline_color.as_str()),
            Some("#ffffff")
        );
        assert!(doc.borders.is_empty() && doc.images.is_empty() && doc.buttons.is_empty());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r##"{"background": "#000000", "column_count": 2, "row_count": 3}"##;
        let doc: VcpDocument = serde_json::from_str(json).unwrap();
        assert!(doc.borders.is_empty());
        assert!(doc.images.is_empty());
        assert!(doc.buttons.is_empty());
        assert!(doc.on_click.is_none());
    }

    #[test]
    fn test_optional_button_fields_are_skipped() {
        let button = Button {
            row: 1,
            column: 2,
            row_span: None,
            column_span: None,
            name: "Start".to_string(),
            file: None,
            default_image: None,
        };
        let json = serde_json::to_string(&button).unwrap();
        assert!(!json.contains("row_span"));
        assert!(!json.contains("file"));
    }

    #[test]
    fn test_selection_default_is_empty() {
        assert_eq!(Selection::default(), Selection::Empty);
    }
}
