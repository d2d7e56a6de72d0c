use chrono::Utc;
use im::OrdMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::data::DataStore;
use crate::error::Result;
use crate::template::nodes::node::RawNode;
use crate::template::nodes::root::RootNode;

pub mod node_type;
pub mod nodes;

/// Structural address of a node: child indices from the root sequence down.
pub type NodePath = im::Vector<usize>;

pub const DEFAULT_TEMPLATE_NAME: &str = "CustomBlock";
pub const DEFAULT_CATEGORY_ID: i64 = 1;
pub const PREVIEW_URL: &str = "https://via.placeholder.com/300x200";

/// Parent of a path; `None` for the empty path.
pub fn parent_path(path: &NodePath) -> Option<NodePath> {
    if path.is_empty() {
        return None;
    }
    let mut parent = path.clone();
    parent.pop_back();
    Some(parent)
}

/// True when `candidate` lies inside the subtree rooted at `ancestor`,
/// including `candidate == ancestor`. Plain prefix comparison.
pub fn is_descendant_or_self(candidate: &NodePath, ancestor: &NodePath) -> bool {
    ancestor.len() <= candidate.len()
        && ancestor.iter().zip(candidate.iter()).all(|(a, c)| a == c)
}

/// A whole editable page-template: the element tree plus the two tables the
/// renderer consumes alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub root: RootNode,
    pub styles: OrdMap<String, StyleConfig>,
    pub data: DataStore,
    pub name: String,
    pub category_id: i64,
}

impl Template {
    pub fn empty() -> Self {
        Self {
            root: RootNode::new(),
            styles: OrdMap::new(),
            data: DataStore::new(),
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            category_id: DEFAULT_CATEGORY_ID,
        }
    }

    /// Export form. `id` is stamped from the clock and `editableElements`
    /// is derived from the data store; neither is kept on import.
    pub fn raw(&self) -> RawTemplate {
        RawTemplate {
            id: Utc::now().timestamp_millis(),
            category_id: self.category_id,
            template_name: self.name.clone(),
            name: self.name.clone(),
            preview_url: PREVIEW_URL.to_string(),
            settings: RawSettings {
                structure: self.root.raw(),
                editable_elements: self.data.keys().cloned().collect(),
                editable_styles: self.styles.clone(),
            },
            default_data: self.data.clone(),
        }
    }

    pub fn from_raw(raw: RawTemplate) -> Result<Self> {
        let root = RootNode::from_raw(raw.settings.structure)?;
        debug!(
            nodes = root.len(),
            data_keys = raw.default_data.len(),
            "imported template"
        );
        let name = if raw.template_name.is_empty() {
            DEFAULT_TEMPLATE_NAME.to_string()
        } else {
            raw.template_name
        };
        let category_id = if raw.category_id == 0 {
            DEFAULT_CATEGORY_ID
        } else {
            raw.category_id
        };
        Ok(Self {
            root,
            styles: raw.settings.editable_styles,
            data: raw.default_data,
            name,
            category_id,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawTemplate = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.raw())?)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::empty()
    }
}

/// Persisted document shape, exactly what the renderer ingests.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawTemplate {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub template_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub preview_url: String,
    #[serde(default)]
    pub settings: RawSettings,
    #[serde(default)]
    pub default_data: DataStore,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawSettings {
    #[serde(default)]
    pub structure: Vec<RawNode>,
    #[serde(rename = "editableElements", default)]
    pub editable_elements: Vec<String>,
    #[serde(rename = "editableStyles", default)]
    pub editable_styles: OrdMap<String, StyleConfig>,
}

/// One user-tunable style variable, rendered by the host as a form control
/// of the given type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StyleConfig {
    #[serde(rename = "type")]
    pub control: StyleControl,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl StyleConfig {
    /// The config seeded when a style key is first linked from an element.
    pub fn color(label: impl Into<String>) -> Self {
        Self {
            control: StyleControl::Color,
            label: label.into(),
            default: Value::String("#667eea".to_string()),
            min: None,
            max: None,
            step: None,
            unit: None,
            placeholder: None,
            options: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StyleControl {
    Color,
    Text,
    Number,
    Range,
    Select,
}
