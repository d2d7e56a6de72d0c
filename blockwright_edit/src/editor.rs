use itertools::Itertools;
use tracing::debug;

use blockwright::error::Result;
use blockwright::keys::KeySource;
use blockwright::template::node_type::ElementKind;
use blockwright::template::nodes::node::Node;
use blockwright::template::{NodePath, StyleConfig, Template};

use crate::factory;
use crate::mutate::{self, Direction};

/// Stateful facade over a template: the operation set of the host's
/// structure tree and property panel. Every tree change is computed on a
/// copy and swapped in only when it succeeds, so a failed call leaves the
/// template exactly as it was.
#[derive(Debug)]
pub struct TemplateEditor {
    template: Template,
    keys: KeySource,
}

impl TemplateEditor {
    pub fn new(template: Template) -> Self {
        Self::with_keys(template, KeySource::new())
    }

    /// Injectable key source, for deterministic keys in tests.
    pub fn with_keys(template: Template, keys: KeySource) -> Self {
        Self { template, keys }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn into_template(self) -> Template {
        self.template
    }

    pub fn keys(&self) -> &KeySource {
        &self.keys
    }

    /// Appends a new element to the root sequence, or to a container's
    /// children when `parent` is given. Returns the new node's path.
    pub fn add_element(&mut self, kind: ElementKind, parent: Option<&NodePath>) -> Result<NodePath> {
        let new = factory::create(kind, &self.keys);
        let (parent, index) = match parent {
            None => (NodePath::new(), self.template.root.len()),
            Some(path) => (path.clone(), self.template.root.node(path)?.child_count()),
        };
        let root = mutate::insert(&self.template.root, &parent, index, new.node)?;
        self.template.root = root;
        self.template.data.merge(new.data);
        debug!(%kind, "element added");
        let mut path = parent;
        path.push_back(index);
        Ok(path)
    }

    /// Removes a subtree. Data keys owned by the removed nodes stay in the
    /// store and the exported document keeps them.
    pub fn delete_element(&mut self, path: &NodePath) -> Result<Node> {
        let (root, removed) = mutate::remove(&self.template.root, path)?;
        self.template.root = root;
        debug!(kind = %removed.kind, "element deleted");
        Ok(removed)
    }

    /// Duplicates the node right after itself. The copy aliases the
    /// original's data keys until one of them is renamed.
    pub fn copy_element(&mut self, path: &NodePath) -> Result<NodePath> {
        let (root, clone_path) = mutate::duplicate(&self.template.root, path)?;
        self.template.root = root;
        Ok(clone_path)
    }

    /// Swaps the node with its previous/next sibling; no-op at the ends.
    pub fn move_element(&mut self, path: &NodePath, direction: Direction) -> Result<()> {
        self.template.root = mutate::reorder_sibling(&self.template.root, path, direction)?;
        Ok(())
    }

    pub fn set_class_name(
        &mut self,
        path: &NodePath,
        class_name: impl Into<String>,
    ) -> Result<()> {
        let mut root = self.template.root.clone();
        root.node_mut(path)?.class_name = class_name.into();
        self.template.root = root;
        Ok(())
    }

    /// Quick-add of a single class token; tokens already present are not
    /// repeated.
    pub fn append_class(&mut self, path: &NodePath, token: &str) -> Result<()> {
        let current = &self.template.root.node(path)?.class_name;
        if current.split_whitespace().any(|t| t == token) {
            return Ok(());
        }
        let joined = current.split_whitespace().chain([token]).join(" ");
        self.set_class_name(path, joined)
    }

    /// Renames an element's data key and migrates the stored value. Nodes
    /// without a content key are left untouched.
    pub fn rename_content_key(&mut self, path: &NodePath, new_key: &str) -> Result<()> {
        let mut root = self.template.root.clone();
        let node = root.node_mut(path)?;
        let Some(old_key) = node.content_key.clone() else {
            return Ok(());
        };
        node.content_key = Some(new_key.to_string());
        let old_key = Some(old_key).filter(|k| !k.is_empty());
        self.template.data.rename_key(old_key.as_deref(), new_key);
        self.template.root = root;
        debug!(new_key, "content key renamed");
        Ok(())
    }

    /// Links a CSS property of the element to an editable style variable,
    /// seeding a color-typed config the first time the key is seen.
    pub fn link_style(
        &mut self,
        path: &NodePath,
        css_property: &str,
        style_key: &str,
    ) -> Result<()> {
        let mut root = self.template.root.clone();
        root.node_mut(path)?
            .styles
            .insert(css_property.to_string(), style_key.to_string());
        self.template.root = root;
        if !self.template.styles.contains_key(style_key) {
            self.template
                .styles
                .insert(style_key.to_string(), StyleConfig::color(style_key));
        }
        Ok(())
    }

    /// Removes the link only; the editable style config stays.
    pub fn unlink_style(&mut self, path: &NodePath, css_property: &str) -> Result<()> {
        let mut root = self.template.root.clone();
        root.node_mut(path)?.styles.remove(css_property);
        self.template.root = root;
        Ok(())
    }

    pub fn set_editable_style(&mut self, key: impl Into<String>, config: StyleConfig) {
        self.template.styles.insert(key.into(), config);
    }

    pub fn remove_editable_style(&mut self, key: &str) {
        self.template.styles.remove(key);
    }

    pub fn set_data_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.template.data.set(key, value);
    }

    pub fn remove_data_key(&mut self, key: &str) {
        self.template.data.remove(key);
    }
}
