use tracing::debug;

use blockwright::error::{EditError, EditErrorKind, Result};
use blockwright::keys::KeySource;
use blockwright::template::node_type::ElementKind;
use blockwright::template::nodes::root::RootNode;
use blockwright::template::{parent_path, NodePath, Template};

use crate::drop::{classify, is_legal_target, Zone};
use crate::{factory, mutate};

/// What a gesture is carrying: an existing node, or a new element kind
/// picked from the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    Move(NodePath),
    Insert(ElementKind),
}

/// The currently hovered drop position, exposed so a presentation layer
/// can derive its indicator from session state alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub path: NodePath,
    pub zone: Zone,
}

/// One drag gesture from `begin` to `commit` or `cancel`.
///
/// Strictly synchronous and single-threaded; at most one gesture is active
/// at a time. The session never touches a tree except inside `commit`,
/// which computes a fresh snapshot and leaves its input untouched.
#[derive(Debug, Default)]
pub struct DragSession {
    payload: Option<DragPayload>,
    target: Option<DropTarget>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    pub fn target(&self) -> Option<&DropTarget> {
        self.target.as_ref()
    }

    /// Starts a gesture, discarding any stale target state.
    pub fn begin(&mut self, payload: DragPayload) {
        debug!(?payload, "drag begin");
        self.payload = Some(payload);
        self.target = None;
    }

    /// Reclassifies the hovered candidate. Ignored while idle; illegal or
    /// unresolvable candidates clear the target so no drop indicator is
    /// shown over them. Replaying identical arguments yields the same
    /// state.
    pub fn update_target(
        &mut self,
        root: &RootNode,
        candidate: NodePath,
        offset_y: f64,
        height: f64,
    ) {
        let Some(payload) = &self.payload else {
            return;
        };
        if let DragPayload::Move(source) = payload {
            if !is_legal_target(source, &candidate) {
                self.target = None;
                return;
            }
        }
        match root.node(&candidate) {
            Ok(node) => {
                let zone = classify(node, offset_y, height);
                self.target = Some(DropTarget {
                    path: candidate,
                    zone,
                });
            }
            Err(_) => self.target = None,
        }
    }

    /// Ends the gesture without touching any tree.
    pub fn cancel(&mut self) {
        debug!("drag cancelled");
        self.payload = None;
        self.target = None;
    }

    /// Applies the gesture and returns the new snapshot, or `None` when no
    /// legal target was ever recorded. The session is idle again
    /// afterwards, error or not; on error the input template is untouched.
    pub fn commit(&mut self, template: &Template, keys: &KeySource) -> Result<Option<Template>> {
        let payload = self.payload.take();
        let target = self.target.take();
        let (Some(payload), Some(target)) = (payload, target) else {
            return Ok(None);
        };

        let (target_parent, index) = resolve_position(&template.root, &target)?;
        let next = match payload {
            DragPayload::Insert(kind) => {
                let new = factory::create(kind, keys);
                let root = mutate::insert(&template.root, &target_parent, index, new.node)?;
                let mut data = template.data.clone();
                data.merge(new.data);
                Template {
                    root,
                    data,
                    ..template.clone()
                }
            }
            DragPayload::Move(source) => {
                let root = mutate::move_to(&template.root, &source, &target_parent, index)?;
                Template {
                    root,
                    ..template.clone()
                }
            }
        };
        debug!("drag committed");
        Ok(Some(next))
    }
}

/// Concrete insert position for a `(path, zone)` pair: before/after land
/// in the candidate's own parent, inside appends to the candidate itself.
fn resolve_position(root: &RootNode, target: &DropTarget) -> Result<(NodePath, usize)> {
    match target.zone {
        Zone::Inside => {
            let node = root.node(&target.path)?;
            if !node.accepts_children() {
                return Err(EditError::new(EditErrorKind::InvalidTarget));
            }
            Ok((target.path.clone(), node.child_count()))
        }
        Zone::Before | Zone::After => {
            let parent =
                parent_path(&target.path).ok_or_else(|| EditError::path(&target.path))?;
            let index = *target
                .path
                .back()
                .expect("non-empty path has a last segment");
            let index = if target.zone == Zone::After {
                index + 1
            } else {
                index
            };
            Ok((parent, index))
        }
    }
}

#[cfg(test)]
mod tests {
    use im::vector;

    use super::*;

    fn keys() -> KeySource {
        KeySource::with_base(1000)
    }

    fn template_with_container() -> Template {
        let mut template = Template::empty();
        let new = factory::create(ElementKind::Container, &keys());
        template.root.children.push(new.node);
        template
    }

    #[test]
    fn idle_session_ignores_updates_and_commits_nothing() {
        let template = template_with_container();
        let mut session = DragSession::new();
        session.update_target(&template.root, vector![0], 10.0, 100.0);
        assert!(session.target().is_none());
        assert!(session.commit(&template, &keys()).unwrap().is_none());
    }

    #[test]
    fn begin_clears_stale_target() {
        let template = template_with_container();
        let mut session = DragSession::new();
        session.begin(DragPayload::Insert(ElementKind::P));
        session.update_target(&template.root, vector![0], 10.0, 100.0);
        assert!(session.target().is_some());

        session.begin(DragPayload::Insert(ElementKind::Span));
        assert!(session.target().is_none());
    }

    #[test]
    fn illegal_candidates_clear_the_target() {
        let mut template = template_with_container();
        let child = factory::create(ElementKind::Div, &keys());
        template.root.children[0]
            .children
            .as_mut()
            .unwrap()
            .push(child.node);
        let sibling = factory::create(ElementKind::P, &keys());
        template.root.children.push(sibling.node);

        let mut session = DragSession::new();
        session.begin(DragPayload::Move(vector![0]));
        // The dragged node itself and its own child are both refused.
        session.update_target(&template.root, vector![0], 10.0, 200.0);
        assert!(session.target().is_none());
        session.update_target(&template.root, vector![0, 0], 10.0, 100.0);
        assert!(session.target().is_none());

        // A legal sibling hover is recorded...
        session.update_target(&template.root, vector![1], 10.0, 100.0);
        assert!(session.target().is_some());
        // ...and hovering back over the subtree clears it again.
        session.update_target(&template.root, vector![0, 0], 10.0, 100.0);
        assert!(session.target().is_none());
    }

    #[test]
    fn unresolvable_candidate_clears_the_target() {
        let template = template_with_container();
        let mut session = DragSession::new();
        session.begin(DragPayload::Insert(ElementKind::P));
        session.update_target(&template.root, vector![0], 10.0, 100.0);
        assert!(session.target().is_some());
        session.update_target(&template.root, vector![9], 10.0, 100.0);
        assert!(session.target().is_none());
    }

    #[test]
    fn cancel_resets_without_mutating() {
        let template = template_with_container();
        let mut session = DragSession::new();
        session.begin(DragPayload::Insert(ElementKind::P));
        session.update_target(&template.root, vector![0], 10.0, 100.0);
        session.cancel();
        assert!(!session.is_dragging());
        assert!(session.commit(&template, &keys()).unwrap().is_none());
        assert_eq!(template.root.len(), 1);
        assert!(template.data.is_empty());
    }
}
