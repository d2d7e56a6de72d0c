use blockwright::error::{EditError, EditErrorKind, Result};
use blockwright::template::nodes::node::Node;
use blockwright::template::nodes::root::RootNode;
use blockwright::template::{is_descendant_or_self, parent_path, NodePath};

/// Sibling reorder direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Splices `node` into the children of `parent` at `index` (clamped to the
/// sequence length). The empty parent path addresses the root sequence.
/// The input tree is never touched; a fresh tree is returned.
pub fn insert(root: &RootNode, parent: &NodePath, index: usize, node: Node) -> Result<RootNode> {
    let mut next = root.clone();
    let children = next.children_mut(parent)?;
    let index = index.min(children.len());
    children.insert(index, node);
    Ok(next)
}

/// Splices out the node at `path`, returning the new tree and the node.
pub fn remove(root: &RootNode, path: &NodePath) -> Result<(RootNode, Node)> {
    let parent = parent_path(path).ok_or_else(|| EditError::path(path))?;
    let index = *path.back().expect("non-empty path has a last segment");
    root.node(path)?;
    let mut next = root.clone();
    let children = next.children_mut(&parent)?;
    let node = children.remove(index);
    Ok((next, node))
}

/// Deep-clones the node at `path` and inserts the clone right after it.
/// The clone keeps the original's data keys, so both point at the same
/// store entries until one of them is renamed — the behavior the host
/// application has always had.
pub fn duplicate(root: &RootNode, path: &NodePath) -> Result<(RootNode, NodePath)> {
    let copied = root.node(path)?.clone();
    let parent = parent_path(path).ok_or_else(|| EditError::path(path))?;
    let index = *path.back().expect("non-empty path has a last segment");
    let next = insert(root, &parent, index + 1, copied)?;
    let mut clone_path = parent;
    clone_path.push_back(index + 1);
    Ok((next, clone_path))
}

/// Swaps the node at `path` with its previous (`Up`) or next (`Down`)
/// sibling. First-sibling-up and last-sibling-down are no-ops.
pub fn reorder_sibling(root: &RootNode, path: &NodePath, direction: Direction) -> Result<RootNode> {
    let parent = parent_path(path).ok_or_else(|| EditError::path(path))?;
    let index = *path.back().expect("non-empty path has a last segment");
    root.node(path)?;
    let mut next = root.clone();
    let children = next.children_mut(&parent)?;
    match direction {
        Direction::Up if index > 0 => children.swap(index, index - 1),
        Direction::Down if index + 1 < children.len() => children.swap(index, index + 1),
        _ => {}
    }
    Ok(next)
}

/// Moves the node at `source` into `target_parent` at `index`; the
/// primitive behind every drag commit.
///
/// Removing the source shifts every path that passes through one of its
/// later siblings, so both the target-parent path and the target index are
/// compensated before the insert. All validation runs against the input
/// tree, so a failure leaves the caller's tree untouched.
pub fn move_to(
    root: &RootNode,
    source: &NodePath,
    target_parent: &NodePath,
    index: usize,
) -> Result<RootNode> {
    if is_descendant_or_self(target_parent, source) {
        return Err(EditError::new(EditErrorKind::IllegalMove));
    }
    let source_parent = parent_path(source).ok_or_else(|| EditError::path(source))?;
    root.node(source)?;
    if !target_parent.is_empty() && !root.node(target_parent)?.accepts_children() {
        return Err(EditError::new(EditErrorKind::InvalidTarget));
    }

    let source_index = *source.back().expect("non-empty path has a last segment");

    let mut index = index;
    if source_parent == *target_parent && source_index < index {
        index -= 1;
    }

    let depth = source.len();
    let mut adjusted_parent: Vec<usize> = target_parent.iter().copied().collect();
    if adjusted_parent.len() >= depth
        && source.iter().take(depth - 1).eq(adjusted_parent[..depth - 1].iter())
        && adjusted_parent[depth - 1] > source_index
    {
        adjusted_parent[depth - 1] -= 1;
    }

    let (next, node) = remove(root, source)?;
    let adjusted_parent: NodePath = adjusted_parent.into_iter().collect();
    insert(&next, &adjusted_parent, index, node)
}

#[cfg(test)]
mod tests {
    use im::vector;

    use blockwright::keys::KeySource;
    use blockwright::template::node_type::ElementKind;

    use crate::factory;

    use super::*;

    fn node(kind: ElementKind) -> Node {
        factory::create(kind, &KeySource::with_base(0)).node
    }

    fn root_of(children: Vec<Node>) -> RootNode {
        RootNode { children }
    }

    fn kinds_at_root(root: &RootNode) -> Vec<ElementKind> {
        root.children.iter().map(|n| n.kind).collect()
    }

    #[test]
    fn insert_into_root_and_container() {
        let root = root_of(vec![node(ElementKind::Container)]);
        let next = insert(&root, &NodePath::new(), 1, node(ElementKind::P)).unwrap();
        assert_eq!(next.len(), 2);

        let next = insert(&next, &vector![0], 0, node(ElementKind::Span)).unwrap();
        assert_eq!(next.node(&vector![0]).unwrap().child_count(), 1);
        // Input tree untouched.
        assert_eq!(root.len(), 1);
        assert_eq!(root.node(&vector![0]).unwrap().child_count(), 0);
    }

    #[test]
    fn insert_into_leaf_is_invalid_target() {
        let root = root_of(vec![node(ElementKind::P)]);
        let err = insert(&root, &vector![0], 0, node(ElementKind::Span)).unwrap_err();
        assert!(matches!(err.kind, EditErrorKind::InvalidTarget));
    }

    #[test]
    fn insert_index_is_clamped() {
        let root = root_of(vec![node(ElementKind::P)]);
        let next = insert(&root, &NodePath::new(), 99, node(ElementKind::Span)).unwrap();
        assert_eq!(
            kinds_at_root(&next),
            vec![ElementKind::P, ElementKind::Span]
        );
    }

    #[test]
    fn remove_returns_the_node() {
        let root = root_of(vec![node(ElementKind::H1), node(ElementKind::P)]);
        let (next, removed) = remove(&root, &vector![0]).unwrap();
        assert_eq!(removed.kind, ElementKind::H1);
        assert_eq!(kinds_at_root(&next), vec![ElementKind::P]);
        assert_eq!(root.len(), 2);
    }

    #[test]
    fn remove_empty_or_dangling_path_fails() {
        let root = root_of(vec![node(ElementKind::P)]);
        assert!(remove(&root, &NodePath::new()).unwrap_err().kind.is_path());
        assert!(remove(&root, &vector![4]).unwrap_err().kind.is_path());
    }

    #[test]
    fn duplicate_clones_next_to_the_original() {
        let keys = KeySource::with_base(7);
        let original = factory::create(ElementKind::H2, &keys).node;
        let root = root_of(vec![original.clone(), node(ElementKind::P)]);

        let (next, clone_path) = duplicate(&root, &vector![0]).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(clone_path, vector![1]);

        let clone = next.node(&clone_path).unwrap();
        assert_eq!(clone, &original);
        // Same content key: clone and original alias the same store entry.
        assert_eq!(clone.content_key, original.content_key);
    }

    #[test]
    fn reorder_swaps_and_respects_boundaries() {
        let root = root_of(vec![node(ElementKind::H1), node(ElementKind::P)]);

        let next = reorder_sibling(&root, &vector![1], Direction::Up).unwrap();
        assert_eq!(
            kinds_at_root(&next),
            vec![ElementKind::P, ElementKind::H1]
        );

        // First sibling + up: no-op.
        let next = reorder_sibling(&next, &vector![0], Direction::Up).unwrap();
        assert_eq!(
            kinds_at_root(&next),
            vec![ElementKind::P, ElementKind::H1]
        );

        // Last sibling + down: no-op.
        let next = reorder_sibling(&next, &vector![1], Direction::Down).unwrap();
        assert_eq!(
            kinds_at_root(&next),
            vec![ElementKind::P, ElementKind::H1]
        );
    }

    #[test]
    fn move_into_own_subtree_is_illegal() {
        let mut container = node(ElementKind::Container);
        container.children = Some(vec![node(ElementKind::Div)]);
        let root = root_of(vec![container]);

        let err = move_to(&root, &vector![0], &vector![0, 0], 0).unwrap_err();
        assert!(matches!(err.kind, EditErrorKind::IllegalMove));
        let err = move_to(&root, &vector![0], &vector![0], 0).unwrap_err();
        assert!(matches!(err.kind, EditErrorKind::IllegalMove));
    }

    #[test]
    fn move_into_leaf_is_invalid_and_leaves_tree_alone() {
        let root = root_of(vec![node(ElementKind::P), node(ElementKind::H1)]);
        let err = move_to(&root, &vector![0], &vector![1], 0).unwrap_err();
        assert!(matches!(err.kind, EditErrorKind::InvalidTarget));
        assert_eq!(kinds_at_root(&root), vec![ElementKind::P, ElementKind::H1]);
    }

    #[test]
    fn same_parent_forward_move_adjusts_the_index() {
        let root = root_of(vec![
            node(ElementKind::H1),
            node(ElementKind::P),
            node(ElementKind::Span),
        ]);
        // Drop H1 after P: target index 2 in the original sequence.
        let next = move_to(&root, &vector![0], &NodePath::new(), 2).unwrap();
        assert_eq!(
            kinds_at_root(&next),
            vec![ElementKind::P, ElementKind::H1, ElementKind::Span]
        );
    }

    #[test]
    fn move_compensates_for_shifted_target_parent() {
        // [p, container[]] — move p inside the container, whose path
        // shifts from [1] to [0] once p is removed.
        let root = root_of(vec![node(ElementKind::P), node(ElementKind::Container)]);
        let next = move_to(&root, &vector![0], &vector![1], 0).unwrap();
        assert_eq!(kinds_at_root(&next), vec![ElementKind::Container]);
        assert_eq!(next.node(&vector![0, 0]).unwrap().kind, ElementKind::P);
    }

    #[test]
    fn move_round_trip_restores_the_tree() {
        let mut container = node(ElementKind::Container);
        container.children = Some(vec![node(ElementKind::Span)]);
        let root = root_of(vec![node(ElementKind::H1), container, node(ElementKind::P)]);

        // Move H1 into the container, then back to its old slot.
        let moved = move_to(&root, &vector![0], &vector![1], 1).unwrap();
        assert_eq!(moved.node(&vector![0, 1]).unwrap().kind, ElementKind::H1);

        let restored = move_to(&moved, &vector![0, 1], &NodePath::new(), 0).unwrap();
        assert_eq!(restored, root);
    }
}
