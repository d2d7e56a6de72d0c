use blockwright::template::nodes::node::Node;
use blockwright::template::{is_descendant_or_self, NodePath};

/// Disposition of a drop relative to the hovered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Before,
    After,
    Inside,
}

/// Edge zones never shrink below this many layout units, so small nodes
/// keep usable before/after bands.
pub const MIN_ZONE_SIZE: f64 = 25.0;

/// Classifies a pointer position over `node` into a drop zone. Pure
/// geometry; the node only contributes its child tri-state.
///
/// Leaves split at half height (the midpoint itself resolves to `After`);
/// an empty container is `Inside` everywhere; a populated container gets
/// edge bands of 30% of its height (35% under 100 units), floored at
/// [`MIN_ZONE_SIZE`].
pub fn classify(node: &Node, offset_y: f64, height: f64) -> Zone {
    match &node.children {
        None => {
            if offset_y < height * 0.5 {
                Zone::Before
            } else {
                Zone::After
            }
        }
        Some(children) if children.is_empty() => Zone::Inside,
        Some(_) => {
            let share = if height < 100.0 { 0.35 } else { 0.30 };
            let edge = MIN_ZONE_SIZE.max(height * share);
            if offset_y < edge {
                Zone::Before
            } else if offset_y > height - edge {
                Zone::After
            } else {
                Zone::Inside
            }
        }
    }
}

/// A node can never be dropped onto itself or into its own subtree.
pub fn is_legal_target(source: &NodePath, target: &NodePath) -> bool {
    !is_descendant_or_self(target, source)
}
