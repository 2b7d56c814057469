use ego_tree::NodeRef;

/// A node in a document tree that can be searched with [`search`].
pub trait TreeNode: Sized {
    type Children: Iterator<Item = Self>;

    /// Returns this node's children in document order.
    fn children(&self) -> Self::Children;
}

impl<'a, T: 'a> TreeNode for NodeRef<'a, T> {
    type Children = ego_tree::iter::Children<'a, T>;

    fn children(&self) -> Self::Children {
        NodeRef::children(self)
    }
}

/// What [`search`] should do with a visited node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visit {
    /// Include this node in the results.
    pub keep: bool,
    /// Skip this node's children.
    pub prune: bool,
}

impl Visit {
    pub const SKIP: Visit = Visit {
        keep: false,
        prune: false,
    };
    pub const KEEP: Visit = Visit {
        keep: true,
        prune: false,
    };
    pub const PRUNE: Visit = Visit {
        keep: false,
        prune: true,
    };
}

/// Walks the tree depth-first in pre-order, returning every node the predicate keeps.
///
/// The results are in visitation order. Children of a node are only visited if the predicate did
/// not prune that node.
pub fn search<N, F>(root: N, mut predicate: F) -> Vec<N>
where
    N: TreeNode,
    F: FnMut(&N) -> Visit,
{
    let mut found = Vec::new();
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        let visit = predicate(&node);
        if !visit.prune {
            // Children are pushed in reverse so the first child is visited next.
            let first_child_index = pending.len();
            pending.extend(node.children());
            pending[first_child_index..].reverse();
        }
        if visit.keep {
            found.push(node);
        }
    }
    found
}
