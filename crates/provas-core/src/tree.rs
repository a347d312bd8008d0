//! Presentation tree rendered by the listing screens.

use serde::Serialize;

/// What a tree node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Term,
    Discipline,
    Teacher,
    Category,
    Test,
    /// Empty-state marker standing in for the children of an empty group of
    /// kind `of`.
    Placeholder { of: GroupKind },
}

/// Kinds of node that hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Term,
    Discipline,
    Teacher,
    Category,
}

impl From<GroupKind> for NodeKind {
    fn from(kind: GroupKind) -> Self {
        match kind {
            GroupKind::Term => Self::Term,
            GroupKind::Discipline => Self::Discipline,
            GroupKind::Teacher => Self::Teacher,
            GroupKind::Category => Self::Category,
        }
    }
}

/// Stable identity of a node: the kind plus the source entity id.
///
/// A placeholder reuses the id of the group it belongs to and records that
/// group's kind, so keys stay unique across the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeKey {
    pub kind: NodeKind,
    pub id: u32,
}

/// One node of a catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub key: NodeKey,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Number of real children; a placeholder is not counted.
    pub child_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn group(kind: GroupKind, id: u32, label: String, children: Vec<Self>) -> Self {
        Self {
            key: NodeKey {
                kind: kind.into(),
                id,
            },
            label,
            link: None,
            child_count: children.len(),
            children,
        }
    }

    pub(crate) fn leaf(kind: NodeKind, id: u32, label: String, link: Option<String>) -> Self {
        Self {
            key: NodeKey { kind, id },
            label,
            link,
            child_count: 0,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.key.kind, NodeKind::Placeholder { .. })
    }
}

/// A rendered catalog: one root per input group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogTree {
    pub roots: Vec<TreeNode>,
}

impl CatalogTree {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Find a node anywhere in the tree by key.
    #[must_use]
    pub fn find(&self, key: NodeKey) -> Option<&TreeNode> {
        fn search(nodes: &[TreeNode], key: NodeKey) -> Option<&TreeNode> {
            nodes.iter().find_map(|node| {
                if node.key == key {
                    Some(node)
                } else {
                    search(&node.children, key)
                }
            })
        }
        search(&self.roots, key)
    }
}
