use serde::Serialize;

/// Whether a node groups other nodes or stands for a single asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Container,
    Content,
}

/// One node of an asset tree.
///
/// Containers own their children by value; the tree is built once and read
/// once, so there are no back-references. Content nodes never have children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    kind: NodeKind,
    name: String,
    children: Vec<Node>,
}

impl Node {
    /// A container holding `children` in listing order.
    pub fn container(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Container,
            name: name.into(),
            children,
        }
    }

    /// A leaf asset.
    pub fn content(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Content,
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_container(&self) -> bool {
        self.kind == NodeKind::Container
    }

    pub fn is_content(&self) -> bool {
        self.kind == NodeKind::Content
    }

    /// Direct content children, in order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| c.is_content())
    }

    /// Direct container children, in order.
    pub fn groups(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| c.is_container())
    }

    /// Number of content nodes anywhere below (or at) this node.
    pub fn content_count(&self) -> usize {
        match self.kind {
            NodeKind::Content => 1,
            NodeKind::Container => self.children.iter().map(Node::content_count).sum(),
        }
    }

    /// Number of container nodes below this node, not counting itself.
    pub fn group_count(&self) -> usize {
        self.groups().map(|g| 1 + g.group_count()).sum()
    }
}
