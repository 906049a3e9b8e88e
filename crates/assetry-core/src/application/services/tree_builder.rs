//! Tree Builder - catalog directory → pruned asset tree.
//!
//! Below a group root every listing failure is treated as "no entries": the
//! directory is pruned and the run continues. Only the group root itself is
//! allowed to fail the run.

use std::path::Path;

use tracing::{debug, instrument, trace, warn};

use crate::{
    application::{ApplicationError, ports::AssetSource},
    domain::{AssetKind, Classification, NamePattern, Node, classify},
    error::AssetryResult,
};

/// Builds asset trees from an [`AssetSource`].
pub struct TreeBuilder<'a> {
    source: &'a dyn AssetSource,
    pattern: &'a NamePattern,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(source: &'a dyn AssetSource, pattern: &'a NamePattern) -> Self {
        Self { source, pattern }
    }

    /// Classify `name` (an entry of `base`) and build its subtree.
    ///
    /// Returns `None` for ignored entries and for containers left without
    /// any content after pruning.
    pub fn build(&self, name: &str, base: &Path) -> Option<Node> {
        match classify(name, self.pattern) {
            Classification::Container => {
                let path = base.join(name);
                let entries = self.source.list_dir(&path).unwrap_or_else(|e| {
                    debug!(path = %path.display(), error = %e, "Listing failed, pruning");
                    Vec::new()
                });
                let children = self.build_children(&entries, &path);
                (!children.is_empty()).then(|| Node::container(name, children))
            }
            Classification::Content(stripped) => Some(Node::content(stripped)),
            Classification::Ignored => {
                debug!(entry = name, dir = %base.display(), "Skipping entry");
                None
            }
        }
    }

    /// Build the tree for one asset group (`<catalog>/<root_dir>`).
    ///
    /// Unlike [`Self::build`], every failure here is fatal: the group must
    /// exist, be listable, and hold at least one asset.
    #[instrument(skip_all, fields(kind = %kind, root = root_dir))]
    pub fn build_group(&self, kind: AssetKind, catalog: &Path, root_dir: &str) -> AssetryResult<Node> {
        let path = catalog.join(root_dir);

        if !self.source.is_dir(&path) {
            return Err(ApplicationError::AssetGroupMissing { kind, path }.into());
        }

        let entries = self
            .source
            .list_dir(&path)
            .map_err(|e| ApplicationError::ListingFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let children = self.build_children(&entries, &path);
        if children.is_empty() {
            warn!(path = %path.display(), "Asset group is empty after pruning");
            return Err(ApplicationError::AssetGroupEmpty { kind, path }.into());
        }

        let tree = Node::container(root_dir, children);
        debug!(
            assets = tree.content_count(),
            groups = tree.group_count(),
            "Asset group built"
        );
        Ok(tree)
    }

    fn build_children(&self, entries: &[String], base: &Path) -> Vec<Node> {
        trace!(dir = %base.display(), ?entries, "Listing");
        entries
            .iter()
            .filter_map(|entry| self.build(entry, base))
            .collect()
    }
}
