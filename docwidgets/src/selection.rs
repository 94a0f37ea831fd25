//! Multi-axis content selector.
//!
//! Each axis records one selection independently; the wrapper shows the pane
//! whose identifier equals the composite key of all axis selections. Axes are
//! always visited in document order, so the same selections yield the same key
//! regardless of click order.

use docdom::{NodeId, Role, Tree};

/// Namespace token prefixing every composite key.
pub const COMPOSITE_NAMESPACE: &str = "multi-selection";

/// Separator between the namespace and each axis value.
pub const COMPOSITE_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSelection;

impl MultiSelection {
    pub fn new() -> Self {
        Self
    }

    /// User-facing entry point: record `item`'s value on its axis, highlight
    /// it, and re-derive the visible pane from the fresh composite key.
    pub fn on_activate(&self, tree: &mut Tree, item: NodeId) {
        let Some(wrapper) = tree.closest(item, Role::SelectionWrapper) else {
            log::debug!("[selection] item {} has no wrapper", tree.id_of(item));
            return;
        };

        self.record_selection(tree, item);
        self.highlight_item(tree, item);

        let key = self.content_identifier(tree, wrapper);
        self.show_content(tree, wrapper, key.as_deref());
    }

    /// Overwrite the axis's recorded value with `item`'s. Prior content stays
    /// visible until the caller re-derives it.
    pub fn record_selection(&self, tree: &mut Tree, item: NodeId) {
        let Some(axis) = tree.closest(item, Role::SelectionAxis) else {
            return;
        };
        let value = tree.value(item).map(str::to_owned);
        tree.set_selected(axis, value);
    }

    /// Highlight `item` among its axis siblings.
    pub fn highlight_item(&self, tree: &mut Tree, item: NodeId) {
        for sibling in tree.siblings(item) {
            tree.set_active(sibling, sibling == item);
        }
    }

    /// The composite key: namespace plus every axis's recorded value, in
    /// document order. `None` when any axis has nothing recorded yet; no pane
    /// carries such a key, so nothing would show either way.
    pub fn content_identifier(&self, tree: &Tree, wrapper: NodeId) -> Option<String> {
        let mut key = String::from(COMPOSITE_NAMESPACE);
        for child in tree.children(wrapper) {
            if tree.role(*child) != Role::SelectionAxis {
                continue;
            }
            let selected = tree.selected(*child)?;
            key.push_str(COMPOSITE_SEPARATOR);
            key.push_str(selected);
        }
        Some(key)
    }

    /// Hide every pane, then show the one matching `key`. All panes stay
    /// hidden when no pane matches; absence is a content-authoring choice,
    /// not an error.
    pub fn show_content(&self, tree: &mut Tree, wrapper: NodeId, key: Option<&str>) {
        let Some(contents) = tree.child_with_role(wrapper, Role::SelectionContents) else {
            return;
        };

        for pane in tree.children(contents).to_vec() {
            tree.set_shown(pane, false);
        }

        let Some(key) = key else {
            return;
        };
        let pane = tree
            .children(contents)
            .iter()
            .copied()
            .find(|pane| tree.identifier(*pane) == Some(key));
        match pane {
            Some(pane) => tree.set_shown(pane, true),
            None => log::debug!("[selection] no pane for key {key}"),
        }
    }
}
