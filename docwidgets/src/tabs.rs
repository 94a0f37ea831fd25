//! Tab group controller.
//!
//! Exactly one tab head per group is active at a time (or none before first
//! interaction), and the contents wrapper shows exactly the pane whose
//! identifier matches the active head's target. Re-activating the current tab
//! is a distinguished no-op so subscribers can special-case it.

use docdom::{EventQueue, NodeId, Role, Tree, UiEvent};

#[derive(Debug, Clone, Copy, Default)]
pub struct TabsController;

impl TabsController {
    pub fn new() -> Self {
        Self
    }

    /// User-facing entry point.
    pub fn on_activate(&self, tree: &mut Tree, queue: &mut EventQueue, tab: NodeId) {
        if tree.is_active(tab) {
            queue.push(UiEvent::TabAlreadyShown { tab });
            return;
        }

        self.show(tree, tab);
        queue.push(UiEvent::TabShown { tab });
    }

    /// Activate `tab` and reveal its content pane.
    pub fn show(&self, tree: &mut Tree, tab: NodeId) {
        self.highlight(tree, tab);
        self.show_content(tree, tab);
    }

    /// Deactivate all siblings and activate `tab`.
    pub fn highlight(&self, tree: &mut Tree, tab: NodeId) {
        for sibling in tree.siblings(tab) {
            tree.set_active(sibling, sibling == tab);
        }
    }

    /// Deactivate every head in `tab`'s group without touching content
    /// visibility. Used to reset highlighting when a containing panel
    /// collapses.
    pub fn clear(&self, tree: &mut Tree, tab: NodeId) {
        log::debug!("[tabs] clearing highlight around {}", tree.id_of(tab));
        for sibling in tree.siblings(tab) {
            tree.set_active(sibling, false);
        }
    }

    /// Hide every pane in the contents wrapper, then show the one whose
    /// identifier equals `tab`'s target. No-op when nothing matches; not
    /// every tab has content.
    pub fn show_content(&self, tree: &mut Tree, tab: NodeId) {
        let Some(wrapper) = self.contents_wrapper(tree, tab) else {
            return;
        };

        for pane in tree.children(wrapper).to_vec() {
            tree.set_shown(pane, false);
        }

        let Some(target) = tree.target(tab).map(str::to_owned) else {
            return;
        };
        let pane = tree
            .children(wrapper)
            .iter()
            .copied()
            .find(|pane| tree.identifier(*pane) == Some(target.as_str()));
        if let Some(pane) = pane {
            tree.set_shown(pane, true);
        }
    }

    /// Ascend to the nearest wrapper, descend to its contents child. Pure
    /// lookup, no mutation.
    ///
    /// A panel acts as the wrapper for the tab heads in its header region,
    /// with the panel's content container holding the panes. Standalone tab
    /// groups use the dedicated wrapper/contents roles.
    pub fn contents_wrapper(&self, tree: &Tree, tab: NodeId) -> Option<NodeId> {
        let wrapper = tree.closest_any(tab, &[Role::TabWrapper, Role::Panel])?;
        match tree.role(wrapper) {
            Role::Panel => tree.child_with_role(wrapper, Role::PanelContent),
            _ => tree.child_with_role(wrapper, Role::TabContents),
        }
    }
}
