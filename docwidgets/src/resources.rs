//! Cross-widget reconciliation for the resources section.
//!
//! The coordinator composes the collapsible and tab controllers without being
//! composed by them: it consumes their queued events and applies policy that
//! spans widget boundaries. Its handlers may invoke the controllers again,
//! which queue further events; the page runtime drains the queue to
//! completion within one user action.

use docdom::{EventQueue, NodeId, Role, Tree, UiEvent};

use crate::collapsible::CollapsibleController;
use crate::tabs::TabsController;

pub struct ResourceCoordinator {
    collapsible: CollapsibleController,
    tabs: TabsController,
    /// The tracked top-level panel set: header decoration is derived over
    /// this container's direct panel children.
    resources: NodeId,
}

impl ResourceCoordinator {
    pub fn new(
        collapsible: CollapsibleController,
        tabs: TabsController,
        resources: NodeId,
    ) -> Self {
        Self {
            collapsible,
            tabs,
            resources,
        }
    }

    /// Reconcile one queued event. Resource-tab policy only applies to tab
    /// heads carrying the resource marker; all other tab groups are left
    /// alone.
    pub fn handle(&self, tree: &mut Tree, queue: &mut EventQueue, event: UiEvent) {
        match event {
            UiEvent::TabShown { tab } => {
                if tree.is_resource(tab) {
                    self.handle_tab_shown(tree, queue, tab);
                    self.refresh_header_decoration(tree);
                }
            }
            UiEvent::TabAlreadyShown { tab } => {
                if tree.is_resource(tab) {
                    self.handle_tab_already_shown(tree, queue, tab);
                }
            }
            UiEvent::PanelOpened { .. } => {
                self.refresh_header_decoration(tree);
            }
            UiEvent::PanelClosed { panel } => {
                self.clear_resource_tabs(tree, panel);
                self.refresh_header_decoration(tree);
            }
        }
    }

    /// A resource tab inside a closed panel was selected directly: auto-open
    /// the enclosing panel so the tab's content actually becomes visible.
    fn handle_tab_shown(&self, tree: &mut Tree, queue: &mut EventQueue, tab: NodeId) {
        let contents_visible = self
            .tabs
            .contents_wrapper(tree, tab)
            .is_some_and(|wrapper| tree.is_visible(wrapper));
        if contents_visible {
            return;
        }

        if let Some(panel) = tree.closest(tab, Role::Panel) {
            log::debug!("[resources] auto-opening {} for nested tab", tree.id_of(panel));
            self.collapsible.open(tree, queue, panel);
        }
    }

    /// Re-clicking the active resource tab collapses the panel instead of
    /// being a no-op, and drops the now-stale highlight.
    fn handle_tab_already_shown(&self, tree: &mut Tree, queue: &mut EventQueue, tab: NodeId) {
        if let Some(panel) = tree.closest(tab, Role::Panel) {
            self.collapsible.close(tree, queue, panel);
        }
        self.tabs.clear(tree, tab);
    }

    /// Direct activation of a panel's toggle link, the second interaction
    /// inside the same panel. Panels without a children subtree do not
    /// support it.
    pub fn on_toggle_link(&self, tree: &mut Tree, queue: &mut EventQueue, link: NodeId) {
        let Some(panel) = tree.closest(link, Role::Panel) else {
            return;
        };
        let Some(content) = tree.child_with_role(panel, Role::PanelContent) else {
            return;
        };
        let Some(children) = tree.child_with_role(content, Role::ResourceChildren) else {
            return;
        };

        if tree.is_active(panel) {
            if tree.is_visible(children) {
                // Children already showing: the toggle acts as a plain close.
                self.collapsible.close(tree, queue, panel);
            } else {
                // Switch content to the children view; the panel stays open
                // and no open/close event is emitted on this path.
                self.clear_resource_tabs(tree, panel);
                self.show_children(tree, content, children);
            }
        } else {
            // Pre-select the children view, then open through the normal path.
            self.show_children(tree, content, children);
            self.collapsible.open(tree, queue, panel);
        }
    }

    fn show_children(&self, tree: &mut Tree, content: NodeId, children: NodeId) {
        for sibling in tree.children(content).to_vec() {
            tree.set_shown(sibling, false);
        }
        tree.set_shown(children, true);
    }

    /// Reset highlighting for the resource tab group nested under the panel's
    /// header region, so a collapsed panel never reopens with a stale
    /// highlighted tab.
    fn clear_resource_tabs(&self, tree: &mut Tree, panel: NodeId) {
        let Some(header) = tree.child_with_role(panel, Role::PanelHeader) else {
            return;
        };
        let head = tree
            .descendants_with_role(header, Role::TabHead)
            .into_iter()
            .find(|head| tree.is_resource(*head));
        if let Some(head) = head {
            self.tabs.clear(tree, head);
        }
    }

    /// Derived header decoration, reconstructed fresh from current flags
    /// after every state-affecting event rather than tracked incrementally.
    ///
    /// The open top-level panel is decorated iff its visible content is the
    /// children subtree and that subtree's first child holds an open nested
    /// panel. The search is one level deep.
    pub fn refresh_header_decoration(&self, tree: &mut Tree) {
        let panel = tree
            .children(self.resources)
            .iter()
            .copied()
            .find(|child| tree.role(*child) == Role::Panel && tree.is_active(*child));
        let Some(panel) = panel else {
            return;
        };
        let Some(header) = tree.child_with_role(panel, Role::PanelHeader) else {
            return;
        };

        tree.set_decorated(header, false);

        let Some(content) = tree.child_with_role(panel, Role::PanelContent) else {
            return;
        };
        let Some(children) = tree.child_with_role(content, Role::ResourceChildren) else {
            return;
        };
        if !tree.is_visible(children) {
            return;
        }

        let Some(first) = tree.children(children).first().copied() else {
            return;
        };
        let nested_open = tree
            .children(first)
            .iter()
            .any(|child| tree.role(*child) == Role::Panel && tree.is_active(*child));
        if nested_open {
            tree.set_decorated(header, true);
        }
    }
}
