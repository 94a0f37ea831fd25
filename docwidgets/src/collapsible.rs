//! Collapsible panel controller.
//!
//! Panels live in sibling groups with at-most-one-open semantics. All state is
//! in the shared tree; the controller applies policy and emits events, nothing
//! more. Cross-panel effects are limited to the mutual-exclusion closing, which
//! goes through the single-panel close path so every closed sibling emits its
//! own `PanelClosed`.

use docdom::{EventQueue, NodeId, Role, Tree, UiEvent};

#[derive(Debug, Clone, Copy, Default)]
pub struct CollapsibleController;

impl CollapsibleController {
    pub fn new() -> Self {
        Self
    }

    /// User-facing entry point: toggle the panel enclosing `link`.
    ///
    /// Activating an already-open panel closes it; there is no reopen no-op.
    pub fn on_activate(&self, tree: &mut Tree, queue: &mut EventQueue, link: NodeId) {
        let Some(panel) = tree.closest(link, Role::Panel) else {
            log::debug!("[collapsible] link {} has no enclosing panel", tree.id_of(link));
            return;
        };

        if tree.is_active(panel) {
            self.close(tree, queue, panel);
        } else {
            self.open(tree, queue, panel);
        }
    }

    /// Open `panel`: close every other open sibling first, then mark it open
    /// and reveal its content.
    pub fn open(&self, tree: &mut Tree, queue: &mut EventQueue, panel: NodeId) {
        self.close_siblings(tree, queue, panel);

        log::debug!("[collapsible] opening {}", tree.id_of(panel));
        tree.set_active(panel, true);
        if let Some(content) = self.content_of(tree, panel) {
            tree.reveal(content);
        }
        queue.push(UiEvent::PanelOpened { panel });
    }

    /// Close `panel` and conceal its content.
    pub fn close(&self, tree: &mut Tree, queue: &mut EventQueue, panel: NodeId) {
        log::debug!("[collapsible] closing {}", tree.id_of(panel));
        tree.set_active(panel, false);
        if let Some(content) = self.content_of(tree, panel) {
            tree.conceal(content);
        }
        queue.push(UiEvent::PanelClosed { panel });
    }

    /// Close every open sibling panel of `panel`, one at a time.
    pub fn close_siblings(&self, tree: &mut Tree, queue: &mut EventQueue, panel: NodeId) {
        for sibling in tree.siblings(panel) {
            if sibling != panel
                && tree.role(sibling) == Role::Panel
                && tree.is_active(sibling)
            {
                self.close(tree, queue, sibling);
            }
        }
    }

    /// The panel's owned content subtree: a direct child by contract.
    pub fn content_of(&self, tree: &Tree, panel: NodeId) -> Option<NodeId> {
        tree.child_with_role(panel, Role::PanelContent)
    }
}
