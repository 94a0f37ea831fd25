//! Per-page runtime: activation routing and event draining.
//!
//! One user activation is one transaction: the targeted controller runs
//! synchronously, then every queued event is handed to the coordinator until
//! the queue is empty. Handlers may queue further events; those are processed
//! in FIFO order within the same transaction. The drain is bounded so the
//! termination argument is checkable instead of implicit.

use docdom::{EventQueue, NodeId, Role, Tree, UiEvent};

use crate::collapsible::CollapsibleController;
use crate::resources::ResourceCoordinator;
use crate::selection::MultiSelection;
use crate::tabs::TabsController;

/// Upper bound on events handled per activation. No documented policy chain
/// re-triggers its own event kind, so hitting this indicates a policy bug.
const DRAIN_BUDGET: usize = 1024;

pub struct Page {
    tree: Tree,
    queue: EventQueue,
    collapsible: CollapsibleController,
    tabs: TabsController,
    selection: MultiSelection,
    coordinator: ResourceCoordinator,
    /// Events observed while draining, in dispatch order. External
    /// collaborators read these; tests assert on them.
    history: Vec<UiEvent>,
}

impl Page {
    /// Wire the controllers and coordinator over a mounted tree.
    /// `resources` is the container whose direct panel children the
    /// coordinator tracks.
    pub fn new(tree: Tree, resources: NodeId) -> Self {
        let collapsible = CollapsibleController::new();
        let tabs = TabsController::new();
        Self {
            tree,
            queue: EventQueue::new(),
            collapsible,
            tabs,
            selection: MultiSelection::new(),
            coordinator: ResourceCoordinator::new(collapsible, tabs, resources),
            history: Vec::new(),
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Events dispatched since the last call, in order.
    pub fn take_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.history)
    }

    /// Pointer activation on a node, routed by role. Non-interactive roles
    /// are ignored. All resulting state changes complete before this returns.
    pub fn activate(&mut self, node: NodeId) {
        match self.tree.role(node) {
            Role::PanelLink => {
                self.collapsible
                    .on_activate(&mut self.tree, &mut self.queue, node);
            }
            Role::TabHead => {
                self.tabs.on_activate(&mut self.tree, &mut self.queue, node);
            }
            Role::SelectionItem => {
                self.selection.on_activate(&mut self.tree, node);
            }
            Role::ResourceToggle => {
                self.coordinator
                    .on_toggle_link(&mut self.tree, &mut self.queue, node);
            }
            other => {
                log::debug!("[page] activation on non-interactive role {other:?}");
            }
        }

        self.drain();
    }

    /// Activation by string id; unknown ids are a logged no-op.
    pub fn activate_by_id(&mut self, id: &str) {
        match self.tree.find(id) {
            Some(node) => self.activate(node),
            None => log::debug!("[page] activation on unknown id {id}"),
        }
    }

    fn drain(&mut self) {
        let mut handled = 0;
        while let Some(event) = self.queue.pop() {
            handled += 1;
            if handled > DRAIN_BUDGET {
                log::warn!("[page] event drain budget exhausted, dropping {event:?}");
                break;
            }
            log::trace!("[page] dispatching {event:?}");
            self.history.push(event);
            self.coordinator.handle(&mut self.tree, &mut self.queue, event);
        }
    }
}
