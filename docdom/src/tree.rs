//! Arena-backed page tree.
//!
//! The whole element tree is created once at page load by mounting a [`Node`]
//! builder tree; interaction only toggles flags. Controllers hold no node
//! data of their own: they query and mutate shared tree state through the
//! handle-based surface below.

use std::collections::HashMap;

use thiserror::Error;

use crate::element::{Node, Role};
use crate::reveal::{RevealConfig, RevealKind, RevealRequest};

/// Stable handle to a mounted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Error)]
pub enum MountError {
    #[error("duplicate element id: {0}")]
    DuplicateId(String),
}

#[derive(Debug)]
struct NodeRecord {
    id: String,
    role: Role,
    identifier: Option<String>,
    target: Option<String>,
    value: Option<String>,
    selected: Option<String>,
    resource: bool,
    active: bool,
    shown: bool,
    decorated: bool,
    reveal: Option<RevealConfig>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A mounted page tree.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<NodeRecord>,
    index: HashMap<String, NodeId>,
    pending_reveals: Vec<RevealRequest>,
}

impl Tree {
    /// Flatten a builder tree into the arena.
    ///
    /// Child order is preserved, so arena child order is document order.
    pub fn mount(root: Node) -> Result<Self, MountError> {
        let mut tree = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            pending_reveals: Vec::new(),
        };
        tree.insert(root, None)?;
        log::debug!("[tree] mounted {} nodes", tree.nodes.len());
        Ok(tree)
    }

    fn insert(&mut self, node: Node, parent: Option<NodeId>) -> Result<NodeId, MountError> {
        let id = NodeId(self.nodes.len());
        if self.index.insert(node.id.clone(), id).is_some() {
            return Err(MountError::DuplicateId(node.id));
        }

        self.nodes.push(NodeRecord {
            id: node.id,
            role: node.role,
            identifier: node.identifier,
            target: node.target,
            value: node.value,
            selected: node.selected,
            resource: node.resource,
            active: node.active,
            shown: node.shown,
            decorated: false,
            reveal: node.reveal,
            text: node.text,
            parent,
            children: Vec::new(),
        });

        for child in node.children {
            let child_id = self.insert(child, Some(id))?;
            self.nodes[id.0].children.push(child_id);
        }

        Ok(id)
    }

    fn record(&self, id: NodeId) -> &NodeRecord {
        &self.nodes[id.0]
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node by its string id.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    pub fn id_of(&self, id: NodeId) -> &str {
        &self.record(id).id
    }

    pub fn role(&self, id: NodeId) -> Role {
        self.record(id).role
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.record(id).parent
    }

    /// Direct children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.record(id).children
    }

    /// Children of the parent, including `id` itself. The root is its own
    /// only sibling.
    pub fn siblings(&self, id: NodeId) -> Vec<NodeId> {
        match self.record(id).parent {
            Some(parent) => self.record(parent).children.clone(),
            None => vec![id],
        }
    }

    /// Nearest ancestor-or-self with the given role.
    pub fn closest(&self, id: NodeId, role: Role) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.record(node).role == role {
                return Some(node);
            }
            current = self.record(node).parent;
        }
        None
    }

    /// Nearest ancestor-or-self whose role is in `roles`.
    pub fn closest_any(&self, id: NodeId, roles: &[Role]) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if roles.contains(&self.record(node).role) {
                return Some(node);
            }
            current = self.record(node).parent;
        }
        None
    }

    /// First direct child with the given role.
    pub fn child_with_role(&self, id: NodeId, role: Role) -> Option<NodeId> {
        self.record(id)
            .children
            .iter()
            .copied()
            .find(|child| self.record(*child).role == role)
    }

    /// First descendant with the given role, depth-first in document order.
    /// Does not consider `id` itself.
    pub fn descendant_with_role(&self, id: NodeId, role: Role) -> Option<NodeId> {
        for child in &self.record(id).children {
            if self.record(*child).role == role {
                return Some(*child);
            }
            if let Some(found) = self.descendant_with_role(*child, role) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given role, depth-first in document order.
    pub fn descendants_with_role(&self, id: NodeId, role: Role) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_descendants(id, role, &mut found);
        found
    }

    fn collect_descendants(&self, id: NodeId, role: Role, found: &mut Vec<NodeId>) {
        for child in &self.record(id).children {
            if self.record(*child).role == role {
                found.push(*child);
            }
            self.collect_descendants(*child, role, found);
        }
    }

    // =========================================================================
    // Attributes and flags
    // =========================================================================

    pub fn identifier(&self, id: NodeId) -> Option<&str> {
        self.record(id).identifier.as_deref()
    }

    pub fn target(&self, id: NodeId) -> Option<&str> {
        self.record(id).target.as_deref()
    }

    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.record(id).value.as_deref()
    }

    pub fn selected(&self, id: NodeId) -> Option<&str> {
        self.record(id).selected.as_deref()
    }

    pub fn is_resource(&self, id: NodeId) -> bool {
        self.record(id).resource
    }

    pub fn is_active(&self, id: NodeId) -> bool {
        self.record(id).active
    }

    pub fn is_decorated(&self, id: NodeId) -> bool {
        self.record(id).decorated
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.record(id).text.as_deref()
    }

    /// The node's own display flag, ignoring ancestors.
    pub fn is_shown(&self, id: NodeId) -> bool {
        self.record(id).shown
    }

    /// Effective visibility: the node and every ancestor are shown. A node
    /// inside a collapsed subtree is not visible even when its own flag is
    /// set.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if !self.record(node).shown {
                return false;
            }
            current = self.record(node).parent;
        }
        true
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    pub fn set_active(&mut self, id: NodeId, active: bool) {
        self.nodes[id.0].active = active;
    }

    pub fn set_shown(&mut self, id: NodeId, shown: bool) {
        self.nodes[id.0].shown = shown;
    }

    pub fn set_decorated(&mut self, id: NodeId, decorated: bool) {
        self.nodes[id.0].decorated = decorated;
    }

    pub fn set_selected(&mut self, id: NodeId, value: Option<String>) {
        self.nodes[id.0].selected = value;
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = Some(text.into());
    }

    /// Show the node, recording an animation request when it carries a
    /// reveal configuration.
    pub fn reveal(&mut self, id: NodeId) {
        self.animate_visibility(id, true, RevealKind::Show);
    }

    /// Hide the node, recording an animation request when it carries a
    /// reveal configuration.
    pub fn conceal(&mut self, id: NodeId) {
        self.animate_visibility(id, false, RevealKind::Hide);
    }

    fn animate_visibility(&mut self, id: NodeId, shown: bool, kind: RevealKind) {
        self.nodes[id.0].shown = shown;
        if let Some(config) = self.nodes[id.0].reveal {
            log::trace!("[tree] {kind:?} animation on {}", self.nodes[id.0].id);
            self.pending_reveals.push(RevealRequest {
                node: id,
                kind,
                config,
            });
        }
    }

    /// Drain pending animation requests. The renderer consumes these on its
    /// own schedule; logical state has already changed by the time a request
    /// is observed.
    pub fn take_reveals(&mut self) -> Vec<RevealRequest> {
        std::mem::take(&mut self.pending_reveals)
    }
}
