use std::sync::atomic::{AtomicU64, Ordering};

use crate::reveal::RevealConfig;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The element roles the widget layer recognizes.
///
/// Roles replace the markup layer's data-attribute markers: each interactive
/// element carries exactly one role, and controllers locate their collaborators
/// by role-scoped tree queries (nearest ancestor panel, direct contents child)
/// instead of unrestricted traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Plain container with no widget meaning.
    Group,

    /// Collapsible unit with open/closed state. Siblings are mutually exclusive.
    Panel,
    /// The user-facing header link that toggles its enclosing panel.
    PanelLink,
    /// The panel's header region; carries the child-opened decoration.
    PanelHeader,
    /// The panel's owned content subtree; must be a direct child of the panel.
    PanelContent,

    /// Container reachable from any tab head by ascending.
    TabWrapper,
    /// A single tab selector carrying a target identifier.
    TabHead,
    /// Direct child of the wrapper holding one content pane per target.
    TabContents,

    /// Container for a multi-axis selector.
    SelectionWrapper,
    /// One axis of mutually exclusive choice items; records its selection.
    SelectionAxis,
    /// A single choice item carrying its axis value.
    SelectionItem,
    /// Content panes keyed by the composite key of all axis selections.
    SelectionContents,

    /// Second interaction inside a panel: toggles the children view.
    ResourceToggle,
    /// The nested child-resources subtree inside a panel's content.
    ResourceChildren,

    /// Pre-rendered JSON example payload, highlighted once at page-ready time.
    JsonExample,
}

impl Role {
    fn id_prefix(self) -> &'static str {
        match self {
            Role::Group => "group",
            Role::Panel => "panel",
            Role::PanelLink => "panel-link",
            Role::PanelHeader => "panel-header",
            Role::PanelContent => "panel-content",
            Role::TabWrapper => "tab-wrapper",
            Role::TabHead => "tab-head",
            Role::TabContents => "tab-contents",
            Role::SelectionWrapper => "selection-wrapper",
            Role::SelectionAxis => "selection-axis",
            Role::SelectionItem => "selection-item",
            Role::SelectionContents => "selection-contents",
            Role::ResourceToggle => "resource-toggle",
            Role::ResourceChildren => "resource-children",
            Role::JsonExample => "json-example",
        }
    }
}

/// Builder for a page's static element structure.
///
/// The markup layer declares the whole tree once at page load; after
/// [`Tree::mount`](crate::tree::Tree::mount) only the active/shown/decoration
/// flags change. Nodes own their children until mounted.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub role: Role,
    /// Stable content identifier on content panes.
    pub identifier: Option<String>,
    /// A tab head's target identifier.
    pub target: Option<String>,
    /// A selection item's contribution to the composite key.
    pub value: Option<String>,
    /// A selection axis's recorded selection.
    pub selected: Option<String>,
    /// Marks a tab head as participating in the panel auto-open policy.
    pub resource: bool,
    /// Open (panels) or highlighted (tab heads, selection items).
    pub active: bool,
    /// The element's own display flag.
    pub shown: bool,
    /// Animated reveal/hide configuration, if any.
    pub reveal: Option<RevealConfig>,
    /// Leaf text content.
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(role: Role) -> Self {
        Self {
            id: generate_id(role.id_prefix()),
            role,
            identifier: None,
            target: None,
            value: None,
            selected: None,
            resource: false,
            active: false,
            shown: true,
            reveal: None,
            text: None,
            children: Vec::new(),
        }
    }

    // Role constructors

    pub fn group() -> Self {
        Self::new(Role::Group)
    }

    pub fn panel() -> Self {
        Self::new(Role::Panel)
    }

    pub fn panel_link() -> Self {
        Self::new(Role::PanelLink)
    }

    pub fn panel_header() -> Self {
        Self::new(Role::PanelHeader)
    }

    pub fn panel_content() -> Self {
        Self::new(Role::PanelContent)
    }

    pub fn tab_wrapper() -> Self {
        Self::new(Role::TabWrapper)
    }

    pub fn tab_head(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::new(Role::TabHead)
        }
    }

    pub fn tab_contents() -> Self {
        Self::new(Role::TabContents)
    }

    pub fn selection_wrapper() -> Self {
        Self::new(Role::SelectionWrapper)
    }

    pub fn selection_axis() -> Self {
        Self::new(Role::SelectionAxis)
    }

    pub fn selection_item(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(Role::SelectionItem)
        }
    }

    pub fn selection_contents() -> Self {
        Self::new(Role::SelectionContents)
    }

    pub fn resource_toggle() -> Self {
        Self::new(Role::ResourceToggle)
    }

    pub fn resource_children() -> Self {
        Self::new(Role::ResourceChildren)
    }

    pub fn json_example(source: impl Into<String>) -> Self {
        Self {
            text: Some(source.into()),
            ..Self::new(Role::JsonExample)
        }
    }

    // Attributes

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the axis's initially recorded selection.
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn resource(mut self, resource: bool) -> Self {
        self.resource = resource;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn shown(mut self, shown: bool) -> Self {
        self.shown = shown;
        self
    }

    /// Start hidden (collapsed panel content, inactive tab panes).
    pub fn hidden(mut self) -> Self {
        self.shown = false;
        self
    }

    pub fn reveal(mut self, config: RevealConfig) -> Self {
        self.reveal = Some(config);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // Children

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}
