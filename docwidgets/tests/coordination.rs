use docdom::{Node, NodeId, Tree, UiEvent};
use docwidgets::Page;

// ============================================================================
// Helpers
// ============================================================================

/// One top-level resource panel in the teacher page shape: resource method
/// tabs in the header, method panes and a nested children subtree in the
/// content. The nested child resource is itself a collapsible panel.
fn resource_panel(suffix: &str) -> Node {
    Node::panel()
        .id(format!("panel-{suffix}"))
        .child(
            Node::panel_header()
                .id(format!("header-{suffix}"))
                .child(Node::panel_link().id(format!("link-{suffix}")))
                .child(Node::resource_toggle().id(format!("toggle-{suffix}")))
                .child(
                    Node::group()
                        .id(format!("methods-{suffix}"))
                        .child(
                            Node::tab_head(format!("get-{suffix}"))
                                .id(format!("tab-get-{suffix}"))
                                .resource(true),
                        )
                        .child(
                            Node::tab_head(format!("post-{suffix}"))
                                .id(format!("tab-post-{suffix}"))
                                .resource(true),
                        ),
                ),
        )
        .child(
            Node::panel_content()
                .id(format!("content-{suffix}"))
                .hidden()
                .child(
                    Node::group()
                        .id(format!("pane-get-{suffix}"))
                        .identifier(format!("get-{suffix}"))
                        .hidden(),
                )
                .child(
                    Node::group()
                        .id(format!("pane-post-{suffix}"))
                        .identifier(format!("post-{suffix}"))
                        .hidden(),
                )
                .child(
                    Node::resource_children()
                        .id(format!("children-{suffix}"))
                        .hidden()
                        .child(
                            Node::group().id(format!("child-list-{suffix}")).child(
                                Node::panel()
                                    .id(format!("panel-{suffix}-nested"))
                                    .child(
                                        Node::panel_header()
                                            .id(format!("header-{suffix}-nested"))
                                            .child(
                                                Node::panel_link()
                                                    .id(format!("link-{suffix}-nested")),
                                            ),
                                    )
                                    .child(
                                        Node::panel_content()
                                            .id(format!("content-{suffix}-nested"))
                                            .hidden(),
                                    ),
                            ),
                        ),
                ),
        )
}

fn resources_page() -> Page {
    let root = Node::group().id("root").child(
        Node::group()
            .id("resources")
            .child(resource_panel("a"))
            .child(resource_panel("b")),
    );

    let tree = Tree::mount(root).unwrap();
    let resources = tree.find("resources").unwrap();
    Page::new(tree, resources)
}

fn node(page: &Page, id: &str) -> NodeId {
    page.tree().find(id).unwrap()
}

// ============================================================================
// Resource tabs auto-open their panel
// ============================================================================

#[test]
fn resource_tab_inside_closed_panel_opens_it() {
    let mut page = resources_page();

    // Bypass the header link entirely: click the nested tab directly.
    page.activate_by_id("tab-get-a");

    let tree = page.tree();
    assert!(tree.is_active(node(&page, "panel-a")));
    assert!(tree.is_shown(node(&page, "content-a")));
    assert!(tree.is_active(node(&page, "tab-get-a")));
    assert!(tree.is_visible(node(&page, "pane-get-a")));
    assert!(!tree.is_shown(node(&page, "pane-post-a")));
    assert_eq!(
        page.take_events(),
        vec![
            UiEvent::TabShown {
                tab: node(&page, "tab-get-a")
            },
            UiEvent::PanelOpened {
                panel: node(&page, "panel-a")
            },
        ]
    );
}

#[test]
fn switching_method_tabs_in_an_open_panel_does_not_reopen() {
    let mut page = resources_page();
    page.activate_by_id("tab-get-a");
    page.take_events();

    page.activate_by_id("tab-post-a");

    let tree = page.tree();
    assert!(tree.is_visible(node(&page, "pane-post-a")));
    assert!(!tree.is_shown(node(&page, "pane-get-a")));
    // Contents were already visible: no panel event this time.
    assert_eq!(
        page.take_events(),
        vec![UiEvent::TabShown {
            tab: node(&page, "tab-post-a")
        }]
    );
}

#[test]
fn reclicking_the_active_resource_tab_collapses_the_panel() {
    let mut page = resources_page();
    page.activate_by_id("tab-get-a");
    page.take_events();

    page.activate_by_id("tab-get-a");

    let tree = page.tree();
    assert!(!tree.is_active(node(&page, "panel-a")));
    assert!(!tree.is_shown(node(&page, "content-a")));
    // The collapse also drops the highlight, unlike the plain-tab no-op.
    assert!(!tree.is_active(node(&page, "tab-get-a")));
    assert_eq!(
        page.take_events(),
        vec![
            UiEvent::TabAlreadyShown {
                tab: node(&page, "tab-get-a")
            },
            UiEvent::PanelClosed {
                panel: node(&page, "panel-a")
            },
        ]
    );
}

#[test]
fn closing_a_panel_clears_its_resource_tab_highlight() {
    let mut page = resources_page();
    page.activate_by_id("tab-get-a");
    assert!(page.tree().is_active(node(&page, "tab-get-a")));

    // Opening the sibling closes panel A, which must drop A's highlight.
    page.activate_by_id("link-b");

    let tree = page.tree();
    assert!(!tree.is_active(node(&page, "panel-a")));
    assert!(!tree.is_active(node(&page, "tab-get-a")));
    assert!(tree.is_active(node(&page, "panel-b")));
}

// ============================================================================
// Toggle link
// ============================================================================

#[test]
fn toggle_on_closed_panel_opens_with_children_view() {
    let mut page = resources_page();
    page.activate_by_id("toggle-a");

    let tree = page.tree();
    assert!(tree.is_active(node(&page, "panel-a")));
    assert!(tree.is_visible(node(&page, "children-a")));
    assert!(!tree.is_shown(node(&page, "pane-get-a")));
    assert_eq!(
        page.take_events(),
        vec![UiEvent::PanelOpened {
            panel: node(&page, "panel-a")
        }]
    );
}

#[test]
fn toggle_switches_open_panel_to_children_without_events() {
    let mut page = resources_page();
    page.activate_by_id("tab-get-a");
    page.take_events();
    assert!(page.tree().is_visible(node(&page, "pane-get-a")));

    page.activate_by_id("toggle-a");

    let tree = page.tree();
    assert!(tree.is_active(node(&page, "panel-a")));
    assert!(tree.is_visible(node(&page, "children-a")));
    assert!(!tree.is_shown(node(&page, "pane-get-a")));
    // The stale method highlight is dropped as part of the switch.
    assert!(!tree.is_active(node(&page, "tab-get-a")));
    // No open/close event on this path: the panel never changed state.
    assert_eq!(page.take_events(), vec![]);
}

#[test]
fn toggle_with_children_already_visible_closes_the_panel() {
    let mut page = resources_page();
    page.activate_by_id("toggle-a");
    page.take_events();

    page.activate_by_id("toggle-a");

    let tree = page.tree();
    assert!(!tree.is_active(node(&page, "panel-a")));
    assert!(!tree.is_shown(node(&page, "content-a")));
    assert_eq!(
        page.take_events(),
        vec![UiEvent::PanelClosed {
            panel: node(&page, "panel-a")
        }]
    );
}

#[test]
fn toggle_without_children_subtree_is_a_no_op() {
    let root = Node::group().id("root").child(
        Node::group().id("resources").child(
            Node::panel()
                .id("panel-plain")
                .child(
                    Node::panel_header()
                        .id("header-plain")
                        .child(Node::panel_link().id("link-plain"))
                        .child(Node::resource_toggle().id("toggle-plain")),
                )
                .child(Node::panel_content().id("content-plain").hidden()),
        ),
    );
    let tree = Tree::mount(root).unwrap();
    let resources = tree.find("resources").unwrap();
    let mut page = Page::new(tree, resources);

    page.activate_by_id("toggle-plain");

    assert!(!page.tree().is_active(node(&page, "panel-plain")));
    assert_eq!(page.take_events(), vec![]);
}

// ============================================================================
// Header decoration
// ============================================================================

#[test]
fn opening_a_nested_panel_decorates_the_enclosing_header() {
    let mut page = resources_page();
    page.activate_by_id("toggle-a");
    assert!(!page.tree().is_decorated(node(&page, "header-a")));

    page.activate_by_id("link-a-nested");

    let tree = page.tree();
    assert!(tree.is_active(node(&page, "panel-a-nested")));
    assert!(tree.is_decorated(node(&page, "header-a")));
}

#[test]
fn closing_the_nested_panel_removes_the_decoration() {
    let mut page = resources_page();
    page.activate_by_id("toggle-a");
    page.activate_by_id("link-a-nested");
    assert!(page.tree().is_decorated(node(&page, "header-a")));

    page.activate_by_id("link-a-nested");

    assert!(!page.tree().is_active(node(&page, "panel-a-nested")));
    assert!(!page.tree().is_decorated(node(&page, "header-a")));
}

#[test]
fn decoration_is_dropped_when_method_view_replaces_children() {
    let mut page = resources_page();
    page.activate_by_id("toggle-a");
    page.activate_by_id("link-a-nested");
    assert!(page.tree().is_decorated(node(&page, "header-a")));

    // Selecting a method tab hides the children subtree; the decoration is
    // recomputed from the fresh flags, not carried over.
    page.activate_by_id("tab-get-a");

    let tree = page.tree();
    assert!(tree.is_visible(node(&page, "pane-get-a")));
    assert!(!tree.is_shown(node(&page, "children-a")));
    assert!(!tree.is_decorated(node(&page, "header-a")));
}

// ============================================================================
// Cross-panel sequences
// ============================================================================

#[test]
fn activation_storm_preserves_all_invariants() {
    let mut page = resources_page();

    let clicks = [
        "tab-get-a",
        "toggle-a",
        "link-a-nested",
        "tab-post-b",
        "tab-post-b",
        "toggle-b",
        "link-a",
        "tab-get-b",
        "link-b",
        "toggle-a",
    ];

    for id in clicks {
        page.activate_by_id(id);

        let tree = page.tree();
        let open = ["panel-a", "panel-b"]
            .iter()
            .filter(|panel| tree.is_active(node(&page, panel)))
            .count();
        assert!(open <= 1, "open-count invariant broken after {id}");

        for suffix in ["a", "b"] {
            // Panel state mirrors content visibility.
            assert_eq!(
                tree.is_active(node(&page, &format!("panel-{suffix}"))),
                tree.is_shown(node(&page, &format!("content-{suffix}"))),
                "panel/content drift after {id}"
            );

            // Method tab highlight count is 0 or 1.
            let active_tabs = [
                format!("tab-get-{suffix}"),
                format!("tab-post-{suffix}"),
            ]
            .iter()
            .filter(|tab| tree.is_active(node(&page, tab)))
            .count();
            assert!(active_tabs <= 1, "tab invariant broken after {id}");
        }
    }
}
