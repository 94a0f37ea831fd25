//! Scripted walkthrough of a two-resource documentation page.
//!
//! Builds the page tree, renders the JSON examples, then replays a sequence
//! of pointer activations and prints the resulting widget state after each.
//!
//! Run with: cargo run --example doc_page

use std::fs::File;

use docdom::{Easing, Node, RevealConfig, Tree};
use docwidgets::{Page, render_json_examples};
use simplelog::{Config, LevelFilter, WriteLogger};

fn resource(suffix: &str, example: &str) -> Node {
    Node::panel()
        .id(format!("panel-{suffix}"))
        .child(
            Node::panel_header()
                .id(format!("header-{suffix}"))
                .child(Node::panel_link().id(format!("link-{suffix}")))
                .child(Node::resource_toggle().id(format!("toggle-{suffix}")))
                .child(
                    Node::group()
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
                .reveal(RevealConfig {
                    duration: std::time::Duration::from_millis(250),
                    easing: Easing::EaseInOut,
                })
                .child(
                    Node::group()
                        .id(format!("pane-get-{suffix}"))
                        .identifier(format!("get-{suffix}"))
                        .hidden()
                        .child(Node::json_example(example)),
                )
                .child(
                    Node::resource_children()
                        .id(format!("children-{suffix}"))
                        .hidden()
                        .child(
                            Node::group().child(
                                Node::panel()
                                    .id(format!("panel-{suffix}-child"))
                                    .child(Node::panel_header().child(
                                        Node::panel_link().id(format!("link-{suffix}-child")),
                                    ))
                                    .child(Node::panel_content().hidden()),
                            ),
                        ),
                ),
        )
}

fn report(page: &Page, after: &str) {
    let tree = page.tree();
    let open: Vec<&str> = ["panel-a", "panel-b", "panel-a-child", "panel-b-child"]
        .into_iter()
        .filter(|id| tree.find(id).is_some_and(|panel| tree.is_active(panel)))
        .collect();
    let decorated: Vec<&str> = ["header-a", "header-b"]
        .into_iter()
        .filter(|id| tree.find(id).is_some_and(|header| tree.is_decorated(header)))
        .collect();
    println!("after {after:<14} open: {open:?} decorated: {decorated:?}");
}

fn main() {
    let log_file = File::create("doc_page.log").expect("create log file");
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    let root = Node::group().id("root").child(
        Node::group()
            .id("resources")
            .child(resource("a", r#"{"id": 1, "name": "users", "active": true}"#))
            .child(resource("b", r#"{"id": 2, "tags": null}"#)),
    );

    let mut tree = Tree::mount(root).expect("mount page");
    render_json_examples(&mut tree);

    let resources = tree.find("resources").expect("resources container");
    let mut page = Page::new(tree, resources);

    for click in [
        "tab-get-a",     // auto-opens panel A from a nested tab
        "toggle-a",      // switch panel A to the children view
        "link-a-child",  // open the nested child resource
        "link-b",        // panel B displaces A entirely
        "link-b",        // plain close toggle
    ] {
        page.activate_by_id(click);
        for event in page.take_events() {
            println!("  event: {event:?}");
        }
        report(&page, click);
        for reveal in page.tree_mut().take_reveals() {
            println!("  animation: {:?} over {:?}", reveal.kind, reveal.config.duration);
        }
    }
}
