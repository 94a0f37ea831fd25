pub mod collapsible;
pub mod highlight;
pub mod page;
pub mod resources;
pub mod selection;
pub mod tabs;

pub use collapsible::CollapsibleController;
pub use highlight::{highlight_json, render_json_examples};
pub use page::Page;
pub use resources::ResourceCoordinator;
pub use selection::MultiSelection;
pub use tabs::TabsController;
