pub mod element;
pub mod event;
pub mod reveal;
pub mod tree;

pub use element::{Node, Role};
pub use event::{EventQueue, UiEvent};
pub use reveal::{Easing, RevealConfig, RevealKind, RevealRequest};
pub use tree::{MountError, NodeId, Tree};
