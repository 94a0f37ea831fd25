mod node;

pub use node::{Node, Role};
