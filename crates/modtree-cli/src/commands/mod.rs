//! Command implementations.

mod graph;
mod tree;
mod utils;

pub use graph::execute as graph_execute;
pub use tree::execute as tree_execute;
pub use utils::{load_config, render_json, write_output};
