// Tree reader module: Doxygen XML into ordered element trees

mod node;
mod reader;

pub use node::*;
pub use reader::{parse_tree, read_tree_file};
