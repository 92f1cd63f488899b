mod instant_node;
pub use instant_node::*;

mod repeat_node;
pub use repeat_node::*;
