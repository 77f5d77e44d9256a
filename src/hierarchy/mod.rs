pub mod bounds;
pub mod node;
pub mod resolver;
pub mod xpath;
