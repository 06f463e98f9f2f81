pub mod graph_parser;

pub use graph_parser::{GraphParser, is_comment};
