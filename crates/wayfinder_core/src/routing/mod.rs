pub mod astar;
mod open_set;
pub mod routing_path;
