use serde::Serialize;

use crate::{constants::NODE_KIND, define_id_newtype, location::Location};

define_id_newtype!(NodeId);

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    id: NodeId,
    location: Location,
    name: Option<String>,
}

impl Node {
    pub fn new(id: NodeId, location: Location) -> Self {
        Node {
            id,
            location,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(&self) -> &'static str {
        NODE_KIND
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Straight-line distance to `other`, used as the A* estimate.
    pub fn heuristic_distance(&self, other: &Node) -> f64 {
        self.location.euclidean_distance(&other.location)
    }
}
