use crate::weight::Weight;

pub const INFINITE_WEIGHT: Weight = f64::INFINITY;

pub const NODE_KIND: &str = "N";
pub const CONNECTION_KIND: &str = "C";

pub(crate) const COMMENT_MARKER: char = '#';
pub(crate) const FIELD_DELIMITER: char = ',';

/// id marker + node id + status, cost so far, heuristic, total, previous + x, y
pub(crate) const NODE_MIN_FIELDS: usize = 9;
/// Trailing plot position, plot label and name columns are optional.
pub(crate) const NODE_MAX_FIELDS: usize = 12;
pub(crate) const NODE_NAME_FIELD: usize = 11;

pub(crate) const CONNECTION_FIELDS: usize = 7;
