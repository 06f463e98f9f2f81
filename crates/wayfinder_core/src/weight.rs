use crate::constants::INFINITE_WEIGHT;

/// Accumulated or per-connection travel cost.
pub type Weight = f64;

#[inline(always)]
pub fn is_reachable(weight: Weight) -> bool {
    weight < INFINITE_WEIGHT
}
