use crate::NavDirection;

/// Result of loop-boundary detection for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LoopStep {
    /// `-1`, `0` or `+1`.
    pub delta: i64,
    /// Whether the snapshot must record the focused key and loop offset.
    pub retrack: bool,
}

/// Returns the loop offset change implied by arriving at `position` while moving in `direction`.
///
/// Moving backward onto the last slot, or forward onto the first, means the carousel just
/// crossed its seam.
pub(crate) fn loop_delta(position: usize, len: usize, direction: Option<NavDirection>) -> i64 {
    match direction {
        Some(NavDirection::Backward) if position + 1 == len => -1,
        Some(NavDirection::Forward) if position == 0 => 1,
        _ => 0,
    }
}

pub(crate) fn track<K: PartialEq>(
    position: usize,
    len: usize,
    direction: Option<NavDirection>,
    current_key: &K,
    previous_key: Option<&K>,
) -> LoopStep {
    let delta = loop_delta(position, len, direction);
    LoopStep {
        delta,
        retrack: delta != 0 || previous_key != Some(current_key),
    }
}
