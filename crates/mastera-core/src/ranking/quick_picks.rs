//! Homepage quick-pick curation
//!
//! Explicitly ordered picks always come first (by `quick_pick_order`), and
//! unordered picks fill whatever room is left, newest first.

use crate::entities::Work;

/// Number of unordered picks needed after `found` ordered ones
#[inline]
pub fn quick_pick_shortfall(limit: usize, found: usize) -> usize {
    limit.saturating_sub(found)
}

/// Concatenate both phases, preserving each phase's internal order
pub fn merge_quick_picks(ordered: Vec<Work>, recent: Vec<Work>, limit: usize) -> Vec<Work> {
    let mut picks: Vec<Work> = ordered.into_iter().take(limit).collect();
    let remaining = quick_pick_shortfall(limit, picks.len());
    picks.extend(recent.into_iter().take(remaining));
    picks
}
