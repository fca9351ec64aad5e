//! Usage statistics over the history log
//!
//! Stateless: every call recomputes from the log it is given, which is
//! bounded by the store's retention limit.

use std::collections::BTreeMap;

use crate::types::{HistoryLog, Stats, TypeTag, RECENT_ACTIVITY_WINDOW};

/// Compute totals, per-type counts and recent activity for `log`
pub fn aggregate(log: &HistoryLog) -> Stats {
    let mut types_generated: BTreeMap<TypeTag, usize> = BTreeMap::new();
    for record in log {
        *types_generated.entry(record.type_tag).or_insert(0) += 1;
    }

    Stats {
        total_generated: log.len(),
        types_generated,
        recent_activity: log.recent(RECENT_ACTIVITY_WINDOW).to_vec(),
    }
}
