//! Stats endpoint

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::stats::aggregate;
use crate::types::Stats;

/// GET /api/stats - Totals, per-type counts and recent activity
///
/// Recomputed from a fresh reload of the snapshot on every call.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<Stats> {
    let log = state.history.load();
    Json(aggregate(&log))
}
