/// Simple aggregate statistics for the database.
///
/// Returned by [`LocationDb::stats`](crate::LocationDb::stats), these counts
/// reflect the materialized in-memory tree and are recomputed by full
/// traversal on every call.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub districts: usize,
    pub constituencies: usize,
    pub sub_counties: usize,
    pub electoral_areas: usize,
}
