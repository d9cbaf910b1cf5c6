use chrono::{DateTime, TimeZone, Utc};

use crate::services::hash::fnv1a_hash;
use crate::utils::error::{AppError, AppResult};

/// Canonical hash key for a user on a given day: `"<fid>-<YYYY-MM-DD>"`.
///
/// Only the UTC calendar date of `date` is used; time of day and the source
/// timezone are dropped.
pub fn wish_key<Tz: TimeZone>(user_id: i64, date: &DateTime<Tz>) -> String {
    let day = date.with_timezone(&Utc).date_naive();
    format!("{}-{}", user_id, day.format("%Y-%m-%d"))
}

/// Index `hash(key) % wishes_count`; fails with `InvalidArgument` when `wishes_count <= 0`.
pub fn select_wish_index<Tz: TimeZone>(
    user_id: i64,
    date: &DateTime<Tz>,
    wishes_count: i64,
) -> AppResult<usize> {
    if wishes_count <= 0 {
        return Err(AppError::InvalidArgument(format!(
            "wishes_count must be positive, got {}",
            wishes_count
        )));
    }

    let hash = fnv1a_hash(&wish_key(user_id, date));
    let index = i64::from(hash) % wishes_count;

    Ok(index as usize)
}
