use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::{menu, store};
use crate::errors::ServiceError;

pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod stores;
pub mod supply;

/// How many times a write is retried after a transient lock conflict
/// before the error is surfaced to the caller.
pub(crate) const TRANSIENT_RETRY_ATTEMPTS: u32 = 2;

/// Backoff before retrying a transaction that hit a transient conflict.
/// Jitter keeps two colliding writers from retrying in lockstep.
pub(crate) fn transient_backoff(attempt: u32) -> Duration {
    let jitter = rand::thread_rng().gen_range(0..25u64);
    Duration::from_millis(25 * u64::from(attempt) + jitter)
}

/// Loads a store or fails with `NotFound`.
pub(crate) async fn ensure_store_exists<C>(
    db: &C,
    store_id: i64,
) -> Result<store::Model, ServiceError>
where
    C: ConnectionTrait,
{
    store::Entity::find_by_id(store_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Store {} not found", store_id)))
}

/// Batch-loads menu names for the given ids.
pub(crate) async fn load_menu_names<C, I>(
    db: &C,
    menu_ids: I,
) -> Result<HashMap<i64, String>, ServiceError>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = i64>,
{
    let mut ids: Vec<i64> = menu_ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(menu::Entity::find()
        .filter(menu::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_with_attempt_and_stays_bounded() {
        for attempt in 1..=TRANSIENT_RETRY_ATTEMPTS {
            let delay = transient_backoff(attempt);
            assert!(delay >= Duration::from_millis(25 * u64::from(attempt)));
            assert!(delay < Duration::from_millis(25 * u64::from(attempt) + 25));
        }
    }
}
