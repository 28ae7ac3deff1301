//! Bulk upserter
//!
//! One upsert request per record, sequential, cascade-create on. No
//! batching, no retry: the first failure aborts the remaining sequence and
//! leaves the catalog partially populated. Returns the number of successful
//! upserts.

use crate::api::CatalogClient;
use crate::error::Result;
use crate::tracks::TrackRecord;
use crate::users::UserRecord;
use colored::Colorize;
use indicatif::ProgressBar;
use recseed_common::types::PropertyScope;
use tracing::debug;

/// Upsert every track from the reader as a catalog item.
pub async fn upsert_items(
    client: &CatalogClient,
    tracks: impl Iterator<Item = TrackRecord>,
    progress: &ProgressBar,
) -> Result<u64> {
    let mut count = 0u64;

    for track in tracks {
        client
            .set_values(PropertyScope::Item, &track.id, &track.values(), true)
            .await?;
        count += 1;
        progress.inc(1);
        debug!(id = %track.id, count, "Item upserted");
    }

    Ok(count)
}

/// Upsert generated users, printing a confirmation line per user.
pub async fn upsert_users(client: &CatalogClient, users: &[UserRecord]) -> Result<u64> {
    let mut count = 0u64;

    for user in users {
        client
            .set_values(PropertyScope::User, &user.id, &user.values(), true)
            .await?;
        count += 1;
        println!(
            "{} {} {} ({})",
            "✓".green(),
            user.first_name,
            user.last_name,
            user.email
        );
    }

    Ok(count)
}
