//! `recseed run` command implementation
//!
//! The full seeding pipeline, strictly sequential: item schema sync, item
//! upload from the CSV, then (unless skipped) user schema sync and synthetic
//! user upload. A failure anywhere aborts; the catalog may be left partially
//! populated, with no rollback and no resumption marker.

use crate::api::CatalogClient;
use crate::config::Config;
use crate::error::Result;
use crate::schema::{self, ensure_property, EnsureOutcome};
use crate::tracks::TrackReader;
use crate::{progress, upload, users};
use colored::Colorize;
use recseed_common::types::{PropertyScope, PropertyType};
use std::path::PathBuf;
use tracing::info;

/// Run the seeding pipeline
pub async fn run(
    config: &Config,
    csv: PathBuf,
    limit: usize,
    num_users: usize,
    skip_users: bool,
    seed: Option<u64>,
) -> Result<()> {
    let client = CatalogClient::from_config(config)?;
    info!(base_url = client.base_url(), database_id = client.database_id(), "Seeding catalog");

    println!("{} Syncing item properties...", "→".cyan());
    sync_properties(&client, PropertyScope::Item, schema::ITEM_PROPERTIES).await?;

    println!("{} Uploading items from {}...", "→".cyan(), csv.display());
    let tracks = TrackReader::with_cap(&csv, limit)?;
    let pb = progress::create_progress_bar(limit as u64, "Uploading items");
    let item_count = upload::upsert_items(&client, tracks, &pb).await?;
    pb.finish_and_clear();
    println!("{} Uploaded {} item(s)", "✓".green(), item_count);

    if skip_users {
        println!("\n{} Seeded {} item(s) (users skipped)", "✓".green().bold(), item_count);
        return Ok(());
    }

    println!("{} Syncing user properties...", "→".cyan());
    sync_properties(&client, PropertyScope::User, schema::USER_PROPERTIES).await?;

    println!("{} Generating {} user(s)...", "→".cyan(), num_users);
    let generated = users::generate(num_users, seed);
    let user_count = upload::upsert_users(&client, &generated).await?;

    println!(
        "\n{} Seeded {} item(s) and {} user(s)",
        "✓".green().bold(),
        item_count,
        user_count
    );

    Ok(())
}

/// Declare each property, tolerating ones that already exist.
async fn sync_properties(
    client: &CatalogClient,
    scope: PropertyScope,
    properties: &[(&str, PropertyType)],
) -> Result<()> {
    for &(name, property_type) in properties {
        match ensure_property(client, scope, name, property_type).await? {
            EnsureOutcome::Created => {
                println!("{} {} ({})", "✓".green(), name, property_type);
            },
            EnsureOutcome::AlreadyExists => {
                println!("{} {} ({}) already exists", "•".yellow(), name, property_type);
            },
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use recseed_common::types::Region;
    use serde_json::json;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        Config {
            database_id: "db-test".to_string(),
            private_token: "secret".to_string(),
            region: Region::EuWest,
            api_url: Some(base_url.to_string()),
            timeout: Duration::from_secs(5),
        }
    }

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_run_uploads_valid_rows_only() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path_regex("^/db-test/(items|users)/properties/.+$"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!("ok")))
            .expect(10)
            .mount(&server)
            .await;

        // 3 valid rows + 1 blank id -> 3 item upserts
        Mock::given(method("POST"))
            .and(path_regex("^/db-test/items/[^/]+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("ok")))
            .expect(3)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path_regex("^/db-test/users/user-[0-9]+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("ok")))
            .expect(2)
            .mount(&server)
            .await;

        let csv = write_csv(
            "track_id,track_name,track_artist,track_album_name,track_popularity,danceability\n\
             t1,S1,A1,Al1,10,0.1\n\
             ,S2,A2,Al2,20,0.2\n\
             t3,S3,A3,Al3,30,0.3\n\
             t4,S4,A4,Al4,40,0.4\n",
        );

        let config = test_config(&server.uri());
        run(&config, csv.path().to_path_buf(), 1000, 2, false, Some(7))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_run_skip_users_touches_no_user_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path_regex("^/db-test/items/properties/.+$"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "statusCode": 409,
                "message": "already exists"
            })))
            .expect(5)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path_regex("^/db-test/items/[^/]+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let csv = write_csv(
            "track_id,track_name,track_artist,track_album_name,track_popularity,danceability\n\
             t1,S1,A1,Al1,10,0.1\n",
        );

        let config = test_config(&server.uri());
        run(&config, csv.path().to_path_buf(), 1000, 20, true, None)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| !r.url.path().contains("/users/")));
    }

    #[tokio::test]
    async fn test_run_aborts_on_schema_error() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "statusCode": 401,
                "message": "Invalid token"
            })))
            .mount(&server)
            .await;

        let csv = write_csv(
            "track_id,track_name,track_artist,track_album_name,track_popularity,danceability\n\
             t1,S1,A1,Al1,10,0.1\n",
        );

        let config = test_config(&server.uri());
        let err = run(&config, csv.path().to_path_buf(), 1000, 20, false, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid token"));

        // Schema sync failed before any upload started
        let requests = server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.method.as_str() == "PUT"));
    }
}
