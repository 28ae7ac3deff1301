//! `recseed check` command implementation
//!
//! Verifies the catalog is reachable and the credentials work by listing
//! the item properties.

use crate::api::CatalogClient;
use crate::config::Config;
use crate::error::Result;
use crate::progress;
use colored::Colorize;

/// Probe catalog connectivity
pub async fn run(config: &Config) -> Result<()> {
    let client = CatalogClient::from_config(config)?;

    let spinner = progress::create_spinner("Checking catalog connectivity...");
    let result = client
        .list_properties(recseed_common::types::PropertyScope::Item)
        .await;
    spinner.finish_and_clear();

    let properties = result?;

    println!(
        "{} Catalog '{}' reachable at {}",
        "✓".green(),
        client.database_id(),
        client.base_url()
    );

    if properties.is_empty() {
        println!("No item properties declared yet. Run 'recseed run' to seed the catalog.");
        return Ok(());
    }

    println!("Item properties:");
    for property in &properties {
        println!("  • {} ({})", property.name, property.property_type);
    }

    Ok(())
}
