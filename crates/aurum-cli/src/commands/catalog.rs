use anyhow::Result;
use aurum_core::shop::CatalogSource;

use super::item_line;
use crate::app::AppState;

fn source_note(source: &CatalogSource) -> String {
    match source {
        CatalogSource::Remote => "from the catalog store".to_string(),
        CatalogSource::FallbackEmpty => "house collection (catalog store is empty)".to_string(),
        CatalogSource::FallbackUnavailable { reason } => {
            format!("house collection (catalog store unavailable: {reason})")
        }
        CatalogSource::NotLoaded => "not loaded".to_string(),
    }
}

/// Lists the collection.
pub async fn list(app: &AppState) -> Result<()> {
    let catalog = app.shop.catalog().await;

    println!("THE COLLECTION - {}", source_note(&app.catalog_source));
    if catalog.is_empty() {
        println!("  No pieces available.");
        return Ok(());
    }
    for item in &catalog {
        println!("  {}", item_line(item));
    }
    Ok(())
}
