use anyhow::{Context, Result};
use aurum_core::catalog::NewItem;

use super::item_line;
use crate::app::AppState;

/// Adds a product and reports the id assigned by the catalog store.
pub async fn add(app: &AppState, item: NewItem) -> Result<()> {
    app.shop.set_admin_open(true).await;
    let result = app.shop.add_item(item).await;
    app.shop.set_admin_open(false).await;

    let added = result.context("Failed to add the product")?;
    println!("Added: {}", item_line(&added));
    Ok(())
}

/// Removes a product from the collection.
pub async fn remove(app: &AppState, id: &str) -> Result<()> {
    app.shop.set_admin_open(true).await;
    let result = app.shop.remove_item(id).await;
    app.shop.set_admin_open(false).await;

    result.with_context(|| format!("Failed to remove product '{id}'"))?;
    println!("Removed {id}");
    Ok(())
}
