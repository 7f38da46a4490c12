use anyhow::{Result, anyhow};
use aurum_core::catalog::{Gem, Metal};

use super::format_price;
use crate::app::AppState;

/// Customizes a piece and optionally bags it.
pub async fn run(
    app: &AppState,
    id: &str,
    metal: Option<Metal>,
    gem: Option<Gem>,
    add_to_cart: bool,
) -> Result<()> {
    let item = app
        .shop
        .find_item(id)
        .await
        .ok_or_else(|| anyhow!("No piece with id '{}' in the collection", id))?;

    println!("{} - {}", item.name, item.description);
    println!("  base: {} in {} with {}", format_price(item.price), item.metal, item.gem);
    app.shop.open_configurator(item).await;

    if let Some(metal) = metal {
        app.shop.select_metal(metal).await;
    }
    if let Some(gem) = gem {
        app.shop.select_gem(gem).await;
    }

    let snapshot = app.shop.snapshot().await;
    if let Some(draft) = &snapshot.draft {
        println!(
            "  configured: {} with {} - {}",
            draft.metal(),
            draft.gem(),
            draft.price().map_or_else(|| "price out of range".to_string(), format_price)
        );
    }

    if !add_to_cart {
        // Waiting lets the exit delay elapse before the process ends
        app.shop.close_configurator().await.await?;
        return Ok(());
    }

    match app.shop.add_configuration_to_cart().await {
        Some((entry, clear)) => {
            println!(
                "  added to bag as {} ({})",
                entry.cart_id,
                format_price(entry.item.price)
            );
            clear.await?;
            let cart = app.shop.snapshot().await.cart;
            let total = cart
                .total()
                .map_or_else(|| "out of range".to_string(), format_price);
            println!("  bag: {} item(s), total {}", cart.len(), total);
        }
        None => println!("  nothing to add"),
    }
    Ok(())
}
