pub mod admin;
pub mod catalog;
pub mod chat;
pub mod configure;

use aurum_core::catalog::{Item, Price};

/// Formats a price the way the storefront shows it, e.g. `$12,500`.
pub fn format_price(price: Price) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if price < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// One catalog row: id, name, materials and price.
pub fn item_line(item: &Item) -> String {
    format!(
        "{:<12} {:<22} {:<9} {:<10} {:<9} {:>9}",
        item.id,
        item.name,
        item.category,
        item.metal,
        item.gem,
        format_price(item.price)
    )
}
