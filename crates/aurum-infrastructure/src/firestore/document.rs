//! Firestore REST document encoding for catalog items.
//!
//! Firestore wraps every field in a typed value object, e.g.
//! `{"name": {"stringValue": "Halo"}, "price": {"integerValue": "12500"}}`.
//! Field names follow the storefront's camelCase item schema.

use aurum_core::catalog::{Category, Gem, Item, Metal, NewItem, Price};
use aurum_core::{AurumError, Result};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub(crate) struct Document {
    /// Full resource name, ending in `/documents/<collection>/<id>`
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    pub next_page_token: Option<String>,
}

/// Last path segment of a document resource name.
pub(crate) fn document_id(name: &str) -> Option<&str> {
    name.rsplit('/').next().filter(|id| !id.is_empty())
}

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

/// Request body for creating a document from `item`.
pub(crate) fn encode_item(item: &NewItem) -> Value {
    let mut fields = Map::new();
    fields.insert("name".into(), string_value(&item.name));
    fields.insert(
        "price".into(),
        json!({ "integerValue": item.price.to_string() }),
    );
    fields.insert("description".into(), string_value(&item.description));
    fields.insert("category".into(), string_value(item.category.as_ref()));
    fields.insert("metal".into(), string_value(&item.metal.to_string()));
    fields.insert("gem".into(), string_value(item.gem.as_ref()));
    fields.insert("gemColor".into(), string_value(&item.gem_color));
    fields.insert("metalColor".into(), string_value(&item.metal_color));
    if let Some(model_url) = &item.model_url {
        fields.insert("modelUrl".into(), string_value(model_url));
    }
    json!({ "fields": fields })
}

fn malformed(id: &str, message: impl std::fmt::Display) -> AurumError {
    AurumError::Serialization {
        format: "Firestore".to_string(),
        message: format!("document '{id}': {message}"),
    }
}

fn get_string<'a>(fields: &'a HashMap<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key)?.get("stringValue")?.as_str()
}

fn require_string<'a>(fields: &'a HashMap<String, Value>, key: &str, id: &str) -> Result<&'a str> {
    get_string(fields, key).ok_or_else(|| malformed(id, format!("missing string field '{key}'")))
}

fn parse_enum<T: FromStr>(fields: &HashMap<String, Value>, key: &str, id: &str) -> Result<T> {
    let raw = require_string(fields, key, id)?;
    raw.parse::<T>()
        .map_err(|_| malformed(id, format!("unknown {key} '{raw}'")))
}

/// Prices written by other clients may arrive as doubles.
fn parse_price(fields: &HashMap<String, Value>, id: &str) -> Result<Price> {
    let value = fields
        .get("price")
        .ok_or_else(|| malformed(id, "missing field 'price'"))?;

    if let Some(raw) = value.get("integerValue") {
        let text = raw.as_str().map(str::to_string).unwrap_or_else(|| raw.to_string());
        return text
            .parse::<Price>()
            .map_err(|e| malformed(id, format!("bad integer price '{text}': {e}")));
    }
    if let Some(number) = value.get("doubleValue").and_then(Value::as_f64) {
        return Ok(number.round() as Price);
    }
    Err(malformed(id, "price is neither integerValue nor doubleValue"))
}

/// Decodes a stored document into a catalog item.
pub(crate) fn decode_item(document: &Document) -> Result<Item> {
    let id = document_id(&document.name)
        .ok_or_else(|| malformed(&document.name, "resource name has no id"))?;
    let fields = &document.fields;

    let metal: Metal = parse_enum(fields, "metal", id)?;
    let gem: Gem = parse_enum(fields, "gem", id)?;
    let category: Category = parse_enum(fields, "category", id)?;

    Ok(Item {
        id: id.to_string(),
        name: require_string(fields, "name", id)?.to_string(),
        price: parse_price(fields, id)?,
        description: get_string(fields, "description").unwrap_or_default().to_string(),
        category,
        metal,
        gem,
        gem_color: get_string(fields, "gemColor")
            .unwrap_or(gem.color())
            .to_string(),
        metal_color: get_string(fields, "metalColor")
            .unwrap_or(metal.color())
            .to_string(),
        model_url: get_string(fields, "modelUrl").map(str::to_string),
    })
}
