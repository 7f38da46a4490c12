//! Storefront configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has a
//! default so a missing file or section is valid.

use crate::error::{AurumError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_COLLECTION: &str = "products";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub firestore: FirestoreSettings,
    #[serde(default)]
    pub concierge: ConciergeSettings,
    #[serde(default)]
    pub shop: ShopSettings,
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl StoreConfig {
    /// Rejects values that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.retry.max_attempts == 0 {
            return Err(AurumError::config("retry.max_attempts must be at least 1"));
        }
        if self.retry.base_delay_ms > self.retry.max_delay_ms {
            return Err(AurumError::config(
                "retry.base_delay_ms must not exceed retry.max_delay_ms",
            ));
        }
        if !(0.0..=2.0).contains(&self.concierge.temperature) {
            return Err(AurumError::config(format!(
                "concierge.temperature must be within 0.0..=2.0, got {}",
                self.concierge.temperature
            )));
        }
        if self.firestore.collection.trim().is_empty() {
            return Err(AurumError::config("firestore.collection must not be empty"));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Show the static catalog when the store answers with zero items.
    ///
    /// `true` treats "no products configured" like "store unavailable".
    /// Set to `false` to let an admin empty the storefront on purpose.
    #[serde(default = "default_true")]
    pub fallback_on_empty: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            fallback_on_empty: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FirestoreSettings {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_firestore_base_url")]
    pub base_url: String,
}

impl FirestoreSettings {
    /// The document store is only used when a project is named.
    pub fn is_configured(&self) -> bool {
        self.project_id
            .as_deref()
            .is_some_and(|project| !project.trim().is_empty())
    }
}

impl Default for FirestoreSettings {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            database: default_database(),
            collection: default_collection(),
            base_url: default_firestore_base_url(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ConciergeSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
}

impl Default for ConciergeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            temperature: default_temperature(),
            base_url: default_gemini_base_url(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShopSettings {
    /// Delay before the active item is cleared after the configurator closes,
    /// so the exit animation still has an item to render.
    #[serde(default = "default_exit_delay_ms")]
    pub configurator_exit_delay_ms: u64,
}

impl ShopSettings {
    pub fn configurator_exit_delay(&self) -> Duration {
        Duration::from_millis(self.configurator_exit_delay_ms)
    }
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            configurator_exit_delay_ms: default_exit_delay_ms(),
        }
    }
}

/// Retry behavior for remote catalog mutations.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay between attempts (multiplied by 2^attempt)
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Upper bound of a single delay
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Add up to 50% random jitter to each delay
    #[serde(default = "default_true")]
    pub jitter: bool,
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay to wait after the failed attempt number `attempt` (0-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let multiplier = 2u64.saturating_pow(attempt.min(63));
        let mut millis = self.base_delay_ms.saturating_mul(multiplier);

        if self.jitter {
            let factor = 1.0 + rand::thread_rng().gen_range(0.0..0.5);
            millis = (millis as f64 * factor) as u64;
        }

        Duration::from_millis(millis.min(self.max_delay_ms))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            jitter: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_firestore_base_url() -> String {
    DEFAULT_FIRESTORE_BASE_URL.to_string()
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_exit_delay_ms() -> u64 {
    500
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    250
}

fn default_max_delay_ms() -> u64 {
    4_000
}
