//! Opens Gemini chat sessions from configuration.

use crate::gemini_chat_gateway::GeminiChatGateway;
use async_trait::async_trait;
use aurum_core::concierge::{ChatConnector, ChatGateway};
use aurum_core::config::ConciergeSettings;
use aurum_core::{AurumError, Result};
use std::sync::Arc;

/// Connector that builds a [`GeminiChatGateway`] for the concierge persona.
pub struct GeminiConnector {
    settings: ConciergeSettings,
    system_instruction: String,
}

impl GeminiConnector {
    pub fn new(settings: ConciergeSettings, system_instruction: impl Into<String>) -> Self {
        Self {
            settings,
            system_instruction: system_instruction.into(),
        }
    }
}

#[async_trait]
impl ChatConnector for GeminiConnector {
    async fn connect(&self) -> Result<Arc<dyn ChatGateway>> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AurumError::not_configured("Gemini API key"))?;

        tracing::info!("Opening concierge chat session ({})", self.settings.model);
        let gateway = GeminiChatGateway::new(api_key, &self.settings.model)
            .with_base_url(&self.settings.base_url)
            .with_temperature(self.settings.temperature)
            .with_system_instruction(&self.system_instruction);
        Ok(Arc::new(gateway))
    }
}
