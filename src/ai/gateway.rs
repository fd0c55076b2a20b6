use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::AiConfig;
use crate::error::{DaybriefError, Result};
use crate::models::TokenUsage;

use super::claude::ClaudeClient;
use super::gemini::GeminiClient;

/// A single generation backend. Each provider gets exactly one attempt per
/// gateway call; retry policy lives with the caller, not here.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Short provenance tag stored with the briefing (e.g. "claude").
    fn name(&self) -> &str;
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<ProviderResponse>;
}

/// What a provider returns on success.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// A provider response tagged with which provider served it.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// Ordered chain of generation providers. The first configured provider is
/// primary; the rest are fallbacks tried in order.
pub struct AiGateway {
    providers: Vec<Box<dyn AiProvider>>,
}

impl std::fmt::Debug for AiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiGateway")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl AiGateway {
    pub fn new(providers: Vec<Box<dyn AiProvider>>) -> Result<Self> {
        if providers.is_empty() {
            return Err(DaybriefError::Ai(
                "No AI provider configured. Set ANTHROPIC_API_KEY or GEMINI_API_KEY.".to_string(),
            ));
        }
        Ok(Self { providers })
    }

    /// Build the provider chain from configured credentials, Claude before
    /// Gemini. Errors when neither credential is set.
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        let mut providers: Vec<Box<dyn AiProvider>> = Vec::new();

        if config.anthropic_api_key.is_some() {
            providers.push(Box::new(ClaudeClient::new(config)?));
        }
        if config.gemini_api_key.is_some() {
            providers.push(Box::new(GeminiClient::new(config)?));
        }

        Self::new(providers)
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Try each provider in order, one attempt each, returning the first
    /// success. Failures are logged and the next provider takes over; only
    /// when the whole chain fails does this error.
    pub async fn generate_with_fallback(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GenerationResult> {
        for provider in &self.providers {
            match provider.generate(system_prompt, user_prompt).await {
                Ok(response) => {
                    info!(
                        provider = provider.name(),
                        model = %response.model,
                        input_tokens = response.usage.input,
                        output_tokens = response.usage.output,
                        "AI generation succeeded"
                    );
                    return Ok(GenerationResult {
                        text: response.text,
                        provider: provider.name().to_string(),
                        model: response.model,
                        usage: response.usage,
                    });
                }
                Err(error) => {
                    warn!(
                        provider = provider.name(),
                        error = %error,
                        "AI provider failed, trying next"
                    );
                }
            }
        }

        Err(DaybriefError::Ai("All AI providers failed".to_string()))
    }
}
