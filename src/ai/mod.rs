mod claude;
mod gateway;
mod gemini;
pub mod prompts;

pub use claude::ClaudeClient;
pub use gateway::{AiGateway, AiProvider, GenerationResult, ProviderResponse};
pub use gemini::GeminiClient;
