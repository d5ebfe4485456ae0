//! OpenRouter chat-completions client.
//!
//! One HTTP POST per draft, with a client-side timeout. Network and HTTP
//! errors surface as [`ProviderError::Upstream`] and are not retried here.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::provider::{ContentProvider, ProviderError};

const COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";
/// High temperature to encourage novel drafts.
pub const DEFAULT_TEMPERATURE: f64 = 0.9;
/// Token budget per draft.
pub const DEFAULT_MAX_TOKENS: u32 = 3000;
/// Client-side timeout on the completion call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// The editorial persona sent as the system message.
pub const SYSTEM_PROMPT: &str =
    "Ты опытный журналист топовых российских СМИ. Пишешь уникальные актуальные новости.";

/// Instruction template; `{category}` is replaced per draft.
pub const PROMPT_TEMPLATE: &str = r#"Создай новость категории "{category}" в JSON:
{
  "title": "Заголовок (50-60 символов)",
  "excerpt": "Краткое описание (200-250 символов)",
  "content": "Подробный текст из 8-10 абзацев по 4-5 предложений (~1500 слов). Добавь цитаты, статистику, факты.",
  "meta_title": "SEO заголовок (50-60 символов)",
  "meta_description": "SEO описание (150-160 символов)",
  "meta_keywords": "ключ1, ключ2, ключ3, ключ4, ключ5"
}

Требования: актуальность, уникальный заголовок, естественный язык."#;

/// Configuration for the OpenRouter backend.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub prompt_template: String,
}

impl OpenRouterConfig {
    /// Config with the site's default model, prompts, and sampling.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: SYSTEM_PROMPT.to_string(),
            prompt_template: PROMPT_TEMPLATE.to_string(),
        }
    }
}

/// HTTP client for the OpenRouter chat-completions API.
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: OpenRouterConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Upstream(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn user_prompt(&self, category: &str) -> String {
        self.config.prompt_template.replace("{category}", category)
    }
}

#[async_trait]
impl ContentProvider for OpenRouterClient {
    async fn draft(&self, category: &str) -> Result<String, ProviderError> {
        let prompt = self.user_prompt(category);
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?
            .error_for_status()
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ProviderError::Malformed("empty choices array".into()))?;

        tracing::debug!(
            category = %category,
            chars = content.len(),
            "Received completion draft"
        );

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_category() {
        let client =
            OpenRouterClient::new(OpenRouterConfig::new("test-key".into())).unwrap();
        let prompt = client.user_prompt("Спорт");
        assert!(prompt.contains("категории \"Спорт\""));
        assert!(!prompt.contains("{category}"));
    }
}
