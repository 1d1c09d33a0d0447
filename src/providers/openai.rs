use serde::{Deserialize, Serialize};
use log::{debug, trace, error};
use std::time::Duration;

const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   /// Build a system-role message
    pub fn system(content: &str) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.to_string()
        }
    }

    /// Build a user-role message
    pub fn user(content: &str) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

// ===== OpenAI Client =====

/// Minimal OpenAI chat-completions client.
/// Holds one shared reqwest client; safe to call from
/// concurrent tasks. One attempt per call, no retries.
pub struct OpenAiClient
{   api_key: String
  , api_base: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   /// Create a new client for the given key.
    /// api_base overrides the public endpoint (stub servers,
    /// self-hosted gateways)
    pub fn new(
      api_key: String
    , api_base: Option<String>
    ) -> Self
    {   debug!("Creating OpenAiClient");
        OpenAiClient
        {   api_key
          , api_base: api_base.unwrap_or_else(||
              OPENAI_API_BASE.to_string()
            )
          , http_client: reqwest::Client::new()
        }
    }

    /// Send one non-streaming chat completion request.
    /// Every failure mode maps onto a distinct Error variant:
    /// timeout, bad key (401), rate limit (429), other API
    /// errors, transport errors, unparseable or empty replies.
    pub async fn send_chat(
      &self
    , messages: Vec<ChatMessage>
    , config: &crate::config::BotConfig
    ) -> Result<String, crate::error::Error>
    {   debug!("Sending chat request for model: {}", config.model);

        let request = OpenAiChatRequest
        {   model: config.model.clone()
          , messages
          , max_tokens: Some(config.max_tokens)
          , temperature: Some(config.temperature)
          , stream: Some(false)
        };

        trace!("OpenAI request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .timeout(Duration::from_secs(config.timeout_secs))
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            if e.is_timeout()
            {   error!("OpenAI request timed out");
                crate::error::Error::Timeout
            } else
            {   error!("HTTP error: {}", e);
                crate::error::Error::HttpError(e.to_string())
            }
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!(
              "OpenAI API error ({}): {}",
              status, error_text
            );
            return Err(classify_status(status, error_text));
        }

        let chat_response: OpenAiChatResponse
          = response.json().await.map_err(|e| {
            if e.is_timeout()
            {   error!("Timed out reading response body");
                crate::error::Error::Timeout
            } else
            {   error!("Parse error: {}", e);
                crate::error::Error::ParseError(e.to_string())
            }
          })?;

        let content = chat_response.choices.first()
          .map(|c| c.message.content.trim().to_string())
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })?;

        // A completion that trims to nothing is never passed
        // through as a blank reply
        if content.is_empty()
        {   error!("OpenAI returned an empty completion");
            return Err(crate::error::Error::EmptyCompletion);
        }

        Ok(content)
    }
}

/// Map a non-success HTTP status onto the error taxonomy
pub fn classify_status(
  status: reqwest::StatusCode
, body: String
) -> crate::error::Error
{   match status.as_u16()
    {   401 => crate::error::Error::InvalidApiKey
      , 429 => crate::error::Error::RateLimitExceeded
      , _ => crate::error::Error::ApiError(body)
    }
}
