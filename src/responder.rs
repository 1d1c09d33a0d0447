//! Core request handling: validate input, call the model,
//! classify every failure into a user-safe reply

use log::{debug, info, error, warn};
use crate::config::BotConfig;
use crate::error::Error;
use crate::providers::openai::{ChatMessage, OpenAiClient};

/// Fixed persona instruction sent with every request
pub const SYSTEM_PROMPT: &str
  = "You are a helpful healthcare assistant. Provide accurate, \
     helpful medical information while always reminding users to \
     consult healthcare professionals for serious concerns. Keep \
     responses concise and informative. Always include a disclaimer \
     about consulting healthcare professionals for serious medical \
     issues.";

/// Remote-call capability, decided once at construction
pub enum ClientState
{   Configured(OpenAiClient)
  , Unconfigured
}

/// Stateless healthcare question responder.
/// Holds the immutable configuration and the client handle;
/// respond() takes &self and is safe to call concurrently.
pub struct HealthcareResponder
{   config: BotConfig
  , client: ClientState
}

impl HealthcareResponder
{   /// Create a responder from a configuration.
    /// The client is only built when an API key is present;
    /// without one the remote path stays disabled and every
    /// valid question gets the configuration-error reply.
    pub fn new(config: BotConfig) -> Self
    {   let client = match &config.api_key
        {   Some(key) => {
              debug!("Initializing OpenAI client");
              ClientState::Configured(OpenAiClient::new(
                key.clone(),
                config.api_base.clone()
              ))
            }
          , None => {
              warn!("OpenAI API key not found in environment variables");
              ClientState::Unconfigured
            }
        };
        HealthcareResponder
        {   config
          , client
        }
    }

    /// Whether the remote call path is enabled
    pub fn is_configured(&self) -> bool
    {   matches!(self.client, ClientState::Configured(_))
    }

    /// Configured model identifier
    pub fn model(&self) -> &str
    {   &self.config.model
    }

    /// Answer a healthcare question.
    /// Never fails: every error path is flattened to one of
    /// the fixed user-facing reply strings, so the caller
    /// always gets renderable text.
    pub async fn respond(&self, raw_input: &str) -> String
    {   match self.try_respond(raw_input).await
        {   Ok(reply) => {
              info!("Generated response: {}...", preview(&reply));
              reply
            }
          , Err(e) => {
              error!("Request failed: {}", e);
              e.user_message()
            }
        }
    }

    /// Validation, request construction and the remote call.
    /// Returns the classified Error; respond() turns it into
    /// user-facing text at the boundary.
    async fn try_respond(&self, raw_input: &str)
      -> Result<String, Error>
    {   let input = raw_input.trim();
        if input.is_empty()
        {   return Err(Error::EmptyInput);
        }

        // Length equal to the limit is accepted
        let limit = self.config.max_message_length;
        if input.chars().count() > limit
        {   return Err(Error::MessageTooLong(limit));
        }

        // Checked before any network call is attempted
        let client = match &self.client
        {   ClientState::Configured(client) => client
          , ClientState::Unconfigured => {
              error!("OpenAI client not initialized - API key missing");
              return Err(Error::MissingApiKey);
            }
        };

        info!("Processing healthcare query: {}...", preview(input));

        let messages = vec![
          ChatMessage::system(SYSTEM_PROMPT)
        , ChatMessage::user(input)
        ];

        client.send_chat(messages, &self.config).await
    }
}

/// First 100 characters, for log lines only
fn preview(text: &str) -> String
{   text.chars().take(100).collect()
}
