//! Configuration for the healthcare responder

use std::env;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use log::warn;

/// Responder configuration
/// Built once at process start, then passed by reference;
/// nothing mutates it afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig
{   /// OpenAI API key; None disables the remote call path
    pub api_key: Option<String>
  , /// Model identifier
    pub model: String
  , /// Sampling temperature
    pub temperature: f32
  , /// Max tokens the model may generate in response
    pub max_tokens: usize
  , /// Request timeout in seconds
    pub timeout_secs: u64
  , /// Max accepted input length in characters
    pub max_message_length: usize
  , /// API base URL override (if custom)
    pub api_base: Option<String>
}

impl Default for BotConfig
{   fn default() -> Self
    {   BotConfig
        {   api_key: None
          , model: "gpt-3.5-turbo".to_string()
          , temperature: 0.7
          , max_tokens: 400
          , timeout_secs: 30
          , max_message_length: 1000
          , api_base: None
        }
    }
}

impl BotConfig
{   /// Load configuration from the process environment.
    /// Reads a .env file first when one is present.
    /// Every setting except the API key has a default;
    /// a malformed numeric value falls back to its default
    /// instead of aborting startup.
    pub fn from_env() -> Self
    {   let _ = dotenvy::dotenv();
        let defaults = BotConfig::default();
        BotConfig
        {   api_key: env::var("OPENAI_API_KEY")
              .ok()
              .filter(|key| !key.trim().is_empty())
          , model: env::var("OPENAI_MODEL")
              .unwrap_or(defaults.model)
          , temperature: parse_env(
              "OPENAI_TEMPERATURE",
              defaults.temperature
            )
          , max_tokens: parse_env(
              "OPENAI_MAX_TOKENS",
              defaults.max_tokens
            )
          , timeout_secs: parse_env(
              "OPENAI_TIMEOUT",
              defaults.timeout_secs
            )
          , max_message_length: parse_env(
              "MAX_MESSAGE_LENGTH",
              defaults.max_message_length
            )
          , api_base: env::var("OPENAI_API_BASE").ok()
        }
    }

    /// Whether the remote call path is enabled
    pub fn is_configured(&self) -> bool
    {   self.api_key.is_some()
    }
}

/// Parse an environment variable, falling back to the default
fn parse_env<T>(name: &str, default: T) -> T
where
  T: FromStr + fmt::Display
, T::Err: fmt::Display
{   match env::var(name)
    {   Ok(raw) => match raw.parse()
        {   Ok(value) => value
          , Err(e) => {
              warn!(
                "Ignoring {}={:?} ({}), using default {}",
                name, raw, e, default
              );
              default
            }
        }
      , Err(_) => default
    }
}
