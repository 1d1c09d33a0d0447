use std::fmt;

/// Custom error type for healthbot operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Input was empty or whitespace-only
    EmptyInput
  , /// Input exceeded the configured character limit
    MessageTooLong(usize)
  , /// No API key was supplied at startup
    MissingApiKey
  , /// Remote service rejected the API key
    InvalidApiKey
  , /// Rate limit or quota exceeded
    RateLimitExceeded
  , /// No response within the configured timeout
    Timeout
  , /// API returned an error response
    ApiError(String)
  , /// HTTP transport error
    HttpError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// First choice content trimmed to an empty string
    EmptyCompletion
  , /// Generic error
    Other(String)
}

impl Error
{   /// Flatten the error onto its fixed user-facing reply.
    /// Exactly one string per variant, no internal details.
    /// Callers receive these as plain renderable text.
    pub fn user_message(&self) -> String
    {   match self
        {   Error::EmptyInput => {
              "Please enter a valid healthcare question."
                .to_string()
            }
          , Error::MessageTooLong(limit) => {
              format!(
                "Your message is too long. Please keep it under {} characters.",
                limit
              )
            }
          , Error::MissingApiKey => {
              "Error: API key not configured. Please check your environment setup."
                .to_string()
            }
          , Error::InvalidApiKey => {
              "Error: Invalid API key. Please check your OpenAI API key configuration."
                .to_string()
            }
          , Error::RateLimitExceeded => {
              "Error: Rate limit exceeded. Please try again in a moment."
                .to_string()
            }
          , Error::Timeout => {
              "Error: Request timed out. Please try again."
                .to_string()
            }
          , Error::ApiError(_) => {
              "Error: Unable to process your request. Please try again later."
                .to_string()
            }
          , Error::HttpError(_)
            | Error::ParseError(_)
            | Error::NoChoicesInResponse
            | Error::EmptyCompletion
            | Error::Other(_) => {
              "Error: An unexpected error occurred. Please try again."
                .to_string()
            }
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::EmptyInput => {
              write!(f, "Input was empty after trimming")
            }
          , Error::MessageTooLong(limit) => {
              write!(
                f,
                "Input exceeds the {} character limit",
                limit
              )
            }
          , Error::MissingApiKey => {
              write!(f, "No API key configured")
            }
          , Error::InvalidApiKey => {
              write!(f, "API rejected the configured key")
            }
          , Error::RateLimitExceeded => {
              write!(f, "API rate limit exceeded")
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::EmptyCompletion => {
              write!(f, "API returned an empty completion")
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
