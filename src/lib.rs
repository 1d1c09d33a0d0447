pub mod error;
pub mod config;
pub mod providers;
pub mod responder;
pub mod backend;

/*

healthbot is an async-only rust library that answers free-text
healthcare questions by relaying them to the OpenAI chat
completions API with a fixed system prompt. every failure mode
(bad input, missing key, auth, rate limit, timeout, anything
else) is classified into one fixed user-safe reply string, so
front-ends only ever render plain text.

healthbot/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and channel API types
│   ├── error.rs        # Error taxonomy and user-facing mapping
│   ├── config.rs       # Environment-backed configuration
│   ├── responder.rs    # Core validate/call/classify logic
│   ├── backend.rs      # Command-channel backend for front-ends
│   └── providers/      # Provider-specific implementations
│       ├── mod.rs      # Re-exports all providers
│       └── openai.rs   # OpenAI chat-completions client
└── tests/              # Integration tests

*/

pub use config::BotConfig;
pub use error::Error;
pub use responder::HealthcareResponder;
pub use backend::HealthbotBackend;

/// Install the env_logger backend for the log macros.
/// Reads RUST_LOG; safe to call more than once, later calls
/// are no-ops.
pub fn init_logging()
{   let _ = env_logger::Builder::from_default_env()
      .try_init();
}

/// HEALTHBOT API INTERFACE:

// ===== Respond =====

/// Replies are plain strings; errors arrive as the same type,
/// already flattened to user-safe text
pub type RespondReply = String;
pub type RespondReplySender
  = tokio::sync::mpsc::UnboundedSender<RespondReply>;

pub struct RespondArgs
{   pub message: String
  , pub reply: RespondReplySender
}

// ===== GetStatus =====

/// Snapshot of the responder for health/diagnostic routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotStatus
{   /// Whether an API key was supplied at startup
    pub configured: bool
  , /// Configured model identifier
    pub model: String
}

pub type GetStatusReply = BotStatus;
pub type GetStatusReplySender
  = tokio::sync::mpsc::UnboundedSender<GetStatusReply>;

pub struct GetStatusArgs
{   pub reply: GetStatusReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== HealthbotHand (sender side) =====

pub struct HealthbotHand
{   pub respond_tx
      : tokio::sync::mpsc::UnboundedSender<RespondArgs>
  , pub get_status_tx
      : tokio::sync::mpsc::UnboundedSender<GetStatusArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== HealthbotFoot (receiver side) =====

pub struct HealthbotFoot
{   pub respond_rx
      : tokio::sync::mpsc::UnboundedReceiver<RespondArgs>
  , pub get_status_rx
      : tokio::sync::mpsc::UnboundedReceiver<GetStatusArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}
