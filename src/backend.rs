use std::sync::Arc;
use tokio::sync::mpsc;
use log::{debug, error, info};
use crate::HealthbotFoot;

/// Public API for the healthbot backend - owns the task
pub struct HealthbotBackend
{   hand: crate::HealthbotHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl HealthbotBackend
{   /// Create and spawn a new healthbot backend
    /// Returns immediately - spawns background task
    pub fn new(
      config: crate::config::BotConfig
    ) -> Self
    {   debug!("Creating HealthbotBackend with task ownership");

        let (respond_tx, respond_rx)
          = mpsc::unbounded_channel();
        let (get_status_tx, get_status_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::HealthbotHand
        {   respond_tx: respond_tx.clone()
          , get_status_tx: get_status_tx.clone()
          , kill_process_tx: kill_process_tx.clone()
        };

        let foot = crate::HealthbotFoot
        {   respond_rx
          , get_status_rx
          , kill_process_rx
        };

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, config).await
        });

        HealthbotBackend
        {   hand
          , _task_handle
        }
    }

    /// Send a question - returns almost immediately
    pub async fn respond(
      &self
    , message: String
    ) -> Result<
        mpsc::UnboundedReceiver<crate::RespondReply>,
        crate::error::Error
      >
    {   debug!("respond queuing message");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::RespondArgs
        {   message
          , reply: reply_tx
        };

        self.hand.respond_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Get responder status - returns almost immediately
    pub async fn get_status(
      &self
    ) -> Result<
        mpsc::UnboundedReceiver<crate::GetStatusReply>,
        crate::error::Error
      >
    {   debug!("get_status queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::GetStatusArgs
        {   reply: reply_tx
        };

        self.hand.get_status_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down HealthbotBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Other(
              "Backend already shutdown".to_string()
            )
          })?;

        // Wait for shutdown confirmation
        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend shutdown timeout");
            Err(crate::error::Error::Timeout)
        }
    }
}

/// Main backend event loop
///
/// Design: tokio::select! is ONLY for fast queueing.
/// Respond commands spawn onto their own task so a slow remote
/// call never blocks the next question; the responder itself
/// is stateless, so concurrent calls need no coordination.
async fn run_backend_loop(
  foot: crate::HealthbotFoot
, config: crate::config::BotConfig
)
{   debug!("Starting HealthbotBackend event loop");
    let responder = Arc::new(
      crate::responder::HealthcareResponder::new(config)
    );
    let HealthbotFoot
    {   mut respond_rx
      , mut get_status_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = respond_rx.recv() => {
          debug!("Received Respond");
          let responder = Arc::clone(&responder);
          tokio::spawn(async move {
            let reply = responder.respond(&cmd.message).await;
            let _ = cmd.reply.send(reply);
          });
        }
      , Some(cmd) = get_status_rx.recv() => {
          debug!("Received GetStatus");
          let _ = cmd.reply.send(crate::BotStatus
          {   configured: responder.is_configured()
            , model: responder.model().to_string()
          });
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("HealthbotBackend shutting down");
          break;
        }
      , else => {
          debug!("All command channels closed");
          break;
        }
      }
    }
}
