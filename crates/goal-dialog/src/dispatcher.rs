//! Inbound event dispatcher
//!
//! Routes transport events to commands or the user's live conversation.
//! Entry triggers: `/start` registers (or unblocks) the user; `/goal` resets
//! any in-flight conversation and opens the goals overview.

use tracing::{debug, info, instrument};

use goal_service::{GoalService, ServiceContext};

use crate::messages;
use crate::session::SessionStore;
use crate::transport::{InboundMessage, Outbound, Payload};

/// Dispatcher owning the session store and service dependencies
pub struct Dispatcher {
    ctx: ServiceContext,
    sessions: SessionStore,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            sessions: SessionStore::new(),
        }
    }

    /// Handle one inbound event and produce the responses to send back
    #[instrument(skip(self, message), fields(external_id = message.external_id))]
    pub async fn dispatch(&self, message: &InboundMessage) -> Vec<Outbound> {
        match &message.payload {
            Payload::Unreachable => {
                let service = GoalService::new(&self.ctx);
                service.block_user(message.external_id).await;
                self.sessions.remove(message.external_id);
                Vec::new()
            }
            Payload::Text { text } if text.trim_start().starts_with('/') => {
                self.handle_command(message, text.trim()).await
            }
            payload => {
                let Some(conversation) = self.sessions.get(message.external_id) else {
                    debug!("No live conversation, hinting at /goal");
                    return vec![Outbound::text(messages::RUN_GOAL_HINT)];
                };
                let service = GoalService::new(&self.ctx);
                let mut conversation = conversation.lock().await;
                conversation
                    .handle(message.external_id, payload, &service)
                    .await
            }
        }
    }

    async fn handle_command(&self, message: &InboundMessage, text: &str) -> Vec<Outbound> {
        let command = text.split_whitespace().next().unwrap_or(text);
        let service = GoalService::new(&self.ctx);

        match command {
            "/start" => {
                info!(external_id = message.external_id, "Start command");
                if service
                    .upsert_user(message.external_id, &message.display_name)
                    .await
                    .is_some()
                {
                    vec![Outbound::text(messages::START_REPLY)]
                } else {
                    vec![Outbound::text(messages::SOMETHING_WENT_WRONG)]
                }
            }
            "/goal" => {
                info!(external_id = message.external_id, "Goal flow entered");
                // Reset-stack semantics: any prior wizard state is discarded.
                let conversation = self.sessions.reset(message.external_id);
                let mut conversation = conversation.lock().await;
                conversation.enter(message.external_id, &service).await
            }
            "/help" => vec![Outbound::text(messages::HELP_TEXT)],
            _ => vec![Outbound::text(messages::UNKNOWN_COMMAND)],
        }
    }
}
