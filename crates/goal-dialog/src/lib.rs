//! # goal-dialog
//!
//! Conversation layer: the dialog state machine, per-user sessions, the
//! dispatcher routing inbound transport events, and a line-delimited JSON
//! console transport.
//!
//! The state machine itself ([`dialog::transition`]) is a pure function and
//! can be tested without a transport or a database. The
//! [`dialog::Conversation`] runner executes its effects against
//! `goal-service` and renders each state's entry view.

use std::sync::Arc;

use tracing::info;

use goal_common::AppConfig;
use goal_db::{create_pool, run_migrations, DatabaseConfig, PgGoalRepository, PgUserRepository};
use goal_service::ServiceContext;

pub mod dialog;
pub mod dispatcher;
pub mod messages;
pub mod session;
pub mod transport;

pub use dispatcher::Dispatcher;
pub use session::SessionStore;
pub use transport::{Choice, InboundMessage, Outbound, Payload};

/// Wire up the database, service context, and dispatcher, then serve the
/// console transport until the input stream closes.
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;
    info!("Database ready");

    let ctx = ServiceContext::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgGoalRepository::new(pool)),
    );
    let dispatcher = Dispatcher::new(ctx);

    info!(app = %config.app.name, "Accepting conversations on stdin");
    transport::console::serve(&dispatcher).await
}
