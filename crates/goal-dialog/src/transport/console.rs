//! Console transport adapter
//!
//! Reads line-delimited JSON `InboundMessage`s from stdin and writes
//! line-delimited JSON `Outbound` responses to stdout. Undecodable lines are
//! logged and skipped.

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::dispatcher::Dispatcher;
use crate::transport::InboundMessage;

/// Serve conversations until the input stream closes
pub async fn serve(dispatcher: &Dispatcher) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let message: InboundMessage = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Ignoring undecodable inbound message");
                continue;
            }
        };

        for response in dispatcher.dispatch(&message).await {
            let encoded = serde_json::to_string(&response)?;
            stdout.write_all(encoded.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
    }

    Ok(())
}
