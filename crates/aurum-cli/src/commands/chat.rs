use anyhow::Result;
use aurum_application::{SendOutcome, SendRejection};
use aurum_core::concierge::persona::CONCIERGE_NAME;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::AppState;

fn print_outcome(outcome: &SendOutcome) {
    match outcome {
        SendOutcome::Replied(reply) | SendOutcome::Fallback { reply, .. } => {
            println!("{CONCIERGE_NAME}: {reply}\n");
        }
        SendOutcome::Rejected(SendRejection::EmptyInput) => {}
        SendOutcome::Rejected(SendRejection::RequestPending) => {
            println!("(still waiting for the previous reply)\n");
        }
    }
}

/// Talks to the concierge.
///
/// With `messages`, sends each one in order and exits; otherwise reads
/// lines from stdin until EOF or `/quit`.
pub async fn run(app: &AppState, messages: Vec<String>) -> Result<()> {
    if let Err(err) = app.concierge.initialize().await {
        tracing::warn!("Concierge unavailable: {}", err);
    } else {
        tracing::debug!("Concierge model: {}", app.config.concierge.model);
    }

    if let Some(greeting) = app.concierge.transcript().await.last() {
        println!("{CONCIERGE_NAME}: {}\n", greeting.text);
    }

    if !messages.is_empty() {
        for message in messages {
            println!("You: {message}");
            print_outcome(&app.concierge.send(&message).await);
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        if line == "/quit" {
            break;
        }
        print_outcome(&app.concierge.send(line).await);
    }
    Ok(())
}
