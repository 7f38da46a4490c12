//! Concierge chat service.
//!
//! Keeps the visible transcript and forwards one message at a time to the
//! chat gateway. Failures never surface as errors to the caller; they become
//! the concierge's fixed apology turns.

use aurum_core::AurumError;
use aurum_core::Result;
use aurum_core::concierge::persona::{EMPTY_REPLY_FALLBACK, GREETING, UNAVAILABLE_FALLBACK};
use aurum_core::concierge::{ChatConnector, ChatGateway, ChatTranscript, ChatTurn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};

/// Why a message was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    /// The input was empty or whitespace only
    EmptyInput,
    /// A previous message is still waiting for its reply
    RequestPending,
}

/// Result of [`ConciergeService::send`].
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The model answered; the reply was appended to the transcript
    Replied(String),
    /// A fixed fallback was appended instead of a model reply.
    ///
    /// `error` is `None` when the model answered without text.
    Fallback {
        reply: String,
        error: Option<AurumError>,
    },
    /// Nothing was sent and the transcript is unchanged
    Rejected(SendRejection),
}

impl SendOutcome {
    /// Text of the assistant turn that was appended, if any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            Self::Replied(reply) | Self::Fallback { reply, .. } => Some(reply),
            Self::Rejected(_) => None,
        }
    }
}

/// Clears the in-flight flag when a send finishes, however it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Chat transcript manager with at most one outstanding request.
pub struct ConciergeService {
    connector: Arc<dyn ChatConnector>,
    /// Session opened on first successful connect, then reused.
    /// Locked across the connect so concurrent callers open it only once.
    gateway: Mutex<Option<Arc<dyn ChatGateway>>>,
    transcript: RwLock<ChatTranscript>,
    in_flight: AtomicBool,
}

impl ConciergeService {
    /// Creates the service with a transcript holding only the greeting.
    pub fn new(connector: Arc<dyn ChatConnector>) -> Self {
        Self {
            connector,
            gateway: Mutex::new(None),
            transcript: RwLock::new(ChatTranscript::with_greeting(GREETING)),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Opens the chat session.
    ///
    /// Idempotent: once a session exists it is reused. A failed attempt
    /// leaves the service uninitialized so a later call may succeed.
    pub async fn initialize(&self) -> Result<()> {
        self.session().await.map(|_| ())
    }

    pub async fn is_initialized(&self) -> bool {
        self.gateway.lock().await.is_some()
    }

    /// True while a message is waiting for its reply.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn transcript(&self) -> ChatTranscript {
        self.transcript.read().await.clone()
    }

    /// Sends `input` to the concierge.
    ///
    /// Appends the user turn and then exactly one assistant turn: the model's
    /// reply, or a fixed fallback when the reply is empty or the call failed.
    pub async fn send(&self, input: &str) -> SendOutcome {
        if input.trim().is_empty() {
            return SendOutcome::Rejected(SendRejection::EmptyInput);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("[Concierge] Message rejected, previous request still pending");
            return SendOutcome::Rejected(SendRejection::RequestPending);
        }
        let _in_flight = InFlight(&self.in_flight);

        self.transcript.write().await.push(ChatTurn::user(input));

        let result = match self.session().await {
            Ok(gateway) => gateway.send_message(input).await,
            Err(err) => Err(err),
        };

        let outcome = match result {
            Ok(reply) if !reply.trim().is_empty() => SendOutcome::Replied(reply),
            Ok(_) => {
                tracing::debug!("[Concierge] Empty reply, using fallback");
                SendOutcome::Fallback {
                    reply: EMPTY_REPLY_FALLBACK.to_string(),
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!("[Concierge] Chat failed: {}", err);
                SendOutcome::Fallback {
                    reply: UNAVAILABLE_FALLBACK.to_string(),
                    error: Some(err),
                }
            }
        };

        if let Some(reply) = outcome.reply() {
            self.transcript.write().await.push(ChatTurn::assistant(reply));
        }
        outcome
    }

    async fn session(&self) -> Result<Arc<dyn ChatGateway>> {
        let mut slot = self.gateway.lock().await;
        if let Some(gateway) = slot.as_ref() {
            return Ok(Arc::clone(gateway));
        }

        let gateway = self.connector.connect().await?;
        tracing::info!("[Concierge] Chat session ready");
        *slot = Some(Arc::clone(&gateway));
        Ok(gateway)
    }
}
