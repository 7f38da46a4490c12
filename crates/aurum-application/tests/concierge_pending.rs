//! Single-outstanding-request behavior of the concierge.

use async_trait::async_trait;
use aurum_application::{ConciergeService, SendOutcome, SendRejection};
use aurum_core::Result;
use aurum_core::concierge::{ChatConnector, ChatGateway};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Gateway that holds every reply until released.
struct GatedGateway {
    started: Arc<Notify>,
    release: Arc<Notify>,
    calls: AtomicUsize,
}

#[async_trait]
impl ChatGateway for GatedGateway {
    async fn send_message(&self, message: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(format!("About {message}: exquisite."))
    }
}

struct GatedConnector {
    gateway: Arc<GatedGateway>,
}

#[async_trait]
impl ChatConnector for GatedConnector {
    async fn connect(&self) -> Result<Arc<dyn ChatGateway>> {
        Ok(self.gateway.clone())
    }
}

#[tokio::test]
async fn test_second_message_rejected_while_first_pending() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let gateway = Arc::new(GatedGateway {
        started: started.clone(),
        release: release.clone(),
        calls: AtomicUsize::new(0),
    });
    let connector = GatedConnector {
        gateway: gateway.clone(),
    };
    let concierge = Arc::new(ConciergeService::new(Arc::new(connector)));

    let first = tokio::spawn({
        let concierge = concierge.clone();
        async move { concierge.send("rubies").await }
    });
    started.notified().await;

    assert!(concierge.is_loading());
    assert_eq!(
        concierge.send("emeralds").await,
        SendOutcome::Rejected(SendRejection::RequestPending)
    );
    // Greeting plus the pending user turn
    assert_eq!(concierge.transcript().await.len(), 2);
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

    release.notify_one();
    let outcome = first.await.unwrap();

    assert_eq!(outcome, SendOutcome::Replied("About rubies: exquisite.".to_string()));
    assert!(!concierge.is_loading());
    assert_eq!(concierge.transcript().await.len(), 3);

    // Accepted again once the reply is in; the stored permit releases it
    release.notify_one();
    assert_eq!(
        concierge.send("emeralds").await,
        SendOutcome::Replied("About emeralds: exquisite.".to_string())
    );
    assert_eq!(concierge.transcript().await.len(), 5);
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
}
