use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Sender half of the application event channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Sends an event, logging instead of failing when the channel is closed.
    /// Event delivery is fire-and-forget; domain operations never fail on it.
    pub async fn send_or_log(&self, event: Event) {
        if let Err(e) = self.send(event).await {
            warn!("Event delivery failed: {}", e);
        }
    }
}

// The events that can occur in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Collection events
    CollectionCreated(Uuid),

    // Style events
    StyleCreated {
        style_id: Uuid,
        collection_id: Uuid,
        carbon_footprint: f64,
    },
    StyleUpdated(Uuid),
    StyleImageAttached {
        style_id: Uuid,
        image_url: String,
    },
    ImageGenerationFailed {
        style_id: Uuid,
        reason: String,
    },

    // Passport events
    PassportIssued {
        passport_id: Uuid,
        style_id: Uuid,
    },

    // Supplier events
    SupplierCreated(Uuid),

    // Generic event for custom messages
    Generic {
        message: String,
        timestamp: DateTime<Utc>,
        metadata: serde_json::Value,
    },
}

impl Event {
    /// Create a generic event with string data
    pub fn with_data(data: String) -> Self {
        Event::Generic {
            message: data,
            timestamp: Utc::now(),
            metadata: serde_json::Value::Null,
        }
    }
}

/// Consumes events from the channel and dispatches them. Runs until every
/// sender is dropped.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match &event {
            Event::StyleCreated {
                style_id,
                collection_id,
                carbon_footprint,
            } => {
                info!(
                    style_id = %style_id,
                    collection_id = %collection_id,
                    carbon_footprint = carbon_footprint,
                    "Style created"
                );
            }
            Event::PassportIssued {
                passport_id,
                style_id,
            } => {
                info!(
                    passport_id = %passport_id,
                    style_id = %style_id,
                    "Digital passport issued"
                );
            }
            Event::ImageGenerationFailed { style_id, reason } => {
                error!(
                    style_id = %style_id,
                    reason = %reason,
                    "Image generation failed; style left without an image"
                );
            }
            other => {
                info!("Received event: {:?}", other);
            }
        }
    }

    info!("Event processing loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_delivers_events_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);

        let collection_id = Uuid::new_v4();
        sender.send(Event::CollectionCreated(collection_id)).await.unwrap();
        sender.send(Event::StyleUpdated(collection_id)).await.unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Event::CollectionCreated(id)) if id == collection_id
        ));
        assert!(matches!(rx.recv().await, Some(Event::StyleUpdated(_))));
    }

    #[tokio::test]
    async fn send_or_log_swallows_closed_channel_errors() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);

        // Must not panic or propagate the error
        sender.send_or_log(Event::StyleUpdated(Uuid::new_v4())).await;
    }
}
