use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Cloneable handle used by the services to publish domain events.
///
/// Events are fire-and-forget: they are emitted only after the owning
/// transaction has committed, and a full channel must never fail the
/// request that produced the event.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Domain events emitted after state changes commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Order lifecycle
    OrderPlaced {
        order_id: Uuid,
        store_id: i64,
        order_number: String,
        total_amount: Decimal,
    },
    OrderCompleted(Uuid),

    // Supply workflow
    SupplyRequested {
        request_id: Uuid,
        store_id: i64,
        ingredient_id: i64,
        quantity: i32,
    },
    SupplyApproved {
        request_id: Uuid,
        store_id: i64,
        ingredient_id: i64,
        quantity: i32,
    },
    SupplyRejected(Uuid),

    // Franchise management
    StoreRegistered {
        store_id: i64,
        code: String,
    },
}

/// Consumes events from the channel and logs them.
///
/// Runs for the lifetime of the server; exits when the last sender is
/// dropped.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match event {
            Event::OrderPlaced {
                order_id,
                store_id,
                order_number,
                total_amount,
            } => {
                info!(
                    %order_id,
                    store_id,
                    %order_number,
                    %total_amount,
                    "Order placed"
                );
            }
            Event::OrderCompleted(order_id) => {
                info!(%order_id, "Order completed");
            }
            Event::SupplyRequested {
                request_id,
                store_id,
                ingredient_id,
                quantity,
            } => {
                info!(
                    %request_id,
                    store_id,
                    ingredient_id,
                    quantity,
                    "Supply requested"
                );
            }
            Event::SupplyApproved {
                request_id,
                store_id,
                ingredient_id,
                quantity,
            } => {
                info!(
                    %request_id,
                    store_id,
                    ingredient_id,
                    quantity,
                    "Supply request approved"
                );
            }
            Event::SupplyRejected(request_id) => {
                info!(%request_id, "Supply request rejected");
            }
            Event::StoreRegistered { store_id, code } => {
                info!(store_id, %code, "Store registered");
            }
        }
    }

    warn!("Event channel closed, stopping event processing loop");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn send_delivers_event_to_receiver() {
        let (tx, mut rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);

        sender
            .send(Event::OrderCompleted(Uuid::new_v4()))
            .await
            .unwrap();

        match rx.recv().await {
            Some(Event::OrderCompleted(_)) => {}
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_fails_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(8);
        drop(rx);
        let sender = EventSender::new(tx);

        let result = sender
            .send(Event::OrderPlaced {
                order_id: Uuid::new_v4(),
                store_id: 1,
                order_number: "GANGNAM-000001".into(),
                total_amount: dec!(17.70),
            })
            .await;

        assert!(result.is_err());
    }
}
