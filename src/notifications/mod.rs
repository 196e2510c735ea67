//! # Notifications
//!
//! Side effects that follow a successful mutation (activation emails, order
//! receipts, a vendor's rating changing, a new contact message) are handed to a
//! [`NotificationDispatcher`] and processed by a background worker.
//!
//! Dispatch is fire-and-forget. It never awaits and never fails the caller:
//! if the queue is full or the worker has gone away, the notification is logged
//! and dropped. The mutation it describes has already been committed.

use crate::model::{CommentId, ContactId, OrderId, OrderStatus, UserId};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The user should receive an email-verification link.
    ActivationRequested { user: UserId, email: String },
    ProfileUpdated { user: UserId },
    OrderPlaced {
        order: OrderId,
        buyer: UserId,
        total_price: u64,
    },
    OrderStatusChanged {
        order: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
    /// A comment entered or left the vendor's average.
    RatingChanged { vendor: UserId, comment: CommentId },
    ContactReceived { contact: ContactId, email: String },
}

/// Delivers notifications. The storefront ships only [`LogNotifier`]; real
/// delivery (SMTP, a task queue) plugs in here.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn deliver(&self, notification: &Notification) -> Result<(), String>;
}

/// Writes every notification to the log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, notification: &Notification) -> Result<(), String> {
        info!(?notification, "Notification delivered");
        Ok(())
    }
}

/// Cloneable sending half of the notification queue.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    sender: Option<mpsc::Sender<Notification>>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher and the receiver a worker should drain.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// A dispatcher that discards everything. Handy in tests.
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    pub fn dispatch(&self, notification: Notification) {
        let Some(sender) = &self.sender else {
            debug!(?notification, "Notifications disabled");
            return;
        };
        match sender.try_send(notification) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(notification)) => {
                warn!(?notification, "Notification queue full, dropping");
            }
            Err(mpsc::error::TrySendError::Closed(notification)) => {
                warn!(?notification, "Notification worker gone, dropping");
            }
        }
    }
}

/// Spawns the worker that drains `receiver` until every dispatcher is dropped.
pub fn spawn_worker<N: Notifier>(
    notifier: N,
    mut receiver: mpsc::Receiver<Notification>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Notification worker started");
        let mut delivered = 0usize;
        while let Some(notification) = receiver.recv().await {
            match notifier.deliver(&notification).await {
                Ok(()) => delivered += 1,
                Err(error) => warn!(?notification, %error, "Notification delivery failed"),
            }
        }
        info!(delivered, "Notification worker stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<Notification>>>);

    #[async_trait]
    impl Notifier for Recording {
        async fn deliver(&self, notification: &Notification) -> Result<(), String> {
            self.0.lock().unwrap().push(notification.clone());
            if matches!(notification, Notification::ProfileUpdated { .. }) {
                return Err("smtp down".into());
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn worker_drains_until_dispatchers_drop() {
        let recording = Recording::default();
        let (dispatcher, receiver) = NotificationDispatcher::channel(8);
        let worker = spawn_worker(recording.clone(), receiver);

        dispatcher.dispatch(Notification::ProfileUpdated { user: UserId(1) });
        dispatcher.dispatch(Notification::ContactReceived {
            contact: ContactId(1),
            email: "a@example.com".into(),
        });
        drop(dispatcher);
        worker.await.unwrap();

        // A failed delivery does not stop the worker.
        assert_eq!(recording.0.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn dispatch_never_blocks_or_fails() {
        let (dispatcher, receiver) = NotificationDispatcher::channel(1);
        dispatcher.dispatch(Notification::ProfileUpdated { user: UserId(1) });
        // Queue is full: dropped with a warning.
        dispatcher.dispatch(Notification::ProfileUpdated { user: UserId(2) });

        drop(receiver);
        // Worker gone: dropped with a warning.
        dispatcher.dispatch(Notification::ProfileUpdated { user: UserId(3) });

        NotificationDispatcher::disabled().dispatch(Notification::ProfileUpdated { user: UserId(4) });
    }
}
