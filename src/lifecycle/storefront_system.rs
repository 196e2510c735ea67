use crate::clients::{CommentClient, ContactClient, ItemClient, OrderClient, UserClient};
use crate::config::{ConfigError, StorefrontConfig};
use crate::notifications::{spawn_worker, LogNotifier, NotificationDispatcher, Notifier};
use crate::{comment_actor, contact_actor, item_actor, order_actor, user_actor};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{task} task failed: {source}")]
    TaskFailed {
        task: &'static str,
        #[source]
        source: JoinError,
    },
}

/// The runtime orchestrator for the storefront actors.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every actor and the notification worker
/// - **Dependency Wiring**: the order actor gets the user and item clients, the
///   comment actor gets the user client
///
/// ```text
///   OrderActor ──► UserActor ◄── CommentActor
///        │
///        └──────► ItemActor          ContactActor
/// ```
///
/// The dependency graph is acyclic, so shutdown by dropping clients always terminates.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(StorefrontConfig::from_env()?)?;
///
/// let vendor = system.user_client.register_customer(account, profile).await?;
/// let item = system.item_client.create_item(ItemCreate::new("Lamp", 2500, 3)).await?;
/// let order = system.order_client.place_order(OrderCreate { buyer, item, quantity: 1 }).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub user_client: UserClient,
    pub item_client: ItemClient,
    pub order_client: OrderClient,
    pub comment_client: CommentClient,
    pub contact_client: ContactClient,
    pub config: StorefrontConfig,

    handles: Vec<(&'static str, JoinHandle<()>)>,
    notification_worker: JoinHandle<()>,
}

impl StorefrontSystem {
    /// Starts every actor, delivering notifications to the log.
    pub fn new(config: StorefrontConfig) -> Result<Self, SystemError> {
        Self::with_notifier(config, LogNotifier)
    }

    /// Starts every actor, delivering notifications through `notifier`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn with_notifier<N: Notifier>(
        config: StorefrontConfig,
        notifier: N,
    ) -> Result<Self, SystemError> {
        config.validate()?;
        let capacity = config.mailbox_capacity;

        let (notifications, queue) = NotificationDispatcher::channel(config.notification_capacity);
        let notification_worker = spawn_worker(notifier, queue);

        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = user_actor::new(capacity, notifications.clone());
        let (item_actor, item_client) = item_actor::new(capacity);
        let (order_actor, order_client) = order_actor::new(capacity, notifications.clone());
        let (comment_actor, comment_client) = comment_actor::new(capacity, notifications.clone());
        let (contact_actor, contact_client) = contact_actor::new(capacity, notifications);

        // 2. Start actors with injected context
        let handles = vec![
            ("user", tokio::spawn(user_actor.run(()))),
            ("item", tokio::spawn(item_actor.run(()))),
            (
                "order",
                tokio::spawn(order_actor.run((user_client.clone(), item_client.clone()))),
            ),
            ("comment", tokio::spawn(comment_actor.run(user_client.clone()))),
            ("contact", tokio::spawn(contact_actor.run(()))),
        ];
        info!(mailbox_capacity = capacity, "Storefront started");

        Ok(Self {
            user_client,
            item_client,
            order_client,
            comment_client,
            contact_client,
            config,
            handles,
            notification_worker,
        })
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client so the actors drain their mailboxes and exit, then
    /// waits for the notification worker to flush its queue. Clones of the
    /// clients held elsewhere keep their actors alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down storefront...");

        drop(self.order_client);
        drop(self.comment_client);
        drop(self.contact_client);
        drop(self.item_client);
        drop(self.user_client);

        for (task, handle) in self.handles {
            if let Err(source) = handle.await {
                error!(task, error = %source, "Actor task failed");
                return Err(SystemError::TaskFailed { task, source });
            }
        }

        // Dispatchers live inside the clients, so the queue closes once the actors are gone.
        self.notification_worker
            .await
            .map_err(|source| SystemError::TaskFailed {
                task: "notification",
                source,
            })?;

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
