//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the entity store for one resource type and processes
//! requests one at a time. That sequential loop is what makes read-modify-write
//! on an entity (decrementing stock, folding a rating into an average) safe
//! without locks: no two requests against the same store ever interleave.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "Server" half of the actor: it owns the `store` and the receiving
/// end of the mailbox. Clients only ever hold the sending end.
///
/// # Operations
///
/// * **Create**: allocate the next id, build the entity with
///   `T::from_create_params`, reject colliding [`unique_keys`](ActorEntity::unique_keys),
///   run `on_create`, then insert.
/// * **Get**: clone of the stored entity, or `None`.
/// * **List**: clones of every stored entity in id order.
/// * **Update** / **Action**: run the hook on a staged clone; the clone replaces
///   the stored entity only if the hook succeeded (and, for updates, the unique
///   keys still hold).
/// * **Delete**: `on_delete` may veto; otherwise the entity is removed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Item" instead of "storefront::model::item::Item")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let result = self.create(id, params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::entity)?;
        self.ensure_unique(&item, None)?;
        item.on_create(context)
            .await
            .map_err(FrameworkError::entity)?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut staged = self.staged(id)?;
        staged
            .on_update(update, context)
            .await
            .map_err(FrameworkError::entity)?;
        self.ensure_unique(&staged, Some(id))?;
        self.store.insert(id.clone(), staged.clone());
        Ok(staged)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context)
            .await
            .map_err(FrameworkError::entity)?;
        self.store.remove(id);
        Ok(())
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut staged = self.staged(id)?;
        let result = staged
            .handle_action(action, context)
            .await
            .map_err(FrameworkError::entity)?;
        self.store.insert(id.clone(), staged);
        Ok(result)
    }

    fn staged(&self, id: &T::Id) -> Result<T, FrameworkError> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    fn ensure_unique(&self, candidate: &T, own_id: Option<&T::Id>) -> Result<(), FrameworkError> {
        let keys = candidate.unique_keys();
        if keys.is_empty() {
            return Ok(());
        }
        for (id, existing) in &self.store {
            if Some(id) == own_id {
                continue;
            }
            if let Some(key) = existing.unique_keys().into_iter().find(|k| keys.contains(k)) {
                return Err(FrameworkError::AlreadyExists(key));
            }
        }
        Ok(())
    }
}
