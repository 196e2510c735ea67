//! # Contact Client
use crate::contact_actor::ContactError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Contact, ContactCreate, ContactId};
use crate::notifications::{Notification, NotificationDispatcher};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Contact actor.
#[derive(Clone)]
pub struct ContactClient {
    inner: ResourceClient<Contact>,
    notifications: NotificationDispatcher,
}

#[async_trait]
impl ActorClient<Contact> for ContactClient {
    type Error = ContactError;

    fn inner(&self) -> &ResourceClient<Contact> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<ContactError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => ContactError::NotFound(id),
            other => ContactError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl ContactClient {
    pub fn new(inner: ResourceClient<Contact>, notifications: NotificationDispatcher) -> Self {
        Self {
            inner,
            notifications,
        }
    }

    /// Stores a contact-form message and alerts the admins.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn submit(&self, params: ContactCreate) -> Result<ContactId, ContactError> {
        debug!("Sending request");
        let email = params.email.trim().to_string();
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.notifications
            .dispatch(Notification::ContactReceived { contact: id, email });
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ContactError> {
        self.list().await
    }
}
