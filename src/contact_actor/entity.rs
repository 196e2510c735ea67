//! [`ActorEntity`] implementation for [`Contact`].

use super::error::ContactError;
use crate::framework::ActorEntity;
use crate::model::{Contact, ContactCreate, ContactId};
use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

#[async_trait]
impl ActorEntity for Contact {
    type Id = ContactId;
    type Create = ContactCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ContactError;

    fn from_create_params(id: ContactId, params: ContactCreate) -> Result<Self, ContactError> {
        let params = params.trimmed();
        params.validate()?;
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            message: params.message,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), ContactError> {
        Err(ContactError::Immutable)
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ContactError> {
        Err(ContactError::Immutable)
    }
}
