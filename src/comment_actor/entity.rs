//! [`ActorEntity`] implementation for [`Comment`].
//!
//! A comment contributes to its vendor's average exactly while it is active
//! (approved and not deleted). Every hook that flips that state records or
//! reverts the rating through the user actor, and the change to the comment is
//! committed only if the vendor accepted the new aggregate.

use super::actions::{CommentAction, CommentActionResult};
use super::error::CommentError;
use crate::clients::UserClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{normalize_email, Comment, CommentCreate, CommentEdit, CommentId};
use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

#[async_trait]
impl ActorEntity for Comment {
    type Id = CommentId;
    type Create = CommentCreate;
    type Update = CommentEdit;
    type Action = CommentAction;
    type ActionResult = CommentActionResult;
    type Context = UserClient;
    type Error = CommentError;

    fn from_create_params(id: CommentId, params: CommentCreate) -> Result<Self, CommentError> {
        let params = CommentCreate {
            name: params.name.trim().to_string(),
            email: normalize_email(&params.email),
            ..params
        };
        params.validate()?;

        let now = Utc::now();
        Ok(Self {
            id,
            vendor: params.vendor,
            item: params.item,
            name: params.name,
            email: params.email,
            comment: params.comment,
            rating: params.rating,
            approved: true,
            deleted: false,
            date_created: now,
            date_updated: now,
        })
    }

    async fn on_create(&mut self, users: &UserClient) -> Result<(), CommentError> {
        let vendor = users
            .get(self.vendor)
            .await?
            .ok_or(CommentError::VendorNotFound(self.vendor))?;
        if vendor.email.eq_ignore_ascii_case(&self.email) {
            return Err(CommentError::SelfRating);
        }
        users.record_rating(self.vendor, self.rating).await?;
        Ok(())
    }

    async fn on_update(&mut self, edit: CommentEdit, _users: &UserClient) -> Result<(), CommentError> {
        if self.deleted {
            return Err(CommentError::AlreadyDeleted(self.id));
        }
        self.comment = edit.comment;
        self.date_updated = Utc::now();
        Ok(())
    }

    async fn on_delete(&self, _users: &UserClient) -> Result<(), CommentError> {
        Err(CommentError::HardDeleteForbidden(self.id))
    }

    async fn handle_action(
        &mut self,
        action: CommentAction,
        users: &UserClient,
    ) -> Result<CommentActionResult, CommentError> {
        if self.deleted {
            return Err(CommentError::AlreadyDeleted(self.id));
        }
        match action {
            CommentAction::SoftDelete { requested_by } => {
                if !self.is_written_by(&requested_by) {
                    return Err(CommentError::Forbidden(format!(
                        "only the author of {} may delete it",
                        self.id
                    )));
                }
                let was_active = self.is_active();
                self.deleted = true;
                self.date_updated = Utc::now();

                let rating = if was_active {
                    Some(users.revert_rating(self.vendor, self.rating).await?)
                } else {
                    None
                };
                Ok(CommentActionResult::SoftDelete { rating })
            }
            CommentAction::Moderate { approved } => {
                if self.approved == approved {
                    return Ok(CommentActionResult::Moderate {
                        comment: self.clone(),
                        rating: None,
                    });
                }
                self.approved = approved;
                self.date_updated = Utc::now();

                let rating = if approved {
                    users.record_rating(self.vendor, self.rating).await?
                } else {
                    users.revert_rating(self.vendor, self.rating).await?
                };
                Ok(CommentActionResult::Moderate {
                    comment: self.clone(),
                    rating: Some(rating),
                })
            }
        }
    }
}
