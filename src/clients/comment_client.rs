//! # Comment Client
//!
//! Posting, editing, moderating and soft-deleting vendor comments. Each call
//! that changes a vendor's average announces it with
//! [`Notification::RatingChanged`].
use crate::comment_actor::{CommentAction, CommentActionResult, CommentError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Comment, CommentCreate, CommentEdit, CommentId, UserId};
use crate::notifications::{Notification, NotificationDispatcher};
use async_trait::async_trait;
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

/// Client for interacting with the Comment actor.
#[derive(Clone)]
pub struct CommentClient {
    inner: ResourceClient<Comment>,
    notifications: NotificationDispatcher,
}

#[async_trait]
impl ActorClient<Comment> for CommentClient {
    type Error = CommentError;

    fn inner(&self) -> &ResourceClient<Comment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CommentError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => CommentError::NotFound(id),
            other => CommentError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl CommentClient {
    pub fn new(inner: ResourceClient<Comment>, notifications: NotificationDispatcher) -> Self {
        Self {
            inner,
            notifications,
        }
    }

    /// Posts a comment and records its rating on the vendor.
    #[instrument(skip(self, params), fields(vendor = %params.vendor, rating = %params.rating))]
    pub async fn post_comment(&self, params: CommentCreate) -> Result<CommentId, CommentError> {
        debug!("Sending request");
        let vendor = params.vendor;
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.rating_changed(vendor, id);
        Ok(id)
    }

    #[instrument(skip(self, edit))]
    pub async fn edit_comment(&self, id: CommentId, edit: CommentEdit) -> Result<Comment, CommentError> {
        debug!("Sending request");
        self.inner.update(id, edit).await.map_err(Self::map_error)
    }

    /// Soft-deletes a comment on behalf of `requested_by` (the commenter's email).
    ///
    /// The row is kept with `deleted` set; its rating leaves the vendor's average.
    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: CommentId, requested_by: &str) -> Result<(), CommentError> {
        let action = CommentAction::SoftDelete {
            requested_by: requested_by.to_string(),
        };
        match self.action(id, action).await? {
            CommentActionResult::SoftDelete { rating } => {
                if rating.is_some() {
                    let comment = self
                        .get(id)
                        .await?
                        .ok_or_else(|| CommentError::NotFound(id.to_string()))?;
                    self.rating_changed(comment.vendor, id);
                }
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }

    /// Approves or hides a comment, moving its rating in or out of the average.
    #[instrument(skip(self))]
    pub async fn moderate(&self, id: CommentId, approved: bool) -> Result<Comment, CommentError> {
        match self.action(id, CommentAction::Moderate { approved }).await? {
            CommentActionResult::Moderate { comment, rating } => {
                if rating.is_some() {
                    self.rating_changed(comment.vendor, id);
                }
                Ok(comment)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Active comments on a vendor, newest first.
    #[instrument(skip(self))]
    pub async fn comments_for(&self, vendor: UserId) -> Result<Vec<Comment>, CommentError> {
        let mut comments: Vec<Comment> = self
            .list()
            .await?
            .into_iter()
            .filter(|comment| comment.vendor == vendor && comment.is_active())
            .collect();
        comments.sort_by_key(|comment| Reverse((comment.date_created, comment.id)));
        Ok(comments)
    }

    async fn action(&self, id: CommentId, action: CommentAction) -> Result<CommentActionResult, CommentError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    fn rating_changed(&self, vendor: UserId, comment: CommentId) {
        info!(%vendor, %comment, "Vendor rating changed");
        self.notifications
            .dispatch(Notification::RatingChanged { vendor, comment });
    }
}

fn unexpected(result: CommentActionResult) -> CommentError {
    CommentError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
