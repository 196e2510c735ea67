//! # User Client
//!
//! Registration, profile management and the vendor rating aggregate.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    normalize_email, AccountDetails, CustomerProfile, CustomerType, EmployeeProfile, Page,
    PageRequest, Profile, Rating, User, UserCreate, UserId, UserUpdate, VendorRating,
};
use crate::notifications::{Notification, NotificationDispatcher};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    notifications: NotificationDispatcher,
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<UserError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::AlreadyExists(key) => UserError::AlreadyExists(key),
            other => UserError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>, notifications: NotificationDispatcher) -> Self {
        Self {
            inner,
            notifications,
        }
    }

    /// Registers a buyer or vendor and asks them to verify their email.
    #[instrument(skip(self, account, profile), fields(username = %account.username))]
    pub async fn register_customer(
        &self,
        account: AccountDetails,
        profile: CustomerProfile,
    ) -> Result<UserId, UserError> {
        self.register(account, Profile::Customer(profile)).await
    }

    /// Registers an employee. Only existing staff may do this.
    #[instrument(skip(self, account, profile), fields(username = %account.username))]
    pub async fn register_employee(
        &self,
        registrar: UserId,
        account: AccountDetails,
        profile: EmployeeProfile,
    ) -> Result<UserId, UserError> {
        let registrar_user = self
            .get(registrar)
            .await?
            .ok_or_else(|| UserError::NotFound(registrar.to_string()))?;
        if !registrar_user.is_staff() {
            return Err(UserError::Forbidden(format!(
                "{registrar} is not staff and cannot register employees"
            )));
        }
        self.register(account, Profile::Employee(profile)).await
    }

    async fn register(&self, account: AccountDetails, profile: Profile) -> Result<UserId, UserError> {
        debug!("Sending request");
        let email = normalize_email(&account.email);
        let id = self
            .inner
            .create(UserCreate { account, profile })
            .await
            .map_err(Self::map_error)?;
        info!(user = %id, "User registered");
        self.notifications
            .dispatch(Notification::ActivationRequested { user: id, email });
        Ok(id)
    }

    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!(?update, "Sending request");
        let user = self
            .inner
            .update(id, update)
            .await
            .map_err(Self::map_error)?;
        self.notifications
            .dispatch(Notification::ProfileUpdated { user: id });
        Ok(user)
    }

    /// Re-sends the activation notification for an unverified email.
    #[instrument(skip(self))]
    pub async fn request_verification(&self, id: UserId) -> Result<(), UserError> {
        let user = self
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        if user.email_verified {
            return Err(UserError::AlreadyVerified(id));
        }
        self.notifications.dispatch(Notification::ActivationRequested {
            user: id,
            email: user.email,
        });
        Ok(())
    }

    /// Marks the user's email verified. Verifying twice is harmless.
    #[instrument(skip(self))]
    pub async fn verify_email(&self, id: UserId) -> Result<(), UserError> {
        match self.action(id, UserAction::VerifyEmail).await? {
            UserActionResult::Verified { already_verified } => {
                debug!(already_verified, "Email verified");
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        // Same folding as the username uniqueness key.
        let username = username.trim().to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|user| user.username.to_lowercase() == username))
    }

    /// Verified customers, optionally only buyers or only vendors, in id order.
    #[instrument(skip(self))]
    pub async fn list_customers(
        &self,
        user_type: Option<CustomerType>,
        page: PageRequest,
    ) -> Result<Page<User>, UserError> {
        let customers = self
            .list()
            .await?
            .into_iter()
            .filter(|user| user.email_verified)
            .filter(|user| match (user.customer_type(), user_type) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(actual), Some(wanted)) => actual == wanted,
            })
            .collect();
        Ok(Page::paginate(customers, page))
    }

    /// Folds a new rating into the vendor's average.
    #[instrument(skip(self))]
    pub async fn record_rating(&self, vendor: UserId, rating: Rating) -> Result<VendorRating, UserError> {
        self.rating_action(vendor, UserAction::RecordRating(rating)).await
    }

    /// Removes a rating from the vendor's average.
    #[instrument(skip(self))]
    pub async fn revert_rating(&self, vendor: UserId, rating: Rating) -> Result<VendorRating, UserError> {
        self.rating_action(vendor, UserAction::RevertRating(rating)).await
    }

    async fn rating_action(&self, vendor: UserId, action: UserAction) -> Result<VendorRating, UserError> {
        match self.action(vendor, action).await? {
            UserActionResult::Rating(rating) => {
                info!(%vendor, average = %rating.average, count = rating.count, "Vendor rating updated");
                Ok(rating)
            }
            other => Err(unexpected(other)),
        }
    }

    async fn action(&self, id: UserId, action: UserAction) -> Result<UserActionResult, UserError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: UserActionResult) -> UserError {
    UserError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
