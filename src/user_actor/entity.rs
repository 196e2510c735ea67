//! [`ActorEntity`] implementation for [`User`].
//!
//! Usernames and emails are unique, compared case-insensitively. The framework
//! enforces that through [`ActorEntity::unique_keys`] on both create and update.

use super::actions::{UserAction, UserActionResult};
use super::error::UserError;
use crate::framework::ActorEntity;
use crate::model::{normalize_email, Profile, User, UserCreate, UserId, UserUpdate, VendorRating};
use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let mut account = params.account;
        account.username = account.username.trim().to_string();
        account.email = normalize_email(&account.email);
        account.validate()?;
        params.profile.validate()?;

        Ok(Self {
            id,
            username: account.username,
            email: account.email,
            gender: account.gender,
            bio: account.bio,
            date_of_birth: account.date_of_birth,
            phone: account.phone,
            address: account.address,
            country: account.country,
            email_verified: false,
            rating: VendorRating::default(),
            profile: params.profile,
            date_joined: Utc::now(),
        })
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![
            format!("username:{}", self.username.to_lowercase()),
            format!("email:{}", self.email.to_lowercase()),
        ]
    }

    /// Applies profile changes.
    ///
    /// Customer details are only accepted on customer accounts and employee
    /// details only on staff accounts. Changing the email clears its
    /// verification.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        let update = UserUpdate {
            email: update.email.as_deref().map(normalize_email),
            ..update
        };
        update.validate()?;
        match (&self.profile, &update.customer, &update.employee) {
            (_, Some(_), Some(_)) => {
                return Err(UserError::ValidationError(
                    "customer and employee details are mutually exclusive".into(),
                ))
            }
            (Profile::Employee(_), Some(_), None) => {
                return Err(UserError::Forbidden(format!(
                    "{} is a staff account and has no customer profile",
                    self.id
                )))
            }
            (Profile::Customer(_), None, Some(_)) => {
                return Err(UserError::Forbidden(format!(
                    "{} is a customer account and has no employee profile",
                    self.id
                )))
            }
            _ => {}
        }

        if let Some(email) = update.email {
            if email.to_lowercase() != self.email.to_lowercase() {
                self.email_verified = false;
            }
            self.email = email;
        }
        if let Some(gender) = update.gender {
            self.gender = Some(gender);
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(date_of_birth) = update.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(country) = update.country {
            self.country = Some(country);
        }
        if let Some(customer) = update.customer {
            self.profile = Profile::Customer(customer);
        }
        if let Some(employee) = update.employee {
            self.profile = Profile::Employee(employee);
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), UserError> {
        Err(UserError::HardDeleteForbidden(self.id))
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        _ctx: &(),
    ) -> Result<UserActionResult, UserError> {
        match action {
            UserAction::RecordRating(rating) => {
                Ok(UserActionResult::Rating(self.rating.record(rating)))
            }
            UserAction::RevertRating(rating) => {
                Ok(UserActionResult::Rating(self.rating.revert(rating)?))
            }
            UserAction::VerifyEmail => {
                let already_verified = self.email_verified;
                self.email_verified = true;
                Ok(UserActionResult::Verified { already_verified })
            }
        }
    }
}
