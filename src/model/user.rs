/// Represents a registered user: a customer (buyer or vendor) or an in-house employee.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
/// - Custom actions ([`UserAction`](crate::user_actor::UserAction))
use crate::model::{UserId, VendorRating};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Whether a customer buys or sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Vendor,
    #[default]
    Buyer,
}

/// Profile for external users.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct CustomerProfile {
    pub user_type: CustomerType,
    pub store_address: Option<String>,
    #[validate(url, length(max = 255))]
    pub store_url: Option<String>,
}

/// Profile for in-house users. Holding one makes the user staff.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct EmployeeProfile {
    pub skills: Vec<String>,
    #[validate(length(max = 255))]
    pub department: Option<String>,
    #[validate(length(max = 255))]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Profile {
    Customer(CustomerProfile),
    Employee(EmployeeProfile),
}

impl Profile {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Profile::Customer(profile) => profile.validate(),
            Profile::Employee(profile) => profile.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub gender: Option<Gender>,
    pub bio: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub email_verified: bool,
    pub rating: VendorRating,
    pub profile: Profile,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn is_staff(&self) -> bool {
        matches!(self.profile, Profile::Employee(_))
    }

    pub fn customer_type(&self) -> Option<CustomerType> {
        match &self.profile {
            Profile::Customer(profile) => Some(profile.user_type),
            Profile::Employee(_) => None,
        }
    }

    pub fn avg_rating(&self) -> Decimal {
        self.rating.average
    }
}

/// Account fields shared by customer and employee registration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct AccountDetails {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub gender: Option<Gender>,
    pub bio: String,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 15))]
    pub phone: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
}

impl AccountDetails {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub account: AccountDetails,
    pub profile: Profile,
}

/// Payload for updating a user's profile. `None` leaves a field unchanged.
///
/// At most one of `customer` / `employee` may be set, and it must match the
/// kind of account being updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(email)]
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 15))]
    pub phone: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[validate(nested)]
    pub customer: Option<CustomerProfile>,
    #[validate(nested)]
    pub employee: Option<EmployeeProfile>,
}

/// Lower-cases the domain part of an address, leaving the local part alone.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}
