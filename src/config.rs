//! Runtime configuration for the storefront actors.
//!
//! Every setting has a default and can be overridden from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `STOREFRONT_MAILBOX_CAPACITY` | [`StorefrontConfig::mailbox_capacity`] | 32 |
//! | `STOREFRONT_NOTIFICATION_CAPACITY` | [`StorefrontConfig::notification_capacity`] | 256 |
//! | `STOREFRONT_PAGE_SIZE` | [`StorefrontConfig::default_page_size`] | 20 |

use crate::model::{PageRequest, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAILBOX_CAPACITY_VAR: &str = "STOREFRONT_MAILBOX_CAPACITY";
pub const NOTIFICATION_CAPACITY_VAR: &str = "STOREFRONT_NOTIFICATION_CAPACITY";
pub const PAGE_SIZE_VAR: &str = "STOREFRONT_PAGE_SIZE";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse {var}={value:?}: expected a positive integer")]
    ParseError { var: &'static str, value: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Mailbox size of every resource actor. Senders wait when it is full.
    pub mailbox_capacity: usize,
    /// Queue size of the notification worker. Overflow is dropped, not awaited.
    pub notification_capacity: usize,
    /// Page size used when a caller does not pick one.
    pub default_page_size: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            notification_capacity: 256,
            default_page_size: 20,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by any `STOREFRONT_*` variables that are set.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is not a number or the result fails [`validate`](Self::validate).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &'static str, default: usize| -> Result<usize, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) => value.trim().parse().map_err(|_| ConfigError::ParseError { var, value }),
            }
        };

        let defaults = Self::default();
        let config = Self {
            mailbox_capacity: read(MAILBOX_CAPACITY_VAR, defaults.mailbox_capacity)?,
            notification_capacity: read(NOTIFICATION_CAPACITY_VAR, defaults.notification_capacity)?,
            default_page_size: read(PAGE_SIZE_VAR, defaults.default_page_size)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns error if a capacity is zero or the page size is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::ValidationError("mailbox_capacity must be > 0".into()));
        }
        if self.notification_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "notification_capacity must be > 0".into(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.default_page_size) {
            return Err(ConfigError::ValidationError(format!(
                "default_page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// The first page at the default size.
    pub fn first_page(&self) -> PageRequest {
        PageRequest::first(self.default_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[(PAGE_SIZE_VAR, " 50 ")])).unwrap();
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.mailbox_capacity, StorefrontConfig::default().mailbox_capacity);
    }

    #[test]
    fn rejects_garbage_and_out_of_range_values() {
        let err = StorefrontConfig::from_lookup(lookup(&[(MAILBOX_CAPACITY_VAR, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ParseError {
                var: MAILBOX_CAPACITY_VAR,
                value: "lots".into()
            }
        );

        assert!(StorefrontConfig::from_lookup(lookup(&[(NOTIFICATION_CAPACITY_VAR, "0")])).is_err());
        assert!(StorefrontConfig::default().with_default_page_size(MAX_PAGE_SIZE + 1).validate().is_err());
        assert!(StorefrontConfig::default().with_mailbox_capacity(0).validate().is_err());
    }
}
