//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity-level failures travel
//! inside [`FrameworkError::EntityError`] and are recovered by the domain
//! clients with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error for transport back to the client.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::EntityError(Box::new(error))
    }

    /// Recovers the concrete entity error `E` if this is an `EntityError` holding one.
    ///
    /// Any other variant (or an entity error of a different type) is handed back
    /// unchanged so the caller can map it.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::EntityError(inner) => inner
                .downcast::<E>()
                .map(|typed| *typed)
                .map_err(Self::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("boom {0}")]
    struct Boom(u32);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn recovers_typed_entity_error() {
        let err = FrameworkError::entity(Boom(7));
        assert_eq!(err.into_entity_error::<Boom>().unwrap(), Boom(7));
    }

    #[test]
    fn hands_back_foreign_errors() {
        let err = FrameworkError::entity(Other);
        let back = err.into_entity_error::<Boom>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let closed = FrameworkError::ActorClosed.into_entity_error::<Boom>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
