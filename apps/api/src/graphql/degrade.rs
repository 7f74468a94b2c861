//! Failure policy for upstream calls made by resolvers
//!
//! Reads degrade: a failed lookup becomes `null` and a failed listing becomes
//! `[]`, logged at `warn`. Writes and chatbot computations fail with a generic
//! message, logged at `error`; upstream details never reach the client.

use async_graphql::ErrorExtensions;
use campus_service_clients::ServiceResult;

use crate::error::ApiError;

pub trait ServiceResultExt<T> {
    /// Replace a failure with the empty value (`None`, `[]`)
    fn or_degraded(self, operation: &'static str) -> T
    where
        T: Default;

    /// Replace a failure with a generic GraphQL error carrying `message`
    fn or_failure(self, message: &'static str) -> async_graphql::Result<T>;
}

impl<T> ServiceResultExt<T> for ServiceResult<T> {
    fn or_degraded(self, operation: &'static str) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|e| {
            tracing::warn!(error = %e, operation, "Upstream read failed, returning empty result");
            T::default()
        })
    }

    fn or_failure(self, message: &'static str) -> async_graphql::Result<T> {
        self.map_err(|source| {
            let err = ApiError::upstream(message, source);
            err.log();
            err.extend()
        })
    }
}
