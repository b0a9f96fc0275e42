// ABOUTME: Structured error types for recipe provider operations
// ABOUTME: Distinguishes transport, status, parse, and configuration failures per provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while talking to an external recipe provider.
///
/// Every variant names the provider so a fallback message can tell the user
/// which data source failed.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Provider tag
        provider: String,
        /// HTTP status code returned by the provider
        status_code: u16,
        /// Error message
        message: String,
        /// Whether a later retry may succeed
        retryable: bool,
    },

    /// The request never produced a response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The response body could not be decoded
    #[error("Failed to parse {provider} response field '{field}': {source}")]
    ParseError {
        /// Provider tag
        provider: String,
        /// Payload that failed to parse
        field: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The provider has no record for the requested id
    #[error("{resource_type} '{resource_id}' not found on {provider}")]
    NotFound {
        /// Provider tag
        provider: String,
        /// Kind of resource requested
        resource_type: String,
        /// Requested id
        resource_id: String,
    },

    /// The provider rejected our credentials
    #[error("Authentication with {provider} failed: {reason}")]
    AuthenticationFailed {
        /// Provider tag
        provider: String,
        /// Reason reported by the provider
        reason: String,
    },

    /// The provider quota was exhausted
    #[error("{provider} {limit_type} exceeded, retry after {retry_after_secs}s")]
    RateLimitExceeded {
        /// Provider tag
        provider: String,
        /// Suggested wait before retrying
        retry_after_secs: u64,
        /// Which limit was hit
        limit_type: String,
    },

    /// The provider client is missing required configuration
    #[error("{provider} is not configured: {details}")]
    ConfigurationError {
        /// Provider tag
        provider: String,
        /// What is missing
        details: String,
    },
}

impl ProviderError {
    /// Whether retrying the same call later might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError { retryable, .. } => *retryable,
            Self::NetworkError(_) | Self::RateLimitExceeded { .. } => true,
            Self::ParseError { .. }
            | Self::NotFound { .. }
            | Self::AuthenticationFailed { .. }
            | Self::ConfigurationError { .. } => false,
        }
    }
}

/// Result alias for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;
