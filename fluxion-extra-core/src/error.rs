// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for fluxion-extra operators.
//!
//! Every operator signals failure through a [`FluxionError`] carried by
//! [`StreamItem::Error`](crate::StreamItem::Error). The variants below cover
//! upstream failures, numeric conversion problems and exhausted retry budgets.
//!
//! # Examples
//!
//! ```
//! use fluxion_extra_core::{FluxionError, Result};
//!
//! fn parse_kind(name: &str) -> Result<()> {
//!     Err(FluxionError::conversion_unsupported(name))
//! }
//!
//! assert!(parse_kind("Int16").is_err());
//! ```

/// Root error type for all fluxion-extra operations.
#[derive(Debug, thiserror::Error)]
pub enum FluxionError {
    /// Stream processing encountered an error
    ///
    /// General failure for stream operations that don't fit other categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps failures raised by upstream sequences, mappers and callbacks.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The requested numeric kind is not one of the supported result kinds
    #[error("Unsupported numeric kind: {kind}")]
    ConversionUnsupported {
        /// Name of the rejected kind
        kind: String,
    },

    /// A value has no representation in the target numeric kind
    #[error("Value {value} cannot be represented as {kind}")]
    InvalidNumber {
        /// Textual form of the offending value
        value: String,
        /// Target kind of the failed conversion
        kind: String,
    },

    /// An average was requested over zero elements
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// What was being divided
        context: String,
    },

    /// A retry policy ran out of attempts
    ///
    /// The last upstream failure is kept as the source.
    #[error("Retries exhausted after {attempts} attempts: {source}")]
    RetryExhausted {
        /// Number of retries performed before giving up
        attempts: u64,
        /// The failure that ended the last attempt
        #[source]
        source: Box<FluxionError>,
    },

    /// A policy or operator was configured with invalid parameters
    #[error("Invalid configuration: {context}")]
    InvalidConfiguration {
        /// Which parameter was rejected and why
        context: String,
    },
}

impl FluxionError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create an unsupported-kind error carrying the kind name
    pub fn conversion_unsupported(kind: impl Into<String>) -> Self {
        Self::ConversionUnsupported { kind: kind.into() }
    }

    /// Create an error for a value that cannot be converted to `kind`
    pub fn invalid_number(value: impl ToString, kind: impl Into<String>) -> Self {
        Self::InvalidNumber {
            value: value.to_string(),
            kind: kind.into(),
        }
    }

    /// Create a division-by-zero error with the given context
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Wrap the last failure of a retry loop that ran out of attempts
    pub fn retry_exhausted(attempts: u64, source: Self) -> Self {
        Self::RetryExhausted {
            attempts,
            source: Box::new(source),
        }
    }

    /// Create a configuration error with the given context
    pub fn invalid_configuration(context: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            context: context.into(),
        }
    }

    /// Returns the wrapped user error downcast to `E`, if this is a
    /// [`FluxionError::UserError`] holding an `E`.
    #[must_use]
    pub fn downcast_user_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::UserError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Specialized Result type for fluxion-extra operations
pub type Result<T> = std::result::Result<T, FluxionError>;

/// Extension trait for converting errors into `FluxionError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoFluxionError {
    /// Convert this error into a `FluxionError`
    fn into_fluxion(self) -> FluxionError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoFluxionError for E {
    fn into_fluxion(self) -> FluxionError {
        FluxionError::user_error(self)
    }
}

impl Clone for FluxionError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed error can't be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::ConversionUnsupported { kind } => Self::ConversionUnsupported {
                kind: kind.clone(),
            },
            Self::InvalidNumber { value, kind } => Self::InvalidNumber {
                value: value.clone(),
                kind: kind.clone(),
            },
            Self::DivisionByZero { context } => Self::DivisionByZero {
                context: context.clone(),
            },
            Self::RetryExhausted { attempts, source } => Self::RetryExhausted {
                attempts: *attempts,
                source: source.clone(),
            },
            Self::InvalidConfiguration { context } => Self::InvalidConfiguration {
                context: context.clone(),
            },
        }
    }
}
