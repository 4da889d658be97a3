// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Backoff configuration and the validated, shareable policy built from it.
//!
//! A [`BackoffPolicy`] is immutable once built. Every subscription of a
//! retry or repeat operator draws its delays from its own
//! [`BackoffSchedule`], so one policy can be reused across any number of
//! pipelines.
//!
//! ```rust
//! use fluxion_extra_retry::BackoffPolicy;
//! use std::time::Duration;
//!
//! let policy = BackoffPolicy::exponential(
//!     4,
//!     Duration::from_millis(100),
//!     Some(Duration::from_millis(500)),
//! )
//! .unwrap();
//!
//! let delays: Vec<_> = policy.schedule().map(|d| d.as_millis()).collect();
//! assert_eq!(delays, [100, 200, 400, 500]);
//! ```

use crate::schedule::{BackoffSchedule, RetryContext};
use core::fmt;
use core::time::Duration;
use fluxion_extra_core::{FluxionError, Result};
use std::sync::Arc;

/// How delays evolve between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackoffShape {
    /// Every attempt waits `first_delay`.
    Fixed,
    /// Attempt `n` waits `first_delay * 2^(n-1)`, capped at `max_delay`.
    #[default]
    Exponential,
    /// Every attempt waits a uniform draw from `[first_delay, max_delay]`.
    RandomJitter,
}

/// Plain configuration for a [`BackoffPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffConfig {
    /// Retries (or repetitions) allowed after the first subscription.
    pub max_attempts: u64,
    pub first_delay: Duration,
    /// Upper bound on any delay. Required for [`BackoffShape::RandomJitter`].
    pub max_delay: Option<Duration>,
    pub shape: BackoffShape,
    /// Scales exponential delays by a uniform factor in `[0.5, 1.0]`.
    pub jitter: bool,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            first_delay: Duration::from_millis(100),
            max_delay: None,
            shape: BackoffShape::Exponential,
            jitter: false,
        }
    }
}

/// Callback invoked before each backoff wait.
pub type AttemptHook = Arc<dyn Fn(&RetryContext<'_>) + Send + Sync>;

/// Decides whether an error is retried. Rejected errors pass through.
pub type RetryPredicate = Arc<dyn Fn(&FluxionError) -> bool + Send + Sync>;

/// A validated backoff configuration plus its optional hooks.
#[derive(Clone)]
pub struct BackoffPolicy {
    config: BackoffConfig,
    seed: Option<u64>,
    on_attempt: Option<AttemptHook>,
    retry_if: Option<RetryPredicate>,
}

impl BackoffPolicy {
    /// Waits `delay` before each of `max_attempts` attempts.
    pub fn fixed(max_attempts: u64, delay: Duration) -> Result<Self> {
        Self::from_config(BackoffConfig {
            max_attempts,
            first_delay: delay,
            max_delay: None,
            shape: BackoffShape::Fixed,
            jitter: false,
        })
    }

    /// Doubles the delay from `first` on each attempt, capped at `max` when given.
    pub fn exponential(max_attempts: u64, first: Duration, max: Option<Duration>) -> Result<Self> {
        Self::from_config(BackoffConfig {
            max_attempts,
            first_delay: first,
            max_delay: max,
            shape: BackoffShape::Exponential,
            jitter: false,
        })
    }

    /// Draws every delay uniformly from `[first, max]`.
    pub fn random(max_attempts: u64, first: Duration, max: Duration) -> Result<Self> {
        Self::from_config(BackoffConfig {
            max_attempts,
            first_delay: first,
            max_delay: Some(max),
            shape: BackoffShape::RandomJitter,
            jitter: false,
        })
    }

    /// Validates `config`.
    ///
    /// # Errors
    ///
    /// [`FluxionError::InvalidConfiguration`] when `max_attempts` is zero,
    /// when `max_delay` is below `first_delay`, or when a random shape has no
    /// `max_delay`.
    pub fn from_config(config: BackoffConfig) -> Result<Self> {
        if config.max_attempts == 0 {
            return Err(FluxionError::invalid_configuration(
                "max_attempts must be at least 1",
            ));
        }
        match (config.shape, config.max_delay) {
            (_, Some(max)) if max < config.first_delay => {
                return Err(FluxionError::invalid_configuration(format!(
                    "max_delay {max:?} is below first_delay {:?}",
                    config.first_delay
                )));
            }
            (BackoffShape::RandomJitter, None) => {
                return Err(FluxionError::invalid_configuration(
                    "random backoff requires a max_delay",
                ));
            }
            _ => {}
        }

        Ok(Self {
            config,
            seed: None,
            on_attempt: None,
            retry_if: None,
        })
    }

    #[must_use]
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.config.jitter = jitter;
        self
    }

    /// Makes random draws reproducible. Each subscription restarts from `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Registers a callback run with the attempt number, delay and cause
    /// before each wait.
    #[must_use]
    pub fn on_attempt<F>(mut self, hook: F) -> Self
    where
        F: Fn(&RetryContext<'_>) + Send + Sync + 'static,
    {
        self.on_attempt = Some(Arc::new(hook));
        self
    }

    /// Retries only errors accepted by `predicate`.
    #[must_use]
    pub fn retry_if<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&FluxionError) -> bool + Send + Sync + 'static,
    {
        self.retry_if = Some(Arc::new(predicate));
        self
    }

    #[must_use]
    pub fn config(&self) -> &BackoffConfig {
        &self.config
    }

    /// A fresh delay sequence for one subscription.
    #[must_use]
    pub fn schedule(&self) -> BackoffSchedule {
        BackoffSchedule::new(self.config, self.seed)
    }

    pub(crate) fn accepts(&self, error: &FluxionError) -> bool {
        self.retry_if
            .as_ref()
            .map_or(true, |predicate| predicate(error))
    }

    pub(crate) fn notify(&self, context: &RetryContext<'_>) {
        if let Some(hook) = &self.on_attempt {
            hook(context);
        }
    }
}

impl fmt::Debug for BackoffPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackoffPolicy")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("on_attempt", &self.on_attempt.is_some())
            .field("retry_if", &self.retry_if.is_some())
            .finish()
    }
}
