// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{BackoffConfig, BackoffShape};
use core::time::Duration;
use fastrand::Rng;
use fluxion_extra_core::FluxionError;

/// What an attempt hook observes before a backoff wait.
#[derive(Debug, Clone, Copy)]
pub struct RetryContext<'a> {
    /// 1-based index of the upcoming retry or repetition.
    pub attempt: u64,
    pub delay: Duration,
    /// The triggering failure. `None` for repetitions.
    pub error: Option<&'a FluxionError>,
}

/// The delays of one subscription, exactly `max_attempts` of them.
///
/// The base delay of attempt `n` depends only on `n`, so jitter never feeds
/// back into later delays.
#[derive(Debug, Clone)]
pub struct BackoffSchedule {
    config: BackoffConfig,
    attempt: u64,
    rng: Rng,
}

impl BackoffSchedule {
    pub(crate) fn new(config: BackoffConfig, seed: Option<u64>) -> Self {
        Self {
            config,
            attempt: 0,
            rng: seed.map_or_else(Rng::new, Rng::with_seed),
        }
    }

    fn delay_for(&mut self, attempt: u64) -> Duration {
        let BackoffConfig {
            first_delay,
            max_delay,
            shape,
            jitter,
            ..
        } = self.config;

        match shape {
            BackoffShape::Fixed => first_delay,
            BackoffShape::Exponential => {
                let base = doubled(first_delay, attempt);
                let base = max_delay.map_or(base, |max| base.min(max));
                if jitter {
                    equal_jitter(&mut self.rng, base)
                } else {
                    base
                }
            }
            BackoffShape::RandomJitter => {
                let max = max_delay.unwrap_or(first_delay);
                first_delay + Duration::from_nanos(self.rng.u64(0..=nanos(max - first_delay)))
            }
        }
    }
}

impl Iterator for BackoffSchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.attempt >= self.config.max_attempts {
            return None;
        }
        self.attempt += 1;
        Some(self.delay_for(self.attempt))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.max_attempts - self.attempt;
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BackoffSchedule {}

/// `first * 2^(attempt - 1)`, saturating at `Duration::MAX`.
fn doubled(first: Duration, attempt: u64) -> Duration {
    u32::try_from(attempt.saturating_sub(1))
        .ok()
        .and_then(|exponent| 2_u32.checked_pow(exponent))
        .and_then(|factor| first.checked_mul(factor))
        .unwrap_or(Duration::MAX)
}

/// Uniform in `[delay / 2, delay]`.
fn equal_jitter(rng: &mut Rng, delay: Duration) -> Duration {
    let total = nanos(delay);
    Duration::from_nanos(rng.u64(total / 2..=total))
}

fn nanos(delay: Duration) -> u64 {
    u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX)
}
