// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scripted expectations against a sequence.
//!
//! Steps are recorded by the builder methods and executed in order by one of
//! the terminal `verify_*` methods. A failed expectation panics with the
//! index of the step that failed.
//!
//! Under a paused tokio clock, [`StepVerifier::expect_no_event`] and
//! [`StepVerifier::then_await`] run in virtual time:
//!
//! ```rust
//! use fluxion_extra_core::StreamItem;
//! use fluxion_extra_test_utils::StepVerifierExt;
//! use futures::{stream, StreamExt};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let delayed = stream::once(async {
//!     tokio::time::sleep(Duration::from_secs(60)).await;
//!     StreamItem::Value("late")
//! });
//!
//! delayed
//!     .test()
//!     .expect_no_event(Duration::from_secs(59))
//!     .then_await(Duration::from_secs(1))
//!     .expect_next("late")
//!     .verify_complete()
//!     .await;
//! # }
//! ```

use core::fmt::Debug;
use core::pin::Pin;
use fluxion_extra_core::{FluxionError, StreamItem};
use futures::{Stream, StreamExt};
use std::time::Duration;

enum Step<T> {
    Next {
        description: String,
        check: Box<dyn FnOnce(&T) -> bool>,
    },
    NextCount(usize),
    NoEvent(Duration),
    Run(Box<dyn FnOnce()>),
    Await(Duration),
}

/// Builder of ordered expectations for one subscription to a sequence.
#[must_use = "a StepVerifier does nothing until one of its verify methods is awaited"]
pub struct StepVerifier<S, T> {
    stream: Pin<Box<S>>,
    steps: Vec<Step<T>>,
}

impl<S, T> StepVerifier<S, T>
where
    S: Stream<Item = StreamItem<T>>,
    T: Debug,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream: Box::pin(stream),
            steps: Vec::new(),
        }
    }

    /// Expects the next item to be the value `expected`.
    pub fn expect_next(mut self, expected: T) -> Self
    where
        T: PartialEq + 'static,
    {
        self.steps.push(Step::Next {
            description: format!("{expected:?}"),
            check: Box::new(move |actual| *actual == expected),
        });
        self
    }

    /// Expects the next values, in order.
    pub fn expect_next_values(self, expected: impl IntoIterator<Item = T>) -> Self
    where
        T: PartialEq + 'static,
    {
        expected
            .into_iter()
            .fold(self, |verifier, value| verifier.expect_next(value))
    }

    /// Expects the next item to be a value satisfying `predicate`.
    pub fn expect_next_matches<P>(mut self, description: &str, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + 'static,
    {
        self.steps.push(Step::Next {
            description: description.to_string(),
            check: Box::new(predicate),
        });
        self
    }

    /// Expects `count` values, whatever they are.
    pub fn expect_next_count(mut self, count: usize) -> Self {
        self.steps.push(Step::NextCount(count));
        self
    }

    /// Expects nothing (no value, error or completion) for `duration`.
    pub fn expect_no_event(mut self, duration: Duration) -> Self {
        self.steps.push(Step::NoEvent(duration));
        self
    }

    /// Runs `action` between two expectations, e.g. to feed a test channel.
    pub fn then<F>(mut self, action: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.steps.push(Step::Run(Box::new(action)));
        self
    }

    /// Advances the paused tokio clock by `duration`.
    ///
    /// # Panics
    ///
    /// When the step runs while the clock is not paused.
    pub fn then_await(mut self, duration: Duration) -> Self {
        self.steps.push(Step::Await(duration));
        self
    }

    /// Runs the steps, then expects completion.
    pub async fn verify_complete(mut self) {
        let index = self.run_steps().await;
        match self.stream.next().await {
            None => {}
            Some(item) => panic!("step {index}: expected completion, got {item:?}"),
        }
    }

    /// Runs the steps, then expects an error and returns it.
    pub async fn verify_error(mut self) -> FluxionError {
        let index = self.run_steps().await;
        match self.stream.next().await {
            Some(StreamItem::Error(error)) => error,
            Some(StreamItem::Value(value)) => {
                panic!("step {index}: expected an error, got value {value:?}")
            }
            None => panic!("step {index}: expected an error, got completion"),
        }
    }

    /// Runs the steps, then expects an error satisfying `predicate`.
    pub async fn verify_error_matches<P>(self, predicate: P)
    where
        P: FnOnce(&FluxionError) -> bool,
    {
        let error = self.verify_error().await;
        assert!(predicate(&error), "error did not match: {error:?}");
    }

    /// Runs the steps, then expects a user error of type `E`.
    pub async fn verify_error_of<E>(self)
    where
        E: std::error::Error + 'static,
    {
        let error = self.verify_error().await;
        assert!(
            error.downcast_user_error::<E>().is_some(),
            "expected a user error of type {}, got {error:?}",
            std::any::type_name::<E>()
        );
    }

    /// Runs the steps, then drops the subscription.
    pub async fn then_cancel(mut self) {
        self.run_steps().await;
    }

    async fn run_steps(&mut self) -> usize {
        let steps = std::mem::take(&mut self.steps);
        let total = steps.len();

        for (index, step) in steps.into_iter().enumerate() {
            match step {
                Step::Next { description, check } => match self.stream.next().await {
                    Some(StreamItem::Value(value)) => assert!(
                        check(&value),
                        "step {index}: expected {description}, got {value:?}"
                    ),
                    Some(StreamItem::Error(error)) => {
                        panic!("step {index}: expected {description}, got error {error:?}")
                    }
                    None => panic!("step {index}: expected {description}, got completion"),
                },
                Step::NextCount(count) => {
                    for seen in 0..count {
                        match self.stream.next().await {
                            Some(StreamItem::Value(_)) => {}
                            other => panic!(
                                "step {index}: expected {count} values, got {seen} then {other:?}"
                            ),
                        }
                    }
                }
                Step::NoEvent(duration) => {
                    if let Ok(event) = tokio::time::timeout(duration, self.stream.next()).await {
                        panic!("step {index}: expected no event for {duration:?}, got {event:?}");
                    }
                }
                Step::Run(action) => action(),
                Step::Await(duration) => tokio::time::advance(duration).await,
            }
        }

        total
    }
}

/// Starts a [`StepVerifier`] from any sequence.
pub trait StepVerifierExt<T>: Stream<Item = StreamItem<T>> + Sized {
    fn test(self) -> StepVerifier<Self, T>
    where
        T: Debug,
    {
        StepVerifier::new(self)
    }
}

impl<S, T> StepVerifierExt<T> for S where S: Stream<Item = StreamItem<T>> {}
