// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_core::{FluxionError, StreamItem};
use fluxion_extra_retry::prelude::*;
use fluxion_extra_test_utils::{
    ErrorInjectingStream, StepVerifierExt, SubscriptionCounter, TestError,
};
use futures::{stream, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn failing_after_two() -> ErrorInjectingStream<stream::Iter<std::ops::Range<i32>>> {
    ErrorInjectingStream::new(stream::iter(0..2), 2)
}

#[tokio::test(start_paused = true)]
async fn test_retry_exponential_backoff_replays_and_exhausts() -> anyhow::Result<()> {
    // Arrange
    let delays = Arc::new(Mutex::new(Vec::new()));
    let recorded = delays.clone();
    let policy = BackoffPolicy::exponential(4, ms(100), Some(ms(500)))?
        .on_attempt(move |context| recorded.lock().unwrap().push(context.delay));

    // Act
    let error = failing_after_two
        .retry_backoff(policy)
        .test()
        .expect_next_values([0, 1])
        .expect_no_event(ms(50))
        .expect_next_values([0, 1])
        .expect_no_event(ms(150))
        .expect_next_values([0, 1])
        .expect_no_event(ms(250))
        .expect_next_values([0, 1])
        .expect_no_event(ms(450))
        .expect_next_values([0, 1])
        .verify_error()
        .await;

    // Assert
    assert!(matches!(
        error,
        FluxionError::RetryExhausted { attempts: 4, ref source }
            if source.downcast_user_error::<TestError>() == Some(&TestError::Injected)
    ));
    assert_eq!(*delays.lock().unwrap(), [100, 200, 400, 500].map(ms));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_waits_full_delay_before_resubscribing() -> anyhow::Result<()> {
    // Arrange
    let policy = BackoffPolicy::fixed(1, ms(300))?;

    // Act & Assert
    failing_after_two
        .retry_backoff(policy)
        .test()
        .expect_next_values([0, 1])
        .expect_no_event(ms(299))
        .expect_next(0)
        .expect_next(1)
        .verify_error_matches(|error| matches!(error, FluxionError::RetryExhausted { .. }))
        .await;

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_random_backoff_calls_hook_for_each_attempt() -> anyhow::Result<()> {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let observed = calls.clone();
    let policy = BackoffPolicy::random(4, ms(100), ms(2000))?.on_attempt(move |context| {
        assert!(context.delay >= ms(100) && context.delay <= ms(2000));
        assert!(context.error.is_some());
        observed.fetch_add(1, Ordering::SeqCst);
    });

    // Act
    let items: Vec<_> = failing_after_two.retry_backoff(policy).collect().await;

    // Assert
    let values: Vec<_> = items.iter().filter_map(|item| item.clone().ok()).collect();
    assert_eq!(values, [0, 1, 0, 1, 0, 1, 0, 1, 0, 1]);
    assert!(matches!(
        items.last(),
        Some(StreamItem::Error(FluxionError::RetryExhausted { attempts: 4, .. }))
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 4);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_hook_sees_attempt_numbers_in_order() -> anyhow::Result<()> {
    // Arrange
    let attempts = Arc::new(Mutex::new(Vec::new()));
    let recorded = attempts.clone();
    let policy = BackoffPolicy::fixed(3, ms(10))?
        .on_attempt(move |context| recorded.lock().unwrap().push(context.attempt));

    // Act
    let _: Vec<_> = failing_after_two.retry_backoff(policy).collect().await;

    // Assert
    assert_eq!(*attempts.lock().unwrap(), [1, 2, 3]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_stops_once_upstream_succeeds() -> anyhow::Result<()> {
    // Arrange
    let counter = SubscriptionCounter::new();
    let subscriptions = counter.clone();
    let factory = move || {
        let fail_at = if subscriptions.subscribe() < 2 { 1 } else { usize::MAX };
        ErrorInjectingStream::new(stream::iter([7, 8]), fail_at)
    };
    let policy = BackoffPolicy::exponential(5, ms(100), None)?;

    // Act & Assert
    factory
        .retry_backoff(policy)
        .test()
        .expect_next_values([7, 7, 7, 8])
        .verify_complete()
        .await;
    assert_eq!(counter.count(), 3);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_subscribes_lazily() -> anyhow::Result<()> {
    // Arrange
    let counter = SubscriptionCounter::new();
    let subscriptions = counter.clone();
    let policy = BackoffPolicy::fixed(1, ms(10))?;

    // Act
    let retried = (move || {
        subscriptions.subscribe();
        stream::iter([StreamItem::Value(1)])
    })
    .retry_backoff(policy);

    // Assert
    assert_eq!(counter.count(), 0);
    retried.test().expect_next(1).verify_complete().await;
    assert_eq!(counter.count(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_with_explicit_timer() -> anyhow::Result<()> {
    // Arrange
    let policy = BackoffPolicy::fixed(2, ms(20))?;

    // Act & Assert
    failing_after_two
        .retry_backoff_with_timer(policy, fluxion_extra_retry::TokioTimer)
        .test()
        .expect_next_count(6)
        .verify_error_matches(|error| {
            matches!(error, FluxionError::RetryExhausted { attempts: 2, .. })
        })
        .await;

    Ok(())
}
