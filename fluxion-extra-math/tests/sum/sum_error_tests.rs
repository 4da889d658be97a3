// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_core::{FluxionError, StreamItem};
use fluxion_extra_math::prelude::*;
use fluxion_extra_test_utils::{
    sequence_of, test_channel_with_errors, upstream_failure, ErrorInjectingStream,
    StepVerifierExt, TestError,
};
use futures::stream;

#[tokio::test]
async fn test_sum_propagates_upstream_error_without_partial_result() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Value(2))?;
    tx.send(StreamItem::Error(upstream_failure("sensor offline")))?;
    tx.send(StreamItem::Value(3))?;

    // Act & Assert
    stream
        .sum_as_i64()
        .test()
        .verify_error_of::<TestError>()
        .await;

    Ok(())
}

#[tokio::test]
async fn test_sum_completes_after_error() -> anyhow::Result<()> {
    // Arrange
    let source = ErrorInjectingStream::new(stream::iter([1.0_f64, 2.0, 3.0]), 1);

    // Act & Assert
    source
        .sum_as_f64()
        .test()
        .verify_error_matches(|e| e.downcast_user_error() == Some(&TestError::Injected))
        .await;

    Ok(())
}

#[tokio::test]
async fn test_sum_as_big_int_rejects_nan() -> anyhow::Result<()> {
    // Act
    let result = sequence_of([1.0_f64, f64::NAN]).sum_as_big_int().await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::InvalidNumber { value, kind }) if value == "NaN" && kind == "BigInteger"
    ));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_big_decimal_rejects_infinity() -> anyhow::Result<()> {
    // Act
    let result = sequence_of([f32::INFINITY]).sum_as_big_decimal().await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::InvalidNumber { kind, .. }) if kind == "BigDecimal"
    ));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_f64_keeps_non_finite_values() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([1.0_f64, f64::INFINITY]).sum_as_f64().await?;

    // Assert
    assert_eq!(total, Some(f64::INFINITY));

    Ok(())
}
