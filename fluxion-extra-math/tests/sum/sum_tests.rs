// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_math::prelude::*;
use fluxion_extra_test_utils::{person::people, sequence_of, test_channel};
use std::str::FromStr;

#[tokio::test]
async fn test_sum_of_ints() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([1, 2, 3]).sum().await?;

    // Assert
    assert_eq!(total, Some(6));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_i32_truncates_each_float() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([3.5_f32, 1.9]).sum_as_i32().await?;

    // Assert
    assert_eq!(total, Some(4));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_i64_of_doubles() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([3.5_f64, 1.5]).sum_as_i64().await?;

    // Assert
    assert_eq!(total, Some(4));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_f32_of_longs_loses_precision() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([30_000_000_000_i64, 20_000_000_000])
        .sum_as_f32()
        .await?;

    // Assert
    assert_eq!(total, Some(50_000_003_072.0_f32));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_f64_of_mixed_widths() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([1_u8, 2, 3]).sum_as_f64().await?;

    // Assert
    assert_eq!(total, Some(6.0));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_big_int_truncates_each_float() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([3.9_f64, 1.9]).sum_as_big_int().await?;

    // Assert
    assert_eq!(total, Some(BigInt::from(4)));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_big_decimal_keeps_decimal_digits() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([3.5_f32, 1.99]).sum_as_big_decimal().await?;

    // Assert
    assert_eq!(total, Some(BigDecimal::from_str("5.49")?));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_big_int_beyond_i64() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([i64::MAX, i64::MAX]).sum_as_big_int().await?;

    // Assert
    assert_eq!(total, Some(BigInt::from(i64::MAX) * 2));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_i32_wraps_on_overflow() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([2_000_000_000_i64, 2_000_000_000])
        .sum_as_i32()
        .await?;

    // Assert
    assert_eq!(total, Some(2_000_000_000_i32.wrapping_add(2_000_000_000)));
    assert!(total.is_some_and(|t| t < 0));

    Ok(())
}

#[tokio::test]
async fn test_sum_all_infers_kind_from_result_type() -> anyhow::Result<()> {
    // Act
    let as_long: Option<i64> = sequence_of([1_i32, 2, 3]).sum_all().await?;
    let as_double: Option<f64> = sequence_of([1_i32, 2, 3]).sum_all().await?;

    // Assert
    assert_eq!(as_long, Some(6));
    assert_eq!(as_double, Some(6.0));

    Ok(())
}

#[tokio::test]
async fn test_sum_of_mapper_infers_kind_from_mapper() -> anyhow::Result<()> {
    // Act
    let total = sequence_of(people())
        .sum_of(|person| i64::from(person.age))
        .await?;

    // Assert
    assert_eq!(total, Some(99_i64));

    Ok(())
}

#[tokio::test]
async fn test_sum_by_converts_mapper_output() -> anyhow::Result<()> {
    // Act
    let total = sequence_of(people())
        .sum_by::<BigDecimal, _, _>(|person| person.age)
        .await?;

    // Assert
    assert_eq!(total, Some(BigDecimal::from(99_u64)));

    Ok(())
}

#[tokio::test]
async fn test_sum_of_empty_sequence_is_zero() -> anyhow::Result<()> {
    // Act
    let ints = sequence_of(Vec::<i32>::new()).sum_as_i32().await?;
    let decimals = sequence_of(Vec::<f64>::new()).sum_as_big_decimal().await?;

    // Assert
    assert_eq!(ints, Some(0));
    assert_eq!(decimals, Some(BigDecimal::from(0_i64)));

    Ok(())
}

#[tokio::test]
async fn test_sum_waits_for_upstream_completion() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i64>();
    let pending = tokio::spawn(async move { stream.sum_as_i64().await });

    // Act
    tx.send(40)?;
    tx.send(2)?;
    tokio::task::yield_now().await;
    assert!(!pending.is_finished());
    drop(tx);

    // Assert
    assert_eq!(pending.await??, Some(42));

    Ok(())
}
