// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_core::{FluxionError, StreamItem};
use fluxion_extra_math::prelude::*;
use fluxion_extra_test_utils::sequence_of;
use futures::stream;
use std::str::FromStr;
use std::task::Poll;

#[tokio::test]
async fn test_sum_as_every_kind() -> anyhow::Result<()> {
    // Arrange
    let expected = [
        (NumericKind::Int32, Number::I32(4)),
        (NumericKind::Int64, Number::I64(4)),
        (NumericKind::Float32, Number::F32(5.0)),
        (NumericKind::Float64, Number::F64(5.0)),
        (NumericKind::BigInteger, Number::BigInt(BigInt::from(4))),
        (NumericKind::BigDecimal, Number::BigDecimal(BigDecimal::from(5_i64))),
    ];

    for (kind, expected) in expected {
        // Act
        let total = sequence_of([3.5_f64, 1.5]).sum_as(kind).await?;

        // Assert
        assert_eq!(total, Some(expected), "{kind}");
    }

    Ok(())
}

#[tokio::test]
async fn test_sum_as_every_kind_of_empty_is_zero() -> anyhow::Result<()> {
    for kind in NumericKind::ALL {
        // Act
        let total = sequence_of(Vec::<i32>::new()).sum_as(kind).await?;

        // Assert
        let is_zero = match total {
            Some(Number::I32(v)) => v == 0,
            Some(Number::I64(v)) => v == 0,
            Some(Number::F32(v)) => v == 0.0,
            Some(Number::F64(v)) => v == 0.0,
            Some(Number::BigInt(v)) => v == BigInt::from(0),
            Some(Number::BigDecimal(v)) => v == BigDecimal::from(0_i64),
            other => panic!("unexpected total {other:?} for {kind}"),
        };
        assert!(is_zero, "{kind}");
    }

    Ok(())
}

#[tokio::test]
async fn test_average_as_every_kind_of_empty_fails() -> anyhow::Result<()> {
    for kind in NumericKind::ALL {
        // Act
        let result = sequence_of(Vec::<i32>::new()).average_as(kind).await;

        // Assert
        assert!(
            matches!(result, Err(FluxionError::DivisionByZero { .. })),
            "{kind}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_average_as_big_decimal() -> anyhow::Result<()> {
    // Act
    let average = sequence_of([10, 11, 11, 11])
        .average_as(NumericKind::BigDecimal)
        .await?;

    // Assert
    assert_eq!(
        average,
        Some(Number::BigDecimal(BigDecimal::from_str("10.75")?))
    );

    Ok(())
}

#[tokio::test]
async fn test_sum_as_named_resolves_aliases() -> anyhow::Result<()> {
    // Act
    let total = sequence_of([1_u32, 2]).sum_as_named("i64").await?;

    // Assert
    assert_eq!(total, Some(Number::I64(3)));

    Ok(())
}

#[tokio::test]
async fn test_sum_as_named_unsupported_kind_fails_without_polling_upstream() -> anyhow::Result<()>
{
    // Arrange
    let upstream = stream::poll_fn(|_| -> Poll<Option<StreamItem<i32>>> {
        panic!("upstream must not be polled")
    });

    // Act
    let result = upstream.sum_as_named("Int16").await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::ConversionUnsupported { kind }) if kind == "Int16"
    ));

    Ok(())
}

#[tokio::test]
async fn test_average_as_named_unsupported_kind() -> anyhow::Result<()> {
    // Act
    let result = sequence_of([1]).average_as_named("Decimal128").await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::ConversionUnsupported { kind }) if kind == "Decimal128"
    ));

    Ok(())
}
