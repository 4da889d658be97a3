// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_core::StreamItem;
use fluxion_extra_math::prelude::*;
use fluxion_extra_test_utils::{
    sequence_of, test_channel_with_errors, upstream_failure, StepVerifierExt, TestError,
};
use std::cmp::Ordering;

fn by_len(left: &&str, right: &&str) -> Ordering {
    left.len().cmp(&right.len())
}

#[tokio::test]
async fn test_min_and_max_of_floats() -> anyhow::Result<()> {
    // Arrange
    let values = [12.0_f64, 8.1, 16.0, 8.2];

    // Act
    let min = sequence_of(values).min().await?;
    let max = sequence_of(values).max().await?;

    // Assert
    assert_eq!(min, Some(8.1));
    assert_eq!(max, Some(16.0));

    Ok(())
}

#[tokio::test]
async fn test_min_and_max_of_strings() -> anyhow::Result<()> {
    // Arrange
    let words = ["AA", "A", "BB", "B", "AB"];

    // Act
    let min = sequence_of(words).min().await?;
    let max = sequence_of(words).max().await?;

    // Assert
    assert_eq!(min, Some("A"));
    assert_eq!(max, Some("BB"));

    Ok(())
}

#[tokio::test]
async fn test_ties_keep_the_earliest_element() -> anyhow::Result<()> {
    // Arrange
    let words = ["bb", "aa", "c", "dd", "e"];

    // Act
    let shortest = sequence_of(words).min_with(by_len).await?;
    let longest = sequence_of(words).max_with(by_len).await?;

    // Assert
    assert_eq!(shortest, Some("c"));
    assert_eq!(longest, Some("bb"));

    Ok(())
}

#[tokio::test]
async fn test_extremum_of_empty_sequence_has_no_value() -> anyhow::Result<()> {
    // Act
    let min = sequence_of(Vec::<i32>::new()).min().await?;
    let max = sequence_of(Vec::<i32>::new()).max().await?;

    // Assert
    assert_eq!(min, None);
    assert_eq!(max, None);

    Ok(())
}

#[tokio::test]
async fn test_extremum_of_empty_sequence_completes_without_emission() -> anyhow::Result<()> {
    // Act & Assert
    sequence_of(Vec::<i32>::new())
        .max()
        .test()
        .verify_complete()
        .await;

    Ok(())
}

#[tokio::test]
async fn test_min_propagates_upstream_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    tx.send(StreamItem::Value(3))?;
    tx.send(StreamItem::Error(upstream_failure("broken")))?;
    tx.send(StreamItem::Value(1))?;

    // Act & Assert
    stream.min().test().verify_error_of::<TestError>().await;

    Ok(())
}
