// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_core::{single, FluxionError};

#[tokio::test]
async fn test_logical_or_propagates_left_error() -> anyhow::Result<()> {
    // Arrange
    let left = single::error::<bool>(FluxionError::stream_error("left failed"));

    // Act
    let result = left.logical_or(single::just(true)).await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::StreamProcessingError { context }) if context == "left failed"
    ));

    Ok(())
}

#[tokio::test]
async fn test_logical_and_propagates_right_error() -> anyhow::Result<()> {
    // Arrange
    let right = single::error::<bool>(FluxionError::stream_error("right failed"));

    // Act
    let result = single::just(true).logical_and(right).await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::StreamProcessingError { context }) if context == "right failed"
    ));

    Ok(())
}

#[tokio::test]
async fn test_logical_not_propagates_error() -> anyhow::Result<()> {
    // Act
    let result = (!single::error::<bool>(FluxionError::stream_error("nope"))).await;

    // Assert
    assert!(result.is_err());

    Ok(())
}
