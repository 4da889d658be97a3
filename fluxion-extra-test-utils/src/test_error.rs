// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_extra_core::FluxionError;

/// Failures raised by test upstreams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("upstream failed: {0}")]
    Upstream(String),
    #[error("injected test error")]
    Injected,
}

/// A user error wrapping [`TestError::Upstream`].
pub fn upstream_failure(message: impl Into<String>) -> FluxionError {
    FluxionError::user_error(TestError::Upstream(message.into()))
}
